//! Habit domain: weekly completion grid, streaks and habit principles.
//!
//! # Invariants
//! - `completed` always has exactly seven slots aligned with [`WEEK_DAYS`].
//! - Slot 6 is treated as "today".
//! - Toggling a day recomputes `streak` as the run of trailing completed days.

use crate::model::error::{require_text, ModelError, DAYS_PER_WEEK};
use crate::model::EntityId;
use serde::{Deserialize, Serialize};

/// Slot index treated as the current day.
pub const TODAY_INDEX: usize = DAYS_PER_WEEK - 1;

/// Default daily goal target (habits completed today).
pub const DEFAULT_DAILY_GOAL_TARGET: u32 = 5;

wire_enum! {
    /// Day label for one slot of the weekly grid.
    pub enum WeekDay ("week day") {
        Mon => "Mon",
        Tue => "Tue",
        Wed => "Wed",
        Thu => "Thu",
        Fri => "Fri",
        Sat => "Sat",
        Sun => "Sun",
    }
}

/// Weekly grid order; index `i` labels `Habit::completed()[i]`.
pub const WEEK_DAYS: [WeekDay; DAYS_PER_WEEK] = [
    WeekDay::Mon,
    WeekDay::Tue,
    WeekDay::Wed,
    WeekDay::Thu,
    WeekDay::Fri,
    WeekDay::Sat,
    WeekDay::Sun,
];

wire_enum! {
    pub enum HabitCategory ("habit category") {
        Learning => "Learning",
        Wellness => "Wellness",
        Health => "Health",
        Mindfulness => "Mindfulness",
        Productivity => "Productivity",
        Other => "Other",
    }
}

/// Input for creating or replacing a habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHabit {
    pub name: String,
    pub streak: u32,
    /// Must contain exactly seven entries.
    pub completed: Vec<bool>,
    pub color: String,
    pub category: HabitCategory,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    #[serde(default = "default_target_days")]
    pub target_days_per_week: u8,
}

fn default_target_days() -> u8 {
    DAYS_PER_WEEK as u8
}

/// A habit tracked on a seven-day grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: EntityId,
    pub name: String,
    streak: u32,
    completed: [bool; DAYS_PER_WEEK],
    /// Display gradient token, e.g. `from-emerald-500 to-teal-500`.
    pub color: String,
    pub category: HabitCategory,
    pub created_at: i64,
    pub target_days_per_week: u8,
}

impl Habit {
    /// Builds a habit under a caller-provided id.
    ///
    /// The incoming `streak` is kept as-is; it reflects history beyond the
    /// visible week and is only recomputed when a day is toggled.
    ///
    /// # Errors
    /// - `InvalidWeekLength` when `completed` does not have seven entries.
    /// - `InvalidWeeklyTarget` when the target is outside `1..=7`.
    pub fn with_id(id: impl Into<EntityId>, input: NewHabit) -> Result<Self, ModelError> {
        let completed: [bool; DAYS_PER_WEEK] = input
            .completed
            .as_slice()
            .try_into()
            .map_err(|_| ModelError::InvalidWeekLength(input.completed.len()))?;
        if input.target_days_per_week == 0
            || usize::from(input.target_days_per_week) > DAYS_PER_WEEK
        {
            return Err(ModelError::InvalidWeeklyTarget(input.target_days_per_week));
        }

        Ok(Self {
            id: id.into(),
            name: require_text(input.name, "name")?,
            streak: input.streak,
            completed,
            color: input.color,
            category: input.category,
            created_at: input.created_at,
            target_days_per_week: input.target_days_per_week,
        })
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn completed(&self) -> &[bool; DAYS_PER_WEEK] {
        &self.completed
    }

    /// Flips one day slot and recomputes the streak.
    pub fn toggle_day(&mut self, day_index: usize) -> Result<(), ModelError> {
        let slot = self
            .completed
            .get_mut(day_index)
            .ok_or(ModelError::DayIndexOutOfRange(day_index))?;
        *slot = !*slot;
        self.streak = trailing_streak(&self.completed);
        Ok(())
    }

    pub fn is_completed_on(&self, day_index: usize) -> bool {
        self.completed.get(day_index).copied().unwrap_or(false)
    }

    pub fn is_completed_today(&self) -> bool {
        self.completed[TODAY_INDEX]
    }

    /// Completed days this week as a rounded percentage.
    pub fn weekly_completion_rate(&self) -> u32 {
        let done = self.completed.iter().filter(|day| **day).count();
        ((done as f64 / DAYS_PER_WEEK as f64) * 100.0).round() as u32
    }

    /// Whether this week's completions meet `target_days_per_week`.
    pub fn meets_weekly_target(&self) -> bool {
        let done = self.completed.iter().filter(|day| **day).count();
        done >= usize::from(self.target_days_per_week)
    }
}

/// Counts consecutive completed days ending at the last slot.
pub fn trailing_streak(days: &[bool]) -> u32 {
    days.iter().rev().take_while(|day| **day).count() as u32
}

/// One "atomic habits" principle shown next to the habit grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomicPrinciple {
    pub id: EntityId,
    pub order: u32,
    pub principle: String,
    pub description: String,
}

/// Aggregate numbers for the habit section header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStats {
    pub total_streak: u32,
    pub completed_today: u32,
    pub total_habits: u32,
    /// Percentage carried from historical data.
    pub success_rate: u32,
}

/// Progress towards the number of habits to finish today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyGoal {
    pub target: u32,
    pub current: u32,
}

impl DailyGoal {
    pub fn is_reached(&self) -> bool {
        self.current >= self.target
    }
}

#[cfg(test)]
mod tests {
    use super::{trailing_streak, Habit, HabitCategory, NewHabit};
    use crate::model::error::ModelError;

    fn habit(completed: Vec<bool>) -> Result<Habit, ModelError> {
        Habit::with_id(
            "1",
            NewHabit {
                name: "Exercise".to_string(),
                streak: 5,
                completed,
                color: "from-blue-500 to-cyan-500".to_string(),
                category: HabitCategory::Health,
                created_at: 0,
                target_days_per_week: 5,
            },
        )
    }

    #[test]
    fn rejects_short_week() {
        let err = habit(vec![true, false]).expect_err("two slots must be rejected");
        assert_eq!(err, ModelError::InvalidWeekLength(2));
    }

    #[test]
    fn trailing_streak_counts_from_last_slot() {
        assert_eq!(trailing_streak(&[true, true, false, true, true]), 2);
        assert_eq!(trailing_streak(&[true, true, true]), 3);
        assert_eq!(trailing_streak(&[true, false]), 0);
        assert_eq!(trailing_streak(&[]), 0);
    }

    #[test]
    fn weekly_rate_rounds_to_nearest_percent() {
        let habit = habit(vec![true, true, false, true, true, false, false]).unwrap();
        assert_eq!(habit.weekly_completion_rate(), 57);
        assert!(!habit.meets_weekly_target());
    }

    #[test]
    fn streak_kept_until_first_toggle() {
        let mut habit = habit(vec![true, true, false, true, true, false, false]).unwrap();
        assert_eq!(habit.streak(), 5);
        habit.toggle_day(6).unwrap();
        assert_eq!(habit.streak(), 1);
        habit.toggle_day(5).unwrap();
        assert_eq!(habit.streak(), 4);
    }
}
