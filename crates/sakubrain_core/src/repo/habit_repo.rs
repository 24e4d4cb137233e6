//! Habit repository contract and in-memory implementation.
//!
//! # Invariants
//! - `stats.total_streak` sums the stored streak of every habit.
//! - `stats.completed_today` counts habits whose last day slot is done.

use crate::model::habit::{AtomicPrinciple, Habit, HabitStats};
use crate::repo::latency::{CallClass, LatencyProfile};
use crate::repo::{read_store, upsert_by, write_store, RepoError, RepoResult};
use crate::seed;
use std::sync::RwLock;

const MODULE: &str = "habit_repo";

/// Repository interface for the habit area.
pub trait HabitRepository {
    fn all_habits(&self) -> RepoResult<Vec<Habit>>;
    fn habit_by_id(&self, id: &str) -> RepoResult<Option<Habit>>;
    /// Inserts or replaces a habit by id.
    fn save_habit(&self, habit: Habit) -> RepoResult<Habit>;
    /// Flips one day of the weekly grid and returns the updated habit.
    fn update_habit_day(&self, id: &str, day_index: usize) -> RepoResult<Habit>;
    /// Removes a habit. Unknown ids are ignored.
    fn delete_habit(&self, id: &str) -> RepoResult<()>;
    fn atomic_principles(&self) -> RepoResult<Vec<AtomicPrinciple>>;
    fn stats(&self) -> RepoResult<HabitStats>;
}

/// Seeded in-memory habit store.
pub struct InMemoryHabitRepository {
    latency: LatencyProfile,
    habits: RwLock<Vec<Habit>>,
    principles: Vec<AtomicPrinciple>,
    success_rate: u32,
}

impl InMemoryHabitRepository {
    pub fn seeded(latency: LatencyProfile) -> RepoResult<Self> {
        Ok(Self::with_data(
            latency,
            seed::habits()?,
            seed::atomic_principles(),
            seed::HISTORICAL_SUCCESS_RATE,
        ))
    }

    pub fn with_data(
        latency: LatencyProfile,
        habits: Vec<Habit>,
        principles: Vec<AtomicPrinciple>,
        success_rate: u32,
    ) -> Self {
        Self {
            latency,
            habits: RwLock::new(habits),
            principles,
            success_rate,
        }
    }
}

impl HabitRepository for InMemoryHabitRepository {
    fn all_habits(&self) -> RepoResult<Vec<Habit>> {
        self.latency.run(MODULE, "all_habits", CallClass::Query, || {
            Ok(read_store(&self.habits, "habits")?.clone())
        })
    }

    fn habit_by_id(&self, id: &str) -> RepoResult<Option<Habit>> {
        self.latency.run(MODULE, "habit_by_id", CallClass::Lookup, || {
            let habits = read_store(&self.habits, "habits")?;
            Ok(habits.iter().find(|habit| habit.id == id).cloned())
        })
    }

    fn save_habit(&self, habit: Habit) -> RepoResult<Habit> {
        self.latency.run(MODULE, "save_habit", CallClass::Save, || {
            let mut habits = write_store(&self.habits, "habits")?;
            let id = habit.id.clone();
            Ok(upsert_by(&mut *habits, habit, |existing| existing.id == id))
        })
    }

    fn update_habit_day(&self, id: &str, day_index: usize) -> RepoResult<Habit> {
        self.latency.run(MODULE, "update_habit_day", CallClass::Update, || {
            let mut habits = write_store(&self.habits, "habits")?;
            let habit = habits
                .iter_mut()
                .find(|habit| habit.id == id)
                .ok_or_else(|| RepoError::not_found("habit", id))?;
            habit.toggle_day(day_index)?;
            Ok(habit.clone())
        })
    }

    fn delete_habit(&self, id: &str) -> RepoResult<()> {
        self.latency.run(MODULE, "delete_habit", CallClass::Delete, || {
            let mut habits = write_store(&self.habits, "habits")?;
            habits.retain(|habit| habit.id != id);
            Ok(())
        })
    }

    fn atomic_principles(&self) -> RepoResult<Vec<AtomicPrinciple>> {
        self.latency.run(MODULE, "atomic_principles", CallClass::Lookup, || {
            Ok(self.principles.clone())
        })
    }

    fn stats(&self) -> RepoResult<HabitStats> {
        self.latency.run(MODULE, "stats", CallClass::Query, || {
            let habits = read_store(&self.habits, "habits")?;
            Ok(HabitStats {
                total_streak: habits.iter().map(Habit::streak).sum(),
                completed_today: habits
                    .iter()
                    .filter(|habit| habit.is_completed_today())
                    .count() as u32,
                total_habits: habits.len() as u32,
                success_rate: self.success_rate,
            })
        })
    }
}
