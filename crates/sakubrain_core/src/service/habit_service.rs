//! Habit use-case service.
//!
//! # Responsibility
//! - Pass habit reads/writes through to the repository.
//! - Reject day indexes outside the weekly grid before storage.
//! - Compute the daily goal from a loaded habit list.

use crate::model::error::{ModelError, DAYS_PER_WEEK};
use crate::model::habit::{
    AtomicPrinciple, DailyGoal, Habit, HabitStats, NewHabit, TODAY_INDEX,
};
use crate::model::new_entity_id;
use crate::repo::habit_repo::HabitRepository;
use crate::repo::{RepoError, RepoResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for habit use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitServiceError {
    /// Day index is outside `0..7`.
    InvalidDayIndex(usize),
    Model(ModelError),
    Repo(RepoError),
}

impl Display for HabitServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDayIndex(index) => {
                write!(f, "day index must be between 0 and 6, got {index}")
            }
            Self::Model(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for HabitServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDayIndex(_) => None,
            Self::Model(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for HabitServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ModelError> for HabitServiceError {
    fn from(value: ModelError) -> Self {
        Self::Model(value)
    }
}

/// Habit service facade over repository implementations.
pub struct HabitService<R: HabitRepository> {
    repo: R,
}

impl<R: HabitRepository> HabitService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn all_habits(&self) -> RepoResult<Vec<Habit>> {
        self.repo.all_habits()
    }

    pub fn habit_by_id(&self, id: &str) -> RepoResult<Option<Habit>> {
        self.repo.habit_by_id(id)
    }

    /// Flips one day of a habit's weekly grid.
    pub fn toggle_habit_day(
        &self,
        id: &str,
        day_index: usize,
    ) -> Result<Habit, HabitServiceError> {
        if day_index >= DAYS_PER_WEEK {
            return Err(HabitServiceError::InvalidDayIndex(day_index));
        }
        Ok(self.repo.update_habit_day(id, day_index)?)
    }

    /// Adds a habit under a freshly generated id.
    pub fn add_habit(&self, input: NewHabit) -> Result<Habit, HabitServiceError> {
        let habit = Habit::with_id(new_entity_id(), input)?;
        Ok(self.repo.save_habit(habit)?)
    }

    pub fn delete_habit(&self, id: &str) -> RepoResult<()> {
        self.repo.delete_habit(id)
    }

    pub fn atomic_principles(&self) -> RepoResult<Vec<AtomicPrinciple>> {
        self.repo.atomic_principles()
    }

    pub fn habit_stats(&self) -> RepoResult<HabitStats> {
        self.repo.stats()
    }
}

/// Counts habits completed today against `target`.
pub fn calculate_daily_goal(habits: &[Habit], target: u32) -> DailyGoal {
    let current = habits
        .iter()
        .filter(|habit| habit.is_completed_on(TODAY_INDEX))
        .count() as u32;
    DailyGoal { target, current }
}
