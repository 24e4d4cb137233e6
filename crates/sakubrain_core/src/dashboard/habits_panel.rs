//! Habits panel: weekly grid, stats, principles and the daily goal.

use crate::dashboard::state::AsyncState;
use crate::dashboard::{first_error, joined};
use crate::model::habit::{AtomicPrinciple, DailyGoal, Habit, HabitStats};
use crate::repo::habit_repo::HabitRepository;
use crate::service::habit_service::{calculate_daily_goal, HabitService, HabitServiceError};
use log::{error, info};
use std::time::Instant;

pub struct HabitsPanel<R: HabitRepository> {
    service: HabitService<R>,
    daily_goal_target: u32,
    habits: AsyncState<Vec<Habit>>,
    stats: AsyncState<HabitStats>,
    principles: AsyncState<Vec<AtomicPrinciple>>,
    show_principles: bool,
}

impl<R: HabitRepository + Sync> HabitsPanel<R> {
    pub fn new(service: HabitService<R>, daily_goal_target: u32) -> Self {
        Self {
            service,
            daily_goal_target,
            habits: AsyncState::default(),
            stats: AsyncState::default(),
            principles: AsyncState::default(),
            show_principles: false,
        }
    }

    pub fn fetch_all(&mut self) {
        let started_at = Instant::now();
        self.habits.set_loading();
        self.stats.set_loading();
        self.principles.set_loading();

        let service = &self.service;
        let (habits, stats, principles) = std::thread::scope(|scope| {
            let habits = scope.spawn(|| service.all_habits());
            let stats = scope.spawn(|| service.habit_stats());
            let principles = service.atomic_principles().map_err(|err| err.to_string());
            (joined(habits), joined(stats), principles)
        });

        match (habits, stats, principles) {
            (Ok(habits), Ok(stats), Ok(principles)) => {
                self.habits.set_success(habits);
                self.stats.set_success(stats);
                self.principles.set_success(principles);
                info!(
                    "event=panel_fetch module=dashboard panel=habits status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
            }
            (habits, stats, principles) => {
                let message = first_error([habits.err(), stats.err(), principles.err()]);
                error!(
                    "event=panel_fetch module=dashboard panel=habits status=error error={message}"
                );
                self.habits.set_error(message.clone());
                self.stats.set_error(message.clone());
                self.principles.set_error(message);
            }
        }
    }

    /// Flips one day of a habit, then reloads the panel.
    pub fn toggle_habit_day(
        &mut self,
        id: &str,
        day_index: usize,
    ) -> Result<Habit, HabitServiceError> {
        match self.service.toggle_habit_day(id, day_index) {
            Ok(habit) => {
                self.fetch_all();
                Ok(habit)
            }
            Err(err) => {
                error!(
                    "event=panel_mutation module=dashboard panel=habits op=toggle_habit_day status=error error={err}"
                );
                Err(err)
            }
        }
    }

    /// Habits completed today against the configured target.
    ///
    /// Reports zero progress while habit data is unavailable.
    pub fn daily_goal(&self) -> DailyGoal {
        match self.habits.data() {
            Some(habits) => calculate_daily_goal(habits, self.daily_goal_target),
            None => DailyGoal {
                target: self.daily_goal_target,
                current: 0,
            },
        }
    }

    pub fn service(&self) -> &HabitService<R> {
        &self.service
    }

    pub fn habits(&self) -> &AsyncState<Vec<Habit>> {
        &self.habits
    }

    pub fn stats(&self) -> &AsyncState<HabitStats> {
        &self.stats
    }

    pub fn principles(&self) -> &AsyncState<Vec<AtomicPrinciple>> {
        &self.principles
    }

    pub fn show_principles(&self) -> bool {
        self.show_principles
    }

    pub fn set_show_principles(&mut self, show: bool) {
        self.show_principles = show;
    }
}
