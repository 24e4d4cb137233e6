//! Dashboard panels: stateful views over the use-case services.
//!
//! # Responsibility
//! - Hold per-panel load state, filters and UI toggles.
//! - Fan out panel reads in parallel and record the combined outcome.
//! - Refresh panel data after every successful mutation.
//!
//! # Invariants
//! - A panel fetch marks every slot loading first; afterwards either every
//!   slot succeeds or every slot carries the first failure message.
//! - Mutation failures are logged and handed back to the caller; they do not
//!   touch panel state.

use crate::config::DashboardConfig;
use crate::repo::habit_repo::InMemoryHabitRepository;
use crate::repo::idea_repo::InMemoryIdeaRepository;
use crate::repo::learning_repo::InMemoryLearningRepository;
use crate::repo::stats_repo::InMemoryStatsRepository;
use crate::repo::trading_repo::InMemoryTradingRepository;
use crate::repo::{Repositories, RepoResult};
use crate::service::habit_service::HabitService;
use crate::service::idea_service::IdeaService;
use crate::service::learning_service::LearningService;
use crate::service::stats_service::StatsService;
use crate::service::trading_service::TradingService;
use log::info;
use std::fmt::Display;
use std::thread::ScopedJoinHandle;
use std::time::Instant;

pub mod habits_panel;
pub mod ideas_panel;
pub mod learning_panel;
pub mod state;
pub mod stats_panel;
pub mod trading_panel;

use habits_panel::HabitsPanel;
use ideas_panel::IdeasPanel;
use learning_panel::LearningPanel;
use stats_panel::StatsPanel;
use trading_panel::TradingPanel;

wire_enum! {
    /// Top-level dashboard section.
    pub enum Section ("section") {
        Overview => "overview",
        Learning => "learning",
        Habits => "habits",
        Ideas => "ideas",
        Trading => "trading",
    }
}

/// All five panels wired to one seeded in-memory repository set.
pub struct Dashboard {
    pub stats: StatsPanel<InMemoryStatsRepository>,
    pub learning: LearningPanel<InMemoryLearningRepository>,
    pub habits: HabitsPanel<InMemoryHabitRepository>,
    pub ideas: IdeasPanel<InMemoryIdeaRepository>,
    pub trading: TradingPanel<InMemoryTradingRepository>,
    active_section: Section,
}

impl Dashboard {
    /// Builds a dashboard over freshly seeded repositories.
    ///
    /// Panels start idle; call [`Dashboard::refresh_all`] to load them.
    pub fn new(config: &DashboardConfig) -> RepoResult<Self> {
        let repos = Repositories::in_memory(config.latency)?;
        Ok(Self {
            stats: StatsPanel::new(StatsService::new(repos.stats)),
            learning: LearningPanel::new(
                LearningService::new(repos.learning),
                config.recent_books_limit,
            ),
            habits: HabitsPanel::new(HabitService::new(repos.habits), config.daily_goal_target),
            ideas: IdeasPanel::new(IdeaService::new(
                repos.ideas.with_validated_threshold(config.validated_threshold),
            )),
            trading: TradingPanel::new(TradingService::new(repos.trading)),
            active_section: Section::Overview,
        })
    }

    /// Loads every panel, panels running in parallel.
    pub fn refresh_all(&mut self) {
        let started_at = Instant::now();
        let Self {
            stats,
            learning,
            habits,
            ideas,
            trading,
            ..
        } = self;
        std::thread::scope(|scope| {
            scope.spawn(move || stats.fetch_all());
            scope.spawn(move || learning.fetch_all());
            scope.spawn(move || habits.fetch_all());
            scope.spawn(move || ideas.fetch_all());
            trading.fetch_all();
        });
        info!(
            "event=dashboard_refresh module=dashboard status=done duration_ms={}",
            started_at.elapsed().as_millis()
        );
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn select_section(&mut self, section: Section) {
        self.active_section = section;
    }
}

/// Joins one parallel read, folding errors and panics into a message.
pub(crate) fn joined<T, E: Display>(
    handle: ScopedJoinHandle<'_, Result<T, E>>,
) -> Result<T, String> {
    match handle.join() {
        Ok(result) => result.map_err(|err| err.to_string()),
        Err(_) => Err("panel read panicked".to_string()),
    }
}

/// First failure message among parallel reads.
pub(crate) fn first_error<const N: usize>(errors: [Option<String>; N]) -> String {
    errors
        .into_iter()
        .flatten()
        .next()
        .unwrap_or_else(|| "unknown panel failure".to_string())
}
