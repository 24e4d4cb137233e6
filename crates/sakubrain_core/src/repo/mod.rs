//! Repository contracts and in-memory implementations.
//!
//! # Responsibility
//! - Define one data-access contract per dashboard area.
//! - Provide seeded in-memory stores that simulate network latency.
//!
//! # Invariants
//! - Reads return owned copies; callers never alias store state.
//! - Saves are upserts keyed by entity id.
//! - Mutations on unknown ids fail with `RepoError::NotFound`; deletes of
//!   unknown ids are no-ops.

use crate::model::error::ModelError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub mod habit_repo;
pub mod idea_repo;
pub mod latency;
pub mod learning_repo;
pub mod stats_repo;
pub mod trading_repo;

use habit_repo::InMemoryHabitRepository;
use idea_repo::InMemoryIdeaRepository;
use latency::LatencyProfile;
use learning_repo::InMemoryLearningRepository;
use stats_repo::InMemoryStatsRepository;
use trading_repo::InMemoryTradingRepository;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by all dashboard stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Entity-level validation rejected the write.
    Model(ModelError),
    /// No record with this id exists.
    NotFound { entity: &'static str, id: String },
    /// A writer panicked while holding the store lock.
    Poisoned(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Model(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} with id {id} not found"),
            Self::Poisoned(store) => write!(f, "{store} store lock poisoned"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Model(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::Poisoned(_) => None,
        }
    }
}

impl From<ModelError> for RepoError {
    fn from(value: ModelError) -> Self {
        Self::Model(value)
    }
}

impl RepoError {
    pub(crate) fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Full set of seeded in-memory repositories backing one dashboard.
pub struct Repositories {
    pub learning: InMemoryLearningRepository,
    pub habits: InMemoryHabitRepository,
    pub ideas: InMemoryIdeaRepository,
    pub trading: InMemoryTradingRepository,
    pub stats: InMemoryStatsRepository,
}

impl Repositories {
    /// Creates every repository from the bundled seed data.
    pub fn in_memory(latency: LatencyProfile) -> RepoResult<Self> {
        Ok(Self {
            learning: InMemoryLearningRepository::seeded(latency)?,
            habits: InMemoryHabitRepository::seeded(latency)?,
            ideas: InMemoryIdeaRepository::seeded(latency)?,
            trading: InMemoryTradingRepository::seeded(latency),
            stats: InMemoryStatsRepository::seeded(latency),
        })
    }
}

pub(crate) fn read_store<'a, T>(
    lock: &'a RwLock<T>,
    store: &'static str,
) -> RepoResult<RwLockReadGuard<'a, T>> {
    lock.read().map_err(|_| RepoError::Poisoned(store))
}

pub(crate) fn write_store<'a, T>(
    lock: &'a RwLock<T>,
    store: &'static str,
) -> RepoResult<RwLockWriteGuard<'a, T>> {
    lock.write().map_err(|_| RepoError::Poisoned(store))
}

/// Replaces the record with the same key, or appends it.
pub(crate) fn upsert_by<T: Clone>(items: &mut Vec<T>, item: T, same: impl Fn(&T) -> bool) -> T {
    match items.iter_mut().find(|existing| same(existing)) {
        Some(existing) => *existing = item.clone(),
        None => items.push(item.clone()),
    }
    item
}
