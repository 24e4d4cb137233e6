//! Idea use-case service.
//!
//! # Responsibility
//! - Pass idea reads/writes through to the repository.
//! - Parse checklist step keys at the boundary.
//! - Stamp id and creation time on newly added ideas.
//!
//! # Invariants
//! - Callers never set a stage; it is derived from the checklist.

use crate::model::error::{now_epoch_ms, ModelError};
use crate::model::idea::{
    Idea, IdeaFilters, IdeaStage, IdeaStats, IdeaValidation, NewIdea, ValidationStep,
};
use crate::model::new_entity_id;
use crate::repo::idea_repo::IdeaRepository;
use crate::repo::{RepoError, RepoResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for idea use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdeaServiceError {
    /// Step key, category or input field was rejected.
    Model(ModelError),
    Repo(RepoError),
}

impl Display for IdeaServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Model(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for IdeaServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Model(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for IdeaServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ModelError> for IdeaServiceError {
    fn from(value: ModelError) -> Self {
        Self::Model(value)
    }
}

/// Idea service facade over repository implementations.
pub struct IdeaService<R: IdeaRepository> {
    repo: R,
}

impl<R: IdeaRepository> IdeaService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn all_ideas(&self) -> RepoResult<Vec<Idea>> {
        self.repo.all_ideas()
    }

    pub fn ideas_by_filters(&self, filters: &IdeaFilters) -> RepoResult<Vec<Idea>> {
        self.repo.ideas_by_filters(filters)
    }

    pub fn idea_by_id(&self, id: &str) -> RepoResult<Option<Idea>> {
        self.repo.idea_by_id(id)
    }

    /// Flips the checklist step named by `step_key` (e.g. `mvpBuilt`).
    pub fn toggle_validation_step(
        &self,
        id: &str,
        step_key: &str,
    ) -> Result<Idea, IdeaServiceError> {
        let step = step_key.parse::<ValidationStep>()?;
        Ok(self.repo.toggle_validation_step(id, step)?)
    }

    /// Adds an idea under a fresh id, created now.
    pub fn add_idea(&self, input: NewIdea) -> Result<Idea, IdeaServiceError> {
        let idea = Idea::with_id(new_entity_id(), input, now_epoch_ms())?;
        Ok(self.repo.save_idea(idea)?)
    }

    pub fn archive_idea(&self, id: &str) -> RepoResult<Idea> {
        self.repo.set_archived(id, true)
    }

    pub fn unarchive_idea(&self, id: &str) -> RepoResult<Idea> {
        self.repo.set_archived(id, false)
    }

    pub fn delete_idea(&self, id: &str) -> RepoResult<()> {
        self.repo.delete_idea(id)
    }

    pub fn idea_stats(&self) -> RepoResult<IdeaStats> {
        self.repo.stats()
    }
}

/// Rounded checklist completion percentage.
pub fn calculate_validation_progress(validation: &IdeaValidation) -> u32 {
    validation.progress()
}

/// Badge color token for a stage.
pub fn stage_color(stage: IdeaStage) -> &'static str {
    match stage {
        IdeaStage::Idea => "bg-slate-500",
        IdeaStage::Validation => "bg-blue-500",
        IdeaStage::Mvp => "bg-amber-500",
        IdeaStage::Revenue => "bg-emerald-500",
    }
}
