//! Learning use-case service.
//!
//! # Responsibility
//! - Pass reads through to the learning repository.
//! - Reject out-of-range progress before it reaches storage.
//! - Assign ids to newly added books and skills.

use crate::model::error::{ModelError, PERCENT_MAX};
use crate::model::learning::{
    Book, LearningTotals, MonthlyLearningData, NewBook, NewSkill, Skill,
};
use crate::model::new_entity_id;
use crate::repo::learning_repo::{LearningRepository, RECENT_BOOKS_DEFAULT_LIMIT};
use crate::repo::{RepoError, RepoResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for learning use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LearningServiceError {
    /// Progress is above 100.
    InvalidProgress(u8),
    /// New record failed entity validation.
    Model(ModelError),
    Repo(RepoError),
}

impl Display for LearningServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidProgress(value) => {
                write!(f, "progress must be between 0 and 100, got {value}")
            }
            Self::Model(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LearningServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidProgress(_) => None,
            Self::Model(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for LearningServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ModelError> for LearningServiceError {
    fn from(value: ModelError) -> Self {
        Self::Model(value)
    }
}

/// Learning service facade over repository implementations.
pub struct LearningService<R: LearningRepository> {
    repo: R,
}

impl<R: LearningRepository> LearningService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn monthly_data(&self) -> RepoResult<Vec<MonthlyLearningData>> {
        self.repo.monthly_data()
    }

    /// Lists the first books on the shelf; `None` uses the default of 4.
    pub fn recent_books(&self, limit: Option<usize>) -> RepoResult<Vec<Book>> {
        self.repo.recent_books(limit.unwrap_or(RECENT_BOOKS_DEFAULT_LIMIT))
    }

    pub fn all_skills(&self) -> RepoResult<Vec<Skill>> {
        self.repo.all_skills()
    }

    pub fn learning_summary(&self) -> RepoResult<LearningTotals> {
        self.repo.summary()
    }

    /// Sets reading progress for one book.
    pub fn update_book_progress(
        &self,
        id: &str,
        progress: u8,
    ) -> Result<Book, LearningServiceError> {
        if progress > PERCENT_MAX {
            return Err(LearningServiceError::InvalidProgress(progress));
        }
        Ok(self.repo.update_book_progress(id, progress)?)
    }

    /// Adds a book under a freshly generated id.
    pub fn add_book(&self, input: NewBook) -> Result<Book, LearningServiceError> {
        let book = Book::with_id(new_entity_id(), input)?;
        Ok(self.repo.save_book(book)?)
    }

    /// Adds a skill under a freshly generated id.
    pub fn add_skill(&self, input: NewSkill) -> Result<Skill, LearningServiceError> {
        let skill = Skill::with_id(new_entity_id(), input)?;
        Ok(self.repo.save_skill(skill)?)
    }
}
