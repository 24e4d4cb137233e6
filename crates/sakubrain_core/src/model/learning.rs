//! Learning domain: books, skills and monthly study aggregates.
//!
//! # Invariants
//! - `Book::progress` and `Skill::level` stay in `0..=100`.
//! - A book reaching 100 % keeps its first completion timestamp.

use crate::model::error::{now_epoch_ms, require_text, ModelError, PERCENT_MAX};
use crate::model::EntityId;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Shelf category for a book.
    pub enum BookCategory ("book category") {
        SelfImprovement => "Self-Improvement",
        Finance => "Finance",
        Productivity => "Productivity",
        Psychology => "Psychology",
        Technology => "Technology",
        Business => "Business",
        Other => "Other",
    }
}

wire_enum! {
    /// Grouping for tracked skills.
    pub enum SkillCategory ("skill category") {
        Programming => "Programming",
        Analytics => "Analytics",
        Design => "Design",
        SoftSkills => "Soft Skills",
        Marketing => "Marketing",
        Other => "Other",
    }
}

wire_enum! {
    /// Sub-view of the learning section.
    pub enum LearningTab ("learning tab") {
        Overview => "overview",
        Books => "books",
        Skills => "skills",
    }
}

/// One month of study activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyLearningData {
    pub month: String,
    pub books: u32,
    pub hours: u32,
    pub skills: u32,
}

/// Lifetime learning counters shown in the section header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningTotals {
    pub total_books_read: u32,
    pub total_study_hours: u32,
    pub total_skills: u32,
}

/// Input for creating or replacing a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub progress: u8,
    pub category: BookCategory,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub started_at: Option<i64>,
    #[serde(default)]
    pub completed_at: Option<i64>,
}

/// A book on the reading list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: EntityId,
    pub title: String,
    pub author: String,
    progress: u8,
    pub category: BookCategory,
    pub cover_image_url: Option<String>,
    /// Unix epoch milliseconds.
    pub started_at: Option<i64>,
    /// Unix epoch milliseconds. Set the first time progress reaches 100.
    pub completed_at: Option<i64>,
}

impl Book {
    /// Builds a book under a caller-provided id.
    ///
    /// # Errors
    /// - `ProgressOutOfRange` when `progress > 100`.
    /// - `BlankField` when title or author is blank.
    pub fn with_id(id: impl Into<EntityId>, input: NewBook) -> Result<Self, ModelError> {
        validate_progress(input.progress)?;
        Ok(Self {
            id: id.into(),
            title: require_text(input.title, "title")?,
            author: require_text(input.author, "author")?,
            progress: input.progress,
            category: input.category,
            cover_image_url: input.cover_image_url,
            started_at: input.started_at,
            completed_at: input.completed_at,
        })
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_completed(&self) -> bool {
        self.progress == PERCENT_MAX
    }

    /// Replaces reading progress.
    ///
    /// Reaching 100 stamps `completed_at` unless it is already set.
    pub fn update_progress(&mut self, progress: u8) -> Result<(), ModelError> {
        validate_progress(progress)?;
        self.progress = progress;
        if progress == PERCENT_MAX && self.completed_at.is_none() {
            self.completed_at = Some(now_epoch_ms());
        }
        Ok(())
    }
}

/// Input for creating or replacing a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSkill {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
}

/// A tracked skill with a 0-100 proficiency level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: EntityId,
    pub name: String,
    level: u8,
    pub category: SkillCategory,
}

impl Skill {
    pub fn with_id(id: impl Into<EntityId>, input: NewSkill) -> Result<Self, ModelError> {
        if input.level > PERCENT_MAX {
            return Err(ModelError::LevelOutOfRange(input.level));
        }
        Ok(Self {
            id: id.into(),
            name: require_text(input.name, "name")?,
            level: input.level,
            category: input.category,
        })
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Raises the level by `amount`, saturating at 100.
    pub fn improve(&mut self, amount: u8) {
        self.level = self.level.saturating_add(amount).min(PERCENT_MAX);
    }
}

fn validate_progress(progress: u8) -> Result<(), ModelError> {
    if progress > PERCENT_MAX {
        return Err(ModelError::ProgressOutOfRange(progress));
    }
    Ok(())
}
