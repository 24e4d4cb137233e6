//! Ideas domain: startup ideas and their six-step validation checklist.
//!
//! # Invariants
//! - `Idea::stage` is a pure function of the checklist, recomputed on every
//!   toggle and at construction.
//! - Stage thresholds: 0 % → idea, below 50 % → validation, below 83 % → mvp,
//!   otherwise revenue.

use crate::model::error::{require_text, ModelError};
use crate::model::EntityId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Checklist percentage at which an idea enters the `mvp` stage.
pub const MVP_STAGE_PERCENT: f64 = 50.0;
/// Checklist percentage at which an idea enters the `revenue` stage (5 of 6).
pub const REVENUE_STAGE_PERCENT: f64 = 83.0;
/// Default rounded progress an idea needs to count as validated.
pub const DEFAULT_VALIDATED_THRESHOLD: u32 = 50;

wire_enum! {
    /// Maturity stage derived from the validation checklist.
    pub enum IdeaStage ("idea stage") {
        Idea => "idea",
        Validation => "validation",
        Mvp => "mvp",
        Revenue => "revenue",
    }
}

impl IdeaStage {
    /// Maps a checklist completion percentage onto a stage.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage <= 0.0 {
            Self::Idea
        } else if percentage < MVP_STAGE_PERCENT {
            Self::Validation
        } else if percentage < REVENUE_STAGE_PERCENT {
            Self::Mvp
        } else {
            Self::Revenue
        }
    }

    pub fn from_validation(validation: &IdeaValidation) -> Self {
        Self::from_percentage(validation.percentage())
    }
}

wire_enum! {
    pub enum IdeaImpact ("idea impact") {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

wire_enum! {
    pub enum IdeaCategory ("idea category") {
        FinTech => "FinTech",
        EdTech => "EdTech",
        Web3 => "Web3",
        IoT => "IoT",
        SaaS => "SaaS",
        Mobile => "Mobile",
        Other => "Other",
    }
}

/// One item of the validation checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationStep {
    MarketSize,
    ProblemValidation,
    SolutionValidation,
    MvpBuilt,
    FirstUsers,
    Revenue,
}

impl ValidationStep {
    /// Checklist order.
    pub const ALL: [ValidationStep; 6] = [
        Self::MarketSize,
        Self::ProblemValidation,
        Self::SolutionValidation,
        Self::MvpBuilt,
        Self::FirstUsers,
        Self::Revenue,
    ];

    /// Stable key used by callers to address a step.
    pub fn key(self) -> &'static str {
        match self {
            Self::MarketSize => "marketSize",
            Self::ProblemValidation => "problemValidation",
            Self::SolutionValidation => "solutionValidation",
            Self::MvpBuilt => "mvpBuilt",
            Self::FirstUsers => "firstUsers",
            Self::Revenue => "revenue",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MarketSize => "Market >$1B",
            Self::ProblemValidation => "Problem Validated",
            Self::SolutionValidation => "Solution Validated",
            Self::MvpBuilt => "MVP Built",
            Self::FirstUsers => "First 100 Users",
            Self::Revenue => "Revenue >$1K",
        }
    }
}

impl FromStr for ValidationStep {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|step| step.key() == trimmed)
            .ok_or_else(|| ModelError::UnknownValidationStep(trimmed.to_string()))
    }
}

/// Six independent validation flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaValidation {
    pub market_size: bool,
    pub problem_validation: bool,
    pub solution_validation: bool,
    pub mvp_built: bool,
    pub first_users: bool,
    pub revenue: bool,
}

impl IdeaValidation {
    /// Builds a flag set from a 6-bit mask, bit `i` addressing `ValidationStep::ALL[i]`.
    pub fn from_bits(bits: u8) -> Self {
        let mut validation = Self::default();
        for (index, step) in ValidationStep::ALL.iter().enumerate() {
            if bits & (1 << index) != 0 {
                validation.set(*step, true);
            }
        }
        validation
    }

    pub fn get(&self, step: ValidationStep) -> bool {
        match step {
            ValidationStep::MarketSize => self.market_size,
            ValidationStep::ProblemValidation => self.problem_validation,
            ValidationStep::SolutionValidation => self.solution_validation,
            ValidationStep::MvpBuilt => self.mvp_built,
            ValidationStep::FirstUsers => self.first_users,
            ValidationStep::Revenue => self.revenue,
        }
    }

    pub fn set(&mut self, step: ValidationStep, value: bool) {
        let slot = match step {
            ValidationStep::MarketSize => &mut self.market_size,
            ValidationStep::ProblemValidation => &mut self.problem_validation,
            ValidationStep::SolutionValidation => &mut self.solution_validation,
            ValidationStep::MvpBuilt => &mut self.mvp_built,
            ValidationStep::FirstUsers => &mut self.first_users,
            ValidationStep::Revenue => &mut self.revenue,
        };
        *slot = value;
    }

    pub fn toggle(&mut self, step: ValidationStep) {
        self.set(step, !self.get(step));
    }

    pub fn completed_count(&self) -> usize {
        ValidationStep::ALL
            .iter()
            .filter(|step| self.get(**step))
            .count()
    }

    /// Unrounded completion percentage.
    pub fn percentage(&self) -> f64 {
        self.completed_count() as f64 / ValidationStep::ALL.len() as f64 * 100.0
    }

    /// Completion percentage rounded to the nearest integer.
    pub fn progress(&self) -> u32 {
        self.percentage().round() as u32
    }
}

/// Input for creating or replacing an idea. The stage is always derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIdea {
    pub title: String,
    pub description: String,
    pub category: IdeaCategory,
    pub impact: IdeaImpact,
    #[serde(default)]
    pub validation: IdeaValidation,
    #[serde(default)]
    pub archived: bool,
}

/// A startup idea moving through validation stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub category: IdeaCategory,
    stage: IdeaStage,
    pub impact: IdeaImpact,
    validation: IdeaValidation,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    pub archived: bool,
}

impl Idea {
    pub fn with_id(
        id: impl Into<EntityId>,
        input: NewIdea,
        created_at: i64,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            id: id.into(),
            title: require_text(input.title, "title")?,
            description: input.description,
            category: input.category,
            stage: IdeaStage::from_validation(&input.validation),
            impact: input.impact,
            validation: input.validation,
            created_at,
            archived: input.archived,
        })
    }

    pub fn stage(&self) -> IdeaStage {
        self.stage
    }

    pub fn validation(&self) -> &IdeaValidation {
        &self.validation
    }

    /// Flips one checklist step and re-derives the stage.
    pub fn toggle_validation_step(&mut self, step: ValidationStep) {
        self.validation.toggle(step);
        self.stage = IdeaStage::from_validation(&self.validation);
    }

    pub fn validation_progress(&self) -> u32 {
        self.validation.progress()
    }

    pub fn is_validated(&self, threshold: u32) -> bool {
        self.validation_progress() >= threshold
    }

    pub fn archive(&mut self) {
        self.archived = true;
    }

    pub fn unarchive(&mut self) {
        self.archived = false;
    }
}

/// Aggregate numbers over non-archived ideas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaStats {
    pub total_ideas: u32,
    pub validated_ideas: u32,
    /// Only stages with at least one idea are present.
    pub ideas_by_stage: BTreeMap<IdeaStage, u32>,
}

/// Idea list filters. `None` means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaFilters {
    pub category: Option<IdeaCategory>,
    pub stage: Option<IdeaStage>,
    pub search_query: String,
}
