//! Validation errors shared by all domain entities.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Upper bound for percentage-like fields (book progress, skill level).
pub const PERCENT_MAX: u8 = 100;

/// Number of tracked days in a habit week.
pub const DAYS_PER_WEEK: usize = 7;

/// Entity-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Book progress must stay in `0..=100`.
    ProgressOutOfRange(u8),
    /// Skill level must stay in `0..=100`.
    LevelOutOfRange(u8),
    /// Habit week must contain exactly seven day slots.
    InvalidWeekLength(usize),
    /// Day index must be in `0..7`.
    DayIndexOutOfRange(usize),
    /// Habit weekly target must be in `1..=7`.
    InvalidWeeklyTarget(u8),
    /// Validation step key is not one of the six checklist keys.
    UnknownValidationStep(String),
    /// Required text field is blank after trim.
    BlankField(&'static str),
    /// Enum-like value could not be parsed from its wire name.
    UnknownVariant { kind: &'static str, value: String },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProgressOutOfRange(value) => {
                write!(f, "progress must be between 0 and 100, got {value}")
            }
            Self::LevelOutOfRange(value) => {
                write!(f, "skill level must be between 0 and 100, got {value}")
            }
            Self::InvalidWeekLength(len) => {
                write!(f, "completed days must have exactly 7 entries, got {len}")
            }
            Self::DayIndexOutOfRange(index) => {
                write!(f, "day index must be between 0 and 6, got {index}")
            }
            Self::InvalidWeeklyTarget(value) => {
                write!(f, "target days per week must be between 1 and 7, got {value}")
            }
            Self::UnknownValidationStep(key) => write!(f, "unknown validation step: `{key}`"),
            Self::BlankField(field) => write!(f, "{field} must not be blank"),
            Self::UnknownVariant { kind, value } => write!(f, "unknown {kind}: `{value}`"),
        }
    }
}

impl Error for ModelError {}

pub(crate) fn require_text(value: String, field: &'static str) -> Result<String, ModelError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ModelError::BlankField(field));
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Current wall clock as Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or_default()
}
