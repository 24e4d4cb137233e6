//! Domain model for the four dashboard areas.
//!
//! # Responsibility
//! - Define entities for learning, habits, ideas and trading.
//! - Enforce entity-level invariants at construction and on mutation.
//!
//! # Invariants
//! - Percentages (book progress, skill level) never leave `0..=100`.
//! - A habit week always holds exactly seven day slots.
//! - Idea stage is derived from its validation checklist, never set directly.

/// Declares a fieldless enum with a stable wire name per variant.
///
/// Generates serde renames, `as_str`, `ALL`, `Display` and `FromStr`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable wire name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::error::ModelError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let trimmed = value.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| $crate::model::error::ModelError::UnknownVariant {
                        kind: $kind,
                        value: trimmed.to_string(),
                    })
            }
        }
    };
}

pub mod error;
pub mod habit;
pub mod idea;
pub mod learning;
pub mod stats;
pub mod trading;

/// Stable identifier for books, skills, habits, principles and ideas.
///
/// Seed records use short numeric ids; records created at runtime get a
/// UUID v4 string.
pub type EntityId = String;

/// Generates a fresh id for runtime-created records.
pub fn new_entity_id() -> EntityId {
    uuid::Uuid::new_v4().to_string()
}
