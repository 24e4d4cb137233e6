//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Add boundary checks (progress, day index, step keys) before storage.
//! - Keep dashboard panels decoupled from storage details.

pub mod habit_service;
pub mod idea_service;
pub mod learning_service;
pub mod stats_service;
pub mod trading_service;
