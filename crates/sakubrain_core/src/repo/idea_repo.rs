//! Idea repository contract and in-memory implementation.
//!
//! # Invariants
//! - List and stats queries skip archived ideas; `idea_by_id` does not.
//! - Search matches title or description, case-insensitively, after
//!   whitespace normalization of the query.

use crate::model::idea::{
    Idea, IdeaFilters, IdeaStats, ValidationStep, DEFAULT_VALIDATED_THRESHOLD,
};
use crate::repo::latency::{CallClass, LatencyProfile};
use crate::repo::{read_store, upsert_by, write_store, RepoError, RepoResult};
use crate::seed;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::RwLock;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const MODULE: &str = "idea_repo";

/// Repository interface for the ideas area.
pub trait IdeaRepository {
    /// Returns every non-archived idea.
    fn all_ideas(&self) -> RepoResult<Vec<Idea>>;
    fn ideas_by_filters(&self, filters: &IdeaFilters) -> RepoResult<Vec<Idea>>;
    /// Gets one idea by id, archived or not.
    fn idea_by_id(&self, id: &str) -> RepoResult<Option<Idea>>;
    /// Inserts or replaces an idea by id.
    fn save_idea(&self, idea: Idea) -> RepoResult<Idea>;
    /// Flips one checklist step; the stage is re-derived by the entity.
    fn toggle_validation_step(&self, id: &str, step: ValidationStep) -> RepoResult<Idea>;
    fn set_archived(&self, id: &str, archived: bool) -> RepoResult<Idea>;
    /// Removes an idea. Unknown ids are ignored.
    fn delete_idea(&self, id: &str) -> RepoResult<()>;
    fn stats(&self) -> RepoResult<IdeaStats>;
}

/// Seeded in-memory idea store.
pub struct InMemoryIdeaRepository {
    latency: LatencyProfile,
    ideas: RwLock<Vec<Idea>>,
    validated_threshold: u32,
}

impl InMemoryIdeaRepository {
    pub fn seeded(latency: LatencyProfile) -> RepoResult<Self> {
        Ok(Self::with_data(latency, seed::ideas()?))
    }

    pub fn with_data(latency: LatencyProfile, ideas: Vec<Idea>) -> Self {
        Self {
            latency,
            ideas: RwLock::new(ideas),
            validated_threshold: DEFAULT_VALIDATED_THRESHOLD,
        }
    }

    /// Sets the rounded checklist progress counted as "validated" in stats.
    pub fn with_validated_threshold(mut self, threshold: u32) -> Self {
        self.validated_threshold = threshold;
        self
    }

    fn mutate(
        &self,
        op: &'static str,
        id: &str,
        apply: impl FnOnce(&mut Idea),
    ) -> RepoResult<Idea> {
        self.latency.run(MODULE, op, CallClass::Update, || {
            let mut ideas = write_store(&self.ideas, "ideas")?;
            let idea = ideas
                .iter_mut()
                .find(|idea| idea.id == id)
                .ok_or_else(|| RepoError::not_found("idea", id))?;
            apply(idea);
            Ok(idea.clone())
        })
    }
}

impl IdeaRepository for InMemoryIdeaRepository {
    fn all_ideas(&self) -> RepoResult<Vec<Idea>> {
        self.latency.run(MODULE, "all_ideas", CallClass::Query, || {
            let ideas = read_store(&self.ideas, "ideas")?;
            Ok(ideas.iter().filter(|idea| !idea.archived).cloned().collect())
        })
    }

    fn ideas_by_filters(&self, filters: &IdeaFilters) -> RepoResult<Vec<Idea>> {
        self.latency.run(MODULE, "ideas_by_filters", CallClass::Query, || {
            let query = normalize_search_query(&filters.search_query);
            let ideas = read_store(&self.ideas, "ideas")?;
            Ok(ideas
                .iter()
                .filter(|idea| !idea.archived && matches_filters(idea, filters, &query))
                .cloned()
                .collect())
        })
    }

    fn idea_by_id(&self, id: &str) -> RepoResult<Option<Idea>> {
        self.latency.run(MODULE, "idea_by_id", CallClass::Lookup, || {
            let ideas = read_store(&self.ideas, "ideas")?;
            Ok(ideas.iter().find(|idea| idea.id == id).cloned())
        })
    }

    fn save_idea(&self, idea: Idea) -> RepoResult<Idea> {
        self.latency.run(MODULE, "save_idea", CallClass::Save, || {
            let mut ideas = write_store(&self.ideas, "ideas")?;
            let id = idea.id.clone();
            Ok(upsert_by(&mut *ideas, idea, |existing| existing.id == id))
        })
    }

    fn toggle_validation_step(&self, id: &str, step: ValidationStep) -> RepoResult<Idea> {
        self.mutate("toggle_validation_step", id, |idea| {
            idea.toggle_validation_step(step)
        })
    }

    fn set_archived(&self, id: &str, archived: bool) -> RepoResult<Idea> {
        self.mutate("set_archived", id, |idea| {
            if archived {
                idea.archive();
            } else {
                idea.unarchive();
            }
        })
    }

    fn delete_idea(&self, id: &str) -> RepoResult<()> {
        self.latency.run(MODULE, "delete_idea", CallClass::Delete, || {
            let mut ideas = write_store(&self.ideas, "ideas")?;
            ideas.retain(|idea| idea.id != id);
            Ok(())
        })
    }

    fn stats(&self) -> RepoResult<IdeaStats> {
        self.latency.run(MODULE, "stats", CallClass::Query, || {
            let ideas = read_store(&self.ideas, "ideas")?;
            let mut stats = IdeaStats::default();
            for idea in ideas.iter().filter(|idea| !idea.archived) {
                stats.total_ideas += 1;
                if idea.is_validated(self.validated_threshold) {
                    stats.validated_ideas += 1;
                }
                *stats.ideas_by_stage.entry(idea.stage()).or_insert(0) += 1;
            }
            Ok(stats)
        })
    }
}

/// Trims, collapses inner whitespace and lowercases a search query.
pub fn normalize_search_query(query: &str) -> String {
    WHITESPACE_RE
        .replace_all(query.trim(), " ")
        .to_lowercase()
}

fn matches_filters(idea: &Idea, filters: &IdeaFilters, normalized_query: &str) -> bool {
    if filters.category.is_some_and(|category| category != idea.category) {
        return false;
    }
    if filters.stage.is_some_and(|stage| stage != idea.stage()) {
        return false;
    }
    normalized_query.is_empty()
        || idea.title.to_lowercase().contains(normalized_query)
        || idea.description.to_lowercase().contains(normalized_query)
}

#[cfg(test)]
mod tests {
    use super::normalize_search_query;

    #[test]
    fn search_query_is_trimmed_collapsed_and_lowercased() {
        assert_eq!(normalize_search_query("  Smart \t Home  "), "smart home");
        assert_eq!(normalize_search_query("   "), "");
    }
}
