//! Ideas panel: filtered idea list, stats and the expanded card.

use crate::dashboard::state::AsyncState;
use crate::dashboard::{first_error, joined};
use crate::model::idea::{Idea, IdeaCategory, IdeaFilters, IdeaStage, IdeaStats};
use crate::model::EntityId;
use crate::repo::idea_repo::IdeaRepository;
use crate::service::idea_service::{IdeaService, IdeaServiceError};
use log::{error, info};
use std::time::Instant;

/// Partial filter update. Outer `None` keeps the current value; for
/// category and stage an inner `None` selects "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaFiltersPatch {
    pub category: Option<Option<IdeaCategory>>,
    pub stage: Option<Option<IdeaStage>>,
    pub search_query: Option<String>,
}

impl IdeaFiltersPatch {
    fn apply_to(self, filters: &mut IdeaFilters) {
        if let Some(category) = self.category {
            filters.category = category;
        }
        if let Some(stage) = self.stage {
            filters.stage = stage;
        }
        if let Some(search_query) = self.search_query {
            filters.search_query = search_query;
        }
    }
}

pub struct IdeasPanel<R: IdeaRepository> {
    service: IdeaService<R>,
    ideas: AsyncState<Vec<Idea>>,
    stats: AsyncState<IdeaStats>,
    filters: IdeaFilters,
    expanded_idea_id: Option<EntityId>,
}

impl<R: IdeaRepository + Sync> IdeasPanel<R> {
    pub fn new(service: IdeaService<R>) -> Self {
        Self {
            service,
            ideas: AsyncState::default(),
            stats: AsyncState::default(),
            filters: IdeaFilters::default(),
            expanded_idea_id: None,
        }
    }

    /// Reloads the filtered list and stats in parallel.
    pub fn fetch_all(&mut self) {
        let started_at = Instant::now();
        self.ideas.set_loading();
        self.stats.set_loading();

        let service = &self.service;
        let filters = &self.filters;
        let (ideas, stats) = std::thread::scope(|scope| {
            let ideas = scope.spawn(|| service.ideas_by_filters(filters));
            let stats = service.idea_stats().map_err(|err| err.to_string());
            (joined(ideas), stats)
        });

        match (ideas, stats) {
            (Ok(ideas), Ok(stats)) => {
                info!(
                    "event=panel_fetch module=dashboard panel=ideas status=ok count={} duration_ms={}",
                    ideas.len(),
                    started_at.elapsed().as_millis()
                );
                self.ideas.set_success(ideas);
                self.stats.set_success(stats);
            }
            (ideas, stats) => {
                let message = first_error([ideas.err(), stats.err()]);
                error!(
                    "event=panel_fetch module=dashboard panel=ideas status=error error={message}"
                );
                self.ideas.set_error(message.clone());
                self.stats.set_error(message);
            }
        }
    }

    /// Merges `patch` into the current filters and re-queries.
    pub fn update_filters(&mut self, patch: IdeaFiltersPatch) {
        patch.apply_to(&mut self.filters);
        self.fetch_all();
    }

    /// Toggles one validation flag by key, then reloads the panel.
    pub fn toggle_validation_step(
        &mut self,
        id: &str,
        step_key: &str,
    ) -> Result<Idea, IdeaServiceError> {
        match self.service.toggle_validation_step(id, step_key) {
            Ok(idea) => {
                self.fetch_all();
                Ok(idea)
            }
            Err(err) => {
                error!(
                    "event=panel_mutation module=dashboard panel=ideas op=toggle_validation_step status=error error={err}"
                );
                Err(err)
            }
        }
    }

    /// Expands `id`, or collapses it when it is already expanded.
    pub fn toggle_expanded(&mut self, id: &str) {
        if self.expanded_idea_id.as_deref() == Some(id) {
            self.expanded_idea_id = None;
        } else {
            self.expanded_idea_id = Some(id.to_string());
        }
    }

    pub fn expanded_idea_id(&self) -> Option<&str> {
        self.expanded_idea_id.as_deref()
    }

    pub fn filters(&self) -> &IdeaFilters {
        &self.filters
    }

    pub fn service(&self) -> &IdeaService<R> {
        &self.service
    }

    pub fn ideas(&self) -> &AsyncState<Vec<Idea>> {
        &self.ideas
    }

    pub fn stats(&self) -> &AsyncState<IdeaStats> {
        &self.stats
    }
}
