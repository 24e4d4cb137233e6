//! Learning panel: monthly chart, recent books, skills and totals.

use crate::dashboard::state::AsyncState;
use crate::dashboard::{first_error, joined};
use crate::model::learning::{Book, LearningTab, LearningTotals, MonthlyLearningData, Skill};
use crate::repo::learning_repo::LearningRepository;
use crate::service::learning_service::{LearningService, LearningServiceError};
use log::{error, info};
use std::time::Instant;

pub struct LearningPanel<R: LearningRepository> {
    service: LearningService<R>,
    recent_books_limit: usize,
    monthly_data: AsyncState<Vec<MonthlyLearningData>>,
    recent_books: AsyncState<Vec<Book>>,
    skills: AsyncState<Vec<Skill>>,
    summary: AsyncState<LearningTotals>,
    active_tab: LearningTab,
}

impl<R: LearningRepository + Sync> LearningPanel<R> {
    pub fn new(service: LearningService<R>, recent_books_limit: usize) -> Self {
        Self {
            service,
            recent_books_limit,
            monthly_data: AsyncState::default(),
            recent_books: AsyncState::default(),
            skills: AsyncState::default(),
            summary: AsyncState::default(),
            active_tab: LearningTab::Overview,
        }
    }

    /// Reloads all four slots in parallel.
    pub fn fetch_all(&mut self) {
        let started_at = Instant::now();
        self.monthly_data.set_loading();
        self.recent_books.set_loading();
        self.skills.set_loading();
        self.summary.set_loading();

        let service = &self.service;
        let limit = self.recent_books_limit;
        let (monthly, books, skills, summary) = std::thread::scope(|scope| {
            let monthly = scope.spawn(|| service.monthly_data());
            let books = scope.spawn(move || service.recent_books(Some(limit)));
            let skills = scope.spawn(|| service.all_skills());
            let summary = service.learning_summary().map_err(|err| err.to_string());
            (joined(monthly), joined(books), joined(skills), summary)
        });

        match (monthly, books, skills, summary) {
            (Ok(monthly), Ok(books), Ok(skills), Ok(summary)) => {
                self.monthly_data.set_success(monthly);
                self.recent_books.set_success(books);
                self.skills.set_success(skills);
                self.summary.set_success(summary);
                info!(
                    "event=panel_fetch module=dashboard panel=learning status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
            }
            (monthly, books, skills, summary) => {
                let message =
                    first_error([monthly.err(), books.err(), skills.err(), summary.err()]);
                error!(
                    "event=panel_fetch module=dashboard panel=learning status=error error={message}"
                );
                self.monthly_data.set_error(message.clone());
                self.recent_books.set_error(message.clone());
                self.skills.set_error(message.clone());
                self.summary.set_error(message);
            }
        }
    }

    /// Updates one book's progress, then reloads the panel.
    pub fn update_book_progress(
        &mut self,
        id: &str,
        progress: u8,
    ) -> Result<Book, LearningServiceError> {
        match self.service.update_book_progress(id, progress) {
            Ok(book) => {
                self.fetch_all();
                Ok(book)
            }
            Err(err) => {
                error!(
                    "event=panel_mutation module=dashboard panel=learning op=update_book_progress status=error error={err}"
                );
                Err(err)
            }
        }
    }

    pub fn service(&self) -> &LearningService<R> {
        &self.service
    }

    pub fn monthly_data(&self) -> &AsyncState<Vec<MonthlyLearningData>> {
        &self.monthly_data
    }

    pub fn recent_books(&self) -> &AsyncState<Vec<Book>> {
        &self.recent_books
    }

    pub fn skills(&self) -> &AsyncState<Vec<Skill>> {
        &self.skills
    }

    pub fn summary(&self) -> &AsyncState<LearningTotals> {
        &self.summary
    }

    pub fn active_tab(&self) -> LearningTab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: LearningTab) {
        self.active_tab = tab;
    }
}
