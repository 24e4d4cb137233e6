//! Learning repository contract and in-memory implementation.
//!
//! # Invariants
//! - `recent_books` keeps insertion order and never returns more than `limit`.
//! - `summary` reports lifetime totals, not the visible book list size.

use crate::model::learning::{Book, LearningTotals, MonthlyLearningData, Skill};
use crate::repo::latency::{CallClass, LatencyProfile};
use crate::repo::{read_store, upsert_by, write_store, RepoError, RepoResult};
use crate::seed;
use std::sync::RwLock;

/// Default number of books shown in "recent books".
pub const RECENT_BOOKS_DEFAULT_LIMIT: usize = 4;

const MODULE: &str = "learning_repo";

/// Repository interface for the learning area.
pub trait LearningRepository {
    fn monthly_data(&self) -> RepoResult<Vec<MonthlyLearningData>>;
    /// Returns the first `limit` books in shelf order.
    fn recent_books(&self, limit: usize) -> RepoResult<Vec<Book>>;
    fn all_skills(&self) -> RepoResult<Vec<Skill>>;
    fn summary(&self) -> RepoResult<LearningTotals>;
    /// Inserts or replaces a book by id.
    fn save_book(&self, book: Book) -> RepoResult<Book>;
    fn update_book_progress(&self, id: &str, progress: u8) -> RepoResult<Book>;
    /// Inserts or replaces a skill by id.
    fn save_skill(&self, skill: Skill) -> RepoResult<Skill>;
}

/// Seeded in-memory learning store.
pub struct InMemoryLearningRepository {
    latency: LatencyProfile,
    monthly: Vec<MonthlyLearningData>,
    totals: LearningTotals,
    books: RwLock<Vec<Book>>,
    skills: RwLock<Vec<Skill>>,
}

impl InMemoryLearningRepository {
    /// Creates a store pre-filled with the bundled demo data.
    pub fn seeded(latency: LatencyProfile) -> RepoResult<Self> {
        Ok(Self::with_data(
            latency,
            seed::monthly_learning(),
            seed::LEARNING_TOTALS,
            seed::books()?,
            seed::skills()?,
        ))
    }

    pub fn with_data(
        latency: LatencyProfile,
        monthly: Vec<MonthlyLearningData>,
        totals: LearningTotals,
        books: Vec<Book>,
        skills: Vec<Skill>,
    ) -> Self {
        Self {
            latency,
            monthly,
            totals,
            books: RwLock::new(books),
            skills: RwLock::new(skills),
        }
    }
}

impl LearningRepository for InMemoryLearningRepository {
    fn monthly_data(&self) -> RepoResult<Vec<MonthlyLearningData>> {
        self.latency.run(MODULE, "monthly_data", CallClass::Query, || {
            Ok(self.monthly.clone())
        })
    }

    fn recent_books(&self, limit: usize) -> RepoResult<Vec<Book>> {
        self.latency.run(MODULE, "recent_books", CallClass::Lookup, || {
            let books = read_store(&self.books, "books")?;
            Ok(books.iter().take(limit).cloned().collect())
        })
    }

    fn all_skills(&self) -> RepoResult<Vec<Skill>> {
        self.latency.run(MODULE, "all_skills", CallClass::Lookup, || {
            Ok(read_store(&self.skills, "skills")?.clone())
        })
    }

    fn summary(&self) -> RepoResult<LearningTotals> {
        self.latency.run(MODULE, "summary", CallClass::Query, || Ok(self.totals))
    }

    fn save_book(&self, book: Book) -> RepoResult<Book> {
        self.latency.run(MODULE, "save_book", CallClass::Save, || {
            let mut books = write_store(&self.books, "books")?;
            let id = book.id.clone();
            Ok(upsert_by(&mut *books, book, |existing| existing.id == id))
        })
    }

    fn update_book_progress(&self, id: &str, progress: u8) -> RepoResult<Book> {
        self.latency.run(MODULE, "update_book_progress", CallClass::Update, || {
            let mut books = write_store(&self.books, "books")?;
            let book = books
                .iter_mut()
                .find(|book| book.id == id)
                .ok_or_else(|| RepoError::not_found("book", id))?;
            book.update_progress(progress)?;
            Ok(book.clone())
        })
    }

    fn save_skill(&self, skill: Skill) -> RepoResult<Skill> {
        self.latency.run(MODULE, "save_skill", CallClass::Save, || {
            let mut skills = write_store(&self.skills, "skills")?;
            let id = skill.id.clone();
            Ok(upsert_by(&mut *skills, skill, |existing| existing.id == id))
        })
    }
}
