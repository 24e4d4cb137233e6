use sakubrain_core::dashboard::ideas_panel::IdeaFiltersPatch;
use sakubrain_core::dashboard::learning_panel::LearningPanel;
use sakubrain_core::dashboard::stats_panel::StatsPanel;
use sakubrain_core::dashboard::trading_panel::TradingFiltersPatch;
use sakubrain_core::model::idea::{IdeaCategory, IdeaStage};
use sakubrain_core::model::learning::{
    Book, LearningTab, LearningTotals, MonthlyLearningData, Skill,
};
use sakubrain_core::model::stats::StatMetric;
use sakubrain_core::model::trading::AssetCategory;
use sakubrain_core::repo::learning_repo::LearningRepository;
use sakubrain_core::repo::stats_repo::StatsRepository;
use sakubrain_core::service::idea_service::IdeaServiceError;
use sakubrain_core::service::learning_service::LearningService;
use sakubrain_core::service::stats_service::StatsService;
use sakubrain_core::{Dashboard, DashboardConfig, LoadState, RepoError, RepoResult, Section};

fn loaded_dashboard() -> Dashboard {
    let mut dashboard = Dashboard::new(&DashboardConfig::instant()).unwrap();
    dashboard.refresh_all();
    dashboard
}

#[test]
fn panels_start_idle_with_empty_data() {
    let dashboard = Dashboard::new(&DashboardConfig::instant()).unwrap();
    assert_eq!(dashboard.active_section(), Section::Overview);
    assert_eq!(dashboard.stats.stats().status(), LoadState::Idle);
    assert_eq!(dashboard.stats.stats().data(), Some(&Vec::new()));
    assert_eq!(dashboard.habits.daily_goal().current, 0);
}

#[test]
fn refresh_all_loads_every_panel() {
    let dashboard = loaded_dashboard();

    assert_eq!(dashboard.stats.stats().status(), LoadState::Success);
    assert_eq!(dashboard.stats.stats().data().unwrap().len(), 4);

    assert_eq!(dashboard.learning.recent_books().status(), LoadState::Success);
    assert_eq!(dashboard.learning.recent_books().data().unwrap().len(), 4);
    assert_eq!(dashboard.learning.skills().data().unwrap().len(), 5);

    assert_eq!(dashboard.habits.habits().data().unwrap().len(), 5);
    assert_eq!(dashboard.habits.principles().data().unwrap().len(), 4);

    let idea_stats = dashboard.ideas.stats().data().unwrap();
    assert_eq!(idea_stats.total_ideas, 4);
    assert_eq!(idea_stats.validated_ideas, 2);
    assert_eq!(idea_stats.ideas_by_stage.get(&IdeaStage::Validation), Some(&2));
    assert_eq!(idea_stats.ideas_by_stage.get(&IdeaStage::Revenue), Some(&2));
    assert_eq!(idea_stats.ideas_by_stage.get(&IdeaStage::Idea), None);

    assert_eq!(dashboard.trading.assets().data().unwrap().len(), 7);
    assert_eq!(
        dashboard.trading.portfolio().data().unwrap().total_value,
        124567.89
    );
}

#[test]
fn section_selection_and_learning_tab() {
    let mut dashboard = loaded_dashboard();
    dashboard.select_section(Section::Learning);
    assert_eq!(dashboard.active_section(), Section::Learning);

    assert_eq!(dashboard.learning.active_tab(), LearningTab::Overview);
    dashboard.learning.set_active_tab(LearningTab::Skills);
    assert_eq!(dashboard.learning.active_tab(), LearningTab::Skills);
}

#[test]
fn habit_toggle_refreshes_daily_goal() {
    let mut dashboard = loaded_dashboard();
    assert_eq!(dashboard.habits.daily_goal().current, 1);

    dashboard.habits.toggle_habit_day("1", 6).unwrap();
    assert_eq!(dashboard.habits.daily_goal().current, 2);
    assert_eq!(dashboard.habits.stats().data().unwrap().completed_today, 2);

    assert!(dashboard.habits.toggle_habit_day("1", 9).is_err());
    assert_eq!(dashboard.habits.habits().status(), LoadState::Success);
}

#[test]
fn idea_filters_merge_and_requery() {
    let mut dashboard = loaded_dashboard();
    let panel = &mut dashboard.ideas;

    panel.update_filters(IdeaFiltersPatch {
        stage: Some(Some(IdeaStage::Revenue)),
        ..IdeaFiltersPatch::default()
    });
    let ids: Vec<&str> = panel
        .ideas()
        .data()
        .unwrap()
        .iter()
        .map(|idea| idea.id.as_str())
        .collect();
    assert_eq!(ids, vec!["2", "4"]);

    panel.update_filters(IdeaFiltersPatch {
        search_query: Some("  SMART   home ".to_string()),
        ..IdeaFiltersPatch::default()
    });
    assert_eq!(panel.filters().stage, Some(IdeaStage::Revenue));
    assert_eq!(panel.ideas().data().unwrap().len(), 1);

    panel.update_filters(IdeaFiltersPatch {
        category: Some(Some(IdeaCategory::FinTech)),
        stage: Some(None),
        search_query: Some(String::new()),
    });
    let ideas = panel.ideas().data().unwrap();
    assert_eq!(ideas.len(), 1);
    assert_eq!(ideas[0].id, "1");
}

#[test]
fn idea_step_toggle_rederives_stage_and_stats() {
    let mut dashboard = loaded_dashboard();
    let panel = &mut dashboard.ideas;

    let idea = panel.toggle_validation_step("1", "solutionValidation").unwrap();
    assert_eq!(idea.stage(), IdeaStage::Mvp);
    let stats = panel.stats().data().unwrap();
    assert_eq!(stats.ideas_by_stage.get(&IdeaStage::Mvp), Some(&1));
    assert_eq!(stats.validated_ideas, 3);

    let err = panel.toggle_validation_step("1", "bogus").unwrap_err();
    assert!(matches!(err, IdeaServiceError::Model(_)));
    assert_eq!(panel.ideas().status(), LoadState::Success);
}

#[test]
fn expanded_idea_toggles_open_and_closed() {
    let mut dashboard = loaded_dashboard();
    let panel = &mut dashboard.ideas;
    assert_eq!(panel.expanded_idea_id(), None);
    panel.toggle_expanded("2");
    assert_eq!(panel.expanded_idea_id(), Some("2"));
    panel.toggle_expanded("3");
    assert_eq!(panel.expanded_idea_id(), Some("3"));
    panel.toggle_expanded("3");
    assert_eq!(panel.expanded_idea_id(), None);
}

#[test]
fn trading_filters_and_alerts() {
    let mut dashboard = loaded_dashboard();
    let panel = &mut dashboard.trading;

    panel.update_filters(TradingFiltersPatch {
        category: Some(Some(AssetCategory::ECommerce)),
        time_range: None,
    });
    let assets = panel.assets().data().unwrap();
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].symbol, "AMZN");

    let amzn = panel.toggle_alerts("AMZN").unwrap();
    assert!(!amzn.alerts);
    assert!(!panel.assets().data().unwrap()[0].alerts);

    assert!(panel.toggle_alerts("NOPE").is_err());
}

#[test]
fn book_progress_refreshes_learning_panel() {
    let mut dashboard = loaded_dashboard();
    let book = dashboard.learning.update_book_progress("4", 100).unwrap();
    assert!(book.is_completed());
    let refreshed = dashboard.learning.recent_books().data().unwrap();
    assert!(refreshed.iter().any(|book| book.id == "4" && book.is_completed()));
}

struct BrokenStats;

impl StatsRepository for BrokenStats {
    fn all_stats(&self) -> RepoResult<Vec<StatMetric>> {
        Err(RepoError::Poisoned("stats"))
    }
}

#[test]
fn stats_failure_lands_in_error_state() {
    let mut panel = StatsPanel::new(StatsService::new(BrokenStats));
    panel.fetch_all();
    assert_eq!(panel.stats().status(), LoadState::Error);
    assert_eq!(panel.stats().error(), Some("stats store lock poisoned"));
    assert!(panel.stats().data().is_none());
}

/// Serves everything except the summary.
struct SummaryFails;

impl LearningRepository for SummaryFails {
    fn monthly_data(&self) -> RepoResult<Vec<MonthlyLearningData>> {
        Ok(Vec::new())
    }

    fn recent_books(&self, _limit: usize) -> RepoResult<Vec<Book>> {
        Ok(Vec::new())
    }

    fn all_skills(&self) -> RepoResult<Vec<Skill>> {
        Ok(Vec::new())
    }

    fn summary(&self) -> RepoResult<LearningTotals> {
        Err(RepoError::Poisoned("summary"))
    }

    fn save_book(&self, book: Book) -> RepoResult<Book> {
        Ok(book)
    }

    fn update_book_progress(&self, id: &str, _progress: u8) -> RepoResult<Book> {
        Err(RepoError::NotFound {
            entity: "book",
            id: id.to_string(),
        })
    }

    fn save_skill(&self, skill: Skill) -> RepoResult<Skill> {
        Ok(skill)
    }
}

#[test]
fn one_failed_read_fails_every_learning_slot() {
    let mut panel = LearningPanel::new(LearningService::new(SummaryFails), 4);
    panel.fetch_all();

    let message = Some("summary store lock poisoned");
    assert_eq!(panel.monthly_data().error(), message);
    assert_eq!(panel.recent_books().error(), message);
    assert_eq!(panel.skills().error(), message);
    assert_eq!(panel.summary().error(), message);
    assert_eq!(panel.skills().status(), LoadState::Error);

    assert!(panel.update_book_progress("1", 50).is_err());
    assert_eq!(panel.summary().status(), LoadState::Error);
}
