//! Plain-text rendering of dashboard panels.

use sakubrain_core::dashboard::habits_panel::HabitsPanel;
use sakubrain_core::dashboard::ideas_panel::IdeasPanel;
use sakubrain_core::dashboard::learning_panel::LearningPanel;
use sakubrain_core::dashboard::trading_panel::TradingPanel;
use sakubrain_core::format::format_signed_currency;
use sakubrain_core::model::habit::{Habit, WEEK_DAYS};
use sakubrain_core::model::idea::{Idea, ValidationStep};
use sakubrain_core::model::learning::{Book, LearningTab};
use sakubrain_core::model::trading::Asset;
use sakubrain_core::repo::habit_repo::InMemoryHabitRepository;
use sakubrain_core::repo::idea_repo::InMemoryIdeaRepository;
use sakubrain_core::repo::learning_repo::InMemoryLearningRepository;
use sakubrain_core::repo::trading_repo::{InMemoryTradingRepository, TradingRepository};
use sakubrain_core::service::trading_service::TradingService;
use sakubrain_core::Dashboard;

pub fn overview(dashboard: &Dashboard) {
    println!("== Overview ==");
    for metric in dashboard.stats.stats().data().into_iter().flatten() {
        println!(
            "{:<16} {:>10}  {} ({})",
            metric.label, metric.value, metric.change, metric.change_type
        );
    }
    if let Some(summary) = dashboard.learning.summary().data() {
        println!(
            "learning: {} books, {} study hours, {} skills",
            summary.total_books_read, summary.total_study_hours, summary.total_skills
        );
    }
    let goal = dashboard.habits.daily_goal();
    println!("habits: daily goal {}/{}", goal.current, goal.target);
    if let Some(stats) = dashboard.ideas.stats().data() {
        println!(
            "ideas: {} active, {} validated",
            stats.total_ideas, stats.validated_ideas
        );
    }
    if let Some(portfolio) = dashboard.trading.portfolio().data() {
        println!(
            "portfolio: {} ({} today)",
            portfolio.formatted_total_value(),
            portfolio.formatted_day_change()
        );
    }
}

pub fn learning(panel: &LearningPanel<InMemoryLearningRepository>) {
    println!("== Learning / {} ==", panel.active_tab());
    match panel.active_tab() {
        LearningTab::Overview => {
            if let Some(summary) = panel.summary().data() {
                println!(
                    "{} books read, {} study hours, {} skills",
                    summary.total_books_read, summary.total_study_hours, summary.total_skills
                );
            }
            for month in panel.monthly_data().data().into_iter().flatten() {
                println!(
                    "{:<4} books {:>2}  hours {:>3}  skills {:>2}",
                    month.month, month.books, month.hours, month.skills
                );
            }
        }
        LearningTab::Books => {
            for book in panel.recent_books().data().into_iter().flatten() {
                book_row(book);
            }
        }
        LearningTab::Skills => {
            for skill in panel.skills().data().into_iter().flatten() {
                println!(
                    "{:<18} {:>3}%  {}",
                    skill.name,
                    skill.level(),
                    skill.category
                );
            }
        }
    }
}

pub fn book_row(book: &Book) {
    let marker = if book.is_completed() { "done" } else { "" };
    println!(
        "[{}] {:<28} {:<18} {:>3}% {}",
        book.id,
        book.title,
        book.author,
        book.progress(),
        marker
    );
}

pub fn habits(panel: &HabitsPanel<InMemoryHabitRepository>) {
    println!("== Habits ==");
    let header: Vec<&str> = WEEK_DAYS.iter().map(|day| day.as_str()).collect();
    println!("{:<5}{:<16} {}", "", "", header.join(" "));
    for habit in panel.habits().data().into_iter().flatten() {
        habit_row(habit);
    }
    if let Some(stats) = panel.stats().data() {
        println!(
            "total streak {}  done today {}/{}  success rate {}%",
            stats.total_streak, stats.completed_today, stats.total_habits, stats.success_rate
        );
    }
    let goal = panel.daily_goal();
    println!(
        "daily goal {}/{}{}",
        goal.current,
        goal.target,
        if goal.is_reached() { " reached" } else { "" }
    );
    if panel.show_principles() {
        for principle in panel.principles().data().into_iter().flatten() {
            println!(
                "{}. {}: {}",
                principle.order, principle.principle, principle.description
            );
        }
    }
}

pub fn habit_row(habit: &Habit) {
    let days: Vec<&str> = habit
        .completed()
        .iter()
        .map(|done| if *done { " x " } else { " . " })
        .collect();
    println!(
        "[{}] {:<16} {}  streak {} ({}%)",
        habit.id,
        habit.name,
        days.join(" "),
        habit.streak(),
        habit.weekly_completion_rate()
    );
}

pub fn ideas(panel: &IdeasPanel<InMemoryIdeaRepository>) {
    println!("== Ideas ==");
    if let Some(stats) = panel.stats().data() {
        let by_stage: Vec<String> = stats
            .ideas_by_stage
            .iter()
            .map(|(stage, count)| format!("{stage}={count}"))
            .collect();
        println!(
            "{} ideas, {} validated [{}]",
            stats.total_ideas,
            stats.validated_ideas,
            by_stage.join(", ")
        );
    }
    for idea in panel.ideas().data().into_iter().flatten() {
        idea_card(idea, panel.expanded_idea_id() == Some(idea.id.as_str()));
    }
}

pub fn idea_card(idea: &Idea, expanded: bool) {
    println!(
        "[{}] {} ({}, {} impact) stage={} validated {}%",
        idea.id,
        idea.title,
        idea.category,
        idea.impact,
        idea.stage(),
        idea.validation_progress()
    );
    if expanded {
        println!("    {}", idea.description);
        for step in ValidationStep::ALL {
            let mark = if idea.validation().get(step) { "x" } else { " " };
            println!("    [{mark}] {:<20} {}", step.label(), step.key());
        }
    }
}

pub fn trading(panel: &TradingPanel<InMemoryTradingRepository>) {
    let filters = panel.filters();
    println!("== Trading / {} ==", filters.time_range);
    if let Some(portfolio) = panel.portfolio().data() {
        println!(
            "portfolio {}  day {} ({})  total {} ({})",
            portfolio.formatted_total_value(),
            portfolio.formatted_day_change(),
            panel
                .service()
                .format_change(portfolio.day_change_percent, true),
            portfolio.formatted_total_return(),
            panel
                .service()
                .format_change(portfolio.total_return_percent, true),
        );
    }
    for asset in panel.assets().data().into_iter().flatten() {
        asset_row(panel.service(), asset);
    }
}

pub fn asset_row<R: TradingRepository>(service: &TradingService<R>, asset: &Asset) {
    let alerts = if asset.alerts { "alerts on" } else { "" };
    println!(
        "{:<5} {:<16} {:>12} {:>11} {:>8}  vol {:<6} cap {:<6} {}",
        asset.symbol,
        asset.name,
        service.format_currency(asset.price),
        format_signed_currency(asset.change),
        service.format_change(asset.change_percent, true),
        asset.volume,
        asset.market_cap,
        alerts
    );
}
