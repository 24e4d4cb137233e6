//! Bundled demo data loaded into the in-memory repositories.

use crate::model::error::{now_epoch_ms, ModelError};
use crate::model::habit::{AtomicPrinciple, Habit, HabitCategory, NewHabit};
use crate::model::idea::{Idea, IdeaCategory, IdeaImpact, IdeaValidation, NewIdea};
use crate::model::learning::{
    Book, BookCategory, LearningTotals, MonthlyLearningData, NewBook, NewSkill, Skill,
    SkillCategory,
};
use crate::model::stats::{StatChangeType, StatMetric};
use crate::model::trading::{Asset, AssetCategory, Portfolio};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// 2024-01-01T00:00:00Z in epoch milliseconds.
const JAN_1_2024_MS: i64 = 1_704_067_200_000;

/// Lifetime totals shown in the learning header.
pub const LEARNING_TOTALS: LearningTotals = LearningTotals {
    total_books_read: 57,
    total_study_hours: 853,
    total_skills: 65,
};

/// Habit success rate carried over from historical data.
pub const HISTORICAL_SUCCESS_RATE: u32 = 89;

pub fn stat_metrics() -> Vec<StatMetric> {
    [
        ("1", "Books Read", "47", "+12", "BookOpen", "from-emerald-500 to-teal-500"),
        ("2", "Skills Learned", "23", "+5", "Target", "from-blue-500 to-indigo-500"),
        ("3", "Habit Streak", "89", "+3 days", "Zap", "from-amber-500 to-orange-500"),
        ("4", "Portfolio", "$124.5K", "+8.4%", "TrendingUp", "from-purple-500 to-pink-500"),
    ]
    .into_iter()
    .map(|(id, label, value, change, icon_name, color)| StatMetric {
        id: id.to_string(),
        label: label.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        change_type: StatChangeType::Positive,
        icon_name: icon_name.to_string(),
        color: color.to_string(),
    })
    .collect()
}

pub fn monthly_learning() -> Vec<MonthlyLearningData> {
    [
        ("Jan", 2, 45, 3),
        ("Feb", 3, 52, 4),
        ("Mar", 4, 68, 5),
        ("Apr", 2, 38, 2),
        ("May", 5, 75, 6),
        ("Jun", 6, 82, 7),
        ("Jul", 4, 65, 4),
        ("Aug", 7, 95, 8),
        ("Sep", 5, 70, 5),
        ("Oct", 6, 88, 6),
        ("Nov", 8, 102, 9),
        ("Dec", 5, 78, 6),
    ]
    .into_iter()
    .map(|(month, books, hours, skills)| MonthlyLearningData {
        month: month.to_string(),
        books,
        hours,
        skills,
    })
    .collect()
}

pub fn books() -> Result<Vec<Book>, ModelError> {
    [
        ("1", "Atomic Habits", "James Clear", 100, BookCategory::SelfImprovement),
        ("2", "The Psychology of Money", "Morgan Housel", 85, BookCategory::Finance),
        ("3", "Deep Work", "Cal Newport", 60, BookCategory::Productivity),
        ("4", "Thinking, Fast and Slow", "Daniel Kahneman", 30, BookCategory::Psychology),
    ]
    .into_iter()
    .map(|(id, title, author, progress, category)| {
        Book::with_id(
            id,
            NewBook {
                title: title.to_string(),
                author: author.to_string(),
                progress,
                category,
                cover_image_url: None,
                started_at: None,
                // 2024-01-15
                completed_at: (progress == 100).then_some(JAN_1_2024_MS + 14 * DAY_MS),
            },
        )
    })
    .collect()
}

pub fn skills() -> Result<Vec<Skill>, ModelError> {
    [
        ("1", "TypeScript", 85, SkillCategory::Programming),
        ("2", "React", 90, SkillCategory::Programming),
        ("3", "Data Analysis", 70, SkillCategory::Analytics),
        ("4", "UI/UX Design", 75, SkillCategory::Design),
        ("5", "Public Speaking", 60, SkillCategory::SoftSkills),
    ]
    .into_iter()
    .map(|(id, name, level, category)| {
        Skill::with_id(
            id,
            NewSkill {
                name: name.to_string(),
                level,
                category,
            },
        )
    })
    .collect()
}

pub fn habits() -> Result<Vec<Habit>, ModelError> {
    // created_at offsets are days relative to 2024-01-01.
    [
        (
            "1",
            "Read 30 min",
            23,
            [true, true, true, true, true, false, false],
            "from-emerald-500 to-teal-500",
            HabitCategory::Learning,
            0,
            7,
        ),
        (
            "2",
            "Meditate",
            45,
            [true, true, true, false, true, true, false],
            "from-indigo-500 to-purple-500",
            HabitCategory::Wellness,
            -31,
            7,
        ),
        (
            "3",
            "Exercise",
            12,
            [true, false, true, true, false, true, false],
            "from-amber-500 to-orange-500",
            HabitCategory::Health,
            31,
            5,
        ),
        (
            "4",
            "Journal",
            89,
            [true, true, true, true, true, true, true],
            "from-rose-500 to-pink-500",
            HabitCategory::Mindfulness,
            -122,
            7,
        ),
        (
            "5",
            "Deep Work",
            7,
            [true, true, true, true, false, false, false],
            "from-blue-500 to-cyan-500",
            HabitCategory::Productivity,
            50,
            5,
        ),
    ]
    .into_iter()
    .map(|(id, name, streak, completed, color, category, day_offset, target)| {
        Habit::with_id(
            id,
            NewHabit {
                name: name.to_string(),
                streak,
                completed: completed.to_vec(),
                color: color.to_string(),
                category,
                created_at: JAN_1_2024_MS + day_offset * DAY_MS,
                target_days_per_week: target,
            },
        )
    })
    .collect()
}

pub fn atomic_principles() -> Vec<AtomicPrinciple> {
    [
        ("Make it Obvious", "Stack habits with existing routines"),
        ("Make it Attractive", "Pair with activities you enjoy"),
        ("Make it Easy", "Reduce friction, start small"),
        ("Make it Satisfying", "Track progress, celebrate wins"),
    ]
    .into_iter()
    .zip(1u32..)
    .map(|((principle, description), order)| AtomicPrinciple {
        id: order.to_string(),
        order,
        principle: principle.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn ideas() -> Result<Vec<Idea>, ModelError> {
    let now = now_epoch_ms();
    [
        (
            "1",
            "AI-powered Personal Finance Coach",
            "An app that analyzes spending patterns and provides personalized financial advice using AI.",
            IdeaCategory::FinTech,
            IdeaImpact::High,
            0b000011,
            2,
        ),
        (
            "2",
            "Micro-Learning Platform for Developers",
            "5-minute daily coding challenges that compound into real skills over time.",
            IdeaCategory::EdTech,
            IdeaImpact::Medium,
            0b011111,
            7,
        ),
        (
            "3",
            "Decentralized Content Monetization",
            "A platform allowing creators to monetize content directly without platform fees.",
            IdeaCategory::Web3,
            IdeaImpact::High,
            0b000001,
            3,
        ),
        (
            "4",
            "Smart Home Energy Optimizer",
            "IoT device that learns usage patterns and optimizes energy consumption automatically.",
            IdeaCategory::IoT,
            IdeaImpact::Medium,
            0b111111,
            30,
        ),
    ]
    .into_iter()
    .map(|(id, title, description, category, impact, bits, days_ago)| {
        Idea::with_id(
            id,
            NewIdea {
                title: title.to_string(),
                description: description.to_string(),
                category,
                impact,
                validation: IdeaValidation::from_bits(bits),
                archived: false,
            },
            now - days_ago * DAY_MS,
        )
    })
    .collect()
}

pub fn assets() -> Vec<Asset> {
    [
        ("AAPL", "Apple Inc.", 189.56, 2.34, 1.25, "52.3M", "2.95T", true, AssetCategory::Tech),
        ("TSLA", "Tesla, Inc.", 238.45, -5.67, -2.32, "98.1M", "756B", false, AssetCategory::Auto),
        ("NVDA", "NVIDIA Corp", 495.22, 12.89, 2.67, "45.7M", "1.22T", true, AssetCategory::Tech),
        (
            "MSFT",
            "Microsoft Corp",
            378.91,
            1.23,
            0.33,
            "28.4M",
            "2.81T",
            false,
            AssetCategory::Tech,
        ),
        (
            "AMZN",
            "Amazon.com",
            155.33,
            -2.11,
            -1.34,
            "41.2M",
            "1.61T",
            true,
            AssetCategory::ECommerce,
        ),
        ("BTC", "Bitcoin", 43250.00, 850.00, 2.00, "28.5B", "847B", true, AssetCategory::Crypto),
        ("ETH", "Ethereum", 2280.50, -45.25, -1.95, "12.8B", "274B", false, AssetCategory::Crypto),
    ]
    .into_iter()
    .map(
        |(symbol, name, price, change, change_percent, volume, market_cap, alerts, category)| {
            Asset {
                symbol: symbol.to_string(),
                name: name.to_string(),
                price,
                change,
                change_percent,
                volume: volume.to_string(),
                market_cap: market_cap.to_string(),
                alerts,
                category,
            }
        },
    )
    .collect()
}

pub fn portfolio() -> Portfolio {
    Portfolio {
        total_value: 124567.89,
        day_change: 2345.67,
        day_change_percent: 1.92,
        total_return: 18567.89,
        total_return_percent: 17.53,
    }
}
