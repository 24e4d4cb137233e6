//! SakuBrain terminal dashboard.
//!
//! # Responsibility
//! - Render one dashboard section per invocation from freshly seeded data.
//! - Expose panel mutations as subcommands and print the updated record.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use sakubrain_core::dashboard::ideas_panel::IdeaFiltersPatch;
use sakubrain_core::dashboard::trading_panel::TradingFiltersPatch;
use sakubrain_core::model::idea::{IdeaCategory, IdeaStage};
use sakubrain_core::model::learning::LearningTab;
use sakubrain_core::model::trading::{AssetCategory, TimeRange};
use sakubrain_core::{AsyncState, Dashboard, DashboardConfig, LatencyProfile, Section};
use serde::Serialize;

mod render;

/// sakubrain - personal knowledge dashboard
#[derive(Parser, Debug)]
#[command(name = "sakubrain")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a JSON dashboard configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Skip simulated repository latency
    #[arg(long, global = true)]
    instant: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Headline metrics across every area
    Overview,

    /// Learning progress
    Learning {
        /// Tab to show (overview, books, skills)
        #[arg(long, default_value = "overview")]
        tab: LearningTab,
    },

    /// Weekly habit grid and daily goal
    Habits {
        /// Also list the habit principles
        #[arg(long)]
        principles: bool,
    },

    /// Startup ideas and their validation stage
    Ideas {
        /// Only ideas in this category
        #[arg(long)]
        category: Option<IdeaCategory>,

        /// Only ideas at this stage
        #[arg(long)]
        stage: Option<IdeaStage>,

        /// Case-insensitive match on title or description
        #[arg(long, default_value = "")]
        search: String,

        /// Show the validation checklist of one idea
        #[arg(long)]
        expand: Option<String>,
    },

    /// Watchlist and portfolio
    Trading {
        /// Only assets in this category
        #[arg(long)]
        category: Option<AssetCategory>,

        /// Chart range label
        #[arg(long, default_value = "1D")]
        range: TimeRange,
    },

    /// Flip one day of a habit's weekly grid
    ToggleHabit {
        /// Habit id
        id: String,

        /// Day index, 0 (Mon) through 6 (Sun, today)
        day: usize,
    },

    /// Flip one validation step of an idea
    ToggleStep {
        /// Idea id
        id: String,

        /// Step key (marketSize, problemValidation, solutionValidation,
        /// mvpBuilt, firstUsers, revenue)
        step: String,
    },

    /// Set a book's reading progress
    BookProgress {
        /// Book id
        id: String,

        /// Progress percent, 0 through 100
        progress: u8,
    },

    /// Toggle price alerts for an asset
    Alerts {
        /// Asset symbol
        symbol: String,
    },

    /// Print crate versions
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Version = cli.command {
        print_version();
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    if let Some(level) = &cli.log_level {
        config.log_level.clone_from(level);
    }
    if cli.instant {
        config.latency = LatencyProfile::instant();
    }

    let log_dir = cli
        .log_dir
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("sakubrain-logs"));
    let log_dir = log_dir
        .to_str()
        .context("log directory must be valid UTF-8")?
        .to_string();
    sakubrain_core::init_logging(&config.log_level, &log_dir)
        .context("failed to initialize logging")?;

    let mut dashboard = Dashboard::new(&config).context("failed to seed dashboard")?;
    info!(
        "event=cli_command module=cli status=start command={:?}",
        cli.command
    );
    run(&mut dashboard, cli.command, cli.json)
}

fn run(dashboard: &mut Dashboard, command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::Overview => {
            dashboard.select_section(Section::Overview);
            dashboard.refresh_all();
            loaded(dashboard.stats.stats())?;
            if json {
                return print_json(dashboard.stats.stats());
            }
            render::overview(dashboard);
        }
        Commands::Learning { tab } => {
            dashboard.select_section(Section::Learning);
            let panel = &mut dashboard.learning;
            panel.set_active_tab(tab);
            panel.fetch_all();
            loaded(panel.summary())?;
            if json {
                return print_json(&serde_json::json!({
                    "activeTab": panel.active_tab(),
                    "summary": panel.summary(),
                    "monthlyData": panel.monthly_data(),
                    "recentBooks": panel.recent_books(),
                    "skills": panel.skills(),
                }));
            }
            render::learning(panel);
        }
        Commands::Habits { principles } => {
            dashboard.select_section(Section::Habits);
            let panel = &mut dashboard.habits;
            panel.set_show_principles(principles);
            panel.fetch_all();
            loaded(panel.habits())?;
            if json {
                return print_json(&serde_json::json!({
                    "habits": panel.habits(),
                    "stats": panel.stats(),
                    "dailyGoal": panel.daily_goal(),
                    "principles": panel.show_principles().then(|| panel.principles()),
                }));
            }
            render::habits(panel);
        }
        Commands::Ideas {
            category,
            stage,
            search,
            expand,
        } => {
            dashboard.select_section(Section::Ideas);
            let panel = &mut dashboard.ideas;
            panel.update_filters(IdeaFiltersPatch {
                category: Some(category),
                stage: Some(stage),
                search_query: Some(search),
            });
            if let Some(id) = expand {
                panel.toggle_expanded(&id);
            }
            loaded(panel.ideas())?;
            if json {
                return print_json(&serde_json::json!({
                    "filters": panel.filters(),
                    "ideas": panel.ideas(),
                    "stats": panel.stats(),
                    "expandedIdeaId": panel.expanded_idea_id(),
                }));
            }
            render::ideas(panel);
        }
        Commands::Trading { category, range } => {
            dashboard.select_section(Section::Trading);
            let panel = &mut dashboard.trading;
            panel.update_filters(TradingFiltersPatch {
                category: Some(category),
                time_range: Some(range),
            });
            loaded(panel.assets())?;
            if json {
                return print_json(&serde_json::json!({
                    "filters": panel.filters(),
                    "assets": panel.assets(),
                    "portfolio": panel.portfolio(),
                }));
            }
            render::trading(panel);
        }
        Commands::ToggleHabit { id, day } => {
            let habit = dashboard.habits.toggle_habit_day(&id, day)?;
            if json {
                return print_json(&habit);
            }
            render::habit_row(&habit);
        }
        Commands::ToggleStep { id, step } => {
            let idea = dashboard.ideas.toggle_validation_step(&id, &step)?;
            if json {
                return print_json(&idea);
            }
            render::idea_card(&idea, true);
        }
        Commands::BookProgress { id, progress } => {
            let book = dashboard.learning.update_book_progress(&id, progress)?;
            if json {
                return print_json(&book);
            }
            render::book_row(&book);
        }
        Commands::Alerts { symbol } => {
            let asset = dashboard.trading.toggle_alerts(&symbol)?;
            if json {
                return print_json(&asset);
            }
            render::asset_row(dashboard.trading.service(), &asset);
        }
        Commands::Version => print_version(),
    }
    Ok(())
}

fn print_version() {
    println!("sakubrain {}", env!("CARGO_PKG_VERSION"));
    println!("sakubrain_core {}", sakubrain_core::core_version());
}

/// Data of a fetched slot, or the panel's load error.
fn loaded<T>(state: &AsyncState<T>) -> Result<&T> {
    if let Some(message) = state.error() {
        bail!("failed to load panel: {message}");
    }
    match state.data() {
        Some(data) => Ok(data),
        None => bail!("panel has no data (status {:?})", state.status()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to encode json")?;
    println!("{rendered}");
    Ok(())
}
