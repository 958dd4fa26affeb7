mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "weekplan")]
#[command(about = "Plan your week: dated events, a seven-day view, and generated day plans")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an event (prompts for anything omitted)
    Add {
        /// Date of the event (YYYY-MM-DD)
        date: Option<String>,

        /// Time of the event (zero-padded 24h HH:MM sorts chronologically)
        time: Option<String>,

        /// What is happening
        description: Option<String>,
    },
    /// Delete one event
    Delete {
        /// Date of the event (YYYY-MM-DD)
        date: String,

        /// Time of the event, exactly as stored
        time: String,

        /// Description of the event, exactly as stored
        description: String,
    },
    /// Show the events of one day
    Day {
        /// Date to show (YYYY-MM-DD), today if omitted
        date: Option<String>,
    },
    /// Show a seven-day view, Monday first
    Week {
        /// Any date inside the week to show (YYYY-MM-DD), today if omitted
        date: Option<String>,

        /// Shift the view by whole weeks (-1 = previous week)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,
    },
    /// List every scheduled event
    All,
    /// Generate a day plan from a task list and merge it into the planner
    Plan {
        /// Target date (YYYY-MM-DD)
        date: String,

        /// Comma-separated tasks, e.g. "write report, gym, dinner with Sam"
        tasks: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            date,
            time,
            description,
        } => commands::add::run(date, time, description),
        Commands::Delete {
            date,
            time,
            description,
        } => commands::delete::run(&date, &time, &description),
        Commands::Day { date } => commands::day::run(date.as_deref()),
        Commands::Week { date, offset } => commands::week::run(date.as_deref(), offset),
        Commands::All => commands::all::run(),
        Commands::Plan { date, tasks } => commands::plan::run(&date, &tasks).await,
    }
}
