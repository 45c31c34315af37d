use chrono::{Datelike, Local};
use clap::Subcommand;

use super::open_engine;

#[derive(Subcommand)]
pub enum TasksAction {
    /// Today's task plan with completion state
    Today {
        /// Calendar day of month to plan for, defaulting to today
        #[arg(long)]
        day: Option<u32>,
    },
    /// Toggle one task's completion for the day
    Toggle {
        /// Task text exactly as shown by `tasks today`
        task: String,
        /// Calendar day of month, defaulting to today
        #[arg(long)]
        day: Option<u32>,
    },
}

fn resolve_day(day: Option<u32>) -> u32 {
    day.unwrap_or_else(|| Local::now().day())
}

pub fn run(action: TasksAction) -> Result<(), Box<dyn std::error::Error>> {
    let engine = open_engine()?;

    match action {
        TasksAction::Today { day } => {
            let view = engine.daily_plan(resolve_day(day))?;
            let output = serde_json::json!({
                "day_index": view.plan.day_index,
                "tasks": view.plan.tasks,
                "unmatched_sections": view.plan.unmatched_sections,
                "completed": view.completed,
                "completion_percent": view.completion_percent(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        TasksAction::Toggle { task, day } => {
            let outcome = engine.toggle_task(resolve_day(day), &task)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }
    Ok(())
}
