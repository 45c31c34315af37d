use clap::Subcommand;

use super::open_engine;

#[derive(Subcommand)]
pub enum ProgramAction {
    /// Current program day with its checklist
    Show,
    /// Toggle one checkbox on the current day
    Toggle {
        /// Task position on the current day, 0-based
        index: usize,
    },
    /// Finish the day and move to the next one
    NextDay,
}

pub fn run(action: ProgramAction) -> Result<(), Box<dyn std::error::Error>> {
    let engine = open_engine()?;
    let program = engine.program();

    let state = match action {
        ProgramAction::Show => engine.program_state()?,
        ProgramAction::Toggle { index } => engine.toggle_program_task(index)?,
        ProgramAction::NextDay => engine.advance_program_day()?,
    };

    let day = state.current_day(&program);
    let output = serde_json::json!({
        "title": program.title,
        "description": program.description,
        "day": day.map(|d| d.day),
        "total_days": program.len(),
        "tasks": day.map(|d| d.tasks.clone()),
        "checked": state.checked,
        "progress_percent": state.progress_percent(),
        "streak": state.streak,
        "is_final_day": state.is_final_day(&program),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
