use clap::Subcommand;

use super::open_engine;

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Current XP, level and streak
    Show,
    /// Overall percentage across all submissions
    Trend,
}

pub fn run(action: ProgressAction) -> Result<(), Box<dyn std::error::Error>> {
    let engine = open_engine()?;

    match action {
        ProgressAction::Show => {
            let stored = engine.gamification()?;
            let output = serde_json::json!({
                "xp": stored.state.xp,
                "level": stored.state.level,
                "streak": stored.state.streak,
                "xp_into_level": stored.state.xp_into_level(engine.rules()),
                "level_xp": engine.rules().level_xp,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        ProgressAction::Trend => {
            let points = engine.trend()?;
            println!("{}", serde_json::to_string_pretty(&points)?);
        }
    }
    Ok(())
}
