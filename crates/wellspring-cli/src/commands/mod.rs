pub mod assess;
pub mod config;
pub mod program;
pub mod progress;
pub mod tasks;

use wellspring_core::{Config, Database, WellnessEngine};

/// Open the store and build the engine from the saved configuration.
pub fn open_engine() -> Result<WellnessEngine, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let db = Database::open()?;
    Ok(WellnessEngine::from_config(db, &config))
}
