use clap::Subcommand;
use wellspring_core::{AgeGroup, Config, ResponseCollector, ValidationError};

use super::open_engine;

#[derive(Subcommand)]
pub enum AssessAction {
    /// Show the questionnaire for an age group
    Sections {
        /// Age group (under_18, 18_to_25, 25_to_40); falls back to the
        /// configured default
        #[arg(long)]
        age_group: Option<AgeGroup>,
        /// Resolve the age group from an age in years
        #[arg(long, conflicts_with = "age_group")]
        age: Option<u32>,
    },
    /// Submit answers and store the scored report
    Submit {
        /// Age group (under_18, 18_to_25, 25_to_40); falls back to the
        /// configured default
        #[arg(long)]
        age_group: Option<AgeGroup>,
        /// Resolve the age group from an age in years
        #[arg(long, conflicts_with = "age_group")]
        age: Option<u32>,
        /// Comma-separated option indices, one per question, 0 meaning
        /// the first option shown by `assess sections`
        #[arg(long)]
        answers: String,
    },
    /// Show the stored report
    Report,
}

/// Pick the age group from the flags, or from the configured default.
fn resolve_age_group(
    age_group: Option<AgeGroup>,
    age: Option<u32>,
) -> Result<AgeGroup, Box<dyn std::error::Error>> {
    if let Some(group) = age_group {
        return Ok(group);
    }
    if let Some(years) = age {
        return AgeGroup::from_age(years)
            .ok_or_else(|| ValidationError::UnsupportedAge { years }.into());
    }
    let config = Config::load()?;
    config.assessment.default_age_group.ok_or_else(|| {
        "no age group given; pass --age-group/--age or set assessment.default_age_group".into()
    })
}

pub fn run(action: AssessAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AssessAction::Sections { age_group, age } => {
            let group = resolve_age_group(age_group, age)?;
            let engine = open_engine()?;
            let questionnaire = engine.questionnaire(group)?;
            println!("{}", serde_json::to_string_pretty(&questionnaire)?);
        }
        AssessAction::Submit {
            age_group,
            age,
            answers,
        } => {
            let group = resolve_age_group(age_group, age)?;
            let engine = open_engine()?;
            let questionnaire = engine.questionnaire(group)?;

            let picks = parse_answers(&answers)?;
            let total = questionnaire.total_questions();
            if picks.len() != total {
                return Err(format!(
                    "expected {total} answers for {group}, got {}",
                    picks.len()
                )
                .into());
            }

            let mut collector = ResponseCollector::new(&questionnaire);
            for pick in picks {
                collector.select_answer(pick)?;
                collector.advance();
            }
            let responses = collector.submit()?;

            let stored = engine.submit_assessment(group, &responses)?;
            println!("{}", serde_json::to_string_pretty(&stored)?);
        }
        AssessAction::Report => {
            let engine = open_engine()?;
            let stored = engine.current_report()?;
            println!("{}", serde_json::to_string_pretty(&stored)?);
        }
    }
    Ok(())
}

fn parse_answers(raw: &str) -> Result<Vec<usize>, Box<dyn std::error::Error>> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| format!("invalid answer '{}', expected 0-3", part.trim()).into())
        })
        .collect()
}
