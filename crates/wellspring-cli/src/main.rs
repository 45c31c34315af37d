use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "wellspring-cli", version, about = "Wellspring CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assessment questionnaires, submissions and reports
    Assess {
        #[command(subcommand)]
        action: commands::assess::AssessAction,
    },
    /// Daily task plan and completions
    Tasks {
        #[command(subcommand)]
        action: commands::tasks::TasksAction,
    },
    /// XP, level, streak and assessment trend
    Progress {
        #[command(subcommand)]
        action: commands::progress::ProgressAction,
    },
    /// 21-day challenge program
    Program {
        #[command(subcommand)]
        action: commands::program::ProgramAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Assess { action } => commands::assess::run(action),
        Commands::Tasks { action } => commands::tasks::run(action),
        Commands::Progress { action } => commands::progress::run(action),
        Commands::Program { action } => commands::program::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
