use clap::{Parser, Subcommand};

mod commands;
mod util;

#[derive(Parser)]
#[command(
    name = "kaizen",
    version,
    about = "KaizenEdge CLI — validate onboarding payloads and build plans locally"
)]
struct Cli {
    /// API base URL (only used by `health`)
    #[arg(long, env = "KAIZEN_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API health
    Health,
    /// Onboarding payload operations (run locally, no API required)
    Onboarding {
        #[command(subcommand)]
        command: commands::onboarding::OnboardingCommands,
    },
    /// Build a shopping list from a meal plan file
    Shopping(commands::shopping::ShoppingArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Health => commands::health::run(&cli.api_url).await,
        Commands::Onboarding { command } => commands::onboarding::run(command),
        Commands::Shopping(args) => commands::shopping::run(args),
    };

    std::process::exit(code);
}
