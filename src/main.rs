use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use formfit::commands::{self, App};
use formfit::config::Config;
use formfit::store::Store;

#[derive(Parser)]
#[command(name = "formfit", version, about = "Personal workout, sleep, and journal tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Overview of workouts, sleep, and the daily checklist
    Dashboard {
        #[command(subcommand)]
        action: commands::dashboard::DashboardAction,
    },
    /// Log and review workout sessions
    Workout {
        #[command(subcommand)]
        action: commands::workout::WorkoutAction,
    },
    /// Track sleep hours and quality
    Sleep {
        #[command(subcommand)]
        action: commands::sleep::SleepAction,
    },
    /// Daily reflections
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Weekly trends and charts
    Progress {
        #[command(subcommand)]
        action: commands::progress::ProgressAction,
    },
    /// Sign in, sign up, or sign out
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formfit=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env();
    let store = Store::file(config.data_dir);
    let today = chrono::Local::now().date_naive();
    let app = App::new(store, today);

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Dashboard { action } => commands::dashboard::run(&app, action),
        Commands::Workout { action } => commands::workout::run(&app, action),
        Commands::Sleep { action } => commands::sleep::run(&app, action),
        Commands::Journal { action } => commands::journal::run(&app, action),
        Commands::Progress { action } => commands::progress::run(&app, action),
        Commands::Auth { action } => commands::auth::run(&app, action),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    Ok(())
}
