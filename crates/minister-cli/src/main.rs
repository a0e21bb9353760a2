use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use minister_core::{Action, Config, LeaveDuration};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "minister", version, about = "Broadcast your work status to Slack")]
struct Cli {
    /// Print the message and target status without sending or saving anything
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Join the huddle (status: online)
    Online,
    /// Step away and announce when you'll be back (status: leave)
    Leave {
        /// Minutes away: 30, 60, 120 or 180
        #[arg(value_parser = parse_leave_duration)]
        minutes: LeaveDuration,
    },
    /// Say good morning (status: leave)
    Morning,
    /// Sign off for the day (status: offline)
    Home {
        #[arg(value_enum, default_value_t = commands::broadcast::HomeKind::Weekday)]
        kind: commands::broadcast::HomeKind,
    },
    /// Show the current status
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the status menu
    Menu {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Webhook endpoint settings
    Preferences {
        #[command(subcommand)]
        action: commands::preferences::PreferencesAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

fn parse_leave_duration(s: &str) -> Result<LeaveDuration, String> {
    let minutes: u32 = s.parse().map_err(|_| format!("'{s}' is not a number of minutes"))?;
    LeaveDuration::try_from(minutes).map_err(|e| e.to_string())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(Config::read_or_default().log.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    let dry_run = cli.dry_run;
    let result = match cli.command {
        Commands::Online => commands::broadcast::run(Action::Online, dry_run).await,
        Commands::Leave { minutes } => {
            commands::broadcast::run(Action::Leave { duration: minutes }, dry_run).await
        }
        Commands::Morning => commands::broadcast::run(Action::GoodMorning, dry_run).await,
        Commands::Home { kind } => {
            commands::broadcast::run(Action::GoingHome { kind: kind.into() }, dry_run).await
        }
        Commands::Status { json } => commands::status::run(json),
        Commands::Menu { json } => commands::menu::run(json),
        Commands::Preferences { action } => commands::preferences::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "minister", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
