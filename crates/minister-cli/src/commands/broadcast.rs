use chrono::Local;
use clap::ValueEnum;
use minister_core::{
    Action, Config, Database, DispatchOutcome, GoingHome, SlackWebhook, StateStore,
    StatusDispatcher,
};
use tracing::warn;

#[derive(Clone, Copy, ValueEnum)]
pub enum HomeKind {
    Weekday,
    Weekend,
}

impl From<HomeKind> for GoingHome {
    fn from(kind: HomeKind) -> Self {
        match kind {
            HomeKind::Weekday => GoingHome::Weekday,
            HomeKind::Weekend => GoingHome::Weekend,
        }
    }
}

pub async fn run(action: Action, dry_run: bool) -> Result<(), Box<dyn std::error::Error>> {
    let now = Local::now().naive_local();

    if dry_run {
        println!("target: {}", action.target_status());
        println!("message: {}", action.message(now));
        return Ok(());
    }

    let db = Database::open()?;
    if db.webhook_endpoint()?.is_empty() {
        print_skipped();
        return Ok(());
    }

    let config = Config::read().unwrap_or_else(|e| {
        warn!(error = %e, "using default configuration");
        Config::default()
    });
    let notifier = SlackWebhook::new(&config.http)?;
    let dispatcher = StatusDispatcher::new(db, notifier);

    match dispatcher.perform(action, now).await? {
        DispatchOutcome::Skipped => print_skipped(),
        DispatchOutcome::Delivered(status) => {
            println!("status: {status}");
        }
        DispatchOutcome::NotDelivered(_) => {
            let status = dispatcher.store().current_status()?;
            println!("status: {status} (unchanged)");
        }
    }
    Ok(())
}

fn print_skipped() {
    println!("skipped: no webhook endpoint configured");
    println!("hint: minister preferences set-endpoint <URL>");
}
