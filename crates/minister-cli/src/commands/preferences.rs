use clap::Subcommand;
use minister_core::{Database, SlackWebhook, StateStore};

#[derive(Subcommand)]
pub enum PreferencesAction {
    /// Show the configured Slack webhook endpoint
    Show,
    /// Set the Slack webhook endpoint
    SetEndpoint {
        /// Incoming-webhook URL (https://hooks.slack.com/services/...)
        url: String,
    },
    /// Remove the webhook endpoint; status actions become no-ops
    ClearEndpoint,
}

pub fn run(action: PreferencesAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        PreferencesAction::Show => {
            let endpoint = db.webhook_endpoint()?;
            if endpoint.is_empty() {
                println!("(not set)");
            } else {
                println!("{endpoint}");
            }
        }
        PreferencesAction::SetEndpoint { url } => {
            let url = url.trim();
            SlackWebhook::validate_endpoint(url)?;
            db.set_webhook_endpoint(url)?;
            println!("ok");
        }
        PreferencesAction::ClearEndpoint => {
            db.set_webhook_endpoint("")?;
            println!("ok");
        }
    }
    Ok(())
}
