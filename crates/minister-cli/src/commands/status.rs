use minister_core::{Database, StateStore};
use serde::Serialize;

#[derive(Serialize)]
struct StatusView {
    status: minister_core::Status,
    icon: minister_core::StatusIcon,
    configured: bool,
}

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let status = db.current_status()?;
    let view = StatusView {
        status,
        icon: status.icon(),
        configured: !db.webhook_endpoint()?.is_empty(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{} [{}]", view.status, view.icon);
        if !view.configured {
            println!("webhook endpoint not configured");
        }
    }
    Ok(())
}
