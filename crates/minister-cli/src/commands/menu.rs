use minister_core::{build_menu, Database, MenuAction, MenuEntry, StateStore};

fn command_for(action: &MenuAction) -> String {
    use minister_core::{Action, GoingHome};

    match action {
        MenuAction::OpenPreferences => "minister preferences show".to_string(),
        MenuAction::Dispatch { action } => match action {
            Action::Online => "minister online".to_string(),
            Action::Leave { duration } => format!("minister leave {}", duration.minutes()),
            Action::GoodMorning => "minister morning".to_string(),
            Action::GoingHome { kind: GoingHome::Weekday } => "minister home weekday".to_string(),
            Action::GoingHome { kind: GoingHome::Weekend } => "minister home weekend".to_string(),
        },
    }
}

fn render(entries: &[MenuEntry], depth: usize, out: &mut Vec<String>) {
    let indent = "  ".repeat(depth + 1);
    for entry in entries {
        match entry {
            MenuEntry::Item { icon, title, action } => {
                out.push(format!("{indent}[{icon}] {title:<16} {}", command_for(action)));
            }
            MenuEntry::Submenu { icon, title, items } => {
                out.push(format!("{indent}[{icon}] {title} >"));
                render(items, depth + 1, out);
            }
        }
    }
}

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let status = db.current_status()?;
    let configured = !db.webhook_endpoint()?.is_empty();
    let menu = build_menu(status, configured);

    if json {
        println!("{}", serde_json::to_string_pretty(&menu)?);
        return Ok(());
    }

    let mut lines = vec![format!("[{}] {status}", menu.icon)];
    for section in &menu.sections {
        lines.push(match &section.title {
            Some(title) => format!("-- {title} --"),
            None => "--".to_string(),
        });
        render(&section.entries, 0, &mut lines);
    }
    println!("{}", lines.join("\n"));
    Ok(())
}
