//! Menu-bar menu model.
//!
//! Describes what the status menu shows; rendering is left to the front end.

use serde::Serialize;

use crate::action::{Action, GoingHome};
use crate::clock::LeaveDuration;
use crate::status::{Status, StatusIcon};

/// What selecting a menu item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuAction {
    Dispatch { action: Action },
    OpenPreferences,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEntry {
    Item {
        icon: StatusIcon,
        title: String,
        action: MenuAction,
    },
    Submenu {
        icon: StatusIcon,
        title: String,
        items: Vec<MenuEntry>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSection {
    pub title: Option<String>,
    pub entries: Vec<MenuEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
    /// Menu-bar icon reflecting the current status.
    pub icon: StatusIcon,
    pub sections: Vec<MenuSection>,
}

impl MenuEntry {
    fn dispatch(action: Action) -> Self {
        MenuEntry::Item {
            icon: action.icon(),
            title: action.title(),
            action: MenuAction::Dispatch { action },
        }
    }
}

impl Menu {
    /// All dispatchable actions, depth first in display order.
    pub fn actions(&self) -> Vec<Action> {
        fn walk(entries: &[MenuEntry], out: &mut Vec<Action>) {
            for entry in entries {
                match entry {
                    MenuEntry::Item {
                        action: MenuAction::Dispatch { action },
                        ..
                    } => out.push(*action),
                    MenuEntry::Item { .. } => {}
                    MenuEntry::Submenu { items, .. } => walk(items, out),
                }
            }
        }

        let mut out = Vec::new();
        for section in &self.sections {
            walk(&section.entries, &mut out);
        }
        out
    }
}

/// Build the status menu. Status actions are hidden until a webhook
/// endpoint is configured; preferences are always reachable.
pub fn build_menu(status: Status, configured: bool) -> Menu {
    let mut sections = Vec::new();

    if configured {
        let leave_items = LeaveDuration::ALL
            .into_iter()
            .map(|duration| MenuEntry::dispatch(Action::Leave { duration }))
            .collect();

        sections.push(MenuSection {
            title: Some("Working".to_string()),
            entries: vec![
                MenuEntry::dispatch(Action::Online),
                MenuEntry::Submenu {
                    icon: StatusIcon::LightBulbOff,
                    title: "Leave".to_string(),
                    items: leave_items,
                },
            ],
        });

        sections.push(MenuSection {
            title: Some("Business Time".to_string()),
            entries: vec![
                MenuEntry::dispatch(Action::GoodMorning),
                MenuEntry::Submenu {
                    icon: StatusIcon::Moon,
                    title: "Going Home".to_string(),
                    items: vec![
                        MenuEntry::dispatch(Action::GoingHome {
                            kind: GoingHome::Weekday,
                        }),
                        MenuEntry::dispatch(Action::GoingHome {
                            kind: GoingHome::Weekend,
                        }),
                    ],
                },
            ],
        });
    }

    sections.push(MenuSection {
        title: None,
        entries: vec![MenuEntry::Item {
            icon: StatusIcon::Cog,
            title: "Preferences".to_string(),
            action: MenuAction::OpenPreferences,
        }],
    });

    Menu {
        icon: status.icon(),
        sections,
    }
}
