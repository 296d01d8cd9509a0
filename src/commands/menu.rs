//! Interactive numbered menu
//!
//! Typing an item's number filters the list down to it, so administrators
//! can drive the menu with the number keys alone.

use inquire::{Select, Text};
use std::fmt;

use super::{component, status};
use crate::config::Settings;
use crate::domain::ComponentKind;
use crate::error::Result;
use crate::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Report,
    MenuBar,
    LoginWindow,
    Compare,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 5] = [
        MenuItem::Report,
        MenuItem::MenuBar,
        MenuItem::LoginWindow,
        MenuItem::Compare,
        MenuItem::Quit,
    ];

    fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|item| *item == self)
            .map_or(0, |idx| idx + 1)
    }

    fn title(self) -> &'static str {
        match self {
            MenuItem::Report => "Full diagnostic report",
            MenuItem::MenuBar => "Menu bar agent status",
            MenuItem::LoginWindow => "Login window agent status",
            MenuItem::Compare => "Compare two versions",
            MenuItem::Quit => "Quit",
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

/// Run the menu until the user quits or presses ESC
pub fn run(settings: &Settings) -> Result<()> {
    loop {
        let Some(choice) = Select::new("What would you like to check?", MenuItem::ALL.to_vec())
            .with_starting_cursor(0)
            .with_page_size(10)
            .with_help_message("↑↓ or number to choose, ENTER to select, ESC to quit")
            .prompt_skippable()?
        else {
            return Ok(());
        };

        if !perform(settings, choice)? {
            return Ok(());
        }
        println!();
    }
}

/// Carry out one menu action. Returns `false` when the menu should close.
fn perform(settings: &Settings, item: MenuItem) -> Result<bool> {
    match item {
        MenuItem::Report => {
            print!("{}", ui::render_report(&status::build_report(settings), false));
        }
        MenuItem::MenuBar => {
            let resolved = component::resolve(settings, ComponentKind::MenuBarAgent);
            print!("{}", ui::render_component(&resolved, true));
        }
        MenuItem::LoginWindow => {
            let resolved = component::resolve(settings, ComponentKind::LoginWindowAgent);
            print!("{}", ui::render_component(&resolved, true));
        }
        MenuItem::Compare => {
            let Some(left) = Text::new("First version:").prompt_skippable()? else {
                return Ok(true);
            };
            let Some(right) = Text::new("Second version:").prompt_skippable()? else {
                return Ok(true);
            };
            print!(
                "{}",
                ui::render_comparison(&left, &right, &settings.threshold)
            );
        }
        MenuItem::Quit => return Ok(false),
    }
    Ok(true)
}
