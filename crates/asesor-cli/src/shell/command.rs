use crate::shell::MenuItem;

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Home,
    Login,
    Register,
    Add,
    Edit(i64),
    Delete(i64),
    Logout,
    Help,
    Quit,
}

impl Command {
    /// Parse a line; the error is the text to show the user
    pub fn parse(line: &str) -> Result<Command, String> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err("Type a command, or 'help' to see the menu.".to_string());
        };
        let arg = words.next();

        if words.next().is_some() {
            return Err(format!("Too many arguments for '{head}'."));
        }

        let command = match head.to_lowercase().as_str() {
            "home" | "list" | "inicio" => Command::Home,
            "login" => Command::Login,
            "register" | "registro" => Command::Register,
            "add" | "new" => Command::Add,
            "edit" | "update" => Command::Edit(required_id("edit", arg)?),
            "delete" | "rm" => Command::Delete(required_id("delete", arg)?),
            "logout" => Command::Logout,
            "help" | "?" | "menu" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(format!("Unknown command '{head}'. Type 'help' to see the menu.")),
        };

        if arg.is_some() && !matches!(command, Command::Edit(_) | Command::Delete(_)) {
            return Err(format!("'{head}' takes no arguments."));
        }

        Ok(command)
    }

    /// Menu entry that must be on offer for this command to run
    pub fn menu_item(&self) -> Option<MenuItem> {
        match self {
            Command::Home => Some(MenuItem::Home),
            Command::Login => Some(MenuItem::Login),
            Command::Register => Some(MenuItem::Register),
            Command::Add => Some(MenuItem::Add),
            Command::Edit(_) => Some(MenuItem::Edit),
            Command::Delete(_) => Some(MenuItem::Delete),
            Command::Logout => Some(MenuItem::Logout),
            Command::Help | Command::Quit => None,
        }
    }
}

fn required_id(usage: &str, arg: Option<&str>) -> Result<i64, String> {
    let Some(raw) = arg else {
        return Err(format!("Usage: {usage} <id>"));
    };

    raw.trim_start_matches('#')
        .parse()
        .map_err(|_| format!("'{raw}' is not a tutoring session id."))
}
