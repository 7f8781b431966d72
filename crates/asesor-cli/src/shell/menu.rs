use crate::session::Session;

/// Entries offered by the navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Home,
    Login,
    Register,
    Add,
    Edit,
    Delete,
    Logout,
}

const ANONYMOUS_MENU: [MenuItem; 3] = [MenuItem::Home, MenuItem::Login, MenuItem::Register];
const AUTHENTICATED_MENU: [MenuItem; 5] = [
    MenuItem::Home,
    MenuItem::Add,
    MenuItem::Edit,
    MenuItem::Delete,
    MenuItem::Logout,
];

impl MenuItem {
    /// The menu for the session's current state
    pub fn for_session(session: &Session) -> &'static [MenuItem] {
        if session.is_authenticated() {
            &AUTHENTICATED_MENU
        } else {
            &ANONYMOUS_MENU
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            MenuItem::Home => "home",
            MenuItem::Login => "login",
            MenuItem::Register => "register",
            MenuItem::Add => "add",
            MenuItem::Edit => "edit <id>",
            MenuItem::Delete => "delete <id>",
            MenuItem::Logout => "logout",
        }
    }

    pub fn describe(&self, authenticated: bool) -> &'static str {
        match self {
            MenuItem::Home if authenticated => "List your tutoring sessions",
            MenuItem::Home => "Welcome page",
            MenuItem::Login => "Sign in",
            MenuItem::Register => "Create an account",
            MenuItem::Add => "Book a new tutoring session",
            MenuItem::Edit => "Change a tutoring session",
            MenuItem::Delete => "Remove a tutoring session",
            MenuItem::Logout => "Sign out",
        }
    }

    /// Words the command line completer offers
    pub fn keywords() -> Vec<String> {
        ["home", "list", "login", "register", "add", "edit", "delete", "logout", "help", "quit"]
            .iter()
            .map(|k| k.to_string())
            .collect()
    }
}
