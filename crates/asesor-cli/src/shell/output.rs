use crate::{banner::Banner, models::TutoringSession, shell::MenuItem};

/// Something the shell wants shown, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Heading(String),
    Banner(Banner),
    Menu {
        items: Vec<MenuItem>,
        authenticated: bool,
    },
    Sessions(Vec<TutoringSession>),
}

/// Whether the shell loop keeps going after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}
