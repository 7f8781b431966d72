pub(crate) mod command;
pub(crate) mod menu;
pub(crate) mod output;
pub(crate) mod prompter;
pub(crate) mod render;
pub(crate) mod shell;
pub(crate) mod terminal;

pub use command::Command;
pub use menu::MenuItem;
pub use output::{Flow, Output};
pub use prompter::{PromptError, PromptResult, Prompter};
pub use render::render;
pub use shell::Shell;
pub use terminal::TerminalPrompter;
