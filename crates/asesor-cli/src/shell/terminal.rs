use crate::shell::{MenuItem, PromptError, PromptResult, Prompter};

use std::borrow::Cow::{self, Borrowed, Owned};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

/// rustyline helper: command completion, and masking while a secret is typed
struct PromptHelper {
    commands: Vec<String>,
    masking: bool,
}

impl Helper for PromptHelper {}

impl Completer for PromptHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if self.masking || line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for PromptHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.masking {
            Owned("*".repeat(line.chars().count()))
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        self.masking
    }
}

impl Hinter for PromptHelper {
    type Hint = String;
}

impl Validator for PromptHelper {}

/// Interactive terminal input backed by rustyline
pub struct TerminalPrompter {
    editor: Editor<PromptHelper, DefaultHistory>,
}

impl TerminalPrompter {
    pub fn new() -> PromptResult<Self> {
        let mut editor = Editor::<PromptHelper, DefaultHistory>::new()
            .map_err(|e| PromptError::terminal(e.to_string()))?;
        editor.set_helper(Some(PromptHelper {
            commands: MenuItem::keywords(),
            masking: false,
        }));

        Ok(Self { editor })
    }

    /// Read a shell command line; only these go into history
    pub fn read_command(&mut self, signed_in_as: Option<&str>) -> PromptResult<String> {
        let prompt = match signed_in_as {
            Some(username) => format!("{username}> "),
            None => "asesor> ".to_string(),
        };

        let line = self.read(&prompt, false)?;
        if !line.trim().is_empty() {
            let _ = self.editor.add_history_entry(line.as_str());
        }
        Ok(line)
    }

    fn read(&mut self, prompt: &str, masking: bool) -> PromptResult<String> {
        if let Some(helper) = self.editor.helper_mut() {
            helper.masking = masking;
        }

        let result = self.editor.readline(prompt);

        if let Some(helper) = self.editor.helper_mut() {
            helper.masking = false;
        }

        match result {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted) => Err(PromptError::Cancelled),
            Err(ReadlineError::Eof) => Err(PromptError::Closed),
            Err(e) => Err(PromptError::terminal(e.to_string())),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, label: &str) -> PromptResult<String> {
        self.read(&format!("  {label}: "), false)
    }

    fn ask_secret(&mut self, label: &str) -> PromptResult<String> {
        self.read(&format!("  {label}: "), true)
    }
}
