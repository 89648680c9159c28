//! Yes/no confirmation before destructive actions

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;

use crate::error::Result;

/// Answers accepted as "yes", compared case-insensitively. Anything else,
/// including an empty line, declines.
pub const AFFIRMATIVE_ANSWERS: &[&str] = &["y"];

/// Whether `answer` confirms the prompt.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    AFFIRMATIVE_ANSWERS
        .iter()
        .any(|yes| answer.eq_ignore_ascii_case(yes))
}

/// Something that can ask the user to confirm.
pub trait Confirmation {
    /// Block until an answer is given; `Ok(true)` only for an affirmative one.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Prompts on the terminal, or reads one line from piped stdin.
pub struct TerminalPrompt;

impl Confirmation for TerminalPrompt {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = if io::stdin().is_terminal() {
            Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?
        } else {
            eprint!("{}: ", prompt);
            io::stderr().flush()?;

            // EOF leaves the line empty, which declines
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        };

        Ok(is_affirmative(&answer))
    }
}
