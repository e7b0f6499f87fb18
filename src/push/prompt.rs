// git-pusher: Remote Push Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive questions.
//!
//! ```text
//! confirm  "... (y/n)"  single keystroke, y/Y is yes
//! input    "...:"       one line
//! ```

use std::io::{self, BufRead, IsTerminal};

use console::Term;

/// Source of answers to interactive questions.
pub trait Prompt {
    /// Ask a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the answer cannot be read.
    fn confirm(&mut self, question: &str) -> io::Result<bool>;

    /// Ask for one line of text, without the trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the answer cannot be read.
    fn input(&mut self, question: &str) -> io::Result<String>;
}

/// `y` and `Y` are yes, everything else is no.
#[must_use]
pub const fn is_affirmative(answer: char) -> bool {
    matches!(answer, 'y' | 'Y')
}

/// Prompt on the controlling terminal.
///
/// Reads a single keystroke for confirmations when stdin is a terminal and
/// falls back to reading whole lines from stdin otherwise.
pub struct TermPrompt {
    term: Term,
    interactive: bool,
}

impl TermPrompt {
    #[must_use]
    pub fn new() -> Self {
        let term = Term::stdout();
        let interactive = term.is_term() && io::stdin().is_terminal();
        Self { term, interactive }
    }

    fn ask(&self, question: &str) -> io::Result<()> {
        self.term.write_str(question)?;
        self.term.write_str(" ")?;
        self.term.flush()
    }

    fn read_stdin_line() -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Default for TermPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TermPrompt {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        self.ask(question)?;
        let answer = if self.interactive {
            let key = self.term.read_char()?;
            self.term.write_line(&key.to_string())?;
            key
        } else {
            let line = Self::read_stdin_line()?;
            self.term.write_line("")?;
            line.trim().chars().next().unwrap_or('n')
        };
        Ok(is_affirmative(answer))
    }

    fn input(&mut self, question: &str) -> io::Result<String> {
        self.ask(question)?;
        if self.interactive {
            self.term.read_line()
        } else {
            let line = Self::read_stdin_line()?;
            self.term.write_line("")?;
            Ok(line)
        }
    }
}
