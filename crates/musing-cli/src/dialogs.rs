//! Terminal implementation of the view dialogs.

use std::io::{BufRead, Write};

use musing_core::port::Dialogs;

/// Prompts on stderr and reads answers from stdin.
///
/// With `assume_yes` every confirmation succeeds without prompting.
pub struct TerminalDialogs {
    assume_yes: bool,
}

impl TerminalDialogs {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[async_trait::async_trait]
impl Dialogs for TerminalDialogs {
    async fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{} [y/N] ", message);
        let _ = std::io::stderr().flush();

        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                tracing::warn!("[TerminalDialogs] Failed to read answer: {}", e);
                false
            }
        }
    }

    async fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}
