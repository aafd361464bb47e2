use fluentity_core::dialogue::Prompter;
use fluentity_core::error::PromptError;
use inquire::{Confirm, InquireError, Select, Text};

/// Prompter backed by the interactive terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn text(&mut self, message: &str) -> Result<String, PromptError> {
        Text::new(message).prompt().map_err(prompt_error)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        Confirm::new(message)
            .with_default(default)
            .prompt()
            .map_err(prompt_error)
    }

    fn select(&mut self, message: &str, choices: &[&str]) -> Result<String, PromptError> {
        Select::new(message, choices.to_vec())
            .prompt()
            .map(str::to_string)
            .map_err(prompt_error)
    }
}

fn prompt_error(err: InquireError) -> PromptError {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            PromptError::Cancelled
        }
        other => PromptError::Failed(other.to_string()),
    }
}
