//! Terminal implementation of the `Prompter` port using `dialoguer`.

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Password, Select};

use crate::application::ports::Prompter;
use crate::domain::SetupError;

/// Interactive prompter. In non-interactive mode it never touches the
/// terminal: selection fails and secret input reports "unavailable".
pub struct DialoguerPrompter {
    non_interactive: bool,
}

impl DialoguerPrompter {
    #[must_use]
    pub fn new(non_interactive: bool) -> Self {
        Self { non_interactive }
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, items: &[&str]) -> Result<Option<usize>> {
        if self.non_interactive {
            return Err(SetupError::NonInteractive("No provider was given.".to_string()).into());
        }
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(choice)
    }

    fn secret(&self, prompt: &str) -> Result<Option<String>> {
        if self.non_interactive {
            return Ok(None);
        }
        let value = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?;
        Ok(Some(value))
    }
}
