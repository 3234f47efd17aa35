//! Read-until-valid prompting
//!
//! One retry loop serves every prompt in the program: write the prompt,
//! read a line, check for an exit keyword, run the validator, and either
//! hand the value back or print the rejection and ask again.

use tracing::debug;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::validate::{parse_decimal_at_least, parse_menu_choice, parse_natural_in_range};
use crate::domain::Rejection;
use crate::infrastructure::console::Console;

/// What a prompt produced: a validated value, or the user backing out
/// via an exit keyword or end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome<T> {
    Value(T),
    Cancelled,
}

/// Prompting front end shared by the session and all commands.
pub struct Prompter<'a> {
    console: &'a mut dyn Console,
    settings: &'a Settings,
}

impl<'a> Prompter<'a> {
    pub fn new(console: &'a mut dyn Console, settings: &'a Settings) -> Self {
        Self { console, settings }
    }

    pub fn settings(&self) -> &Settings {
        self.settings
    }

    /// Direct console access for banners and result lines.
    pub fn console(&mut self) -> &mut dyn Console {
        &mut *self.console
    }

    /// Read a whole number within an inclusive range.
    pub fn read_natural(
        &mut self,
        prompt: &str,
        min: u32,
        max: u32,
    ) -> ApplicationResult<PromptOutcome<u32>> {
        self.read_until_valid(prompt, |raw| parse_natural_in_range(raw, min, max))
    }

    /// Read a real number with an inclusive lower bound.
    pub fn read_decimal_at_least(
        &mut self,
        prompt: &str,
        floor: f64,
    ) -> ApplicationResult<PromptOutcome<f64>> {
        self.read_until_valid(prompt, |raw| parse_decimal_at_least(raw, floor))
    }

    /// Render numbered options under a heading and read a 1-based pick.
    pub fn read_menu_choice(
        &mut self,
        heading: &str,
        options: &[&str],
    ) -> ApplicationResult<PromptOutcome<usize>> {
        self.console.write_line(heading);
        for (i, option) in options.iter().enumerate() {
            self.console.write_item(&format!("{}) {}", i + 1, option));
        }
        let prompt = format!("Choice [1-{}]:", options.len());
        self.read_until_valid(&prompt, |raw| parse_menu_choice(raw, options.len()))
    }

    /// Yes/no question; accepts y, yes, n, no in any case.
    pub fn read_yes_no(&mut self, question: &str) -> ApplicationResult<PromptOutcome<bool>> {
        let prompt = format!("{} [y/n]:", question);
        self.read_until_valid(&prompt, |raw| match raw.to_ascii_lowercase().as_str() {
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            _ => Err(Rejection::NotYesNo),
        })
    }

    /// The shared retry loop. Exhausted input counts as cancellation so
    /// piped sessions end cleanly instead of spinning.
    fn read_until_valid<T>(
        &mut self,
        prompt: &str,
        validate: impl Fn(&str) -> Result<T, Rejection>,
    ) -> ApplicationResult<PromptOutcome<T>> {
        loop {
            self.console.write_prompt(prompt);
            let line = self.console.read_line().map_err(|e| {
                ApplicationError::console(format!("reading response to {:?}", prompt), e)
            })?;
            let Some(line) = line else {
                debug!("input exhausted, treating as cancellation");
                return Ok(PromptOutcome::Cancelled);
            };
            if self.is_exit_keyword(&line) {
                debug!("exit keyword {:?}", line);
                return Ok(PromptOutcome::Cancelled);
            }
            match validate(&line) {
                Ok(value) => return Ok(PromptOutcome::Value(value)),
                Err(rejection) => {
                    debug!("rejected {:?}: {}", line, rejection);
                    self.console
                        .write_line(&format!("Invalid input: {}.", rejection));
                }
            }
        }
    }

    /// Case-insensitive match against the configured exit keywords. The
    /// line is compared as typed; surrounding whitespace defeats it.
    fn is_exit_keyword(&self, line: &str) -> bool {
        self.settings
            .exit_keywords
            .iter()
            .any(|kw| line.eq_ignore_ascii_case(kw))
    }
}
