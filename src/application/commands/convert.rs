//! Temperature conversion command

use tracing::{debug, instrument};

use crate::application::commands::Command;
use crate::application::error::ApplicationResult;
use crate::application::prompt::{PromptOutcome, Prompter};
use crate::domain::units::{convert, TempUnit};

/// Converts a prompted temperature between two prompted units.
#[derive(Debug, Default)]
pub struct ConversionCommand;

impl ConversionCommand {
    /// Two-stage unit menu with confirmation. Loops until the user
    /// confirms a pair or cancels; declining the confirmation starts
    /// the selection over.
    fn pick_units(
        &self,
        prompter: &mut Prompter<'_>,
    ) -> ApplicationResult<PromptOutcome<(TempUnit, TempUnit)>> {
        let options = TempUnit::ALL.map(TempUnit::label);
        loop {
            let from = match prompter.read_menu_choice("Convert from:", &options)? {
                PromptOutcome::Value(i) => TempUnit::ALL[i - 1],
                PromptOutcome::Cancelled => return Ok(PromptOutcome::Cancelled),
            };
            let to = match self.pick_target(prompter, from)? {
                PromptOutcome::Value(unit) => unit,
                PromptOutcome::Cancelled => return Ok(PromptOutcome::Cancelled),
            };
            match prompter.read_yes_no(&format!("Convert {} to {}?", from, to))? {
                PromptOutcome::Value(true) => return Ok(PromptOutcome::Value((from, to))),
                PromptOutcome::Value(false) => continue,
                PromptOutcome::Cancelled => return Ok(PromptOutcome::Cancelled),
            }
        }
    }

    /// Target unit menu; re-prompts while the selection equals `from`.
    fn pick_target(
        &self,
        prompter: &mut Prompter<'_>,
        from: TempUnit,
    ) -> ApplicationResult<PromptOutcome<TempUnit>> {
        let options = TempUnit::ALL.map(TempUnit::label);
        loop {
            let to = match prompter.read_menu_choice("Convert to:", &options)? {
                PromptOutcome::Value(i) => TempUnit::ALL[i - 1],
                PromptOutcome::Cancelled => return Ok(PromptOutcome::Cancelled),
            };
            if to == from {
                prompter.console().write_line(&format!(
                    "Source and target must differ; already converting from {}.",
                    from
                ));
                continue;
            }
            return Ok(PromptOutcome::Value(to));
        }
    }
}

impl Command for ConversionCommand {
    fn title(&self) -> &'static str {
        "Temperature conversion"
    }

    #[instrument(skip_all)]
    fn run(&self, prompter: &mut Prompter<'_>) -> ApplicationResult<String> {
        let (from, to) = match self.pick_units(prompter)? {
            PromptOutcome::Value(pair) => pair,
            PromptOutcome::Cancelled => return Ok(self.cancelled()),
        };
        let floor = from.absolute_zero();
        let prompt = format!("Temperature in degrees {} (at least {}):", from, floor);
        let value = match prompter.read_decimal_at_least(&prompt, floor)? {
            PromptOutcome::Value(value) => value,
            PromptOutcome::Cancelled => return Ok(self.cancelled()),
        };
        let result = convert(from, to, value);
        debug!("convert {} {} -> {} {}", value, from, result, to);
        Ok(format!(
            "{} degrees {} is {} degrees {}",
            value, from, result, to
        ))
    }
}
