//! Factorial-sum command

use tracing::{debug, instrument};

use crate::application::commands::Command;
use crate::application::error::ApplicationResult;
use crate::application::prompt::{PromptOutcome, Prompter};
use crate::domain::factorial::{factorial_sum, render_sum, MAX_TERM, TERM_COUNT};

/// Collects three whole numbers and computes the sum of their factorials.
#[derive(Debug, Default)]
pub struct FactorialSumCommand;

impl Command for FactorialSumCommand {
    fn title(&self) -> &'static str {
        "Sum of factorials"
    }

    #[instrument(skip_all)]
    fn run(&self, prompter: &mut Prompter<'_>) -> ApplicationResult<String> {
        prompter
            .console()
            .write_line("Compute a! + b! + c! for three whole numbers.");
        let mut terms = [0u32; TERM_COUNT];
        for (i, term) in terms.iter_mut().enumerate() {
            let prompt = format!("Term {} of {} [0-{}]:", i + 1, TERM_COUNT, MAX_TERM);
            match prompter.read_natural(&prompt, 0, MAX_TERM)? {
                PromptOutcome::Value(value) => *term = value,
                PromptOutcome::Cancelled => return Ok(self.cancelled()),
            }
        }
        debug!("computing factorial sum of {:?}", terms);
        let sum = factorial_sum(&terms);
        let cap = prompter.settings().max_result_digits;
        Ok(render_sum(&terms, &sum, cap))
    }
}
