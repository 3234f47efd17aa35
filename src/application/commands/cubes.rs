//! Sum-of-cubes command

use tracing::{debug, instrument};

use crate::application::commands::Command;
use crate::application::error::ApplicationResult;
use crate::application::prompt::{PromptOutcome, Prompter};
use crate::domain::cubes::{sum_of_cubes, MAX_N, MIN_N};

/// Computes 1^3 + 2^3 + ... + n^3 for a prompted n.
#[derive(Debug, Default)]
pub struct CubeSumCommand;

impl Command for CubeSumCommand {
    fn title(&self) -> &'static str {
        "Sum of cubes"
    }

    #[instrument(skip_all)]
    fn run(&self, prompter: &mut Prompter<'_>) -> ApplicationResult<String> {
        prompter
            .console()
            .write_line("Compute 1^3 + 2^3 + ... + n^3.");
        let prompt = format!("Enter n [{}-{}]:", MIN_N, MAX_N);
        let n = match prompter.read_natural(&prompt, MIN_N, MAX_N)? {
            PromptOutcome::Value(n) => n,
            PromptOutcome::Cancelled => return Ok(self.cancelled()),
        };
        let total = sum_of_cubes(n);
        debug!("sum_of_cubes({}) = {}", n, total);
        Ok(format!("The sum of the first {} cubes is {}.", n, total))
    }
}
