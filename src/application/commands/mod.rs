//! Interactive commands
//!
//! Each menu entry is a value implementing [`Command`]: one `run` that
//! owns its whole prompt, validate, compute cycle and returns the
//! message to display, whether the computation finished or the user
//! backed out.

mod convert;
mod cubes;
mod factorial;

pub use convert::ConversionCommand;
pub use cubes::CubeSumCommand;
pub use factorial::FactorialSumCommand;

use crate::application::error::ApplicationResult;
use crate::application::prompt::Prompter;

/// A single executable menu operation.
pub trait Command {
    /// Menu title, also used in the cancellation message.
    fn title(&self) -> &'static str;

    /// Run the command against the prompter and return the result line.
    /// Cancellation is a normal return, not an error.
    fn run(&self, prompter: &mut Prompter<'_>) -> ApplicationResult<String>;

    /// Message shown when the user cancels mid-command.
    fn cancelled(&self) -> String {
        format!("{} cancelled.", self.title())
    }
}
