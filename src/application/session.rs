//! Interactive session: the menu dispatcher
//!
//! A four-state machine drives the whole program: main menu, running the
//! chosen command, confirming whether to continue, terminated. Every
//! transition goes through the prompter, so exit keywords and end of
//! input behave the same everywhere.

use tracing::{debug, instrument};

use crate::application::commands::{
    Command, ConversionCommand, CubeSumCommand, FactorialSumCommand,
};
use crate::application::error::ApplicationResult;
use crate::application::prompt::{PromptOutcome, Prompter};
use crate::config::Settings;
use crate::infrastructure::console::Console;

/// Dispatcher states. `RunningCommand` carries the selected menu index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    MainMenu,
    RunningCommand(usize),
    ConfirmExit,
    Terminated,
}

/// One interactive run over a console.
pub struct Session<'a> {
    console: &'a mut dyn Console,
    settings: &'a Settings,
    commands: Vec<Box<dyn Command>>,
}

impl<'a> Session<'a> {
    pub fn new(console: &'a mut dyn Console, settings: &'a Settings) -> Self {
        let commands: Vec<Box<dyn Command>> = vec![
            Box::new(CubeSumCommand),
            Box::new(FactorialSumCommand),
            Box::new(ConversionCommand),
        ];
        Self {
            console,
            settings,
            commands,
        }
    }

    /// Drive the state machine until the user ends the program.
    #[instrument(skip_all)]
    pub fn run(&mut self) -> ApplicationResult<()> {
        self.console
            .write_line("mathbox - interactive numeric toolkit");
        let keywords = self.settings.exit_keywords.join(", ");
        self.console.write_line(&format!(
            "Type one of [{}] at any prompt to back out.",
            keywords
        ));
        self.console.write_line("");

        let mut state = SessionState::MainMenu;
        loop {
            debug!("session state: {:?}", state);
            state = match state {
                SessionState::MainMenu => self.main_menu()?,
                SessionState::RunningCommand(index) => self.run_command(index)?,
                SessionState::ConfirmExit => self.confirm_exit()?,
                SessionState::Terminated => {
                    self.console.write_line("Goodbye.");
                    return Ok(());
                }
            };
        }
    }

    fn main_menu(&mut self) -> ApplicationResult<SessionState> {
        let titles: Vec<&str> = self.commands.iter().map(|c| c.title()).collect();
        let mut prompter = Prompter::new(&mut *self.console, self.settings);
        match prompter.read_menu_choice("Main menu:", &titles)? {
            PromptOutcome::Value(choice) => Ok(SessionState::RunningCommand(choice - 1)),
            PromptOutcome::Cancelled => Ok(SessionState::Terminated),
        }
    }

    fn run_command(&mut self, index: usize) -> ApplicationResult<SessionState> {
        let command = &self.commands[index];
        debug!("running {:?}", command.title());
        let mut prompter = Prompter::new(&mut *self.console, self.settings);
        let message = command.run(&mut prompter)?;
        self.console.write_line(&message);
        self.console.write_line("");
        Ok(SessionState::ConfirmExit)
    }

    fn confirm_exit(&mut self) -> ApplicationResult<SessionState> {
        let mut prompter = Prompter::new(&mut *self.console, self.settings);
        match prompter.read_yes_no("Return to the main menu?")? {
            PromptOutcome::Value(true) => {
                self.console.write_line("");
                Ok(SessionState::MainMenu)
            }
            PromptOutcome::Value(false) | PromptOutcome::Cancelled => {
                Ok(SessionState::Terminated)
            }
        }
    }
}
