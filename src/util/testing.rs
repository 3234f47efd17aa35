//! Test support: logging init and a scripted console double

use std::collections::VecDeque;
use std::env;
use std::io;
use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::infrastructure::console::Console;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "debug");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test setup complete");
    });
}

fn setup_test_logging() {
    // Create a filter for noisy modules
    let noisy_modules: [&str; 0] = [];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::ENTER)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Console double driven by a fixed input script.
///
/// `read_line` pops the next scripted line; an exhausted script reads as
/// end of input. Everything written is captured for assertions, with
/// items carrying the same two-space indent the real console prints.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn with_input(lines: &[&str]) -> Self {
        Self {
            inputs: lines.iter().map(|s| s.to_string()).collect(),
            transcript: Vec::new(),
        }
    }

    /// Whole transcript as one string, for substring assertions.
    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.inputs.pop_front())
    }

    fn write_line(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }

    fn write_item(&mut self, text: &str) {
        self.transcript.push(format!("  {}", text));
    }

    fn write_prompt(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }
}
