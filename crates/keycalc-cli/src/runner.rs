//! Scripted key runner

use console::style;
use keycalc::adapter::{InputAction, KEY_BINDINGS};
use keycalc::core::{DisplayPair, FormatConfig, NumberLocale};
use keycalc::display::{MemoryDisplay, Session};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::OutputFormat;
use crate::error::{CliError, CliResult};

/// One applied key and the display it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Key as given on the command line
    pub key: String,
    /// Action the key mapped to
    pub action: InputAction,
    /// Display after the action
    pub display: DisplayPair,
}

/// Result of a scripted run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Locale used for display
    pub locale: NumberLocale,
    /// Final state tag
    pub state: String,
    /// Final display
    pub display: DisplayPair,
    /// Per-key displays, present when tracing
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

/// Applies key scripts to a fresh engine
#[derive(Debug, Clone, Default)]
pub struct ScriptRunner {
    format: FormatConfig,
}

impl ScriptRunner {
    /// Creates a runner with the given formatting configuration
    #[must_use]
    pub fn new(format: FormatConfig) -> Self {
        Self { format }
    }

    /// Maps every key to an action, failing on the first unknown one.
    ///
    /// Nothing is applied when any key is unknown.
    pub fn parse_keys<S: AsRef<str>>(keys: &[S]) -> CliResult<Vec<InputAction>> {
        keys.iter()
            .enumerate()
            .map(|(i, key)| {
                let key = key.as_ref();
                InputAction::from_key(key).ok_or_else(|| CliError::unknown_key(key, i + 1))
            })
            .collect()
    }

    /// Runs `keys` and reports the final display, plus every step when
    /// `trace` is set
    pub fn run<S: AsRef<str>>(&self, keys: &[S], trace: bool) -> CliResult<RunReport> {
        let actions = Self::parse_keys(keys)?;
        let mut session = Session::with_format(self.format, MemoryDisplay::new());
        for &action in &actions {
            session.apply(action);
        }

        let (engine, display) = session.into_parts();
        info!(keys = actions.len(), state = %engine.tag(), "script finished");

        let steps = if trace {
            // Frame 0 is the initial render
            keys.iter()
                .zip(&actions)
                .zip(display.frames().iter().skip(1))
                .map(|((key, &action), frame)| Step {
                    key: key.as_ref().to_string(),
                    action,
                    display: frame.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Ok(RunReport {
            locale: self.format.locale,
            state: engine.tag().to_string(),
            display: engine.display(),
            steps,
        })
    }
}

/// Renders a report in the requested format
pub fn render(report: &RunReport, output: OutputFormat, color: bool) -> CliResult<String> {
    debug!(?output, "rendering report");
    match output {
        OutputFormat::Text => Ok(render_text(report, color)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn display_line(display: &DisplayPair, color: bool) -> String {
    let current = style(&display.current).bold().force_styling(color);
    if display.previous.is_empty() {
        current.to_string()
    } else {
        let previous = style(&display.previous).dim().force_styling(color);
        format!("{previous} | {current}")
    }
}

/// Text output: the final display, or one line per key when traced
#[must_use]
pub fn render_text(report: &RunReport, color: bool) -> String {
    if report.steps.is_empty() {
        return display_line(&report.display, color);
    }
    report
        .steps
        .iter()
        .map(|step| {
            let key = style(format!("{:<10}", step.key)).cyan().force_styling(color);
            format!("{key} {}", display_line(&step.display, color))
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Key binding table for `keycalc keys`
#[must_use]
pub fn render_key_bindings(color: bool) -> String {
    KEY_BINDINGS
        .iter()
        .map(|(keys, desc)| {
            let keys = style(format!("{keys:<12}")).yellow().force_styling(color);
            format!("{keys} {desc}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
