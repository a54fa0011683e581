//! Astral-style CLI output formatting.
//!
//! Provides consistent terminal output with support for JSON mode (for
//! scripting) and quiet mode. Operator output never includes credential
//! values. While the trading program runs it owns stdout, so the launch
//! command moves its own lines to stderr with [`use_stderr`].

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::{OwoColorize, Stream, Style};
use serde_json::json;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Write every line to stderr instead of stdout.
    pub stderr: bool,
}

impl OutputConfig {
    /// Create a new output configuration writing to stdout.
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self {
            json,
            quiet,
            stderr: false,
        }
    }
}

/// Global output configuration singleton.
static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Check if regular (non-JSON) output should be suppressed.
fn regular_output_suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

fn stream(config: OutputConfig) -> Stream {
    if config.stderr {
        Stream::Stderr
    } else {
        Stream::Stdout
    }
}

fn print_line(config: OutputConfig, line: impl Display) {
    if config.stderr {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

/// Emit a JSON line with type and payload structure.
fn emit_json_line(config: OutputConfig, kind: &str, payload: serde_json::Value) {
    print_line(
        config,
        json!({
            "type": kind,
            "payload": payload,
        }),
    );
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

/// Send all further output to stderr, leaving stdout to a child process.
pub fn use_stderr() {
    write_config(OutputConfig {
        stderr: true,
        ..read_config()
    });
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let config = read_config();
    let value = value.to_string();

    if config.json {
        emit_json_line(
            config,
            "field",
            json!({
                "label": label,
                "value": value,
            }),
        );
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    let label = format!("{label:<16}");
    print_line(
        config,
        format_args!(
            "  {} {}",
            label.if_supports_color(stream(config), |t| t.dimmed()),
            value
        ),
    );
}

/// Print a success line.
pub fn success(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line(config, "success", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    print_line(
        config,
        format_args!(
            "  {} {}",
            "✓".if_supports_color(stream(config), |t| t.green()),
            message
        ),
    );
}

/// Print a warning line.
pub fn warning(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line(config, "warning", json!({ "message": message }));
        return;
    }

    print_line(
        config,
        format_args!(
            "  {} {}",
            "⚠".if_supports_color(stream(config), |t| t.yellow()),
            message
        ),
    );
}

/// Print an error line.
pub fn error(message: &str) {
    let config = read_config();

    if config.json {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!(
        "  {} {}",
        "×".if_supports_color(Stream::Stderr, |t| t.red()),
        message
    );
}

/// Print a section header.
pub fn section(title: &str) {
    let config = read_config();

    if config.json {
        emit_json_line(config, "section", json!({ "title": title }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    print_line(config, "");
    print_line(
        config,
        title.if_supports_color(stream(config), |t| t.bold()),
    );
}

/// Print a note.
pub fn note(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line(config, "note", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    print_line(
        config,
        format_args!(
            "  {}",
            message.if_supports_color(stream(config), |t| t.dimmed())
        ),
    );
}

/// Print a hint with "hint:" prefix.
pub fn hint(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line(config, "hint", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    print_line(
        config,
        format_args!(
            "  {}: {}",
            "hint".if_supports_color(stream(config), |t| t.style(Style::new().cyan().dimmed())),
            message.if_supports_color(stream(config), |t| t.dimmed())
        ),
    );
}

/// Print an action in progress ("Launching...", "Pushing...").
pub fn action(verb: &str, target: &str) {
    let config = read_config();

    if config.json {
        emit_json_line(
            config,
            "action",
            json!({
                "verb": verb,
                "target": target,
                "status": "in_progress",
            }),
        );
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    print_line(
        config,
        format_args!(
            "  {} {}...",
            verb.if_supports_color(stream(config), |t| t.style(Style::new().bold().cyan())),
            target
        ),
    );
}

/// Format a dimmed/muted value.
pub fn muted(value: impl Display) -> String {
    let config = read_config();
    let value = value.to_string();
    if config.json {
        return value;
    }
    format!(
        "{}",
        value.if_supports_color(stream(config), |t| t.dimmed())
    )
}
