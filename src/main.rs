//! Purpose: `jsontree` CLI entry point.
//! Role: Binary crate root; parses args, runs commands, emits JSON on stdout.
//! Invariants: Commands emit stable stdout formats (JSON documents, or a type name for `kind`).
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
//! Invariants: Diagnostics go through `tracing` on stderr; stdout carries only payloads.
#![allow(clippy::result_large_err)]
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand, ValueEnum, ValueHint, error::ErrorKind as ClapErrorKind,
};
use clap_complete::aot::Shell;
use jsontree::api::{
    Document, Error, ErrorKind, LoadOptions, Loader, WriteStyle, merge_all, to_exit_code,
};
use jsontree::render::render;
use serde_json::{Map, Value, json};
use std::error::Error as StdError;
use tracing_subscriber::EnvFilter;

mod command_dispatch;

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }

    fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, (Error, ColorMode)> {
    let cli = match Cli::try_parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome::with_code(exit_code));
            }
            _ => {
                let message = clap_error_summary(&err);
                return Err((
                    Error::new(ErrorKind::Usage)
                        .with_message(message)
                        .with_hint("Try `jsontree --help`."),
                    ColorMode::Auto,
                ));
            }
        },
    };

    let color_mode = cli.color;
    let loader = Loader::new(LoadOptions::from_env());

    command_dispatch::dispatch_command(cli.command, &loader, color_mode)
        .map_err(add_parse_hint)
        .map_err(|err| (err, color_mode))
}

#[derive(Parser)]
#[command(
    name = "jsontree",
    version,
    about = "Load, deep-merge, and inspect JSON documents from files and URLs",
    long_about = None,
    after_help = r#"EXAMPLES
  $ jsontree merge defaults.json overrides.json
  $ jsontree merge base.json https://example.com/patch.json --output merged.json
  $ jsontree show settings.json --style compact
  $ jsontree kind settings.json --pointer /window/size

NOTES
  - Inputs starting with http:// or https:// are fetched; anything else is a file path.
  - Later merge inputs win on conflicts; nested objects merge key by key.
  - Set JSONTREE_HTTP_TIMEOUT_MS to change the fetch timeout; RUST_LOG controls diagnostics."#,
    arg_required_else_help = true
)]
struct Cli {
    #[arg(
        long,
        default_value = "auto",
        value_enum,
        help = "Colorize stderr diagnostics and JSON output: auto|always|never"
    )]
    color: ColorMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StyleArg {
    Pretty,
    Compact,
}

impl From<StyleArg> for WriteStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Pretty => WriteStyle::Pretty,
            StyleArg::Compact => WriteStyle::Compact,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    #[command(
        arg_required_else_help = true,
        about = "Deep-merge documents left to right",
        after_help = r#"EXAMPLES
  $ jsontree merge a.json b.json c.json
  $ jsontree merge a.json b.json --style compact --output out.json"#
    )]
    Merge {
        #[arg(
            required = true,
            help = "Documents to merge (file paths or http(s) URLs); the first is the base",
            value_hint = ValueHint::AnyPath
        )]
        inputs: Vec<String>,
        #[arg(long, value_enum, default_value = "pretty", help = "Output style")]
        style: StyleArg,
        #[arg(
            long,
            short,
            help = "Write the merged document to this path instead of stdout",
            value_hint = ValueHint::FilePath
        )]
        output: Option<PathBuf>,
    },
    #[command(arg_required_else_help = true, about = "Load a document and print it")]
    Show {
        #[arg(help = "File path or http(s) URL", value_hint = ValueHint::AnyPath)]
        input: String,
        #[arg(long, value_enum, default_value = "pretty", help = "Output style")]
        style: StyleArg,
    },
    #[command(
        arg_required_else_help = true,
        about = "Print the JSON type of a document or one of its members"
    )]
    Kind {
        #[arg(help = "File path or http(s) URL", value_hint = ValueHint::AnyPath)]
        input: String,
        #[arg(long, help = "JSON pointer to a member, e.g. /window/size")]
        pointer: Option<String>,
        #[arg(long, help = "Emit {\"kind\": ...} JSON instead of the bare name")]
        json: bool,
    },
    #[command(about = "Generate shell completions")]
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn emit_document(value: &Value, style: WriteStyle, color_mode: ColorMode) {
    let is_tty = io::stdout().is_terminal();
    println!("{}", render(value, style, color_mode.use_color(is_tty)));
}

fn add_parse_hint(err: Error) -> Error {
    if err.kind() == ErrorKind::Parse && err.hint().is_none() {
        return err.with_hint("Check that the input is a single well-formed JSON document.");
    }
    err
}

#[derive(Copy, Clone, Debug)]
enum AnsiColor {
    Red,
    Yellow,
}

fn colorize_label(label: &str, enabled: bool, color: AnsiColor) -> String {
    if !enabled {
        return label.to_string();
    }
    let code = match color {
        AnsiColor::Red => "31",
        AnsiColor::Yellow => "33",
    };
    format!("\u{1b}[{code}m{label}\u{1b}[0m")
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", error_text(err, color_mode.use_color(is_tty)));
        return;
    }

    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::NotFound => "not found".to_string(),
        ErrorKind::Permission => "permission denied".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
        ErrorKind::Parse => "invalid json".to_string(),
        ErrorKind::Remote => "remote request failed".to_string(),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(err.kind().as_str()));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(path) = err.path() {
        inner.insert("path".to_string(), json!(path.display().to_string()));
    }
    if let Some(url) = err.url() {
        inner.insert("url".to_string(), json!(url));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} {}",
        colorize_label("error:", use_color, AnsiColor::Red),
        error_message(err)
    ));
    if let Some(hint) = err.hint() {
        lines.push(format!(
            "{} {hint}",
            colorize_label("hint:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(path) = err.path() {
        lines.push(format!(
            "{} {}",
            colorize_label("path:", use_color, AnsiColor::Yellow),
            path.display()
        ));
    }
    if let Some(url) = err.url() {
        lines.push(format!(
            "{} {url}",
            colorize_label("url:", use_color, AnsiColor::Yellow)
        ));
    }
    lines.join("\n")
}

fn clap_error_summary(err: &clap::Error) -> String {
    for line in err.to_string().lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("error:") {
            return rest.trim().to_string();
        }
        return trimmed.to_string();
    }
    "invalid arguments".to_string()
}

#[cfg(test)]
mod tests {
    use super::{Cli, ColorMode, Command, StyleArg, error_json, error_text};
    use clap::Parser;
    use jsontree::api::{Error, ErrorKind, WriteStyle};

    #[test]
    fn error_text_respects_color_flag() {
        let err = Error::new(ErrorKind::Usage).with_message("bad input");
        let colored = error_text(&err, true);
        let plain = error_text(&err, false);
        assert!(colored.contains("\u{1b}[31merror:\u{1b}[0m"));
        assert!(plain.contains("error: bad input"));
        assert!(!plain.contains("\u{1b}["));
    }

    #[test]
    fn error_json_includes_context() {
        let err = Error::new(ErrorKind::NotFound)
            .with_message("failed to read json")
            .with_path("missing.json")
            .with_source(std::io::Error::other("no such file"));
        let value = error_json(&err);
        let inner = &value["error"];
        assert_eq!(inner["kind"], "NotFound");
        assert_eq!(inner["message"], "failed to read json");
        assert_eq!(inner["path"], "missing.json");
        assert_eq!(inner["causes"][0], "no such file");
        assert!(inner.get("url").is_none());
    }

    #[test]
    fn merge_parses_inputs_and_style() {
        let cli = Cli::try_parse_from([
            "jsontree", "--color", "never", "merge", "a.json", "b.json", "--style", "compact",
        ])
        .expect("parse");
        assert_eq!(cli.color, ColorMode::Never);
        match cli.command {
            Command::Merge {
                inputs,
                style,
                output,
            } => {
                assert_eq!(inputs, vec!["a.json", "b.json"]);
                assert_eq!(style, StyleArg::Compact);
                assert_eq!(WriteStyle::from(style), WriteStyle::Compact);
                assert!(output.is_none());
            }
            _ => panic!("expected merge"),
        }
    }

    #[test]
    fn color_mode_auto_follows_tty() {
        assert!(ColorMode::Auto.use_color(true));
        assert!(!ColorMode::Auto.use_color(false));
        assert!(ColorMode::Always.use_color(false));
        assert!(!ColorMode::Never.use_color(true));
    }
}
