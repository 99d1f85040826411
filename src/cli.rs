//! CLI definitions for ansi-highlight
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

/// Build clap styles for help output.
///
/// - Green: headers, usage, command names
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "ansi-highlight")]
#[command(about = "Parse ANSI SGR escape sequences into styled spans")]
#[command(
    long_about = "ansi-highlight - Parse ANSI SGR escape sequences into styled spans.

Reads text that contains terminal color and attribute codes (ESC [ ... m),
splits every line into spans that each carry one style, and reports them as
plain text, JSON, or editor decorations. Styles carry over from one line to
the next, the way a terminal would render them.

QUICK START:
    ansi-highlight spans build.log          Show the spans of every line
    ansi-highlight strip build.log          Print the text without escape codes
    ansi-highlight decorations build.log    Group spans into decorations

Use '-' as FILE to read from stdin."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Treat SGR 21 as double underline (overrides the config file)
    #[arg(long, global = true)]
    pub double_underline: bool,

    /// Log parser activity to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the spans of every line
    #[command(long_about = "Parse a file and print the spans of every line.

Each span is printed as LINE:OFFSET+LENGTH followed by its kind (text or
escape) and its style. Offsets are byte offsets into the raw line.

EXAMPLES:
    ansi-highlight spans build.log
    ansi-highlight spans build.log --json
    cargo build --color=always 2>&1 | ansi-highlight spans -")]
    Spans {
        /// File to parse, or '-' for stdin
        #[arg(help = "File to parse, or '-' for stdin")]
        file: String,
        /// Print JSON instead of one span per line
        #[arg(long, help = "Print spans as JSON")]
        json: bool,
    },

    /// Print the text without escape sequences
    #[command(long_about = "Print the text of a file with every recognized SGR sequence removed.

Malformed or non-SGR escape sequences are kept as text.

EXAMPLE:
    ansi-highlight strip build.log > build.txt")]
    Strip {
        /// File to parse, or '-' for stdin
        #[arg(help = "File to parse, or '-' for stdin")]
        file: String,
    },

    /// Group spans into editor decorations
    #[command(long_about = "Group the spans of a file by style and resolve each group into a decoration.

Prints a JSON array with one entry per distinct style: the decoration
(theme colors, bold, italic, text decoration, opacity) and the ranges it
applies to. Escape sequences share one dimmed decoration.

EXAMPLES:
    ansi-highlight decorations build.log
    ansi-highlight decorations build.log --pretty    Ranges for the stripped text")]
    Decorations {
        /// File to parse, or '-' for stdin
        #[arg(help = "File to parse, or '-' for stdin")]
        file: String,
        /// Decorate the escape-stripped text instead of the raw text
        #[arg(long, help = "Decorate the escape-stripped text")]
        pretty: bool,
    },

    /// Replace lines and show what was re-parsed
    #[command(long_about = "Parse a file, replace COUNT lines starting at START, and report the result.

Only the lines whose incoming style changed are re-parsed. The command
prints how many lines were affected and the new spans of those lines.

EXAMPLES:
    ansi-highlight splice build.log 2 1 $'\\e[31mnow red'
    ansi-highlight splice build.log 0 3               Delete the first three lines
    ansi-highlight splice build.log 5 0 one two       Insert two lines before line 5")]
    Splice {
        /// File to parse, or '-' for stdin
        #[arg(help = "File to parse, or '-' for stdin")]
        file: String,
        /// First line to replace (0-based)
        #[arg(help = "First line to replace (0-based)")]
        start: usize,
        /// Number of lines to remove
        #[arg(help = "Number of lines to remove")]
        count: usize,
        /// Lines to insert in their place
        #[arg(help = "Lines to insert")]
        lines: Vec<String>,
        /// Print JSON instead of one span per line
        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View the ansi-highlight configuration.

Configuration is stored in ~/.config/ansi-highlight/config.toml.

EXAMPLES:
    ansi-highlight config show    Display the effective configuration
    ansi-highlight config path    Print the config file location"
    )]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate a shell completion script.

EXAMPLES:
    ansi-highlight completions bash > ~/.local/share/bash-completion/completions/ansi-highlight
    ansi-highlight completions zsh > ~/.zfunc/_ansi-highlight")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}
