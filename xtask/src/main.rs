//! Reference docs for the `ansi-highlight` binary, rendered from its clap tree.
//!
//! `cargo xtask gen-docs` writes one man page per command plus a
//! COMMANDS.md overview of every subcommand and its arguments.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};

use ansi_highlight::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Render ansi-highlight reference docs")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Write man pages and COMMANDS.md for every ansi-highlight command
    #[command(name = "gen-docs")]
    GenDocs {
        /// Directory that receives man/ and COMMANDS.md
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Only write the man pages
        #[arg(long)]
        man: bool,

        /// Only write COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            let both = man == markdown;
            if both || man {
                write_man_pages(&output)?;
            }
            if both || markdown {
                write_command_reference(&output)?;
            }
        }
    }

    Ok(())
}

fn render_man(cmd: &Command, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    fs::write(path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// `ansi-highlight.1`, then `ansi-highlight-<cmd>.1` and
/// `ansi-highlight-config-<cmd>.1` for nested commands.
fn write_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    let bin = cmd.get_name().to_string();

    render_man(&cmd, &man_dir.join(format!("{}.1", bin)))?;

    for subcommand in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let name = subcommand.get_name();
        render_man(subcommand, &man_dir.join(format!("{}-{}.1", bin, name)))?;

        for nested in subcommand.get_subcommands().filter(|c| !c.is_hide_set()) {
            let nested_name = nested.get_name();
            render_man(
                nested,
                &man_dir.join(format!("{}-{}-{}.1", bin, name, nested_name)),
            )?;
        }
    }

    println!("Man pages written to {}", man_dir.display());
    Ok(())
}

fn is_builtin(arg: &Arg) -> bool {
    let id = arg.get_id().as_str();
    id == "help" || id == "version"
}

/// Append `- `<NAME>`: help` / `- `-s, --long`: help` bullets for `cmd`'s arguments.
fn push_arguments(markdown: &mut String, cmd: &Command, headings: bool) {
    let args: Vec<&Arg> = cmd.get_arguments().filter(|a| !is_builtin(a)).collect();
    let (positional, options): (Vec<&Arg>, Vec<&Arg>) =
        args.into_iter().partition(|a| a.is_positional());

    if !positional.is_empty() {
        if headings {
            markdown.push_str("### Arguments\n\n");
        }
        for arg in positional {
            markdown.push_str(&format!("- `<{}>`: ", arg.get_id().as_str().to_uppercase()));
            if let Some(help) = arg.get_help() {
                markdown.push_str(&help.to_string());
            }
            markdown.push('\n');
        }
        markdown.push('\n');
    }

    if !options.is_empty() {
        if headings {
            markdown.push_str("### Options\n\n");
        }
        for arg in options {
            let long = arg.get_long().map(|l| format!("--{}", l));
            let short = arg.get_short().map(|s| format!("-{}", s));
            let flag = match (long, short) {
                (Some(l), Some(s)) => format!("{}, {}", s, l),
                (Some(l), None) => l,
                (None, Some(s)) => s,
                _ => continue,
            };
            markdown.push_str(&format!("- `{}`: ", flag));
            if let Some(help) = arg.get_help() {
                markdown.push_str(&help.to_string());
            }
            markdown.push('\n');
        }
        markdown.push('\n');
    }
}

fn push_code_block(markdown: &mut String, text: &impl std::fmt::Display) {
    markdown.push_str("```\n");
    markdown.push_str(&format!("{}\n", text));
    markdown.push_str("```\n\n");
}

fn write_command_reference(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    let mut markdown = String::new();

    markdown.push_str(&format!("# {} Command Reference\n\n", bin));
    markdown.push_str(
        "Every command reads text with ANSI SGR escape sequences from a file or stdin.\n\n",
    );
    markdown.push_str("## Commands\n\n");

    for subcommand in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let name = subcommand.get_name();
        markdown.push_str(&format!("- [{}](#{}-{})\n", name, bin, name));
    }
    markdown.push_str("\n---\n\n");

    markdown.push_str(&format!("## {}\n\n", bin));
    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }
    if let Some(long_about) = cmd.get_long_about() {
        push_code_block(&mut markdown, long_about);
    }
    push_arguments(&mut markdown, &cmd, true);

    for subcommand in cmd.get_subcommands().filter(|c| !c.is_hide_set()) {
        let name = subcommand.get_name();
        markdown.push_str(&format!("## {} {}\n\n", bin, name));

        if let Some(about) = subcommand.get_about() {
            markdown.push_str(&format!("{}\n\n", about));
        }

        push_arguments(&mut markdown, subcommand, true);

        if let Some(long_about) = subcommand.get_long_about() {
            markdown.push_str("### Description\n\n");
            push_code_block(&mut markdown, long_about);
        }

        let nested: Vec<_> = subcommand
            .get_subcommands()
            .filter(|c| !c.is_hide_set())
            .collect();
        if !nested.is_empty() {
            markdown.push_str("### Subcommands\n\n");
            for nested_cmd in nested {
                markdown.push_str(&format!("#### {} {} {}\n\n", bin, name, nested_cmd.get_name()));
                if let Some(about) = nested_cmd.get_about() {
                    markdown.push_str(&format!("{}\n\n", about));
                }
                push_arguments(&mut markdown, nested_cmd, false);
                if let Some(long_about) = nested_cmd.get_long_about() {
                    push_code_block(&mut markdown, long_about);
                }
            }
        }

        markdown.push_str("---\n\n");
    }

    markdown.push_str("\n*Rendered from `src/cli.rs` by `cargo xtask gen-docs`.*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    println!("Generated: {}", output_path.display());

    Ok(())
}
