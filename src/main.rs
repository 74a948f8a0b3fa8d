use std::path::PathBuf;

use clap::{ArgGroup, Args, CommandFactory, Parser, Subcommand};

use renamer::{Operation, RenameReport};

/// Batch-rename the entries of a directory
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true, args_conflicts_with_subcommands = true)]
struct Cli {
    /// Collect the operation interactively instead of from arguments
    #[arg(short, long)]
    prompt: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replace the first occurrence of a substring in every file name
    Replace {
        /// Directory whose entries are renamed
        dir: PathBuf,

        /// Text to replace
        #[arg(short, long)]
        old: String,

        /// Replacement text
        #[arg(short, long, default_value = "")]
        new: String,
    },

    /// Add text in front of every file name, or after it (before the extension)
    Append(AppendArgs),

    /// Rename every entry to its position in the listing, keeping extensions
    Number {
        /// Directory whose entries are renamed
        dir: PathBuf,
    },
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("text").required(true)))]
struct AppendArgs {
    /// Directory whose entries are renamed
    dir: PathBuf,

    /// Text added in front of the file name
    #[arg(short, long, group = "text")]
    before: Option<String>,

    /// Text added after the file name, before the extension
    #[arg(short, long, group = "text")]
    after: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (dir, operation) = if cli.prompt {
        renamer::prompt::collect()?
    } else if let Some(command) = cli.command {
        into_request(command)
    } else {
        // Not reachable through normal parsing (clap already insists on
        // some argument), but a bare "--" lands here. Report usage the
        // same way clap does: on stderr.
        eprint!("{}", Cli::command().render_help());
        std::process::exit(2);
    };

    let report = renamer::run(&dir, &operation)?;
    print_report(&report)
}

fn into_request(command: Command) -> (PathBuf, Operation) {
    match command {
        Command::Replace { dir, old, new } => (dir, Operation::Replace { old, new }),
        Command::Append(args) => (
            args.dir,
            Operation::Append {
                before: args.before.unwrap_or_default(),
                after: args.after.unwrap_or_default(),
            },
        ),
        Command::Number { dir } => (dir, Operation::Number),
    }
}

/// Print successful renames to stdout and per-entry failures to stderr.
/// Failures surface after the whole batch has run; they are not retried.
fn print_report(report: &RenameReport) -> anyhow::Result<()> {
    for (from, to) in &report.renamed {
        println!("{from} -> {to}");
    }
    println!(
        "Renamed {} entries, skipped {}.",
        report.renamed.len(),
        report.skipped
    );

    if !report.is_clean() {
        for (name, reason) in &report.failed {
            eprintln!("failed to rename '{name}': {reason}");
        }
        anyhow::bail!("{} entries could not be renamed", report.failed.len());
    }
    Ok(())
}
