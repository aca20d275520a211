// File: ./src/cli.rs
//! Command-line parsing and the non-interactive commands.
use crate::action::UserAction;
use crate::config::Config;
use crate::context::AppContext;
use crate::controller::ListController;
use crate::repository::Outcome;
use crate::storage::{FileStore, SnapshotStore};
use crate::view::{HtmlRenderer, NullRenderer, Renderer, TextRenderer};
use anyhow::{Result, bail};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tui,
    Help,
    Add(String),
    Toggle(String),
    Edit(String, String),
    List,
    Stats,
    Export,
    Html,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    pub command: Command,
}

/// Parses everything after the binary name.
///
/// Options are only read before the subcommand; everything after it is
/// positional, so item text may start with a dash.
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut root = None;
    let mut rest: Vec<&str> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--root" | "-r" => {
                let Some(path) = args.get(i + 1) else {
                    bail!("--root needs a path");
                };
                root = Some(PathBuf::from(path));
                i += 1; // Also consumed the value
            }
            "--help" | "-h" | "help" => {
                return Ok(CliArgs {
                    root,
                    command: Command::Help,
                });
            }
            "--" => {
                rest.extend(args[i + 1..].iter().map(String::as_str));
                break;
            }
            _ => {
                rest.extend(args[i..].iter().map(String::as_str));
                break;
            }
        }
        i += 1;
    }

    let command = match rest.as_slice() {
        [] => Command::Tui,
        ["add", text @ ..] if !text.is_empty() => Command::Add(text.join(" ")),
        ["toggle", id] => Command::Toggle(id.to_string()),
        ["edit", id, text @ ..] => Command::Edit(id.to_string(), text.join(" ")),
        ["list"] => Command::List,
        ["stats"] => Command::Stats,
        ["export"] => Command::Export,
        ["html"] => Command::Html,
        [cmd, ..] => bail!("Unknown or incomplete command '{}'. Try --help.", cmd),
    };

    Ok(CliArgs { root, command })
}

fn open_snapshots(ctx: &dyn AppContext, cfg: &Config) -> Result<SnapshotStore> {
    let store = FileStore::open(ctx, &cfg.storage_file)?;
    Ok(SnapshotStore::new(Box::new(store)))
}

/// Runs one non-interactive command, writing its output to `out`.
pub fn execute<W: Write>(
    command: &Command,
    ctx: &dyn AppContext,
    cfg: &Config,
    out: &mut W,
) -> Result<()> {
    let action = match command {
        Command::Tui => bail!("the TUI is not a one-shot command"),
        Command::Help => {
            print_help(out, "ticklist")?;
            return Ok(());
        }
        Command::Export => {
            let raw = open_snapshots(ctx, cfg)?.load_raw();
            writeln!(out, "{}", raw.as_deref().unwrap_or("[]"))?;
            return Ok(());
        }
        Command::Html => {
            let controller = ListController::new(open_snapshots(ctx, cfg)?, HtmlRenderer::new());
            write!(out, "{}", controller.renderer().output())?;
            return Ok(());
        }
        Command::Stats => {
            let controller = ListController::new(open_snapshots(ctx, cfg)?, NullRenderer);
            writeln!(out, "{}", controller.stats())?;
            return Ok(());
        }
        Command::List => None,
        Command::Add(text) => Some(UserAction::Submit(text.clone())),
        Command::Toggle(id) => Some(UserAction::Toggle(id.clone())),
        Command::Edit(id, text) => Some(UserAction::CommitEdit(id.clone(), text.clone())),
    };

    let mut controller = ListController::new(open_snapshots(ctx, cfg)?, NullRenderer);
    if let Some(action) = action {
        if controller.dispatch(action.clone()) == Outcome::Ignored {
            match action {
                UserAction::Submit(_) => writeln!(out, "Nothing to add: text is blank.")?,
                UserAction::Toggle(id) | UserAction::CommitEdit(id, _) => {
                    writeln!(out, "No item with id {}.", id)?
                }
                UserAction::BeginEdit(_) => {}
            }
        }
    }

    let repo = controller.repository();
    let mut listing = TextRenderer::new(out);
    listing.render(repo.items(), &repo.stats());
    Ok(())
}

pub fn print_help<W: Write>(out: &mut W, binary_name: &str) -> std::io::Result<()> {
    writeln!(
        out,
        "Ticklist v{} - A small local checklist (TUI & CLI)",
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(out)?;
    writeln!(out, "USAGE:")?;
    writeln!(out, "    {} [--root <path>]                      Start interactive TUI", binary_name)?;
    writeln!(out, "    {} [--root <path>] add <text...>        Add an item", binary_name)?;
    writeln!(out, "    {} [--root <path>] toggle <id>          Toggle done / not done", binary_name)?;
    writeln!(out, "    {} [--root <path>] edit <id> <text...>  Replace an item's text", binary_name)?;
    writeln!(out, "    {} [--root <path>] list                 Print items and counts", binary_name)?;
    writeln!(out, "    {} [--root <path>] stats                Print counts only", binary_name)?;
    writeln!(out, "    {} [--root <path>] export               Print the saved JSON snapshot", binary_name)?;
    writeln!(out, "    {} [--root <path>] html                 Print the list as HTML", binary_name)?;
    writeln!(out, "    {} --help                               Show this help message", binary_name)?;
    writeln!(out)?;
    writeln!(out, "OPTIONS:")?;
    writeln!(out, "    -r, --root <path>     Use a different directory for config and data.")?;
    writeln!(out, "    -h, --help            Show this help message.")?;
    writeln!(out, "    Options go before the command; use '--' to end them early.")?;
    writeln!(out)?;
    writeln!(out, "NOTES:")?;
    writeln!(out, "    Blank text is never saved: 'add' ignores it and 'edit' keeps the old text.")?;
    writeln!(out, "    Set TICKLIST_LOG=debug for verbose logs (TUI logs go to ticklist.log in the data dir).")?;
    writeln!(out)?;
    writeln!(out, "KEYBINDINGS:")?;
    writeln!(out, "    Press '?' inside the app for full interactive help")?;
    Ok(())
}
