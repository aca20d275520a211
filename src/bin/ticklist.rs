use anyhow::Result;
use std::env;
use std::io;
use std::sync::Arc;
use ticklist::cli::{self, Command};
use ticklist::config::Config;
use ticklist::context::{SharedContext, StandardContext};
use ticklist::logging;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let parsed = match cli::parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    if parsed.command == Command::Help {
        cli::print_help(&mut io::stdout(), "ticklist")?;
        return Ok(());
    }

    let ctx: SharedContext = Arc::new(StandardContext::new(parsed.root));

    // A broken config is reported instead of silently replaced.
    let cfg = match Config::load(ctx.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration:\n{}", e);
            std::process::exit(1);
        }
    };

    match parsed.command {
        Command::Tui => run_tui(ctx, &cfg),
        command => {
            if let Err(e) = logging::init_stderr_logger(cfg.log_level_filter()) {
                eprintln!("Warning: logging disabled: {}", e);
            }
            cli::execute(&command, ctx.as_ref(), &cfg, &mut io::stdout().lock())
        }
    }
}

#[cfg(feature = "tui")]
fn run_tui(ctx: SharedContext, cfg: &Config) -> Result<()> {
    if let Err(e) = logging::init_file_logger(ctx.as_ref(), cfg.log_level_filter()) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    ticklist::tui::run(ctx, cfg)
}

#[cfg(not(feature = "tui"))]
fn run_tui(_ctx: SharedContext, _cfg: &Config) -> Result<()> {
    anyhow::bail!("This build has no TUI; see --help for the available commands")
}
