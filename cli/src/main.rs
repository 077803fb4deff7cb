mod console;
mod menu;
mod table;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rollcall_core::repository::file::DEFAULT_FILE_NAME;
use rollcall_core::{AttendanceService, FileRegisterRepository};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::console::Console;
use crate::menu::Menu;

#[derive(Parser)]
#[command(name = "rollcall")]
#[command(about = "Menu-driven classroom attendance tracker", long_about = None)]
struct Cli {
    /// JSON file holding the roster and attendance ledger
    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    data_file: PathBuf,

    /// Directory CSV exports are written to
    #[arg(long, default_value = ".")]
    export_dir: PathBuf,

    /// Log more to stderr (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("rollcall={level},rollcall_core={level}"))
    });

    // stdout belongs to the menu.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let repo = FileRegisterRepository::new(cli.data_file);
    let mut service = AttendanceService::new(repo);

    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut menu = Menu::new(console, &mut service, cli.export_dir);
    let end = menu.start()?;
    debug!(?end, "session finished");

    Ok(())
}
