use blezz::core::config::{self, CliOverrides};
use blezz::core::parser;
use blezz::{Menu, ShellExecutor, term};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::Path;

#[derive(Parser)]
#[command(name = "blezz", about = "Hotkey-driven nested command menus")]
struct Args {
    /// Content file describing the menus
    #[arg(short, long)]
    content: Option<String>,

    /// Directory to start in instead of the first one declared
    #[arg(short, long)]
    directory: Option<String>,

    /// Print the current listing and exit
    #[arg(long)]
    list: bool,

    /// Activate entries by hotkey without a terminal UI (repeatable)
    #[arg(short, long = "select", value_name = "HOTKEY")]
    select: Vec<String>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(path: &Path, verbose: bool) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // The logger needs the resolved log path, so config loading can't log yet.
    let config_missing = config::config_path().is_some_and(|p| !p.exists());
    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("blezz: {e}; using defaults");
        config::BlezzConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        CliOverrides {
            content: args.content.as_deref(),
            directory: args.directory.as_deref(),
        },
    );

    init_logging(&resolved.log_file, args.verbose);
    log::info!("blezz starting with content {}", resolved.content_path.display());
    match config::config_path() {
        Some(path) if config_missing => {
            log::info!("No config file found, generated default at {}", path.display())
        }
        Some(path) => log::info!("Config file {}", path.display()),
        None => log::warn!("Could not determine config directory, using default config"),
    }
    log::debug!("Resolved config: {:?}", resolved);

    let forest = parser::load(&resolved.content_path);
    let mut menu = Menu::new(forest, Box::new(ShellExecutor::new(resolved.shell.clone())));

    if let Some(name) = resolved.start_directory.as_deref() {
        if !menu.enter_directory(name) {
            log::warn!("Start directory '{}' not found", name);
        }
    }

    if !args.select.is_empty() && !term::select_hotkeys(&mut menu, &args.select) {
        eprintln!("blezz: stopped at '{}'", menu.breadcrumb());
        std::process::exit(1);
    }

    if args.list {
        return term::print_listing(&mut std::io::stdout(), &menu);
    }
    if !args.select.is_empty() {
        return Ok(());
    }

    term::run(&mut menu, &resolved.content_path)
}
