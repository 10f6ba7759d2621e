//! pagedash - main entry point

use anyhow::{Context, Result};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::{self, OpenOptions};
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use pagedash::app::App;
use pagedash::cli::{Cli, Commands};
use pagedash::config_file::ConfigStore;
use pagedash::menu::build_menu;
use pagedash::pages::{DEFAULT_PAGE, MANIFEST};
use pagedash::registry::discover_pages;

/// `RUST_LOG` if set, otherwise info
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to a file, the terminal belongs to the dashboard
fn init_file_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let command = cli.command();
    let store = cli.store();

    match command {
        Commands::Run => {
            init_file_logging(&cli.log_path())?;
            info!("pagedash starting up");
            run_dashboard(store)
        }
        Commands::Pages => {
            init_stderr_logging();
            print_pages(&store)
        }
        Commands::ShowConfig { json } => {
            init_stderr_logging();
            show_config(&store, json)
        }
        Commands::Init => {
            init_stderr_logging();
            let report = store.ensure_defaults().context("Failed to create defaults")?;
            let describe = |created: bool| if created { "created" } else { "exists" };
            println!(
                "{}: {}",
                store.theme_path().display(),
                describe(report.theme_created)
            );
            println!(
                "{}: {}",
                store.app_path().display(),
                describe(report.app_created)
            );
            Ok(())
        }
        Commands::Reset => {
            init_stderr_logging();
            store.reset().context("Failed to reset configuration")?;
            println!("Reset {} and {}", store.theme_path().display(), store.app_path().display());
            Ok(())
        }
    }
}

/// Run the interactive dashboard
fn run_dashboard(store: ConfigStore) -> Result<()> {
    debug!("Initializing terminal");
    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let result = (|| -> Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        let mut app = App::new(store);
        app.run(&mut terminal)?;
        Ok(())
    })();

    // Always attempt cleanup, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);

    result
}

fn print_pages(store: &ConfigStore) -> Result<()> {
    let snapshot = store.load().context("Failed to load configuration")?;
    let mut pages = discover_pages(MANIFEST);
    let menu = build_menu(&mut pages, snapshot.layout.orientation, Some(DEFAULT_PAGE));

    println!("{:>5}  {:<16} {:<10} {}", "ORDER", "LABEL", "ICON", "MODULE");
    for (index, page) in pages.iter().enumerate() {
        let marker = if menu.selected_index() == Some(index) { "*" } else { " " };
        println!(
            "{:>5}{} {:<16} {:<10} {}",
            page.order, marker, page.label, page.icon, page.identifier
        );
    }
    Ok(())
}

fn show_config(store: &ConfigStore, json: bool) -> Result<()> {
    let snapshot = store.load().context("Failed to load configuration")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let theme = &snapshot.theme;
    println!("status:                   {}", snapshot.status);
    println!("base:                     {}", theme.base);
    println!("primaryColor:             {}", theme.primary_color);
    println!("backgroundColor:          {}", theme.background_color);
    println!("secondaryBackgroundColor: {}", theme.secondary_background_color);
    println!("textColor:                {}", theme.text_color);
    println!("font:                     {}", theme.font);
    println!("orientation:              {}", snapshot.layout.orientation);
    println!("wide_mode:                {}", snapshot.layout.wide_mode);
    Ok(())
}
