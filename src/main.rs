use anyhow::Result;
use clap::Parser;
use delim_edit::config::config::Config;
use delim_edit::ui::tui_app::{
    open_files, restore_terminal, setup_terminal, EditorApp, TerminalPrompter, Tui,
};
use delim_edit::utils::logging::init_tracing;

mod cli;

use cli::CliArgs;

fn generate_config() -> Result<()> {
    let path = Config::get_config_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, Config::create_default_with_comments())?;
    println!("Configuration file created at: {}", path.display());
    Ok(())
}

fn edit(terminal: &mut Tui, args: &CliArgs, config: &Config) -> Result<()> {
    let (grid, ignored) = open_files(&args.files, &mut TerminalPrompter::new(terminal))?;

    let mut app = EditorApp::new(grid, config);
    if !ignored.is_empty() {
        tracing::warn!("Only the first file is edited, ignoring {:?}", ignored);
        app.set_status(format!(
            "Only the first file is edited; ignored {} other file(s)",
            ignored.len()
        ));
    }
    app.run(terminal)
}

fn run(args: &CliArgs, config: &Config) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = edit(&mut terminal, args, config);

    // Always restore terminal, even on error
    restore_terminal(&mut terminal);
    result
}

fn main() {
    let args = CliArgs::parse();

    if args.generate_config {
        if let Err(e) = generate_config() {
            eprintln!("Error writing config file: {:#}", e);
            std::process::exit(1);
        }
        return;
    }

    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {:#}. Using default settings.", e);
        Config::default()
    });
    if args.debug {
        config.display.show_debug = true;
    }

    let log_path = match init_tracing(&config.logging.level) {
        Ok(path) => Some(path),
        Err(e) => {
            eprintln!("Warning: {:#}", e);
            None
        }
    };

    if let Err(e) = run(&args, &config) {
        tracing::error!("{:#}", e);
        eprintln!("{:#}", e);
        std::process::exit(1);
    }

    if let (true, Some(path)) = (args.debug, log_path) {
        eprintln!("Debug log written to {}", path.display());
    }
}
