//! Text Window - Entry Point

use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use textwindow::config;
use textwindow::logging::{self, LogTarget};
use textwindow::model::AppError;
use textwindow::platform::PlatformKind;
use textwindow::session::{TextWindow, ViewerOptions};
use textwindow::shell::TerminalShell;
use textwindow::text::DEMO_TEXT;
use tracing::info;

/// Text Window - full-screen scrollable text viewer
#[derive(Parser, Debug)]
#[command(name = "textwindow")]
#[command(version)]
#[command(about = "Show text full-screen with an exit (or reboot) button")]
pub struct Args {
    /// Path to a text file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Show built-in sample compiler output
    #[arg(long, conflicts_with = "file")]
    pub demo: bool,

    /// Host kind; decides whether the button exits or reboots
    #[arg(long, value_enum)]
    pub platform: Option<PlatformKind>,

    /// Close the window after this many seconds instead of waiting for the user
    #[arg(long, value_name = "SECS")]
    pub close_after: Option<u64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(with_env, args.platform)
    };
    config.validate()?;

    let headless = config::headless_from_env();
    logging::init(&LogTarget::for_session(&config.log_file_path, headless))?;

    info!(config = ?config, headless, "Configuration loaded and resolved");

    let text = read_text(&args)?;
    let shell = TerminalShell::stdout()?
        .with_cell_metrics(Default::default(), config.font_size);
    let platform = config.platform.into_platform();
    let options = ViewerOptions::from_config(&config, headless);

    let mut window = TextWindow::spawn(text, shell, platform, options)?;
    match args.close_after {
        Some(secs) => {
            std::thread::sleep(Duration::from_secs(secs));
            window.close();
        }
        None => window.wait_for_exit(),
    }

    Ok(())
}

/// Text to show: demo, file, or stdin.
fn read_text(args: &Args) -> Result<String, AppError> {
    if args.demo {
        return Ok(DEMO_TEXT.to_string());
    }
    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(text)
}
