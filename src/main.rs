//! folio - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// folio - a terminal portfolio/profile viewer
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "TUI personal portfolio and profile viewer")]
pub struct Args {
    /// Page to open on startup (unknown names show the 404 page)
    #[arg(short, long)]
    pub page: Option<String>,

    /// Color theme
    #[arg(short, long, value_parser = ["light", "dark"])]
    pub theme: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to a TOML content file replacing the built-in profile
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed
    // This ensures consistent color handling throughout the application
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = folio::config::load_config_with_precedence(args.config.clone())?;
        let merged = folio::config::merge_config(config_file);
        let with_env = folio::config::apply_env_overrides(merged);
        folio::config::apply_cli_overrides(
            with_env,
            args.theme.clone(),
            args.page.clone(),
            args.content.clone(),
        )
    };

    // Initialize tracing with the configured log file path
    folio::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    // Content: an explicit file replaces the built-in profile
    let profile = match &config.content {
        Some(path) => folio::model::load_profile(path)?,
        None => folio::model::Profile::builtin(),
    };

    let theme: folio::model::ThemeMode = config.theme.parse()?;
    let page = folio::state::Page::from_name(&config.page);
    let colors = folio::view::ColorConfig::from_env_and_args(args.no_color);

    folio::view::run(profile, theme, page, colors)?;

    Ok(())
}
