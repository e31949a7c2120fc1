//! Gobang GUI
//!
//! Two players share one window and take turns placing stones.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gobang::ui::GobangApp;
use gobang::{GameConfig, RenderMode};

/// Play five-in-a-row against another person on one screen.
#[derive(Parser)]
#[command(name = "gobang", about = "Two-player five-in-a-row")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "gobang.toml")]
    config: PathBuf,

    /// Override the board size
    #[arg(long)]
    board_size: Option<usize>,

    /// Override the initial presentation mode: canvas or cells
    #[arg(long)]
    render_mode: Option<RenderMode>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gobang=info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", GameConfig::default_toml());
        return Ok(());
    }

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(size) = cli.board_size {
        config.board_size = size;
    }
    if let Some(mode) = cli.render_mode {
        config.render_mode = mode;
    }
    config.validate().context("invalid command line overrides")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Gobang"),
        ..Default::default()
    };

    eframe::run_native(
        "Gobang",
        options,
        Box::new(move |cc| Ok(Box::new(GobangApp::new(cc, &config)?))),
    )
    .map_err(|e| anyhow!("GUI failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_default_config_flag() {
        let cli = Cli::try_parse_from(["gobang", "--print-default-config"]).unwrap();
        assert!(cli.print_default_config);

        let printed: GameConfig = toml::from_str(&GameConfig::default_toml()).unwrap();
        assert_eq!(printed, GameConfig::default());
    }

    #[test]
    fn test_overrides_parse() {
        let cli = Cli::try_parse_from(["gobang", "--board-size", "19", "--render-mode", "dom"]).unwrap();
        assert_eq!(cli.board_size, Some(19));
        assert_eq!(cli.render_mode, Some(RenderMode::Cells));
        assert!(!cli.print_default_config);
    }
}
