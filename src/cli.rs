//! Command-line interface for magic_squares.

use clap::Parser;

/// Magic Squares - claim numbers 1-9, first to hold three that sum to 15 wins
#[derive(Parser, Debug)]
#[command(name = "magic_squares")]
#[command(about = "Two-player magic squares game for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Name of player one (prompted for if not given)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of player two (prompted for if not given)
    #[arg(long)]
    pub player_two: Option<String>,

    /// Glyph shown for unclaimed cells
    #[arg(long)]
    pub placeholder: Option<char>,

    /// Skip the rules banner
    #[arg(long)]
    pub no_banner: bool,
}
