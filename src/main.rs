mod charset;
mod export;
mod generator;
mod strength;
mod ui;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "securepass",
    version,
    author,
    about = "Interactive password generator with entropy-based strength estimation"
)]
struct Cli {
    /// Suppress the banner and analysis decoration; print passwords only
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    ui::display_banner(&options);
    ui::main_menu(&options)?;

    Ok(())
}
