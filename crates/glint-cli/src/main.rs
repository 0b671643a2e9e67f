// crates/glint-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "glint-cli")]
#[command(about = "Gamma tables, color arithmetic and crossfades", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a gamma table and query it
    Gamma(cmd::gamma::GammaArgs),

    /// Apply one color operator to parsed colors
    Color(cmd::color::ColorArgs),

    /// Crossfade two color lists
    Fade(cmd::fade::FadeArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Gamma(args) => cmd::gamma::run(args),
        Commands::Color(args) => cmd::color::run(args),
        Commands::Fade(args) => cmd::fade::run(args),
    }
}
