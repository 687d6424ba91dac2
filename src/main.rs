use anyhow::Result;
use clap::Parser;
use snake_tui::game::GameConfig;
use snake_tui::modes::HumanMode;

#[derive(Parser)]
#[command(name = "snake_tui")]
#[command(version, about = "Classic snake in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "40")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "40")]
    height: usize,

    /// Simulation speed in ticks per second
    #[arg(long, default_value = "15")]
    tick_rate: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::new(cli.width, cli.height);
    config.tick_rate = cli.tick_rate;

    HumanMode::new(config).run().await
}
