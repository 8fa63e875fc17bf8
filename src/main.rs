use clap::Parser;
use tracing::Level;
use tracing_subscriber::util::SubscriberInitExt;

use nesroom::nes::desktop::{self, Config};

#[derive(Parser)]
#[command(name = "nesroom")]
#[command(version, about = "Single room tile game on an emulated NES", long_about = None)]
struct Cli {
    /// Window size as a multiple of 256x240
    #[arg(short, long, default_value_t = 3)]
    scale: u32,

    /// Most verbose level that gets logged
    #[arg(long, default_value = "info")]
    log_level: Level,

    /// Run as fast as possible instead of 60 frames per second
    #[arg(long)]
    no_limit: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .compact()
        .finish()
        .init();

    let config = Config {
        scale: cli.scale.max(1),
        limit: !cli.no_limit,
    };

    if let Err(e) = desktop::run(config) {
        eprintln!("Problem while running the game: {}", e);
        std::process::exit(-1);
    }
}
