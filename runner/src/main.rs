mod autopilot;
mod config;
mod host;
mod text_renderer;

use clap::Parser;
use snake_engine::{log, logger};

use host::HostOptions;

#[derive(Parser)]
#[command(name = "snake_runner", about = "Plays the snake engine in a terminal")]
struct Args {
    /// YAML config file; defaults are used when it does not exist
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: String,

    /// Seed for food placement; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    autopilot: bool,

    #[arg(long)]
    no_render: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = config::get_config_manager(&args.config).get_config()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    let options = HostOptions {
        frame_interval: config.frame_interval(),
        autopilot: args.autopilot || config.autopilot,
        render: config.render && !args.no_render,
    };

    log!(
        "Starting {}x{} {} game ({:?}), seed {}",
        config.game.board_width,
        config.game.board_height,
        config.game.game_mode,
        config.game.difficulty,
        seed
    );

    match host::run(config.game, seed, options).await {
        Some(report) => log!("Last score: {} (high score {})", report.score, report.high_score),
        None => log!("No game finished"),
    }

    Ok(())
}
