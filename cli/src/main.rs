use clap::Parser;
use reversi_core::{Color, Coord, GameConfig, GameSession};
use std::io;

mod menu;

#[derive(Parser, Debug)]
#[command(version, about = "Two-player Reversi in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board edge length, an even number of at least 4, asked for when missing or invalid
    #[arg(short, long)]
    size: Option<Coord>,

    /// Color of player 1 (B or W), asked for when missing
    #[arg(short, long)]
    color: Option<Color>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("size: {:?}, color: {:?}", args.size, args.color);

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    menu::greet(&mut output)?;
    let config = match args.size.map(GameConfig::new) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            log::warn!("{err}");
            menu::prompt_size(&mut input, &mut output)?
        }
        None => menu::prompt_size(&mut input, &mut output)?,
    };
    let first_player = match args.color {
        Some(color) => color,
        None => menu::prompt_color(&mut input, &mut output)?,
    };

    let mut session = GameSession::new(config, first_player)?;
    menu::run(&mut session, &mut input, &mut output)
}
