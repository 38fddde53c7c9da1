use anyhow::Context;
use clap::Parser;
use sapper_core::*;
use std::io::{self, BufRead};

use command::{Command, HELP};
use render::{JsonRenderer, TextRenderer};

mod command;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board width in cells
    #[arg(long, default_value_t = 16)]
    width: Coord,

    /// Board height in cells
    #[arg(long, default_value_t = 16)]
    height: Coord,

    /// Number of mines, clamped to fit the board
    #[arg(short, long, default_value_t = 32)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start every game with the mines uncovered
    #[arg(long)]
    reveal_mines: bool,

    /// Print a JSON snapshot per update instead of drawing the board
    #[arg(long)]
    json: bool,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig::new((self.width, self.height), self.mines)
            .with_reveal_mines_on_generate(self.reveal_mines)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .try_init()
        .context("Error initializing logger")?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);
    let generator = RandomGridGenerator::new(args.game_config(), seed);

    if args.json {
        play(generator, JsonRenderer::new(io::stdout()))
    } else {
        eprintln!("{HELP}");
        play(generator, TextRenderer::new(io::stdout()))
    }
}

fn play<G: GridGenerator, R: Renderer>(generator: G, renderer: R) -> anyhow::Result<()> {
    let mut controller = Controller::new(generator, renderer);

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Act(action)) => {
                let outcome = controller.apply(action);
                log::debug!("{:?} -> {:?}", action, outcome);
            }
            Ok(Command::Help) => eprintln!("{HELP}"),
            Ok(Command::Quit) => break,
            Err(err) => eprintln!("{err}"),
        }
    }

    Ok(())
}
