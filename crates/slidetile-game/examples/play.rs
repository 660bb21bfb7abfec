//! Terminal sliding-tile puzzle.
//!
//! This example shows how to:
//! - Deliver a source image to a `PendingGame` from a loader thread
//! - Run a paced shuffle with `ShufflePacer`, printing each intermediate board
//! - Feed user moves to the `Game` until the puzzle is solved
//!
//! Tiles are shown by their number in the solved picture.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example play -- picture.png
//! ```
//!
//! Without an image, a generated gradient is used:
//!
//! ```sh
//! cargo run --example play -- --size 3 --steps 30 --delay-ms 0
//! ```
//!
//! Replay a shuffle by passing the seed printed at startup:
//!
//! ```sh
//! cargo run --example play -- --seed <SEED>
//! ```
//!
//! Moves are entered as `ROW COL` of the tile to slide, or as one of
//! `w`/`a`/`s`/`d` for the direction the tile travels. `r` restarts and
//! `q` quits.

use std::{
    fs,
    io::{self, BufRead as _, Cursor},
    path::PathBuf,
    process, thread,
    time::{Duration, Instant},
};

use clap::Parser;
use image::{ImageFormat, Rgba, RgbaImage};
use slidetile_core::{Direction, Position};
use slidetile_game::{Game, GameConfig, GameEvent, PendingGame, ShufflePacer};
use slidetile_shuffler::ShuffleSeed;
use slidetile_slicer::TileImage;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Source image; a generated gradient is used when omitted.
    image: Option<PathBuf>,

    /// Grid dimension N.
    #[arg(long, value_name = "N", default_value_t = 4)]
    size: u8,

    /// Number of random moves in the shuffle.
    #[arg(long, value_name = "COUNT", default_value_t = 100)]
    steps: usize,

    /// Delay between shuffle steps, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 20)]
    delay_ms: u64,

    /// Shuffle seed as 64 hex digits.
    #[arg(long, value_name = "SEED")]
    seed: Option<ShuffleSeed>,
}

enum Command {
    Move(Position),
    Slide(Direction),
    Restart,
    Quit,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let mut config = GameConfig::default()
        .grid_size(args.size)
        .shuffle_steps(args.steps)
        .step_delay(Duration::from_millis(args.delay_ms));
    if let Some(path) = &args.image {
        config = config.source(path.display().to_string());
    }
    if let Some(seed) = args.seed {
        config = config.seed(seed);
    }
    if let Err(err) = config.validate() {
        eprintln!("Invalid configuration: {err}");
        process::exit(2);
    }

    let mut game = match load_game(config.clone()) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Failed to prepare puzzle: {err}");
            process::exit(1);
        }
    };

    let seed = config.seed_or_random();
    println!("Seed:");
    println!("  {seed}");
    println!();
    shuffle(&mut game, &config, seed);

    play(&mut game, &config);
}

fn load_game(config: GameConfig) -> Result<Game<TileImage>, String> {
    let path = config.get_source().map(PathBuf::from);
    let (sender, mut pending) = PendingGame::channel(config);
    let loader = thread::spawn(move || {
        let bytes = match path {
            Some(path) => match fs::read(&path) {
                Ok(bytes) => bytes,
                Err(err) => {
                    log::error!("cannot read {}: {err}", path.display());
                    return;
                }
            },
            None => gradient_png(),
        };
        // The receiver only goes away if the main thread already gave up.
        let _ = sender.send(bytes);
    });

    loop {
        if let Some(result) = pending.try_resolve() {
            let _ = loader.join();
            return result.map_err(|err| err.to_string());
        }
        thread::sleep(Duration::from_millis(5));
    }
}

#[expect(clippy::cast_possible_truncation)]
fn gradient_png() -> Vec<u8> {
    let pixels = RgbaImage::from_fn(256, 256, |x, y| {
        Rgba([x as u8, y as u8, (255 - (x + y) / 2) as u8, 255])
    });
    let mut bytes = Vec::new();
    if let Err(err) = pixels.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png) {
        log::error!("cannot encode gradient: {err}");
    }
    bytes
}

fn shuffle(game: &mut Game<TileImage>, config: &GameConfig, seed: ShuffleSeed) {
    if let Err(err) = game.begin_shuffle(config.get_shuffle_steps(), seed) {
        eprintln!("Cannot shuffle: {err}");
        return;
    }

    let mut pacer = ShufflePacer::new(config.get_step_delay());
    while game.is_busy() {
        let now = Instant::now();
        if pacer.drive(game, now).is_some() && !pacer.delay().is_zero() {
            print!("\x1b[2J\x1b[H{}", game.board());
        }
        thread::sleep(pacer.time_until_due(Instant::now()));
    }
    game.drain_events().for_each(|event| log::debug!("{event:?}"));
}

fn play(game: &mut Game<TileImage>, config: &GameConfig) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!();
        print!("{}", game.board());
        println!("Misplaced: {}", game.misplaced_count());
        println!("Move (ROW COL, w/a/s/d, r, q):");

        let Some(Ok(line)) = lines.next() else {
            return;
        };
        let Some(command) = parse_command(&line) else {
            println!("Unrecognized input: {line:?}");
            continue;
        };
        match command {
            Command::Move(pos) => {
                game.request_move(pos);
            }
            Command::Slide(direction) => {
                game.request_direction(direction);
            }
            Command::Restart => {
                game.restart();
                shuffle(game, config, config.seed_or_random());
            }
            Command::Quit => return,
        }

        let events = game.drain_events().collect::<Vec<_>>();
        for event in events {
            match event {
                GameEvent::Moved { .. } => {}
                GameEvent::Solved => {
                    println!();
                    print!("{}", game.board());
                    println!("Solved!");
                    return;
                }
                other => log::debug!("{other:?}"),
            }
        }
    }
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let command = match line {
        "w" => Command::Slide(Direction::Up),
        "a" => Command::Slide(Direction::Left),
        "s" => Command::Slide(Direction::Down),
        "d" => Command::Slide(Direction::Right),
        "r" => Command::Restart,
        "q" => Command::Quit,
        _ => {
            let mut parts = line.split_whitespace();
            let row = parts.next()?.parse().ok()?;
            let col = parts.next()?.parse().ok()?;
            if parts.next().is_some() {
                return None;
            }
            Command::Move(Position::new(row, col))
        }
    };
    Some(command)
}
