//! # 2048 with undo
//!
//! Terminal front-end: reads keys, drives the game and redraws the board at a
//! fixed frame rate, animating each move with a short slide.

mod input;
mod render;
mod term;

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use env_logger::Env;
use log::{debug, info};
use rewind_2048_core::{parse_grid, Board, Game, Grid, Transition, DEFAULT_TRANSITION_FRAMES};

use input::{command_for, Command};
use render::{draw, grid_sprites, View};
use term::TerminalGuard;

#[derive(Parser, Debug)]
#[command(name = "rewind-2048")]
#[command(author, version, about = "Play 2048 in the terminal, with undo")]
struct Args {
    /// Random seed for deterministic tile spawns (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Frames drawn per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Length of the slide animation in frames (0 disables it)
    #[arg(long, default_value_t = DEFAULT_TRANSITION_FRAMES)]
    anim_frames: u32,

    /// Starting board as four '/'-separated rows, e.g. 0,2,0,0/0,0,0,2/0,0,0,0/0,0,0,0
    #[arg(long, value_parser = parse_grid)]
    board: Option<Grid>,

    /// Write log output to this file instead of stderr (level from RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("starting with seed {seed}");
    let game = match args.board {
        Some(grid) => Game::from_board(Board::with_grid(grid, 0, seed)),
        None => Game::new(seed),
    };

    let mut app = App::new(game, args.anim_frames);
    {
        let _terminal = TerminalGuard::enter().context("failed to set up the terminal")?;
        app.run(args.fps)?;
    }

    println!("Goodbye!");
    print!("{}", app.game);
    println!("Max Tile: {}", app.game.board().max_tile());
    info!("quit with score {}", app.game.score());
    Ok(())
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

/// Control loop state: the game plus whatever is being animated.
struct App {
    game: Game,
    anim_frames: u32,
    /// The running slide and the frame it has reached.
    animation: Option<(Transition, u32)>,
    last_gain: u32,
    dirty: bool,
}

impl App {
    fn new(game: Game, anim_frames: u32) -> Self {
        App {
            game,
            anim_frames,
            animation: None,
            last_gain: 0,
            dirty: true,
        }
    }

    fn run(&mut self, fps: u32) -> Result<()> {
        let frame_time = Duration::from_secs_f64(1.0 / fps as f64);
        let mut stdout = io::stdout();

        loop {
            let started = Instant::now();

            while event::poll(Duration::ZERO).context("failed to poll keyboard input")? {
                match event::read().context("failed to read keyboard input")? {
                    Event::Key(key) => {
                        if let Some(command) = command_for(key) {
                            if !self.handle(command) {
                                return Ok(());
                            }
                        }
                    }
                    Event::Resize(..) => self.dirty = true,
                    _ => {}
                }
            }

            self.tick();
            if self.dirty {
                draw(&mut stdout, &self.view())
                    .and_then(|_| stdout.flush())
                    .context("failed to draw frame")?;
                self.dirty = false;
            }

            if let Some(rest) = frame_time.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    /// Apply one command. Returns `false` when the player quits.
    fn handle(&mut self, command: Command) -> bool {
        debug!("command {:?}", command);
        match command {
            Command::Quit => return false,
            Command::Restart => {
                self.game.reset();
                self.animation = None;
                self.last_gain = 0;
            }
            Command::Undo => {
                self.game.undo();
                self.animation = None;
                self.last_gain = 0;
            }
            // Moves are ignored while a slide is still playing.
            Command::Move(_) if self.animation.is_some() => return true,
            Command::Move(direction) => {
                let before = *self.game.grid();
                let outcome = self.game.shift(direction);
                if !outcome.moved {
                    return true;
                }
                self.last_gain = outcome.gained;
                if self.anim_frames > 0 {
                    let transition = Transition::new(&before, direction, self.anim_frames);
                    self.animation = Some((transition, 0));
                }
            }
        }
        self.dirty = true;
        true
    }

    /// Advance the running slide by one frame.
    fn tick(&mut self) {
        let Some((transition, frame)) = &mut self.animation else {
            return;
        };
        *frame += 1;
        let finished = transition.is_finished(*frame);
        self.dirty = true;
        if finished {
            self.animation = None;
        }
    }

    fn view(&self) -> View {
        let sprites = match &self.animation {
            Some((transition, frame)) => transition.sprites(*frame),
            None => grid_sprites(self.game.grid()),
        };
        View {
            score: self.game.score(),
            undo_available: self.game.undo_available(),
            won: self.game.has_won(),
            over: self.game.is_over(),
            last_gain: self.last_gain,
            sprites,
        }
    }
}
