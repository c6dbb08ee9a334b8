//! Terminal front end: roster prompts, board, dice spin, token movement,
//! leaderboard and restart prompt.

use clap::Parser;
use log::{debug, error, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use thiserror::Error;

use snakes_ladders::animation::{self, Frame, SoundCue};
use snakes_ladders::core::{ConfigError, GameConfig, GameRng, GameState, Settings, MAX_PLAYERS, MIN_PLAYERS};
use snakes_ladders::leaderboard::LeaderboardStore;
use snakes_ladders::render;
use snakes_ladders::rules::TurnEngine;

#[derive(Parser)]
#[command(author, version, about = "Snakes & Ladders for 2-5 players", long_about = None)]
struct Args {
    /// Player name, repeated once per player in turn order. Prompts when omitted.
    #[arg(short, long = "player")]
    players: Vec<String>,

    /// Seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Leaderboard file.
    #[arg(long)]
    leaderboard: Option<PathBuf>,

    /// Show every frame at once instead of pacing the animation.
    #[arg(long)]
    no_animation: bool,

    /// Print the leaderboard and exit.
    #[arg(long)]
    show_leaderboard: bool,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let settings = Settings::load();

    if args.show_leaderboard {
        let path = args.leaderboard.as_ref().unwrap_or(&settings.leaderboard);
        let store = LeaderboardStore::new(path);
        print!("{}", render::leaderboard(&store.load_or_empty()));
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let roster = if args.players.is_empty() {
            match prompt_roster(&mut input)? {
                Some(roster) => roster,
                None => return Ok(()),
            }
        } else {
            args.players.clone()
        };

        let mut config = GameConfig::new(&roster)?.with_settings(&settings);
        if let Some(path) = &args.leaderboard {
            config = config.with_leaderboard_path(path);
        }
        if let Some(seed) = args.seed {
            config = config.with_seed(seed);
        }
        if args.no_animation {
            config = config.with_animation(false);
        }

        if !play(&config, &mut input)? {
            return Ok(());
        }

        if !ask_yes_no(&mut input, "Do you want to restart the game? [y/n] ")? {
            return Ok(());
        }
    }
}

/// Play one game. Returns `false` if the players quit before anyone won.
fn play(config: &GameConfig, input: &mut impl BufRead) -> io::Result<bool> {
    let store = LeaderboardStore::new(&config.leaderboard_path);
    let mut engine = TurnEngine::new(config);
    let mut spin = GameRng::new(engine.seed()).for_context("spin");

    println!("\n{}", render::connectors(engine.board()));

    loop {
        let state = engine.snapshot();
        print!("{}", render::board(engine.board(), &state));
        println!("{}", render::legend(&state));

        let prompt = format!("{} - press Enter to roll, q to quit: ", render::turn_banner(&state));
        match read_line(input, &prompt)? {
            Some(line) if !line.eq_ignore_ascii_case("q") => {}
            _ => return Ok(false),
        }

        let roll = engine.roll_die();
        show_frames(&animation::dice_spin(&mut spin, roll), &state, config.animate)?;

        let record = engine.play_roll(roll);
        let frames = animation::move_frames(record.player, &record.result);
        show_frames(&frames, engine.state(), config.animate)?;
        println!("{}", render::describe(engine.state(), &record));

        if let Some(result) = engine.result() {
            println!("\nCongratulations! {} won the game in {}s!\n", result.name, result.seconds());
            let entries = store
                .record_win(&result.name, result.seconds())
                .unwrap_or_else(|err| {
                    warn!("Unable to save score: {}", err);
                    store.load_or_empty()
                });
            print!("{}", render::leaderboard(&entries));
            return Ok(true);
        }
    }
}

/// Play a frame list on one terminal line.
fn show_frames(frames: &[Frame], state: &GameState, animate: bool) -> io::Result<()> {
    let mut out = io::stdout().lock();

    for frame in frames {
        match *frame {
            Frame::Dice { face, .. } => write!(out, "\rDice: {} ({})", die_glyph(face), face)?,
            Frame::Token { player, cell, .. } => {
                write!(out, "\r{:>12}: {:<3}", state.player(player).name, cell)?
            }
            Frame::Glide { .. } => write!(out, ".")?,
            Frame::Sound(cue) => {
                debug!("Sound cue {:?}", cue);
                write!(out, " {} ", sound_text(cue))?
            }
        }
        out.flush()?;

        if animate {
            thread::sleep(frame.hold());
        }
    }

    if !frames.is_empty() {
        writeln!(out)?;
    }
    Ok(())
}

fn die_glyph(face: u8) -> char {
    char::from_u32(0x2680 + u32::from(face.saturating_sub(1))).unwrap_or('?')
}

fn sound_text(cue: SoundCue) -> &'static str {
    match cue {
        SoundCue::Hiss => "*hiss*",
        SoundCue::Climb => "*climb*",
        SoundCue::Fanfare => "*fanfare*",
    }
}

/// Ask for the player count and names. `None` on end of input.
fn prompt_roster(input: &mut impl BufRead) -> io::Result<Option<Vec<String>>> {
    let count = loop {
        let prompt = format!("Enter number of players ({}-{}): ", MIN_PLAYERS, MAX_PLAYERS);
        let Some(line) = read_line(input, &prompt)? else {
            return Ok(None);
        };
        match line.parse::<usize>() {
            Ok(n) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) => break n,
            _ => println!("Please enter a number from {} to {}.", MIN_PLAYERS, MAX_PLAYERS),
        }
    };

    let mut names: Vec<String> = Vec::with_capacity(count);
    while names.len() < count {
        let seat = names.len() + 1;
        let Some(name) = read_line(input, &format!("Name for player {}: ", seat))? else {
            return Ok(None);
        };
        let name = if name.is_empty() {
            format!("Player{}", seat)
        } else {
            name
        };
        if names.contains(&name) {
            println!("{} is already playing, pick another name.", name);
            continue;
        }
        names.push(name);
    }

    Ok(Some(names))
}

fn ask_yes_no(input: &mut impl BufRead, prompt: &str) -> io::Result<bool> {
    Ok(read_line(input, prompt)?
        .map(|answer| answer.to_ascii_lowercase().starts_with('y'))
        .unwrap_or(false))
}

/// Print `prompt` and read one trimmed line. `None` on end of input.
fn read_line(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
