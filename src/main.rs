//! Qix entry point
//!
//! Runs the game loop headless: a software canvas stands in for the window
//! and a scripted input source replays key and controller events against a
//! simulated frame clock, or against the wall clock with `--realtime`.

use std::path::PathBuf;
use std::process;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};

use qix::input::{InputEvent, Key};
use qix::platform::{Clock, ManualClock, ScriptedInput, SystemClock};
use qix::renderer::Canvas;
use qix::sim::Drawable;
use qix::{Game, LoopControl, Playfield, Settings};

const USAGE: &str = "qix [--realtime] [--settings <settings.json>] [script.json]";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

#[derive(Default)]
struct Args {
    /// Wall clock with paced frames instead of simulated time
    realtime: bool,
    settings: Option<PathBuf>,
    script: Option<PathBuf>,
}

/// Parsed arguments, or `None` when only help was requested
fn parse_args() -> Result<Option<Args>> {
    let mut args = std::env::args().skip(1);
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("Usage: {USAGE}");
                return Ok(None);
            }
            "--realtime" => parsed.realtime = true,
            "--settings" => {
                parsed.settings = Some(args.next().context(USAGE)?.into());
            }
            _ if parsed.script.is_none() => parsed.script = Some(arg.into()),
            _ => bail!("Unexpected argument {arg}\n\nUsage: {USAGE}"),
        }
    }
    Ok(Some(parsed))
}

fn run() -> Result<()> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };
    let settings = Settings::load(args.settings.as_deref())?;

    let input = match &args.script {
        Some(path) => ScriptedInput::load(path)?,
        None => {
            log::info!("No input script given, playing the built-in demo");
            demo_script()
        }
    };

    let canvas =
        Canvas::new(settings.width, settings.height).context("Display surface unavailable")?;
    let mut playfield = Playfield::new(canvas);
    if settings.spawn_qix {
        let (x, y) = settings.qix_origin;
        playfield.add_object(Drawable::qix(x, y));
    }

    log::info!(
        "Qix starting ({}x{}, {} ms frames, {} time)",
        settings.width,
        settings.height,
        settings.frame_millis,
        if args.realtime { "wall" } else { "simulated" }
    );

    let summary = if args.realtime {
        let pace = Duration::from_millis(settings.frame_millis);
        play(playfield, input, SystemClock::new(), &settings, Some(pace))
    } else {
        let clock = ManualClock::from_millis(settings.frame_millis);
        play(playfield, input, clock, &settings, None)
    };
    println!("{summary}");
    Ok(())
}

/// Run the loop until quit or the end of the script, returning a summary line.
/// With `pace`, each frame sleeps that long so the wall clock advances.
fn play<C: Clock>(
    playfield: Playfield<Canvas>,
    input: ScriptedInput,
    clock: C,
    settings: &Settings,
    pace: Option<Duration>,
) -> String {
    let mut game = Game::new(playfield, input, clock, settings.repeat);

    loop {
        if game.step() == LoopControl::Exit {
            break;
        }
        if game.input().is_finished() {
            log::info!("Input script finished");
            break;
        }
        if let Some(pace) = pace {
            thread::sleep(pace);
        }
    }

    let cursor = game.playfield().cursor();
    format!(
        "{} frames, {} presses, {} repeats, cursor at ({}, {}), {} pixels drawn",
        game.frames(),
        game.presses(),
        game.repeats(),
        cursor.x,
        cursor.y,
        game.playfield().surface().lit_texture_pixels()
    )
}

/// Hold Right, hold Down, tap Left, then quit
fn demo_script() -> ScriptedInput {
    let down = |key| InputEvent::KeyDown { key, repeat: false };
    let up = |key| InputEvent::KeyUp { key };

    ScriptedInput::default()
        .at(0, down(Key::N))
        .at(20, down(Key::Right))
        .at(620, up(Key::Right))
        .at(700, down(Key::Down))
        .at(1100, up(Key::Down))
        .at(1200, down(Key::Left))
        .at(1210, up(Key::Left))
        .at(1500, down(Key::Q))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playfield() -> Playfield<Canvas> {
        Playfield::new(Canvas::new(64, 48).expect("canvas"))
    }

    #[test]
    fn test_simulated_demo_runs_to_quit() {
        let settings = Settings::default();
        let clock = ManualClock::from_millis(settings.frame_millis);
        let summary = play(playfield(), demo_script(), clock, &settings, None);
        assert!(summary.contains("frames"), "{summary}");
    }

    #[test]
    fn test_realtime_clock_drives_the_loop() {
        let settings = Settings::default();
        let input = ScriptedInput::default()
            .at(0, InputEvent::KeyDown { key: Key::Right, repeat: false })
            .at(20, InputEvent::KeyDown { key: Key::Q, repeat: false });
        let summary = play(
            playfield(),
            input,
            SystemClock::new(),
            &settings,
            Some(Duration::from_millis(2)),
        );
        assert!(summary.contains("1 presses"), "{summary}");
        assert!(summary.contains("cursor at (1, 0)"), "{summary}");
    }
}
