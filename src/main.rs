//! Ball Breaker headless runner
//!
//! Plays one session without a window: the autopilot (or an idle paddle)
//! drives input, events go to the log, and `--frames` streams every frame
//! view as a JSON line on stdout for an external renderer.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use ball_breaker::sim::{Layout, Outcome, TickInput};
use ball_breaker::{Session, Settings};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run a Ball Breaker session headlessly", long_about = None)]
struct Args {
    /// Settings file (JSON); missing file means defaults
    #[arg(long, default_value = "ballbreaker.json")]
    config: PathBuf,
    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,
    /// Override the brick layout: pyramid, columns or full
    #[arg(long)]
    layout: Option<String>,
    /// Override where the high score is stored
    #[arg(long)]
    high_score: Option<PathBuf>,
    /// Stop after this many ticks even if the run is not over
    #[arg(long)]
    max_ticks: Option<u64>,
    /// Pace ticks at the configured period instead of running flat out
    #[arg(long)]
    realtime: bool,
    /// Let the demo autopilot steer the paddle
    #[arg(long)]
    autopilot: bool,
    /// Emit each frame view as a JSON line on stdout
    #[arg(long)]
    frames: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut settings = Settings::load(&args.config)?;
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if let Some(name) = &args.layout {
        match Layout::from_str(name) {
            Some(layout) => settings.layout = layout,
            None => bail!("unknown --layout {name} (expected pyramid, columns or full)"),
        }
    }
    if let Some(path) = args.high_score {
        settings.high_score_path = path;
    }

    log::info!("Ball Breaker starting...");
    let mut session = Session::new(&settings);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut write_error = None;

    let autopilot = args.autopilot;
    let summary = session.run(
        |state| {
            if autopilot {
                TickInput::autopilot(state)
            } else {
                TickInput::default()
            }
        },
        args.max_ticks,
        args.realtime,
        |view| {
            if !args.frames || write_error.is_some() {
                return;
            }
            let line = serde_json::to_string(view).map_err(io::Error::other);
            if let Err(e) = line.and_then(|l| writeln!(out, "{l}")) {
                write_error = Some(e);
            }
        },
    );

    if let Some(e) = write_error {
        return Err(e).context("write frame views");
    }
    out.flush().context("flush frame views")?;

    log::info!("{}", session.view().status_line());
    match summary.outcome {
        Outcome::Won => log::info!("Won in {} ticks", summary.ticks),
        Outcome::Lost => log::info!("Lost after {} ticks", summary.ticks),
        Outcome::InProgress => log::info!("Stopped after {} ticks", summary.ticks),
    }
    if summary.new_high_score {
        log::info!("New high score: {}", summary.score);
    }

    Ok(())
}
