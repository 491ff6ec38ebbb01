//! `cube`: scramble, solve and apply moves from the command line.

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use log::info;

use rust_cube::core::{CubeState, EngineConfig};
use rust_cube::moves::Algorithm;
use rust_cube::session::{CubeEngine, SessionOutcome, StepEvent};
use rust_cube::ScrambleGenerator;

#[derive(Debug, Parser)]
#[command(name = "cube", about = "Rubik's cube scrambler and layer-by-layer solver")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a random scramble and the cube it produces
    Scramble {
        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,

        /// Number of moves
        #[arg(long, default_value_t = rust_cube::core::DEFAULT_SCRAMBLE_LENGTH)]
        length: usize,
    },

    /// Scramble (or apply a given sequence), then solve step by step
    Solve {
        /// Sequence to apply instead of a random scramble
        #[arg(long)]
        scramble: Option<String>,

        /// Seed for the random scramble
        #[arg(long)]
        seed: Option<u64>,

        /// Playback speed in moves per second
        #[arg(long, default_value_t = rust_cube::core::DEFAULT_MOVES_PER_SECOND)]
        speed: f64,

        /// Solve without delays or per-move output
        #[arg(long)]
        instant: bool,
    },

    /// Apply a sequence to a solved cube and print the net
    Apply {
        /// Space-separated moves, e.g. "R U R' U'"
        moves: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    match Args::parse().command {
        Command::Scramble { seed, length } => scramble(seed, length),
        Command::Solve {
            scramble,
            seed,
            speed,
            instant,
        } => solve(scramble, seed, speed, instant).await,
        Command::Apply { moves } => apply(&moves),
    }
}

fn scramble(seed: Option<u64>, length: usize) -> Result<()> {
    let mut config = EngineConfig::default().with_scramble_length(length);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut generator = ScrambleGenerator::from_config(&config);
    let moves = generator.generate();

    let mut cube = CubeState::solved();
    cube.apply_all(&moves);

    println!("seed: {}", generator.seed());
    println!("{moves}");
    println!();
    print!("{}", cube.net());
    Ok(())
}

fn apply(notation: &str) -> Result<()> {
    let moves: Algorithm = notation.parse().wrap_err("could not parse moves")?;
    let mut cube = CubeState::solved();
    cube.apply_all(&moves);

    println!("{cube}");
    print!("{}", cube.net());
    Ok(())
}

async fn solve(
    scramble: Option<String>,
    seed: Option<u64>,
    speed: f64,
    instant: bool,
) -> Result<()> {
    let mut config = if instant {
        EngineConfig::instant()
    } else {
        EngineConfig::default().with_speed(speed)
    };
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut engine = CubeEngine::new(config).wrap_err("invalid configuration")?;

    // Covers the scramble session as well as the solve.
    let control = engine.control();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, cancelling");
            control.cancel();
        }
    });

    match scramble {
        Some(notation) => {
            let moves: Algorithm = notation.parse().wrap_err("could not parse scramble")?;
            engine.apply_algorithm(&moves);
            println!("scramble: {moves}");
        }
        None => {
            let mut moves = Vec::new();
            let outcome = engine
                .scramble(&mut |event: &StepEvent| moves.push(event.mv.to_string()))
                .await?;
            println!("scramble (seed {}): {}", engine.seed(), moves.join(" "));
            if outcome.is_cancelled() {
                println!("cancelled after {} moves", outcome.report().move_count);
                return Ok(());
            }
        }
    }
    print!("{}", engine.state().net());

    if instant {
        let solution = engine.solve_instant()?;
        print!("{solution}");
        println!("{} moves", solution.move_count());
        return Ok(());
    }

    let mut current_phase = None;
    let outcome = engine
        .solve(&mut |event: &StepEvent| {
            if event.phase != current_phase {
                current_phase = event.phase;
                if let Some(phase) = event.phase {
                    println!("-- {phase}");
                }
            }
            println!("{:>4} {:<3} {:>5.1}%", event.move_index, event.mv, event.progress);
        })
        .await?;

    match outcome {
        SessionOutcome::Finished(report) => {
            println!(
                "solved in {} moves ({:.2}s)",
                report.move_count,
                report.elapsed.as_secs_f64()
            );
        }
        SessionOutcome::Cancelled(report) => {
            println!("cancelled after {} moves", report.move_count);
        }
    }
    print!("{}", engine.state().net());
    Ok(())
}
