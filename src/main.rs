#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    density_matrix, init_logging, largest_remaining_length, mode, resolve, AiPlayer,
    AttackOutcome, Board, DensityMatrix, HeuristicView, Mode, Player,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::Read;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Auto-fill a board with the standard fleet and print it.
    Place {
        #[arg(long, help = "Fix RNG seed for a reproducible layout (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Read an opponent view from stdin and suggest the next shot.
    Suggest {
        #[arg(long, help = "Fix RNG seed used to break ties")]
        seed: Option<u64>,
    },
    /// Let two automated players fight to the end.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 0, help = "Pause before each automated shot")]
        delay_ms: u64,
        #[arg(long, help = "Print a JSON summary instead of a shot log")]
        json: bool,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>, salt: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(salt)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn print_density(matrix: &DensityMatrix) {
    println!("Density:");
    print!("   ");
    for x in 0..matrix[0].len() {
        print!(" {:>3}", (b'A' + x as u8) as char);
    }
    println!();
    for (y, row) in matrix.iter().enumerate() {
        print!("{:2} ", y + 1);
        for v in row {
            print!(" {:>3}", v);
        }
        println!();
    }
}

#[cfg(feature = "std")]
fn place(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed, 0);
    let mut board = Board::new();
    AiPlayer::new().place_fleet(&mut rng, &mut board)?;
    println!("{}", board);
    for ship in board.fleet().ships() {
        println!(
            "ship {}: length {} at {} {:?}",
            ship.id().0,
            ship.length(),
            ship.origin(),
            ship.orientation()
        );
    }
    Ok(())
}

#[cfg(feature = "std")]
fn suggest(seed: Option<u64>) -> anyhow::Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let view: HeuristicView = input.parse()?;
    let mut rng = make_rng(seed, 0);

    let current = mode(&view);
    println!("Mode: {:?}", current);
    if current == Mode::Hunt {
        if let Some(len) = largest_remaining_length(&view) {
            println!("Largest remaining ship: {}", len);
            print_density(&density_matrix(&view, len));
        }
    }
    match AiPlayer::new().select_target(&mut rng, &view) {
        Some(coord) => println!("Suggested move: {} ({}, {})", coord, coord.x, coord.y),
        None => println!("No move left"),
    }
    Ok(())
}

#[cfg(feature = "std")]
async fn play(seed: Option<u64>, delay_ms: u64, json: bool) -> anyhow::Result<()> {
    let mut rngs = [make_rng(seed, 0), make_rng(seed, 1)];
    let mut players = [AiPlayer::new(), AiPlayer::new()];
    let mut boards = [Board::new(), Board::new()];
    for i in 0..2 {
        players[i].place_fleet(&mut rngs[i], &mut boards[i])?;
    }

    let max_shots = boards[0].grid().width() * boards[0].grid().height();
    let mut shots = [0usize; 2];
    let mut current = 0;
    let winner = loop {
        let defender = 1 - current;
        if shots[current] >= max_shots {
            anyhow::bail!("player{} ran out of cells to attack", current + 1);
        }
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        let view = HeuristicView::from(boards[defender].grid());
        let target = players[current]
            .select_target(&mut rngs[current], &view)
            .ok_or_else(|| anyhow::anyhow!("player{} has no move", current + 1))?;
        let outcome = resolve(&mut boards[defender], target)?;
        players[current].handle_attack_result(target, outcome);
        shots[current] += 1;
        if !json {
            println!("player{} -> {}: {:?}", current + 1, target, outcome);
        }
        match outcome {
            AttackOutcome::HitAndWon => break current,
            // a hit earns another shot
            AttackOutcome::Miss => current = defender,
            AttackOutcome::Hit | AttackOutcome::HitAndDestroyed => {}
        }
    };

    if json {
        let result = serde_json::json!({
            "player1": {"shots": shots[0], "ships_left": boards[0].fleet().surviving(boards[0].grid())},
            "player2": {"shots": shots[1], "ships_left": boards[1].fleet().surviving(boards[1].grid())},
            "winner": format!("player{}", winner + 1),
        });
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("\nplayer1 board:\n{}\n\nplayer2 board:\n{}", boards[0], boards[1]);
        println!("player{} wins", winner + 1);
    }
    Ok(())
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Place { seed } => place(seed)?,
        Commands::Suggest { seed } => suggest(seed)?,
        Commands::Play {
            seed,
            delay_ms,
            json,
        } => play(seed, delay_ms, json).await?,
    }
    Ok(())
}
