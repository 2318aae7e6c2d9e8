//! Little-Go: a minimax agent for 5x5 Go.
//!
//! ## Usage
//!
//! - `little-go` - Read `input.txt`, write the chosen move to `output.txt`
//! - `little-go move -i <in> -o <out>` - Same, with explicit paths
//! - `little-go selfplay` - Play games between two agents and report results

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info};

use little_go::agent::Agent;
use little_go::board::Stone;
use little_go::constants::SEARCH_DEPTH;
use little_go::game::play_game;
use little_go::io::{read_input, write_output};
use little_go::search::Searcher;

/// Little-Go: a minimax alpha-beta agent for 5x5 Go
#[derive(Parser)]
#[command(name = "little-go")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose one move from an input file and write it to an output file
    Move {
        /// Input file: piece type, previous board, current board
        #[arg(short, long, default_value = "input.txt")]
        input: PathBuf,
        /// Output file for the chosen move
        #[arg(short, long, default_value = "output.txt")]
        output: PathBuf,
        /// Search depth in plies
        #[arg(short, long, default_value_t = SEARCH_DEPTH)]
        depth: u32,
        /// Seed for the tie-break between equally good moves
        #[arg(long)]
        seed: Option<u64>,
        /// Disable alpha-beta cutoffs (same result, slower)
        #[arg(long)]
        no_pruning: bool,
    },
    /// Play agents against each other and report the results
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value_t = 1)]
        games: u32,
        /// Search depth in plies
        #[arg(short, long, default_value_t = SEARCH_DEPTH)]
        depth: u32,
        /// Base seed; game `k` uses `seed + k`
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Move {
            input,
            output,
            depth,
            seed,
            no_pruning,
        }) => run_move(input, output, depth, seed, !no_pruning),
        Some(Commands::Selfplay { games, depth, seed }) => run_selfplay(games, depth, seed),
        None => run_move(
            PathBuf::from("input.txt"),
            PathBuf::from("output.txt"),
            SEARCH_DEPTH,
            None,
            true,
        ),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn make_agent(piece: Stone, depth: u32, seed: Option<u64>, pruning: bool) -> Agent {
    let agent = match seed {
        Some(seed) => Agent::with_seed(piece, seed),
        None => Agent::new(piece),
    };
    agent.with_searcher(Searcher::new(depth).with_pruning(pruning))
}

fn run_move(
    input: PathBuf,
    output: PathBuf,
    depth: u32,
    seed: Option<u64>,
    pruning: bool,
) -> Result<()> {
    let game = read_input(&input)
        .with_context(|| format!("failed to read board from {}", input.display()))?;
    info!(piece = ?game.piece, "position loaded");

    let mut agent = make_agent(game.piece, depth, seed, pruning);
    let mv = agent.decide(&game.position());

    write_output(&output, mv)
        .with_context(|| format!("failed to write move to {}", output.display()))?;
    info!(%mv, output = %output.display(), "move written");
    Ok(())
}

fn run_selfplay(games: u32, depth: u32, seed: Option<u64>) -> Result<()> {
    let mut black_wins = 0;
    for k in 0..games {
        let seed = seed.map(|s| s.wrapping_add(u64::from(k)));
        let mut black = make_agent(Stone::Black, depth, seed, true);
        let mut white = make_agent(Stone::White, depth, seed.map(|s| !s), true);
        let summary = play_game(&mut black, &mut white)
            .with_context(|| format!("agent produced an illegal move in game {}", k + 1))?;

        println!("Game {}: {} moves", k + 1, summary.moves.len());
        print!("{}", summary.final_position.grid);
        println!(
            "Black {:.1} - White {:.1}: {:?} wins\n",
            summary.black_score, summary.white_score, summary.winner
        );
        if summary.winner == Stone::Black {
            black_wins += 1;
        }
    }
    println!("Black won {black_wins} of {games} games");
    Ok(())
}
