#![doc = include_str!("../README.md")]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cpu_time::ProcessTime;
use fsum::FSum;
use log::{info, warn};
use npuzzle::error::SolveError;
use npuzzle::puzzle_sliding::Board;
use npuzzle::puzzle_sliding::heuristic::{Hamming, Manhattan};
use npuzzle::puzzle_sliding::scramble::random_walk;
use npuzzle::puzzle_sliding::utils::MAX_DIMENSION;
use npuzzle::solver::Solver;
use npuzzle::stats::{Limited, SearchAllStats, SearchStatsCollector};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt::Write as _;
use std::io::{self, Read};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "npuzzle", version, about = "Solve N×N sliding puzzles with A*")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve the puzzle read from a file and print a shortest solution
    Solve {
        /// Puzzle file: dimension N followed by N² tiles, 0 is the blank (`-` reads stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
        /// Heuristic that guides the search
        #[arg(long, value_enum, default_value_t = HeuristicKind::Manhattan)]
        heuristic: HeuristicKind,
        /// Print only the number of moves
        #[arg(long)]
        quiet: bool,
    },
    /// Solve random boards and print search statistics
    Bench {
        /// Board dimension
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=MAX_DIMENSION as i64))]
        dimension: u8,
        /// Number of boards to solve
        #[arg(long, default_value_t = 100)]
        count: usize,
        /// Number of random slides made from the goal to obtain each board
        #[arg(long, default_value_t = 30)]
        steps: usize,
        /// Seed of the random number generator
        #[arg(long, default_value_t = 123)]
        seed: u64,
        /// Give up a board after this many expansions
        #[arg(long)]
        limit: Option<u64>,
        /// Heuristic that guides the search
        #[arg(long, value_enum, default_value_t = HeuristicKind::Manhattan)]
        heuristic: HeuristicKind,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum HeuristicKind {
    Manhattan,
    Hamming,
}

impl HeuristicKind {
    fn solve(self, board: Board, stats: &mut impl SearchStatsCollector) -> Result<Solver, SolveError> {
        match self {
            HeuristicKind::Manhattan => Solver::with_heuristic_stats(board, &Manhattan, stats),
            HeuristicKind::Hamming => Solver::with_heuristic_stats(board, &Hamming, stats),
        }
    }
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).context("cannot read puzzle from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(input).with_context(|| format!("cannot read puzzle from {}", input.display()))
    }
}

/// Renders the result of `solver` the way `solve` prints it.
fn render(solver: &Solver, quiet: bool) -> String {
    let mut out = String::new();
    match solver.solution() {
        None => out.push_str("No solution possible\n"),
        Some(solution) => {
            // writing to a String cannot fail
            let _ = writeln!(out, "Minimum number of moves = {}", solution.len() - 1);
            if !quiet {
                for board in solution {
                    let _ = writeln!(out, "{}", board);
                }
            }
        }
    }
    out
}

fn solve(input: &Path, heuristic: HeuristicKind, quiet: bool) -> Result<()> {
    let board: Board = read_input(input)?.parse()
        .with_context(|| format!("invalid puzzle in {}", input.display()))?;
    info!("solving {}x{} board with {:?} heuristic", board.dimension(), board.dimension(), heuristic);
    let mut stats = SearchAllStats::default();
    let solver = heuristic.solve(board, &mut stats)?;
    info!("{} expansions, {} nodes", stats.expanded, stats.nodes());
    print!("{}", render(&solver, quiet));
    Ok(())
}

/// Results of solving a series of boards.
#[derive(Default)]
struct BenchSummary {
    moves: Vec<f64>,
    seconds: Vec<f64>,
    stats: SearchAllStats,
    given_up: usize,
}

impl BenchSummary {
    fn print(&self, dimension: u8, steps: usize) {
        let solved = self.moves.len();
        println!("{}x{} boards after {} random slides: {} solved, {} given up", dimension, dimension, steps, solved, self.given_up);
        if solved == 0 { return; }
        let n = solved as f64;
        println!("  average moves: {:.2}", FSum::with_all(self.moves.iter().copied()).value() / n);
        println!("  average expansions: {:.1}, nodes: {:.1}",
                 self.stats.expanded as f64 / n, self.stats.nodes() as f64 / n);
        println!("  average time: {:.6} s", FSum::with_all(self.seconds.iter().copied()).value() / n);
    }
}

fn bench(dimension: u8, count: usize, steps: usize, seed: u64, limit: Option<u64>, heuristic: HeuristicKind) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut summary = BenchSummary::default();
    let mut limited = Limited::with_limit(limit.unwrap_or(u64::MAX));
    for index in 0..count {
        let board = random_walk(dimension, steps, &mut rng);
        limited.reset_stats();
        let start = ProcessTime::now();
        match heuristic.solve(board, &mut limited) {
            Ok(solver) => {
                let moves = solver.moves().context("random walk board reported as unsolvable")?;
                summary.seconds.push(start.elapsed().as_secs_f64());
                summary.moves.push(moves as f64);
                summary.stats += limited.stats;
            }
            Err(SolveError::Cancelled) => {
                warn!("board {} given up after {} expansions", index, limited.stats.expanded);
                summary.given_up += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
    summary.print(dimension, steps);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    match Cli::parse().cmd {
        Command::Solve { input, heuristic, quiet } => solve(&input, heuristic, quiet),
        Command::Bench { dimension, count, steps, seed, limit, heuristic } =>
            bench(dimension, count, steps, seed, limit, heuristic),
    }
}
