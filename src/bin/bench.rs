use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use kestrel::eval::{Evaluator, MasterEvaluator};
use kestrel::{AlphaBeta, Position, SearchParams};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

// Positions without castling rights, en-passant squares or imminent promotions.
const DEFAULT_SUITE: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w - - 2 3",
    "4k3/8/8/8/5Q2/8/8/2b4K b - - 0 1",
    "6k1/2R4p/6p1/8/6K1/6P1/8/8 w - - 3 38",
];

#[derive(Parser, Debug)]
#[command(name = "kestrel-bench", version, about = "Run alpha-beta over a position suite and report nodes and timings")]
struct Args {
    /// File with one FEN per line (defaults to a built-in suite)
    #[arg(long)]
    positions: Option<String>,

    /// Search depth (overrides the config file)
    #[arg(long)]
    depth: Option<u32>,

    /// Positions searched concurrently, each with its own board and table
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// JSON file with search parameters
    #[arg(long)]
    config: Option<String>,

    /// Disable the transposition table
    #[arg(long, default_value_t = false)]
    no_tt: bool,

    /// Evaluate statically at the horizon instead of running quiescence
    #[arg(long, default_value_t = false)]
    no_quiescence: bool,
}

#[derive(Serialize)]
struct Report {
    fen: String,
    bestmove: Option<String>,
    score_cp: i32,
    nodes: u64,
    elapsed_ms: u128,
}

fn load_suite(path: Option<&str>) -> Result<Vec<String>> {
    match path {
        Some(p) => {
            let text = std::fs::read_to_string(p).with_context(|| format!("read positions: {}", p))?;
            Ok(text.lines().map(str::trim).filter(|l| !l.is_empty() && !l.starts_with('#')).map(String::from).collect())
        }
        None => Ok(DEFAULT_SUITE.iter().map(|s| s.to_string()).collect()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut params = match args.config.as_deref() {
        Some(path) => SearchParams::from_json_file(path)?,
        None => SearchParams::default(),
    };
    if let Some(d) = args.depth { params.depth = d; }
    if args.no_tt { params.use_tt = false; }
    if args.no_quiescence { params.use_quiescence = false; }

    let suite = load_suite(args.positions.as_deref())?;
    let positions: Vec<(String, Position)> = suite
        .into_iter()
        .map(|fen| Position::from_fen(&fen).map(|p| (fen.clone(), p)).with_context(|| format!("invalid FEN: {}", fen)))
        .collect::<Result<_>>()?;

    let evaluator: Arc<dyn Evaluator> = Arc::new(MasterEvaluator::default());
    let bar = ProgressBar::new(positions.len() as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} {elapsed_precise}").context("progress template")?);

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build().context("thread pool")?;
    let t0 = Instant::now();
    let reports: Vec<Report> = pool.install(|| {
        positions.par_iter().map(|(fen, pos)| {
            let mut board = pos.board().clone();
            let mut searcher = AlphaBeta::with_params(evaluator.clone(), params);
            let t = Instant::now();
            let res = searcher.search(&mut board, pos.side_to_move(), params.depth);
            bar.inc(1);
            Report {
                fen: fen.clone(),
                bestmove: res.best_move.map(|m| m.to_string()),
                score_cp: res.score,
                nodes: res.nodes,
                elapsed_ms: t.elapsed().as_millis(),
            }
        }).collect()
    });
    bar.finish_and_clear();

    for r in &reports {
        println!("{}", serde_json::to_string(r)?);
    }
    let nodes: u64 = reports.iter().map(|r| r.nodes).sum();
    let dt = t0.elapsed().as_secs_f64();
    let nps = if dt > 0.0 { nodes as f64 / dt } else { 0.0 };
    eprintln!("positions={} depth={} nodes={} elapsed={:.3}s nps={:.1}", reports.len(), params.depth, nodes, dt, nps);
    Ok(())
}
