use anyhow::{Context, Result};
use clap::Parser;
use kestrel::perft::{perft, perft_divide};
use kestrel::{movegen, Position};
use rayon::prelude::*;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the kestrel move generator")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// FEN string or "startpos"
    #[arg(value_name = "FEN", default_value = "startpos")]
    fen: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Print leaf counts per root move
    #[arg(long, default_value_t = false)]
    divide: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let pos = if args.fen == "startpos" {
        Position::startpos()
    } else {
        Position::from_fen(&args.fen).with_context(|| format!("invalid FEN: {}", args.fen))?
    };
    let side = pos.side_to_move();

    if args.divide {
        let mut board = pos.board().clone();
        let mut total = 0u64;
        for (mv, n) in perft_divide(&mut board, side, args.depth) {
            println!("{}: {}", mv, n);
            total += n;
        }
        println!("\nnodes: {}", total);
        return Ok(());
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build().context("thread pool")?;
    let t0 = Instant::now();
    let nodes = pool.install(|| {
        if args.threads <= 1 || args.depth <= 1 {
            let mut b = pos.board().clone();
            return perft(&mut b, side, args.depth);
        }
        // Each worker owns its own board; nothing is shared while searching.
        let mut root = pos.board().clone();
        let root_moves = movegen::legal_moves(&mut root, side);
        root_moves.par_iter().map(|mv| {
            let mut b = pos.board().clone();
            let mut mv = *mv;
            b.apply(&mut mv);
            perft(&mut b, side.opposite(), args.depth - 1)
        }).sum()
    });
    let dt = t0.elapsed().as_secs_f64();
    let nps = if dt > 0.0 { nodes as f64 / dt } else { 0.0 };
    log::info!("perft depth {} threads {}", args.depth, args.threads);
    println!("nodes: {} elapsed: {:.3}s nps: {:.0}", nodes, dt, nps);
    Ok(())
}
