#[cfg(not(target_arch = "wasm32"))]
use {
    anyhow::Result,
    clap::Parser,
    signal_board::{
        ASSETS, BOARD, Board, BoardEvent, Cli, FileStore, OperateOutcome, ThreadRandom,
        ui::{render_board, render_status_line},
        utils::{Clock, ShiftedClock, SystemClock, format_duration, parse_local},
    },
    std::{panic, time::Duration},
};

// The browser entry point lives in `signal_board::web`.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("signal_board"), my_code_level)
        .init();

    let args = Cli::parse();

    let clock: Box<dyn Clock> = match &args.at {
        Some(text) => Box::new(ShiftedClock::starting_at(parse_local(text)?)),
        None => Box::new(SystemClock),
    };
    let store = FileStore::new(&args.state);

    let mut board = Board::new(BOARD, ASSETS, clock, Box::new(ThreadRandom), Box::new(store));

    if args.refresh {
        board.refresh_signals();
    }

    if let Some(ticker) = &args.operate {
        match board.operate(ticker) {
            OperateOutcome::StartAnalysis { ticker } => {
                let verdict = board.conclude_analysis();
                println!(
                    "{}: analysis done -> {} (expiry {} min)",
                    ticker, verdict.side, verdict.expiry_minutes
                );
            }
            OperateOutcome::ReAnalysisPending { ticker, ready_at_ms } => {
                println!(
                    "{}: already analyzed this interval, re-analysis ready in {}",
                    ticker,
                    format_duration(ready_at_ms - board.now_ms())
                );
            }
            OperateOutcome::UnknownAsset { ticker } => {
                println!("{}: not on the board", ticker);
            }
            OperateOutcome::BoardClosed { ticker } => {
                println!("{}: board is closed", ticker);
            }
        }
    }

    print_board(&board);

    let Some(secs) = args.watch else {
        return Ok(());
    };

    let mut interval = tokio::time::interval(Duration::from_secs(secs.max(1)));
    interval.tick().await; // first tick completes immediately
    loop {
        tokio::select! {
            _ = interval.tick() => {
                for event in board.tick() {
                    report(&event);
                }
                print_board(&board);
            }
            _ = tokio::signal::ctrl_c() => {
                board.shutdown();
                return Ok(());
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn print_board(board: &Board) {
    println!("{}", render_board(board));
    println!("{}", render_status_line(board));
}

#[cfg(not(target_arch = "wasm32"))]
fn report(event: &BoardEvent) {
    match event {
        BoardEvent::IntervalRolled { from, to } => {
            println!("New signals: interval {} -> {}", from, to);
        }
        BoardEvent::ReAnalysisResolved { ticker, outcome } => {
            println!("{}: re-analysis finished, {}", ticker, outcome);
        }
        BoardEvent::NoiseRefreshed { .. } => {}
    }
}
