//! applog Demo Binary
//!
//! Writes a burst of entries to a log file and prints what landed.

use std::sync::mpsc;
use std::time::Duration;

use applog::{Level, Log};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// applog demo
#[derive(Parser, Debug)]
#[command(name = "applog-demo")]
#[command(about = "Serialized append-only text log demo")]
#[command(version)]
struct Args {
    /// Log file path
    #[arg(short, long, default_value = "./applog.txt")]
    path: String,

    /// Number of entries to write
    #[arg(short, long, default_value = "10")]
    count: usize,

    /// Clear the log file before writing
    #[arg(long)]
    clear: bool,

    /// Delete the log file after printing it
    #[arg(long)]
    clear_after: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,applog=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("applog demo v{}", applog::VERSION);
    tracing::info!("Log file: {}", args.path);

    let log = Log::new(&args.path, || {
        Some(format!(
            "App: applog-demo\nVersion: {}\nOS: {} ({})\n",
            applog::VERSION,
            std::env::consts::OS,
            std::env::consts::ARCH,
        ))
    });

    if args.clear {
        log.clear();
    }

    for i in 0..args.count {
        let level = Level::ALL[i % Level::ALL.len()];
        log.write(level, "demo", format!("entry {}", i));
    }

    // Wait for the queued read so we print the final file contents.
    let (tx, rx) = mpsc::channel();
    log.get_with(args.clear_after, Some(Box::new(move |content| {
        let _ = tx.send(content);
    })));

    match rx.recv_timeout(Duration::from_secs(5)) {
        Ok(Some(content)) => {
            println!("--- {} ---", args.path);
            print!("{}", content);
        }
        Ok(None) => println!("log file is missing or unreadable"),
        Err(_) => eprintln!("timed out waiting for log contents"),
    }
}
