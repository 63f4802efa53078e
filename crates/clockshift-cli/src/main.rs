//! `clockshift` CLI -- convert UTC timestamps to local time, answer JSON
//! conversion requests, and serve them over HTTP.
//!
//! ## Usage
//!
//! ```sh
//! # One-off conversion
//! clockshift convert --utc "2024-06-15 10:00" --offset -5 --dst
//!
//! # Same, as JSON
//! clockshift convert --utc "2024-06-15 10:00" --offset -5 --dst --json
//!
//! # Answer a JSON request (stdin → stdout)
//! echo '{"command":"convert_datetime","utc_datetime":"2024-01-15 10:00","timezone_offset":5,"is_dst":false}' \
//!   | clockshift handle
//!
//! # Show the DST window for a year
//! clockshift dst 2024 --at "2024-11-03 00:00"
//!
//! # Run the HTTP service (POST /convert)
//! clockshift serve --port 5001
//! ```

mod server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clockshift::{is_dst_period, DstWindow, UtcTimestamp};
use std::io::{self, Read};
use std::process;
use tracing_subscriber::EnvFilter;

use crate::server::ServerConfig;

#[derive(Parser)]
#[command(
    name = "clockshift",
    version,
    about = "UTC to local time conversion with fixed offsets and DST"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a UTC timestamp to local date and time
    Convert {
        /// UTC timestamp as "YYYY-MM-DD HH:MM"
        #[arg(long)]
        utc: String,
        /// Whole-hour UTC offset in [-12, 12]
        #[arg(long, allow_negative_numbers = true)]
        offset: i64,
        /// Add one hour when the timestamp is inside the DST window
        #[arg(long)]
        dst: bool,
        /// Print the result as a JSON object
        #[arg(long)]
        json: bool,
    },
    /// Answer a JSON conversion request
    Handle {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show the DST window for a year
    Dst {
        /// Calendar year
        year: i32,
        /// Also report whether this UTC timestamp ("YYYY-MM-DD HH:MM") is inside the window
        #[arg(long)]
        at: Option<String>,
    },
    /// Serve conversion requests over HTTP
    Serve {
        /// Address to bind
        #[arg(long, env = "CLOCKSHIFT_HOST", default_value = server::DEFAULT_HOST)]
        host: String,
        /// Port to bind
        #[arg(long, env = "CLOCKSHIFT_PORT", default_value_t = server::DEFAULT_PORT)]
        port: u16,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            utc,
            offset,
            dst,
            json,
        } => {
            init_tracing("warn");
            let local = clockshift::convert_str(&utc, offset, dst)
                .with_context(|| format!("Failed to convert '{}'", utc))?;
            if json {
                println!("{}", serde_json::to_string(&local)?);
            } else {
                println!("{}", local);
            }
        }
        Commands::Handle { input, output } => {
            init_tracing("warn");
            let body = read_input(input.as_deref())?;
            let reply = clockshift::handle_json(&body);
            let rendered = serde_json::to_string_pretty(&reply.body)?;
            write_output(output.as_deref(), &rendered)?;
            if !reply.is_success() {
                process::exit(1);
            }
        }
        Commands::Dst { year, at } => {
            init_tracing("warn");
            let window = DstWindow::for_year(year)
                .with_context(|| format!("Year {} is out of range", year))?;
            println!("start: {}", window.start.format("%Y-%m-%d %H:%M"));
            println!("end:   {}", window.end.format("%Y-%m-%d %H:%M"));
            if let Some(raw) = at {
                let instant: UtcTimestamp = raw
                    .parse()
                    .with_context(|| format!("Failed to parse --at '{}'", raw))?;
                println!("in_dst: {}", is_dst_period(instant.naive()));
            }
        }
        Commands::Serve { host, port } => {
            init_tracing("info");
            let config = ServerConfig { host, port };
            tokio::runtime::Runtime::new()
                .context("Failed to start tokio runtime")?
                .block_on(server::serve(config))?;
        }
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` overrides `default_level`.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

