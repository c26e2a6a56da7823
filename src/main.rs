//! Portfolio site server.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌──────────────────────────────────────────────────┐
//!                 │                  PORTFOLIO SITE                   │
//!                 │                                                   │
//!   Request ──────┼─▶ http server ──▶ /api/* ──▶ api handlers (JSON)  │
//!                 │        │                                          │
//!                 │        └──────▶ page path                         │
//!                 │                    │                              │
//!                 │                    ▼                              │
//!                 │            routing registry ──▶ matcher           │
//!                 │                    │                              │
//!                 │                    ▼                              │
//!                 │       navigation + layout ──▶ HTML shell          │
//!                 │                                                   │
//!                 │  config (TOML, hot reload) · observability ·      │
//!                 │  lifecycle (startup / shutdown)                   │
//!                 └──────────────────────────────────────────────────┘
//! ```
//!

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Serve the portfolio site", long_about = None)]
struct Args {
    /// TOML config file. Watched for changes; defaults are used when omitted.
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    portfolio_site::lifecycle::startup::run(args.config).await
}
