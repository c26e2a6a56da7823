use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "site-cli")]
#[command(about = "Inspect the routes of a running portfolio site", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check site status and match strategy
    Status,
    /// Show the rendered route tree
    Routes,
    /// Resolve a path to its route
    Resolve { path: String },
    /// Show navigation state for a path
    Nav { path: String },
    /// Show profile content
    Profile,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match &cli.command {
        Commands::Status => client.get(format!("{base}/api/status")),
        Commands::Routes => client.get(format!("{base}/api/routes")),
        Commands::Resolve { path } => client
            .get(format!("{base}/api/resolve"))
            .query(&[("path", path)]),
        Commands::Nav { path } => client
            .get(format!("{base}/api/navigation"))
            .query(&[("path", path)]),
        Commands::Profile => client.get(format!("{base}/api/profile")),
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: site API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
