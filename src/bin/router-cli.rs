use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use resource_router::config::{build_router, load_config};
use resource_router::routing::list_routes;

#[derive(Parser)]
#[command(name = "router-cli")]
#[command(about = "Inspect and exercise a resource router route file", long_about = None)]
struct Cli {
    /// Route file to load
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    /// Base URL of a running dispatch server (for `probe`)
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a request and print the outcome
    Resolve { method: String, path: String },
    /// Print the handler name for one segment
    Translate {
        method: String,
        /// Last matched resource, "" for none
        parent: String,
        current: String,
        /// More segments follow `current`
        #[arg(long)]
        has_next: bool,
    },
    /// List registered handlers and the URLs that reach them
    Routes,
    /// Validate the route file
    Check,
    /// Send a request to a running server and print its answer
    Probe { method: String, path: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { method, path } => {
            let router = build_router(&load_config(&cli.config)?)?;
            let outcome = router.route(&method, &path)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Commands::Translate {
            method,
            parent,
            current,
            has_next,
        } => {
            let router = build_router(&load_config(&cli.config)?)?;
            println!("{}", router.translator().translate(&method.to_lowercase(), &parent, &current, has_next));
        }
        Commands::Routes => {
            let router = build_router(&load_config(&cli.config)?)?;
            for route in list_routes(&router) {
                println!("{}", route);
            }
        }
        Commands::Check => {
            let config = load_config(&cli.config)?;
            println!(
                "{}: ok ({} handlers under {})",
                cli.config.display(),
                config.handlers.len(),
                config.router.namespace
            );
        }
        Commands::Probe { method, path } => {
            let client = reqwest::Client::new();
            let method = reqwest::Method::from_bytes(method.to_uppercase().as_bytes())?;
            let res = client
                .request(method, format!("{}{}", cli.url.trim_end_matches('/'), path))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if let Some(allow) = res.headers().get(reqwest::header::ALLOW) {
        eprintln!("Allow: {}", allow.to_str()?);
    }
    eprintln!("Status: {}", status);

    let text = res.text().await?;
    if text.is_empty() {
        return Ok(());
    }
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
