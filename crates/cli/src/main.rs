use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use portal_core::ItemOrder;
use portal_http::{AppState, create_router};
use portal_service::{IngestService, ItemService, SearchService};
use portal_storage::Storage;

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Content portal for Brazilian public datasets", long_about = None)]
struct Cli {
    /// Database file path (defaults to the user data directory)
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        #[arg(short, long, default_value = "38080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Run the ETL pipelines (fetch, normalize, upsert)
    Ingest {
        /// Restrict to one vertical (fipe | nutricao | medicamentos)
        #[arg(short, long)]
        vertical: Option<String>,
    },
    /// Full-text search across every vertical
    Search {
        query: String,
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Fetch one item by vertical and slug
    Get { vertical: String, slug: String },
    /// List a vertical's items
    List {
        vertical: String,
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Listing order: title | recent
        #[arg(short, long, default_value = "title")]
        order: String,
    },
}

fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portal-descomplicado")
        .join("portal.db")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let db_path = cli.db_path.unwrap_or_else(default_db_path);

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let storage = Arc::new(Storage::new(&db_path)?);

    match cli.command {
        Commands::Serve { port, host } => {
            let state = Arc::new(AppState {
                item_service: Arc::new(ItemService::new(Arc::clone(&storage))),
                search_service: Arc::new(SearchService::new(Arc::clone(&storage))),
            });
            let router = create_router(state);
            let addr = format!("{host}:{port}");
            tracing::info!("Starting HTTP server on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, router).await?;
        },
        Commands::Ingest { vertical } => {
            let ingest = IngestService::new(Arc::clone(&storage));
            let reports = match vertical.as_deref() {
                None => ingest.run_all().await?,
                Some("fipe") => vec![ingest.run_vehicles().await?],
                Some("nutricao") => vec![ingest.run_foods().await?],
                Some("medicamentos") => vec![ingest.run_medications().await?],
                Some(other) => {
                    anyhow::bail!("unknown vertical: {other} (expected fipe|nutricao|medicamentos)")
                },
            };
            println!("{}", serde_json::to_string_pretty(&reports)?);
        },
        Commands::Search { query, limit } => {
            let search = SearchService::new(Arc::clone(&storage));
            let hits = search.search(&query, limit).await?;
            println!("{}", serde_json::to_string_pretty(&hits)?);
        },
        Commands::Get { vertical, slug } => {
            let items = ItemService::new(Arc::clone(&storage));
            match items.get_item_page(&vertical, &slug).await {
                Ok(page) => println!("{}", serde_json::to_string_pretty(&page)?),
                Err(e) if e.is_not_found() => println!("Item not found: {vertical}/{slug}"),
                Err(e) => return Err(e.into()),
            }
        },
        Commands::List { vertical, limit, order } => {
            let order = match order.as_str() {
                "title" => ItemOrder::Title,
                "recent" => ItemOrder::RecentlyUpdated,
                other => anyhow::bail!("unknown order: {other} (expected title|recent)"),
            };
            let items = ItemService::new(Arc::clone(&storage));
            let listed = items.list_items(&vertical, limit, order).await?;
            println!("{}", serde_json::to_string_pretty(&listed)?);
        },
    }

    Ok(())
}
