use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clara_sitemap::config::{
    Config, FirestoreConfig, SiteConfig, BASE_URL, COLLECTION_PATH, FIRESTORE_API_BASE,
    OUTPUT_PATH, PROJECT_ID,
};
use clara_sitemap::storage::DiskStorage;
use clara_sitemap::{date, generate, FirestoreClient};
use tracing_subscriber::EnvFilter;

/// Generates `sitemap.xml` from the articles stored in Firestore.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Where to write the sitemap.
    #[arg(long, default_value = OUTPUT_PATH)]
    output: PathBuf,

    /// The public URL of the site.
    #[arg(long, default_value = BASE_URL)]
    base_url: String,

    /// The root of the Firestore REST API.
    #[arg(long, default_value = FIRESTORE_API_BASE)]
    api_base: String,

    /// The Firebase project ID.
    #[arg(long, default_value = PROJECT_ID)]
    project: String,

    /// The path of the article collection.
    #[arg(long, default_value = COLLECTION_PATH)]
    collection: String,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log debug output.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> Result<Config> {
        Ok(Config {
            site: SiteConfig::new(&self.base_url)?,
            firestore: FirestoreConfig {
                api_base: self.api_base,
                project_id: self.project,
                collection_path: self.collection,
            },
            output_path: self.output,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.quiet, args.verbose)?;

    let config = args.into_config()?;
    let client = FirestoreClient::new(config.firestore.clone());
    let storage = DiskStorage::new(PathBuf::from("."));

    println!("Fetching articles from Firestore...");

    let report = generate(&config, &client, &storage, date::today())
        .await
        .context("failed to write sitemap")?;

    println!("{} articles found.", report.article_count);
    println!("{} generated successfully.", report.output_path.display());

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_env("CLARA_SITEMAP_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing subscriber: {err}"))?;

    Ok(())
}
