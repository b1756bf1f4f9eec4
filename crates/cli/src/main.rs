// ABOUTME: CLI that collects app store customer reviews and saves them as JSON.
// ABOUTME: `scrape` reads the reviews page (errors logged, output always written); `rss` reads the feed (errors fatal).

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use appreviews_feed::{fetch_feed, parse_feed_bytes};
use appreviews_scrape::options::DEFAULT_USER_AGENT;
use appreviews_scrape::target::{DEFAULT_APP_ID, DEFAULT_COUNTRY, DEFAULT_SLUG};
use appreviews_scrape::{output, AppTarget, ClientBuilder, Options, Review};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Collect customer reviews for one app in one storefront.
#[derive(Parser, Debug)]
#[command(name = "appreviews")]
#[command(about = "Collect app store customer reviews and save them as JSON", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape the see-all reviews page.
    Scrape(ScrapeArgs),
    /// Read the customer reviews JSON feed.
    Rss(RssArgs),
}

/// Options accepted before or after the subcommand.
#[derive(Args, Debug)]
struct CommonArgs {
    /// Storefront country code.
    #[arg(long, global = true, default_value = DEFAULT_COUNTRY)]
    country: String,

    /// Numeric app identifier.
    #[arg(long, global = true, default_value = DEFAULT_APP_ID)]
    app_id: String,

    /// App name slug used in the reviews page URL.
    #[arg(long, global = true, default_value = DEFAULT_SLUG)]
    app_slug: String,

    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Request timeout in seconds.
    #[arg(long, global = true, default_value_t = 30)]
    timeout_secs: u64,
}

impl CommonArgs {
    fn target(&self) -> AppTarget {
        AppTarget::new(&self.country, &self.app_slug, &self.app_id)
    }

    fn apply(&self, opts: Options) -> Options {
        Options {
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
            ..opts
        }
    }
}

#[derive(Args, Debug)]
struct ScrapeArgs {
    /// Page URL to scrape instead of the one built from the app target.
    #[arg(long)]
    url: Option<String>,

    /// Read the page from a saved HTML file instead of fetching it.
    #[arg(long)]
    html: Option<PathBuf>,

    /// Additional host the scraper may visit (apps.apple.com is always allowed).
    #[arg(long = "allow-domain")]
    allow_domains: Vec<String>,

    /// Output file path.
    #[arg(short, long, default_value = output::SCRAPE_OUTPUT_FILE)]
    output: PathBuf,
}

#[derive(Args, Debug)]
struct RssArgs {
    /// Feed URL to fetch instead of the one built from the app target.
    #[arg(long)]
    url: Option<String>,

    /// Read the feed from a file, or "-" for stdin, instead of fetching it.
    #[arg(long)]
    input: Option<String>,

    /// Output file path.
    #[arg(short, long, default_value = output::FEED_OUTPUT_FILE)]
    output: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Scrape(args) => run_scrape(&cli.common, args),
        Command::Rss(args) => run_rss(&cli.common, args),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run_scrape(common: &CommonArgs, args: ScrapeArgs) -> Result<()> {
    let url = args
        .url
        .clone()
        .unwrap_or_else(|| common.target().reviews_page_url());

    let mut builder = ClientBuilder::with_options(common.apply(Options::default()));
    for domain in &args.allow_domains {
        builder = builder.allowed_domain(domain);
    }
    let client = builder.build().context("failed to configure scraper")?;

    let reviews = match &args.html {
        Some(path) => scrape_file(&client, path, &url),
        None => {
            tracing::info!(url = %url, "Scraping reviews page");
            client.collect(&url)
        }
    };

    output::write_reviews(&args.output, &reviews)
        .with_context(|| format!("could not save reviews to {}", args.output.display()))?;
    println!(
        "Scraping complete. {} reviews saved to {}",
        reviews.len(),
        args.output.display()
    );
    Ok(())
}

fn scrape_file(client: &appreviews_scrape::Client, path: &Path, url: &str) -> Vec<Review> {
    match fs::read_to_string(path) {
        Ok(html) => client.scrape_html(&html, url),
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "Could not read HTML file");
            Vec::new()
        }
    }
}

fn run_rss(common: &CommonArgs, args: RssArgs) -> Result<()> {
    let reviews = match &args.input {
        Some(input) => {
            let bytes = load_bytes(input)?;
            parse_feed_bytes(&bytes).with_context(|| format!("invalid feed in {}", input))?
        }
        None => {
            let url = args
                .url
                .clone()
                .unwrap_or_else(|| common.target().feed_url());
            tracing::info!(url = %url, "Fetching reviews feed");
            let opts = common.apply(Options::unrestricted());
            fetch_feed(&opts, &url).with_context(|| format!("could not read feed {}", url))?
        }
    };

    output::write_reviews(&args.output, &reviews)
        .with_context(|| format!("could not save reviews to {}", args.output.display()))?;
    println!(
        "RSS feed scraping complete. {} reviews saved to {}",
        reviews.len(),
        args.output.display()
    );
    Ok(())
}

fn load_bytes(input: &str) -> Result<Vec<u8>> {
    if input == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read feed from stdin")?;
        return Ok(buf);
    }
    fs::read(input).with_context(|| format!("failed to read feed file {}", input))
}
