use anyhow::Context;
use clap::Parser;
use chrono::Utc;
use tracing_subscriber::EnvFilter;

use newsdesk::cli::{Cli, Commands};
use newsdesk::config::Config;
use newsdesk::domain::date_range::DEFAULT_RANGE_START;
use newsdesk::domain::{DateRange, NewsRecord};
use newsdesk::services::{FetchService, LoadState, NewsService};
use newsdesk::sources::{DirectSource, FeedSource, RelaySource};
use newsdesk::storage::{CacheStore, SqliteKeyValueStore, SqliteStorage, CACHE_KEY};
use newsdesk::text;

type Service = NewsService<Box<dyn FeedSource>, SqliteKeyValueStore>;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load configuration
    let config = Config::from_env().context("failed to load configuration")?;

    // Initialize storage
    let storage = SqliteStorage::new(&config.db_path)
        .with_context(|| format!("failed to open database at {}", config.db_path))?;
    let cache = CacheStore::new(SqliteKeyValueStore::new(storage), CACHE_KEY, config.cache_ttl);

    let source: Box<dyn FeedSource> = match &config.relay_url {
        Some(relay) => Box::new(RelaySource::new(relay.clone(), config.http_timeout)),
        None => Box::new(DirectSource::new(config.http_timeout)),
    };
    let fetcher = FetchService::new(source, config.feed_url.clone());
    let mut service = NewsService::new(fetcher, cache);

    match cli.command {
        Commands::Show { from, to, refresh } => cmd_show(&mut service, from, to, refresh),
        Commands::Refresh => cmd_refresh(&mut service),
        Commands::Status => cmd_status(&service),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "newsdesk=debug" } else { "newsdesk=warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_show(service: &mut Service, from: Option<String>, to: Option<String>, refresh: bool) {
    if from.is_some() || to.is_some() {
        let from = from.unwrap_or_else(|| DEFAULT_RANGE_START.to_string());
        let to = to.unwrap_or_else(|| text::today().to_string());
        service.set_date_range(DateRange::from_input(&from, &to));
    }

    if refresh {
        service.load(true);
    } else {
        service.activate();
    }

    if let Some(message) = service.error() {
        println!("{}\n", message);
    }

    let articles = service.filtered_sorted();
    if articles.is_empty() {
        println!("No articles in the selected date range.");
        return;
    }

    println!("{} articles:\n", articles.len());
    for article in &articles {
        print_article(article);
    }
}

fn print_article(article: &NewsRecord) {
    println!("  {}", article.title);
    println!(
        "    {} · {}",
        article.source,
        text::format_date(&article.published_at)
    );
    if !article.snippet.is_empty() {
        println!("    {}", article.snippet);
    }
    println!("    {}", article.url);
    println!();
}

fn cmd_refresh(service: &mut Service) {
    println!("Fetching news...");

    match service.load(true) {
        LoadState::Ready => println!("Cached {} relevant articles.", service.records().len()),
        _ => println!("{}", service.error().unwrap_or("Refresh did not complete.")),
    }
}

fn cmd_status(service: &Service) {
    let cache = service.cache();

    let Some(entry) = cache.entry() else {
        println!("No cached records.");
        return;
    };

    let now = Utc::now();
    let age = entry.age(now);
    let freshness = if entry.is_fresh(now, cache.window()) {
        "fresh"
    } else {
        "stale"
    };

    match entry.written_at() {
        Some(written_at) => println!("Cache written: {}", text::format_iso(&written_at)),
        None => println!("Cache written: unknown"),
    }
    match age {
        Some(age) => println!("Age: {} min ({})", age.num_minutes(), freshness),
        None => println!("Age: unknown ({})", freshness),
    }
    println!("Records: {}", entry.records.len());
}
