//! HN Search CLI — query Hacker News from the terminal.
//!
//! Drives the same `SearchView` state machine as the desktop app: one explicit
//! fetch, settled into the view, then rendered.

use clap::{Parser, Subcommand};

use hnsearch_core::render::{render, Rendering};
use hnsearch_core::{Config, SearchClient, SearchView, Tag};

/// HN Search CLI — search Hacker News stories, Ask HN, Show HN and polls.
#[derive(Parser)]
#[command(name = "hns", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Search endpoint (overrides config file and HNSEARCH_ENDPOINT)
    #[arg(long, global = true)]
    endpoint: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search Hacker News
    Search {
        /// Search query (empty matches everything)
        #[arg(default_value = "")]
        query: String,

        /// Content category: story, ask_hn, show_hn or poll
        #[arg(long)]
        tag: Option<Tag>,

        /// Zero-based result page
        #[arg(long, default_value = "0")]
        page: u32,
    },
    /// Show the effective configuration
    Config,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hnsearch=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load();
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    tracing::debug!(endpoint = %config.endpoint, timeout_secs = config.timeout_secs, "Config loaded");

    match cli.command {
        Commands::Search { query, tag, page } => {
            let tag = tag.unwrap_or(config.default_tag);
            std::process::exit(run_search(&config, query, tag, page, cli.json));
        }
        Commands::Config => {
            if cli.json {
                print_json(&config);
            } else {
                println!("Endpoint:      {}", config.endpoint);
                println!("Default tag:   {}", config.default_tag);
                println!("Fallback URL:  {}", config.fallback_url);
                println!("Timeout:       {}s", config.timeout_secs);
                match hnsearch_core::config_dir() {
                    Some(dir) => println!("Config file:   {}", dir.join("config.toml").display()),
                    None => println!("Config file:   (no home directory)"),
                }
            }
        }
    }
}

/// Run one search and print it. Returns the process exit code.
fn run_search(config: &Config, query: String, tag: Tag, page: u32, json: bool) -> i32 {
    let client = match SearchClient::from_config(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Could not start async runtime: {e}");
            return 1;
        }
    };

    let mut view = SearchView::new(query, tag, page);
    let ticket = view.begin_fetch();
    let outcome = runtime.block_on(client.search(&ticket.request));
    view.settle(ticket.token, outcome);

    let out = render(&view, &config.fallback_url);

    if let Some(err) = &out.error {
        eprintln!("Search failed: {err}");
        return 1;
    }

    if json {
        print_json(&serde_json::json!({
            "query": view.query(),
            "tag": view.tag(),
            "page": view.page(),
            "pages": view.total_pages(),
            "resultsPerPage": view.page_size(),
            "rows": out.rows,
        }));
        return 0;
    }

    if out.rows.is_empty() {
        eprintln!("No results for '{}' ({})", view.query(), view.tag().label());
        return 1;
    }
    print_rendering(&out, view.page());
    0
}

fn print_rendering(out: &Rendering, page: u32) {
    println!("{}\n", out.header);
    let width = out.rows.last().map(|r| r.ordinal.to_string().len()).unwrap_or(1);
    for row in &out.rows {
        let title = if row.title.is_empty() { "(untitled)" } else { row.title.as_str() };
        println!("{:>width$}. {}", row.ordinal, title);

        let mut meta = Vec::new();
        if let Some(points) = row.points {
            meta.push(format!("{points} points"));
        }
        if let Some(author) = &row.author {
            meta.push(format!("by {author}"));
        }
        if let Some(comments) = row.num_comments {
            meta.push(format!("{comments} comments"));
        }
        if let Some(created) = &row.created_at {
            meta.push(created.clone());
        }
        let pad = " ".repeat(width + 2);
        println!("{pad}{}", row.href);
        if !meta.is_empty() {
            println!("{pad}{}", meta.join(" | "));
        }
    }

    let mut nav = Vec::new();
    if !out.pagination.prev_disabled {
        nav.push(format!("previous: --page {}", page - 1));
    }
    if !out.pagination.next_disabled {
        nav.push(format!("next: --page {}", page + 1));
    }
    if !nav.is_empty() {
        eprintln!("\n{}", nav.join(", "));
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Could not encode JSON: {e}"),
    }
}
