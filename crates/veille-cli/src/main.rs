use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use veille_core::{load_app_config_from_env, load_watch, AppConfig};
use veille_pipeline::{
    cap, filter_by_keyword, filter_by_language, filter_by_model, run_watch, LanguageFilter,
    LexiconClassifier,
};

mod render;

#[derive(Debug, Parser)]
#[command(name = "veille")]
#[command(about = "Brand press coverage watch")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the watch pipeline and render the result table
    Watch {
        /// Keep only articles detected in this language (repeatable)
        #[arg(long = "lang")]
        langs: Vec<String>,

        /// Keep only articles with this model tag
        #[arg(long)]
        model: Option<String>,

        /// Keep only titles containing this keyword (case-insensitive)
        #[arg(long)]
        keyword: Option<String>,

        /// Maximum number of rows to display
        #[arg(long)]
        limit: Option<usize>,

        /// Print each article's summary under its row
        #[arg(long)]
        summary: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Show which adapters and queries would run, without fetching
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the resolved configuration (secrets redacted)
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let app = load_app_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&app.log_level)),
        )
        .init();

    match cli.command {
        Commands::Watch {
            langs,
            model,
            keyword,
            limit,
            summary,
            json,
            dry_run,
        } => {
            run_watch_command(
                &app,
                &langs,
                model.as_deref(),
                keyword.as_deref(),
                limit,
                summary,
                json,
                dry_run,
            )
            .await
        }
        Commands::Config => run_config_command(&app),
    }
}

#[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
async fn run_watch_command(
    app: &AppConfig,
    langs: &[String],
    model: Option<&str>,
    keyword: Option<&str>,
    limit: Option<usize>,
    with_summary: bool,
    json: bool,
    dry_run: bool,
) -> anyhow::Result<()> {
    let watch = load_watch(&app.watch_path)?;
    tracing::debug!(
        queries = watch.queries.len(),
        feeds = watch.feeds.len(),
        "watch configuration loaded"
    );

    if dry_run {
        print_dry_run(app, &watch);
        return Ok(());
    }

    if !app.any_api_key() && watch.feeds.is_empty() {
        println!("no adapters enabled: set at least one API key or configure feeds");
        return Ok(());
    }

    // One classifier for the whole process; the pipeline borrows it.
    let classifier = LexiconClassifier;
    let outcome = run_watch(app, &watch, &classifier).await;

    let language_filter = LanguageFilter::from_codes(langs);
    let mut articles = filter_by_language(outcome.articles, &language_filter);
    articles = filter_by_model(articles, model);
    articles = filter_by_keyword(articles, keyword);
    let articles = cap(articles, limit.unwrap_or(app.result_limit));

    if articles.is_empty() {
        println!("no articles found");
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&articles)?);
    } else {
        println!(
            "{} articles analyzed ({} raw records fetched)",
            articles.len(),
            outcome.raw_count
        );
        render::render_table(&articles, with_summary);
    }

    Ok(())
}

fn print_dry_run(app: &AppConfig, watch: &veille_core::WatchFile) {
    let adapter = |name: &str, enabled: bool| {
        println!(
            "  {name}: {}",
            if enabled { "enabled" } else { "disabled (no key)" }
        );
    };
    println!("adapters:");
    adapter("newsdata", app.newsdata_api_key.is_some());
    adapter("newsapi", app.newsapi_api_key.is_some());
    adapter("gnews", app.gnews_api_key.is_some());
    println!("  rss: {} feed(s)", watch.feeds.len());
    println!("queries: [{}]", watch.queries.join(", "));
    println!(
        "languages: [{}]",
        if watch.languages.is_empty() {
            "untargeted".to_string()
        } else {
            watch.languages.join(", ")
        }
    );
}

fn run_config_command(app: &AppConfig) -> anyhow::Result<()> {
    println!("{app:#?}");
    match load_watch(&app.watch_path) {
        Ok(watch) => {
            println!(
                "watch file: {} queries, {} model tags, {} feeds",
                watch.queries.len(),
                watch.model_tags.len(),
                watch.feeds.len()
            );
        }
        Err(e) => println!("watch file: unavailable ({e})"),
    }
    Ok(())
}
