use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use scholar_badge::badge::download::BadgeClient;
use scholar_badge::badge::BadgeTarget;
use scholar_badge::config::Config;
use scholar_badge::notify::pushplus::PushPlusNotifier;
use scholar_badge::notify::traits::{NoopNotifier, Notifier};
use scholar_badge::scholar::client::SerpApiClient;

/// Scholar Badge: keep a Google Scholar citation badge up to date.
///
/// Looks up an author's citation count through SerpApi, optionally pushes
/// it to PushPlus, and writes a shields.io badge as SVG and PNG.
#[derive(Parser)]
#[command(name = "scholar-badge", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch citations, send a notification and regenerate the badge
    Update {
        /// Google Scholar author id (overrides SCHOLAR_AUTHOR_ID)
        #[arg(long)]
        author: Option<String>,

        /// Directory for scholar_badge.svg / .png (overrides BADGE_OUT_DIR)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Skip the PushPlus notification
        #[arg(long)]
        no_notify: bool,

        /// Only write the SVG badge
        #[arg(long)]
        no_png: bool,
    },

    /// Fetch and print the author's citation metrics
    Fetch {
        /// Google Scholar author id (overrides SCHOLAR_AUTHOR_ID)
        #[arg(long)]
        author: Option<String>,

        /// Print metrics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a badge for a given count without querying Google Scholar
    Badge {
        /// Citation count to show on the badge
        count: u64,

        /// Directory for scholar_badge.svg / .png (overrides BADGE_OUT_DIR)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Only write the SVG badge
        #[arg(long)]
        no_png: bool,
    },

    /// Show configuration and badge file status
    Status,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging on stderr so stdout stays clean for --json
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("scholar_badge=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Update {
            author,
            out_dir,
            no_notify,
            no_png,
        } => {
            let mut config = Config::load()?;
            if let Some(dir) = out_dir {
                config.out_dir = dir;
            }
            let author_id = author.unwrap_or_else(|| config.author_id.clone());

            let scholar = create_scholar_client(&config)?;
            let notifier = create_notifier(&config, no_notify)?;
            let badges = BadgeClient::new()?;
            let target = badge_target(&config, no_png);

            info!(author_id = %author_id, "Starting update");

            let outcome = scholar_badge::pipeline::update::run(
                &scholar,
                notifier.as_ref(),
                &badges,
                &author_id,
                &config.notify_title,
                &target,
            )
            .await?;

            scholar_badge::output::terminal::display_outcome(&outcome, notifier.is_enabled());
            println!("\n{}", "Badge updated.".bold());
        }

        Commands::Fetch { author, json } => {
            let config = Config::load()?;
            let author_id = author.unwrap_or_else(|| config.author_id.clone());
            let scholar = create_scholar_client(&config)?;

            let metrics = scholar.fetch_metrics(&author_id).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&metrics)?);
            } else {
                scholar_badge::output::terminal::display_metrics(&metrics);
            }
        }

        Commands::Badge {
            count,
            out_dir,
            no_png,
        } => {
            let mut config = Config::load()?;
            if let Some(dir) = out_dir {
                config.out_dir = dir;
            }

            let badges = BadgeClient::new()?;
            let target = badge_target(&config, no_png);
            let rendered = scholar_badge::badge::render(&badges, &target, count).await?;

            scholar_badge::output::terminal::display_badge(&rendered);
        }

        Commands::Status => match Config::load() {
            Ok(config) => scholar_badge::status::show(&config),
            Err(e) => scholar_badge::status::show_invalid(&e),
        },
    }

    Ok(())
}

/// Build the SerpApi client, failing before any network call when the key
/// is missing.
fn create_scholar_client(config: &Config) -> Result<SerpApiClient> {
    let key = config.require_serpapi()?.clone();
    SerpApiClient::new(&config.serpapi_url, key, &config.language)
}

/// PushPlus when a token is configured, otherwise a no-op.
fn create_notifier(config: &Config, disabled: bool) -> Result<Box<dyn Notifier>> {
    match (&config.pushplus_token, disabled) {
        (Some(token), false) => Ok(Box::new(PushPlusNotifier::new(
            &config.pushplus_url,
            token.clone(),
        )?)),
        _ => {
            info!("Notifications disabled");
            Ok(Box::new(NoopNotifier))
        }
    }
}

fn badge_target(config: &Config, no_png: bool) -> BadgeTarget {
    BadgeTarget {
        base_url: config.shields_url.clone(),
        style: config.badge_style.clone(),
        svg_path: config.svg_path(),
        png: (!no_png).then(|| (config.png_path(), config.png_scale)),
    }
}
