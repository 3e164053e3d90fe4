use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use haru_application::AffirmationSession;
use haru_core::card::CategoryFilter;
use haru_core::locale::Locale;
use haru_core::store::StateStore;
use haru_infrastructure::{HaruPaths, JsonStateStore, MemoryStateStore, QuotableClient};

mod commands;

#[derive(Parser)]
#[command(name = "haru")]
#[command(about = "haru - daily affirmation cards with streaks, favorites and history", long_about = None)]
struct Cli {
    /// UI language (ko or en)
    #[arg(long, global = true, default_value = "ko")]
    lang: String,

    /// Override the state directory
    #[arg(long, global = true)]
    data_dir: Option<std::path::PathBuf>,

    /// Keep all state in memory (nothing is persisted)
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a new affirmation card
    Draw {
        /// Category: self-love, motivation, gratitude, relationships,
        /// success, quote or all
        #[arg(long, default_value = "all")]
        category: String,
        /// Toggle the drawn card in the favorites
        #[arg(long)]
        fav: bool,
        /// Share the drawn card
        #[arg(long)]
        share: bool,
    },
    /// Show viewing stats and the streak calendar
    Stats,
    /// List recently viewed cards
    History,
    /// List favorites, or remove one by id
    Favorites {
        /// Id of the favorite to remove (e.g. 17 or quote_<id>)
        #[arg(long)]
        remove: Option<String>,
    },
    /// Toggle between the light and dark theme
    Theme,
    /// Draw a card and show its premium deep content (after the ad gate)
    Premium {
        #[arg(long, default_value = "all")]
        category: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(locale) = Locale::parse(&cli.lang) else {
        bail!("unsupported language '{}', expected ko or en", cli.lang);
    };

    let store: Arc<dyn StateStore> = if cli.ephemeral {
        Arc::new(MemoryStateStore::new())
    } else if let Some(dir) = &cli.data_dir {
        Arc::new(JsonStateStore::with_paths(HaruPaths::with_base(dir)))
    } else {
        Arc::new(JsonStateStore::new()?)
    };
    let provider = Arc::new(QuotableClient::new());

    let today = chrono::Local::now().date_naive();
    let mut session = AffirmationSession::start(store, provider, today).await;

    match cli.command {
        Commands::Draw {
            category,
            fav,
            share,
        } => {
            let filter = parse_filter(&category)?;
            commands::draw::run(&mut session, filter, fav, share, locale).await?;
        }
        Commands::Stats => commands::stats::run(&session, locale, today),
        Commands::History => commands::ledger::history(&session, locale),
        Commands::Favorites { remove } => {
            commands::ledger::favorites(&mut session, remove, locale).await?
        }
        Commands::Theme => commands::theme::run(&mut session).await,
        Commands::Premium { category } => {
            let filter = parse_filter(&category)?;
            commands::premium::run(&mut session, filter, locale).await?;
        }
    }

    Ok(())
}

fn parse_filter(value: &str) -> Result<CategoryFilter> {
    match CategoryFilter::parse(value) {
        Some(filter) => Ok(filter),
        None => bail!(
            "unknown category '{}', expected one of: all, self-love, motivation, gratitude, relationships, success, quote",
            value
        ),
    }
}
