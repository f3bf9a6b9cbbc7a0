// SPDX-License-Identifier: GPL-3.0-or-later
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mbgraph::{
    Area, Artist, BrowseQuery, CdStub, Collection, Entity, EntityType, Event, Genre, Include,
    Instrument, Label, MusicBrainzClient, Place, Recording, Release, ReleaseGroup, SearchQuery,
    Series, Url, Work,
};
use mbgraph_config::{load as load_config, MusicBrainzConfig};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "mbgraph")]
#[command(version)]
#[command(about = "Query the MusicBrainz web service and print typed JSON")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch one entity by MBID
    Lookup {
        kind: EntityType,
        id: String,
        /// Sub-queries to embed (aliases, artist-credits, url-rels, ...)
        #[arg(long = "inc", value_delimiter = ',')]
        includes: Vec<Include>,
    },
    /// List entities linked to another entity
    Browse {
        kind: EntityType,
        /// Kind of the anchor entity
        #[arg(long)]
        by: EntityType,
        id: String,
        #[arg(long = "inc", value_delimiter = ',')]
        includes: Vec<Include>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },
    /// Run a search query
    Search {
        kind: EntityType,
        query: String,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long, default_value_t = 1)]
        pages: usize,
        /// Use the simplified query parser
        #[arg(long)]
        dismax: bool,
    },
    /// Decode a saved response body
    Decode { kind: EntityType, file: PathBuf },
}

/// Runs `$body` with `$t` bound to the entity type selected by `$kind`.
macro_rules! with_entity {
    ($kind:expr, |$t:ident| $body:expr) => {
        match $kind {
            EntityType::Area => {
                type $t = Area;
                $body
            }
            EntityType::Artist => {
                type $t = Artist;
                $body
            }
            EntityType::CdStub => {
                type $t = CdStub;
                $body
            }
            EntityType::Collection => {
                type $t = Collection;
                $body
            }
            EntityType::Event => {
                type $t = Event;
                $body
            }
            EntityType::Genre => {
                type $t = Genre;
                $body
            }
            EntityType::Instrument => {
                type $t = Instrument;
                $body
            }
            EntityType::Label => {
                type $t = Label;
                $body
            }
            EntityType::Place => {
                type $t = Place;
                $body
            }
            EntityType::Recording => {
                type $t = Recording;
                $body
            }
            EntityType::Release => {
                type $t = Release;
                $body
            }
            EntityType::ReleaseGroup => {
                type $t = ReleaseGroup;
                $body
            }
            EntityType::Series => {
                type $t = Series;
                $body
            }
            EntityType::Url => {
                type $t = Url;
                $body
            }
            EntityType::Work => {
                type $t = Work;
                $body
            }
        }
    };
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.telemetry.log_level);

    let page_size = config.musicbrainz.page_size;
    match cli.command {
        Command::Lookup { kind, id, includes } => {
            let client = build_client(&config.musicbrainz)?;
            with_entity!(kind, |T| lookup::<T>(&client, &id, &includes).await)
        }
        Command::Browse {
            kind,
            by,
            id,
            includes,
            limit,
            pages,
        } => {
            let client = build_client(&config.musicbrainz)?;
            let mut query = BrowseQuery::new(by, id);
            query.includes = includes;
            query.limit = limit.or(page_size);
            with_entity!(kind, |T| browse::<T>(&client, query, pages).await)
        }
        Command::Search {
            kind,
            query,
            limit,
            pages,
            dismax,
        } => {
            let client = build_client(&config.musicbrainz)?;
            let mut query = SearchQuery::new(query).dismax(dismax);
            query.limit = limit.or(page_size);
            with_entity!(kind, |T| search::<T>(&client, query, pages).await)
        }
        Command::Decode { kind, file } => {
            let body = std::fs::read(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            with_entity!(kind, |T| print_json(&mbgraph::decode::<T>(&body)?))
        }
    }
}

fn init_tracing(default_level: &str) {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn build_client(config: &MusicBrainzConfig) -> Result<MusicBrainzClient> {
    let mut builder = MusicBrainzClient::builder()
        .base_url(&config.base_url)
        .timeout(Duration::from_secs(config.timeout_secs))
        .rate_limit_interval(Duration::from_millis(config.rate_limit_interval_ms));
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }
    info!(target: "cli", base_url = %config.base_url, "using MusicBrainz web service");
    Ok(builder.build()?)
}

async fn lookup<T: Entity + Serialize>(
    client: &MusicBrainzClient,
    id: &str,
    includes: &[Include],
) -> Result<()> {
    let entity: T = client.lookup(id, includes).await?;
    print_json(&entity)
}

async fn browse<T: Entity + Serialize>(
    client: &MusicBrainzClient,
    query: BrowseQuery,
    pages: usize,
) -> Result<()> {
    let mut cursor = client.browse::<T>(query).await?;
    for page in 1..=pages.max(1) {
        print_json(cursor.page())?;
        if page == pages || !cursor.has_more() {
            break;
        }
        cursor.next_page_async().await?;
    }
    debug!(target: "cli", total = cursor.total_results(), "browse finished");
    Ok(())
}

async fn search<T: Entity + Serialize>(
    client: &MusicBrainzClient,
    query: SearchQuery,
    pages: usize,
) -> Result<()> {
    let mut cursor = client.search::<T>(query).await?;
    for page in 1..=pages.max(1) {
        print_json(cursor.page())?;
        if page == pages || !cursor.has_more() {
            break;
        }
        cursor.next_page_async().await?;
    }
    debug!(target: "cli", total = cursor.total_results(), "search finished");
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
