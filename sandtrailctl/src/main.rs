//! `sandtrailctl`: browse the catalog, inspect an excursion and price a
//! booking against a live storefront.

mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use sandtrail_config::{ConfigLoader, logging::init_tracing};
use sandtrail_core::detail::DetailState;
use sandtrail_core::infra::HttpStorefront;
use sandtrail_core::storefront::{LoadStatus, Storefront};
use sandtrail_core::views::{DetailView, ListingView};
use sandtrail_model::SortKey;
use tracing::warn;

#[derive(Parser)]
#[command(name = "sandtrailctl", about = "Sandtrail storefront command-line client", version)]
struct Cli {
    /// Configuration file (TOML or JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Display prices in this currency instead of the configured one
    #[arg(long, global = true)]
    currency: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List excursions, optionally filtered and sorted
    List {
        /// Case-insensitive text matched against title, description and location
        #[arg(long)]
        search: Option<String>,
        /// Only excursions in this location
        #[arg(long)]
        location: Option<String>,
        /// rating | price-low | price-high
        #[arg(long, default_value = "rating")]
        sort: SortKey,
    },
    /// List the distinct destinations in the catalog
    Locations,
    /// Show one excursion
    Show {
        /// Numeric route id or global id
        id: String,
    },
    /// Price a booking and print the enquiry link
    Quote {
        /// Numeric route id or global id
        id: String,
        /// Booking date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, default_value_t = 2)]
        adults: i64,
        #[arg(long, default_value_t = 0)]
        children: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("warn");

    let cli = Cli::parse();
    let storefront = Arc::new(connect(cli.config)?);
    if let Some(currency) = &cli.currency {
        storefront.set_currency(currency);
    }
    let prices = storefront.prices();

    match cli.command {
        Command::List {
            search,
            location,
            sort,
        } => {
            let mut view = ListingView::new(Arc::clone(&storefront), location.as_deref());
            if let LoadStatus::Failed(reason) = view.mount().await {
                bail!("failed to load catalog: {reason}");
            }
            if let Some(search) = search {
                view.set_search(search);
            }
            view.set_sort(sort);

            for excursion in view.results().iter() {
                println!("{}", render::listing_row(excursion, &prices));
            }
            println!("{}", view.summary());
        }
        Command::Locations => {
            if let LoadStatus::Failed(reason) = storefront.load_catalog().await.status {
                bail!("failed to load catalog: {reason}");
            }
            for location in storefront.locations() {
                println!("{location}");
            }
        }
        Command::Show { id } => {
            let view = mount_detail(&storefront, &id).await?;
            let excursion = ready(&view, &id)?;
            print!("{}", render::detail(excursion, &prices));
        }
        Command::Quote {
            id,
            date,
            adults,
            children,
        } => {
            let mut view = mount_detail(&storefront, &id).await?;
            let draft = view.draft_mut();
            if let Some(date) = date {
                draft.set_date(date);
            }
            draft.set_adults(adults);
            draft.set_children(children);

            let excursion = Arc::clone(ready(&view, &id)?);
            let quote = view
                .quote()
                .ok_or_else(|| anyhow!("excursion {id} not found"))?;
            print!(
                "{}",
                render::quote(&excursion, view.draft().date(), &quote, &prices)
            );
            match view.enquiry() {
                Ok(enquiry) => println!("Enquire: {}", enquiry.url),
                Err(err) => warn!("enquiry link unavailable: {err}"),
            }
        }
    }

    Ok(())
}

fn connect(config_path: Option<PathBuf>) -> Result<Storefront> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let load = loader.load().context("failed to load configuration")?;
    for warning in load.warnings.iter() {
        match &warning.hint {
            Some(hint) => warn!("{} ({hint})", warning.message),
            None => warn!("{}", warning.message),
        }
    }

    let config = load.config;
    let endpoint = config.storefront.endpoint.clone().ok_or_else(|| {
        anyhow!("no storefront endpoint configured; set SANDTRAIL_STOREFRONT_URL")
    })?;
    let client = Arc::new(HttpStorefront::new(
        endpoint,
        config.storefront.access_token.clone(),
        config.storefront.timeout,
    )?);

    Ok(Storefront::new(
        client.clone(),
        client.clone(),
        client,
        config.storefront_settings(),
    ))
}

async fn mount_detail(storefront: &Arc<Storefront>, id: &str) -> Result<DetailView> {
    let mut view = DetailView::new(Arc::clone(storefront), id)?;
    view.mount().await;
    Ok(view)
}

fn ready<'a>(view: &'a DetailView, id: &str) -> Result<&'a Arc<sandtrail_model::Excursion>> {
    match view.state() {
        DetailState::Ready(excursion) => Ok(excursion),
        _ => bail!("excursion {id} not found"),
    }
}
