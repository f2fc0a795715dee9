use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use sold_showcase::config::{self, Args};
use sold_showcase::feeds;
use sold_showcase::map::view::TILE_URL_TEMPLATE;
use sold_showcase::map::{markers, HeadlessMap, MapView};
use sold_showcase::page::{Msg, PageRuntime, PageState};
use sold_showcase::showcase::cards::EMPTY_CAROUSEL_PLACEHOLDER;
use sold_showcase::showcase::{featured_sold, sale_cards};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(config::log_filter()).init();

    let args = Args::parse();

    info!("🏠 Sold Showcase v{}", env!("CARGO_PKG_VERSION"));

    let mut page = PageRuntime::new(
        PageState::new(featured_sold()),
        HeadlessMap::new(args.map_width, args.map_height),
    );

    match args.feed_params() {
        Some(params) => {
            info!("Loading listings from {} ({:?})", params.url, params.format);
            let source = feeds::build_source(params).context("Failed to create feed client")?;
            page.load(source.as_ref()).await;
        }
        None => {
            info!("No feed configured, showing curated sales only");
            page.dispatch(Msg::PropertiesLoaded(Vec::new()));
        }
    }

    let working = page.state().working();
    info!("✅ Working set holds {} properties\n", working.len());

    let cards = sale_cards(working.properties());
    if cards.is_empty() {
        println!("{}", EMPTY_CAROUSEL_PLACEHOLDER);
    }
    for (i, card) in cards.iter().enumerate() {
        println!("{}. [{}] {} ({})", i + 1, card.badge.label, card.title, card.price);
        println!("   Zone: {}", card.zone);
        println!("   Location: {}", card.location);
        println!("   ID: {}", card.id);
        println!();
    }

    let viewport = page.map().viewport();
    info!(
        "🗺️  Map centered on ({:.4}, {:.4}) at zoom {}",
        viewport.center.lat, viewport.center.lng, viewport.zoom
    );

    let snapshot = json!({
        "revision": working.revision(),
        "properties": working.properties(),
        "viewport": viewport,
        "tiles": TILE_URL_TEMPLATE,
        "markers": markers(working.properties(), page.state().hovered_id()),
    });
    let snapshot = serde_json::to_string_pretty(&snapshot)?;
    tokio::fs::write(&args.output, snapshot)
        .await
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    info!("💾 Saved working set to {}", args.output.display());

    Ok(())
}
