use crate::error::{FeedError, FeedResult};
use crate::feeds::normalize::{normalize_date, parse_count, parse_number, price_display, size_display};
use crate::feeds::traits::FeedSource;
use crate::feeds::types::FeedParams;
use crate::models::{ListingStatus, PriceFrequency, Property};
use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// Listing feed served as an HTML page of property cards
///
/// Each card is an element carrying `data-property-id`; coordinates, status
/// and the other machine-readable fields live in `data-*` attributes.
pub struct HtmlFeed {
    client: Client,
    params: FeedParams,
}

impl HtmlFeed {
    pub fn new(params: FeedParams) -> FeedResult<Self> {
        let client = Client::builder()
            .timeout(params.timeout)
            .user_agent(params.user_agent.clone())
            .build()?;

        Ok(Self { client, params })
    }
}

#[async_trait]
impl FeedSource for HtmlFeed {
    async fn fetch(&self) -> FeedResult<Vec<Property>> {
        debug!("Fetching HTML feed: {}", self.params.url);

        let response = self.client.get(&self.params.url).send().await?;

        if !response.status().is_success() {
            warn!("HTML feed returned status: {}", response.status());
            return Err(FeedError::Status(response.status()));
        }

        let html = response.text().await?;
        debug!("Downloaded {} bytes of HTML", html.len());

        let properties = parse_html_feed(&html, &self.params.currency)?;
        if properties.is_empty() {
            warn!("No property cards found in HTML feed");
        } else {
            debug!("Parsed {} properties from HTML feed", properties.len());
        }
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "html"
    }
}

struct CardSelectors {
    card: Selector,
    title: Selector,
    location: Selector,
    price: Selector,
    beds: Selector,
    baths: Selector,
    size: Selector,
    image: Selector,
}

impl CardSelectors {
    fn new() -> FeedResult<Self> {
        Ok(Self {
            card: selector("[data-property-id]")?,
            title: selector(".title")?,
            location: selector(".location")?,
            price: selector(".price")?,
            beds: selector(".beds")?,
            baths: selector(".baths")?,
            size: selector(".size")?,
            image: selector("img[src]")?,
        })
    }
}

fn selector(css: &str) -> FeedResult<Selector> {
    Selector::parse(css).map_err(|e| FeedError::Parse(format!("bad selector {css:?}: {e:?}")))
}

/// Extracts one property per `[data-property-id]` card, in document order
pub fn parse_html_feed(html: &str, currency: &str) -> FeedResult<Vec<Property>> {
    let selectors = CardSelectors::new()?;
    let document = Html::parse_document(html);

    let properties = document
        .select(&selectors.card)
        .filter_map(|card| card_to_property(card, &selectors, currency))
        .collect();

    Ok(properties)
}

fn card_to_property(card: ElementRef, selectors: &CardSelectors, currency: &str) -> Option<Property> {
    let attr = |name: &str| {
        card.value()
            .attr(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    };

    let id = attr("data-property-id")?.to_string();

    Some(Property {
        title: inner_text(card, &selectors.title).unwrap_or_default(),
        location: inner_text(card, &selectors.location).unwrap_or_default(),
        price: inner_text(card, &selectors.price)
            .map(|raw| price_display(&raw, currency))
            .unwrap_or_default(),
        beds: inner_text(card, &selectors.beds)
            .and_then(|raw| parse_count(&raw))
            .unwrap_or(0),
        baths: inner_text(card, &selectors.baths)
            .and_then(|raw| parse_count(&raw))
            .unwrap_or(0),
        size: inner_text(card, &selectors.size)
            .map(|raw| size_display(&raw))
            .unwrap_or_default(),
        image: card
            .select(&selectors.image)
            .next()
            .and_then(|img| img.value().attr("src"))
            .unwrap_or_default()
            .to_string(),
        property_type: attr("data-type").unwrap_or_default().to_string(),
        date_listed: attr("data-listed").map(normalize_date).unwrap_or_default(),
        lat: attr("data-lat").and_then(parse_number),
        lng: attr("data-lng").and_then(parse_number),
        status: attr("data-status").map(ListingStatus::parse).unwrap_or_default(),
        price_freq: attr("data-price-freq")
            .map(PriceFrequency::parse)
            .unwrap_or_default(),
        id,
    })
}

/// Whitespace-collapsed text of the first match inside `card`
fn inner_text(card: ElementRef, selector: &Selector) -> Option<String> {
    let element = card.select(selector).next()?;
    let text = element.text().collect::<Vec<_>>().join(" ");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
