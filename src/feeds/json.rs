use crate::error::{FeedError, FeedResult};
use crate::feeds::normalize::{
    format_price, format_size, normalize_date, parse_count, parse_number, price_display,
    size_display,
};
use crate::feeds::traits::FeedSource;
use crate::feeds::types::FeedParams;
use crate::models::{ListingStatus, PriceFrequency, Property};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Keys under which a wrapped feed may hold its listing array
const LIST_KEYS: [&str; 3] = ["properties", "listings", "items"];

/// Listing feed served as a JSON document
pub struct JsonFeed {
    client: Client,
    params: FeedParams,
}

impl JsonFeed {
    pub fn new(params: FeedParams) -> FeedResult<Self> {
        let client = Client::builder()
            .timeout(params.timeout)
            .user_agent(params.user_agent.clone())
            .build()?;

        Ok(Self { client, params })
    }
}

#[async_trait]
impl FeedSource for JsonFeed {
    async fn fetch(&self) -> FeedResult<Vec<Property>> {
        debug!("Fetching JSON feed: {}", self.params.url);

        let response = self.client.get(&self.params.url).send().await?;

        if !response.status().is_success() {
            warn!("JSON feed returned status: {}", response.status());
            return Err(FeedError::Status(response.status()));
        }

        let body = response.text().await?;
        debug!("Downloaded {} bytes of JSON", body.len());

        let properties = parse_json_feed(&body, &self.params.currency)?;
        debug!("Parsed {} properties from JSON feed", properties.len());
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "json"
    }
}

/// Parses a JSON listing document into properties
///
/// Accepts a bare array or an object wrapping the array under one of
/// `properties`, `listings` or `items`. Records without an id are skipped.
pub fn parse_json_feed(body: &str, currency: &str) -> FeedResult<Vec<Property>> {
    let document: Value = serde_json::from_str(body)?;

    let records = match &document {
        Value::Array(records) => records,
        Value::Object(map) => LIST_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array))
            .ok_or_else(|| {
                FeedError::Parse(format!("no listing array under any of {:?}", LIST_KEYS))
            })?,
        other => {
            return Err(FeedError::Parse(format!(
                "expected an array or object, got {}",
                json_kind(other)
            )))
        }
    };

    let mut properties = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match record_to_property(record, currency) {
            Some(property) => properties.push(property),
            None => debug!("Skipping feed record {} without an id", index),
        }
    }

    Ok(properties)
}

/// Maps one feed record onto a [`Property`]; `None` when it has no id
pub(crate) fn record_to_property(record: &Value, currency: &str) -> Option<Property> {
    record.as_object()?;
    let id = text(record, &["id", "ref", "reference"])?;

    let location = text(record, &["location", "address"]).unwrap_or_else(|| {
        [text(record, &["town", "city"]), text(record, &["province"])]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ")
    });

    let price = match field(record, &["price"]) {
        Some(Value::Number(n)) => n
            .as_f64()
            .map(|amount| format_price(amount, currency))
            .unwrap_or_default(),
        Some(Value::String(s)) => price_display(s, currency),
        _ => String::new(),
    };

    let size = match field(record, &["size", "area", "surface"]) {
        Some(Value::Number(n)) => n.as_f64().map(format_size).unwrap_or_default(),
        Some(Value::String(s)) => size_display(s),
        _ => String::new(),
    };

    Some(Property {
        id,
        title: text(record, &["title", "name"]).unwrap_or_default(),
        location,
        price,
        beds: count(record, &["beds", "bedrooms"]),
        baths: count(record, &["baths", "bathrooms"]),
        size,
        image: text(record, &["image", "thumbnail"])
            .or_else(|| first_image(record))
            .unwrap_or_default(),
        property_type: text(record, &["type", "propertyType"]).unwrap_or_default(),
        date_listed: text(record, &["dateListed", "date", "listedAt"])
            .map(|raw| normalize_date(&raw))
            .unwrap_or_default(),
        lat: number(record, &["lat", "latitude"]),
        lng: number(record, &["lng", "lon", "longitude"]),
        status: text(record, &["status"])
            .map(|raw| ListingStatus::parse(&raw))
            .unwrap_or_default(),
        price_freq: text(record, &["priceFreq", "price_freq"])
            .map(|raw| PriceFrequency::parse(&raw))
            .unwrap_or_default(),
    })
}

/// First non-null value among `keys`
fn field<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !value.is_null())
}

fn text(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match record.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn number(record: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| match record.get(*key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    })
}

fn count(record: &Value, keys: &[&str]) -> u32 {
    keys.iter()
        .find_map(|key| match record.get(*key)? {
            Value::Number(n) => n
                .as_f64()
                .filter(|n| *n >= 0.0 && *n <= f64::from(u32::MAX))
                .map(|n| n as u32),
            Value::String(s) => parse_count(s),
            _ => None,
        })
        .unwrap_or(0)
}

fn first_image(record: &Value) -> Option<String> {
    match record.get("images")?.as_array()?.first()? {
        Value::String(url) => Some(url.clone()),
        entry => entry.get("url")?.as_str().map(str::to_string),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
