use serde::{Deserialize, Serialize};
use std::fmt;

/// Sale status of a listing
///
/// Anything the feed sends that is not `sold` or `reserved` is treated as an
/// active listing. The trimmed tag is kept as sent so it can still be shown;
/// tags compare case-insensitively. A blank tag becomes `active`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ListingStatus {
    Sold,
    Reserved,
    Active(String),
}

impl ListingStatus {
    pub fn parse(raw: &str) -> Self {
        let tag = raw.trim();
        if tag.eq_ignore_ascii_case("sold") {
            ListingStatus::Sold
        } else if tag.eq_ignore_ascii_case("reserved") {
            ListingStatus::Reserved
        } else if tag.is_empty() {
            ListingStatus::default()
        } else {
            ListingStatus::Active(tag.to_string())
        }
    }

    pub fn is_sold(&self) -> bool {
        matches!(self, ListingStatus::Sold)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ListingStatus::Sold => "sold",
            ListingStatus::Reserved => "reserved",
            ListingStatus::Active(tag) => tag,
        }
    }
}

impl Default for ListingStatus {
    fn default() -> Self {
        ListingStatus::Active("active".to_string())
    }
}

impl PartialEq for ListingStatus {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ListingStatus::Sold, ListingStatus::Sold) => true,
            (ListingStatus::Reserved, ListingStatus::Reserved) => true,
            (ListingStatus::Active(a), ListingStatus::Active(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        }
    }
}

impl Eq for ListingStatus {}

impl From<String> for ListingStatus {
    fn from(raw: String) -> Self {
        ListingStatus::parse(&raw)
    }
}

impl From<ListingStatus> for String {
    fn from(status: ListingStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sale vs. rental cadence of the advertised price
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PriceFrequency {
    #[default]
    Sale,
    Month,
    Week,
    Other(String),
}

impl PriceFrequency {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "" | "sale" => PriceFrequency::Sale,
            "month" | "monthly" => PriceFrequency::Month,
            "week" | "weekly" => PriceFrequency::Week,
            other => PriceFrequency::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PriceFrequency::Sale => "sale",
            PriceFrequency::Month => "month",
            PriceFrequency::Week => "week",
            PriceFrequency::Other(tag) => tag,
        }
    }
}

impl From<String> for PriceFrequency {
    fn from(raw: String) -> Self {
        PriceFrequency::parse(&raw)
    }
}

impl From<PriceFrequency> for String {
    fn from(freq: PriceFrequency) -> Self {
        freq.as_str().to_string()
    }
}

/// Geographic point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components finite and inside the WGS84 ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Normalized listing record shared by the carousel and the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub location: String,
    /// Display string, currency already applied
    pub price: String,
    pub beds: u32,
    pub baths: u32,
    /// Display string, e.g. "120 m²"
    pub size: String,
    pub image: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub date_listed: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub status: ListingStatus,
    pub price_freq: PriceFrequency,
}

impl Property {
    /// First comma-delimited segment of the location
    pub fn zone(&self) -> &str {
        self.location.split(',').next().unwrap_or_default().trim()
    }

    /// Map position, only when both coordinates are usable
    pub fn coordinates(&self) -> Option<LatLng> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)).filter(LatLng::is_valid),
            _ => None,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_property(id: &str, status: ListingStatus) -> Property {
    Property {
        id: id.to_string(),
        title: format!("Listing {id}"),
        location: "Gandía, Valencia".to_string(),
        price: "€100,000".to_string(),
        beds: 2,
        baths: 1,
        size: "80 m²".to_string(),
        image: format!("https://img.example.com/{id}.jpg"),
        property_type: "Apartment".to_string(),
        date_listed: "2024-05-01".to_string(),
        lat: None,
        lng: None,
        status,
        price_freq: PriceFrequency::Sale,
    }
}
