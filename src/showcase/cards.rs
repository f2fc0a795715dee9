use crate::models::{ListingStatus, Property};
use serde::Serialize;

/// Shown in place of the carousel while the working set is empty
pub const EMPTY_CAROUSEL_PLACEHOLDER: &str = "Loading properties...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Dark,
    Muted,
}

/// Status badge on a carousel card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

impl Badge {
    pub fn for_status(status: &ListingStatus) -> Self {
        match status {
            ListingStatus::Sold => Badge { label: "Sold", tone: BadgeTone::Dark },
            ListingStatus::Reserved => Badge { label: "Reserved", tone: BadgeTone::Muted },
            ListingStatus::Active(_) => Badge { label: "Exclusive", tone: BadgeTone::Dark },
        }
    }
}

/// Carousel card for one property of the working set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleCard {
    pub id: String,
    pub title: String,
    pub location: String,
    pub zone: String,
    pub price: String,
    pub image: String,
    pub badge: Badge,
    /// Diagonal "sold" stamp over the photo
    pub sold_overlay: bool,
}

impl From<&Property> for SaleCard {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id.clone(),
            title: property.title.clone(),
            location: property.location.clone(),
            zone: property.zone().to_string(),
            price: property.price.clone(),
            image: property.image.clone(),
            badge: Badge::for_status(&property.status),
            sold_overlay: property.status.is_sold(),
        }
    }
}

/// Cards in working-set order; records without coordinates are included
pub fn sale_cards(working: &[Property]) -> Vec<SaleCard> {
    working.iter().map(SaleCard::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_property;

    #[test]
    fn badge_follows_status() {
        let sold = SaleCard::from(&sample_property("s", ListingStatus::Sold));
        assert_eq!(sold.badge.label, "Sold");
        assert!(sold.sold_overlay);

        let reserved = SaleCard::from(&sample_property("r", ListingStatus::Reserved));
        assert_eq!(reserved.badge.tone, BadgeTone::Muted);
        assert!(!reserved.sold_overlay);

        let other = SaleCard::from(&sample_property("o", ListingStatus::parse("coming-soon")));
        assert_eq!(other.badge, Badge { label: "Exclusive", tone: BadgeTone::Dark });
    }

    #[test]
    fn unlocated_records_still_get_cards() {
        let property = sample_property("no-geo", ListingStatus::Sold);
        assert!(property.coordinates().is_none());

        let cards = sale_cards(&[property]);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].zone, "Gandía");
    }
}
