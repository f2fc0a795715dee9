use crate::models::Property;
use std::collections::HashMap;

/// Builds the working set: every featured record, then the sold fetched ones
///
/// Featured records are kept whatever their status. Source order is
/// preserved inside both groups and ids are not de-duplicated.
pub fn aggregate(featured: &[Property], fetched: Vec<Property>) -> Vec<Property> {
    let mut working = Vec::with_capacity(featured.len() + fetched.len());
    working.extend_from_slice(featured);
    working.extend(fetched.into_iter().filter(|p| p.status.is_sold()));
    working
}

/// Ids that appear more than once, in order of first appearance
pub fn duplicate_ids(working: &[Property]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = Vec::new();

    for property in working {
        let count = seen.entry(property.id.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            duplicates.push(property.id.clone());
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{sample_property, ListingStatus};
    use crate::showcase::featured::featured_sold;

    fn ids(properties: &[Property]) -> Vec<&str> {
        properties.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn appends_only_sold_fetched_records() {
        let fetched = vec![
            sample_property("A", ListingStatus::Sold),
            sample_property("B", ListingStatus::parse("active")),
            sample_property("C", ListingStatus::Reserved),
        ];

        let working = aggregate(&featured_sold(), fetched);

        assert_eq!(working.len(), 5);
        assert_eq!(ids(&working[..4]), ["sold-1", "sold-2", "sold-3", "sold-4"]);
        assert_eq!(ids(&working[4..]), ["A"]);
    }

    #[test]
    fn keeps_every_featured_and_sold_record_in_order() {
        let fetched = vec![
            sample_property("x1", ListingStatus::Sold),
            sample_property("x2", ListingStatus::parse("let")),
            sample_property("x3", ListingStatus::Sold),
            sample_property("x4", ListingStatus::Sold),
        ];
        let featured = vec![
            sample_property("f1", ListingStatus::Sold),
            sample_property("f2", ListingStatus::Reserved),
        ];

        let working = aggregate(&featured, fetched);
        assert_eq!(ids(&working), ["f1", "f2", "x1", "x3", "x4"]);
    }

    #[test]
    fn empty_feed_leaves_only_featured() {
        let working = aggregate(&featured_sold(), Vec::new());
        assert_eq!(working, featured_sold());
    }

    #[test]
    fn does_not_deduplicate_ids() {
        let fetched = vec![sample_property("sold-2", ListingStatus::Sold)];
        let working = aggregate(&featured_sold(), fetched);

        assert_eq!(working.len(), 5);
        assert_eq!(working.iter().filter(|p| p.id == "sold-2").count(), 2);
        assert_eq!(duplicate_ids(&working), ["sold-2"]);
    }

    #[test]
    fn no_duplicates_reported_for_unique_ids() {
        assert!(duplicate_ids(&featured_sold()).is_empty());
    }
}
