use crate::models::{ListingStatus, PriceFrequency, Property};

/// Hand-picked sold properties that always lead the showcase
pub fn featured_sold() -> Vec<Property> {
    vec![
        Property {
            id: "sold-1".to_string(),
            title: "Adosado Reformado".to_string(),
            location: "Benidoleig, Alicante".to_string(),
            price: "€140,000".to_string(),
            beds: 3,
            baths: 2,
            size: "120 m²".to_string(),
            image: "https://fotos15.apinmo.com/1909/27341402/3-1.jpg".to_string(),
            property_type: "Townhouse".to_string(),
            date_listed: "2024-01-01".to_string(),
            lat: Some(38.7917),
            lng: Some(-0.0278),
            status: ListingStatus::Sold,
            price_freq: PriceFrequency::Sale,
        },
        Property {
            id: "sold-2".to_string(),
            title: "Casa de Pueblo con Encanto".to_string(),
            location: "Real de Gandía, Valencia".to_string(),
            price: "€164,900".to_string(),
            beds: 4,
            baths: 2,
            size: "180 m²".to_string(),
            image: "https://fotos15.apinmo.com/1909/23491575/15-1.jpg".to_string(),
            property_type: "House".to_string(),
            date_listed: "2024-02-01".to_string(),
            lat: Some(38.949),
            lng: Some(-0.190),
            status: ListingStatus::Sold,
            price_freq: PriceFrequency::Sale,
        },
        Property {
            id: "sold-3".to_string(),
            title: "Apartamento Costero".to_string(),
            location: "Playa de Bellreguard".to_string(),
            price: "€170,000".to_string(),
            beds: 3,
            baths: 2,
            size: "95 m²".to_string(),
            image: "https://fotos15.apinmo.com/1909/26037790/9-1.jpg".to_string(),
            property_type: "Apartment".to_string(),
            date_listed: "2024-03-01".to_string(),
            lat: Some(38.950),
            lng: Some(-0.150),
            status: ListingStatus::Sold,
            price_freq: PriceFrequency::Sale,
        },
        Property {
            id: "sold-4".to_string(),
            title: "Apartamento Familiar".to_string(),
            location: "Playa de Gandía".to_string(),
            price: "€215,000".to_string(),
            beds: 3,
            baths: 2,
            size: "105 m²".to_string(),
            image: "https://fotos15.apinmo.com/1909/25828355/10-1.jpg".to_string(),
            property_type: "Apartment".to_string(),
            date_listed: "2024-02-15".to_string(),
            lat: Some(39.000),
            lng: Some(-0.160),
            status: ListingStatus::Sold,
            price_freq: PriceFrequency::Sale,
        },
    ]
}
