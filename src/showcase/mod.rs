pub mod aggregator;
pub mod cards;
pub mod featured;
pub mod working_set;

pub use aggregator::{aggregate, duplicate_ids};
pub use cards::{sale_cards, SaleCard};
pub use featured::featured_sold;
pub use working_set::WorkingSet;
