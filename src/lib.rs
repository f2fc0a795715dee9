//! Data core of the agency's recent-sales showcase.
//!
//! Fetches a listing feed, merges its sold listings with the curated
//! featured sales and frames the sales map on the resulting working set.

pub mod config;
pub mod error;
pub mod feeds;
pub mod map;
pub mod models;
pub mod page;
pub mod showcase;
