//! Core library for the `meteo` CLI.
//!
//! This crate defines:
//! - The domain model (per-day weather records and datasets)
//! - The region registry (explicit region → history-page mapping)
//! - The day fetcher (blocking HTTP fetch + HTML table extraction)
//! - The range collector (sequential day loop + CSV serialization)
//!
//! It is used by `meteo-cli`, but can also be reused by other binaries or
//! services.

pub mod collect;
pub mod model;
pub mod region;
pub mod scrape;

pub use collect::{collect_range, output_filename};
pub use model::{DayReport, WeatherDataset, WeatherRecord};
pub use region::Region;
pub use scrape::{DaySource, FetchFailure, HistoryPage};
