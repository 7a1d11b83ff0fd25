use chrono::NaiveDate;
use log::{info, warn};
use scraper::{ElementRef, Html, Selector};
use std::fmt::Debug;
use thiserror::Error;

use crate::{
    model::{DayReport, WeatherRecord},
    region::Region,
};

/// Why one day's fetch produced a degraded record. Every variant downgrades
/// to the same empty-shell record at the CLI level; the distinction exists
/// for callers and tests.
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// Transport failure, timeout, non-success status or an unreadable body.
    /// These are deliberately not told apart.
    #[error("request for {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The page parsed but carries no daily statistics table.
    #[error("page has no daily statistics table")]
    MissingTable,

    /// A statistics row had a label but no value column. Partially extracted
    /// readings are discarded.
    #[error("statistics row is missing its value column")]
    RowIndexing,
}

/// Anything that can produce one day's weather record. Never fails past its
/// boundary: every call yields exactly one record, populated or degraded.
pub trait DaySource: Debug {
    fn fetch_day(&self, region: Region, day: NaiveDate) -> DayReport;
}

/// Live source backed by the region's public weather-history pages.
#[derive(Debug, Clone, Default)]
pub struct HistoryPage {
    http: reqwest::blocking::Client,
}

impl HistoryPage {
    pub fn new() -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
        }
    }
}

impl DaySource for HistoryPage {
    fn fetch_day(&self, region: Region, day: NaiveDate) -> DayReport {
        let day_path = day.format("%Y/%m/%d").to_string();
        let url = format!("{}/{}/", region.base_url(), day_path);
        info!("Fetching URL: {url}");

        let body = self
            .http
            .get(&url)
            .send()
            .and_then(|res| res.error_for_status())
            .and_then(|res| res.text());

        let body = match body {
            Ok(body) => body,
            Err(source) => {
                warn!("Fetch failed for region {region} on day {day_path}: {source}");
                return DayReport {
                    record: WeatherRecord::shell(region.as_str(), &day_path),
                    failure: Some(FetchFailure::Http { url, source }),
                };
            }
        };

        let report = parse_day_page(&body, region, &day_path);
        if let Some(failure) = &report.failure {
            warn!("Parse failed for region {region} on day {day_path}: {failure}");
        }
        report
    }
}

/// Extract the daily readings from one history page.
///
/// The statistics live in the single `table.table` element. Each useful row
/// has the French reading label in its first cell and the published value in
/// its fourth; rows with fewer than three cells and rows with unknown labels
/// are skipped. `region` and `day` are stamped on the record regardless of
/// outcome.
pub fn parse_day_page(html: &str, region: Region, day: &str) -> DayReport {
    let doc = Html::parse_document(html);
    let table = selector("table.table");
    let tr = selector("tr");
    let td = selector("td");

    let mut record = WeatherRecord::shell(region.as_str(), day);

    let Some(stats) = doc.select(&table).next() else {
        return DayReport {
            record,
            failure: Some(FetchFailure::MissingTable),
        };
    };

    for row in stats.select(&tr) {
        let cells: Vec<ElementRef> = row.select(&td).collect();
        if cells.len() < 3 {
            continue;
        }
        let Some(value_cell) = cells.get(3) else {
            return DayReport {
                record: WeatherRecord::shell(region.as_str(), day),
                failure: Some(FetchFailure::RowIndexing),
            };
        };

        let label = cell_text(&cells[0]);
        let value = cell_text(value_cell);
        assign_reading(&mut record, &label, value);
    }

    DayReport {
        record,
        failure: None,
    }
}

/// First matching label wins; the order below is the precedence order.
fn assign_reading(record: &mut WeatherRecord, label: &str, value: String) {
    if label.contains("Température maximale") {
        record.max_temperature = Some(value);
    } else if label.contains("Température minimale") {
        record.min_temperature = Some(value);
    } else if label.contains("Vitesse du vent") {
        record.wind_speed = Some(value);
    } else if label.contains("Précipitations") {
        record.precipitation = Some(value);
    } else if label.contains("Humidité") {
        record.humidity = Some(value);
    } else if label.contains("Visibilité") {
        record.visibility = Some(value);
    } else if label.contains("Couverture nuageuse") {
        record.cloud_cover = Some(value);
    } else if label.contains("Durée du jour") {
        record.day_length = Some(value);
    }
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_owned()
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}
