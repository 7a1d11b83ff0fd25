use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::{fs, path::Path};

use crate::{
    model::{CSV_HEADER, WeatherDataset},
    region::Region,
    scrape::DaySource,
};

/// Fetch every day of the inclusive range in ascending order and write the
/// dataset to `<folder>/<filename>`, returning the filename.
///
/// Per-day fetch failures are absorbed by the source and show up as
/// empty-shell rows, so the output always has one row per requested day. An
/// inverted range (`start > end`) produces a header-only file. Folder
/// creation and file writing errors are fatal and propagate.
pub fn collect_range(
    source: &impl DaySource,
    start: NaiveDate,
    end: NaiveDate,
    region: Region,
    folder: &Path,
) -> Result<String> {
    let mut dataset = WeatherDataset::new();

    let mut cursor = start;
    while cursor <= end {
        let report = source.fetch_day(region, cursor);
        dataset.push(report.record);
        match cursor.succ_opt() {
            Some(next) => cursor = next,
            None => break, // end of the representable calendar
        }
    }

    fs::create_dir_all(folder)
        .with_context(|| format!("Failed to create destination folder: {}", folder.display()))?;

    let filename = output_filename(region, start, end);
    let path = folder.join(&filename);
    write_csv(&path, &dataset)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    Ok(filename)
}

/// Deterministic output filename: `Meteo_<region>_<start>_<end>.csv` with
/// dash-separated dates.
pub fn output_filename(region: Region, start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "Meteo_{}_{}_{}.csv",
        region,
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d"),
    )
}

/// One header row then one row per record, missing readings as empty fields.
/// The header is written explicitly so an empty dataset still yields it.
fn write_csv(path: &Path, dataset: &WeatherDataset) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(CSV_HEADER)?;
    for record in dataset {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
