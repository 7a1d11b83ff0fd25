use chrono::NaiveDate;
use clap::Parser;
use meteo_core::{HistoryPage, Region, collect_range};
use std::path::PathBuf;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "meteo",
    version,
    about = "Gather daily weather history for a region into a CSV file"
)]
pub struct Cli {
    /// First day of the range, YYYY/MM/DD.
    #[arg(short = 's', value_name = "START", value_parser = parse_day)]
    pub start: NaiveDate,

    /// Last day of the range (inclusive), YYYY/MM/DD.
    #[arg(short = 'e', value_name = "END", value_parser = parse_day)]
    pub end: NaiveDate,

    /// Destination folder for the CSV file, created if missing.
    #[arg(short = 'f', value_name = "FOLDER")]
    pub folder: PathBuf,
}

fn parse_day(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y/%m/%d")
        .map_err(|e| format!("expected a YYYY/MM/DD date: {e}"))
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        // Only one region is wired up; see the Region registry in meteo-core.
        let region = Region::Nice;

        println!(
            "Fetching data from {} to {} for region {region}",
            self.start.format("%Y/%m/%d"),
            self.end.format("%Y/%m/%d"),
        );

        let source = HistoryPage::new();
        let filename = collect_range(&source, self.start, self.end, region, &self.folder)?;
        println!("Data saved to {filename}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_required_flags() {
        let cli = Cli::try_parse_from([
            "meteo", "-s", "2024/01/01", "-e", "2024/01/03", "-f", "/tmp/out",
        ])
        .expect("valid arguments");

        assert_eq!(cli.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(cli.end, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!(cli.folder, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn missing_flag_is_an_error() {
        let err = Cli::try_parse_from(["meteo", "-s", "2024/01/01", "-e", "2024/01/03"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn rejects_dash_separated_dates() {
        let err = Cli::try_parse_from([
            "meteo", "-s", "2024-01-01", "-e", "2024/01/03", "-f", "/tmp/out",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn surrounding_whitespace_in_dates_is_accepted() {
        let cli = Cli::try_parse_from([
            "meteo", "-s", " 2024/01/01 ", "-e", "2024/01/03", "-f", "/tmp/out",
        ])
        .expect("valid arguments");
        assert_eq!(cli.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }
}
