use serde::Serialize;

/// Column names of the CSV output, in serialization order.
///
/// `precipitation` sits between `windSpeed` and `humidity`, matching the
/// extraction precedence of the source page. The struct fields of
/// [`WeatherRecord`] must stay in sync with this header.
pub const CSV_HEADER: [&str; 10] = [
    "maxTemperature",
    "minTemperature",
    "windSpeed",
    "precipitation",
    "humidity",
    "visibility",
    "cloudCover",
    "dayLength",
    "region",
    "day",
];

/// One day's published observations for a single region.
///
/// All weather readings are free text exactly as published (units embedded,
/// nothing normalized). `None` means the reading was absent from the page or
/// the fetch for that day failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherRecord {
    pub max_temperature: Option<String>,
    pub min_temperature: Option<String>,
    pub wind_speed: Option<String>,
    pub precipitation: Option<String>,
    pub humidity: Option<String>,
    pub visibility: Option<String>,
    pub cloud_cover: Option<String>,
    pub day_length: Option<String>,
    pub region: String,
    pub day: String,
}

impl WeatherRecord {
    /// A record with only `region` and `day` populated and every reading
    /// missing. This is both the starting point of a parse and the shape a
    /// failed day degrades to.
    pub fn shell(region: &str, day: &str) -> Self {
        Self {
            max_temperature: None,
            min_temperature: None,
            wind_speed: None,
            precipitation: None,
            humidity: None,
            visibility: None,
            cloud_cover: None,
            day_length: None,
            region: region.to_owned(),
            day: day.to_owned(),
        }
    }
}

/// Ordered per-day records for one range request, ascending calendar order,
/// one entry per requested day whether or not the fetch succeeded.
pub type WeatherDataset = Vec<WeatherRecord>;

/// Outcome of fetching one day: the record is always present, `failure`
/// explains why it is degraded (all readings missing) when it is.
#[derive(Debug)]
pub struct DayReport {
    pub record: WeatherRecord,
    pub failure: Option<crate::scrape::FetchFailure>,
}
