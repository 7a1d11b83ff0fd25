use std::convert::TryFrom;

/// Regions with a wired-up weather-history page.
///
/// The region → base-URL mapping is explicit so adding a region means adding
/// a variant and its locator here; nothing else in the crate hard-codes a
/// URL. Only `Nice` is wired up today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Nice,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Nice => "nice",
        }
    }

    /// Base URL of the region's daily-history pages. Day pages live at
    /// `<base>/<YYYY>/<MM>/<DD>/`.
    pub fn base_url(&self) -> &'static str {
        match self {
            Region::Nice => {
                "https://www.historique-meteo.net/france/provence-alpes-cote-d-azur/nice"
            }
        }
    }

    pub const fn all() -> &'static [Region] {
        &[Region::Nice]
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Region {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "nice" => Ok(Region::Nice),
            _ => Err(anyhow::anyhow!(
                "Unknown region '{value}'. Supported regions: nice."
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_as_str_roundtrip() {
        for region in Region::all() {
            let s = region.as_str();
            let parsed = Region::try_from(s).expect("roundtrip should succeed");
            assert_eq!(*region, parsed);
        }
    }

    #[test]
    fn unknown_region_error() {
        let err = Region::try_from("atlantis").unwrap_err();
        assert!(err.to_string().contains("Unknown region"));
    }

    #[test]
    fn nice_base_url_has_no_trailing_slash() {
        let url = Region::Nice.base_url();
        assert!(url.starts_with("https://www.historique-meteo.net/"));
        assert!(!url.ends_with('/'));
    }
}
