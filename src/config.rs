// src/config.rs

/// GeoNames postal-code dump for the United States.
pub const GEONAMES_US_URL: &str = "https://download.geonames.org/export/zip/US.zip";

/// Member of the archive that holds the tab-separated records.
pub const GEONAMES_US_MEMBER: &str = "US.txt";

/// Positional layout of every line in the member. There is no header row.
/// The two `NA` placeholders are unused admin fields.
pub static LOCATION_COLUMNS: &[&str] = &[
    "Country Code",
    "Postal Code",
    "City",
    "State",
    "State Code",
    "Borough/County",
    "Borough/County Code",
    "NA",
    "NA",
    "lat",
    "long",
    "acc",
];

/// Only the leading columns are kept in the output artifact.
pub const INCLUDED_COLUMN_COUNT: usize = 7;

/// Where the source data lives and how its member is laid out.
///
/// Everything the fetch and transcode steps need is carried here rather than
/// read from module constants, so tests can point the pipeline at a local
/// server and a synthetic archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub url: String,
    pub member_name: String,
    pub delimiter: u8,
    /// Declared names for every positional field. Names may repeat.
    pub column_names: Vec<String>,
    /// Names to materialize; each must be declared exactly once.
    pub include_columns: Vec<String>,
}

impl SourceConfig {
    pub fn geonames_us() -> Self {
        let column_names: Vec<String> = LOCATION_COLUMNS.iter().map(|s| s.to_string()).collect();
        let include_columns = column_names[..INCLUDED_COLUMN_COUNT].to_vec();
        Self {
            url: GEONAMES_US_URL.to_string(),
            member_name: GEONAMES_US_MEMBER.to_string(),
            delimiter: b'\t',
            column_names,
            include_columns,
        }
    }

    /// Same layout, different archive location.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::geonames_us()
    }
}
