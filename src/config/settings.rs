use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub report: ReportSettings,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Global timeout for a single request, in seconds
    pub timeout_secs: u64,
    /// Page size sent as `per_page` when --limit is not given
    pub per_page: u32,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            per_page: 100,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub currency_symbol: String,
    pub output_dir: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            currency_symbol: "€".to_string(),
            output_dir: "reports".to_string(),
        }
    }
}
