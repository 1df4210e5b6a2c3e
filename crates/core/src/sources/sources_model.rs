//! ETF source catalog.

use serde::{Deserialize, Serialize};

/// One ETF holdings page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EtfSource {
    /// Short routing key, e.g. `botz`
    pub slug: String,
    /// Display label, e.g. `BOTZ (Global X Robotics & AI ETF)`
    pub label: String,
    pub url: String,
}

impl EtfSource {
    pub fn new(slug: impl Into<String>, label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Ordered list of ETF sources. Order decides first-seen names when
/// aggregating.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceCatalog {
    sources: Vec<EtfSource>,
}

impl SourceCatalog {
    pub fn new(sources: Vec<EtfSource>) -> Self {
        Self { sources }
    }

    /// The top AI ETFs tracked by the dashboard.
    pub fn default_ai_etfs() -> Self {
        let holdings_url = |ticker: &str| format!("https://stockanalysis.com/etf/{ticker}/holdings/");
        Self::new(vec![
            EtfSource::new("botz", "BOTZ (Global X Robotics & AI ETF)", holdings_url("botz")),
            EtfSource::new(
                "aiq",
                "AIQ (Global X Artificial Intelligence & Technology ETF)",
                holdings_url("aiq"),
            ),
            EtfSource::new(
                "arty",
                "ARTY (Global X Artificial Intelligence & Tech)",
                holdings_url("arty"),
            ),
            EtfSource::new("arkf", "ARKF (ARK Fintech Innovation ETF)", holdings_url("arkf")),
            EtfSource::new("robt", "ROBT (First Trust Robotics & AI ETF)", holdings_url("robt")),
        ])
    }

    pub fn sources(&self) -> &[EtfSource] {
        &self.sources
    }

    /// Case-insensitive lookup by slug.
    pub fn find(&self, slug: &str) -> Option<&EtfSource> {
        self.sources
            .iter()
            .find(|s| s.slug.eq_ignore_ascii_case(slug.trim()))
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
