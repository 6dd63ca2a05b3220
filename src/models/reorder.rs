use serde::{Deserialize, Serialize};

/// One ingredient that has to be reordered ("Nachbestellung").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderLine {
    pub ingredient: String,
    pub missing_amount: f64,
    pub unit: String,
    pub packaging: String,
    pub packaging_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reorder {
    #[serde(default)]
    pub event: Option<String>,
    pub lines: Vec<ReorderLine>,
}

impl Reorder {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of packages across all lines, saturating at `u64::MAX`.
    pub fn package_count(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |sum, l| sum.saturating_add(l.packaging_count))
    }
}
