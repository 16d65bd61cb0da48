use serde::{Deserialize, Serialize};

/// Aggregated sales summary for the D100 dashboard.
///
/// Every field is optional on the wire: a fresh database produces an empty
/// document and older import runs may omit whole sections. Absence is
/// normalized here, at the deserialization boundary, so consumers never see
/// a missing array or scalar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesSummary {
    /// First invoice date in the imported data, "YYYY-MM-DD"
    #[serde(default)]
    pub period_start: Option<String>,
    /// Last invoice date in the imported data, "YYYY-MM-DD"
    #[serde(default)]
    pub period_end: Option<String>,
    /// Total sales amount over the whole period
    #[serde(default)]
    pub total_sales: f64,
    /// Number of distinct customers
    #[serde(default)]
    pub customer_count: u64,

    /// Customers ranked descending by total sales
    #[serde(default)]
    pub top_customers: Vec<TopEntry>,
    /// Salesmen ranked descending by total sales
    #[serde(default)]
    pub top_salesmen: Vec<TopEntry>,
    /// Items ranked descending by total sales
    #[serde(default)]
    pub top_items: Vec<TopEntry>,

    /// Per-salesman current vs previous month comparison
    #[serde(default)]
    pub salesman_compare: Vec<CompareEntry>,
    /// Per-item current vs previous month comparison
    #[serde(default)]
    pub item_compare: Vec<CompareEntry>,

    /// Month-over-month totals for the whole business
    #[serde(default)]
    pub overall_change: OverallChange,
}

/// One row of a top-N ranking (customer, salesman or item).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopEntry {
    pub name: String,
    pub total_sales: f64,
}

/// One row of a current-vs-previous-month comparison.
///
/// `change` and `change_percent` are computed and sent by the server; the
/// dashboard charts only plot the two month values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareEntry {
    pub name: String,
    pub current_month: f64,
    pub previous_month: f64,
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub change_percent: f64,
}

/// Month-over-month change of the overall sales total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverallChange {
    #[serde(default)]
    pub current_month_total: f64,
    #[serde(default)]
    pub previous_month_total: f64,
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub change_percent: f64,
}

/// Response of the sales HTML import endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Human-readable import result, e.g. "Berhasil diimport."
    #[serde(default)]
    pub message: Option<String>,
}
