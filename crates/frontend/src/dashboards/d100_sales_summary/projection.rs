//! Pure projections of a `SalesSummary` into chart specs and card texts.
//!
//! Nothing here touches the network or the DOM; the controller feeds the
//! results to the chart registry and the text signals.

use crate::shared::charts::{ChartSpec, Dataset};
use crate::shared::format::format_rupiah;
use contracts::dashboards::d100_sales_summary::{CompareEntry, SalesSummary, TopEntry};

/// The six chart widgets of the dashboard, keyed by their canvas ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    TopCustomers,
    PieCustomers,
    TopSalesmen,
    TopItems,
    SalesmanCompare,
    ItemCompare,
}

impl ChartSlot {
    pub fn mount_id(self) -> &'static str {
        match self {
            ChartSlot::TopCustomers => "chart-top-customers",
            ChartSlot::PieCustomers => "chart-pie-customers",
            ChartSlot::TopSalesmen => "chart-top-salesmen",
            ChartSlot::TopItems => "chart-top-items",
            ChartSlot::SalesmanCompare => "chart-salesman-compare",
            ChartSlot::ItemCompare => "chart-item-compare",
        }
    }
}

/// Texts shown outside the charts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesTexts {
    /// `None` when the summary carries no period; the page then keeps
    /// whatever it showed before
    pub periode: Option<String>,
    pub total_sales: String,
    pub customer_count: String,
    pub top_customer: String,
    pub overall_change: String,
}

/// Derive the chart spec for every slot.
///
/// Label/value order is taken from the document as-is: the server already
/// ranks the top-N sequences descending, and the top-customer card depends
/// on index 0 staying the maximum, so nothing here re-sorts.
pub fn project_charts(summary: &SalesSummary) -> Vec<(ChartSlot, ChartSpec)> {
    let (customer_labels, customer_values) = top_series(&summary.top_customers);
    let (salesman_labels, salesman_values) = top_series(&summary.top_salesmen);
    let (item_labels, item_values) = top_series(&summary.top_items);

    vec![
        (
            ChartSlot::TopCustomers,
            ChartSpec::bar(
                customer_labels.clone(),
                Dataset::labeled("Total Penjualan", customer_values.clone()),
            ),
        ),
        (
            ChartSlot::PieCustomers,
            // a second projection over the same source array
            ChartSpec::pie(customer_labels, Dataset::bare(customer_values)),
        ),
        (
            ChartSlot::TopSalesmen,
            ChartSpec::bar(
                salesman_labels,
                Dataset::labeled("Total Penjualan", salesman_values),
            ),
        ),
        (
            ChartSlot::TopItems,
            ChartSpec::bar(item_labels, Dataset::labeled("Total Penjualan", item_values)),
        ),
        (
            ChartSlot::SalesmanCompare,
            compare_chart(&summary.salesman_compare),
        ),
        (ChartSlot::ItemCompare, compare_chart(&summary.item_compare)),
    ]
}

/// Derive the card and analysis texts.
pub fn project_texts(summary: &SalesSummary) -> SalesTexts {
    let periode = match (&summary.period_start, &summary.period_end) {
        (Some(start), Some(end)) => Some(format!("Periode: {} s/d {}", start, end)),
        _ => None,
    };

    let top_customer = match summary.top_customers.first() {
        Some(top) => format!("{} ({})", top.name, format_rupiah(Some(top.total_sales))),
        None => "-".to_string(),
    };

    let oc = &summary.overall_change;
    let overall_change = format!(
        "Bulan ini: {}, Bulan lalu: {}, Perubahan: {} ({:.2}%)",
        format_rupiah(Some(oc.current_month_total)),
        format_rupiah(Some(oc.previous_month_total)),
        format_rupiah(Some(oc.change)),
        oc.change_percent,
    );

    SalesTexts {
        periode,
        total_sales: format_rupiah(Some(summary.total_sales)),
        customer_count: summary.customer_count.to_string(),
        top_customer,
        overall_change,
    }
}

fn top_series(entries: &[TopEntry]) -> (Vec<String>, Vec<f64>) {
    let labels = entries.iter().map(|e| e.name.clone()).collect();
    let values = entries.iter().map(|e| e.total_sales).collect();
    (labels, values)
}

fn compare_chart(entries: &[CompareEntry]) -> ChartSpec {
    let labels = entries.iter().map(|e| e.name.clone()).collect();
    let current = entries.iter().map(|e| e.current_month).collect();
    let previous = entries.iter().map(|e| e.previous_month).collect();

    ChartSpec::grouped_bar(
        labels,
        vec![
            Dataset::labeled("Bulan ini", current),
            Dataset::labeled("Bulan lalu", previous),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_sales_summary::OverallChange;

    fn summary_with_customers() -> SalesSummary {
        SalesSummary {
            top_customers: vec![
                TopEntry {
                    name: "Toko A".to_string(),
                    total_sales: 500000.0,
                },
                TopEntry {
                    name: "Toko B".to_string(),
                    total_sales: 300000.0,
                },
            ],
            ..Default::default()
        }
    }

    fn spec_for(charts: &[(ChartSlot, ChartSpec)], slot: ChartSlot) -> ChartSpec {
        charts
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, spec)| spec.clone())
            .expect("slot missing")
    }

    #[test]
    fn test_empty_summary_projects_empty_series_for_every_slot() {
        let charts = project_charts(&SalesSummary::default());

        assert_eq!(charts.len(), 6);
        for (_, spec) in &charts {
            assert!(spec.labels.is_empty());
            for dataset in &spec.datasets {
                assert!(dataset.values.is_empty());
            }
        }
    }

    #[test]
    fn test_bar_and_pie_share_the_customer_series() {
        let charts = project_charts(&summary_with_customers());

        let bar = spec_for(&charts, ChartSlot::TopCustomers);
        let pie = spec_for(&charts, ChartSlot::PieCustomers);

        let expected_labels = vec!["Toko A".to_string(), "Toko B".to_string()];
        let expected_values = vec![500000.0, 300000.0];

        assert_eq!(bar.labels, expected_labels);
        assert_eq!(bar.datasets[0].values, expected_values);
        assert_eq!(pie.labels, expected_labels);
        assert_eq!(pie.datasets[0].values, expected_values);
    }

    #[test]
    fn test_input_order_is_preserved_not_resorted() {
        // deliberately not descending: the projector must trust the server
        let summary = SalesSummary {
            top_items: vec![
                TopEntry {
                    name: "Paku".to_string(),
                    total_sales: 100.0,
                },
                TopEntry {
                    name: "Semen".to_string(),
                    total_sales: 900.0,
                },
            ],
            ..Default::default()
        };

        let charts = project_charts(&summary);
        let items = spec_for(&charts, ChartSlot::TopItems);

        assert_eq!(items.labels, vec!["Paku".to_string(), "Semen".to_string()]);
        assert_eq!(items.datasets[0].values, vec![100.0, 900.0]);
    }

    #[test]
    fn test_compare_series_stay_parallel_to_labels() {
        let summary = SalesSummary {
            salesman_compare: vec![
                CompareEntry {
                    name: "Budi".to_string(),
                    current_month: 120.0,
                    previous_month: 100.0,
                    change: 20.0,
                    change_percent: 20.0,
                },
                CompareEntry {
                    name: "Sari".to_string(),
                    current_month: 80.0,
                    previous_month: 90.0,
                    change: -10.0,
                    change_percent: -11.11,
                },
            ],
            ..Default::default()
        };

        let charts = project_charts(&summary);
        let compare = spec_for(&charts, ChartSlot::SalesmanCompare);

        assert_eq!(compare.labels, vec!["Budi".to_string(), "Sari".to_string()]);
        assert_eq!(compare.datasets.len(), 2);
        assert_eq!(compare.datasets[0].label.as_deref(), Some("Bulan ini"));
        assert_eq!(compare.datasets[0].values, vec![120.0, 80.0]);
        assert_eq!(compare.datasets[1].label.as_deref(), Some("Bulan lalu"));
        assert_eq!(compare.datasets[1].values, vec![100.0, 90.0]);
    }

    #[test]
    fn test_top_customer_card_text() {
        let texts = project_texts(&summary_with_customers());
        assert_eq!(texts.top_customer, "Toko A (Rp 500.000)");
    }

    #[test]
    fn test_top_customer_card_placeholder_when_empty() {
        let texts = project_texts(&SalesSummary::default());
        assert_eq!(texts.top_customer, "-");
    }

    #[test]
    fn test_periode_requires_both_dates() {
        let mut summary = SalesSummary::default();
        assert_eq!(project_texts(&summary).periode, None);

        summary.period_start = Some("2024-01-01".to_string());
        assert_eq!(project_texts(&summary).periode, None);

        summary.period_end = Some("2024-03-31".to_string());
        assert_eq!(
            project_texts(&summary).periode.as_deref(),
            Some("Periode: 2024-01-01 s/d 2024-03-31")
        );
    }

    #[test]
    fn test_overall_change_sentence() {
        let summary = SalesSummary {
            overall_change: OverallChange {
                current_month_total: 1000.0,
                previous_month_total: 800.0,
                change: 200.0,
                change_percent: 25.0,
            },
            ..Default::default()
        };

        let sentence = project_texts(&summary).overall_change;
        assert!(sentence.contains("Rp 1.000"));
        assert!(sentence.contains("Rp 800"));
        assert!(sentence.contains("Rp 200"));
        assert!(sentence.contains("25.00%"));
    }

    #[test]
    fn test_overall_change_defaults_to_zeroes_when_absent() {
        let sentence = project_texts(&SalesSummary::default()).overall_change;
        assert_eq!(
            sentence,
            "Bulan ini: Rp 0, Bulan lalu: Rp 0, Perubahan: Rp 0 (0.00%)"
        );
    }

    #[test]
    fn test_scalar_cards() {
        let summary = SalesSummary {
            total_sales: 800000.0,
            customer_count: 2,
            ..Default::default()
        };
        let texts = project_texts(&summary);
        assert_eq!(texts.total_sales, "Rp 800.000");
        assert_eq!(texts.customer_count, "2");
    }
}
