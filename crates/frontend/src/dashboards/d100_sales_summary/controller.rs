//! Refresh pipeline: fetch → deserialize → project → render.
//!
//! The fetch is the only I/O stage and the registry render the only
//! side-effecting one; everything between is pure and lives in
//! `projection`.

use super::api;
use super::projection::{project_charts, project_texts, ChartSlot};
use crate::shared::charts::{ChartBackend, ChartJsBackend, ChartRegistry, ChartSpec};
use leptos::prelude::*;

/// Write handles of the dashboard page, bundled so the refresh operation
/// can be passed around as one `Copy` value.
#[derive(Clone, Copy)]
pub struct SalesDashboardController {
    pub set_loading: WriteSignal<bool>,
    pub set_periode: WriteSignal<String>,
    pub set_total_sales: WriteSignal<String>,
    pub set_customer_count: WriteSignal<String>,
    pub set_top_customer: WriteSignal<String>,
    pub set_overall_change: WriteSignal<String>,
    pub registry: StoredValue<ChartRegistry<ChartJsBackend>, LocalStorage>,
}

impl SalesDashboardController {
    /// Reload the summary and replace every widget.
    ///
    /// Safe to invoke repeatedly: each slot ends up with exactly one live
    /// chart instance. On any failure the previous visuals stay intact and
    /// the error goes to the console log only.
    pub async fn refresh(self) {
        self.set_loading.set(true);
        let result = api::get_sales_summary().await;
        self.set_loading.set(false);

        let summary = match result {
            Ok(summary) => summary,
            Err(err) => {
                log::error!("Gagal ambil dashboard: {}", err);
                return;
            }
        };

        let texts = project_texts(&summary);
        if let Some(periode) = texts.periode {
            self.set_periode.set(periode);
        }
        self.set_total_sales.set(texts.total_sales);
        self.set_customer_count.set(texts.customer_count);
        self.set_top_customer.set(texts.top_customer);
        self.set_overall_change.set(texts.overall_change);

        let charts = project_charts(&summary);
        let mut outcome: Result<(), String> = Ok(());
        self.registry.update_value(|registry| {
            outcome = render_charts(registry, &charts);
        });
        if let Err(err) = outcome {
            log::error!("Gagal render dashboard: {}", err);
        }
    }
}

/// Render stage: drive the registry for every slot.
///
/// The first failing slot aborts the rest; slots rendered before it keep
/// their fresh instance, untouched slots keep their previous one.
pub fn render_charts<B: ChartBackend>(
    registry: &mut ChartRegistry<B>,
    charts: &[(ChartSlot, ChartSpec)],
) -> Result<(), String> {
    for (slot, spec) in charts {
        registry.render(slot.mount_id(), spec)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_sales_summary::{SalesSummary, TopEntry};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Counters {
        created: usize,
        destroyed: usize,
    }

    struct CountingBackend {
        counters: Rc<RefCell<Counters>>,
    }

    impl ChartBackend for CountingBackend {
        type Handle = usize;

        fn create(&self, _mount_id: &str, _spec: &ChartSpec) -> Result<usize, String> {
            let mut counters = self.counters.borrow_mut();
            counters.created += 1;
            Ok(counters.created)
        }

        fn destroy(&self, _handle: usize) {
            self.counters.borrow_mut().destroyed += 1;
        }
    }

    fn summary() -> SalesSummary {
        SalesSummary {
            top_customers: vec![TopEntry {
                name: "Toko A".to_string(),
                total_sales: 500000.0,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_refreshing_twice_leaves_one_instance_per_slot() {
        let counters = Rc::new(RefCell::new(Counters::default()));
        let mut registry = ChartRegistry::new(CountingBackend {
            counters: counters.clone(),
        });

        render_charts(&mut registry, &project_charts(&summary())).unwrap();
        assert_eq!(counters.borrow().created, 6);
        assert_eq!(counters.borrow().destroyed, 0);

        render_charts(&mut registry, &project_charts(&summary())).unwrap();
        // every instance of the first pass was destroyed before its
        // replacement was created
        assert_eq!(counters.borrow().created, 12);
        assert_eq!(counters.borrow().destroyed, 6);
        assert_eq!(registry.live_count(), 6);
    }

    #[test]
    fn test_empty_summary_renders_all_slots() {
        let counters = Rc::new(RefCell::new(Counters::default()));
        let mut registry = ChartRegistry::new(CountingBackend {
            counters: counters.clone(),
        });

        render_charts(&mut registry, &project_charts(&SalesSummary::default())).unwrap();
        assert_eq!(registry.live_count(), 6);
    }
}
