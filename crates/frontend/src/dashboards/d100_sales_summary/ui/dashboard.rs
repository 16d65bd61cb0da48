use crate::dashboards::d100_sales_summary::controller::SalesDashboardController;
use crate::dashboards::d100_sales_summary::ui::upload::UploadForm;
use crate::shared::charts::{ChartJsBackend, ChartRegistry};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Sales dashboard page: period line, KPI cards, six chart panels, the
/// month-over-month analysis line and the report upload form.
#[component]
pub fn SalesDashboardPage() -> impl IntoView {
    let (loading, set_loading) = signal(false);
    let (periode, set_periode) = signal("Periode: -".to_string());
    let (total_sales, set_total_sales) = signal("Rp 0".to_string());
    let (customer_count, set_customer_count) = signal("0".to_string());
    let (top_customer, set_top_customer) = signal("-".to_string());
    let (overall_change, set_overall_change) = signal(String::new());

    // Chart instances wrap JS handles and are not Send; keep them local.
    let registry = StoredValue::new_local(ChartRegistry::new(ChartJsBackend));

    let controller = SalesDashboardController {
        set_loading,
        set_periode,
        set_total_sales,
        set_customer_count,
        set_top_customer,
        set_overall_change,
        registry,
    };

    // First load, once the canvases are in the document.
    Effect::new(move |_| {
        spawn_local(async move {
            controller.refresh().await;
        });
    });

    view! {
        <div class="sales-dashboard">
            <header class="sales-dashboard__header">
                <h1 class="sales-dashboard__title">"Dashboard Penjualan"</h1>
                <p id="periode-text" class="sales-dashboard__periode">
                    {move || periode.get()}
                </p>
                {move || {
                    if loading.get() {
                        view! {
                            <div class="sales-dashboard__loading">
                                <span>"Memuat data dashboard..."</span>
                            </div>
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </header>

            <section class="sales-dashboard__cards">
                <div class="stat-card">
                    <div class="stat-card__label">"Total Penjualan"</div>
                    <div id="card-total-sales" class="stat-card__value">
                        {move || total_sales.get()}
                    </div>
                </div>
                <div class="stat-card">
                    <div class="stat-card__label">"Jumlah Customer"</div>
                    <div id="card-customer-count" class="stat-card__value">
                        {move || customer_count.get()}
                    </div>
                </div>
                <div class="stat-card">
                    <div class="stat-card__label">"Top Customer"</div>
                    <div id="card-top-customer" class="stat-card__value">
                        {move || top_customer.get()}
                    </div>
                </div>
            </section>

            <section class="sales-dashboard__charts">
                <div class="chart-panel">
                    <h3 class="chart-panel__title">"Top 10 Customer"</h3>
                    <canvas id="chart-top-customers"></canvas>
                </div>
                <div class="chart-panel">
                    <h3 class="chart-panel__title">"Komposisi Customer"</h3>
                    <canvas id="chart-pie-customers"></canvas>
                </div>
                <div class="chart-panel">
                    <h3 class="chart-panel__title">"Top 10 Salesman"</h3>
                    <canvas id="chart-top-salesmen"></canvas>
                </div>
                <div class="chart-panel">
                    <h3 class="chart-panel__title">"Top 10 Barang"</h3>
                    <canvas id="chart-top-items"></canvas>
                </div>
                <div class="chart-panel">
                    <h3 class="chart-panel__title">"Salesman: Bulan Ini vs Bulan Lalu"</h3>
                    <canvas id="chart-salesman-compare"></canvas>
                </div>
                <div class="chart-panel">
                    <h3 class="chart-panel__title">"Barang: Bulan Ini vs Bulan Lalu"</h3>
                    <canvas id="chart-item-compare"></canvas>
                </div>
            </section>

            <section class="sales-dashboard__analysis">
                <h3 class="sales-dashboard__analysis-title">"Analisa Bulan Ini vs Bulan Lalu"</h3>
                <p id="overall-change-text" class="sales-dashboard__analysis-text">
                    {move || overall_change.get()}
                </p>
            </section>

            <UploadForm controller=controller />
        </div>
    }
}
