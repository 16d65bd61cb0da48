use crate::dashboards::SalesDashboardPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SalesDashboardPage />
    }
}
