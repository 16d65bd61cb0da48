use crate::dashboards::d100_sales_summary::api;
use crate::dashboards::d100_sales_summary::controller::SalesDashboardController;
use crate::shared::alert;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Upload form for the Accurate sales report (HTML).
///
/// Idle → Submitting → Idle. A successful import refreshes the dashboard
/// before the form becomes submittable again; failures surface as blocking
/// alerts and leave the dashboard untouched.
#[component]
pub fn UploadForm(controller: SalesDashboardController) -> impl IntoView {
    let (status, set_status) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_status.set(String::new());

        let Some(input) = file_input.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            alert("Silakan pilih file HTML dulu.");
            return;
        };

        set_submitting.set(true);
        spawn_local(async move {
            match api::upload_sales_html(&file).await {
                Ok(response) => {
                    set_status.set(
                        response
                            .message
                            .unwrap_or_else(|| "Berhasil diimport.".to_string()),
                    );
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                    // new data is on the server now; pull it before going idle
                    controller.refresh().await;
                }
                Err(err) => {
                    alert(&format!("Gagal upload: {}", err));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form id="upload-form" class="upload-form" on:submit=on_submit>
            <label class="upload-form__label" for="file-input">
                "Upload laporan penjualan Accurate (HTML)"
            </label>
            <input
                id="file-input"
                class="upload-form__input"
                type="file"
                accept=".html,.htm"
                node_ref=file_input
            />
            <button
                type="submit"
                class="button button--primary upload-form__submit"
                disabled=move || submitting.get()
            >
                "Upload & Import"
            </button>
            <Show when=move || submitting.get()>
                <Space gap=SpaceGap::Small>
                    <Spinner />
                    <span class="upload-form__progress">"Mengunggah..."</span>
                </Space>
            </Show>
            <span id="upload-status" class="upload-form__status">
                {move || status.get()}
            </span>
        </form>
    }
}
