use crate::shared::api_utils::api_url;
use contracts::dashboards::d100_sales_summary::{SalesSummary, UploadResponse};
use gloo_net::http::Request;

/// Получить агрегированную сводку продаж
///
/// On a non-success status the error carries the response body so the
/// caller can log it.
pub async fn get_sales_summary() -> Result<SalesSummary, String> {
    let url = api_url("/api/dashboard/sales");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(format!("HTTP {}: {}", response.status(), body));
    }

    let data: SalesSummary = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Upload an Accurate sales report (HTML) for server-side import.
///
/// The file travels as the multipart field `file`; the browser sets the
/// multipart boundary itself. On a non-success status the error carries the
/// response body so the caller can show it to the user.
pub async fn upload_sales_html(file: &web_sys::File) -> Result<UploadResponse, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("FormData error: {:?}", e))?;
    form.append_with_blob("file", file)
        .map_err(|e| format!("FormData error: {:?}", e))?;

    let url = api_url("/api/upload/sales-html");

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| format!("Request failed: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(if body.trim().is_empty() {
            format!("HTTP {}", response.status())
        } else {
            body
        });
    }

    let data: UploadResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
