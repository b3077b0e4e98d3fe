use contracts::domain::car::{Car, CarDto};
use contracts::shared::pagination::{PageQuery, Paginated};
use gloo_net::http::Request;

use crate::shared::api_utils::{self, api_url};
use crate::shared::session::SessionService;

/// Bulk upload size cap
pub const MAX_UPLOAD_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

pub async fn fetch_cars(query: PageQuery) -> Result<Paginated<Car>, String> {
    api_utils::get_json(&format!("/cars?{}", query.to_query_string())).await
}

/// Total fleet size, read cheaply with limit=1
pub async fn fetch_total_cars() -> Result<usize, String> {
    let query = PageQuery { limit: 1, ..PageQuery::default() };
    let page: Paginated<Car> =
        api_utils::get_json(&format!("/cars?{}", query.to_query_string())).await?;
    Ok(page.total)
}

pub async fn fetch_car(id: i64) -> Result<Car, String> {
    api_utils::get_json(&format!("/cars/{}", id)).await
}

pub async fn create_car(dto: &CarDto) -> Result<(), String> {
    api_utils::post_json_no_response("/cars", dto).await
}

pub async fn update_car(dto: &CarDto) -> Result<(), String> {
    let id = dto.id.ok_or("Car id missing for update")?;
    api_utils::put_json(&format!("/cars/{}", id), dto).await
}

pub async fn delete_car(id: i64) -> Result<(), String> {
    api_utils::delete(&format!("/cars/{}", id)).await
}

/// Upload a filled-in `.xlsx` inventory sheet. Size and extension are
/// checked client-side before any network traffic.
pub async fn upload_cars_xlsx(file: web_sys::File) -> Result<(), String> {
    if file.size() > MAX_UPLOAD_BYTES {
        return Err("too_large".to_string());
    }
    if !file.name().to_lowercase().ends_with(".xlsx") {
        return Err("wrong_type".to_string());
    }

    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| format!("{e:?}"))?;

    let mut builder = Request::post(&api_url("/cars/bulk-upload"));
    if let Some(token) = SessionService::local().auth_token() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let response = builder
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Upload failed: {}", response.status()));
    }
    Ok(())
}

/// Start a browser download of the upload template
pub fn download_template() -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("{e:?}"))?
        .dyn_into()
        .map_err(|e| format!("{e:?}"))?;
    anchor.set_href(&api_url("/cars/template"));
    anchor.set_download("cars-template.xlsx");
    anchor.click();
    Ok(())
}
