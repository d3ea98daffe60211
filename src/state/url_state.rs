//! URL state encoding/decoding for shareable URLs.
//!
//! Encodes the selected indicator, active date, and map center in the URL
//! query string so reloading restores the view and URLs can be shared.

use chrono::NaiveDate;

/// Parsed URL parameters.
pub struct UrlParams {
    pub indicator: Option<String>,
    pub date: Option<NaiveDate>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Parse URL query parameters from the current browser URL.
#[cfg(target_arch = "wasm32")]
pub fn parse_from_url() -> UrlParams {
    let mut params = UrlParams {
        indicator: None,
        date: None,
        lat: None,
        lon: None,
    };

    let Ok(search) = web_sys::window().expect("no window").location().search() else {
        return params;
    };

    let query = search.trim_start_matches('?');
    if query.is_empty() {
        return params;
    }

    for pair in query.split('&') {
        let mut kv = pair.splitn(2, '=');
        let key = kv.next().unwrap_or("");
        let value = kv.next().unwrap_or("");
        match key {
            "ind" => params.indicator = Some(value.to_string()),
            "date" => params.date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok(),
            "lat" => params.lat = value.parse().ok(),
            "lon" => params.lon = value.parse().ok(),
            _ => {}
        }
    }

    params
}

/// No-op stub for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn parse_from_url() -> UrlParams {
    UrlParams {
        indicator: None,
        date: None,
        lat: None,
        lon: None,
    }
}

/// Push current state to the URL query string using `replaceState`.
#[cfg(target_arch = "wasm32")]
pub fn push_to_url(indicator: &str, date: NaiveDate, lat: f64, lon: f64) {
    let query = format!(
        "?ind={}&date={}&lat={:.4}&lon={:.4}",
        indicator,
        date.format("%Y-%m-%d"),
        lat,
        lon
    );

    let window = web_sys::window().expect("no window");
    let history = window.history().expect("no history");
    let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&query));
}

/// No-op stub for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn push_to_url(_indicator: &str, _date: NaiveDate, _lat: f64, _lon: f64) {}
