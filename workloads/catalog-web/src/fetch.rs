//! `window.fetch` transport.

use async_trait::async_trait;
use catalog_data::{FetchError, HttpResponse, HttpTransport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// HTTP transport backed by the browser's `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let window = web_sys::window()
            .ok_or_else(|| FetchError::Transport("no window available".to_string()))?;

        let value = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(js_error)?;
        let response: Response = value
            .dyn_into()
            .map_err(|_| FetchError::Transport("fetch did not resolve to a Response".to_string()))?;

        let status = response.status();
        let buffer = JsFuture::from(response.array_buffer().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        let body = js_sys::Uint8Array::new(&buffer).to_vec();

        Ok(HttpResponse::new(status, body))
    }
}

fn js_error(value: JsValue) -> FetchError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    FetchError::Transport(message)
}
