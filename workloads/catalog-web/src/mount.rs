//! Page bootstrap: wire flows to the containers present on the page.

use std::rc::Rc;

use anyhow::{anyhow, Context};
use catalog_client::sections::PAGE_ATTR;
use catalog_client::{DetailFlow, ListFlow};
use catalog_core::CatalogConfig;
use catalog_data::{ApiClient, ProductApi};
use catalog_observability::StructuredLogger;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event};

use crate::bootstrap::{parse_page_attr, resolve_config, CONFIG_SCRIPT_ID};
use crate::console::ConsoleSink;
use crate::dom::ElementContainer;
use crate::fetch::BrowserTransport;

/// Mount every flow whose container exists on the current page.
pub fn mount_page() -> anyhow::Result<()> {
    let window = web_sys::window().context("no window available")?;
    let document = window.document().context("no document available")?;
    let path = window
        .location()
        .pathname()
        .map_err(|e| anyhow!("cannot read location: {e:?}"))?;

    let script = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content());
    let (config, config_error) = resolve_config(script.as_deref());

    let logger = StructuredLogger::new()
        .with_sink(ConsoleSink)
        .with_min_level(config.log_level)
        .with_format(config.log_format)
        .with_route(path.clone());

    if let Some(e) = config_error {
        logger
            .warn_builder("Ignoring invalid catalog config")
            .field("error", e.to_string())
            .emit();
    }

    if let Some(list) = document.get_element_by_id(&config.list_container) {
        mount_list(&document, list, &config, &logger)?;
    }

    if let Some(detail) = document.get_element_by_id(&config.detail_container) {
        mount_detail(detail, path, &config, &logger)?;
    }

    Ok(())
}

fn api_client(config: &CatalogConfig) -> ApiClient<BrowserTransport> {
    ApiClient::new(BrowserTransport).with_base_url(config.api_base.clone())
}

fn mount_list(
    document: &Document,
    list: Element,
    config: &CatalogConfig,
    logger: &StructuredLogger,
) -> anyhow::Result<()> {
    let pagination = document.get_element_by_id(&config.pagination_container);

    let mut flow = ListFlow::new(api_client(config), ElementContainer::new(list), config)?
        .with_logger(logger.clone());
    if let Some(el) = &pagination {
        flow = flow.with_pagination(ElementContainer::new(el.clone()));
    }
    let flow = Rc::new(flow);

    if let Some(el) = pagination {
        listen_for_page_clicks(&el, flow.clone())?;
    }

    spawn_local(async move {
        flow.load_first().await;
    });
    Ok(())
}

/// One delegated listener on the pagination container; buttons are
/// re-rendered on every load, so per-button handlers would be lost.
fn listen_for_page_clicks<A>(container: &Element, flow: Rc<ListFlow<A>>) -> anyhow::Result<()>
where
    A: ProductApi + 'static,
{
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(page) = clicked_page(&event) else {
            return;
        };
        let flow = flow.clone();
        spawn_local(async move {
            flow.load(page).await;
        });
    });

    container
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("cannot attach pagination listener: {e:?}"))?;
    // The listener lives as long as the page.
    handler.forget();
    Ok(())
}

fn clicked_page(event: &Event) -> Option<u32> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest(&format!("button[{PAGE_ATTR}]")).ok()??;
    if button.has_attribute("disabled") {
        return None;
    }
    parse_page_attr(&button.get_attribute(PAGE_ATTR)?)
}

fn mount_detail(
    container: Element,
    path: String,
    config: &CatalogConfig,
    logger: &StructuredLogger,
) -> anyhow::Result<()> {
    let flow = DetailFlow::new(api_client(config), ElementContainer::new(container), config)?
        .with_logger(logger.clone());

    spawn_local(async move {
        flow.load_path(&path).await;
    });
    Ok(())
}
