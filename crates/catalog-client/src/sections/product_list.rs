//! Product list section - one card per product.

use catalog_core::{ProductSummary, RoutePattern};

use super::html::escape;

/// Render the product cards in input order.
///
/// `detail_route` builds each card's "View Details" link.
pub fn render_product_list(products: &[ProductSummary], detail_route: &RoutePattern) -> String {
    products
        .iter()
        .map(|p| render_product_card(p, detail_route))
        .collect()
}

fn render_product_card(product: &ProductSummary, detail_route: &RoutePattern) -> String {
    format!(
        r#"<div class="product-card" data-product-id="{id}">
    <img src="{image}" alt="{name}" class="product-image">
    <div class="product-info">
        <h3>{name}</h3>
        <p class="price">{price}</p>
        <a href="{href}" class="btn">View Details</a>
    </div>
</div>"#,
        id = escape(product.id.as_str()),
        image = escape(&product.image_url),
        name = escape(&product.name),
        price = escape(&product.price_display()),
        href = escape(&detail_route.path_for(&product.id)),
    )
}
