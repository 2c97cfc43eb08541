//! Product detail section.

use catalog_core::{format_rating, ProductDetail};

use super::html::escape;

/// Render the full detail view for a product.
pub fn render_product_detail(product: &ProductDetail) -> String {
    let compatibility: String = product
        .compatibility
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect();

    format!(
        r#"<div class="detail-image">
    <img src="{image}" alt="{name}">
</div>
<div class="detail-info">
    <h2>{name}</h2>
    <p class="price-large">{price}</p>
    <p class="description">{description}</p>
    <div class="specs">
        <h3>Specifications</h3>
        <ul>
            <li><strong>Category:</strong> {category}</li>
            <li><strong>Manufacturer:</strong> {manufacturer}</li>
            <li><strong>Part Number:</strong> {part_number}</li>
            <li><strong>Stock:</strong> {stock} units</li>
            <li><strong>Weight:</strong> {weight}</li>
            <li><strong>Dimensions:</strong> {dimensions}</li>
            <li><strong>Rating:</strong> {rating}</li>
        </ul>
    </div>
    <div class="compatibility">
        <h3>Compatibility</h3>
        <ul>{compatibility}</ul>
    </div>
</div>"#,
        image = escape(&product.image_url),
        name = escape(&product.name),
        price = escape(&product.price_display()),
        description = escape(&product.description),
        category = escape(&product.category),
        manufacturer = escape(&product.manufacturer),
        part_number = escape(&product.part_number),
        stock = product.stock_quantity,
        weight = escape(&product.weight),
        dimensions = escape(&product.dimensions),
        rating = format_rating(product.rating),
        compatibility = compatibility,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::ProductId;

    fn detail(compatibility: &[&str]) -> ProductDetail {
        ProductDetail {
            id: ProductId::new("42"),
            name: "Ceramic Brake Pads".to_string(),
            image_url: "/static/img/42.jpg".to_string(),
            price: 49.9,
            currency: "USD".to_string(),
            description: "Low-dust front pads".to_string(),
            category: "Brakes".to_string(),
            manufacturer: "StopCo".to_string(),
            part_number: "SC-4421".to_string(),
            stock_quantity: 12,
            weight: "1.2 kg".to_string(),
            dimensions: "15 x 6 x 2 cm".to_string(),
            rating: 4.5,
            compatibility: compatibility.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_renders_specifications() {
        let html = render_product_detail(&detail(&[]));
        assert!(html.contains("<h2>Ceramic Brake Pads</h2>"));
        assert!(html.contains(r#"<p class="price-large">USD 49.90</p>"#));
        assert!(html.contains(r#"<p class="description">Low-dust front pads</p>"#));
        assert!(html.contains("<li><strong>Category:</strong> Brakes</li>"));
        assert!(html.contains("<li><strong>Manufacturer:</strong> StopCo</li>"));
        assert!(html.contains("<li><strong>Part Number:</strong> SC-4421</li>"));
        assert!(html.contains("<li><strong>Stock:</strong> 12 units</li>"));
        assert!(html.contains("<li><strong>Weight:</strong> 1.2 kg</li>"));
        assert!(html.contains("<li><strong>Dimensions:</strong> 15 x 6 x 2 cm</li>"));
        assert!(html.contains("<li><strong>Rating:</strong> 4.5 / 5.0</li>"));
    }

    #[test]
    fn test_empty_compatibility_renders_empty_list() {
        let html = render_product_detail(&detail(&[]));
        assert!(html.contains("<h3>Compatibility</h3>\n        <ul></ul>"));
    }

    #[test]
    fn test_compatibility_in_order() {
        let html = render_product_detail(&detail(&["Civic 2016", "Accord 2018", "CR-V 2017"]));
        assert!(html.contains("<ul><li>Civic 2016</li><li>Accord 2018</li><li>CR-V 2017</li></ul>"));
    }

    #[test]
    fn test_escapes_fields() {
        let mut product = detail(&["<script>"]);
        product.description = "Fits \"most\" cars".to_string();
        let html = render_product_detail(&product);
        assert!(html.contains("<li>&lt;script&gt;</li>"));
        assert!(html.contains("Fits &quot;most&quot; cars"));
    }
}
