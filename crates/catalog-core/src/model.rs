//! Catalog view models decoded from API responses.

use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::ProductId;
use crate::money::format_price;

/// Product card data from the paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    pub price: f64,
    pub currency: String,
}

impl ProductSummary {
    /// Price formatted as `{currency} {price:.2}`.
    pub fn price_display(&self) -> String {
        format_price(&self.currency, self.price)
    }
}

/// Full product record for the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    pub price: f64,
    pub currency: String,
    pub description: String,
    pub category: String,
    pub manufacturer: String,
    pub part_number: String,
    pub stock_quantity: u32,
    #[serde(deserialize_with = "scalar_text")]
    pub weight: String,
    #[serde(deserialize_with = "scalar_text")]
    pub dimensions: String,
    pub rating: f64,
    #[serde(default)]
    pub compatibility: Vec<String>,
}

impl ProductDetail {
    /// Price formatted as `{currency} {price:.2}`.
    pub fn price_display(&self) -> String {
        format_price(&self.currency, self.price)
    }
}

/// Decode a display field the backend may send as a string or a number.
fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    })
}

/// One page of the product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    pub products: Vec<ProductSummary>,
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_products: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PageResult {
    /// Check if pagination controls should be shown.
    pub fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }

    /// Check if this is the first page.
    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    /// Check if this is the last page.
    pub fn is_last_page(&self) -> bool {
        self.current_page == self.total_pages
    }
}
