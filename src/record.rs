use serde::Serialize;

/// Whether the listing carried the in-stock marker.
///
/// The site only ever shows the two states; there is no backorder or
/// partial-stock variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Availability {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

/// One scraped book listing.
///
/// Every field is always populated: extraction substitutes a documented
/// default for anything missing from the markup, so a record is never
/// partially absent. Serialization order matches the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Rating")]
    pub rating: u8,
    #[serde(rename = "Availability")]
    pub availability: Availability,
    #[serde(rename = "URL")]
    pub url: String,
}
