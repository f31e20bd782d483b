use serde::{Deserialize, Serialize};

/// One row of a listing-page dataset. All fields are kept as raw strings;
/// `price_text` retains its currency symbol and `rating` is the style-class
/// token ("One".."Five") or empty when the card carries none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub detail_url: String,
    pub price_text: String,
    pub availability: String,
    pub rating: String,
    pub list_page_url: String,
}

impl BookRecord {
    /// CSV header, in column order.
    pub const FIELDS: [&'static str; 6] = [
        "title",
        "detail_url",
        "price_text",
        "availability",
        "rating",
        "list_page_url",
    ];
}
