use crate::dom::DomNode;
use crate::record::{Availability, BookRecord};

const FALLBACK_TITLE: &str = "Unknown Title";
const FALLBACK_PRICE_TEXT: &str = "£0.00";

/// Map a star-rating word from the markup to its numeric value.
///
/// Anything outside the One..Five vocabulary (including "Zero") is 0.
pub fn rating_from_word(word: &str) -> u8 {
    match word {
        "One" => 1,
        "Two" => 2,
        "Three" => 3,
        "Four" => 4,
        "Five" => 5,
        _ => 0,
    }
}

/// Parse a price string like "£51.77".
///
/// The site sometimes leaks a stray "Â" encoding artifact in front of the
/// pound sign; both are stripped before parsing. Malformed remainders
/// parse to 0.0 rather than failing.
pub fn parse_price(text: &str) -> f64 {
    text.trim()
        .trim_start_matches('Â')
        .trim_start_matches('£')
        .parse()
        .unwrap_or(0.0)
}

/// Extract one [`BookRecord`] from a `article.product_pod` fragment.
///
/// Pure and infallible: each of the five field rules is independent and
/// has a defined fallback, so malformed markup degrades field by field
/// instead of dropping the record.
///
/// `base_url` must end with a slash; the record URL is the fragment's
/// relative link resolved against `{base_url}catalogue/` with any leading
/// `../` segments stripped.
pub fn extract_book<E: DomNode>(fragment: &E, base_url: &str) -> BookRecord {
    let title_link = fragment.select_one("h3 > a");

    let title = title_link
        .as_ref()
        .and_then(|link| link.attr("title"))
        .unwrap_or(FALLBACK_TITLE)
        .to_owned();

    let price_text = fragment
        .select_one("p.price_color")
        .map(|el| el.text())
        .unwrap_or_else(|| FALLBACK_PRICE_TEXT.to_owned());
    let price = parse_price(&price_text);

    // Class attribute carries two tokens, e.g. "star-rating Three"; the
    // second is the rating word. A lone marker token means no rating.
    let rating = fragment
        .select_one("p.star-rating")
        .map(|el| {
            el.attr("class")
                .and_then(|classes| classes.split_whitespace().nth(1))
                .map_or(0, rating_from_word)
        })
        .unwrap_or(0);

    let availability = if fragment.select_one("p.instock").is_some() {
        Availability::InStock
    } else {
        Availability::OutOfStock
    };

    let mut href = title_link
        .as_ref()
        .and_then(|link| link.attr("href"))
        .unwrap_or("");
    while let Some(rest) = href.strip_prefix("../") {
        href = rest;
    }
    let url = format!("{base_url}catalogue/{href}");

    BookRecord {
        title,
        price,
        rating,
        availability,
        url,
    }
}
