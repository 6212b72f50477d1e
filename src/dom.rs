//! Parser-independent view of an HTML element.
//!
//! The extractor only needs descendant lookup by CSS selector, attribute
//! reads and text content, so that is all this trait exposes. The concrete
//! parser behind it is `scraper`; swapping it out only touches this file.

/// One element of a parsed HTML document.
pub trait DomNode: Sized {
    /// First descendant matching the CSS selector, if any.
    ///
    /// An invalid selector behaves like a selector that matches nothing.
    fn select_one(&self, selector: &str) -> Option<Self>;

    /// All descendants matching the CSS selector, in document order.
    fn select_all(&self, selector: &str) -> Vec<Self>;

    /// Value of an attribute on this element.
    fn attr(&self, name: &str) -> Option<&str>;

    /// Concatenated text content of this element and its descendants.
    fn text(&self) -> String;
}

impl<'a> DomNode for scraper::ElementRef<'a> {
    fn select_one(&self, selector: &str) -> Option<Self> {
        let selector = scraper::Selector::parse(selector).ok()?;
        self.select(&selector).next()
    }

    fn select_all(&self, selector: &str) -> Vec<Self> {
        let Ok(selector) = scraper::Selector::parse(selector) else {
            return Vec::new();
        };
        self.select(&selector).collect()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn text(&self) -> String {
        self.text().collect()
    }
}
