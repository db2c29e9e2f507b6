use crate::error::ImportError;
use log::debug;
use scraper::{ElementRef, Html, Selector};

mod page;

pub use page::PageExtractor;

/// A parsed page together with the URL it was fetched from.
pub struct ParsingContext {
    pub url: Option<String>,
    pub document: Html,
}

impl ParsingContext {
    /// Parse raw markup into a navigable document.
    ///
    /// Blank input and input without a single tag are rejected; everything
    /// else is accepted and left to the structural lookups.
    pub fn from_html(html: &str, url: Option<&str>) -> Result<Self, ImportError> {
        if html.trim().is_empty() {
            return Err(ImportError::MalformedMarkup("document is empty".to_string()));
        }
        if !html.contains('<') {
            return Err(ImportError::MalformedMarkup(
                "document contains no markup tags".to_string(),
            ));
        }

        let document = Html::parse_document(html);
        if !document.errors.is_empty() {
            debug!("Parsed document with {} recoverable errors", document.errors.len());
        }

        Ok(Self {
            url: url.map(str::to_string),
            document,
        })
    }
}

/// One way of reading a field from the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Text content of the first element matching the selector.
    Text(&'static str),
    /// Attribute value of the first element matching the selector, e.g. `<meta content>`.
    Attribute {
        selector: &'static str,
        attr: &'static str,
    },
}

impl Lookup {
    pub fn find(&self, root: ElementRef) -> Option<String> {
        let value = match *self {
            Lookup::Text(selector) => first_match(root, selector).map(element_text),
            Lookup::Attribute { selector, attr } => first_match(root, selector)
                .and_then(|el| el.value().attr(attr))
                .map(collapse_whitespace),
        };
        value.filter(|text| !text.is_empty())
    }
}

/// Evaluate lookups in order and return the first non-empty value.
pub fn find_first(root: ElementRef, lookups: &[Lookup]) -> Option<String> {
    lookups.iter().find_map(|lookup| {
        let found = lookup.find(root);
        if found.is_some() {
            debug!("Matched {:?}", lookup);
        }
        found
    })
}

/// A list region: a container holding a list whose items are the entries.
#[derive(Debug, Clone, Copy)]
pub struct ListRegion {
    pub containers: &'static [&'static str],
    pub lists: &'static [&'static str],
}

impl ListRegion {
    /// Whitespace-normalized text of every list item, empty items dropped.
    ///
    /// The first container that holds one of the list kinds wins. A page
    /// without the container or list yields no items.
    pub fn items(&self, root: ElementRef) -> Vec<String> {
        let Ok(item_selector) = Selector::parse("li") else {
            return Vec::new();
        };

        for container_selector in self.containers {
            let Some(container) = first_match(root, container_selector) else {
                continue;
            };
            for list_selector in self.lists {
                if let Some(list) = first_match(container, list_selector) {
                    debug!("Found list '{}' in '{}'", list_selector, container_selector);
                    return list
                        .select(&item_selector)
                        .map(element_text)
                        .filter(|text| !text.is_empty())
                        .collect();
                }
            }
        }

        Vec::new()
    }
}

fn first_match<'a>(root: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    root.select(&selector).next()
}

/// All descendant text with whitespace runs collapsed to single spaces.
pub fn element_text(element: ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<Vec<_>>().join(" "))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
