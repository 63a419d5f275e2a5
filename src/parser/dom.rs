//! Small query layer over the parsed HTML tree.
//!
//! Prydwen's markup is matched on tag name, a required subset of classes and,
//! for section headers, a substring of the rendered text. CSS selectors cannot
//! express the text part, so all lookups go through [`Matcher`].

use scraper::ElementRef;

/// Predicate over an element: tag name, required classes, optional text substring.
#[derive(Debug, Clone)]
pub struct Matcher {
    tag: String,
    classes: Vec<String>,
    text: Option<String>,
}

impl Matcher {
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            text: None,
        }
    }

    /// Require `class` to be present (other classes are allowed).
    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Require the rendered text (all descendant text nodes) to contain `text`.
    pub fn containing(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn matches(&self, el: ElementRef) -> bool {
        if el.value().name() != self.tag {
            return false;
        }
        if !self.classes.is_empty() {
            let attr = el.value().attr("class").unwrap_or("");
            if !self
                .classes
                .iter()
                .all(|c| attr.split_whitespace().any(|k| k == c))
            {
                return false;
            }
        }
        match &self.text {
            Some(t) => rendered_text(el).contains(t.as_str()),
            None => true,
        }
    }

    /// First matching descendant of `root` in document order (`root` itself excluded).
    pub fn find_first<'a>(&self, root: ElementRef<'a>) -> Option<ElementRef<'a>> {
        root.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|el| self.matches(*el))
    }

    /// All matching descendants of `root` in document order.
    pub fn find_all<'a>(&self, root: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        root.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|el| self.matches(*el))
            .collect()
    }
}

pub fn rendered_text(el: ElementRef) -> String {
    el.text().collect::<String>()
}

/// First non-blank text node under `el`, trimmed.
pub fn first_text(el: ElementRef) -> Option<String> {
    el.text()
        .map(str::trim)
        .find(|t| !t.is_empty())
        .map(str::to_string)
}

/// The `n`th text node under `el` (whitespace-only nodes count), trimmed.
pub fn nth_text(el: ElementRef, n: usize) -> Option<String> {
    el.text()
        .nth(n)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Following sibling element, skipping text and comment nodes.
pub fn next_element_sibling<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

pub fn element_children<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}

/// First token of the `class` attribute.
pub fn first_class<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    el.value().attr("class")?.split_whitespace().next()
}
