//! Where things live on a Prydwen character page.
//!
//! The site never wraps a section header and its body in a common container:
//! the body is whatever element follows the header. The same "content comes
//! next" rule holds for a 4-piece entry and its 2-piece list, and for a main
//! stats grouping and its substat line. Every such convention is declared here.

use scraper::ElementRef;

use super::dom::{next_element_sibling, Matcher};
use crate::error::ExtractError;

/// A header recognised by marker text, whose content is the next sibling element.
#[derive(Debug, Clone, Copy)]
pub struct ContentBlock {
    pub name: &'static str,
    pub marker: &'static str,
}

pub const DRIVE_DISC_SETS: ContentBlock = ContentBlock {
    name: "Drive Discs",
    marker: "Best Disk Drives Sets",
};

pub const DRIVE_DISC_STATS: ContentBlock = ContentBlock {
    name: "Stats",
    marker: "Best Disk Drives Stats",
};

impl ContentBlock {
    /// Header divs are tagged with the character's affinity so only the matching variant is picked.
    pub fn header(&self, affinity: &str) -> Matcher {
        Matcher::tag("div")
            .class("content-header")
            .class(affinity)
            .containing(self.marker)
    }

    /// The content element following this block's header.
    pub fn locate<'a>(
        &self,
        root: ElementRef<'a>,
        affinity: &str,
    ) -> Result<ElementRef<'a>, ExtractError> {
        self.header(affinity)
            .find_first(root)
            .and_then(content_after)
            .ok_or(ExtractError::SectionNotFound(self.name))
    }
}

/// Element holding the content for `anchor`.
pub fn content_after(anchor: ElementRef) -> Option<ElementRef> {
    next_element_sibling(anchor)
}

pub fn character_card() -> Matcher {
    Matcher::tag("div").class("avatar-card").class("card")
}

pub fn character_top() -> Matcher {
    Matcher::tag("div").class("character-top")
}

pub fn character_name() -> Matcher {
    Matcher::tag("strong")
}

pub fn four_piece_entry(affinity: &str) -> Matcher {
    Matcher::tag("div").class("single-item").class(affinity)
}

pub fn four_piece_name() -> Matcher {
    Matcher::tag("span").class("zzz-weapon-name").class("rarity-S")
}

pub fn two_piece_list() -> Matcher {
    Matcher::tag("ul").class("small-sets")
}

pub fn main_stats() -> Matcher {
    Matcher::tag("div").class("main-stats")
}

pub fn stat_label() -> Matcher {
    Matcher::tag("div").class("list-stats")
}

pub fn paragraph() -> Matcher {
    Matcher::tag("p")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn locate_returns_following_element() {
        let doc = Html::parse_document(
            r#"<div class="content-header ice">Best Disk Drives Stats</div>
               <div class="stats-body">body</div>"#,
        );
        let body = DRIVE_DISC_STATS.locate(doc.root_element(), "ice").unwrap();
        assert_eq!(body.value().attr("class"), Some("stats-body"));
    }

    #[test]
    fn header_without_content_is_missing() {
        let doc = Html::parse_document(
            r#"<div><div class="content-header ice">Best Disk Drives Sets</div></div>"#,
        );
        assert_eq!(
            DRIVE_DISC_SETS.locate(doc.root_element(), "ice").unwrap_err(),
            ExtractError::SectionNotFound("Drive Discs")
        );
    }

    #[test]
    fn other_affinity_header_is_ignored() {
        let doc = Html::parse_document(
            r#"<div class="content-header fire">Best Disk Drives Sets</div><div>fire</div>"#,
        );
        assert!(DRIVE_DISC_SETS.locate(doc.root_element(), "ice").is_err());
    }
}
