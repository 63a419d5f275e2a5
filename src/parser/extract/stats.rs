use scraper::ElementRef;
use tracing::warn;

use crate::model::StatProfile;
use crate::parser::dom::{element_children, nth_text, rendered_text};
use crate::parser::layout::{content_after, main_stats, paragraph, stat_label};

/// Index of the substat priority among the text nodes of the substat paragraph.
const SUBSTAT_TEXT_INDEX: usize = 2;
const DISC_SLOTS: [u8; 3] = [4, 5, 6];

/// Main stats for discs 4/5/6 and the substat line, merged across all build variants.
pub fn extract(section: ElementRef, character: &str) -> StatProfile {
    let mut slots: [Vec<String>; 3] = Default::default();
    let mut substats = Vec::new();

    let groupings = main_stats().find_all(section);
    if groupings.is_empty() {
        warn!("{}: could not find main stats", character);
    }

    for (build, grouping) in groupings.into_iter().enumerate() {
        let mut boxes = element_children(grouping);
        for (disc, values) in DISC_SLOTS.iter().zip(slots.iter_mut()) {
            let label = boxes
                .next()
                .and_then(|slot| stat_label().find_first(slot))
                .map(|label| rendered_text(label).trim().to_string())
                .filter(|label| !label.is_empty());
            match label {
                Some(label) => values.push(label),
                None => warn!(
                    "{}: build #{}: could not find disc {} main stat",
                    character, build, disc
                ),
            }
        }

        let substat = content_after(grouping)
            .and_then(|line| paragraph().find_first(line))
            .and_then(|p| nth_text(p, SUBSTAT_TEXT_INDEX));
        match substat {
            Some(s) => substats.push(s),
            None => warn!("{}: build #{}: could not find substats", character, build),
        }
    }

    let [disc4, disc5, disc6] = slots;
    StatProfile::new(disc4, disc5, disc6, substats)
}
