use std::collections::BTreeMap;

use scraper::ElementRef;
use tracing::{debug, warn};

use super::identity::Identity;
use crate::error::ExtractError;
use crate::model::DriveDiscOption;
use crate::parser::dom::{element_children, first_text, rendered_text};
use crate::parser::layout::{
    content_after, four_piece_entry, four_piece_name, paragraph, two_piece_list,
};
use crate::parser::overrides;

const RECOMMENDED_MARKER: &str = "(Recommended)";

/// Every 4-piece entry in the drive disc section, keyed by its position among
/// the entries. Entries that cannot be read leave a gap in the keys.
pub fn extract(section: ElementRef, identity: &Identity) -> BTreeMap<usize, DriveDiscOption> {
    let mut options = BTreeMap::new();

    for (i, entry) in four_piece_entry(&identity.affinity)
        .find_all(section)
        .into_iter()
        .enumerate()
    {
        match extract_option(entry, identity) {
            Ok(option) => {
                options.insert(i, option);
            }
            Err(e) => warn!("{}: drive disc #{}: {}", identity.name, i, e),
        }
    }

    if options.is_empty() {
        warn!("{}: no drive disc sets extracted", identity.name);
    }
    options
}

fn extract_option(entry: ElementRef, identity: &Identity) -> Result<DriveDiscOption, ExtractError> {
    let four_piece_set = four_piece_name()
        .find_first(entry)
        .and_then(first_text)
        .ok_or_else(|| ExtractError::ElementNotFound("4pc set name".into()))?;

    let list = content_after(entry).and_then(|info| two_piece_list().find_first(info));
    match list {
        Some(list) => Ok(parse_two_piece_list(list, four_piece_set)),
        None => match overrides::lookup(&identity.name, &four_piece_set) {
            Some(o) => {
                debug!("{}: using 2pc override for {}", identity.name, four_piece_set);
                Ok(o.to_option())
            }
            None => Err(ExtractError::ElementNotFound(format!(
                "2pc sets for {}",
                four_piece_set
            ))),
        },
    }
}

/// Each list item groups 2-piece sets sharing one bonus; the group is the unit marked recommended.
fn parse_two_piece_list(list: ElementRef, four_piece_set: String) -> DriveDiscOption {
    let mut all = Vec::new();
    let mut recommended = Vec::new();

    for group in element_children(list) {
        let names: Vec<String> = paragraph()
            .find_all(group)
            .into_iter()
            .filter_map(|p| {
                let text = rendered_text(p).replace(RECOMMENDED_MARKER, "");
                let name = text.trim();
                (!name.is_empty()).then(|| name.to_string())
            })
            .collect();

        if rendered_text(group).contains(RECOMMENDED_MARKER) {
            recommended.extend(names.iter().cloned());
        }
        all.extend(names);
    }

    DriveDiscOption {
        four_piece_set,
        recommended_two_piece_sets: recommended,
        all_two_piece_sets: all,
    }
}
