pub mod discs;
pub mod identity;
pub mod stats;

use scraper::Html;
use tracing::warn;

use super::layout::{DRIVE_DISC_SETS, DRIVE_DISC_STATS};
use crate::error::ExtractError;
use crate::model::CharacterRecord;

/// Build a character's record from its page.
///
/// Only a missing identity is an error. Missing sections are logged and left
/// out, and each section is looked up independently of the other.
pub fn extract_character(doc: &Html) -> Result<CharacterRecord, ExtractError> {
    let root = doc.root_element();
    let identity = identity::extract(root)?;

    let drive_discs = match DRIVE_DISC_SETS.locate(root, &identity.affinity) {
        Ok(section) => Some(discs::extract(section, &identity)),
        Err(e) => {
            warn!("{}: {}", identity.name, e);
            None
        }
    };

    let stats = match DRIVE_DISC_STATS.locate(root, &identity.affinity) {
        Ok(section) => Some(stats::extract(section, &identity.name)),
        Err(e) => {
            warn!("{}: {}", identity.name, e);
            None
        }
    };

    Ok(CharacterRecord {
        name: identity.name,
        drive_discs,
        stats,
    })
}

// ── Tests ──
