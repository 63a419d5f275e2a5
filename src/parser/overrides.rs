//! Hand-maintained 2-piece recommendations for pages that only list 4-piece sets.
//!
//! Values come from the community ZZZ build spreadsheet as of February 2026.
//! Entries go stale as Prydwen fills in its pages; they are only consulted
//! when the page has no 2-piece list for the entry.

use crate::model::DriveDiscOption;

#[derive(Debug)]
pub struct TwoPieceOverride {
    pub character: &'static str,
    pub four_piece_set: &'static str,
    pub recommended: &'static [&'static str],
    pub all: &'static [&'static str],
}

impl TwoPieceOverride {
    pub fn to_option(&self) -> DriveDiscOption {
        DriveDiscOption {
            four_piece_set: self.four_piece_set.to_string(),
            recommended_two_piece_sets: to_strings(self.recommended),
            all_two_piece_sets: to_strings(self.all),
        }
    }
}

pub static OVERRIDES: &[TwoPieceOverride] = &[
    TwoPieceOverride {
        character: "Evelyn",
        four_piece_set: "Hormone Punk",
        recommended: &["Puffer Electro"],
        all: &[
            "Puffer Electro",
            "Branch & Blade Song",
            "Woodpecker Electro",
            "Astral Voice",
            "Inferno Metal",
        ],
    },
    TwoPieceOverride {
        character: "Evelyn",
        four_piece_set: "Puffer Electro",
        recommended: &["Branch & Blade Song", "Woodpecker Electro"],
        all: &[
            "Branch & Blade Song",
            "Woodpecker Electro",
            "Astral Voice",
            "Hormone Punk",
            "Inferno Metal",
        ],
    },
    TwoPieceOverride {
        character: "Evelyn",
        four_piece_set: "Astral Voice",
        recommended: &["Puffer Electro"],
        all: &[
            "Puffer Electro",
            "Branch & Blade Song",
            "Woodpecker Electro",
            "Hormone Punk",
            "Inferno Metal",
        ],
    },
];

pub fn lookup(character: &str, four_piece_set: &str) -> Option<&'static TwoPieceOverride> {
    OVERRIDES
        .iter()
        .find(|o| o.character == character && o.four_piece_set == four_piece_set)
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
