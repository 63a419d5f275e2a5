use std::collections::{BTreeMap, HashSet};

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

const LIST_SEPARATOR: &str = ", ";

/// One recommended 4-piece set and the 2-piece sets that pair with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriveDiscOption {
    #[serde(rename = "4pc Set")]
    pub four_piece_set: String,
    #[serde(rename = "Recommended 2pc Sets", serialize_with = "join_list")]
    pub recommended_two_piece_sets: Vec<String>,
    #[serde(rename = "All 2pc Sets", serialize_with = "join_list")]
    pub all_two_piece_sets: Vec<String>,
}

/// Main stats per disc slot plus substat priority, deduplicated across build variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatProfile {
    #[serde(rename = "Disc 4", serialize_with = "join_list")]
    pub disc4: Vec<String>,
    #[serde(rename = "Disc 5", serialize_with = "join_list")]
    pub disc5: Vec<String>,
    #[serde(rename = "Disc 6", serialize_with = "join_list")]
    pub disc6: Vec<String>,
    #[serde(rename = "Substats", serialize_with = "join_list")]
    pub substats: Vec<String>,
}

impl StatProfile {
    pub fn new(
        disc4: Vec<String>,
        disc5: Vec<String>,
        disc6: Vec<String>,
        substats: Vec<String>,
    ) -> Self {
        Self {
            disc4: dedup_stable(disc4),
            disc5: dedup_stable(disc5),
            disc6: dedup_stable(disc6),
            substats: dedup_stable(substats),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterRecord {
    #[serde(rename = "Name")]
    pub name: String,
    /// Keyed by the 4-piece entry's position on the page. `None` when the section is missing.
    #[serde(rename = "Drive Discs", skip_serializing_if = "Option::is_none")]
    pub drive_discs: Option<BTreeMap<usize, DriveDiscOption>>,
    #[serde(rename = "Stats", skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatProfile>,
}

/// All records of a run keyed by character name, in the order first seen.
#[derive(Debug, Default, Serialize)]
pub struct Roster(IndexMap<String, CharacterRecord>);

impl Roster {
    /// Add a record; a repeated name keeps its position and takes the new record.
    pub fn insert(&mut self, record: CharacterRecord) {
        self.0.insert(record.name.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacterRecord> {
        self.0.values()
    }
}

/// Drop repeated values, keeping the first occurrence of each.
pub fn dedup_stable(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

fn join_list<S: Serializer>(items: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&items.join(LIST_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn record(name: &str) -> CharacterRecord {
        CharacterRecord {
            name: name.to_string(),
            drive_discs: None,
            stats: None,
        }
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let out = dedup_stable(strings(&["ATK%", "CRIT Rate", "ATK%", "PEN Ratio", "CRIT Rate"]));
        assert_eq!(out, strings(&["ATK%", "CRIT Rate", "PEN Ratio"]));
    }

    #[test]
    fn dedup_is_idempotent() {
        let once = dedup_stable(strings(&["b", "a", "b", "c", "a"]));
        let twice = dedup_stable(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn stat_profile_dedups_every_field() {
        let p = StatProfile::new(
            strings(&["CRIT Rate", "CRIT Rate"]),
            strings(&["ATK%", "PEN Ratio", "ATK%"]),
            strings(&["ATK%"]),
            strings(&["CRIT DMG", "CRIT DMG"]),
        );
        assert_eq!(p.disc4, strings(&["CRIT Rate"]));
        assert_eq!(p.disc5, strings(&["ATK%", "PEN Ratio"]));
        assert_eq!(p.substats, strings(&["CRIT DMG"]));
    }

    #[test]
    fn record_serializes_with_site_keys() {
        let mut discs = BTreeMap::new();
        discs.insert(
            0,
            DriveDiscOption {
                four_piece_set: "Set-X".into(),
                recommended_two_piece_sets: strings(&["A", "B"]),
                all_two_piece_sets: strings(&["A", "B", "C"]),
            },
        );
        let rec = CharacterRecord {
            name: "Ellen".into(),
            drive_discs: Some(discs),
            stats: Some(StatProfile::new(
                strings(&["CRIT Rate"]),
                strings(&["ATK%"]),
                strings(&["ATK%"]),
                strings(&["CRIT Rate = CRIT DMG"]),
            )),
        };
        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "Name": "Ellen",
                "Drive Discs": {
                    "0": {
                        "4pc Set": "Set-X",
                        "Recommended 2pc Sets": "A, B",
                        "All 2pc Sets": "A, B, C"
                    }
                },
                "Stats": {
                    "Disc 4": "CRIT Rate",
                    "Disc 5": "ATK%",
                    "Disc 6": "ATK%",
                    "Substats": "CRIT Rate = CRIT DMG"
                }
            })
        );
    }

    #[test]
    fn missing_sections_are_not_serialized() {
        let v = serde_json::to_value(record("Aria")).unwrap();
        assert_eq!(v, serde_json::json!({ "Name": "Aria" }));
    }

    #[test]
    fn roster_keeps_listing_order() {
        let mut roster = Roster::default();
        roster.insert(record("Zhu Yuan"));
        roster.insert(record("Anby"));
        roster.insert(record("Ellen"));
        let json = serde_json::to_string(&roster).unwrap();
        let zhu = json.find("Zhu Yuan").unwrap();
        let anby = json.find("Anby").unwrap();
        let ellen = json.find("Ellen").unwrap();
        assert!(zhu < anby && anby < ellen);
    }

    #[test]
    fn roster_serializes_as_name_keyed_object() {
        let mut roster = Roster::default();
        roster.insert(record("Ellen"));
        roster.insert(record("Anby"));
        assert_eq!(
            serde_json::to_value(&roster).unwrap(),
            serde_json::json!({ "Ellen": { "Name": "Ellen" }, "Anby": { "Name": "Anby" } })
        );
    }

    #[test]
    fn roster_repeated_name_last_write_wins() {
        let mut roster = Roster::default();
        roster.insert(record("Ellen"));
        roster.insert(record("Anby"));
        let mut again = record("Ellen");
        again.stats = Some(StatProfile::default());
        roster.insert(again);

        assert_eq!(roster.len(), 2);
        let first = roster.iter().next().unwrap();
        assert_eq!(first.name, "Ellen");
        assert!(first.stats.is_some());
    }
}
