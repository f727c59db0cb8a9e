use crate::core::PresenceMap;
use crate::domain::model::PRESENT;
use std::collections::HashSet;

/// Marks every name as visited. Duplicates collapse onto their first position.
pub fn to_presence_map<I, S>(names: I) -> PresenceMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for name in names {
        let name = name.as_ref();
        if seen.insert(name.to_string()) {
            entries.push((name.to_string(), PRESENT));
        }
    }

    PresenceMap::from_entries(entries)
}
