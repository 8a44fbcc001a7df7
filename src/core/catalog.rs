use std::collections::BTreeMap;

use crate::models::{Name, NameId};

/// Split a newline-separated block of names into trimmed, non-empty lines
pub fn parse_import_text(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize and deduplicate a batch of names by identity
///
/// When several texts collapse to the same id, the smallest display text is
/// kept so the result does not depend on input order. The output is sorted
/// by id.
pub fn normalize_batch<S: AsRef<str>>(names: &[S]) -> Vec<Name> {
    let mut unique: BTreeMap<NameId, Name> = BTreeMap::new();

    for raw in names {
        let name = Name::new(raw.as_ref());
        if name.id.as_str().is_empty() {
            continue;
        }
        match unique.get(&name.id) {
            Some(existing) if existing.text <= name.text => {}
            _ => {
                unique.insert(name.id.clone(), name);
            }
        }
    }

    unique.into_values().collect()
}
