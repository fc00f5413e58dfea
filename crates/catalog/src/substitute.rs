use serde::{Serialize, ser::SerializeMap};

static SUBSTITUTES: &[(&str, &[&str])] = &[
    ("milk", &["almond milk", "soy milk", "oat milk"]),
    ("bread", &["whole wheat bread", "multigrain bread"]),
    ("butter", &["olive spread", "ghee"]),
    ("sugar", &["jaggery", "stevia"]),
    ("rice", &["brown rice", "quinoa"]),
];

/// Alternatives for a grocery item, looked up by its trimmed, lowercased
/// name. Unknown items have no substitutes.
pub fn substitutes_for(name: &str) -> &'static [&'static str] {
    let normalized = name.trim().to_lowercase();

    SUBSTITUTES
        .iter()
        .find(|(item, _)| *item == normalized)
        .map(|(_, subs)| *subs)
        .unwrap_or_default()
}

/// The whole item to substitutes table, serialized as a JSON object.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubstituteTable;

impl SubstituteTable {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
        SUBSTITUTES.iter().copied()
    }
}

impl Serialize for SubstituteTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SUBSTITUTES.len()))?;
        for (item, subs) in self.iter() {
            map.serialize_entry(item, subs)?;
        }
        map.end()
    }
}
