use serde::{Deserialize, Serialize};

/// One museum entry as written to disk.
///
/// `name` and `last_updated` are always present; the rest only when the
/// contact block yielded them. A fully populated record looks like:
///
/// ```json
/// {
///   "name": "Grimmwelt",
///   "last_updated": "2015",
///   "location": "Kassel, Germany",
///   "url": "www.grimms.de/museum",
///   "email": "grimmnet@t-online.de",
///   "phone": "+49 561 598 61 910",
///   "address": "Weinbergstraße 21, 34117 Kassel"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuseumRecord {
    pub name: String,
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

pub const FULL_FIELD_COUNT: usize = 7;

impl MuseumRecord {
    pub fn new(name: impl Into<String>, last_updated: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_updated: last_updated.into(),
            ..Default::default()
        }
    }

    /// Number of keys the serialized object will have.
    pub fn field_count(&self) -> usize {
        2 + [
            &self.location,
            &self.url,
            &self.email,
            &self.phone,
            &self.address,
        ]
        .iter()
        .filter(|f| f.is_some())
        .count()
    }

    pub fn is_complete(&self) -> bool {
        self.field_count() == FULL_FIELD_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grimmwelt() -> MuseumRecord {
        let json = std::fs::read_to_string("tests/fixtures/grimmwelt.json").unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn example_schema_is_complete() {
        let r = grimmwelt();
        assert_eq!(r.name, "Grimmwelt");
        assert_eq!(r.last_updated, "2015");
        assert_eq!(r.location.as_deref(), Some("Kassel, Germany"));
        assert_eq!(r.field_count(), FULL_FIELD_COUNT);
        assert!(r.is_complete());
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let r = MuseumRecord::new("Mundolingua", "2016");
        let v = serde_json::to_value(&r).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(r.field_count(), 2);
        assert!(!obj.contains_key("email"));
    }

    #[test]
    fn keys_keep_declaration_order() {
        let json = serde_json::to_string(&grimmwelt()).unwrap();
        let pos = |k: &str| json.find(&format!("\"{}\"", k)).unwrap();
        assert!(pos("name") < pos("last_updated"));
        assert!(pos("last_updated") < pos("location"));
        assert!(pos("url") < pos("email"));
        assert!(pos("phone") < pos("address"));
    }
}
