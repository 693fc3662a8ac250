use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Operation-id → in-flight flag, kept in insertion order.
///
/// Serialized as a plain map. Re-setting an existing key keeps its position,
/// matching how the backend-facing state layer treats object keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationFlags {
    entries: Vec<(String, bool)>,
}

impl OperationFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, operation: &str) -> Option<bool> {
        self.entries.iter().find(|(name, _)| name == operation).map(|(_, flag)| *flag)
    }

    pub fn set(&mut self, operation: &str, loading: bool) {
        match self.entries.iter_mut().find(|(name, _)| name == operation) {
            Some((_, flag)) => *flag = loading,
            None => self.entries.push((operation.to_string(), loading)),
        }
    }

    pub fn remove(&mut self, operation: &str) -> Option<bool> {
        let idx = self.entries.iter().position(|(name, _)| name == operation)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.entries.iter().map(|(name, flag)| (name.as_str(), *flag))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for OperationFlags {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        let mut flags = OperationFlags::new();
        for (name, loading) in iter {
            let name: String = name.into();
            flags.set(&name, loading);
        }
        flags
    }
}

impl Serialize for OperationFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, flag) in &self.entries {
            map.serialize_entry(name, flag)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for OperationFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FlagsVisitor;

        impl<'de> Visitor<'de> for FlagsVisitor {
            type Value = OperationFlags;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of operation names to booleans")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut flags = OperationFlags::new();
                while let Some((name, loading)) = access.next_entry::<String, bool>()? {
                    flags.set(&name, loading);
                }
                Ok(flags)
            }
        }

        deserializer.deserialize_map(FlagsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_order_is_kept() {
        let flags: OperationFlags =
            serde_json::from_str(r#"{"zeta": true, "alpha": false, "mid": true}"#).unwrap();
        let names: Vec<&str> = flags.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_set_existing_keeps_position() {
        let mut flags: OperationFlags = [("a", true), ("b", true)].into_iter().collect();
        flags.set("a", false);
        flags.set("c", true);

        let entries: Vec<(&str, bool)> = flags.iter().collect();
        assert_eq!(entries, vec![("a", false), ("b", true), ("c", true)]);
        assert_eq!(flags.remove("b"), Some(true));
        assert_eq!(flags.get("b"), None);
    }

    #[test]
    fn test_serializes_as_map() {
        let flags: OperationFlags = [("login", true)].into_iter().collect();
        assert_eq!(serde_json::to_string(&flags).unwrap(), r#"{"login":true}"#);
    }
}
