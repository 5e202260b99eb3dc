use std::fmt;

/// The stable identifier joining the catalog and the feature table.
///
/// Derived from the raw table's primary identifier column by string
/// conversion, so an integer id and its textual form key the same entry.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct AppId(String);

impl AppId {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self(value.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(AppId::new(" 440 ").as_str(), "440");
    }

    #[test]
    fn numeric_and_textual_forms_key_identically() {
        assert_eq!(AppId::new(440.to_string()), AppId::new("440"));
    }
}
