use std::fmt;

/// A typed cell of the feature table.
///
/// `Missing` is the single no-value sentinel shared by every column kind;
/// numeric, boolean and list-valued columns all intermix in one table, so a
/// cell carries its own type rather than relying on a per-column dtype.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum FeatureValue {
    Float(f64),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
    Missing,
}

impl FeatureValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, FeatureValue::Missing)
    }

    /// Numeric view of the cell. Integers promote to floats; booleans and
    /// lists have no numeric reading.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Float(v) => Some(*v),
            FeatureValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FeatureValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FeatureValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn from_opt_f64(value: Option<f64>) -> Self {
        value.map_or(FeatureValue::Missing, FeatureValue::Float)
    }

    pub fn from_opt_i64(value: Option<i64>) -> Self {
        value.map_or(FeatureValue::Missing, FeatureValue::Int)
    }

    pub fn from_opt_list(value: Option<Vec<String>>) -> Self {
        value.map_or(FeatureValue::Missing, FeatureValue::List)
    }
}

impl fmt::Display for FeatureValue {
    /// Human-readable cell rendering: missing cells render empty, floats
    /// without trailing zeros, lists comma-joined.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Float(v) => {
                let s = format!("{v}");
                if s.contains('.') {
                    f.write_str(s.trim_end_matches('0').trim_end_matches('.'))
                } else {
                    f.write_str(&s)
                }
            }
            FeatureValue::Int(v) => write!(f, "{v}"),
            FeatureValue::Bool(v) => write!(f, "{v}"),
            FeatureValue::List(items) => f.write_str(&items.join(", ")),
            FeatureValue::Missing => Ok(()),
        }
    }
}
