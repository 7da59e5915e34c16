use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Order-aware comparison: `Less` means `a` belongs before `b`.
    ///
    /// Incomparable values (NaN) compare as equal.
    pub fn compare<T: PartialOrd>(self, a: &T, b: &T) -> Ordering {
        let natural = a.partial_cmp(b).unwrap_or(Ordering::Equal);
        match self {
            SortOrder::Asc => natural,
            SortOrder::Desc => natural.reverse(),
        }
    }

    /// `true` when `a` may stay before `b`.
    pub fn in_order<T: PartialOrd>(self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Greater
    }
}

/// Options shared by every sort engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SortOptions {
    pub order: SortOrder,
    /// Store step records.
    pub record: bool,
    /// Hard cap on stored steps; the sort itself always runs to completion.
    pub max_steps: usize,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            order: SortOrder::Asc,
            record: true,
            max_steps: 200_000,
        }
    }
}

impl SortOptions {
    pub fn with_order(order: SortOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// Same options with recording switched off.
    pub fn silent(self) -> Self {
        Self {
            record: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desc_reverses() {
        assert_eq!(SortOrder::Asc.compare(&1, &2), Ordering::Less);
        assert_eq!(SortOrder::Desc.compare(&1, &2), Ordering::Greater);
        assert!(SortOrder::Desc.in_order(&3, &3));
    }

    #[test]
    fn options_defaults_from_json() {
        let opts: SortOptions = serde_json::from_str(r#"{"order":"desc"}"#).unwrap();
        assert_eq!(opts.order, SortOrder::Desc);
        assert!(opts.record);
        assert_eq!(opts.max_steps, 200_000);
    }
}
