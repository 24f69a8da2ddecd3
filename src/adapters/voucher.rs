use crate::domain::ports::VoucherCatalog;
use std::collections::{BTreeMap, HashMap};

/// Movie ticket type codes and their Japanese display names.
const MOVIE_TICKET_TYPES: &[(&str, &str)] = &[
    ("01", "一般"),
    ("02", "大・高生"),
    ("03", "小・中学生"),
    ("04", "幼児"),
    ("05", "シニア"),
    ("06", "親子ペア"),
    ("07", "障がい者"),
];

#[derive(Debug, Clone)]
pub struct StaticVoucherCatalog {
    names: BTreeMap<String, String>,
}

impl StaticVoucherCatalog {
    /// The built-in table with entries replaced or added from `overrides`.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut catalog = Self::default();
        for (code, name) in overrides {
            catalog.names.insert(code.clone(), name.clone());
        }
        catalog
    }
}

impl Default for StaticVoucherCatalog {
    fn default() -> Self {
        Self {
            names: MOVIE_TICKET_TYPES
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        }
    }
}

impl VoucherCatalog for StaticVoucherCatalog {
    fn display_name(&self, movie_ticket_type: &str) -> Option<String> {
        self.names.get(movie_ticket_type).cloned()
    }
}
