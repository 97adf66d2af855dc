//! Button style flags.

use serde::{Deserialize, Serialize};

/// Base style flags: `(key, label)`, in declaration order.
pub const BASE_STYLES: &[(&str, &str)] = &[
    ("clear", "Clear"),
    ("expanded", "Expanded"),
    ("outlined", "Outlined"),
    ("big", "Big"),
];

/// An independently toggleable style. Selecting it adds `key` as a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleOption {
    pub key: String,
    pub label: String,
}

impl StyleOption {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}
