//! The closed set of catalog categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category. The storefront carries exactly three lines; the
/// backing file stores the lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Jewelry,
    Books,
    Gadgets,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Jewelry => "jewelry",
            Category::Books => "books",
            Category::Gadgets => "gadgets",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "jewelry" => Some(Category::Jewelry),
            "books" => Some(Category::Books),
            "gadgets" => Some(Category::Gadgets),
            _ => None,
        }
    }

    /// Name shown on category pages and in notification messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Jewelry => "Jewelry",
            Category::Books => "Books",
            Category::Gadgets => "Gadgets",
        }
    }

    /// All categories, in storefront display order.
    pub fn all() -> [Category; 3] {
        [Category::Jewelry, Category::Books, Category::Gadgets]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
