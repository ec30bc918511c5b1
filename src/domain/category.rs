//! Fixed student category enumerations and their presentation metadata.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const EXPENSE_CATEGORIES: [&str; 6] = [
    "Food & Snacks",
    "Transportation",
    "Education & Books",
    "Entertainment",
    "Housing & Rent",
    "Miscellaneous",
];

pub const INCOME_CATEGORIES: [&str; 5] = [
    "Pocket Money",
    "Part-time Job",
    "Scholarship",
    "Freelancing",
    "Other Income",
];

/// Limit applied to any category missing from the default table.
pub const BASELINE_LIMIT: f64 = 1000.0;
pub const FALLBACK_COLOR: &str = "#95A5A6";
pub const FALLBACK_ICON: &str = "💰";

/// Supported category types. Expense and income names never overlap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Expense,
    Income,
}

impl CategoryKind {
    /// Category names valid for this kind, in display order.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            CategoryKind::Expense => &EXPENSE_CATEGORIES,
            CategoryKind::Income => &INCOME_CATEGORIES,
        }
    }

    pub fn contains(self, category: &str) -> bool {
        self.categories().contains(&category)
    }

    /// Lowercase wire name, as serialized under `type`.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryKind::Expense => "expense",
            CategoryKind::Income => "income",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CategoryKind::Expense => "Expense",
            CategoryKind::Income => "Income",
        };
        f.write_str(label)
    }
}

/// Chart color and icon associated with a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub color: &'static str,
    pub icon: &'static str,
}

static DEFAULT_LIMITS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("Food & Snacks", 3000.0),
        ("Transportation", 1500.0),
        ("Education & Books", 2000.0),
        ("Entertainment", 1000.0),
        ("Housing & Rent", 5000.0),
        ("Miscellaneous", 1000.0),
    ])
});

static STYLES: Lazy<HashMap<&'static str, CategoryStyle>> = Lazy::new(|| {
    let entries = [
        ("Food & Snacks", "#E74C3C", "🍔"),
        ("Transportation", "#3498DB", "🚌"),
        ("Education & Books", "#9B59B6", "📚"),
        ("Entertainment", "#F39C12", "🎬"),
        ("Housing & Rent", "#34495E", "🏠"),
        ("Miscellaneous", "#95A5A6", "📦"),
        ("Pocket Money", "#27AE60", "💰"),
        ("Part-time Job", "#3498DB", "💼"),
        ("Scholarship", "#8E44AD", "🎓"),
        ("Freelancing", "#F39C12", "💻"),
        ("Other Income", "#16A085", "💸"),
    ];
    entries
        .into_iter()
        .map(|(name, color, icon)| (name, CategoryStyle { color, icon }))
        .collect()
});

/// Default monthly limit for a category, falling back to [`BASELINE_LIMIT`].
pub fn default_limit(category: &str) -> f64 {
    DEFAULT_LIMITS
        .get(category)
        .copied()
        .unwrap_or(BASELINE_LIMIT)
}

pub fn style_for(category: &str) -> CategoryStyle {
    STYLES.get(category).copied().unwrap_or(CategoryStyle {
        color: FALLBACK_COLOR,
        icon: FALLBACK_ICON,
    })
}

/// Resolves user input to a canonical category name of the given kind.
///
/// Matching ignores ASCII case and surrounding whitespace.
pub fn resolve(kind: CategoryKind, input: &str) -> Option<&'static str> {
    let needle = input.trim();
    kind.categories()
        .iter()
        .copied()
        .find(|name| name.eq_ignore_ascii_case(needle))
}
