//! Name sorting for the users table.

use std::{cmp::Ordering, sync::LazyLock};

use icu_collator::{Collator, CollatorBorrowed, options::CollatorOptions};

use crate::User;

/// Root-locale collator, built from the compiled CLDR data on first use.
static COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    match Collator::try_new(Default::default(), CollatorOptions::default()) {
        Ok(collator) => Some(collator),
        Err(err) => {
            log::error!("Failed to load root collation data, using code point order: {err}");
            None
        }
    }
});

/// Sort applied to the name column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Original fetch order.
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortMode {
    /// Next mode in the header click cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Unsorted => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Unsorted,
        }
    }

    /// Suffix shown after the header label.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Unsorted => "",
            Self::Ascending => " ↑",
            Self::Descending => " ↓",
        }
    }

    pub fn is_active(self) -> bool {
        self != Self::Unsorted
    }
}

/// Compares two names with the Unicode root collation.
///
/// Base letters decide first, so `É` sorts with `E` and `ё` with `е`. Accents
/// and then case only break ties, with lowercase first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    match COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}

/// Display order of `users` under `mode`. The input slice is left untouched.
pub fn sorted_view(users: &[User], mode: SortMode) -> Vec<&User> {
    let mut rows: Vec<&User> = users.iter().collect();
    match mode {
        SortMode::Unsorted => {}
        SortMode::Ascending => rows.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortMode::Descending => rows.sort_by(|a, b| compare_names(&b.name, &a.name)),
    }
    rows
}
