//! Helpers shared by the data model for normalising configured names and values

use indexmap::IndexSet;
use serde::{Deserialize, Deserializer};

/// Whether a string carries any non-whitespace text
#[must_use]
pub fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Collect names, dropping blank entries while keeping declaration order
pub fn non_blank_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .map(Into::into)
        .filter(|name| has_text(name))
        .collect()
}

/// Collect values into an insertion-ordered set, dropping blank entries
pub fn non_blank_set<I, S>(values: I) -> IndexSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values
        .into_iter()
        .map(Into::into)
        .filter(|value| has_text(value))
        .collect()
}

/// Collapse a sequence of names to its first-seen order, dropping repeats
pub fn ordered_unique<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .map(Into::into)
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}

/// Deserialize an optional list of names, treating `null` as empty and dropping blanks
pub(crate) fn deserialize_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(non_blank_names(names.unwrap_or_default()))
}

/// Deserialize an optional list of values into a blank-free ordered set
pub(crate) fn deserialize_value_set<'de, D>(deserializer: D) -> Result<IndexSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(non_blank_set(values.unwrap_or_default()))
}
