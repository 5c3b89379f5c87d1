//! `MaskField` implementations for sequences and maps.
//!
//! Collections are leaves: they render as a single display string built from
//! each element's own display value (`[a, b]`, `{k: v}`).

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    fmt::Display,
    hash::BuildHasher,
};

use indexmap::IndexMap;

use crate::mask::traits::MaskField;

fn render_sequence<'a, T>(items: impl Iterator<Item = &'a T>) -> String
where
    T: MaskField + 'a,
{
    let rendered: Vec<String> = items.map(MaskField::display_value).collect();
    format!("[{}]", rendered.join(", "))
}

fn render_entries<'a, K, V>(entries: impl Iterator<Item = (&'a K, &'a V)>) -> String
where
    K: Display + 'a,
    V: MaskField + 'a,
{
    let rendered: Vec<String> = entries
        .map(|(key, value)| format!("{key}: {}", value.display_value()))
        .collect();
    format!("{{{}}}", rendered.join(", "))
}

impl<T> MaskField for [T]
where
    T: MaskField,
{
    fn display_value(&self) -> String {
        render_sequence(self.iter())
    }
}

impl<T> MaskField for Vec<T>
where
    T: MaskField,
{
    fn display_value(&self) -> String {
        render_sequence(self.iter())
    }
}

impl<T, const N: usize> MaskField for [T; N]
where
    T: MaskField,
{
    fn display_value(&self) -> String {
        render_sequence(self.iter())
    }
}

impl<T> MaskField for BTreeSet<T>
where
    T: MaskField,
{
    fn display_value(&self) -> String {
        render_sequence(self.iter())
    }
}

/// Iteration order of a `HashSet` is unspecified, and so is the rendering.
impl<T, S> MaskField for HashSet<T, S>
where
    T: MaskField,
    S: BuildHasher,
{
    fn display_value(&self) -> String {
        render_sequence(self.iter())
    }
}

impl<K, V> MaskField for BTreeMap<K, V>
where
    K: Display,
    V: MaskField,
{
    fn display_value(&self) -> String {
        render_entries(self.iter())
    }
}

impl<K, V, S> MaskField for HashMap<K, V, S>
where
    K: Display,
    V: MaskField,
    S: BuildHasher,
{
    fn display_value(&self) -> String {
        render_entries(self.iter())
    }
}

impl<K, V, S> MaskField for IndexMap<K, V, S>
where
    K: Display,
    V: MaskField,
    S: BuildHasher,
{
    fn display_value(&self) -> String {
        render_entries(self.iter())
    }
}
