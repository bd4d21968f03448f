//! Derivation pipeline: search, then type filter, then a stable sort.
//!
//! Everything here is a pure function of its inputs; the store calls these
//! on every read instead of caching results.

use std::cmp::Ordering;

use crate::models::{Entry, FilterSpec, SortField, SortOrder, SortSpec};
use crate::size::parse_size;

/// Parameters shared by the folder and file pipelines
#[derive(Clone, Copy, Debug)]
pub struct DeriveParams<'a> {
    pub search: &'a str,
    pub filter: FilterSpec,
    pub sort: SortSpec,
}

/// Run the full pipeline over one raw list.
pub fn derive_visible<T: Entry + Clone>(items: &[T], params: &DeriveParams<'_>) -> Vec<T> {
    let mut visible: Vec<T> = items
        .iter()
        .filter(|item| matches_search(*item, params.search))
        .filter(|item| item.passes_filter(&params.filter))
        .cloned()
        .collect();
    sort_entries(&mut visible, params.sort);
    visible
}

/// Case-insensitive substring match on the name. An empty query matches everything.
pub fn matches_search<T: Entry>(item: &T, query: &str) -> bool {
    query.is_empty() || item.name().to_lowercase().contains(&query.to_lowercase())
}

/// Stable sort; entries with equal keys keep their input order in both directions.
pub fn sort_entries<T: Entry>(items: &mut [T], sort: SortSpec) {
    items.sort_by(|a, b| {
        let ord = compare_by(a, b, sort.field);
        match sort.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}

fn compare_by<T: Entry>(a: &T, b: &T, field: SortField) -> Ordering {
    match field {
        SortField::Name => compare_names(a, b),
        SortField::Date => a.sort_date().cmp(&b.sort_date()),
        SortField::Size => parse_size(a.size_label())
            .partial_cmp(&parse_size(b.size_label()))
            .unwrap_or(Ordering::Equal),
        SortField::Type => match (a.type_key(), b.type_key()) {
            (Some(ta), Some(tb)) => ta.cmp(tb),
            // folders carry no type
            _ => compare_names(a, b),
        },
    }
}

fn compare_names<T: Entry>(a: &T, b: &T) -> Ordering {
    a.name().to_lowercase().cmp(&b.name().to_lowercase())
}
