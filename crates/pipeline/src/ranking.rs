//! Ordering and term matching shared by the pipeline stages.

use data_loader::TitleRecord;
use std::cmp::Ordering;

/// Sort by `average_rating`, highest first.
///
/// The sort is stable: records with equal ratings keep their dataset order.
/// Records without a rating go last.
pub fn sort_by_rating_desc(records: &mut [&TitleRecord]) {
    records.sort_by(|a, b| compare_rating_desc(a.average_rating, b.average_rating));
}

fn compare_rating_desc(a: Option<f32>, b: Option<f32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// True if `field` contains at least one of `terms` as a substring.
///
/// Empty terms never match.
pub fn contains_any(field: &str, terms: &[String]) -> bool {
    terms
        .iter()
        .any(|term| !term.is_empty() && field.contains(term.as_str()))
}
