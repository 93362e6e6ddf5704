//! The listing engine: filter, sort, and paginate one catalog snapshot.
//!
//! The pipeline is a pure function of `(catalog, params)`. Filters are
//! conjunctive, sorting is stable with null keys last, and an out-of-range
//! page clamps to the nearest valid page instead of erroring.

use std::cmp::Ordering;

use serde::Serialize;
use spaguide_core::{QueryParams, SortKey, SpaRecord};

use crate::store::Catalog;

/// One page of listing results plus the pagination bookkeeping the client
/// needs to render controls. Built fresh per request, never cached.
#[derive(Debug, Clone, Serialize)]
pub struct ResultPage {
    pub items: Vec<SpaRecord>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
}

/// Run the full filter → sort → paginate pipeline against a snapshot.
#[must_use]
pub fn query(catalog: &Catalog, params: &QueryParams) -> ResultPage {
    let mut matched: Vec<&SpaRecord> = catalog
        .spas()
        .iter()
        .filter(|spa| matches_filters(spa, params))
        .collect();

    sort_records(&mut matched, params.sort);

    let total = matched.len();
    let page_size = params.page_size.max(1) as usize;
    let page_count = total.div_ceil(page_size).max(1);
    let page = (params.page.max(1) as usize).min(page_count);
    let offset = (page - 1) * page_size;

    let items = matched
        .into_iter()
        .skip(offset)
        .take(page_size)
        .cloned()
        .collect();

    ResultPage {
        items,
        total,
        page,
        page_size,
        page_count,
    }
}

/// A record passes iff it satisfies every active filter.
fn matches_filters(spa: &SpaRecord, params: &QueryParams) -> bool {
    if let Some(location) = &params.location {
        if spa.location.as_deref() != Some(location.as_str()) {
            return false;
        }
    }

    if let Some(treatment) = &params.treatment {
        if !spa.treatments.iter().any(|t| t == treatment) {
            return false;
        }
    }

    if let Some(budget) = params.budget {
        if spa.budget != Some(budget) {
            return false;
        }
    }

    if let Some(search) = &params.search {
        let needle = search.to_lowercase();
        let in_title = spa.title.to_lowercase().contains(&needle);
        let in_address = spa
            .address
            .as_deref()
            .is_some_and(|a| a.to_lowercase().contains(&needle));
        if !in_title && !in_address {
            return false;
        }
    }

    true
}

fn sort_records(records: &mut [&SpaRecord], sort: SortKey) {
    // `sort_by` is stable: equal keys keep their catalog order.
    match sort {
        SortKey::RatingDesc => {
            records.sort_by(|a, b| nulls_last(a.rating, b.rating, |x, y| y.total_cmp(x)));
        }
        SortKey::RatingAsc => {
            records.sort_by(|a, b| nulls_last(a.rating, b.rating, |x, y| x.total_cmp(y)));
        }
        SortKey::BudgetAsc => {
            records.sort_by(|a, b| nulls_last(a.budget, b.budget, |x, y| x.cmp(y)));
        }
        SortKey::BudgetDesc => {
            records.sort_by(|a, b| nulls_last(a.budget, b.budget, |x, y| y.cmp(x)));
        }
    }
}

/// Compare optional keys so that absent values order after every present
/// value, under both ascending and descending `cmp`.
fn nulls_last<T, F>(a: Option<T>, b: Option<T>, cmp: F) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
{
    match (a, b) {
        (Some(x), Some(y)) => cmp(&x, &y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
