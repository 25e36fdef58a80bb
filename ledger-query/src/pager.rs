//! Marker-based pagination
//!
//! Pages are fetched strictly one after another: the next request needs the
//! marker from the previous response. The walk ends when a page comes back
//! without a marker, or once the caller's limit is covered. The requested page
//! size is always clamped to `[MIN_PAGE_SIZE, MAX_PAGE_SIZE]`, so the last page
//! may overshoot the limit; results are truncated after the walk.

use crate::{error::Failure, metrics::PAGES_FETCHED, types::Marker, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use std::future::Future;
use tracing::debug;

/// One page of results, or the accumulated result of a walk
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Continuation token; absent on the last page
    pub marker: Option<Marker>,
    /// Records in node order
    pub results: Vec<T>,
}

/// A walk that stopped on a failing page
#[derive(Debug, Clone, PartialEq)]
pub struct PageFailure<T> {
    /// What the failing page reported
    pub failure: Failure,
    /// Records from the pages that did succeed
    pub accumulated: Vec<T>,
}

/// Clamp a requested page size into the range the node accepts
pub fn clamp_page_size(requested: u64) -> u32 {
    requested.clamp(u64::from(MIN_PAGE_SIZE), u64::from(MAX_PAGE_SIZE)) as u32
}

/// Walk every page, starting without a marker.
///
/// `fetch_page` receives the marker to continue from and the page size to
/// request. With `limit` set the walk stops as soon as at least `limit`
/// records are accumulated, and the result is truncated to `limit`. The
/// returned marker is the last one seen, so callers can resume a truncated
/// walk.
pub async fn page_all<T, F, Fut>(
    mut fetch_page: F,
    limit: Option<u32>,
) -> std::result::Result<Page<T>, PageFailure<T>>
where
    F: FnMut(Option<Marker>, u32) -> Fut,
    Fut: Future<Output = std::result::Result<Page<T>, Failure>>,
{
    let limit = limit.map(|l| l as usize);
    let mut accumulated: Vec<T> = Vec::new();
    let mut marker: Option<Marker> = None;
    let mut pages = 0usize;

    loop {
        let remaining = match limit {
            Some(l) => l.saturating_sub(accumulated.len()) as u64,
            None => u64::from(MAX_PAGE_SIZE),
        };
        let page_size = clamp_page_size(remaining);

        pages += 1;
        PAGES_FETCHED.inc();
        let page = match fetch_page(marker.take(), page_size).await {
            Ok(page) => page,
            Err(failure) => {
                debug!(
                    "Page {} failed after {} records accumulated",
                    pages,
                    accumulated.len()
                );
                return Err(PageFailure {
                    failure,
                    accumulated,
                });
            }
        };

        debug!(
            "Page {} returned {} records (requested {}), more: {}",
            pages,
            page.results.len(),
            page_size,
            page.marker.is_some()
        );
        accumulated.extend(page.results);
        marker = page.marker;

        let satisfied = limit.is_some_and(|l| accumulated.len() >= l);
        if marker.is_none() || satisfied {
            break;
        }
    }

    if let Some(l) = limit {
        accumulated.truncate(l);
    }

    Ok(Page {
        marker,
        results: accumulated,
    })
}
