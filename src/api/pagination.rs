//! Page-number pagination over `data` arrays.
//!
//! The API pages with `page[size]` / `page[number]` and reports the page count
//! at `meta.pagination.total_pages`. The count is re-read from every page, so a
//! server that revises it mid-stream is followed instead of truncated.

use crate::api::fetcher::ResourceFetcher;
use crate::domain::error::Result;
use serde_json::Value;

/// Items requested per page.
pub const PAGE_SIZE: u32 = 100;

/// Appends the page parameters to `path`, respecting an existing query string.
#[must_use]
pub fn page_path(path: &str, page_number: u64) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}page[size]={PAGE_SIZE}&page[number]={page_number}")
}

/// `meta.pagination.total_pages` of one response, when present.
fn total_pages(page: &Value) -> Option<u64> {
    page.get("meta")?.get("pagination")?.get("total_pages")?.as_u64()
}

/// Fetches every page of `path` and concatenates their `data` arrays.
///
/// Starts at page 1 and keeps going while the incremented page number does not
/// exceed the last-seen total. A page without `meta.pagination` keeps the
/// previous total (1 before any was seen), so a single unpaginated response
/// costs exactly one request. Page order and within-page order are preserved.
///
/// # Errors
///
/// The first failing page aborts the whole walk; nothing collected so far is
/// returned.
pub async fn get_all_pages<F>(fetcher: &F, path: &str) -> Result<Vec<Value>>
where
    F: ResourceFetcher + ?Sized,
{
    let mut results = Vec::new();
    let mut page_number: u64 = 1;
    let mut last_total: u64 = 1;

    loop {
        let page = fetcher.get(&page_path(path, page_number)).await?;

        if let Some(Value::Array(items)) = page.get("data") {
            results.extend(items.iter().cloned());
        }
        if let Some(total) = total_pages(&page) {
            last_total = total;
        }

        tracing::debug!(
            path = %path,
            page_number,
            total_pages = last_total,
            collected = results.len(),
            "page fetched"
        );

        page_number += 1;
        if page_number > last_total {
            break;
        }
    }

    Ok(results)
}
