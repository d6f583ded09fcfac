//! Walking every page of the preference list.
//!
//! The list endpoint uses cursor pagination: each page may carry a `next` URL
//! which already encodes the filter. [`ApiClient::preference_pages`] exposes
//! the pages as a finite stream, fetched strictly one after another, and
//! [`ApiClient::preference_list_all`] folds that stream into a single list.

use futures::stream::{self, Stream, TryStreamExt};

use crate::client::ApiClient;
use crate::models::{Preference, PreferenceListQuery};
use crate::transport::Transport;
use crate::ApiError;

enum Cursor {
    First(PreferenceListQuery),
    Next(String),
    Done,
}

impl<T: Transport> ApiClient<T> {
    /// Stream the results of `query` one page at a time, in server order.
    ///
    /// The next page is only requested once the previous one has been
    /// consumed. The stream ends after a page with no `next` cursor, or after
    /// the first error.
    pub fn preference_pages(
        &self,
        query: &PreferenceListQuery,
    ) -> impl Stream<Item = Result<Vec<Preference>, ApiError>> + '_ {
        stream::try_unfold(Cursor::First(query.clone()), move |cursor| async move {
            let page = match cursor {
                Cursor::First(query) => self.preference_list(&query).await?,
                Cursor::Next(url) => self.preference_list_page(&url).await?,
                Cursor::Done => return Ok(None),
            };
            tracing::debug!(count = page.results.len(), next = ?page.next_cursor(), "preference page");

            let next = match page.next_cursor() {
                Some(url) => Cursor::Next(url.to_string()),
                None => Cursor::Done,
            };
            Ok::<_, ApiError>(Some((page.results, next)))
        })
    }

    /// Every preference matching `query`, across all pages.
    pub async fn preference_list_all(
        &self,
        query: &PreferenceListQuery,
    ) -> Result<Vec<Preference>, ApiError> {
        let mut pages = std::pin::pin!(self.preference_pages(query));
        let mut results = Vec::new();
        while let Some(page) = pages.try_next().await? {
            results.extend(page);
        }
        Ok(results)
    }
}
