use dexview_fetch::HttpClient;
use tracing::{debug, warn};

use crate::core::slice_window;
use crate::data::CatalogEntry;
use crate::effects::batch::BatchDetailFetcher;
use crate::effects::generation::GenerationTicket;
use crate::effects::view::CardSink;
use crate::error::{CatalogError, Result};

/// What one call to [`BatchLoader::load_next_slice`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceReport {
    pub start: usize,
    /// `start` plus the requested slice length, clamped to the list length.
    pub next_cursor: usize,
    pub rendered: usize,
    /// Names that could not be resolved.
    pub failed: Vec<String>,
    /// A newer generation began while the slice was loading; nothing was rendered.
    pub stale: bool,
}

/// Loads the catalog one slice at a time and hands each card to a [`CardSink`].
pub struct BatchLoader<'a, C: HttpClient> {
    batch: BatchDetailFetcher<'a, C>,
}

impl<'a, C: HttpClient> BatchLoader<'a, C> {
    pub fn new(batch: BatchDetailFetcher<'a, C>) -> Self {
        Self { batch }
    }

    /// Resolve `list[cursor..cursor + slice_size]` and render every entry that resolved.
    ///
    /// Cards are paired with catalog entries by name and rendered in list
    /// order. The cursor advances past the whole slice even when some or all
    /// of its entries failed, so a bad entry never stalls the list. Only a
    /// cursor past the end of the list is an error.
    #[tracing::instrument(skip(self, list, ticket, sink), fields(len = list.len()))]
    pub async fn load_next_slice<V: CardSink + ?Sized>(
        &self,
        list: &[CatalogEntry],
        cursor: usize,
        slice_size: usize,
        ticket: &GenerationTicket,
        sink: &V,
    ) -> Result<SliceReport> {
        let window = slice_window(list.len(), cursor, slice_size).ok_or(
            CatalogError::CursorOutOfRange {
                cursor,
                len: list.len(),
            },
        )?;
        let slice = &list[window.clone()];
        debug!(start = window.start, end = window.end, "loading slice");

        let names: Vec<&str> = slice.iter().map(|entry| entry.name.as_str()).collect();
        let batch = self.batch.resolve_minimal_batch(&names).await;

        if !ticket.is_current() {
            debug!(generation = ticket.value(), "discarding stale slice");
            return Ok(SliceReport {
                start: window.start,
                next_cursor: window.end,
                rendered: 0,
                failed: Vec::new(),
                stale: true,
            });
        }

        if !batch.is_empty() && batch.resolved_count() == 0 {
            warn!(start = window.start, end = window.end, "no entry in slice resolved");
        }

        let mut rendered = 0;
        for entry in slice {
            if let Some(record) = batch.get(&entry.name) {
                sink.render_card(entry, record);
                rendered += 1;
            }
        }

        Ok(SliceReport {
            start: window.start,
            next_cursor: window.end,
            rendered,
            failed: batch.failures().map(|(name, _)| name.to_string()).collect(),
            stale: false,
        })
    }
}
