use dexview_fetch::HttpClient;
use tracing::{debug, info};

use crate::core::filter_by_term;
use crate::effects::session::CatalogSession;
use crate::effects::view::CardSink;
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    pub matched: usize,
    pub rendered: usize,
    pub failed: Vec<String>,
    /// A newer search or load began before this one finished rendering.
    pub superseded: bool,
}

/// Re-filters and re-renders the list on every change of the search term.
pub struct SearchFilter<'a, C: HttpClient> {
    session: &'a CatalogSession<C>,
}

impl<'a, C: HttpClient> SearchFilter<'a, C> {
    pub fn new(session: &'a CatalogSession<C>) -> Self {
        Self { session }
    }

    /// Render every catalog entry whose name contains `term`.
    ///
    /// The sink is cleared, then matches are resolved and rendered
    /// `search_slice` at a time in catalog order, yielding to the runtime
    /// between slices. Starting another search or load makes this one stop
    /// before its next render.
    #[tracing::instrument(skip(self, sink))]
    pub async fn search<V: CardSink + ?Sized>(&self, term: &str, sink: &V) -> Result<SearchReport> {
        let ticket = self.session.generation().begin();
        let list = self.session.catalog().await?;

        let mut report = SearchReport::default();
        if !ticket.is_current() {
            report.superseded = true;
            return Ok(report);
        }

        let matches = filter_by_term(&list, term);
        report.matched = matches.len();
        debug!(matched = report.matched, "filtered catalog");
        sink.clear();

        let batch_fetcher = self.session.batch_fetcher();
        let slice_size = self.session.config().search_slice.max(1);

        for slice in matches.chunks(slice_size) {
            let names: Vec<&str> = slice.iter().map(|entry| entry.name.as_str()).collect();
            let batch = batch_fetcher.resolve_minimal_batch(&names).await;

            if !ticket.is_current() {
                debug!(generation = ticket.value(), "search superseded");
                report.superseded = true;
                return Ok(report);
            }

            for entry in slice {
                if let Some(record) = batch.get(&entry.name) {
                    sink.render_card(entry, record);
                    report.rendered += 1;
                }
            }
            report
                .failed
                .extend(batch.failures().map(|(name, _)| name.to_string()));

            tokio::task::yield_now().await;
        }

        info!(matched = report.matched, rendered = report.rendered, "search rendered");
        Ok(report)
    }
}
