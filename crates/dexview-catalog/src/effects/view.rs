use crate::data::{CatalogEntry, MinimalRecord};

/// Receives list cards. Implemented by the presentation layer.
pub trait CardSink {
    /// Remove every card, before a search re-renders the list.
    fn clear(&self) {}

    fn render_card(&self, entry: &CatalogEntry, record: &MinimalRecord);
}

/// The scrolling list: cards plus the controls around them.
///
/// Every method but [`CardSink::render_card`] defaults to doing nothing.
pub trait ScrollView: CardSink {
    fn show_loading(&self) {}

    fn hide_loading(&self) {}

    /// Offer a manual "load more" after a slice failed.
    fn show_retry(&self) {}

    /// Watch a fresh trailing sentinel for visibility.
    fn arm_sentinel(&self) {}

    /// Stop watching for visibility and remove the "load more" controls.
    fn tear_down_trigger(&self) {}

    /// Replace the list with a full-page error.
    fn show_fatal_error(&self, _message: &str) {}
}
