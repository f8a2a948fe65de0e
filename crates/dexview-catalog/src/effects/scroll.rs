use std::sync::Arc;

use dexview_fetch::HttpClient;
use parking_lot::Mutex;
use tracing::{debug, error, info};

use crate::data::CatalogEntry;
use crate::effects::generation::GenerationTicket;
use crate::effects::loader::{BatchLoader, SliceReport};
use crate::effects::view::ScrollView;
use crate::error::CatalogError;

/// Phases of the infinite-scroll list.
///
/// `Idle` and `Loading` alternate until the cursor reaches the end of the
/// list, then the controller stays `Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPhase {
    #[default]
    Idle,
    Loading,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTrigger {
    /// The trailing sentinel scrolled into view.
    SentinelVisible,
    /// The user pressed "load more".
    LoadMore,
}

#[derive(Debug)]
pub enum TriggerOutcome {
    /// A slice was loading already, or the list is complete.
    Suppressed,
    Loaded(SliceReport),
    /// The loader rejected the slice; the cursor did not move and a retry is offered.
    Failed(CatalogError),
    /// A newer load or search replaced this list.
    Superseded,
}

#[derive(Debug)]
struct ControllerState {
    phase: ScrollPhase,
    cursor: usize,
}

/// Drives [`BatchLoader`] as the user scrolls, one slice per trigger.
pub struct IncrementalScrollController<'a, C: HttpClient> {
    loader: BatchLoader<'a, C>,
    list: Arc<[CatalogEntry]>,
    slice_size: usize,
    ticket: GenerationTicket,
    state: Mutex<ControllerState>,
}

impl<'a, C: HttpClient> IncrementalScrollController<'a, C> {
    /// A controller resuming at `cursor`, already `Complete` if nothing is left.
    pub fn new(
        loader: BatchLoader<'a, C>,
        list: Arc<[CatalogEntry]>,
        cursor: usize,
        slice_size: usize,
        ticket: GenerationTicket,
    ) -> Self {
        let phase = if cursor >= list.len() {
            ScrollPhase::Complete
        } else {
            ScrollPhase::Idle
        };

        Self {
            loader,
            list,
            slice_size,
            ticket,
            state: Mutex::new(ControllerState { phase, cursor }),
        }
    }

    /// Stop accepting triggers; used when the list was replaced before it showed.
    pub(crate) fn finish(&self) {
        self.state.lock().phase = ScrollPhase::Complete;
    }

    pub fn phase(&self) -> ScrollPhase {
        self.state.lock().phase
    }

    pub fn cursor(&self) -> usize {
        self.state.lock().cursor
    }

    pub fn total(&self) -> usize {
        self.list.len()
    }

    pub async fn on_sentinel_visible<V: ScrollView + ?Sized>(&self, view: &V) -> TriggerOutcome {
        self.trigger(LoadTrigger::SentinelVisible, view).await
    }

    pub async fn on_load_more<V: ScrollView + ?Sized>(&self, view: &V) -> TriggerOutcome {
        self.trigger(LoadTrigger::LoadMore, view).await
    }

    /// Load the next slice unless one is loading already or the list is done.
    #[tracing::instrument(skip(self, view))]
    pub async fn trigger<V: ScrollView + ?Sized>(
        &self,
        trigger: LoadTrigger,
        view: &V,
    ) -> TriggerOutcome {
        let cursor = {
            let mut state = self.state.lock();
            if state.phase != ScrollPhase::Idle {
                debug!(phase = ?state.phase, "trigger suppressed");
                return TriggerOutcome::Suppressed;
            }
            state.phase = ScrollPhase::Loading;
            state.cursor
        };

        view.show_loading();
        let result = self
            .loader
            .load_next_slice(&self.list, cursor, self.slice_size, &self.ticket, view)
            .await;
        view.hide_loading();

        match result {
            Ok(report) if report.stale => {
                self.state.lock().phase = ScrollPhase::Complete;
                debug!("list superseded by a newer load");
                view.tear_down_trigger();
                TriggerOutcome::Superseded
            }
            Ok(report) => {
                let phase = {
                    let mut state = self.state.lock();
                    state.cursor = report.next_cursor;
                    state.phase = if state.cursor >= self.list.len() {
                        ScrollPhase::Complete
                    } else {
                        ScrollPhase::Idle
                    };
                    state.phase
                };

                info!(loaded = report.next_cursor, total = self.list.len(), "slice loaded");
                if phase == ScrollPhase::Complete {
                    info!("all entries loaded");
                    view.tear_down_trigger();
                } else {
                    view.arm_sentinel();
                }
                TriggerOutcome::Loaded(report)
            }
            Err(err) => {
                self.state.lock().phase = ScrollPhase::Idle;
                error!(cursor, error = %err, "slice failed");
                view.show_retry();
                TriggerOutcome::Failed(err)
            }
        }
    }
}
