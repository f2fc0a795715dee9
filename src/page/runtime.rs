use crate::feeds::{fetch_properties, FeedSource};
use crate::map::{BoundsSynchronizer, MapView};
use crate::page::lead_form::FormStatus;
use crate::page::state::{update, Effect, Msg, PageState};
use tokio::sync::mpsc;
use tracing::debug;

/// Drives a [`PageState`] and performs the effects its updates request
///
/// Delayed messages (the simulated form acknowledgment) are fed back
/// through a channel and applied by [`PageRuntime::process_next`].
pub struct PageRuntime<M: MapView> {
    state: PageState,
    map: M,
    bounds: BoundsSynchronizer,
    tx: mpsc::UnboundedSender<Msg>,
    rx: mpsc::UnboundedReceiver<Msg>,
}

impl<M: MapView> PageRuntime<M> {
    pub fn new(state: PageState, map: M) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state,
            map,
            bounds: BoundsSynchronizer::default(),
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    /// Fetches the feed once and folds the result into the page
    pub async fn load(&mut self, source: &dyn FeedSource) {
        let fetched = fetch_properties(source).await;
        self.dispatch(Msg::PropertiesLoaded(fetched));
    }

    /// Applies `msg` and runs its effects
    ///
    /// Must be called from within a tokio runtime; delayed effects are
    /// spawned as timer tasks.
    pub fn dispatch(&mut self, msg: Msg) {
        for effect in update(&mut self.state, msg) {
            match effect {
                Effect::FitMapBounds => {
                    self.bounds.sync(self.state.working(), &mut self.map);
                }
                Effect::ScheduleAcknowledgement(delay) => {
                    debug!("Acknowledging submission in {:?}", delay);
                    let tx = self.tx.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        // Receiver lives as long as the runtime; a send error
                        // only means the page is gone.
                        let _ = tx.send(Msg::SubmissionAcknowledged);
                    });
                }
            }
        }
    }

    /// Waits for the pending acknowledgment and applies it
    ///
    /// Returns false without waiting when no submission is in flight, since
    /// nothing would ever arrive on the channel.
    pub async fn process_next(&mut self) -> bool {
        if self.state.form().status != FormStatus::Submitting {
            return false;
        }
        match self.rx.recv().await {
            Some(msg) => {
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::fetcher::tests::{BrokenFeed, StaticFeed};
    use crate::map::{HeadlessMap, Viewport};
    use crate::models::{sample_property, LatLng, ListingStatus};
    use crate::page::lead_form::SIMULATED_ACK_DELAY;
    use crate::page::state::tests::complete_form_messages;
    use crate::showcase::featured_sold;
    use std::time::Duration;

    fn runtime() -> PageRuntime<HeadlessMap> {
        PageRuntime::new(PageState::new(featured_sold()), HeadlessMap::new(1024, 600))
    }

    #[tokio::test]
    async fn broken_feed_still_shows_featured_sales() {
        let mut page = runtime();
        page.load(&BrokenFeed).await;

        assert_eq!(page.state().working().properties(), featured_sold().as_slice());
        assert_ne!(page.map().viewport(), Viewport::default());
    }

    #[tokio::test]
    async fn map_follows_refreshed_working_set() {
        let mut page = PageRuntime::new(PageState::new(Vec::new()), HeadlessMap::new(1024, 600));

        page.load(&StaticFeed(vec![sample_property("no-geo", ListingStatus::Sold)])).await;
        assert_eq!(page.state().working().len(), 1);
        assert_eq!(page.map().viewport(), Viewport::default());

        let mut located = sample_property("geo", ListingStatus::Sold);
        located.lat = Some(38.88);
        located.lng = Some(-0.10);
        page.load(&StaticFeed(vec![located])).await;

        assert_eq!(page.map().viewport().center, LatLng::new(38.88, -0.10));
    }

    #[tokio::test(start_paused = true)]
    async fn submission_is_acknowledged_after_delay() {
        let mut page = runtime();
        for msg in complete_form_messages() {
            page.dispatch(msg);
        }
        let started = tokio::time::Instant::now();

        page.dispatch(Msg::SubmitForm);
        assert_eq!(page.state().form().status, FormStatus::Submitting);

        assert!(page.process_next().await);
        assert_eq!(page.state().form().status, FormStatus::Success);
        assert!(started.elapsed() >= SIMULATED_ACK_DELAY);
    }

    #[tokio::test]
    async fn nothing_pending_returns_immediately() {
        let mut page = runtime();

        let processed = tokio::time::timeout(Duration::from_secs(2), page.process_next())
            .await
            .expect("process_next waited with nothing in flight");
        assert!(!processed);

        page.dispatch(Msg::SubmitForm);
        assert!(!page.process_next().await);
        assert_eq!(page.state().form().status, FormStatus::Idle);
    }
}
