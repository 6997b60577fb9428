//! Session coordinator: wires the state machine, the protocol client,
//! and the view together.

use crate::format::format_path;
use crate::reducer;
use crate::reducer::SummaryBatch;
use crate::state::NavigationState;
use crate::view::MenuEntry;
use crate::view::NavigatorView;
use castanet_client::CastanetClient;
use castanet_client::ClientError;
use castanet_protocol::FileSummary;
use castanet_protocol::SynsetId;
use tokio::task::JoinSet;
use tracing::debug;
use tracing::warn;

/// What the user picked in the menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The "previous" sentinel: ascend one level.
    Previous,
    /// A real child: descend into it.
    Child(SynsetId),
}

impl From<&MenuEntry> for Selection {
    fn from(entry: &MenuEntry) -> Self {
        match entry {
            MenuEntry::Previous => Self::Previous,
            MenuEntry::Child { id, .. } => Self::Child(id.clone()),
        }
    }
}

struct SummaryOutcome {
    epoch: u64,
    file: String,
    result: Result<FileSummary, ClientError>,
}

/// Owns the navigation state for one page session and drives the view.
///
/// State mutation and the breadcrumb re-render happen synchronously in
/// `select`; the navigate request and the per-file summary fan-out are
/// asynchronous. Summaries are appended in arrival order, which may
/// differ from request order. A navigation that supersedes an earlier
/// one aborts that batch, and any straggler carrying a stale epoch is
/// discarded instead of rendered.
pub struct NavSession<V: NavigatorView> {
    state: NavigationState,
    client: CastanetClient,
    view: V,
    summaries: JoinSet<SummaryOutcome>,
}

impl<V: NavigatorView> NavSession<V> {
    pub fn new(client: CastanetClient, view: V) -> Self {
        Self {
            state: NavigationState::new(),
            client,
            view,
            summaries: JoinSet::new(),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Initial load: reset to the root and request it.
    pub async fn start(&mut self) {
        self.state.reset();
        self.render_breadcrumb();
        self.load_current().await;
    }

    /// Apply a menu selection: mutate the path, re-render the breadcrumb
    /// immediately, then request the new location. If the navigate
    /// request fails, the path is rolled back to the last confirmed
    /// location and the error is surfaced; the keyword context is only
    /// touched on success.
    pub async fn select(&mut self, selection: Selection) {
        let confirmed = self.state.clone();
        match selection {
            Selection::Previous => {
                self.state.pop();
            }
            Selection::Child(id) => self.state.push(id),
        }
        self.render_breadcrumb();
        if !self.load_current().await {
            // Roll back to the last server-confirmed state, epoch
            // included, so summaries already in flight stay valid.
            self.state = confirmed;
            self.render_breadcrumb();
        }
    }

    /// Await every in-flight summary of the current batch, applying each
    /// as it arrives. Failures are surfaced through the view, stale
    /// epochs are dropped.
    pub async fn drain_summaries(&mut self) {
        while let Some(joined) = self.summaries.join_next().await {
            match joined {
                Ok(outcome) => self.apply_summary(outcome),
                // Aborted by a superseding navigation.
                Err(err) if err.is_cancelled() => continue,
                Err(err) => self.view.show_error("summary task", &err),
            }
        }
    }

    pub fn has_pending_summaries(&self) -> bool {
        !self.summaries.is_empty()
    }

    async fn load_current(&mut self) -> bool {
        match self.client.navigate(self.state.path()).await {
            Ok(response) => {
                self.summaries.abort_all();
                let batch = reducer::apply(&mut self.state, &response, &mut self.view);
                self.spawn_summaries(batch);
                true
            }
            Err(err) => {
                warn!(pathway = %self.state.path().to_pathway(), %err, "navigate failed");
                self.view.show_error("navigate", &err);
                false
            }
        }
    }

    fn spawn_summaries(&mut self, batch: SummaryBatch) {
        for file in batch.files {
            let client = self.client.clone();
            let keywords = batch.keywords.clone();
            let epoch = batch.epoch;
            self.summaries.spawn(async move {
                let result = client.summarize(&file, &keywords).await;
                SummaryOutcome {
                    epoch,
                    file,
                    result,
                }
            });
        }
    }

    fn apply_summary(&mut self, outcome: SummaryOutcome) {
        if outcome.epoch != self.state.epoch() {
            debug!(file = %outcome.file, "discarding summary from a superseded navigation");
            return;
        }
        match outcome.result {
            Ok(summary) => self.view.push_file_summary(&summary),
            Err(err) => {
                warn!(file = %outcome.file, %err, "summarize failed");
                self.view
                    .show_error(&format!("summarize {}", outcome.file), &err);
            }
        }
    }

    fn render_breadcrumb(&mut self) {
        let breadcrumb = format_path(self.state.path());
        self.view.set_breadcrumb(&breadcrumb);
    }
}
