//! Option loader
//!
//! Fetches the three reference lists concurrently. Each fetch reports on its
//! own, so a slow or failing list never holds up the others.

use crate::api::RegistrationApi;
use crate::events::{AppEvent, EventSender};
use crate::state::OptionKind;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Spawn one fetch task per reference list
pub fn spawn_option_loads(
    api: Arc<dyn RegistrationApi>,
    tx: EventSender,
) -> Vec<JoinHandle<()>> {
    OptionKind::ALL
        .into_iter()
        .map(|kind| {
            let api = Arc::clone(&api);
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = api.fetch_options(kind).await;
                if let Err(e) = &result {
                    tracing::warn!("Failed to load {}: {e}", kind.label());
                }
                if tx.send(AppEvent::OptionsLoaded { kind, result }).is_err() {
                    tracing::debug!("Dropping {} result: app has shut down", kind.label());
                }
            })
        })
        .collect()
}
