//! Results delivered to the UI loop by background tasks

use crate::api::{ApiResult, RegisteredAccount};
use crate::state::{OptionEntry, OptionKind};
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum AppEvent {
    /// One reference list fetch completed
    OptionsLoaded {
        kind: OptionKind,
        result: ApiResult<Vec<OptionEntry>>,
    },
    /// The in-flight signup request completed
    SignupFinished(ApiResult<RegisteredAccount>),
}

pub type EventSender = mpsc::UnboundedSender<AppEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<AppEvent>;

pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
