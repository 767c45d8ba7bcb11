use std::sync::mpsc;

use crate::Action;

/// Seam to the external reducer/store: thunks hand every state transition
/// to a dispatcher and never observe what the store does with it.
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, action: Action);
}

/// Dispatcher backed by a standard channel, for hosts that drain actions on
/// their own loop.
pub struct ChannelDispatch {
    tx: mpsc::Sender<Action>,
}

impl ChannelDispatch {
    pub fn new(tx: mpsc::Sender<Action>) -> Self {
        Self { tx }
    }

    /// Convenience constructor returning the dispatcher with its receiver.
    pub fn pair() -> (Self, mpsc::Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        (Self::new(tx), rx)
    }
}

impl Dispatch for ChannelDispatch {
    fn dispatch(&self, action: Action) {
        // A closed receiver means the consuming view is gone; drop the action.
        let _ = self.tx.send(action);
    }
}
