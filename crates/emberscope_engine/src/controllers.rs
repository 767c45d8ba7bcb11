use std::sync::Mutex;

use emberscope_core::ViewSide;
use tokio_util::sync::CancellationToken;

/// The per-category cancellation slots. Each request category owns exactly
/// one live token at a time; single-view and comparison-diff requests
/// share the timeline slot, while the comparison panes get one slot per
/// side.
#[derive(Debug, Default)]
pub struct RequestControllers {
    timeline: ControllerSlot,
    comparison_left: ControllerSlot,
    comparison_right: ControllerSlot,
    tags: ControllerSlot,
    tag_values: ControllerSlot,
    names: ControllerSlot,
}

impl RequestControllers {
    pub fn timeline(&self) -> &ControllerSlot {
        &self.timeline
    }

    pub fn comparison(&self, side: ViewSide) -> &ControllerSlot {
        match side {
            ViewSide::Left => &self.comparison_left,
            ViewSide::Right => &self.comparison_right,
        }
    }

    pub fn tags(&self) -> &ControllerSlot {
        &self.tags
    }

    pub fn tag_values(&self) -> &ControllerSlot {
        &self.tag_values
    }

    pub fn names(&self) -> &ControllerSlot {
        &self.names
    }
}

/// Holder of one category's in-flight cancellation token.
#[derive(Debug, Default)]
pub struct ControllerSlot {
    current: Mutex<Option<CancellationToken>>,
}

impl ControllerSlot {
    /// Cancel whatever request is in flight and install a fresh token for
    /// the next one. The swap happens under the slot lock, so a stale
    /// abort of the predecessor can never hit the new request.
    pub fn begin(&self) -> CancellationToken {
        let mut current = self.current.lock().expect("controller slot lock");
        if let Some(previous) = current.take() {
            previous.cancel();
        }
        let token = CancellationToken::new();
        *current = Some(token.clone());
        token
    }

    /// Signal the in-flight request, if any. Cancellation is advisory: the
    /// request's future still runs to completion and self-checks its
    /// token before dispatching state.
    pub fn abort(&self) {
        if let Some(token) = self.current.lock().expect("controller slot lock").as_ref() {
            token.cancel();
        }
    }
}
