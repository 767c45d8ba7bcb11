use serde_json::Value;
use url::Url;

use crate::{Notification, ViewSide};

/// A state transition dispatched to the store.
///
/// Every variant is a tagged record whose payload is shaped for that tag.
/// Construction is pure and performs no validation; callers are trusted to
/// supply well-formed values (valid date boundaries, non-empty queries).
/// Data payloads carry the decoded response body opaquely, the reducers
/// know the concrete shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Move the global date range.
    SetDateRange { from: String, until: String },
    /// Move the left comparison pane's date range.
    SetLeftDateRange { from: String, until: String },
    /// Move the right comparison pane's date range.
    SetRightDateRange { from: String, until: String },
    SetFrom { from: String },
    SetLeftFrom { from: String },
    SetRightFrom { from: String },
    SetUntil { until: String },
    SetLeftUntil { until: String },
    SetRightUntil { until: String },
    /// Cap on rendered flamegraph nodes.
    SetMaxNodes { max_nodes: u32 },
    /// Replace the profile selection query.
    SetQuery { query: String },
    /// Select an uploaded profile for the single view.
    SetFile { file: String, flamebearer: Value },
    SetLeftFile { file: String, flamebearer: Value },
    SetRightFile { file: String, flamebearer: Value },
    /// Generic refresh trigger for the current render URL.
    Refresh { url: Url },

    /// Timeline request started.
    RequestTimeline { url: Url },
    /// Timeline response decoded.
    ReceiveTimeline { data: Value },

    /// Single-view profiling data request started.
    RequestSingleViewData { url: Url },
    ReceiveSingleViewData { data: Value },
    /// Terminal reset of the single view's loading state.
    CancelSingleViewData,

    /// Comparison pane request started.
    RequestComparisonData { url: Url, side: ViewSide },
    ReceiveComparisonData { data: Value, side: ViewSide },
    /// Terminal reset of the comparison panes' loading state.
    CancelComparisonData,

    RequestComparisonDiffData { url: Url },
    ReceiveComparisonDiffData { data: Value },
    CancelComparisonDiffData,

    /// Label list request started.
    RequestTags,
    ReceiveTags { tags: Value },

    /// Values-for-one-label request started.
    RequestTagValues { tag: String },
    ReceiveTagValues { values: Value, tag: String },

    /// Application names request started.
    RequestNames,
    ReceiveNames { names: Value },

    /// Surface a transient notification to the user.
    AddNotification(Notification),
}
