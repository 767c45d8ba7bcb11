use std::sync::Arc;

use emberscope_core::{Action, Dispatch, Notification, ViewSide};
use serde_json::Value;
use store_logging::store_warn;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{ApiFetcher, ApiRoutes, FailureKind, FetchError, RequestControllers};

/// Owns the cancellation slots and the HTTP seam. One instance lives in
/// the composing application layer; every thunk invocation goes through
/// it, so there is no hidden module-level state.
pub struct FetchCoordinator {
    routes: ApiRoutes,
    fetcher: Arc<dyn ApiFetcher>,
    controllers: RequestControllers,
}

impl FetchCoordinator {
    pub fn new(routes: ApiRoutes, fetcher: Arc<dyn ApiFetcher>) -> Self {
        Self {
            routes,
            fetcher,
            controllers: RequestControllers::default(),
        }
    }

    /// Fetch timeline data for the caller-supplied render URL.
    pub async fn fetch_timeline(&self, dispatch: &dyn Dispatch, url: &Url) {
        let cancel = self.controllers.timeline().begin();
        dispatch.dispatch(Action::RequestTimeline { url: url.clone() });

        let result = self
            .fetcher
            .get_json(ApiRoutes::render(url), cancel.clone())
            .await;
        match settle(result, &cancel) {
            Ok(data) => dispatch.dispatch(Action::ReceiveTimeline { data }),
            Err(error) => notify_fetch_error(dispatch, &error),
        }
    }

    /// Fetch profiling data for the single view. Shares the timeline slot:
    /// the main-view screens are mutually exclusive, so any of them
    /// supersedes the others' in-flight request.
    pub async fn fetch_single_view_data(&self, dispatch: &dyn Dispatch, url: &Url) {
        let cancel = self.controllers.timeline().begin();
        dispatch.dispatch(Action::RequestSingleViewData { url: url.clone() });

        let result = self
            .fetcher
            .get_json(ApiRoutes::render(url), cancel.clone())
            .await;
        match settle(result, &cancel) {
            Ok(data) => dispatch.dispatch(Action::ReceiveSingleViewData { data }),
            Err(error) => notify_fetch_error(dispatch, &error),
        }
        // Always clear the view-local loading flag, even after cancellation.
        dispatch.dispatch(Action::CancelSingleViewData);
    }

    /// Fetch profiling data for one comparison pane. Each side owns its
    /// slot, so the panes can load concurrently without superseding each
    /// other.
    pub async fn fetch_comparison_data(&self, dispatch: &dyn Dispatch, url: &Url, side: ViewSide) {
        let cancel = self.controllers.comparison(side).begin();
        dispatch.dispatch(Action::RequestComparisonData {
            url: url.clone(),
            side,
        });

        let result = self
            .fetcher
            .get_json(ApiRoutes::render(url), cancel.clone())
            .await;
        match settle(result, &cancel) {
            Ok(data) => dispatch.dispatch(Action::ReceiveComparisonData { data, side }),
            Err(error) => notify_fetch_error(dispatch, &error),
        }
        dispatch.dispatch(Action::CancelComparisonData);
    }

    /// Fetch the diff between the two comparison selections.
    pub async fn fetch_comparison_diff_data(&self, dispatch: &dyn Dispatch, url: &Url) {
        let cancel = self.controllers.timeline().begin();
        dispatch.dispatch(Action::RequestComparisonDiffData { url: url.clone() });

        let result = self
            .fetcher
            .get_json(ApiRoutes::render(url), cancel.clone())
            .await;
        match settle(result, &cancel) {
            Ok(data) => dispatch.dispatch(Action::ReceiveComparisonDiffData { data }),
            Err(error) => notify_fetch_error(dispatch, &error),
        }
        dispatch.dispatch(Action::CancelComparisonDiffData);
    }

    /// Fetch the label list for the profiles matched by `query`.
    pub async fn fetch_tags(&self, dispatch: &dyn Dispatch, query: &str) {
        let cancel = self.controllers.tags().begin();
        dispatch.dispatch(Action::RequestTags);

        let result = self
            .fetcher
            .get_json(self.routes.labels(query), cancel.clone())
            .await;
        match settle(result, &cancel) {
            Ok(tags) => dispatch.dispatch(Action::ReceiveTags { tags }),
            Err(error) => notify_fetch_error(dispatch, &error),
        }
    }

    /// Fetch the values of one label within the profiles matched by
    /// `query`.
    pub async fn fetch_tag_values(&self, dispatch: &dyn Dispatch, query: &str, tag: &str) {
        let cancel = self.controllers.tag_values().begin();
        dispatch.dispatch(Action::RequestTagValues {
            tag: tag.to_string(),
        });

        let result = self
            .fetcher
            .get_json(self.routes.label_values(tag, query), cancel.clone())
            .await;
        match settle(result, &cancel) {
            Ok(values) => dispatch.dispatch(Action::ReceiveTagValues {
                values,
                tag: tag.to_string(),
            }),
            Err(error) => notify_fetch_error(dispatch, &error),
        }
    }

    /// Fetch the application names known to the server.
    pub async fn fetch_names(&self, dispatch: &dyn Dispatch) {
        let cancel = self.controllers.names().begin();
        dispatch.dispatch(Action::RequestNames);

        let result = self
            .fetcher
            .get_json(self.routes.names(), cancel.clone())
            .await;
        match settle(result, &cancel) {
            Ok(names) => dispatch.dispatch(Action::ReceiveNames { names }),
            Err(error) => notify_fetch_error(dispatch, &error),
        }
    }

    pub fn abort_timeline_request(&self) {
        self.controllers.timeline().abort();
    }

    pub fn abort_fetch_tags(&self) {
        self.controllers.tags().abort();
    }

    pub fn abort_fetch_tag_values(&self) {
        self.controllers.tag_values().abort();
    }

    pub fn abort_fetch_names(&self) {
        self.controllers.names().abort();
    }
}

/// A superseded request can still win the race to completion; its payload
/// must never reach the store. The check uses the token held for this
/// request, not the slot's current occupant.
fn settle(
    result: Result<Value, FetchError>,
    cancel: &CancellationToken,
) -> Result<Value, FetchError> {
    match result {
        Ok(_) if cancel.is_cancelled() => Err(FetchError::cancelled()),
        other => other,
    }
}

/// Turn a fetch failure into a user-facing notification. Cancellations
/// are expected and swallowed; bad statuses surface the code; anything
/// else surfaces the underlying message verbatim.
pub fn notify_fetch_error(dispatch: &dyn Dispatch, error: &FetchError) {
    match error.kind {
        FailureKind::Cancelled => {}
        FailureKind::HttpStatus(code) => {
            store_warn!("request rejected with status {}", code);
            dispatch.dispatch(Action::AddNotification(Notification::danger(
                "Request Failed",
                format!("Failed to request profile data: status {code}"),
            )));
        }
        _ => {
            store_warn!("request failed: {}", error);
            dispatch.dispatch(Action::AddNotification(Notification::danger(
                "Error",
                error.message.clone(),
            )));
        }
    }
}
