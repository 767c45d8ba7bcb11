//! Emberscope engine: fetch thunks and per-category request cancellation.
mod controllers;
mod fetch;
mod routes;
mod thunks;
mod types;

pub use controllers::{ControllerSlot, RequestControllers};
pub use fetch::{ApiFetcher, FetchSettings, ReqwestFetcher};
pub use routes::ApiRoutes;
pub use thunks::{notify_fetch_error, FetchCoordinator};
pub use types::{FailureKind, FetchError};
