use std::sync::Arc;

use anyhow::Context;
use emberscope_core::{Action, ChannelDispatch, SessionSnapshot};
use emberscope_engine::{ApiRoutes, FetchCoordinator, FetchSettings, ReqwestFetcher};
use store_logging::{store_debug, store_info, store_warn};
use url::Url;

use super::logging::{self, LogDestination};
use super::persistence;

const SERVER_ENV: &str = "EMBERSCOPE_SERVER";
const DEFAULT_SERVER: &str = "http://localhost:4040";

/// Console driver: restore the previous session, refresh the name and
/// label lists from the server, and persist the session again. The real
/// reducers and widgets live in the host UI; this binary exercises the
/// store against a live server.
pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::Both);

    let state_dir = std::env::current_dir().context("resolve working directory")?;
    let mut session = persistence::load_session(&state_dir);

    let base: Url = std::env::var(SERVER_ENV)
        .unwrap_or_else(|_| DEFAULT_SERVER.to_string())
        .parse()
        .context("parse server url")?;
    store_info!("Using profiling server {}", base);

    let routes = ApiRoutes::new(base).context("build api routes")?;
    let fetcher = ReqwestFetcher::new(FetchSettings::default()).context("build http client")?;
    let coordinator = FetchCoordinator::new(routes, Arc::new(fetcher));
    let (dispatch, actions) = ChannelDispatch::pair();

    let runtime = tokio::runtime::Runtime::new().context("tokio runtime")?;
    runtime.block_on(async {
        coordinator.fetch_names(&dispatch).await;
        coordinator.fetch_tags(&dispatch, &session.query).await;
    });

    // Close the channel so the drain below terminates.
    drop(dispatch);
    drain_actions(actions, &mut session);

    persistence::save_session(&state_dir, &session);
    Ok(())
}

fn drain_actions(actions: std::sync::mpsc::Receiver<Action>, session: &mut SessionSnapshot) {
    for action in actions {
        session.absorb(&action);
        report(&action);
    }
}

fn report(action: &Action) {
    match action {
        Action::ReceiveNames { names } => {
            store_info!("{} application name(s) available", list_len(names));
        }
        Action::ReceiveTags { tags } => {
            store_info!("{} label(s) for the current query", list_len(tags));
        }
        Action::AddNotification(notification) => {
            store_warn!("{}: {}", notification.title, notification.message);
        }
        other => {
            store_debug!("action: {:?}", other);
        }
    }
}

fn list_len(data: &serde_json::Value) -> usize {
    data.as_array().map(|items| items.len()).unwrap_or(0)
}
