//! Action runtime: drives [`handle_event`] and executes the resulting actions.
//!
//! Worker requests run to completion inside [`dispatch`], and their responses
//! are queued as events, so one call settles the whole cascade (for example a
//! credential submission followed by the company listing).

use crate::api::ResourceFetcher;
use crate::app::{handle_event, Action, AppState, Event};
use crate::domain::error::Result;
use crate::domain::Credentials;
use crate::worker::{ExplorerWorker, WorkerMessage, WorkerResponse};
use std::collections::VecDeque;

/// Processes `event` and every event its actions produce.
///
/// `connect` builds a fetcher from the credentials current at the time each
/// request is executed. Returns whether any step asked for a redraw.
///
/// # Errors
///
/// Returns event handling errors and session store failures. Request
/// failures are not errors here; they arrive as error responses.
pub async fn dispatch<F, C>(state: &mut AppState, event: Event, connect: &C) -> Result<bool>
where
    F: ResourceFetcher,
    C: Fn(&Credentials) -> Result<F>,
{
    let mut queue = VecDeque::from([event]);
    let mut should_render = false;

    while let Some(event) = queue.pop_front() {
        let (render, actions) = handle_event(state, &event)?;
        tracing::debug!(action_count = actions.len(), should_render = render, "event handled");
        should_render |= render;

        for action in actions {
            if let Some(response) = execute_action(state, action, connect).await? {
                queue.push_back(Event::WorkerResponse(response));
            }
        }
    }

    Ok(should_render)
}

#[tracing::instrument(level = "debug", skip(state, connect))]
async fn execute_action<F, C>(state: &mut AppState, action: Action, connect: &C) -> Result<Option<WorkerResponse>>
where
    F: ResourceFetcher,
    C: Fn(&Credentials) -> Result<F>,
{
    match action {
        Action::PersistCredentials => {
            state.credentials.persist()?;
            Ok(None)
        }
        Action::ClearSession => {
            state.credentials.clear()?;
            Ok(None)
        }
        Action::PostToWorker(message) => Ok(Some(run_worker(state.credentials.credentials(), message, connect).await)),
    }
}

async fn run_worker<F, C>(credentials: &Credentials, message: WorkerMessage, connect: &C) -> WorkerResponse
where
    F: ResourceFetcher,
    C: Fn(&Credentials) -> Result<F>,
{
    match connect(credentials) {
        Ok(fetcher) => ExplorerWorker::new(fetcher).handle_message(message).await,
        Err(e) => {
            tracing::warn!(error = %e, "could not build the API client");
            WorkerResponse::Error {
                request: message.kind(),
                message: e.to_string(),
            }
        }
    }
}
