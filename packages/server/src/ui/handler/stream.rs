//! SSE streaming handler.
//!
//! Joining a match and receiving its events happen over the same long-lived
//! request: the handler seats the participant, then forwards their outbox as
//! an SSE stream until a resignation event arrives or the client goes away.
//! A vanished client is indistinguishable from a resignation, so stream
//! teardown resigns on the participant's behalf.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::sse::{Event, Sse},
    Json,
};
use futures_util::stream::{self, Stream};
use serde::Deserialize;
use tokio::time::{Interval, MissedTickBehavior};

use crate::{
    domain::{MatchId, OutboxReceiver, Side, Username},
    infrastructure::dto::{http::ErrorReason, sse::MatchEventDto},
    ui::state::AppState,
    usecase::{JoinMatchError, ResignMatchUseCase},
};

/// Interval between SSE keep-alive comments
const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(10);

/// Query parameters for joining a match
#[derive(Debug, Deserialize)]
pub struct JoinQuery {
    pub username: String,
    /// Play as black instead of white. Ignored unless you are the first joiner
    #[serde(default)]
    pub black_pieces: bool,
}

type ErrorResponse = (StatusCode, Json<ErrorReason>);

/// Join a match and receive its events as an SSE stream.
///
/// The first joiner picks their color via `black_pieces`; the second joiner
/// gets whatever is left. Each `data:` payload is a JSON-encoded
/// [`MatchEventDto`]; `: keep-alive` comment lines are interleaved every
/// 10 seconds. The stream ends after a `resigned` event.
pub async fn stream_match(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<JoinQuery>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ErrorResponse> {
    let match_id = MatchId::new(id).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorReason::new(e.to_string())),
        )
    })?;
    let username = Username::new(query.username).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorReason::new(e.to_string())),
        )
    })?;
    let requested_side = if query.black_pieces {
        Side::Black
    } else {
        Side::White
    };

    let seat = state
        .join_match_usecase
        .execute(&match_id, username.clone(), requested_side)
        .await
        .map_err(|e| match e {
            JoinMatchError::MatchNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorReason::new("match not found")),
            ),
            JoinMatchError::MatchFull => (
                StatusCode::FORBIDDEN,
                Json(ErrorReason::new("match is full")),
            ),
            JoinMatchError::UsernameTaken(_) => {
                (StatusCode::CONFLICT, Json(ErrorReason::new(e.to_string())))
            }
        })?;

    // Ensure the participant is resigned when this stream ends for any
    // reason: terminal event, client disconnect, or server shutdown.
    let guard = ResignOnDrop {
        resign_match_usecase: Arc::clone(&state.resign_match_usecase),
        match_id,
        username,
    };

    Ok(Sse::new(event_stream(seat.events, guard)))
}

/// State threaded through the unfolded SSE stream
struct EventStreamState {
    events: OutboxReceiver,
    keep_alive: Interval,
    finished: bool,
    _guard: ResignOnDrop,
}

/// Build the SSE stream for one participant.
///
/// Suspends on a three-way wait: the next outbox event, the keep-alive tick,
/// or cancellation (the connection dropping this stream). Whichever happens
/// first wins.
fn event_stream(
    events: OutboxReceiver,
    guard: ResignOnDrop,
) -> impl Stream<Item = Result<Event, Infallible>> {
    let mut keep_alive = tokio::time::interval(KEEP_ALIVE_INTERVAL);
    keep_alive.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // interval の初回 tick は即時なので 1 周期ぶん先送りする
    keep_alive.reset();

    let state = EventStreamState {
        events,
        keep_alive,
        finished: false,
        _guard: guard,
    };
    stream::unfold(state, |mut st| async move {
        if st.finished {
            return None;
        }
        loop {
            tokio::select! {
                maybe_event = st.events.recv() => {
                    // outbox が閉じた（対局が回収された）らストリームを終える
                    let event = maybe_event?;
                    st.finished = event.is_terminal();
                    match Event::default().json_data(MatchEventDto::from(event)) {
                        Ok(sse_event) => return Some((Ok(sse_event), st)),
                        Err(e) => {
                            // ループは壊さない。ログだけ残して次のイベントへ
                            tracing::warn!("failed to serialize match event: {}", e);
                            continue;
                        }
                    }
                }
                _ = st.keep_alive.tick() => {
                    return Some((Ok(Event::default().comment("keep-alive")), st));
                }
            }
        }
    })
}

/// Resigns the participant when dropped.
///
/// Dropping happens when the SSE stream ends, which unifies explicit
/// resignation, client disconnect, and request timeout into one terminal
/// transition. Resignation is idempotent, so double-firing is harmless.
struct ResignOnDrop {
    resign_match_usecase: Arc<ResignMatchUseCase>,
    match_id: MatchId,
    username: Username,
}

impl Drop for ResignOnDrop {
    fn drop(&mut self) {
        let usecase = Arc::clone(&self.resign_match_usecase);
        let match_id = self.match_id.clone();
        let username = self.username.clone();
        tokio::spawn(async move {
            usecase.execute(&match_id, &username).await;
        });
    }
}
