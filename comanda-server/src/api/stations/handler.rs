//! Station API Handlers

use axum::{
    Json,
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures::{Stream, StreamExt};
use shared::models::{Station, StationRow};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// SSE event name carrying the full row list
const ROWS_EVENT: &str = "rows";

fn parse_station(slug: &str) -> AppResult<Station> {
    Station::from_slug(slug).ok_or_else(|| AppError::not_found(format!("Station {slug}")))
}

/// GET /api/stations/:station - 当前出品行
pub async fn rows(
    State(state): State<ServerState>,
    Path(station): Path<String>,
) -> AppResult<Json<Vec<StationRow>>> {
    let view = state.station_view(parse_station(&station)?);
    Ok(Json(view.current(&state.feed)?))
}

/// GET /api/stations/:station/live - 实时出品行 (SSE)
pub async fn live(
    State(state): State<ServerState>,
    Path(station): Path<String>,
) -> AppResult<Sse<impl Stream<Item = Result<Event, axum::Error>>>> {
    let station = parse_station(&station)?;
    let rows = state.station_view(station).live(state.feed.clone())?;
    tracing::info!(?station, "Station display connected");

    let events = rows
        .map(|rows| Event::default().event(ROWS_EVENT).json_data(rows))
        .take_until(state.shutdown.clone().cancelled_owned());
    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}
