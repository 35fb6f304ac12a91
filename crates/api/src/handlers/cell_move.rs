//! Handlers for cell move date/time plumbing.
//!
//! The move form captures the occurrence date and time as separate fields;
//! the history screen searches the upstream API by day. Both conversions go
//! through `cellmove_core::datetime` so the wire and display formats stay
//! in one place.

use axum::extract::Query;
use axum::Json;
use cellmove_core::datetime::{self, DateTimeInput};
use cellmove_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;

// ---------------------------------------------------------------------------
// Occurrence
// ---------------------------------------------------------------------------

/// Canonical timestamp plus the display forms the confirmation page shows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    /// Wire timestamp submitted to the upstream API.
    pub occurred_at: String,
    /// `DD/MM/YYYY`.
    pub date: String,
    /// Full weekday name.
    pub day: String,
    /// `HH:mm`.
    pub time: String,
}

/// POST /api/v1/cell-moves/occurrence
///
/// Validate and assemble the "when did this move happen" form fields into a
/// single timestamp. Incomplete or unparsable fields are a 400, not a 500:
/// the form re-renders with the validation message.
pub async fn occurrence(Json(input): Json<DateTimeInput>) -> AppResult<Json<DataResponse<Occurrence>>> {
    let Some(wire) = datetime::compose_timestamp(&input).as_ref().map(datetime::for_wire) else {
        return Err(CoreError::Validation(
            "Occurrence date and time must be a valid date plus numeric hours and minutes".into(),
        )
        .into());
    };

    // The display forms derive from a timestamp we just built, so a blank
    // here is unreachable; unwrap_or_default keeps the handler total anyway.
    let occurrence = Occurrence {
        date: datetime::day_month_year(&wire).unwrap_or_default(),
        day: datetime::weekday_name(&wire).unwrap_or_default(),
        time: datetime::time_of_day(&wire).unwrap_or_default(),
        occurred_at: wire,
    };

    Ok(Json(DataResponse { data: occurrence }))
}

// ---------------------------------------------------------------------------
// Search window
// ---------------------------------------------------------------------------

/// Query parameters for the history search window (`?date=DD/MM/YYYY`).
#[derive(Debug, Deserialize)]
pub struct SearchWindowParams {
    pub date: String,
}

/// Start/end-of-day pair bounding an upstream history search.
#[derive(Debug, Serialize)]
pub struct SearchWindow {
    /// Wire timestamp at `00:00:00` on the requested day.
    pub from: String,
    /// Wire timestamp at `23:59:59` on the requested day.
    pub to: String,
}

/// GET /api/v1/cell-moves/search-window
///
/// Expand a display date into the wire-format day boundaries the upstream
/// history endpoint filters on.
pub async fn search_window(
    Query(params): Query<SearchWindowParams>,
) -> AppResult<Json<DataResponse<SearchWindow>>> {
    let from = datetime::start_of_day_iso(&params.date, datetime::DISPLAY_DATE_FORMAT);
    let to = datetime::end_of_day_iso(&params.date, datetime::DISPLAY_DATE_FORMAT);

    let (Some(from), Some(to)) = (from, to) else {
        return Err(CoreError::Validation(format!(
            "'{}' is not a valid DD/MM/YYYY date",
            params.date
        ))
        .into());
    };

    Ok(Json(DataResponse {
        data: SearchWindow { from, to },
    }))
}
