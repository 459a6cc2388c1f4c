use crate::errors::AppError;
use crate::form::PointForm;
use crate::grid::GridCell;
use crate::layout::{self, MONTH_LABELS, SURFACE_HEIGHT, SURFACE_WIDTH, WEEKDAY_LABELS};
use crate::models::{CellQuery, CellView, DataPoint, GridResponse, MonthView, PointRequest, PointerQuery};
use crate::palette::color_for;
use crate::state::AppState;
use crate::tooltip::{Pointer, Tooltip};
use crate::ui::render_index;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let heatmap = state.heatmap.lock().await;
    Html(render_index(&heatmap, None))
}

pub async fn submit_point(State(state): State<AppState>, Form(form): Form<PointForm>) -> Response {
    let mut heatmap = state.heatmap.lock().await;
    match form.validate() {
        Ok(point) => {
            heatmap.push(point);
            info!(date = %point.date, count = point.count, "point added");
            Redirect::to("/").into_response()
        }
        Err(err) => {
            warn!("form is not valid: {err}");
            let page = render_index(&heatmap, Some(&err.to_string()));
            (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response()
        }
    }
}

pub async fn heatmap_svg(State(state): State<AppState>) -> impl IntoResponse {
    let heatmap = state.heatmap.lock().await;
    ([(header::CONTENT_TYPE, "image/svg+xml")], heatmap.svg())
}

pub async fn list_points(State(state): State<AppState>) -> Json<Vec<DataPoint>> {
    let heatmap = state.heatmap.lock().await;
    Json(heatmap.points().to_vec())
}

pub async fn add_point(
    State(state): State<AppState>,
    payload: Result<Json<PointRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DataPoint>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!("rejected point body: {rejection}");
        AppError::bad_request(rejection.body_text())
    })?;
    let point = PointForm::from(payload).validate().inspect_err(|err| {
        warn!("rejected point: {err}");
    })?;

    let mut heatmap = state.heatmap.lock().await;
    heatmap.push(point);
    info!(date = %point.date, count = point.count, "point added");

    Ok((StatusCode::CREATED, Json(point)))
}

pub async fn get_grid(State(state): State<AppState>) -> Json<GridResponse> {
    let heatmap = state.heatmap.lock().await;
    let months = heatmap
        .grid()
        .months()
        .iter()
        .enumerate()
        .map(|(month, column)| MonthView {
            month,
            label: MONTH_LABELS[month].to_string(),
            cells: column.iter().map(cell_view).collect(),
        })
        .collect();

    Json(GridResponse {
        width: SURFACE_WIDTH,
        height: SURFACE_HEIGHT,
        months,
    })
}

pub async fn get_tooltip(
    State(state): State<AppState>,
    Query(query): Query<PointerQuery>,
) -> Json<Tooltip> {
    let pointer = Pointer {
        x: query.x,
        y: query.y,
        client_x: query.client_x.unwrap_or(query.x),
        client_y: query.client_y.unwrap_or(query.y),
    };
    let heatmap = state.heatmap.lock().await;
    Json(heatmap.tooltip(pointer))
}

pub async fn get_cell(
    State(state): State<AppState>,
    Query(query): Query<CellQuery>,
) -> Json<Option<CellView>> {
    let heatmap = state.heatmap.lock().await;
    Json(heatmap.cell_at(query.x, query.y).map(cell_view))
}

fn cell_view(cell: &GridCell) -> CellView {
    CellView {
        weekday: cell.weekday,
        label: WEEKDAY_LABELS[cell.weekday].to_string(),
        date: cell.point.date.to_string(),
        count: cell.point.count,
        color: color_for(cell.point.count).to_string(),
        synthesized: cell.synthesized,
        rect: layout::cell_rect(cell.month, cell.weekday),
    }
}
