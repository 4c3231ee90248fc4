use crate::activities::activity_view;
use crate::errors::AppError;
use crate::form::ProductivityForm;
use crate::models::{
    FieldEditRequest, FieldStateResponse, FieldView, FormSnapshot, HealthResponse, SubmitResponse,
    VisualizationRequest,
};
use crate::schema::FIELD_SPECS;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let form = state.form.lock().await;
    Html(render_index(&snapshot_of(&form)))
}

pub async fn get_form(State(state): State<AppState>) -> Json<FormSnapshot> {
    let form = state.form.lock().await;
    Json(snapshot_of(&form))
}

pub async fn set_field(
    State(state): State<AppState>,
    Json(payload): Json<FieldEditRequest>,
) -> Result<Json<FieldStateResponse>, AppError> {
    let mut form = state.form.lock().await;
    let error = form.set_field(&payload.key, &payload.value)?;
    let value = form.value_of(&payload.key).unwrap_or_default();
    Ok(Json(FieldStateResponse {
        key: payload.key,
        value,
        error,
    }))
}

pub async fn submit(State(state): State<AppState>) -> Result<Json<SubmitResponse>, AppError> {
    // Take the lock only to gate and snapshot; the in-flight flag, not the
    // mutex, covers the outbound await.
    let payload = {
        let mut form = state.form.lock().await;
        form.begin_submit()?
    };

    let result = state.predictor.predict(&payload).await;
    state.form.lock().await.finish_submit();

    match result {
        Ok(prediction) => {
            info!(prediction, "prediction received");
            Ok(Json(SubmitResponse {
                prediction,
                activity: activity_view(prediction),
            }))
        }
        Err(err) => {
            warn!("prediction request failed: {err}");
            Err(err.into())
        }
    }
}

pub async fn visualize(
    State(state): State<AppState>,
    Json(request): Json<VisualizationRequest>,
) -> Result<Response, AppError> {
    let kind = request.graph_type;
    let has_second = request
        .column2
        .as_deref()
        .is_some_and(|column| !column.trim().is_empty());
    if kind.requires_second_column() && !has_second {
        return Err(AppError::bad_request(format!(
            "Column2 is required for {} charts",
            kind.as_str()
        )));
    }

    // Single-column kinds must not carry a second column on the wire.
    let outbound = VisualizationRequest {
        graph_type: kind,
        column1: request.column1,
        column2: request.column2.filter(|_| kind.requires_second_column()),
    };

    match state.predictor.visualize(&outbound).await {
        Ok(image) => {
            info!(
                graph = kind.as_str(),
                bytes = image.len(),
                "chart rendered"
            );
            Ok(([(header::CONTENT_TYPE, "image/png")], image).into_response())
        }
        Err(err) => {
            warn!("visualization request failed: {err}");
            Err(err.into())
        }
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let predictor_reachable = state.predictor.health().await.is_ok();
    Json(HealthResponse {
        status: "ok",
        predictor_reachable,
    })
}

fn snapshot_of(form: &ProductivityForm) -> FormSnapshot {
    FormSnapshot {
        fields: FIELD_SPECS
            .iter()
            .map(|spec| FieldView {
                key: spec.key,
                label: spec.label,
                description: spec.description,
                min: spec.min,
                max: spec.max,
                value: form.value_of(spec.key).unwrap_or(spec.default),
                error: form.error_of(spec.key).map(str::to_string),
            })
            .collect(),
        in_flight: form.in_flight(),
    }
}
