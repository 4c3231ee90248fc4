use serde::{Deserialize, Serialize};

/// Payload for `POST /predict`. Field names must match the service's model
/// columns exactly, including the awkward `Week(day/end)` one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    #[serde(rename = "Mood")]
    pub mood: f64,
    #[serde(rename = "Hour")]
    pub hour: f64,
    #[serde(rename = "Week(day/end)")]
    pub weekend: f64,
    #[serde(rename = "SleepHours")]
    pub sleep_hours: f64,
    #[serde(rename = "Distractions")]
    pub distractions: f64,
    #[serde(rename = "ConfidenceScore")]
    pub confidence_score: f64,
    #[serde(rename = "Completed")]
    pub completed: f64,
    #[serde(rename = "DayOfWeek")]
    pub day_of_week: f64,
}

#[derive(Debug, Deserialize)]
pub struct PredictionResponse {
    pub prediction: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    Histogram,
    Bar,
    Scatter,
    Heatmap,
}

impl GraphKind {
    /// Bar and scatter charts plot one column against another; the rest use
    /// a single column (or none, for the heatmap).
    pub fn requires_second_column(self) -> bool {
        matches!(self, GraphKind::Bar | GraphKind::Scatter)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GraphKind::Histogram => "histogram",
            GraphKind::Bar => "bar",
            GraphKind::Scatter => "scatter",
            GraphKind::Heatmap => "heatmap",
        }
    }
}

/// Payload for `POST /visualize`, also accepted verbatim from the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizationRequest {
    #[serde(rename = "graphType")]
    pub graph_type: GraphKind,
    pub column1: String,
    pub column2: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FieldView {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub min: f64,
    pub max: f64,
    pub value: f64,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FormSnapshot {
    pub fields: Vec<FieldView>,
    pub in_flight: bool,
}

#[derive(Debug, Deserialize)]
pub struct FieldEditRequest {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct FieldStateResponse {
    pub key: String,
    pub value: f64,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ActivityView {
    pub id: i64,
    pub name: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
    pub tips: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub prediction: i64,
    pub activity: Option<ActivityView>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub predictor_reachable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_request_uses_model_column_names() {
        let request = PredictionRequest {
            mood: 5.0,
            hour: 14.0,
            weekend: 0.0,
            sleep_hours: 7.0,
            distractions: 2.0,
            confidence_score: 6.0,
            completed: 1.0,
            day_of_week: 2.0,
        };

        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        for key in [
            "Mood",
            "Hour",
            "Week(day/end)",
            "SleepHours",
            "Distractions",
            "ConfidenceScore",
            "Completed",
            "DayOfWeek",
        ] {
            assert!(object.contains_key(key), "missing column {key}");
        }
        assert_eq!(object.len(), 8);
    }

    #[test]
    fn visualization_request_wire_format() {
        let request = VisualizationRequest {
            graph_type: GraphKind::Histogram,
            column1: "Mood".to_string(),
            column2: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["graphType"], "histogram");
        assert_eq!(value["column1"], "Mood");
        assert!(value["column2"].is_null());
    }

    #[test]
    fn graph_kinds_needing_two_columns() {
        assert!(GraphKind::Bar.requires_second_column());
        assert!(GraphKind::Scatter.requires_second_column());
        assert!(!GraphKind::Histogram.requires_second_column());
        assert!(!GraphKind::Heatmap.requires_second_column());
    }

    #[test]
    fn prediction_response_parses() {
        let parsed: PredictionResponse = serde_json::from_str(r#"{"prediction": 2}"#).unwrap();
        assert_eq!(parsed.prediction, 2);
    }
}
