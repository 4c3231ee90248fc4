use crate::models::PredictionRequest;
use crate::schema::{self, FIELD_SPECS};
use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please fix the errors before submitting.")]
    ValidationPending,
    #[error("A prediction request is already in flight.")]
    AlreadyInFlight,
}

/// Current state of the input form: one numeric value and one optional
/// validation error per schema field, plus the prediction in-flight flag.
///
/// Validation is per-field and local; bounds are inclusive. The in-flight
/// flag is what serializes submissions, so callers must not hold the form
/// locked across the outbound request.
#[derive(Debug, Clone)]
pub struct ProductivityForm {
    values: BTreeMap<&'static str, f64>,
    errors: BTreeMap<&'static str, Option<String>>,
    in_flight: bool,
}

impl ProductivityForm {
    pub fn new() -> Self {
        Self::seeded_at(Local::now().naive_local())
    }

    /// Every field at its schema default.
    pub fn with_defaults() -> Self {
        let mut values = BTreeMap::new();
        let mut errors = BTreeMap::new();
        for spec in FIELD_SPECS {
            values.insert(spec.key, spec.default);
            errors.insert(spec.key, None);
        }
        Self {
            values,
            errors,
            in_flight: false,
        }
    }

    /// Schema defaults, except the clock-derived fields (`Hour`,
    /// `DayOfWeek`, `Week(day/end)`) which reflect `now`.
    pub fn seeded_at(now: NaiveDateTime) -> Self {
        let mut form = Self::with_defaults();
        let weekday = now.weekday().num_days_from_monday();
        form.values.insert("Hour", f64::from(now.hour()));
        form.values.insert("DayOfWeek", f64::from(weekday));
        form.values
            .insert("Week(day/end)", if weekday >= 5 { 1.0 } else { 0.0 });
        form
    }

    /// Parses `raw` and revalidates that one field against its bounds;
    /// every other field is left untouched. Input that does not parse as a
    /// number keeps the previous value and fails validation the same way an
    /// out-of-range number does. Returns the field's new error state.
    pub fn set_field(&mut self, key: &str, raw: &str) -> Result<Option<String>, FormError> {
        let spec =
            schema::spec_for(key).ok_or_else(|| FormError::UnknownField(key.to_string()))?;

        let parsed = raw.trim().parse::<f64>().ok().filter(|value| value.is_finite());
        let error = match parsed {
            Some(value) if value >= spec.min && value <= spec.max => None,
            _ => Some(format!(
                "Value must be between {} and {}",
                spec.min, spec.max
            )),
        };

        if let Some(value) = parsed {
            self.values.insert(spec.key, value);
        }
        self.errors.insert(spec.key, error.clone());
        Ok(error)
    }

    pub fn value_of(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn error_of(&self, key: &str) -> Option<&str> {
        self.errors.get(key).and_then(|error| error.as_deref())
    }

    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|error| error.is_some())
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Gate for submission: refuses while any field holds an error or a
    /// prediction request is still outstanding, otherwise marks the form in
    /// flight and returns an immutable snapshot of the current values.
    pub fn begin_submit(&mut self) -> Result<PredictionRequest, SubmitError> {
        if self.has_errors() {
            return Err(SubmitError::ValidationPending);
        }
        if self.in_flight {
            return Err(SubmitError::AlreadyInFlight);
        }
        self.in_flight = true;
        Ok(self.payload())
    }

    /// Clears the in-flight flag once the outbound request has resolved,
    /// success or failure, so the user can submit again.
    pub fn finish_submit(&mut self) {
        self.in_flight = false;
    }

    fn payload(&self) -> PredictionRequest {
        PredictionRequest {
            mood: self.get("Mood"),
            hour: self.get("Hour"),
            weekend: self.get("Week(day/end)"),
            sleep_hours: self.get("SleepHours"),
            distractions: self.get("Distractions"),
            confidence_score: self.get("ConfidenceScore"),
            completed: self.get("Completed"),
            day_of_week: self.get("DayOfWeek"),
        }
    }

    fn get(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or_default()
    }
}

impl Default for ProductivityForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn saturday_morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 3)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn defaults_match_schema() {
        let form = ProductivityForm::with_defaults();
        for spec in FIELD_SPECS {
            assert_eq!(form.value_of(spec.key), Some(spec.default));
            assert!(form.error_of(spec.key).is_none());
        }
        assert!(!form.in_flight());
    }

    #[test]
    fn seeding_reflects_the_clock() {
        let form = ProductivityForm::seeded_at(saturday_morning());
        assert_eq!(form.value_of("Hour"), Some(9.0));
        assert_eq!(form.value_of("DayOfWeek"), Some(5.0));
        assert_eq!(form.value_of("Week(day/end)"), Some(1.0));
        assert_eq!(form.value_of("Mood"), Some(5.0));
    }

    #[test]
    fn mood_bounds_are_inclusive() {
        let mut form = ProductivityForm::with_defaults();

        let error = form.set_field("Mood", "11").unwrap();
        assert_eq!(error.as_deref(), Some("Value must be between 1 and 10"));
        assert_eq!(form.value_of("Mood"), Some(11.0));

        let error = form.set_field("Mood", "10").unwrap();
        assert!(error.is_none());
        assert_eq!(form.value_of("Mood"), Some(10.0));
    }

    #[test]
    fn fields_validate_independently() {
        let mut form = ProductivityForm::with_defaults();
        form.set_field("Mood", "0").unwrap();
        form.set_field("SleepHours", "8").unwrap();

        assert!(form.error_of("Mood").is_some());
        assert!(form.error_of("SleepHours").is_none());
        assert!(form.error_of("Hour").is_none());
    }

    #[test]
    fn unparseable_input_keeps_value_and_sets_error() {
        let mut form = ProductivityForm::with_defaults();
        let error = form.set_field("SleepHours", "lots").unwrap();
        assert_eq!(error.as_deref(), Some("Value must be between 0 and 24"));
        assert_eq!(form.value_of("SleepHours"), Some(7.0));
    }

    #[test]
    fn unknown_field_is_reported() {
        let mut form = ProductivityForm::with_defaults();
        assert!(matches!(
            form.set_field("Caffeine", "3"),
            Err(FormError::UnknownField(_))
        ));
    }

    #[test]
    fn submit_is_blocked_while_any_field_is_invalid() {
        let mut form = ProductivityForm::with_defaults();
        form.set_field("Distractions", "99").unwrap();
        assert_eq!(form.begin_submit(), Err(SubmitError::ValidationPending));
        assert!(!form.in_flight());
    }

    #[test]
    fn submit_is_rejected_while_in_flight() {
        let mut form = ProductivityForm::with_defaults();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(SubmitError::AlreadyInFlight));

        form.finish_submit();
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn repeated_submissions_snapshot_identical_payloads() {
        let mut form = ProductivityForm::with_defaults();
        let first = form.begin_submit().unwrap();
        form.finish_submit();
        let second = form.begin_submit().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn fixing_the_error_unblocks_submission() {
        let mut form = ProductivityForm::with_defaults();
        form.set_field("Mood", "11").unwrap();
        assert_eq!(form.begin_submit(), Err(SubmitError::ValidationPending));

        form.set_field("Mood", "10").unwrap();
        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.mood, 10.0);
    }
}
