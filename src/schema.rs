/// Static description of one numeric form field: what to call it, how to
/// explain it, and which values it accepts. Bounds are inclusive.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

pub const FIELD_SPECS: &[FieldSpec] = &[
    FieldSpec {
        key: "Mood",
        label: "Mood (1-10)",
        description: "How are you feeling right now?",
        min: 1.0,
        max: 10.0,
        default: 5.0,
    },
    FieldSpec {
        key: "Hour",
        label: "Current Hour (0-23)",
        description: "What time is it?",
        min: 0.0,
        max: 23.0,
        default: 14.0,
    },
    FieldSpec {
        key: "Week(day/end)",
        label: "Weekend (0=Weekday, 1=Weekend)",
        description: "Is it a weekend?",
        min: 0.0,
        max: 1.0,
        default: 0.0,
    },
    FieldSpec {
        key: "SleepHours",
        label: "Hours of Sleep (0-24)",
        description: "How many hours did you sleep last night?",
        min: 0.0,
        max: 24.0,
        default: 7.0,
    },
    FieldSpec {
        key: "Distractions",
        label: "Distraction Level (0-10)",
        description: "How distracted do you feel?",
        min: 0.0,
        max: 10.0,
        default: 2.0,
    },
    FieldSpec {
        key: "ConfidenceScore",
        label: "Confidence Score (1-10)",
        description: "How confident do you feel about being productive?",
        min: 1.0,
        max: 10.0,
        default: 6.0,
    },
    FieldSpec {
        key: "Completed",
        label: "Tasks Completed Today (0-50)",
        description: "How many tasks have you completed today?",
        min: 0.0,
        max: 50.0,
        default: 1.0,
    },
    FieldSpec {
        key: "DayOfWeek",
        label: "Day of Week (0=Mon, 6=Sun)",
        description: "What day of the week is it?",
        min: 0.0,
        max: 6.0,
        default: 2.0,
    },
];

pub fn spec_for(key: &str) -> Option<&'static FieldSpec> {
    FIELD_SPECS.iter().find(|spec| spec.key == key)
}

/// Dataset column offered on the visualization page. The list mirrors what
/// the charting service can plot, which is a superset of the form fields.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub value: &'static str,
    pub label: &'static str,
}

pub const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        value: "TaskType",
        label: "Task Type (Study, Exercise, etc.)",
    },
    ColumnSpec {
        value: "Mood",
        label: "Mood (1-10)",
    },
    ColumnSpec {
        value: "SleepHours",
        label: "Hours of Sleep",
    },
    ColumnSpec {
        value: "Distractions",
        label: "Distraction Level",
    },
    ColumnSpec {
        value: "ConfidenceScore",
        label: "Confidence Score",
    },
    ColumnSpec {
        value: "DayOfWeek",
        label: "Day of Week",
    },
    ColumnSpec {
        value: "Completed",
        label: "Tasks Completed",
    },
    ColumnSpec {
        value: "Duration",
        label: "Duration",
    },
];
