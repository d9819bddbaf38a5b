use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RunList {
    pub runs: Vec<RunRecord>,
}

// All fields optional: the status check reports what is missing instead of
// failing on it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RunRecord {
    #[serde(rename = "runId")]
    pub run_id: Option<String>,
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
    pub status: Option<RunStatus>,
    #[serde(rename = "frontendData", skip_serializing_if = "Option::is_none")]
    pub frontend_data: Option<Value>,
    #[serde(rename = "completeResult", skip_serializing_if = "Option::is_none")]
    pub complete_result: Option<Value>,
}

// Unrecognized states map to Unknown so a new backend state never turns the
// lenient status check into a parse failure.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    Pending,
    Running,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

pub const FRONTEND_DATA_KEYS: [&str; 5] = [
    "transcript.segments",
    "todos.items",
    "meeting_minutes",
    "participants",
    "knowledge_graph",
];

// Fallback payload read when frontendData is absent.
pub const COMPLETE_RESULT_KEYS: [&str; 4] =
    ["todos", "kg_entities", "meeting_minutes", "asr_result"];

pub const SAMPLE_FILE_KEYS: [&str; 8] = [
    "frontend_data",
    "frontend_data.transcript",
    "frontend_data.todos",
    "frontend_data.meeting_minutes",
    "frontend_data.participants",
    "todos",
    "kg_entities",
    "meeting_minutes",
];

// Dotted paths descend one object per segment.
pub fn path_value<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

// Membership only: a key holding null is still present.
pub fn has_path(value: &Value, path: &str) -> bool {
    path_value(value, path).is_some()
}
