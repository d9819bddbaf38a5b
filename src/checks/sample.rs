use crate::model::{has_path, SAMPLE_FILE_KEYS};
use crate::report::CheckResult;
use serde_json::Value;
use std::fs;
use std::path::Path;

pub const NAME: &str = "structure";

// An absent file is a skip, not a failure.
pub fn check(sample_file: &Path) -> CheckResult {
    println!("\nValidating sample data structure...");
    if !sample_file.exists() {
        println!("   sample file not found: {}", sample_file.display());
        return CheckResult::skipped(NAME, "sample file not found".to_string());
    }
    let text = match fs::read_to_string(sample_file) {
        Ok(text) => text,
        Err(err) => {
            println!("   failed to read sample file: {}", err);
            return CheckResult::failed(NAME, err.to_string());
        }
    };
    let data: Value = match serde_json::from_str(&text) {
        Ok(data) => data,
        Err(err) => {
            println!("   failed to parse sample file: {}", err);
            return CheckResult::failed(NAME, format!("parse error: {}", err));
        }
    };
    println!("   sample file loaded");
    validate_structure(&data)
}

fn validate_structure(data: &Value) -> CheckResult {
    let mut missing = Vec::new();
    for key in SAMPLE_FILE_KEYS {
        let present = has_path(data, key);
        println!("      {} {}", key, if present { "ok" } else { "MISSING" });
        if !present {
            missing.push(key);
        }
    }
    if missing.is_empty() {
        println!("   all structure checks passed");
        CheckResult::passed(NAME)
    } else {
        CheckResult::failed(NAME, format!("missing keys: {}", missing.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CheckOutcome;
    use serde_json::json;
    use std::fs;

    fn complete_sample() -> Value {
        json!({
            "frontend_data": {
                "transcript": {"segments": []},
                "todos": {"items": []},
                "meeting_minutes": {"content": "notes"},
                "participants": {"items": []}
            },
            "todos": [],
            "kg_entities": [],
            "meeting_minutes": {"content": "notes"}
        })
    }

    #[test]
    fn absent_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let result = check(&dir.path().join("nope.json"));
        assert_eq!(result.outcome, CheckOutcome::Skip);
    }

    #[test]
    fn complete_sample_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        fs::write(&path, complete_sample().to_string()).unwrap();
        let result = check(&path);
        assert_eq!(result.outcome, CheckOutcome::Pass);
    }

    #[test]
    fn null_valued_key_still_counts_as_present() {
        let mut sample = complete_sample();
        sample
            .as_object_mut()
            .unwrap()
            .insert("kg_entities".to_string(), Value::Null);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        fs::write(&path, sample.to_string()).unwrap();
        let result = check(&path);
        assert_eq!(result.outcome, CheckOutcome::Pass);
    }

    #[test]
    fn missing_key_fails() {
        let mut sample = complete_sample();
        sample.as_object_mut().unwrap().remove("kg_entities");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        fs::write(&path, sample.to_string()).unwrap();
        let result = check(&path);
        assert_eq!(result.outcome, CheckOutcome::Fail);
        assert!(result.message.unwrap().contains("kg_entities"));
    }

    #[test]
    fn unparseable_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        fs::write(&path, "not json").unwrap();
        let result = check(&path);
        assert_eq!(result.outcome, CheckOutcome::Fail);
    }
}
