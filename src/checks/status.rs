use crate::http::ApiClient;
use crate::model::{path_value, RunRecord, RunStatus, COMPLETE_RESULT_KEYS, FRONTEND_DATA_KEYS};
use crate::report::CheckResult;
use serde_json::Value;

pub const NAME: &str = "status";

// Diagnostic visibility, not contract enforcement: missing fields and absent
// payload sub-keys are printed, never fatal. Pass iff HTTP 200.
pub async fn check(client: &ApiClient, run_id: Option<&str>) -> CheckResult {
    let run_id = match run_id {
        Some(id) => id,
        None => {
            println!("\nSkipping status check: no completed runs found");
            return CheckResult::skipped(NAME, "no completed run to inspect".to_string());
        }
    };
    println!("\nChecking GET /api/pipeline/status/{}...", run_id);
    match client
        .get_json(&format!("/api/pipeline/status/{}", run_id))
        .await
    {
        Ok(body) => match serde_json::from_value::<RunRecord>(body.clone()) {
            Ok(record) => {
                report_record(&record, &body);
                CheckResult::passed(NAME)
            }
            Err(err) => {
                println!("   status response malformed: {}", err);
                CheckResult::failed(NAME, format!("malformed response: {}", err))
            }
        },
        Err(err) => {
            println!("   status check failed: {}", err);
            CheckResult::failed(NAME, err.to_string())
        }
    }
}

fn report_record(record: &RunRecord, raw: &Value) {
    match &record.status {
        Some(status) => println!("   status retrieved: {:?}", status),
        None => println!("   status retrieved: (none)"),
    }

    let missing = missing_required(record);
    if missing.is_empty() {
        println!("   all required fields present");
    } else {
        println!("   missing fields: {}", missing.join(", "));
    }

    if record.status != Some(RunStatus::Completed) {
        return;
    }

    if record.frontend_data.is_none() && record.complete_result.is_none() {
        println!("   completed run has no result data");
        return;
    }

    if let Some(frontend) = &record.frontend_data {
        println!("   frontendData present:");
        report_keys(frontend, &FRONTEND_DATA_KEYS);
    } else {
        println!("   frontendData not found in completed run");
    }

    if let Some(complete) = raw.get("completeResult") {
        println!("   completeResult present:");
        report_keys(complete, &COMPLETE_RESULT_KEYS);
    }
}

fn report_keys(payload: &Value, keys: &[&str]) {
    for key in keys {
        println!(
            "      {} {}",
            key,
            if key_populated(payload, key) { "present" } else { "missing" }
        );
    }
}

// Report-only output wants populated keys, so null does not count here.
fn key_populated(payload: &Value, key: &str) -> bool {
    path_value(payload, key).map(|v| !v.is_null()).unwrap_or(false)
}

fn missing_required(record: &RunRecord) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if record.run_id.is_none() {
        missing.push("runId");
    }
    if record.session_id.is_none() {
        missing.push("sessionId");
    }
    if record.status.is_none() {
        missing.push("status");
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn complete_record_has_nothing_missing() {
        let record: RunRecord = serde_json::from_value(json!({
            "runId": "r1", "sessionId": "s1", "status": "COMPLETED"
        }))
        .unwrap();
        assert!(missing_required(&record).is_empty());
    }

    #[test]
    fn missing_fields_are_named() {
        let record: RunRecord = serde_json::from_value(json!({"runId": "r1"})).unwrap();
        assert_eq!(missing_required(&record), vec!["sessionId", "status"]);
    }

    #[test]
    fn partial_frontend_data_is_reported_per_key() {
        let payload = json!({"transcript": {"segments": []}, "participants": null});
        assert!(key_populated(&payload, "transcript.segments"));
        assert!(!key_populated(&payload, "participants"));
        assert!(!key_populated(&payload, "todos.items"));
        assert!(!key_populated(&payload, "knowledge_graph"));
    }
}
