use crate::http::ApiClient;
use crate::report::CheckResult;
use serde_json::Value;

pub const NAME: &str = "health";

pub async fn check(client: &ApiClient) -> CheckResult {
    println!("Checking health endpoint...");
    match client.get_json("/api/pipeline/health").await {
        Ok(body) => {
            let status = body
                .get("status")
                .and_then(Value::as_str)
                .unwrap_or("(no status reported)");
            let active_runs = body.get("active_runs").and_then(Value::as_u64).unwrap_or(0);
            println!("   health OK: {}", status);
            println!("   active runs: {}", active_runs);
            CheckResult::passed(NAME)
        }
        Err(err) => {
            println!("   health check failed: {}", err);
            CheckResult::failed(NAME, err.to_string())
        }
    }
}
