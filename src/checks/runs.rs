use crate::http::ApiClient;
use crate::model::{RunList, RunRecord, RunStatus};
use crate::report::CheckResult;

pub const NAME: &str = "runs";

// Yields the id of the first COMPLETED run; none degrades the status check
// to a skip.
pub async fn check(client: &ApiClient) -> (CheckResult, Option<String>) {
    println!("\nChecking GET /api/pipeline/runs...");
    match client.get_json("/api/pipeline/runs").await {
        Ok(body) => match serde_json::from_value::<RunList>(body) {
            Ok(list) => {
                println!("   retrieved {} run(s)", list.runs.len());
                match first_completed(&list.runs) {
                    Some(run_id) => {
                        println!("   found completed run for inspection: {}", run_id);
                        (CheckResult::passed(NAME), Some(run_id.to_string()))
                    }
                    None => {
                        println!("   no completed runs found");
                        (CheckResult::passed(NAME), None)
                    }
                }
            }
            Err(err) => {
                println!("   runs response malformed: {}", err);
                (
                    CheckResult::failed(NAME, format!("malformed response: {}", err)),
                    None,
                )
            }
        },
        Err(err) => {
            println!("   runs check failed: {}", err);
            (CheckResult::failed(NAME, err.to_string()), None)
        }
    }
}

fn first_completed(runs: &[RunRecord]) -> Option<&str> {
    runs.iter()
        .find(|run| run.status == Some(RunStatus::Completed))
        .and_then(|run| run.run_id.as_deref())
}
