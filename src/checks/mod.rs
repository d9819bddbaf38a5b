pub mod cors;
pub mod health;
pub mod runs;
pub mod sample;
pub mod status;
pub mod upload;

use crate::config::VerifyConfig;
use crate::http::ApiClient;
use crate::report::VerificationReport;

// Checks never error out of here; each downgrades its own failures. The only
// cross-check state is the completed-run id handed to the status check.
pub async fn run_all(client: &ApiClient, config: &VerifyConfig) -> VerificationReport {
    let mut report = VerificationReport::default();

    report.record(health::check(client).await);
    report.record(cors::check(client).await);

    let (runs_result, completed_run_id) = runs::check(client).await;
    report.record(runs_result);

    report.record(sample::check(&config.sample_file));
    report.record(upload::check());
    report.record(status::check(client, completed_run_id.as_deref()).await);

    report
}
