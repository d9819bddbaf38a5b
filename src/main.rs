mod checks;
mod config;
mod http;
mod model;
mod report;
mod summary;

use crate::config::VerifyConfig;
use crate::http::ApiClient;
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    println!("{}", "=".repeat(60));
    println!("BACKEND INTEGRATION VERIFICATION");
    println!("{}", "=".repeat(60));

    let config = VerifyConfig::from_env();
    let client = match ApiClient::new(&config.base_url, config.request_timeout) {
        Ok(client) => client,
        Err(err) => {
            error!("could not build HTTP client: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let report = checks::run_all(&client, &config).await;

    summary::print_integration_summary(client.base_url());
    report.print();

    if report.exit_code() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
