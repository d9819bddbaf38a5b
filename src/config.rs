use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
// For the remote deployment, point PIPELINE_VERIFY_BASE_URL at this instead.
pub const REMOTE_BASE_URL: &str = "http://86.38.238.159:8000";

const DEFAULT_SAMPLE_FILE: &str = "test_results/complete_pipeline_sample.json";
const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Clone, Debug)]
pub struct VerifyConfig {
    pub base_url: String,
    pub sample_file: PathBuf,
    pub request_timeout: Duration,
}

impl VerifyConfig {
    pub fn from_env() -> Self {
        let base_url = env::var("PIPELINE_VERIFY_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let sample_file = env::var("PIPELINE_VERIFY_SAMPLE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SAMPLE_FILE));
        VerifyConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            sample_file,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
