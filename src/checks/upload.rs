use crate::report::CheckResult;

pub const NAME: &str = "upload contract";

// Submitting a real file would start a pipeline run, so this stays a dry run.
pub fn check() -> CheckResult {
    println!("\nUpload endpoint contract (dry run)...");
    println!("   endpoint: POST /api/pipeline/execute");
    println!("   expected format: multipart/form-data");
    println!("   fields: file (audio), session_id (optional), enable_preprocessing (optional)");
    println!("   response: {{ sessionId, status, message, runId }}");
    CheckResult::passed(NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_passes() {
        assert!(check().is_pass());
    }
}
