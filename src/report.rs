use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq)]
pub enum CheckOutcome {
    Pass,
    Fail,
    Skip,
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct CheckResult {
    pub name: String,
    pub outcome: CheckOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckResult {
    pub fn passed(name: &str) -> Self {
        CheckResult {
            name: name.to_string(),
            outcome: CheckOutcome::Pass,
            message: None,
        }
    }

    pub fn failed(name: &str, message: String) -> Self {
        CheckResult {
            name: name.to_string(),
            outcome: CheckOutcome::Fail,
            message: Some(message),
        }
    }

    pub fn skipped(name: &str, message: String) -> Self {
        CheckResult {
            name: name.to_string(),
            outcome: CheckOutcome::Skip,
            message: Some(message),
        }
    }

    pub fn is_pass(&self) -> bool {
        self.outcome == CheckOutcome::Pass
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct VerificationReport {
    pub results: Vec<CheckResult>,
}

impl VerificationReport {
    pub fn record(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    // Skipped checks do not count toward the total.
    pub fn total(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome != CheckOutcome::Skip)
            .count()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.is_pass()).count()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    pub fn print(&self) {
        println!("\n{}", "=".repeat(60));
        println!("VERIFICATION REPORT");
        println!("{}", "=".repeat(60));
        for result in &self.results {
            let label = match result.outcome {
                CheckOutcome::Pass => "PASS",
                CheckOutcome::Fail => "FAIL",
                CheckOutcome::Skip => "SKIP",
            };
            match &result.message {
                Some(message) => println!("[{}] {} ({})", label, result.name, message),
                None => println!("[{}] {}", label, result.name),
            }
        }
        println!("\nPassed: {}/{} checks", self.passed(), self.total());
        if self.all_passed() {
            println!("\nAll checks passed. Backend is ready for mobile integration.");
        } else {
            println!("\nSome checks failed. Review output above.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_checks_do_not_count() {
        let mut report = VerificationReport::default();
        report.record(CheckResult::passed("health"));
        report.record(CheckResult::skipped("status", "no completed runs".to_string()));
        report.record(CheckResult::passed("cors"));
        assert_eq!(report.total(), 2);
        assert_eq!(report.passed(), 2);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn one_failure_fails_the_run() {
        let mut report = VerificationReport::default();
        report.record(CheckResult::passed("health"));
        report.record(CheckResult::failed("runs", "connection refused".to_string()));
        assert_eq!(report.total(), 2);
        assert_eq!(report.passed(), 1);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn all_skipped_still_exits_clean() {
        let mut report = VerificationReport::default();
        report.record(CheckResult::skipped("status", "no run id".to_string()));
        report.record(CheckResult::skipped("structure", "sample file not found".to_string()));
        assert_eq!(report.total(), 0);
        assert_eq!(report.exit_code(), 0);
    }
}
