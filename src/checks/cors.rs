use crate::http::ApiClient;
use crate::report::CheckResult;
use reqwest::header::HeaderMap;

pub const NAME: &str = "cors";

const PROBE_ORIGIN: &str = "http://localhost:3000";

// A wildcard allow-origin is reported but not required.
pub async fn check(client: &ApiClient) -> CheckResult {
    println!("\nChecking CORS configuration...");
    match client.preflight("/api/pipeline/execute", PROBE_ORIGIN).await {
        Ok(headers) => {
            let cors = cors_headers(&headers);
            if cors.is_empty() {
                println!("   no CORS headers found");
                return CheckResult::failed(NAME, "no access-control headers in preflight response".to_string());
            }
            println!("   CORS headers present:");
            for (name, value) in &cors {
                println!("      {}: {}", name, value);
            }
            if allows_any_origin(&headers) {
                println!("   allows all origins (compatible with the mobile app)");
            }
            CheckResult::passed(NAME)
        }
        Err(err) => {
            println!("   CORS check failed: {}", err);
            CheckResult::failed(NAME, err.to_string())
        }
    }
}

fn cors_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .filter(|(name, _)| name.as_str().to_ascii_lowercase().contains("access-control"))
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or("(non-ascii value)").to_string(),
            )
        })
        .collect()
}

fn allows_any_origin(headers: &HeaderMap) -> bool {
    headers
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == "*")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};

    #[test]
    fn detects_access_control_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("access-control-allow-origin"),
            HeaderValue::from_static("*"),
        );
        headers.insert(
            HeaderName::from_static("content-length"),
            HeaderValue::from_static("0"),
        );
        let cors = cors_headers(&headers);
        assert_eq!(cors.len(), 1);
        assert_eq!(cors[0].0, "access-control-allow-origin");
        assert!(allows_any_origin(&headers));
    }

    #[test]
    fn wildcard_is_not_required() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("access-control-allow-methods"),
            HeaderValue::from_static("POST"),
        );
        assert_eq!(cors_headers(&headers).len(), 1);
        assert!(!allows_any_origin(&headers));
    }

    #[test]
    fn empty_headers_yield_nothing() {
        let headers = HeaderMap::new();
        assert!(cors_headers(&headers).is_empty());
    }
}
