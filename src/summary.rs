use crate::config::REMOTE_BASE_URL;

pub fn print_integration_summary(base_url: &str) {
    println!("\n{}", "=".repeat(60));
    println!("MOBILE APP INTEGRATION SUMMARY");
    println!("{}", "=".repeat(60));

    println!("\nBackend API base URL:");
    println!("   local:  {}", base_url);
    println!("   remote: {}", REMOTE_BASE_URL);

    println!("\nEndpoints available:");
    println!("   1. POST   /api/pipeline/execute");
    println!("   2. GET    /api/pipeline/status/{{runId}}");
    println!("   3. GET    /api/pipeline/logs/{{runId}}");
    println!("   4. GET    /api/pipeline/runs");
    println!("   5. GET    /api/pipeline/health");

    println!("\nData mapping:");
    println!("   transcripts:     frontendData.transcript.segments");
    println!("   todos:           frontendData.todos.items");
    println!("   minutes:         frontendData.meeting_minutes.content");
    println!("   participants:    frontendData.participants.items");
    println!("   knowledge graph: completeResult.kg_entities + kg_relations");

    println!("\nCORS configuration:");
    println!("   - allows all origins (*)");
    println!("   - supports all HTTP methods");
    println!("   - the mobile app should work without CORS issues");

    println!("\nIntegration flow:");
    println!("   1. record audio in the app");
    println!("   2. POST audio to /api/pipeline/execute");
    println!("   3. take runId from the response");
    println!("   4. poll GET /api/pipeline/status/{{runId}}");
    println!("   5. when status=COMPLETED, extract frontendData");
    println!("   6. map to UI sections");

    println!("\n{}", "=".repeat(60));
}
