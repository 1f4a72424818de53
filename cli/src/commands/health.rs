use serde_json::json;

/// GET /health against the configured API and print the response.
///
/// Exit codes: 0=healthy (2xx), 2=server error, 3=connection error
pub async fn run(api_url: &str) -> i32 {
    let resp = match reqwest::get(format!("{api_url}/health")).await {
        Ok(r) => r,
        Err(e) => {
            let err = json!({
                "error": "connection_error",
                "message": format!("{e}"),
                "docs_hint": "Is the API server running? Check KAIZEN_API_URL."
            });
            eprintln!("{}", serde_json::to_string_pretty(&err).unwrap());
            return 3;
        }
    };

    let status = resp.status();
    let body: serde_json::Value = resp
        .json()
        .await
        .unwrap_or(json!({"error": "non-json response"}));

    let formatted = serde_json::to_string_pretty(&body).unwrap();
    if status.is_success() {
        println!("{formatted}");
        0
    } else {
        eprintln!("{formatted}");
        2
    }
}
