// src/qa/client.rs
use std::time::Duration;

use crate::utils::error::QaError;

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";
const REQUEST_TIMEOUT_SECS: u64 = 60;
const GENERATION_TEMPERATURE: f64 = 0.5;

// Coverage aspects requested when the user query is too general for a
// targeted answer.
const ANALYSIS_ASPECTS: &str = "\
1. Revenue and profit trends
2. Key financial metrics
3. Major financial events and decisions
4. Comparison with previous periods
5. Future outlook or forecasts
6. Any notable financial risks or opportunities";

/// Creates a reqwest client configured for the Gemini API.
fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
}

/// Builds the financial-analyst prompt wrapping the document text and query.
pub fn analysis_prompt(document_text: &str, query: &str) -> String {
    format!(
        "You are a financial analyst. Your task is to provide a comprehensive \
         analysis of the financial document.\n\
         Analyze the following document and respond to the query:\n\
         {document_text}\n\n\
         Query: {query}\n\
         If the query is too general, cover the following aspects:\n\
         {ANALYSIS_ASPECTS}\n\
         Provide a clear, concise, and professional response."
    )
}

/// Sends the document text and a free-text query to the Gemini API and
/// returns the natural-language answer.
///
/// Reads the API key from `GOOGLE_API_KEY`; a missing key fails before any
/// network traffic.
pub async fn analyze_document(document_text: &str, query: &str) -> Result<String, QaError> {
    let api_key = std::env::var("GOOGLE_API_KEY").map_err(|_| QaError::MissingApiKey)?;
    let client = build_client()?;

    tracing::info!("Sending analysis query to Gemini ({} chars of context)", document_text.len());

    let body = serde_json::json!({
        "contents": [{
            "parts": [{ "text": analysis_prompt(document_text, query) }]
        }],
        "generationConfig": { "temperature": GENERATION_TEMPERATURE }
    });

    let url = format!("{}?key={}", GEMINI_API_URL, api_key);
    let response = client.post(&url).json(&body).send().await?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!("Gemini API returned HTTP {}", status);
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("Received 429 Too Many Requests - check API quota.");
        }
        return Err(QaError::Http(status));
    }

    let json: serde_json::Value = response.json().await?;
    let answer = json
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(|v| v.as_str())
        .ok_or_else(|| QaError::Parse("response is missing candidate text".to_string()))?;

    tracing::debug!("Received {} chars of analysis", answer.len());

    Ok(answer.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_document_and_query() {
        let prompt = analysis_prompt("Q1 revenue was $5", "What are the revenue trends?");
        assert!(prompt.contains("Q1 revenue was $5"));
        assert!(prompt.contains("Query: What are the revenue trends?"));
        assert!(prompt.contains("Revenue and profit trends"));
    }
}
