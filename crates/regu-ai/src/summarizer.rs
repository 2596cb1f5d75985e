//! Completion-model pipeline: prompt, tolerant parse, persist.

use regu_config::AiConfig;
use regu_core::entities::RegulatoryUpdate;
use regu_core::enums::{Category, Severity};
use regu_db::service::ReguService;
use rig::client::{completion::CompletionClient, ProviderClient};
use rig::completion::Prompt;
use rig::providers::openai;

use crate::error::AiError;

/// Preamble sent with every summarization request. The model is told to
/// reply with strict JSON so the reply parses without scraping.
const SYSTEM_PROMPT: &str = "You are a legal compliance expert. Analyze the following regulatory update and provide:\n\
    1. A concise summary\n\
    2. The category (GDPR, CCPA, ISO, or Other)\n\
    3. The severity level (low, medium, high)\n\
    Format the response as JSON with keys: summary, category, severity";

/// Structured result of one summarization call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAnalysis {
    pub summary: String,
    pub category: Category,
    pub severity: Severity,
}

/// Summarize and classify one piece of regulatory text.
///
/// # Errors
///
/// Returns [`AiError::MissingApiKey`] when the configured key env var is
/// unset, [`AiError::Completion`] when the request fails, and
/// [`AiError::InvalidReply`] when the reply has no usable summary.
pub async fn summarize(config: &AiConfig, text: &str) -> Result<UpdateAnalysis, AiError> {
    if !config.is_configured() {
        return Err(AiError::MissingApiKey(config.api_key_env.clone()));
    }

    let client = if config.api_key_env == "OPENAI_API_KEY" {
        openai::Client::from_env()
    } else {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| AiError::MissingApiKey(config.api_key_env.clone()))?;
        openai::Client::new(&api_key).map_err(|e| AiError::Client(e.to_string()))?
    };

    let agent = client
        .agent(&config.model)
        .preamble(SYSTEM_PROMPT)
        .temperature(config.temperature)
        .build();

    let raw = agent
        .prompt(text)
        .await
        .map_err(|e| AiError::Completion(e.to_string()))?;

    parse_analysis(&raw)
}

/// Summarize regulatory text and persist the result for the signed-in user.
///
/// # Errors
///
/// Returns [`AiError::InvalidInput`] for empty text before any request is
/// made, any [`summarize`] error, and [`AiError::Db`] if the insert fails.
pub async fn process_update(
    service: &ReguService,
    config: &AiConfig,
    text: &str,
) -> Result<RegulatoryUpdate, AiError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AiError::InvalidInput(
            "regulatory update text is empty".to_string(),
        ));
    }

    let analysis = summarize(config, text).await?;
    tracing::debug!(
        category = %analysis.category,
        severity = %analysis.severity,
        "regulatory update classified"
    );

    let update = service
        .create_regulatory_update(text, &analysis.summary, analysis.category, analysis.severity)
        .await?;
    Ok(update)
}

fn parse_analysis(raw: &str) -> Result<UpdateAnalysis, AiError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| AiError::InvalidReply(e.to_string()))?;

    let summary = value
        .get("summary")
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|summary| !summary.is_empty())
        .ok_or_else(|| AiError::InvalidReply("reply has no summary".to_string()))?
        .to_string();

    Ok(UpdateAnalysis {
        summary,
        category: parse_category(&value),
        severity: parse_severity(&value),
    })
}

/// The model echoes the prompt's capitalization ("GDPR", "Other"), so
/// matching is case-insensitive. Anything unrecognized files under `other`.
fn parse_category(value: &serde_json::Value) -> Category {
    match value
        .get("category")
        .and_then(serde_json::Value::as_str)
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("gdpr") => Category::Gdpr,
        Some("ccpa") => Category::Ccpa,
        Some("iso") => Category::Iso,
        _ => Category::Other,
    }
}

fn parse_severity(value: &serde_json::Value) -> Severity {
    match value
        .get("severity")
        .and_then(serde_json::Value::as_str)
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("low") => Severity::Low,
        Some("high") => Severity::High,
        _ => Severity::Medium,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_well_formed_reply() {
        let raw = r#"{
          "summary": "New consent requirements for trackers take effect in March.",
          "category": "GDPR",
          "severity": "high"
        }"#;
        let analysis = parse_analysis(raw).unwrap();
        assert_eq!(
            analysis.summary,
            "New consent requirements for trackers take effect in March."
        );
        assert_eq!(analysis.category, Category::Gdpr);
        assert_eq!(analysis.severity, Severity::High);
    }

    #[test]
    fn category_matching_is_case_insensitive() {
        let raw = r#"{"summary": "s", "category": "ccpa", "severity": "LOW"}"#;
        let analysis = parse_analysis(raw).unwrap();
        assert_eq!(analysis.category, Category::Ccpa);
        assert_eq!(analysis.severity, Severity::Low);
    }

    #[test]
    fn unknown_classifications_fall_back_to_defaults() {
        let raw = r#"{"summary": "s", "category": "PCI-DSS", "severity": "critical"}"#;
        let analysis = parse_analysis(raw).unwrap();
        assert_eq!(analysis.category, Category::Other);
        assert_eq!(analysis.severity, Severity::Medium);
    }

    #[test]
    fn missing_classifications_fall_back_to_defaults() {
        let raw = r#"{"summary": "s"}"#;
        let analysis = parse_analysis(raw).unwrap();
        assert_eq!(analysis.category, Category::Other);
        assert_eq!(analysis.severity, Severity::Medium);
    }

    #[test]
    fn reply_without_summary_is_rejected() {
        let missing = r#"{"category": "GDPR", "severity": "low"}"#;
        assert!(matches!(
            parse_analysis(missing),
            Err(AiError::InvalidReply(_))
        ));

        let blank = r#"{"summary": "   ", "category": "GDPR", "severity": "low"}"#;
        assert!(matches!(
            parse_analysis(blank),
            Err(AiError::InvalidReply(_))
        ));
    }

    #[test]
    fn non_json_reply_is_rejected() {
        let raw = "Sure! Here is the analysis you asked for.";
        assert!(matches!(
            parse_analysis(raw),
            Err(AiError::InvalidReply(_))
        ));
    }

    #[tokio::test]
    async fn empty_text_is_rejected_before_any_request() {
        let db = regu_db::ReguDb::open_local(":memory:").await.unwrap();
        let svc = ReguService::from_db(
            db,
            regu_core::identity::AuthIdentity {
                user_id: "user_t1".to_string(),
                email: None,
            },
        );

        let result = process_update(&svc, &AiConfig::default(), "   ").await;
        assert!(matches!(result, Err(AiError::InvalidInput(_))));
        assert!(svc.list_regulatory_updates(10).await.unwrap().is_empty());
    }
}
