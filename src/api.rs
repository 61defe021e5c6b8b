//! Translation service port and its backends.
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::find_content_language;
use crate::i18n::LocaleContext;
use crate::lang::MessageKey;

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// Non-success response; carries the server's `message`.
    #[error("{0}")]
    Api(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[async_trait::async_trait]
pub trait TranslationService: Send + Sync {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, TranslateError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub translated_text: String,
    #[serde(default)]
    pub source_language: String,
    #[serde(default)]
    pub target_language: String,
}

fn default_success() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ApiError {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: String,
}

const GENERIC_FAILURE: &str = "Translation failed";

/// Message to surface for a failed call, given the raw error body.
fn failure_message(body: &str) -> String {
    serde_json::from_str::<ApiError>(body)
        .ok()
        .map(|e| {
            tracing::debug!(code = %e.error, "translation api error body");
            e.message
        })
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

/// `POST {base}/api/translate` over reqwest.
pub struct HttpTranslationService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTranslationService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint: format!("{}/api/translate", base_url.trim_end_matches('/')) })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl TranslationService for HttpTranslationService {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, TranslateError> {
        let body = TranslateRequest {
            text: text.to_string(),
            source_language: from.to_string(),
            target_language: to.to_string(),
        };
        let resp = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let raw = resp.text().await.unwrap_or_default();
            tracing::warn!(%status, endpoint = %self.endpoint, "translation request rejected");
            return Err(TranslateError::Api(failure_message(&raw)));
        }
        let data: TranslateResponse = resp.json().await?;
        if !data.success {
            return Err(TranslateError::Api(GENERIC_FAILURE.to_string()));
        }
        tracing::debug!(from = %data.source_language, to = %data.target_language, "translation received");
        Ok(data.translated_text)
    }
}

/// Offline backend: echoes the text inside a localized notice naming both
/// languages. Used when no translation server is configured.
pub struct PreviewTranslationService {
    locale: LocaleContext,
}

impl PreviewTranslationService {
    pub fn new(locale: LocaleContext) -> Self {
        Self { locale }
    }
}

#[async_trait::async_trait]
impl TranslationService for PreviewTranslationService {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, TranslateError> {
        let name = |code: &str| find_content_language(code).map(|l| l.name).unwrap_or(code).to_string();
        let t = |k| self.locale.t(k);
        Ok(format!(
            "[{} {} {} {}]\n\n\"{}\"\n\n({})",
            t(MessageKey::TranslationFrom),
            name(from),
            t(MessageKey::TranslationTo),
            name(to),
            text,
            t(MessageKey::PreviewNotice),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::UiLocaleCode;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn request_uses_camel_case_fields() {
        let req = TranslateRequest {
            text: "Hello".into(),
            source_language: "en".into(),
            target_language: "es".into(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"text": "Hello", "sourceLanguage": "en", "targetLanguage": "es"})
        );
    }

    #[test]
    fn response_decodes() {
        let raw = r#"{"success":true,"translatedText":"Hola","sourceLanguage":"en","targetLanguage":"es"}"#;
        let resp: TranslateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.translated_text, "Hola");
        assert!(resp.success);
    }

    #[test]
    fn failure_message_prefers_server_text() {
        assert_eq!(failure_message(r#"{"error":"bad_request","message":"Text too long"}"#), "Text too long");
        assert_eq!(failure_message(r#"{"error":"x","message":""}"#), GENERIC_FAILURE);
        assert_eq!(failure_message("<html>502</html>"), GENERIC_FAILURE);
    }

    #[test]
    fn endpoint_joins_cleanly() {
        let svc = HttpTranslationService::new("http://localhost:3001/", Duration::from_secs(1)).unwrap();
        assert_eq!(svc.endpoint(), "http://localhost:3001/api/translate");
    }

    mod http {
        use super::*;
        use pretty_assertions::assert_eq;
        use wiremock::matchers::{body_json, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        async fn service_answering(template: ResponseTemplate) -> (MockServer, HttpTranslationService) {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/api/translate"))
                .respond_with(template)
                .mount(&server)
                .await;
            let svc = HttpTranslationService::new(&server.uri(), Duration::from_secs(5)).unwrap();
            (server, svc)
        }

        fn api_message(result: Result<String, TranslateError>) -> String {
            match result {
                Err(TranslateError::Api(msg)) => msg,
                other => panic!("expected api error, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn posts_camel_case_body_to_translate_endpoint() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/api/translate"))
                .and(body_json(serde_json::json!({
                    "text": "Hello",
                    "sourceLanguage": "en",
                    "targetLanguage": "es"
                })))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "success": true,
                    "translatedText": "Hola",
                    "sourceLanguage": "en",
                    "targetLanguage": "es"
                })))
                .expect(1)
                .mount(&server)
                .await;
            let svc = HttpTranslationService::new(&format!("{}/", server.uri()), Duration::from_secs(5)).unwrap();
            assert_eq!(svc.translate("Hello", "en", "es").await.unwrap(), "Hola");
        }

        #[tokio::test]
        async fn missing_success_flag_counts_as_success() {
            let (_server, svc) =
                service_answering(ResponseTemplate::new(200).set_body_json(serde_json::json!({"translatedText": "Bonjour"})))
                    .await;
            assert_eq!(svc.translate("Hello", "en", "fr").await.unwrap(), "Bonjour");
        }

        #[tokio::test]
        async fn success_false_is_a_failure() {
            let (_server, svc) = service_answering(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"success": false, "translatedText": "ignored"})),
            )
            .await;
            assert_eq!(api_message(svc.translate("Hello", "en", "es").await), GENERIC_FAILURE);
        }

        #[tokio::test]
        async fn rejected_request_surfaces_server_message() {
            let (_server, svc) = service_answering(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"error": "bad_request", "message": "Text too long"})),
            )
            .await;
            assert_eq!(api_message(svc.translate("Hello", "en", "es").await), "Text too long");
        }

        #[tokio::test]
        async fn unparseable_error_body_falls_back_to_generic_message() {
            let (_server, svc) = service_answering(
                ResponseTemplate::new(500).set_body_raw("<html><body>Bad Gateway</body></html>", "text/html"),
            )
            .await;
            assert_eq!(api_message(svc.translate("Hello", "en", "es").await), GENERIC_FAILURE);
        }
    }

    #[tokio::test]
    async fn preview_follows_interface_language() {
        let ctx = LocaleContext::init(Arc::new(MemoryStore::new()));
        let svc = PreviewTranslationService::new(ctx.clone());
        let out = svc.translate("Hello", "en", "es").await.unwrap();
        assert!(out.starts_with("[Translation from English to Spanish]"));
        assert!(out.contains("\"Hello\""));

        ctx.set_active_locale(UiLocaleCode::Ru);
        let out = svc.translate("Hello", "en", "es").await.unwrap();
        assert!(out.starts_with("[Перевод с English на Spanish]"));
    }
}
