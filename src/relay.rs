use std::sync::OnceLock;

use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

const PLACEHOLDER_SERVICE_ID: &str = "your_service_id";
const PLACEHOLDER_TEMPLATE_ID: &str = "your_template_id";
const PLACEHOLDER_PUBLIC_KEY: &str = "your_public_key";

/// Credentials for the EmailJS relay.
///
/// The public key is client-safe; all three values are baked into the bundle
/// at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

impl RelayConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Reads `EMAILJS_*` from the build environment, falling back to the
    /// placeholder values when a variable is unset.
    pub fn from_build_env() -> Self {
        let mut config = Self::new(
            option_env!("EMAILJS_SERVICE_ID").unwrap_or(PLACEHOLDER_SERVICE_ID),
            option_env!("EMAILJS_TEMPLATE_ID").unwrap_or(PLACEHOLDER_TEMPLATE_ID),
            option_env!("EMAILJS_PUBLIC_KEY").unwrap_or(PLACEHOLDER_PUBLIC_KEY),
        );
        if let Some(endpoint) = option_env!("EMAILJS_ENDPOINT") {
            config.endpoint = endpoint.to_string();
        }
        config
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.service_id == PLACEHOLDER_SERVICE_ID
            || self.template_id == PLACEHOLDER_TEMPLATE_ID
            || self.public_key == PLACEHOLDER_PUBLIC_KEY
    }

    fn check(&self) -> Result<(), RelayError> {
        if self.service_id.is_empty() {
            return Err(RelayError::NotConfigured("service_id"));
        }
        if self.template_id.is_empty() {
            return Err(RelayError::NotConfigured("template_id"));
        }
        if self.public_key.is_empty() {
            return Err(RelayError::NotConfigured("public_key"));
        }
        Ok(())
    }

    fn request<'a>(&'a self, params: &'a TemplateParams) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: params,
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Key/value payload rendered into the relay's email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub text: String,
}

impl RelayResponse {
    pub fn ok() -> Self {
        Self {
            status: StatusCode::OK,
            text: "OK".to_string(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status == StatusCode::OK
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("relay credential `{0}` is not configured")]
    NotConfigured(&'static str),
    #[error("relay request failed: {0}")]
    Transport(String),
    #[error("relay responded with {status}: {text}")]
    Status { status: StatusCode, text: String },
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// An outbound message relay.
///
/// Futures are not required to be `Send`: in the browser the call runs on the
/// single UI thread.
#[allow(async_fn_in_trait)]
pub trait Relay {
    async fn send(&self, params: &TemplateParams) -> Result<RelayResponse, RelayError>;
}

/// Sends template parameters through the EmailJS REST API.
///
/// Construction is free: the HTTP client is only built on the first send, so
/// rendering the contact form on the server never touches it.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    config: RelayConfig,
    http: OnceLock<reqwest::Client>,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            http: OnceLock::new(),
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    fn client(&self) -> &reqwest::Client {
        self.http.get_or_init(|| {
            if self.config.is_placeholder() {
                log::warn!("EmailJS credentials are placeholders; contact form delivery will fail");
            }
            reqwest::Client::new()
        })
    }
}

impl Default for EmailJsRelay {
    fn default() -> Self {
        Self::new(RelayConfig::from_build_env())
    }
}

impl Relay for EmailJsRelay {
    async fn send(&self, params: &TemplateParams) -> Result<RelayResponse, RelayError> {
        self.config.check()?;
        let res = self
            .client()
            .post(&self.config.endpoint)
            .json(&self.config.request(params))
            .send()
            .await?;
        let status = res.status();
        let text = res.text().await?;
        if status != StatusCode::OK {
            return Err(RelayError::Status { status, text });
        }
        Ok(RelayResponse { status, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> TemplateParams {
        TemplateParams {
            from_name: "Jane".to_string(),
            from_email: "jane@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
            to_name: "Nilaksh Aggarwal".to_string(),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let config = RelayConfig::new("svc", "tpl", "pk");
        let params = params();
        let body = serde_json::to_value(config.request(&params)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "pk",
                "template_params": {
                    "from_name": "Jane",
                    "from_email": "jane@x.com",
                    "subject": "Hi",
                    "message": "Hello",
                    "to_name": "Nilaksh Aggarwal",
                }
            })
        );
    }

    #[test]
    fn test_config_check() {
        assert!(RelayConfig::new("svc", "tpl", "pk").check().is_ok());
        assert_eq!(
            RelayConfig::new("", "tpl", "pk").check(),
            Err(RelayError::NotConfigured("service_id"))
        );
        assert_eq!(
            RelayConfig::new("svc", "", "pk").check(),
            Err(RelayError::NotConfigured("template_id"))
        );
        assert_eq!(
            RelayConfig::new("svc", "tpl", "").check(),
            Err(RelayError::NotConfigured("public_key"))
        );
    }

    #[test]
    fn test_placeholder_detection() {
        let config = RelayConfig::new("your_service_id", "your_template_id", "your_public_key");
        assert!(config.is_placeholder());
        assert!(!RelayConfig::new("svc", "tpl", "pk").is_placeholder());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        let config = config.with_endpoint("http://localhost:9000/send");
        assert_eq!(config.endpoint, "http://localhost:9000/send");
    }

    #[test]
    fn test_response_acceptance() {
        assert!(RelayResponse::ok().is_accepted());
        let res = RelayResponse {
            status: StatusCode::ACCEPTED,
            text: String::new(),
        };
        assert!(!res.is_accepted());
    }

    #[tokio::test]
    async fn test_unconfigured_relay_fails_without_request() {
        let relay = EmailJsRelay::new(
            RelayConfig::new("svc", "tpl", "").with_endpoint("http://127.0.0.1:9/unreachable"),
        );
        let res = relay.send(&params()).await;
        assert_eq!(res, Err(RelayError::NotConfigured("public_key")));
        assert!(relay.http.get().is_none());
    }

    #[test]
    fn test_client_built_on_demand() {
        let relay = EmailJsRelay::new(RelayConfig::new(
            "your_service_id",
            "your_template_id",
            "your_public_key",
        ));
        assert!(relay.http.get().is_none());
        let copy = relay.clone();
        assert!(copy.http.get().is_none());
    }
}
