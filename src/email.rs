use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::config::EmailConfig;
use crate::contact::ContactForm;

pub const EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("Email delivery is not configured")]
    NotConfigured,
    #[error("Email request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Email service rejected the message ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams<'a>,
}

/// Delivers contact form submissions through the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailClient {
    http: reqwest::Client,
    config: EmailConfig,
}

impl EmailClient {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Sends one message. Nothing is retried.
    pub async fn send(&self, form: &ContactForm) -> Result<(), EmailError> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: TemplateParams {
                name: form.name.trim(),
                email: form.email.trim(),
                message: &form.message,
            },
        };
        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, %body, "email service rejected message");
            return Err(EmailError::Rejected { status, body });
        }
        tracing::info!("contact message sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn client_for(server: &MockServer, private_key: Option<&str>) -> EmailClient {
        EmailClient::new(EmailConfig {
            endpoint: server.url("/api/v1.0/email/send"),
            service_id: "service_1".to_string(),
            template_id: "template_1".to_string(),
            public_key: "public".to_string(),
            private_key: private_key.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_send_posts_template_params() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1.0/email/send")
                    .json_body(json!({
                        "service_id": "service_1",
                        "template_id": "template_1",
                        "user_id": "public",
                        "template_params": {
                            "name": "Ada",
                            "email": "ada@example.com",
                            "message": "Hello"
                        }
                    }));
                then.status(200).body("OK");
            })
            .await;

        let form = ContactForm::new(" Ada ", "ada@example.com", "Hello");
        client_for(&server, None)
            .send(&form)
            .await
            .expect("send should succeed");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_includes_access_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).json_body_partial(r#"{"accessToken": "secret"}"#);
                then.status(200);
            })
            .await;

        let form = ContactForm::new("Ada", "ada@example.com", "Hello");
        client_for(&server, Some("secret"))
            .send(&form)
            .await
            .expect("send should succeed");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejected_send() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(400).body("The template ID is invalid");
            })
            .await;

        let form = ContactForm::new("Ada", "ada@example.com", "Hello");
        let err = client_for(&server, None).send(&form).await.unwrap_err();
        match err {
            EmailError::Rejected { status, body } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(body, "The template ID is invalid");
            }
            other => panic!("unexpected error: {other}"),
        }
        mock.assert_hits_async(1).await;
    }
}
