//! HTTP client for the EmailJS send endpoint

use super::{EmailProvider, ProviderError};
use crate::config::ProviderConfig;
use crate::state::SubmissionPayload;
use async_trait::async_trait;
use serde::Serialize;

/// JSON body of `POST /api/v1.0/email/send`
#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    /// EmailJS calls the public key `user_id`
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

/// Variables substituted into the EmailJS template
#[derive(Debug, Serialize)]
pub struct TemplateParams<'a> {
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub message: &'a str,
    pub to_name: &'a str,
    pub reply_to: &'a str,
}

impl<'a> SendRequest<'a> {
    pub fn new(config: &'a ProviderConfig, payload: &'a SubmissionPayload) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: TemplateParams {
                from_name: &payload.name,
                from_email: &payload.email,
                message: &payload.message,
                to_name: &config.recipient_name,
                reply_to: &payload.email,
            },
        }
    }
}

/// Client for the EmailJS REST API
pub struct EmailJsClient {
    http: reqwest::Client,
    endpoint: String,
}

impl EmailJsClient {
    /// Create a client posting to `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

fn transport_error(err: reqwest::Error) -> ProviderError {
    if err.is_connect() || err.is_timeout() || err.is_request() {
        ProviderError::Network(err.to_string())
    } else {
        ProviderError::Transport(err.to_string())
    }
}

#[async_trait]
impl EmailProvider for EmailJsClient {
    async fn send(
        &self,
        config: &ProviderConfig,
        payload: &SubmissionPayload,
    ) -> Result<String, ProviderError> {
        let body = SendRequest::new(config, payload);
        tracing::debug!(endpoint = %self.endpoint, "Posting contact form to EmailJS");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(ProviderError::from_status(status.as_u16(), text));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    fn provider_config() -> ProviderConfig {
        ProviderConfig {
            public_key: "pk_123".to_string(),
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            recipient_name: "EmotiTrack Team".to_string(),
        }
    }

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello from the analytical engine".to_string(),
        }
    }

    /// Client that ignores proxy settings so loopback requests stay local
    fn local_client(endpoint: String) -> EmailJsClient {
        EmailJsClient {
            http: reqwest::Client::builder().no_proxy().build().unwrap(),
            endpoint,
        }
    }

    /// Serve a single canned HTTP response and hand back the request body
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            let request_body = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                buf.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&buf).to_string();
                if let Some(split) = text.find("\r\n\r\n") {
                    let headers = text[..split].to_ascii_lowercase();
                    let length = headers
                        .lines()
                        .find_map(|l| l.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    let body = &text[split + 4..];
                    if body.len() >= length || n == 0 {
                        break body.to_string();
                    }
                }
                if n == 0 {
                    break String::new();
                }
            };
            let response = format!(
                "{status_line}\r\ncontent-type: text/plain\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = tx.send(request_body);
        });

        (format!("http://{addr}/api/v1.0/email/send"), rx)
    }

    mod request_body {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_serializes_to_emailjs_shape() {
            let config = provider_config();
            let payload = payload();
            let value = serde_json::to_value(SendRequest::new(&config, &payload)).unwrap();

            assert_eq!(
                value,
                json!({
                    "service_id": "service_abc",
                    "template_id": "template_xyz",
                    "user_id": "pk_123",
                    "template_params": {
                        "from_name": "Ada Lovelace",
                        "from_email": "ada@example.com",
                        "message": "Hello from the analytical engine",
                        "to_name": "EmotiTrack Team",
                        "reply_to": "ada@example.com"
                    }
                })
            );
        }
    }

    mod send {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_success_returns_body_and_posts_json() {
            let (url, request) = serve_once("HTTP/1.1 200 OK", "OK").await;
            let client = local_client(url);

            let result = client.send(&provider_config(), &payload()).await;
            assert_eq!(result, Ok("OK".to_string()));

            let sent: serde_json::Value = serde_json::from_str(&request.await.unwrap()).unwrap();
            assert_eq!(sent["user_id"], "pk_123");
            assert_eq!(sent["template_params"]["reply_to"], "ada@example.com");
        }

        #[tokio::test]
        async fn test_401_maps_to_unauthorized() {
            let (url, _request) =
                serve_once("HTTP/1.1 401 Unauthorized", "The Public Key is invalid").await;
            let client = local_client(url);

            let result = client.send(&provider_config(), &payload()).await;
            assert_eq!(
                result,
                Err(ProviderError::Unauthorized {
                    body: "The Public Key is invalid".to_string()
                })
            );
        }

        #[tokio::test]
        async fn test_server_error_maps_to_status() {
            let (url, _request) =
                serve_once("HTTP/1.1 500 Internal Server Error", "boom").await;
            let client = local_client(url);

            let result = client.send(&provider_config(), &payload()).await;
            assert_eq!(
                result,
                Err(ProviderError::Status {
                    status: 500,
                    body: "boom".to_string()
                })
            );
        }

        #[tokio::test]
        async fn test_unreachable_endpoint_is_network_error() {
            // Bind then drop to get a port nothing listens on
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);

            let client = local_client(format!("http://{addr}/send"));
            let result = client.send(&provider_config(), &payload()).await;
            assert!(matches!(result, Err(ProviderError::Network(_))), "{result:?}");
        }

        #[test]
        fn test_invalid_endpoint_is_transport_error() {
            let client = EmailJsClient::new("not a url");
            let result = tokio_test::block_on(client.send(&provider_config(), &payload()));
            assert!(matches!(result, Err(ProviderError::Transport(_))), "{result:?}");
        }
    }
}
