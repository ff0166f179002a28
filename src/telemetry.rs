//! Outbound error telemetry.
//!
//! A thin Airbrake-style notifier: failures are logged locally and, when an
//! endpoint is configured, forwarded as a fire-and-forget JSON notice. The
//! bot never blocks or retries on telemetry delivery.

use serde::Serialize;

#[derive(Serialize)]
struct Notice<'a> {
    errors: Vec<NoticeError<'a>>,
    context: NoticeContext<'a>,
}

#[derive(Serialize)]
struct NoticeError<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    message: String,
}

#[derive(Serialize)]
struct NoticeContext<'a> {
    environment: &'a str,
}

#[derive(Clone)]
pub struct Telemetry {
    endpoint: Option<String>,
    environment: String,
    client: reqwest::Client,
}

impl Telemetry {
    /// Builds a notifier from the project id/key pair. Either missing leaves
    /// telemetry disabled; errors are then only logged.
    pub fn new(project_id: Option<i64>, project_key: Option<String>, environment: &str) -> Self {
        let endpoint = match (project_id, project_key) {
            (Some(id), Some(key)) => Some(format!(
                "https://api.airbrake.io/api/v3/projects/{id}/notices?key={key}"
            )),
            _ => None,
        };
        Self {
            endpoint,
            environment: environment.to_lowercase(),
            client: reqwest::Client::new(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            endpoint: None,
            environment: "test".to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Logs the error and ships it to the telemetry backend when configured.
    /// `context` names the failing operation (e.g. `store.set_online`).
    pub fn notify(&self, context: &'static str, error: &dyn std::fmt::Display) {
        let message = error.to_string();
        tracing::error!(target: "telemetry", context, error = %message);
        let Some(endpoint) = self.endpoint.clone() else {
            return;
        };
        let body = serde_json::to_value(Notice {
            errors: vec![NoticeError {
                kind: context,
                message,
            }],
            context: NoticeContext {
                environment: &self.environment,
            },
        })
        .unwrap_or_default();
        let client = self.client.clone();
        tokio::spawn(async move {
            if let Err(e) = client.post(&endpoint).json(&body).send().await {
                tracing::debug!(target: "telemetry", error = %e, "notice delivery failed");
            }
        });
    }
}
