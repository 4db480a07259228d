//! HTTP mail-gateway notifier.

use crate::report::ports::{Notifier, NotifierError, NotifierResult, ReportArtifact};
use async_trait::async_trait;
use minijinja::Environment;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Body template for the report announcement message.
const BODY_TEMPLATE: &str = "\
The stage report {{ name }} is ready ({{ rows }} row{{ 's' if rows != 1 else '' }}).
It has been written to {{ location }}.
";

/// Settings for the mail-gateway notifier.
#[derive(Debug, Clone, Deserialize)]
pub struct MailGatewaySettings {
    /// Gateway endpoint accepting the message as JSON.
    pub endpoint: String,
    /// Sender address.
    pub sender: String,
    /// Fixed recipient set.
    pub recipients: Vec<String>,
    /// Message subject.
    pub subject: String,
}

/// Notifier that posts the report announcement to an HTTP mail gateway.
pub struct MailGatewayNotifier {
    http: reqwest::Client,
    settings: MailGatewaySettings,
}

impl MailGatewayNotifier {
    /// Creates a notifier with a dedicated HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError::Delivery`] when the client cannot be
    /// constructed.
    pub fn new(settings: MailGatewaySettings) -> NotifierResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("stagecraft/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(NotifierError::delivery)?;
        Ok(Self { http, settings })
    }

    fn render_body(artifact: &ReportArtifact) -> NotifierResult<String> {
        let environment = Environment::new();
        environment
            .render_str(
                BODY_TEMPLATE,
                json!({
                    "name": artifact.name(),
                    "location": artifact.location(),
                    "rows": artifact.rows(),
                }),
            )
            .map_err(|error| NotifierError::Render(error.to_string()))
    }
}

#[async_trait]
impl Notifier for MailGatewayNotifier {
    async fn notify(&self, artifact: &ReportArtifact) -> NotifierResult<()> {
        let body = Self::render_body(artifact)?;
        let message = json!({
            "from": self.settings.sender,
            "to": self.settings.recipients,
            "subject": self.settings.subject,
            "body": body,
        });
        let response = self
            .http
            .post(&self.settings.endpoint)
            .json(&message)
            .send()
            .await
            .map_err(NotifierError::delivery)?;
        let status = response.status();
        if !status.is_success() {
            return Err(NotifierError::Rejected(status.as_u16()));
        }
        debug!(
            artifact = artifact.name(),
            recipients = self.settings.recipients.len(),
            "report notification dispatched"
        );
        Ok(())
    }
}
