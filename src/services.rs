use crate::config::SiteConfig;
use crate::email::EmailClient;
use crate::github::ContributionsClient;

/// Outbound clients shared by every request through Leptos context.
#[derive(Debug, Clone)]
pub struct Services {
    pub contributions: ContributionsClient,
    /// `None` when email delivery isn't configured.
    pub email: Option<EmailClient>,
}

impl Services {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            contributions: ContributionsClient::new(
                config.contributions_api_url.clone(),
                config.contributions_cache_ttl,
            ),
            email: config.email.clone().map(EmailClient::new),
        }
    }
}
