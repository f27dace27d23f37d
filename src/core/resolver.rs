use crate::core::rxnav::RxNavSettings;
use crate::core::{Identifier, IdentifierResolver, Resolution};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

pub struct RxNavResolver {
    client: Client,
    settings: RxNavSettings,
}

impl RxNavResolver {
    pub fn new(client: Client, settings: RxNavSettings) -> Self {
        Self { client, settings }
    }
}

/// Pulls the first id out of `{ "idGroup": { "rxnormId": [...] } }`.
pub fn parse_rxcui(body: &Value) -> Option<Identifier> {
    let first = body
        .get("idGroup")?
        .get("rxnormId")?
        .as_array()?
        .first()?;

    let id = match first {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };

    if id.is_empty() {
        None
    } else {
        Some(Identifier::new(id))
    }
}

#[async_trait]
impl IdentifierResolver for RxNavResolver {
    async fn resolve(&self, name: &str) -> Resolution {
        let url = self.settings.endpoint("rxcui.json");
        tracing::debug!("Resolving '{}' via {}", name, url);

        let response = match self.client.get(&url).query(&[("name", name)]).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("⚠️ Name lookup for '{}' failed: {}", name, e);
                return Resolution::ServiceError;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("⚠️ Name lookup for '{}' returned {}", name, status);
            return Resolution::ServiceError;
        }

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("⚠️ Name lookup for '{}' sent an unreadable body: {}", name, e);
                return Resolution::ServiceError;
            }
        };

        match parse_rxcui(&body) {
            Some(id) => {
                tracing::debug!("'{}' resolved to RxCUI {}", name, id);
                Resolution::Found(id)
            }
            None => {
                tracing::info!("No RxCUI known for '{}'", name);
                Resolution::NotFound
            }
        }
    }
}
