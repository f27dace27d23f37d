use crate::core::rxnav::RxNavSettings;
use crate::core::{FetchOutcome, Identifier, InteractionFetcher, InteractionPair};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

/// Field names tried in order; the first one holding a non-empty list wins.
pub const PRIMARY_GROUP_FIELDS: &[&str] = &["interactionTypeGroup"];
pub const PRIMARY_TYPE_FIELDS: &[&str] = &["interactionType"];
pub const LIST_GROUP_FIELDS: &[&str] = &["fullInteractionTypeGroup", "interactionTypeGroup"];
pub const LIST_TYPE_FIELDS: &[&str] = &["fullInteractionType", "interactionType"];
pub const PAIR_FIELD: &str = "interactionPair";

/// Joins the two RxCUIs in the `rxcuis` query parameter of the list endpoint.
pub const IDENTIFIER_DELIMITER: &str = "+";

pub const UNKNOWN_SEVERITY: &str = "unknown";

enum CallResult {
    Body(Value),
    /// Transport error, timeout or non-2xx status.
    Unavailable,
    /// 2xx status but the body is not JSON.
    Malformed,
}

pub struct RxNavFetcher {
    client: Client,
    settings: RxNavSettings,
}

impl RxNavFetcher {
    pub fn new(client: Client, settings: RxNavSettings) -> Self {
        Self { client, settings }
    }

    async fn call(&self, label: &str, request: RequestBuilder) -> CallResult {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("⚠️ {} request failed: {}", label, e);
                return CallResult::Unavailable;
            }
        };

        let status = response.status();
        tracing::debug!("{} response status: {}", label, status);
        if !status.is_success() {
            return CallResult::Unavailable;
        }

        match response.json::<Value>().await {
            Ok(body) => CallResult::Body(body),
            Err(e) => {
                tracing::warn!("⚠️ {} returned an unreadable body: {}", label, e);
                CallResult::Malformed
            }
        }
    }

    async fn query_primary(&self, id_a: &Identifier, id_b: &Identifier) -> CallResult {
        let url = self.settings.endpoint("interaction/interaction.json");
        tracing::debug!("Querying {} for {} / {}", url, id_a, id_b);
        let request = self
            .client
            .get(&url)
            .query(&[("rxcui1", id_a.as_str()), ("rxcui2", id_b.as_str())]);
        self.call("Interaction endpoint", request).await
    }

    async fn query_list(&self, id_a: &Identifier, id_b: &Identifier) -> CallResult {
        let url = self.settings.endpoint("interaction/list.json");
        let rxcuis = format!("{}{}{}", id_a, IDENTIFIER_DELIMITER, id_b);
        tracing::debug!("Querying {} for {}", url, rxcuis);
        let request = self.client.get(&url).query(&[("rxcuis", rxcuis.as_str())]);
        self.call("Interaction list endpoint", request).await
    }
}

#[async_trait]
impl InteractionFetcher for RxNavFetcher {
    async fn fetch(&self, id_a: &Identifier, id_b: &Identifier) -> FetchOutcome {
        // Any 2xx from the primary endpoint is final, even with zero pairs.
        match self.query_primary(id_a, id_b).await {
            CallResult::Body(body) => {
                let pairs = parse_interaction_body(&body);
                tracing::debug!("Interaction endpoint returned {} pair(s)", pairs.len());
                return FetchOutcome::Pairs(pairs);
            }
            CallResult::Malformed => return FetchOutcome::Failed,
            CallResult::Unavailable => {
                tracing::info!("🔁 Interaction endpoint unavailable, falling back to list endpoint");
            }
        }

        match self.query_list(id_a, id_b).await {
            CallResult::Body(body) => {
                let pairs = parse_list_body(&body);
                tracing::debug!("Interaction list endpoint returned {} pair(s)", pairs.len());
                FetchOutcome::Pairs(pairs)
            }
            CallResult::Unavailable | CallResult::Malformed => {
                tracing::warn!("⚠️ Both interaction endpoints failed for {} / {}", id_a, id_b);
                FetchOutcome::Failed
            }
        }
    }
}

/// Body of `interaction/interaction.json`.
pub fn parse_interaction_body(body: &Value) -> Vec<InteractionPair> {
    collect_pairs(body, PRIMARY_GROUP_FIELDS, PRIMARY_TYPE_FIELDS)
}

/// Body of `interaction/list.json`, which uses either the `full*` or the
/// plain group and type names.
pub fn parse_list_body(body: &Value) -> Vec<InteractionPair> {
    collect_pairs(body, LIST_GROUP_FIELDS, LIST_TYPE_FIELDS)
}

fn first_non_empty<'a>(node: &'a Value, candidates: &[&str]) -> &'a [Value] {
    candidates
        .iter()
        .filter_map(|field| node.get(*field).and_then(Value::as_array))
        .find(|items| !items.is_empty())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn collect_pairs(body: &Value, group_fields: &[&str], type_fields: &[&str]) -> Vec<InteractionPair> {
    let mut pairs = Vec::new();
    for group in first_non_empty(body, group_fields) {
        for interaction_type in first_non_empty(group, type_fields) {
            for pair in first_non_empty(interaction_type, &[PAIR_FIELD]) {
                pairs.push(parse_pair(pair));
            }
        }
    }
    pairs
}

pub fn parse_pair(pair: &Value) -> InteractionPair {
    let severity = match pair.get("severity") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => UNKNOWN_SEVERITY.to_string(),
    };

    let text = |field: &str| {
        pair.get(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    InteractionPair {
        severity,
        description: text("description"),
        comment: text("comment"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    fn fetcher_for(server: &MockServer) -> RxNavFetcher {
        let settings = RxNavSettings::new(server.base_url(), Duration::from_secs(8));
        let client = settings.build_client().unwrap();
        RxNavFetcher::new(client, settings)
    }

    fn ids() -> (Identifier, Identifier) {
        (Identifier::new("1191"), Identifier::new("11289"))
    }

    fn pair(severity: &str, description: &str) -> Value {
        json!({
            "interactionConcept": [],
            "severity": severity,
            "description": description
        })
    }

    #[test]
    fn test_parse_interaction_body_flattens_groups() {
        let body = json!({
            "interactionTypeGroup": [
                {"interactionType": [
                    {"interactionPair": [pair("high", "bleeding risk"), pair("N/A", "additive effect")]}
                ]},
                {"interactionType": [
                    {"interactionPair": [pair("low", "minor")]}
                ]}
            ]
        });

        let pairs = parse_interaction_body(&body);
        let severities: Vec<&str> = pairs.iter().map(|p| p.severity.as_str()).collect();
        assert_eq!(severities, vec!["high", "N/A", "low"]);
        assert_eq!(pairs[0].description, "bleeding risk");
        assert_eq!(pairs[0].comment, "");
    }

    #[test]
    fn test_parse_interaction_body_without_groups_is_empty() {
        assert!(parse_interaction_body(&json!({"nlmDisclaimer": "..."})).is_empty());
        assert!(parse_interaction_body(&json!({"interactionTypeGroup": []})).is_empty());
    }

    #[test]
    fn test_parse_list_body_prefers_full_names() {
        let body = json!({
            "fullInteractionTypeGroup": [
                {"fullInteractionType": [
                    {"interactionPair": [pair("high", "from full")]}
                ]}
            ],
            "interactionTypeGroup": [
                {"interactionType": [
                    {"interactionPair": [pair("low", "from plain")]}
                ]}
            ]
        });

        let pairs = parse_list_body(&body);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].description, "from full");
    }

    #[test]
    fn test_parse_list_body_falls_back_to_plain_names() {
        let body = json!({
            "fullInteractionTypeGroup": [],
            "interactionTypeGroup": [
                {"fullInteractionType": [],
                 "interactionType": [
                    {"interactionPair": [pair("low", "from plain")]}
                ]}
            ]
        });

        let pairs = parse_list_body(&body);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].description, "from plain");
    }

    #[test]
    fn test_parse_pair_defaults() {
        let parsed = parse_pair(&json!({"severity": null, "description": null}));
        assert_eq!(
            parsed,
            InteractionPair {
                severity: "unknown".to_string(),
                description: String::new(),
                comment: String::new(),
            }
        );

        assert_eq!(parse_pair(&json!({"severity": ""})).severity, "unknown");
        assert_eq!(parse_pair(&json!({"severity": 3})).severity, "3");
        assert_eq!(parse_pair(&json!({})).severity, "unknown");
    }

    #[tokio::test]
    async fn test_primary_success_with_zero_pairs_skips_fallback() {
        let server = MockServer::start_async().await;
        let primary = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/interaction/interaction.json")
                    .query_param("rxcui1", "1191")
                    .query_param("rxcui2", "11289");
                then.status(200)
                    .json_body(json!({"nlmDisclaimer": "It is not the intention..."}));
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET).path("/interaction/list.json");
                then.status(200).json_body(json!({}));
            })
            .await;

        let (a, b) = ids();
        let outcome = fetcher_for(&server).fetch(&a, &b).await;

        assert_eq!(outcome, FetchOutcome::Pairs(vec![]));
        primary.assert_async().await;
        list.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_primary_failure_uses_list_endpoint() {
        let server = MockServer::start_async().await;
        let primary = server
            .mock_async(|when, then| {
                when.method(GET).path("/interaction/interaction.json");
                then.status(404);
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/interaction/list.json")
                    .query_param("rxcuis", "1191+11289");
                then.status(200).json_body(json!({
                    "fullInteractionTypeGroup": [
                        {"fullInteractionType": [
                            {"interactionPair": [{
                                "severity": "N/A",
                                "description": "Warfarin may increase bleeding risk.",
                                "comment": "Monitor INR."
                            }]}
                        ]}
                    ]
                }));
            })
            .await;

        let (a, b) = ids();
        let outcome = fetcher_for(&server).fetch(&a, &b).await;

        primary.assert_async().await;
        list.assert_async().await;
        assert_eq!(
            outcome,
            FetchOutcome::Pairs(vec![InteractionPair {
                severity: "N/A".to_string(),
                description: "Warfarin may increase bleeding risk.".to_string(),
                comment: "Monitor INR.".to_string(),
            }])
        );
    }

    #[tokio::test]
    async fn test_list_endpoint_empty_result() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/interaction/interaction.json");
                then.status(500);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/interaction/list.json");
                then.status(200).json_body(json!({"nlmDisclaimer": "..."}));
            })
            .await;

        let (a, b) = ids();
        let outcome = fetcher_for(&server).fetch(&a, &b).await;
        assert_eq!(outcome, FetchOutcome::Pairs(vec![]));
    }

    #[tokio::test]
    async fn test_both_endpoints_failing_is_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/interaction/interaction.json");
                then.status(500);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/interaction/list.json");
                then.status(502);
            })
            .await;

        let (a, b) = ids();
        let outcome = fetcher_for(&server).fetch(&a, &b).await;
        assert_eq!(outcome, FetchOutcome::Failed);
        assert_ne!(outcome, FetchOutcome::Pairs(vec![]));
    }

    #[tokio::test]
    async fn test_malformed_primary_body_is_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/interaction/interaction.json");
                then.status(200).body("not json");
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET).path("/interaction/list.json");
                then.status(200).json_body(json!({}));
            })
            .await;

        let (a, b) = ids();
        let outcome = fetcher_for(&server).fetch(&a, &b).await;

        assert_eq!(outcome, FetchOutcome::Failed);
        list.assert_hits_async(0).await;
    }
}
