use crate::core::aggregator::aggregate;
use crate::core::fetcher::RxNavFetcher;
use crate::core::messages::Messages;
use crate::core::resolver::RxNavResolver;
use crate::core::rxnav::RxNavSettings;
use crate::core::{
    CheckReport, FetchOutcome, IdentifierResolver, InteractionFetcher, Locale, OutcomeStatus,
};
use crate::utils::error::Result;
use std::sync::Arc;

/// Runs one drug pair through resolution, interaction lookup and aggregation.
pub struct InteractionChecker {
    resolver: Arc<dyn IdentifierResolver>,
    fetcher: Arc<dyn InteractionFetcher>,
    messages: Messages,
}

impl InteractionChecker {
    pub fn new(
        resolver: Arc<dyn IdentifierResolver>,
        fetcher: Arc<dyn InteractionFetcher>,
        locale: Locale,
    ) -> Self {
        Self {
            resolver,
            fetcher,
            messages: Messages::new(locale),
        }
    }

    /// Wires the RxNav-backed resolver and fetcher around a single HTTP client.
    pub fn from_settings(settings: &RxNavSettings, locale: Locale) -> Result<Self> {
        let client = settings.build_client()?;
        let resolver = RxNavResolver::new(client.clone(), settings.clone());
        let fetcher = RxNavFetcher::new(client, settings.clone());
        Ok(Self::new(Arc::new(resolver), Arc::new(fetcher), locale))
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub async fn check(&self, drug_a: &str, drug_b: &str) -> CheckReport {
        let drug_a = drug_a.trim();
        let drug_b = drug_b.trim();
        let report = |status, message: String| CheckReport {
            status,
            message,
            drug_a: drug_a.to_string(),
            drug_b: drug_b.to_string(),
            interaction: None,
        };

        if drug_a.is_empty() || drug_b.is_empty() {
            return report(
                OutcomeStatus::Error,
                self.messages.missing_input().to_string(),
            );
        }

        tracing::info!("🔍 Checking '{}' against '{}'", drug_a, drug_b);

        let resolved_a = self.resolver.resolve(drug_a).await;
        let resolved_b = self.resolver.resolve(drug_b).await;

        let (id_a, id_b) = match (resolved_a.identifier(), resolved_b.identifier()) {
            (Some(id_a), Some(id_b)) => (id_a, id_b),
            _ => {
                let missing: Vec<&str> = [(drug_a, &resolved_a), (drug_b, &resolved_b)]
                    .into_iter()
                    .filter(|(_, resolution)| resolution.identifier().is_none())
                    .map(|(name, _)| name)
                    .collect();
                tracing::info!("Unresolved drug name(s): {}", missing.join(", "));
                return report(OutcomeStatus::NotFound, self.messages.not_found(&missing));
            }
        };

        match self.fetcher.fetch(id_a, id_b).await {
            FetchOutcome::Failed => {
                tracing::warn!("⚠️ Interaction lookup failed for {} / {}", id_a, id_b);
                report(
                    OutcomeStatus::Error,
                    self.messages.service_error().to_string(),
                )
            }
            FetchOutcome::Pairs(pairs) if pairs.is_empty() => report(
                OutcomeStatus::NoInteraction,
                self.messages.no_interaction().to_string(),
            ),
            FetchOutcome::Pairs(pairs) => {
                let aggregated = aggregate(&pairs);
                tracing::info!(
                    "✅ {} interaction pair(s), severity: {}",
                    pairs.len(),
                    aggregated.severity
                );
                CheckReport {
                    interaction: Some(aggregated),
                    ..report(
                        OutcomeStatus::Interaction,
                        self.messages.interaction().to_string(),
                    )
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Identifier, InteractionPair, Resolution};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    struct MockResolver {
        known: HashMap<String, Resolution>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl MockResolver {
        fn new(known: &[(&str, Resolution)]) -> Self {
            Self {
                known: known
                    .iter()
                    .map(|(name, resolution)| (name.to_string(), resolution.clone()))
                    .collect(),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl IdentifierResolver for MockResolver {
        async fn resolve(&self, name: &str) -> Resolution {
            self.calls.lock().await.push(name.to_string());
            self.known
                .get(name)
                .cloned()
                .unwrap_or(Resolution::NotFound)
        }
    }

    struct MockFetcher {
        outcome: FetchOutcome,
        calls: Arc<Mutex<Vec<(Identifier, Identifier)>>>,
    }

    impl MockFetcher {
        fn new(outcome: FetchOutcome) -> Self {
            Self {
                outcome,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl InteractionFetcher for MockFetcher {
        async fn fetch(&self, id_a: &Identifier, id_b: &Identifier) -> FetchOutcome {
            self.calls.lock().await.push((id_a.clone(), id_b.clone()));
            self.outcome.clone()
        }
    }

    fn found(id: &str) -> Resolution {
        Resolution::Found(Identifier::new(id))
    }

    fn checker(
        resolver: MockResolver,
        fetcher: MockFetcher,
    ) -> (
        InteractionChecker,
        Arc<Mutex<Vec<String>>>,
        Arc<Mutex<Vec<(Identifier, Identifier)>>>,
    ) {
        let resolver_calls = resolver.calls.clone();
        let fetcher_calls = fetcher.calls.clone();
        let checker = InteractionChecker::new(Arc::new(resolver), Arc::new(fetcher), Locale::En);
        (checker, resolver_calls, fetcher_calls)
    }

    #[tokio::test]
    async fn test_blank_name_is_error_without_network() {
        let (checker, resolver_calls, fetcher_calls) = checker(
            MockResolver::new(&[("aspirin", found("1191"))]),
            MockFetcher::new(FetchOutcome::Pairs(vec![])),
        );

        let report = checker.check("aspirin", "   ").await;

        assert_eq!(report.status, OutcomeStatus::Error);
        assert_eq!(report.message, Messages::new(Locale::En).missing_input());
        assert!(resolver_calls.lock().await.is_empty());
        assert!(fetcher_calls.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_unresolved_name_is_listed_alone() {
        let (checker, resolver_calls, fetcher_calls) = checker(
            MockResolver::new(&[("aspirin", found("1191"))]),
            MockFetcher::new(FetchOutcome::Pairs(vec![])),
        );

        let report = checker.check(" aspirin ", "notadrug").await;

        assert_eq!(report.status, OutcomeStatus::NotFound);
        assert!(report.message.contains("notadrug"));
        assert!(!report.message.contains("aspirin"));
        assert_eq!(report.drug_a, "aspirin");
        assert_eq!(resolver_calls.lock().await.len(), 2);
        assert!(fetcher_calls.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_both_unresolved_keep_input_order() {
        let (checker, _, _) = checker(
            MockResolver::new(&[("foo", Resolution::ServiceError)]),
            MockFetcher::new(FetchOutcome::Pairs(vec![])),
        );

        let report = checker.check("foo", "bar").await;

        assert_eq!(report.status, OutcomeStatus::NotFound);
        assert!(report.message.contains("foo, bar"));
    }

    #[tokio::test]
    async fn test_fetch_failure_is_service_error() {
        let (checker, _, fetcher_calls) = checker(
            MockResolver::new(&[("aspirin", found("1191")), ("warfarin", found("11289"))]),
            MockFetcher::new(FetchOutcome::Failed),
        );

        let report = checker.check("aspirin", "warfarin").await;

        assert_eq!(report.status, OutcomeStatus::Error);
        assert_eq!(report.message, Messages::new(Locale::En).service_error());
        assert_eq!(
            fetcher_calls.lock().await.as_slice(),
            &[(Identifier::new("1191"), Identifier::new("11289"))]
        );
    }

    #[tokio::test]
    async fn test_empty_pairs_is_no_interaction() {
        let (checker, _, _) = checker(
            MockResolver::new(&[("aspirin", found("1191")), ("paracetamol", found("161"))]),
            MockFetcher::new(FetchOutcome::Pairs(vec![])),
        );

        let report = checker.check("aspirin", "paracetamol").await;

        assert_eq!(report.status, OutcomeStatus::NoInteraction);
        assert!(report.interaction.is_none());
    }

    #[tokio::test]
    async fn test_interaction_is_aggregated() {
        let (checker, _, _) = checker(
            MockResolver::new(&[("aspirin", found("1191")), ("warfarin", found("11289"))]),
            MockFetcher::new(FetchOutcome::Pairs(vec![InteractionPair {
                severity: "high".to_string(),
                description: "bleeding risk".to_string(),
                comment: String::new(),
            }])),
        );

        let report = checker.check("aspirin", "warfarin").await;

        assert_eq!(report.status, OutcomeStatus::Interaction);
        let interaction = report.interaction.unwrap();
        assert_eq!(interaction.severity, "high");
        assert_eq!(interaction.explanations, vec!["bleeding risk".to_string()]);
    }
}
