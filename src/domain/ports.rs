use crate::domain::model::{FetchOutcome, Identifier, Locale, Resolution};
use async_trait::async_trait;
use std::time::Duration;

/// Maps a free-text drug name to its canonical identifier. Never fails:
/// transport and decoding problems come back as `Resolution::ServiceError`.
#[async_trait]
pub trait IdentifierResolver: Send + Sync {
    async fn resolve(&self, name: &str) -> Resolution;
}

#[async_trait]
pub trait InteractionFetcher: Send + Sync {
    async fn fetch(&self, id_a: &Identifier, id_b: &Identifier) -> FetchOutcome;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn bind_addr(&self) -> String;
    fn title(&self) -> String;
    fn locale(&self) -> Locale;
}
