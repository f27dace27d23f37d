pub mod aggregator;
pub mod checker;
pub mod fetcher;
pub mod messages;
pub mod resolver;
pub mod rxnav;

pub use crate::domain::model::{
    AggregatedResult, CheckReport, FetchOutcome, Identifier, InteractionPair, Locale,
    OutcomeStatus, Resolution,
};
pub use crate::domain::ports::{ConfigProvider, IdentifierResolver, InteractionFetcher};
pub use crate::utils::error::Result;
