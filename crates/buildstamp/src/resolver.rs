// Layered fallback resolution for metadata fields.
//
// A `FieldQuery` pairs a field name with an ordered chain of strategies. The
// resolver walks the chain, isolates each strategy behind a failure boundary,
// and stops at the first non-empty value. Resolution never fails: when the
// whole chain comes up empty the caller's default is substituted.

use crate::error::StrategyError;
use std::panic::{self, AssertUnwindSafe};

/// One way of obtaining a field's value from a specific external source.
pub trait Strategy {
    /// A short provenance label, e.g. `manifest:Cargo.toml` or `command:git`.
    fn describe(&self) -> String;

    /// Try to produce a value. Failure of any kind is non-fatal to the
    /// resolution; it only means the next strategy in the chain is consulted.
    fn attempt(&self) -> Result<String, StrategyError>;
}

/// A named field together with its ordered fallback chain.
///
/// Built once per lookup and discarded afterwards; no state survives a
/// resolution.
pub struct FieldQuery {
    field: String,
    strategies: Vec<Box<dyn Strategy>>,
}

impl FieldQuery {
    /// Start an empty query for `field`.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            strategies: Vec::new(),
        }
    }

    /// Append a strategy to the end of the fallback chain.
    pub fn with_strategy(mut self, strategy: impl Strategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// The field this query resolves.
    pub fn field(&self) -> &str {
        &self.field
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionSource {
    /// The strategy with this label produced the value.
    Strategy(String),
    /// Every strategy came up empty; the caller's default was used.
    Default,
}

/// The outcome of resolving a single field. Always carries a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionOutcome {
    pub value: String,
    pub source: ResolutionSource,
}

/// Stateless executor of fallback chains.
pub struct MetadataResolver;

impl MetadataResolver {
    /// Walk the query's chain in order and return the first non-empty value,
    /// or `default` when the whole chain comes up empty.
    ///
    /// Each attempt runs behind a scoped failure boundary: errors and panics
    /// are contained here and logged at debug level, never propagated. Later
    /// strategies are not invoked once one has succeeded.
    pub fn resolve(query: &FieldQuery, default: &str) -> ResolutionOutcome {
        for strategy in &query.strategies {
            let label = strategy.describe();
            match panic::catch_unwind(AssertUnwindSafe(|| strategy.attempt())) {
                Ok(Ok(value)) if !value.is_empty() => {
                    tracing::debug!(field = %query.field, source = %label, "resolved");
                    return ResolutionOutcome {
                        value,
                        source: ResolutionSource::Strategy(label),
                    };
                }
                Ok(Ok(_)) => {
                    tracing::debug!(field = %query.field, source = %label, "empty value, falling through");
                }
                Ok(Err(err)) => {
                    tracing::debug!(field = %query.field, source = %label, error = %err, "strategy unavailable");
                }
                Err(_) => {
                    tracing::debug!(field = %query.field, source = %label, "strategy panicked");
                }
            }
        }

        tracing::debug!(field = %query.field, default, "no strategy succeeded, using default");
        ResolutionOutcome {
            value: default.to_string(),
            source: ResolutionSource::Default,
        }
    }
}
