// Runtime-accessor strategy: environment variables and introspection closures.

use crate::error::StrategyError;
use crate::resolver::Strategy;

/// Pulls a value from the running process itself: an environment variable or
/// an arbitrary introspection closure.
pub struct RuntimeAccessor {
    label: String,
    accessor: Box<dyn Fn() -> Option<String> + Send + Sync>,
}

impl RuntimeAccessor {
    pub fn new<F>(label: impl Into<String>, accessor: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            accessor: Box::new(accessor),
        }
    }

    /// Accessor over an environment variable.
    pub fn env(name: impl Into<String>) -> Self {
        let name = name.into();
        let label = format!("env:{name}");
        Self::new(label, move || std::env::var(&name).ok())
    }
}

impl Strategy for RuntimeAccessor {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn attempt(&self) -> Result<String, StrategyError> {
        (self.accessor)().ok_or_else(|| StrategyError::Accessor {
            label: self.label.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_value_is_returned() {
        let accessor = RuntimeAccessor::new("runtime:os", || Some("linux".to_string()));
        assert_eq!(accessor.attempt().unwrap(), "linux");
    }

    #[test]
    fn closure_none_is_unavailable() {
        let accessor = RuntimeAccessor::new("runtime:none", || None);
        assert!(matches!(
            accessor.attempt(),
            Err(StrategyError::Accessor { .. })
        ));
    }

    #[test]
    fn env_accessor_reads_the_variable() {
        // PATH is set in any environment these tests run in.
        let accessor = RuntimeAccessor::env("PATH");
        assert!(!accessor.attempt().unwrap().is_empty());
        assert_eq!(accessor.describe(), "env:PATH");
    }

    #[test]
    fn unset_variable_is_unavailable() {
        let accessor = RuntimeAccessor::env("BUILDSTAMP_TEST_UNSET_VARIABLE");
        assert!(matches!(
            accessor.attempt(),
            Err(StrategyError::Accessor { .. })
        ));
    }
}
