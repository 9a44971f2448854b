use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckOptions {
    /// Registered patterns allowed to have no reference, such as health or
    /// metrics endpoints. Never hides a non-existent route.
    pub tolerated: Vec<String>,
}

impl CheckOptions {
    pub fn builder() -> CheckOptionsBuilder {
        CheckOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if let Some(index) = self.tolerated.iter().position(|p| p.is_empty()) {
            return Err(OptionsError::EmptyToleratedPattern { index });
        }
        Ok(())
    }

    pub(crate) fn tolerates(&self, pattern: &str) -> bool {
        self.tolerated.iter().any(|p| p == pattern)
    }
}

#[derive(Debug, Default, Clone)]
pub struct CheckOptionsBuilder {
    options: CheckOptions,
}

impl CheckOptionsBuilder {
    pub fn tolerate<S: Into<String>>(mut self, pattern: S) -> Self {
        self.options.tolerated.push(pattern.into());
        self
    }

    pub fn tolerated<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.tolerated = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Result<CheckOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("tolerated pattern at index {index} is empty")]
    EmptyToleratedPattern { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_tolerated_patterns() {
        let options = CheckOptions::builder()
            .tolerate("/healthz")
            .tolerate("/metrics")
            .build()
            .unwrap();
        assert!(options.tolerates("/healthz"));
        assert!(!options.tolerates("/"));
    }

    #[test]
    fn empty_tolerated_pattern_is_rejected() {
        let err = CheckOptions::builder()
            .tolerated(["/ok", ""])
            .build()
            .unwrap_err();
        assert_eq!(err, OptionsError::EmptyToleratedPattern { index: 1 });
    }
}
