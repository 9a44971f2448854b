use crate::record::RecordError;
use serde_json::json;
use thiserror::Error;

/// Registered patterns that no reference names. They can be matched but not
/// composed by name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("irreversible routes: {0:?}")]
pub struct IrreversibleRoutes(pub Vec<String>);

/// Referenced patterns that were never registered. Links built from them
/// lead nowhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("non-existent routes: {0:?}")]
pub struct NonExistentRoutes(pub Vec<String>);

impl IrreversibleRoutes {
    pub fn routes(&self) -> &[String] {
        &self.0
    }
}

impl NonExistentRoutes {
    pub fn routes(&self) -> &[String] {
        &self.0
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReverseError {
    /// The reference value is not a route table.
    #[error("invalid reference record: {0}")]
    InvalidInput(#[from] RecordError),
    #[error(transparent)]
    NonExistentRoutes(#[from] NonExistentRoutes),
    #[error(transparent)]
    IrreversibleRoutes(#[from] IrreversibleRoutes),
}

impl ReverseError {
    pub fn kind(&self) -> &'static str {
        match self {
            ReverseError::InvalidInput(_) => "invalid_input",
            ReverseError::NonExistentRoutes(_) => "non_existent_routes",
            ReverseError::IrreversibleRoutes(_) => "irreversible_routes",
        }
    }

    /// The patterns behind a route mismatch; empty for invalid input.
    pub fn routes(&self) -> &[String] {
        match self {
            ReverseError::InvalidInput(_) => &[],
            ReverseError::NonExistentRoutes(err) => err.routes(),
            ReverseError::IrreversibleRoutes(err) => err.routes(),
        }
    }

    pub fn detail(&self) -> serde_json::Value {
        match self {
            ReverseError::InvalidInput(err) => json!({
                "kind": self.kind(),
                "cause": err.to_string(),
            }),
            _ => json!({
                "kind": self.kind(),
                "routes": self.routes(),
            }),
        }
    }
}

pub type ReverseResult<T> = Result<T, ReverseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_quote_each_route() {
        let err = NonExistentRoutes(vec!["/other/".into()]);
        assert_eq!(err.to_string(), r#"non-existent routes: ["/other/"]"#);

        let err = ReverseError::from(IrreversibleRoutes(vec!["/".into(), "/a/".into()]));
        assert_eq!(err.to_string(), r#"irreversible routes: ["/", "/a/"]"#);
    }

    #[test]
    fn detail_names_the_kind_and_routes() {
        let err = ReverseError::from(NonExistentRoutes(vec!["/x".into()]));
        assert_eq!(
            err.detail(),
            json!({ "kind": "non_existent_routes", "routes": ["/x"] })
        );

        let err = ReverseError::from(RecordError::NonRecord { type_name: "i32" });
        assert_eq!(err.detail()["kind"], "invalid_input");
        assert!(err.routes().is_empty());
    }
}
