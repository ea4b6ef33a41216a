use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Binding target for the query and URI binding demos. Both fields are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Person {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{}", .failures.join("\n"))]
pub struct BindingError {
    pub failures: Vec<String>,
}

impl Person {
    pub fn validate(self) -> Result<Self, BindingError> {
        let failures: Vec<String> = [("Name", &self.name), ("Address", &self.address)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| {
                format!(
                    "Key: 'Person.{field}' Error:Field validation for '{field}' failed on the 'required' tag"
                )
            })
            .collect();

        if failures.is_empty() {
            Ok(self)
        } else {
            Err(BindingError { failures })
        }
    }
}
