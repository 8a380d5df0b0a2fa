use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{DocumentFormat, FormDefinition};

fn parse_as<T: DeserializeOwned>(contents: &str, format: DocumentFormat) -> Result<T> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<T>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<T>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => {
            toml::from_str::<T>(contents).with_context(|| "failed to parse TOML document")
        }
    }
}

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    parse_as(contents, format)
}

pub fn parse_form_definition(contents: &str, format: DocumentFormat) -> Result<FormDefinition> {
    parse_as(contents, format).context("invalid form definition")
}
