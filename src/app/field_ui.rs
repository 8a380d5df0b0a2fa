use anyhow::{Context, Result};
use serde_json::Value;

use crate::{
    form::FormState,
    io::{
        FormDefinition,
        output::{self, OutputOptions},
    },
};

use super::{options::UiOptions, runtime::App};

/// Entry point that runs a form in the terminal and returns the submitted values.
#[derive(Debug)]
pub struct FieldUI {
    form: FormState,
    title: Option<String>,
    options: UiOptions,
    output: Option<OutputOptions>,
}

impl FieldUI {
    pub fn new(form: FormState) -> Self {
        Self {
            form,
            title: None,
            options: UiOptions::default(),
            output: None,
        }
    }

    pub fn from_definition(definition: &FormDefinition) -> Result<Self> {
        let form = definition.build().context("failed to build form")?;
        let ui = Self::new(form);
        Ok(match &definition.title {
            Some(title) => ui.with_title(title.clone()),
            None => ui,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_output(mut self, output: OutputOptions) -> Self {
        self.output = Some(output);
        self
    }

    pub fn run(self) -> Result<Value> {
        let FieldUI {
            form,
            title,
            options,
            output,
        } = self;

        if let Some(output) = output.as_ref() {
            output.ensure_available()?;
        }
        let value = App::new(form, options, title).run()?;
        if let Some(output) = output {
            output::emit(&value, &output)?;
        }
        Ok(value)
    }
}
