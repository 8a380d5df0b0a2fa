use std::sync::Arc;

use crate::validation::{
    ErrorFormatter, FieldConfigError, LengthBounds, PatternMatcher, Pipeline, Predicate, Stage,
    rules::{common_error_message, field_valid, is_phone_valid},
};

use super::{FieldSpec, FieldState};

fn preset(label: Option<&str>, pipeline: Pipeline) -> FieldState {
    let state = FieldState::new(FieldSpec::new(pipeline, common_error_message));
    match label {
        Some(label) => state.with_label(label),
        None => state,
    }
}

/// Ten-digit mobile number starting with 6-9.
pub fn phone_number(label: Option<&str>, bounds: LengthBounds, optional: bool) -> FieldState {
    preset(
        label,
        Pipeline::new(is_phone_valid)
            .with_bounds(bounds)
            .with_optional(optional),
    )
}

/// Free text that only has to be non-empty.
pub fn input_text(label: Option<&str>, bounds: LengthBounds, optional: bool) -> FieldState {
    preset(
        label,
        Pipeline::new(field_valid)
            .with_bounds(bounds)
            .with_optional(optional),
    )
}

pub fn regex_text(pattern: impl Into<String>) -> RegexFieldBuilder {
    RegexFieldBuilder::default().with_pattern(pattern)
}

/// Non-empty text that must additionally satisfy a pattern.
#[derive(Clone)]
pub struct RegexFieldBuilder {
    label: Option<String>,
    bounds: LengthBounds,
    optional: bool,
    pattern: Option<String>,
    base: Predicate,
    matcher: Option<PatternMatcher>,
    error_for: ErrorFormatter,
}

impl Default for RegexFieldBuilder {
    fn default() -> Self {
        Self {
            label: None,
            bounds: LengthBounds::UNBOUNDED,
            optional: false,
            pattern: None,
            base: Arc::new(field_valid),
            matcher: None,
            error_for: Arc::new(common_error_message),
        }
    }
}

impl RegexFieldBuilder {
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_bounds(mut self, bounds: LengthBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Replaces the non-empty check that runs before the pattern.
    pub fn with_base(mut self, base: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.base = Arc::new(base);
        self
    }

    /// Replaces the whole-string regex match with a custom `(text, pattern)` check.
    pub fn with_matcher(
        mut self,
        matcher: impl Fn(&str, &str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.matcher = Some(Arc::new(matcher));
        self
    }

    pub fn with_error(
        mut self,
        error_for: impl Fn(Option<&str>) -> String + Send + Sync + 'static,
    ) -> Self {
        self.error_for = Arc::new(error_for);
        self
    }

    pub fn build(self) -> Result<FieldState, FieldConfigError> {
        let base = Arc::clone(&self.base);
        let mut pipeline = Pipeline::new(move |text| base(text))
            .with_bounds(self.bounds)
            .with_optional(self.optional);

        if let Some(pattern) = self.pattern.filter(|pattern| !pattern.is_empty()) {
            let stage = match self.matcher {
                Some(matcher) => Stage::Pattern { pattern, matcher },
                None => Stage::regex(pattern)?,
            };
            pipeline = pipeline.with_stage(stage);
        }

        let spec = FieldSpec {
            pipeline,
            error_for: self.error_for,
        };
        let state = FieldState::new(spec);
        Ok(match self.label {
            Some(label) => state.with_label(label),
            None => state,
        })
    }
}
