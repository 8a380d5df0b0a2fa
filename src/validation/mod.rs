mod error;
pub mod rules;

use std::{fmt, sync::Arc};

use regex::Regex;

pub use error::FieldConfigError;

/// Predicate over the current text of a field.
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Secondary validator receiving the text and the configured pattern.
pub type PatternMatcher = Arc<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// Turns the field label into the message rendered under an invalid field.
pub type ErrorFormatter = Arc<dyn Fn(Option<&str>) -> String + Send + Sync>;

/// Length limits counted in `char`s. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl LengthBounds {
    pub const UNBOUNDED: LengthBounds = LengthBounds {
        min: None,
        max: None,
    };

    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }

    /// Maps signed limits onto bounds; any negative value is unbounded.
    pub fn from_raw(min: i64, max: i64) -> Self {
        Self {
            min: usize::try_from(min).ok(),
            max: usize::try_from(max).ok(),
        }
    }

    pub fn with_min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub fn admits(&self, len: usize) -> bool {
        if let Some(max) = self.max
            && len > max
        {
            return false;
        }
        if let Some(min) = self.min
            && len < min
        {
            return false;
        }
        true
    }
}

/// A check that runs after the base validator has accepted the text.
#[derive(Clone)]
pub enum Stage {
    Predicate {
        name: String,
        check: Predicate,
    },
    /// Whole-string regex match, compiled once.
    Regex { pattern: String, compiled: Regex },
    /// Caller-supplied `(text, pattern)` validator.
    Pattern {
        pattern: String,
        matcher: PatternMatcher,
    },
}

impl Stage {
    pub fn predicate(
        name: impl Into<String>,
        check: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        Stage::Predicate {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    pub fn regex(pattern: impl Into<String>) -> Result<Self, FieldConfigError> {
        let pattern = pattern.into();
        let compiled = rules::compile_full_match(&pattern)?;
        Ok(Stage::Regex { pattern, compiled })
    }

    pub fn pattern(
        pattern: impl Into<String>,
        matcher: impl Fn(&str, &str) -> bool + Send + Sync + 'static,
    ) -> Self {
        Stage::Pattern {
            pattern: pattern.into(),
            matcher: Arc::new(matcher),
        }
    }

    pub fn check(&self, text: &str) -> bool {
        match self {
            Stage::Predicate { check, .. } => check(text),
            Stage::Regex { compiled, .. } => compiled.is_match(text),
            Stage::Pattern { pattern, matcher } => matcher(text, pattern),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Stage::Predicate { name, .. } => name,
            Stage::Regex { pattern, .. } | Stage::Pattern { pattern, .. } => pattern,
        }
    }
}

impl fmt::Debug for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Predicate { name, .. } => f.debug_tuple("Predicate").field(name).finish(),
            Stage::Regex { pattern, .. } => f.debug_tuple("Regex").field(pattern).finish(),
            Stage::Pattern { pattern, .. } => f.debug_tuple("Pattern").field(pattern).finish(),
        }
    }
}

/// Length and optionality checks, then the base validator, then every stage in order.
///
/// Optionality only short-circuits the base validator: an empty optional
/// field still has to satisfy the extra stages.
#[derive(Clone)]
pub struct Pipeline {
    bounds: LengthBounds,
    optional: bool,
    base: Predicate,
    stages: Vec<Stage>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            bounds: LengthBounds::UNBOUNDED,
            optional: false,
            base: Arc::new(|_| true),
            stages: Vec::new(),
        }
    }
}

impl Pipeline {
    pub fn new(base: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self {
            base: Arc::new(base),
            ..Self::default()
        }
    }

    pub fn with_bounds(mut self, bounds: LengthBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn is_valid(&self, text: &str) -> bool {
        if !self.bounds.admits(text.chars().count()) {
            return false;
        }
        let base_ok = (self.optional && text.is_empty()) || (self.base)(text);
        base_ok && self.stages.iter().all(|stage| stage.check(text))
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("bounds", &self.bounds)
            .field("optional", &self.optional)
            .field("stages", &self.stages)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_bound_rejects_longer_text() {
        let pipeline = Pipeline::default().with_bounds(LengthBounds::default().with_max(3));
        assert!(pipeline.is_valid("abc"));
        assert!(!pipeline.is_valid("abcd"));
    }

    #[test]
    fn zero_max_only_admits_empty_text() {
        let pipeline = Pipeline::default().with_bounds(LengthBounds::default().with_max(0));
        assert!(pipeline.is_valid(""));
        assert!(!pipeline.is_valid("a"));
    }

    #[test]
    fn min_bound_applies_even_when_optional() {
        let pipeline = Pipeline::new(|_| true)
            .with_bounds(LengthBounds::default().with_min(2))
            .with_optional(true);
        assert!(!pipeline.is_valid(""));
        assert!(!pipeline.is_valid("a"));
        assert!(pipeline.is_valid("ab"));
    }

    #[test]
    fn lengths_count_chars_not_bytes() {
        let pipeline = Pipeline::default().with_bounds(LengthBounds::default().with_max(2));
        assert!(pipeline.is_valid("éé"));
    }

    #[test]
    fn optional_empty_skips_base_validator() {
        let pipeline = Pipeline::new(|_| false).with_optional(true);
        assert!(pipeline.is_valid(""));
        assert!(!pipeline.is_valid("x"));
    }

    #[test]
    fn stages_run_in_order_after_base() {
        let pipeline = Pipeline::new(|text| !text.is_empty())
            .with_stage(Stage::predicate("lowercase", |text| {
                text.chars().all(|ch| ch.is_ascii_lowercase())
            }))
            .with_stage(Stage::regex("[a-c]+").expect("pattern"));
        assert!(pipeline.is_valid("abc"));
        assert!(!pipeline.is_valid("abd"));
        assert!(!pipeline.is_valid("ABC"));
        assert!(!pipeline.is_valid(""));
    }

    #[test]
    fn stages_still_run_for_empty_optional_text() {
        let pipeline = Pipeline::new(|_| false)
            .with_optional(true)
            .with_stage(Stage::regex("\\d+").expect("pattern"));
        assert!(!pipeline.is_valid(""));
    }

    #[test]
    fn pattern_stage_receives_configured_pattern() {
        let stage = Stage::pattern("abc", |text, pattern| text.starts_with(pattern));
        assert!(stage.check("abcdef"));
        assert!(!stage.check("xyz"));
        assert_eq!(stage.name(), "abc");
    }

    #[test]
    fn raw_negative_bounds_are_unbounded() {
        assert_eq!(LengthBounds::from_raw(-1, -1), LengthBounds::UNBOUNDED);
        assert_eq!(
            LengthBounds::from_raw(0, 10),
            LengthBounds::new(Some(0), Some(10))
        );
    }
}
