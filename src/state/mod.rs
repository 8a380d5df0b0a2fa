mod kinds;
mod transitions;

use std::{fmt, sync::Arc};

use log::trace;

use crate::validation::{ErrorFormatter, LengthBounds, Pipeline};

pub use kinds::{RegexFieldBuilder, input_text, phone_number, regex_text};
pub use transitions::{FieldEvent, reduce};

/// Immutable validation setup shared by every clone of a field.
#[derive(Clone)]
pub struct FieldSpec {
    pub pipeline: Pipeline,
    pub error_for: ErrorFormatter,
}

impl FieldSpec {
    pub fn new(
        pipeline: Pipeline,
        error_for: impl Fn(Option<&str>) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            pipeline,
            error_for: Arc::new(error_for),
        }
    }
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self::new(Pipeline::default(), |_| String::new())
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("pipeline", &self.pipeline)
            .finish_non_exhaustive()
    }
}

/// Text, focus history and error visibility of a single input field.
///
/// Errors only become visible once the field has been focused at least once
/// and then asked to show them, usually when it loses focus.
#[derive(Debug, Clone)]
pub struct FieldState {
    spec: Arc<FieldSpec>,
    label: Option<String>,
    text: String,
    focused: bool,
    focused_dirty: bool,
    display_errors: bool,
}

impl Default for FieldState {
    fn default() -> Self {
        Self::new(FieldSpec::default())
    }
}

impl FieldState {
    pub fn new(spec: FieldSpec) -> Self {
        Self::from_shared(Arc::new(spec))
    }

    pub fn from_shared(spec: Arc<FieldSpec>) -> Self {
        Self {
            spec,
            label: None,
            text: String::new(),
            focused: false,
            focused_dirty: false,
            display_errors: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the field was ever focused. Never resets.
    pub fn is_focused_dirty(&self) -> bool {
        self.focused_dirty
    }

    pub fn displays_errors(&self) -> bool {
        self.display_errors
    }

    pub fn bounds(&self) -> LengthBounds {
        self.spec.pipeline.bounds()
    }

    pub fn max_length(&self) -> Option<usize> {
        self.bounds().max
    }

    pub fn min_length(&self) -> Option<usize> {
        self.bounds().min
    }

    pub fn is_optional(&self) -> bool {
        self.spec.pipeline.is_optional()
    }

    pub fn is_valid(&self) -> bool {
        self.spec.pipeline.is_valid(&self.text)
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    pub fn on_focus_change(&mut self, focused: bool) {
        self.focused = focused;
        if focused {
            self.focused_dirty = true;
        }
        trace!(
            "field {:?} focus={focused} dirty={}",
            self.label, self.focused_dirty
        );
    }

    pub fn enable_show_errors(&mut self) {
        if self.focused_dirty {
            self.display_errors = true;
        }
    }

    pub fn clear_errors(&mut self) {
        self.display_errors = false;
    }

    /// Marks the field as visited and surfaces its error immediately.
    pub fn force_error(&mut self) {
        self.focused_dirty = true;
        self.enable_show_errors();
    }

    pub fn show_errors(&self) -> bool {
        !self.is_valid() && self.display_errors
    }

    pub fn error(&self) -> Option<String> {
        if self.show_errors() {
            Some((self.spec.error_for)(self.label()))
        } else {
            None
        }
    }
}
