//! Host-facing field configuration.

use std::fmt;
use std::sync::Arc;

use numeric::Constraints;

/// Fired with the canonical value on every idle-path change.
pub type ValueChangedCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Fired on every raw edit with the pass-through value and whether a
/// composition is active.
pub type RawEditCallback = Arc<dyn Fn(&str, bool) + Send + Sync>;

/// Fired on focus loss with the pass-through value.
pub type BlurCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Configuration a host supplies when mounting a field.
///
/// The core inspects only `value` and `constraints`; label, placeholder,
/// helper text, and the passthrough bag are forwarded verbatim through
/// [`RenderState`](crate::RenderState).
#[derive(Clone, Default)]
pub struct FieldConfig {
    /// Initial external value; absent seeds an empty field.
    pub value: Option<String>,
    pub constraints: Constraints,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub helper_text: Option<String>,
    /// Additional host-widget attributes, forwarded unmodified and never
    /// inspected.
    pub passthrough: Vec<(Arc<str>, Option<String>)>,
    pub on_value_change: Option<ValueChangedCallback>,
    pub on_change: Option<RawEditCallback>,
    pub on_blur: Option<BlurCallback>,
}

impl fmt::Debug for FieldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldConfig")
            .field("value", &self.value)
            .field("constraints", &self.constraints)
            .field("label", &self.label)
            .field("placeholder", &self.placeholder)
            .field("helper_text", &self.helper_text)
            .field("passthrough", &self.passthrough)
            .finish_non_exhaustive()
    }
}
