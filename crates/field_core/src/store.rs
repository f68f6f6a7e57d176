//! Central store for mounted numeric fields.
//!
//! Hosts with many fields route platform events here by [`FieldId`]. The
//! store owns one controller per mounted field, forwards each event to it,
//! and dispatches the resulting notices to the callbacks configured for that
//! field. Mounted fields are fully independent; nothing is shared between
//! them.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use numeric::{Constraints, RawValue, ValidationError};

use crate::config::FieldConfig;
use crate::controller::NumericField;
use crate::id::FieldId;
use crate::notice::FieldNotice;

/// Snapshot of everything a host needs to render a field.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState<'a> {
    /// Text to show, per the display projection.
    pub text: Cow<'a, str>,
    /// Active validation error, if any.
    pub error: Option<ValidationError>,
    /// The value is an incomplete but legal prefix of a number.
    pub in_progress: bool,
    /// A composition session is active.
    pub composing: bool,
    pub label: Option<&'a str>,
    pub placeholder: Option<&'a str>,
    pub helper_text: Option<&'a str>,
    /// Host-widget attributes forwarded verbatim from the config.
    pub passthrough: &'a [(Arc<str>, Option<String>)],
}

impl RenderState<'_> {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// User-facing message for the active error.
    pub fn message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }
}

/// Central store for numeric field state.
///
/// # Example
///
/// ```
/// use field_core::{FieldConfig, FieldId, FieldStore};
///
/// let mut store = FieldStore::new();
/// let id = FieldId::from_raw(1);
///
/// store.mount(id, FieldConfig {
///     value: Some("１，０００".to_string()),
///     ..FieldConfig::default()
/// });
/// store.raw_change(id, "2000");
///
/// assert_eq!(store.canonical(id), Some("2000"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FieldStore {
    fields: HashMap<FieldId, MountedField>,
}

#[derive(Clone, Debug)]
struct MountedField {
    controller: NumericField,
    config: FieldConfig,
}

impl FieldStore {
    /// Create a new, empty field store.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Mount a field under `id`, seeding its canonical value from the
    /// config's `value`.
    ///
    /// If the field is already mounted, this is a no-op.
    pub fn mount(&mut self, id: FieldId, config: FieldConfig) {
        self.fields.entry(id).or_insert_with(|| {
            let value = match config.value.as_deref() {
                Some(text) => RawValue::Text(text),
                None => RawValue::Absent,
            };
            let controller = NumericField::new(value, config.constraints);
            MountedField { controller, config }
        });
    }

    /// Drop the field mounted under `id`, discarding its value.
    pub fn unmount(&mut self, id: FieldId) {
        self.fields.remove(&id);
    }

    /// Drop all mounted fields.
    ///
    /// Typically called on navigation to reset document state.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Returns `true` if a field is mounted under this id.
    pub fn has(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// The committed canonical value for a mounted field.
    pub fn canonical(&self, id: FieldId) -> Option<&str> {
        self.fields.get(&id).map(|f| f.controller.canonical())
    }

    pub fn is_composing(&self, id: FieldId) -> bool {
        self.fields
            .get(&id)
            .is_some_and(|f| f.controller.is_composing())
    }

    /// Snapshot for rendering, or `None` if the field is not mounted.
    pub fn render_state(&self, id: FieldId) -> Option<RenderState<'_>> {
        self.fields.get(&id).map(|f| {
            let verdict = f.controller.verdict();
            RenderState {
                text: f.controller.display_text(),
                error: verdict.error,
                in_progress: verdict.in_progress,
                composing: f.controller.is_composing(),
                label: f.config.label.as_deref(),
                placeholder: f.config.placeholder.as_deref(),
                helper_text: f.config.helper_text.as_deref(),
                passthrough: &f.config.passthrough,
            }
        })
    }

    /// Externally driven value resynchronization. Never dispatches
    /// callbacks.
    pub fn sync_value(&mut self, id: FieldId, value: RawValue<'_>) {
        if let Some(f) = self.fields.get_mut(&id) {
            f.controller.sync_value(value);
        }
    }

    pub fn composition_start(&mut self, id: FieldId) {
        if let Some(f) = self.fields.get_mut(&id) {
            f.controller.composition_start();
        }
    }

    pub fn raw_change(&mut self, id: FieldId, text: &str) {
        if let Some(f) = self.fields.get_mut(&id) {
            let notices = f.controller.raw_change(text);
            dispatch(&f.config, &notices);
        }
    }

    pub fn composition_end(&mut self, id: FieldId, text: &str) {
        if let Some(f) = self.fields.get_mut(&id) {
            let notices = f.controller.composition_end(text);
            dispatch(&f.config, &notices);
        }
    }

    pub fn blur(&mut self, id: FieldId) {
        if let Some(f) = self.fields.get_mut(&id) {
            let notices = f.controller.blur();
            dispatch(&f.config, &notices);
        }
    }

    /// Replace a field's constraints and re-validate its value. Never
    /// dispatches callbacks.
    pub fn set_constraints(&mut self, id: FieldId, constraints: Constraints) {
        if let Some(f) = self.fields.get_mut(&id) {
            f.config.constraints = constraints;
            f.controller.set_constraints(constraints);
        }
    }
}

// --- Internal helper functions ---

fn dispatch(config: &FieldConfig, notices: &[FieldNotice]) {
    for notice in notices {
        match notice {
            FieldNotice::ValueChanged { value } => {
                if let Some(cb) = &config.on_value_change {
                    cb(value);
                }
            }
            FieldNotice::RawEdit { value, composing } => {
                if let Some(cb) = &config.on_change {
                    cb(value, *composing);
                }
            }
            FieldNotice::Blurred { value } => {
                if let Some(cb) = &config.on_blur {
                    cb(value);
                }
            }
        }
    }
}
