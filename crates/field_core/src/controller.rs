//! Composition-aware state machine for a single numeric field.
//!
//! The controller owns the canonical value, the composition state, and the
//! current validation verdict, and drives the pure functions in `numeric` in
//! response to host events. While the host's input method holds an
//! uncommitted buffer, the canonical value is left alone and raw edits are
//! only buffered for display; normalizing mid-composition would force a
//! display rewrite that corrupts the IME's internal buffer, producing
//! duplicated or dropped characters.

use std::borrow::Cow;

use numeric::{
    Constraints, RawValue, Verdict, group_thousands, normalize, normalize_value, round_half_up,
    validate,
};

use crate::notice::FieldNotice;

/// Whether the host's input method currently holds an uncommitted buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositionState {
    Idle,
    Composing,
}

/// State machine for a single numeric field.
///
/// All methods are synchronous and complete before returning; the notices a
/// method returns have all fired by the time the next event can be
/// delivered. Every input state is representable and renderable: an invalid
/// value is kept verbatim alongside an error flag, never refused or
/// discarded.
#[derive(Clone, Debug)]
pub struct NumericField {
    canonical: String,
    composition: CompositionState,
    /// Raw uncommitted text, shown verbatim while composing.
    buffer: Option<String>,
    verdict: Verdict,
    constraints: Constraints,
}

impl NumericField {
    /// Create a field seeded from an initial external value.
    pub fn new(value: RawValue<'_>, constraints: Constraints) -> Self {
        let canonical = normalize_value(value);
        let verdict = validate(&canonical, &constraints);
        Self {
            canonical,
            composition: CompositionState::Idle,
            buffer: None,
            verdict,
            constraints,
        }
    }

    /// The committed canonical value.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Verdict for the current canonical value.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn constraints(&self) -> Constraints {
        self.constraints
    }

    pub fn composition_state(&self) -> CompositionState {
        self.composition
    }

    pub fn is_composing(&self) -> bool {
        self.composition == CompositionState::Composing
    }

    /// Text to render right now.
    ///
    /// The raw composition buffer wins while composing, an invalid value is
    /// shown verbatim, and everything else is grouped for display. Never
    /// reformat text the user is mid-revision on, and never reformat text
    /// that is currently invalid.
    pub fn display_text(&self) -> Cow<'_, str> {
        if self.is_composing() {
            let text = self.buffer.as_deref().unwrap_or(&self.canonical);
            return Cow::Borrowed(text);
        }
        if self.verdict.has_error() {
            return Cow::Borrowed(self.canonical.as_str());
        }
        group_thousands(&self.canonical)
    }

    /// Resynchronize from an externally driven value change.
    ///
    /// Ignored while composing. Never notifies, so host-driven updates
    /// cannot feed back into the host.
    pub fn sync_value(&mut self, value: RawValue<'_>) {
        if self.is_composing() {
            log::trace!(target: "field.controller", "external sync ignored while composing");
            return;
        }
        let canonical = normalize_value(value);
        if canonical != self.canonical {
            self.canonical = canonical;
            self.verdict = validate(&self.canonical, &self.constraints);
        }
    }

    /// The host's input method opened a composition session.
    pub fn composition_start(&mut self) {
        self.composition = CompositionState::Composing;
    }

    /// A raw platform edit.
    ///
    /// While composing the text is only buffered for display and passed
    /// through the low-level notice; normalization, validation, and the
    /// high-level notice wait for [`composition_end`](Self::composition_end).
    pub fn raw_change(&mut self, text: &str) -> Vec<FieldNotice> {
        if self.is_composing() {
            let value = text.to_string();
            self.buffer = Some(value.clone());
            return vec![FieldNotice::RawEdit {
                value,
                composing: true,
            }];
        }
        self.commit(text)
    }

    /// The composition session closed with `text` committed.
    ///
    /// Runs the idle edit path synchronously, so the committed text is
    /// normalized, validated, and notified exactly once, before any further
    /// event is handled.
    pub fn composition_end(&mut self, text: &str) -> Vec<FieldNotice> {
        self.composition = CompositionState::Idle;
        self.buffer = None;
        log::trace!(target: "field.controller", "composition committed: {text:?}");
        self.commit(text)
    }

    /// Focus left the field.
    ///
    /// Always emits the low-level pass-through. When idle, validation
    /// re-runs and a complete error-free value is brought to exactly
    /// `decimal_places` digits (half-up), firing the high-level notice if
    /// that changed it. In-progress tokens, empty values, and invalid values
    /// are left untouched, and integer-only fields are never auto-rounded;
    /// a fractional value there stays a surfaced error.
    pub fn blur(&mut self) -> Vec<FieldNotice> {
        if self.is_composing() {
            let value = self
                .buffer
                .clone()
                .unwrap_or_else(|| self.canonical.clone());
            return vec![FieldNotice::Blurred { value }];
        }

        let mut notices = vec![FieldNotice::Blurred {
            value: self.canonical.clone(),
        }];

        self.verdict = validate(&self.canonical, &self.constraints);
        let roundable = !self.verdict.has_error()
            && !self.verdict.in_progress
            && !self.canonical.is_empty()
            && self.constraints.allow_decimal;
        if roundable && let Some(places) = self.constraints.decimal_places {
            let rounded = round_half_up(&self.canonical, places);
            if rounded != self.canonical {
                log::trace!(
                    target: "field.controller",
                    "blur rounding {:?} -> {rounded:?}",
                    self.canonical
                );
                self.canonical = rounded;
                self.verdict = validate(&self.canonical, &self.constraints);
                debug_assert!(
                    !self.verdict.has_error(),
                    "rounding an error-free value must keep it error-free"
                );
                notices.push(FieldNotice::ValueChanged {
                    value: self.canonical.clone(),
                });
            }
        }
        notices
    }

    /// Replace the constraints and re-validate the current value.
    ///
    /// Hosts call this when constraint props change; like external
    /// resynchronization it never notifies.
    pub fn set_constraints(&mut self, constraints: Constraints) {
        self.constraints = constraints;
        self.verdict = validate(&self.canonical, &self.constraints);
    }

    // Idle edit path, shared by raw edits and composition commits.
    fn commit(&mut self, text: &str) -> Vec<FieldNotice> {
        self.canonical = normalize(text).into_owned();
        self.verdict = validate(&self.canonical, &self.constraints);
        vec![
            FieldNotice::RawEdit {
                value: self.canonical.clone(),
                composing: false,
            },
            FieldNotice::ValueChanged {
                value: self.canonical.clone(),
            },
        ]
    }
}
