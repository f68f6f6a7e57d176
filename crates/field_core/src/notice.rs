//! Outward notifications produced by field events.

/// A single outward notification produced by a field event.
///
/// Controller methods return these in the order they fired; the
/// [`FieldStore`](crate::FieldStore) forwards them to the callbacks
/// configured on the field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldNotice {
    /// The canonical value changed through an idle-path edit, a composition
    /// commit, or blur-time rounding. Never fired for composition buffering
    /// or external resynchronization.
    ValueChanged { value: String },
    /// Low-level pass-through for a raw platform edit. `value` is
    /// overwritten to the canonical value when idle and left as the raw
    /// buffer while a composition is active.
    RawEdit { value: String, composing: bool },
    /// Low-level pass-through for focus loss, with the same value rule as
    /// [`RawEdit`](Self::RawEdit).
    Blurred { value: String },
}
