//! # field_core
//!
//! Composition-aware state layer for numeric text fields.
//!
//! This crate provides the stateful half of numeric field handling, on top
//! of the pure functions in `numeric`:
//! - [`FieldId`]: opaque key for mounted fields
//! - [`NumericField`]: the per-field state machine (canonical value,
//!   composition state, validation verdict)
//! - [`FieldStore`]: central store routing host events to mounted fields and
//!   dispatching their notices to configured callbacks
//! - [`FieldConfig`] / [`RenderState`]: what hosts hand in and read back
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any graphics framework or widget toolkit
//! - Layout, hit-testing, or text measurement
//! - Platform-specific APIs
//!
//! Hosts deliver five event kinds (external sync, composition start, raw
//! edit, composition end, blur) through the store and read back a render
//! snapshot; nothing here blocks, defers, or spawns.
//!
//! The one rule everything else serves: the canonical value is never
//! rewritten while the host's input method holds an uncommitted composition
//! buffer. Rewriting the displayed text mid-composition corrupts the IME's
//! internal state and drops or duplicates characters.
//!
//! ## Integration
//!
//! To integrate with a DOM- or widget-tree-based host, mint [`FieldId`]s
//! from your native identifiers at the boundary:
//! ```ignore
//! // In your integration layer:
//! impl From<dom::NodeId> for FieldId {
//!     fn from(id: dom::NodeId) -> Self {
//!         FieldId::from_raw(id.0 as u64)
//!     }
//! }
//! ```

mod config;
mod controller;
mod id;
mod notice;
mod store;

pub use config::{BlurCallback, FieldConfig, RawEditCallback, ValueChangedCallback};
pub use controller::{CompositionState, NumericField};
pub use id::FieldId;
pub use notice::FieldNotice;
pub use store::{FieldStore, RenderState};
