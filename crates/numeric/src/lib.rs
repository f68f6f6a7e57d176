//! # numeric
//!
//! Pure text-level numeric semantics for form fields.
//!
//! This crate provides the three stateless building blocks for numeric input
//! handling:
//! - [`normalize`] / [`normalize_value`]: raw text → canonical half-width
//!   candidate text
//! - [`validate`]: canonical text + [`Constraints`] → [`Verdict`]
//! - [`group_thousands`] / [`round_half_up`]: canonical text → display text
//!   and blur-time rounding
//!
//! ## Design Principles
//!
//! This crate is intentionally host-agnostic and does not depend on:
//! - Any UI framework or widget system
//! - The stateful field layer (`field_core`)
//! - Locale databases or locale-sensitive number parsing
//!
//! Every function is pure and total: no panics, no I/O, and no allocation
//! unless the input actually needs rewriting. The stateful controller in
//! `field_core` decides *when* these functions run; this crate only decides
//! *what* they produce.

mod format;
mod normalize;
mod validate;

pub use format::{group_thousands, round_half_up};
pub use normalize::{RawValue, normalize, normalize_value};
pub use validate::{Constraints, ValidationError, Verdict, validate};
