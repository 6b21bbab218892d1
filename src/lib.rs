//! # linmap
//!
//! Piecewise-linear lookup tables for calibration curves.
//!
//! A [`LinearMap`] owns an ordered sequence of `(input, output)` breakpoints
//! and evaluates the piecewise-linear function they define: forward
//! (input to interpolated output), inverse (output to interpolated input),
//! with clamping to the boundary breakpoints outside the table's range.
//! Breakpoint outputs may be edited in place after construction to support
//! runtime recalibration.
//!
//! Breakpoints must be appended in strictly ascending input order; the
//! ordering precondition is checked only when debug assertions are enabled,
//! keeping the release-build fast path free of per-call validation. Callers
//! building tables from untrusted data can use [`LinearMap::try_add`], which
//! always validates.
//!
//! Nothing in this crate is synchronized internally. All mutators take
//! `&mut self`; sharing a map across threads requires the usual external
//! synchronization by the caller.

pub mod map;

pub use map::errors::LinearMapError;
pub use map::linear::{Breakpoint, LinearMap};
pub use map::Lookup;
