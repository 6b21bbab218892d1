//! Shared defaults for lookup-table matching.
//!
//! Provides [`DEFAULT_MATCH_TOL`], the tolerance under which a query value is
//! considered an exact hit on a breakpoint during forward and inverse scans.
//! Every [`crate::map::linear::LinearMap`] starts with this tolerance; it can
//! be widened per map for lower-precision data via
//! [`crate::map::linear::LinearMap::set_match_tol`].

/// Default exact-match tolerance for breakpoint comparisons.
pub const DEFAULT_MATCH_TOL: f64 = f64::EPSILON;

/// A usable match tolerance is finite and strictly positive.
#[inline]
pub(crate) fn tol_is_valid(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
