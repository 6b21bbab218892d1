//! Piecewise-linear lookup table
//!
//! Implements a breakpoint table for piecewise-[linear
//! interpolation](https://en.wikipedia.org/wiki/Linear_interpolation).
//!
//! Each consecutive pair of breakpoints `(x[i], y[i])`, `(x[i+1], y[i+1])`
//! defines a line segment. Forward evaluation interpolates a query input
//! along the enclosing segment; inverse evaluation interpolates a query
//! output back to an input. Queries outside the table's range clamp to the
//! boundary breakpoints.

use crate::map::config::{tol_is_valid, DEFAULT_MATCH_TOL};
use crate::map::errors::LinearMapError;
use crate::map::traits::Lookup;

/// One `(input, output)` sample of the piecewise-linear function.
///
/// A breakpoint has no identity beyond its position in the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub input: f64,
    pub output: f64,
}

#[inline]
fn lerp_output(x0: f64, x1: f64, y0: f64, y1: f64, xq: f64) -> f64 {
    y0 + (xq - x0) * (y1 - y0) / (x1 - x0)
}

#[inline]
fn lerp_input(x0: f64, x1: f64, y0: f64, y1: f64, yq: f64) -> f64 {
    x0 + (yq - y0) * (x1 - x0) / (y1 - y0)
}

/// Piecewise-linear lookup table over `(input, output)` breakpoints.
///
/// # Construction
/// - [`LinearMap::new`] or [`LinearMap::with_capacity`], then [`LinearMap::add`]
///   (or [`LinearMap::try_add`]) in strictly ascending input order.
/// - Storage is a single contiguous buffer growing geometrically, so appends
///   are amortized `O(1)`.
///
/// # Preconditions
/// - Breakpoint inputs strictly increase in append order. [`LinearMap::add`]
///   checks this only when debug assertions are enabled; release builds skip
///   the check and out-of-order inputs yield incorrect interpolation.
/// - Lookups and bound queries require a non-empty table, checked the same
///   way.
///
/// # Inverse lookups
/// [`LinearMap::get_input_from_output`], [`LinearMap::min_output`] and
/// [`LinearMap::max_output`] assume outputs ascend with inputs. The table
/// never validates this; with non-monotonic outputs the results are
/// well-defined but not meaningful.
#[derive(Debug, Clone)]
pub struct LinearMap {
    points: Vec<Breakpoint>,
    match_tol: f64,
}

impl Default for LinearMap {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearMap {
    /// Creates an empty map with the default exact-match tolerance,
    /// [`DEFAULT_MATCH_TOL`].
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            match_tol: DEFAULT_MATCH_TOL,
        }
    }

    /// Creates an empty map with storage preallocated for `capacity`
    /// breakpoints.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            match_tol: DEFAULT_MATCH_TOL,
        }
    }

    /// Sets the exact-match tolerance used by forward/inverse scans and
    /// [`LinearMap::index_of_input`].
    ///
    /// # Errors
    /// - [`LinearMapError::InvalidMatchTol`] if `tol` is non-finite or `<= 0`.
    pub fn set_match_tol(mut self, tol: f64) -> Result<Self, LinearMapError> {
        if !tol_is_valid(tol) {
            return Err(LinearMapError::InvalidMatchTol { got: tol });
        }
        self.match_tol = tol;
        Ok(self)
    }

    pub fn match_tol(&self) -> f64 {
        self.match_tol
    }

    /// Appends a breakpoint.
    ///
    /// `input` must be strictly greater than the last breakpoint's input.
    /// The precondition is checked only when debug assertions are enabled;
    /// use [`LinearMap::try_add`] when the data is untrusted.
    pub fn add(&mut self, input: f64, output: f64) {
        debug_assert!(
            self.points.last().is_none_or(|bp| bp.input < input),
            "breakpoint inputs must be strictly ascending"
        );
        self.points.push(Breakpoint { input, output });
    }

    /// Validating append for untrusted data.
    ///
    /// # Errors
    /// - [`LinearMapError::NonFiniteValue`] if either value is NaN or
    ///   infinite.
    /// - [`LinearMapError::NonIncreasingInput`] if `input` does not strictly
    ///   increase on the last breakpoint's input.
    pub fn try_add(&mut self, input: f64, output: f64) -> Result<(), LinearMapError> {
        if !input.is_finite() || !output.is_finite() {
            return Err(LinearMapError::NonFiniteValue { input, output });
        }
        if let Some(bp) = self.points.last() {
            if input <= bp.input {
                return Err(LinearMapError::NonIncreasingInput {
                    last: bp.input,
                    got: input,
                });
            }
        }
        self.points.push(Breakpoint { input, output });
        Ok(())
    }

    /// Forward evaluation: interpolated output for `input`.
    ///
    /// # Behavior
    /// - Below the first breakpoint's input, returns the first breakpoint's
    ///   output; above the last, the last's (clamping).
    /// - An input within the match tolerance of a breakpoint returns that
    ///   breakpoint's output directly.
    /// - Otherwise the enclosing breakpoints bracket the query and
    ///
    /// ```text
    /// yq = y0 + (xq - x0) * (y1 - y0) / (x1 - x0)
    /// ```
    ///
    /// The table must be non-empty (debug-asserted).
    pub fn get(&self, input: f64) -> f64 {
        debug_assert!(!self.points.is_empty(), "lookup on an empty map");

        let first = self.points[0];
        if input < first.input {
            return first.output;
        }
        let last = self.points[self.points.len() - 1];
        if input > last.input {
            return last.output;
        }

        // start each bracket distance beyond the table's span so any
        // in-range breakpoint beats it
        let mut upper = 0;
        let mut lower = 0;
        let mut least_above = last.input - input + 1.0;
        let mut least_below = input - first.input + 1.0;

        // scan order matters: ties on equal distance keep the earliest index
        for (i, bp) in self.points.iter().enumerate() {
            let delta = bp.input - input;
            if delta.abs() < self.match_tol {
                return bp.output;
            }

            if delta > 0.0 && delta < least_above {
                upper = i;
                least_above = delta;
                continue;
            }

            if delta < 0.0 && -delta < least_below {
                lower = i;
                least_below = -delta;
            }
        }

        let (lo, hi) = (self.points[lower], self.points[upper]);
        lerp_output(lo.input, hi.input, lo.output, hi.output, input)
    }

    /// Inverse evaluation: interpolated input for `output`.
    ///
    /// # Behavior
    /// Symmetric to [`LinearMap::get`] with brackets chosen by proximity in
    /// output space:
    ///
    /// ```text
    /// xq = x0 + (yq - y0) * (x1 - x0) / (y1 - y0)
    /// ```
    ///
    /// Clamping compares against the first and last breakpoints in insertion
    /// order, so the result is only meaningful when outputs ascend with
    /// inputs (see the type-level docs). The table must be non-empty
    /// (debug-asserted).
    pub fn get_input_from_output(&self, output: f64) -> f64 {
        debug_assert!(!self.points.is_empty(), "lookup on an empty map");

        let first = self.points[0];
        if output < first.output {
            return first.input;
        }
        let last = self.points[self.points.len() - 1];
        if output > last.output {
            return last.input;
        }

        let mut upper = 0;
        let mut lower = 0;
        let mut least_above = last.output - output + 1.0;
        let mut least_below = output - first.output + 1.0;

        for (i, bp) in self.points.iter().enumerate() {
            let delta = bp.output - output;
            if delta.abs() < self.match_tol {
                return bp.input;
            }

            if delta > 0.0 && delta < least_above {
                upper = i;
                least_above = delta;
                continue;
            }

            if delta < 0.0 && -delta < least_below {
                lower = i;
                least_below = -delta;
            }
        }

        let (lo, hi) = (self.points[lower], self.points[upper]);
        lerp_input(lo.input, hi.input, lo.output, hi.output, output)
    }

    /// Number of breakpoints in the table.
    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position of the breakpoint whose input matches `input` within the
    /// match tolerance, or `None`.
    pub fn index_of_input(&self, input: f64) -> Option<usize> {
        self.points
            .iter()
            .position(|bp| (bp.input - input).abs() < self.match_tol)
    }

    /// Overwrites the output of the breakpoint whose input matches `input`
    /// within the match tolerance. Silently does nothing when no breakpoint
    /// matches. The matched breakpoint's input is left unchanged.
    pub fn set_output_at_input(&mut self, input: f64, new_output: f64) {
        if let Some(idx) = self.index_of_input(input) {
            self.points[idx].output = new_output;
        }
    }

    pub fn input_at(&self, index: usize) -> f64 {
        debug_assert!(index < self.points.len(), "breakpoint index out of range");
        self.points[index].input
    }

    pub fn output_at(&self, index: usize) -> f64 {
        debug_assert!(index < self.points.len(), "breakpoint index out of range");
        self.points[index].output
    }

    /// Overwrites the output at `index`, leaving its input unchanged.
    pub fn set_output_at(&mut self, index: usize, new_output: f64) {
        debug_assert!(index < self.points.len(), "breakpoint index out of range");
        self.points[index].output = new_output;
    }

    /// Output of the first breakpoint in insertion order. Only the global
    /// minimum when outputs ascend with inputs.
    pub fn min_output(&self) -> f64 {
        debug_assert!(!self.points.is_empty(), "bound query on an empty map");
        self.points[0].output
    }

    /// Output of the last breakpoint in insertion order. Only the global
    /// maximum when outputs ascend with inputs.
    pub fn max_output(&self) -> f64 {
        debug_assert!(!self.points.is_empty(), "bound query on an empty map");
        self.points[self.points.len() - 1].output
    }

    pub fn first(&self) -> Option<&Breakpoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Breakpoint> {
        self.points.last()
    }
}

impl Lookup for LinearMap {
    #[inline]
    fn eval(&self, input: f64) -> f64 {
        self.get(input)
    }
}
