//! Bracketed scalar root finding.
//!
//! Every search here is bounded: bracket expansion stops at the supplied
//! domain and bisection stops after `max_iterations`, reporting
//! `FrError::NoBracket` / `FrError::NotConverged` instead of looping.

use crate::error::{FrError, FrResult};
use crate::numeric::Real;

/// Root finder configuration.
#[derive(Clone, Copy, Debug)]
pub struct RootConfig {
    /// Maximum bisection iterations
    pub max_iterations: usize,
    /// Bracket width at which the midpoint is accepted
    pub x_tol: Real,
    /// First half-width used when expanding a bracket around a seed
    pub initial_step: Real,
    /// Maximum number of bracket doublings
    pub max_bracket_expansions: usize,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            x_tol: 1e-10,
            initial_step: 10.0,
            max_bracket_expansions: 40,
        }
    }
}

/// Converged root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootResult {
    /// Root location
    pub x: Real,
    /// Residual at `x`
    pub residual: Real,
    /// Bisection iterations used
    pub iterations: usize,
}

fn brackets(a: Real, b: Real) -> bool {
    a == 0.0 || b == 0.0 || (a < 0.0) != (b < 0.0)
}

/// Bisection on `[lo, hi]`. The endpoints must bracket a sign change.
pub fn bisect<F>(what: &'static str, f: F, lo: Real, hi: Real, cfg: &RootConfig) -> FrResult<RootResult>
where
    F: Fn(Real) -> Real,
{
    let (mut lo, mut hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let mut f_lo = f(lo);
    let f_hi = f(hi);
    if !f_lo.is_finite() {
        return Err(FrError::NonFinite { what, value: f_lo });
    }
    if !f_hi.is_finite() {
        return Err(FrError::NonFinite { what, value: f_hi });
    }
    if f_lo == 0.0 {
        return Ok(RootResult { x: lo, residual: 0.0, iterations: 0 });
    }
    if f_hi == 0.0 {
        return Ok(RootResult { x: hi, residual: 0.0, iterations: 0 });
    }
    if !brackets(f_lo, f_hi) {
        return Err(FrError::NoBracket { what, lo, hi });
    }

    for iter in 1..=cfg.max_iterations {
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid);
        if !f_mid.is_finite() {
            return Err(FrError::NonFinite { what, value: f_mid });
        }
        if f_mid == 0.0 || (hi - lo) <= cfg.x_tol {
            return Ok(RootResult { x: mid, residual: f_mid, iterations: iter });
        }
        if brackets(f_lo, f_mid) {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }

    Err(FrError::NotConverged {
        what,
        iterations: cfg.max_iterations,
    })
}

/// Expand a bracket symmetrically around `seed` (clamped to `domain`)
/// until the residual changes sign, then bisect.
pub fn find_root_from_seed<F>(
    what: &'static str,
    f: F,
    seed: Real,
    domain: (Real, Real),
    cfg: &RootConfig,
) -> FrResult<RootResult>
where
    F: Fn(Real) -> Real,
{
    let (d_lo, d_hi) = domain;
    if !(d_lo < d_hi) {
        return Err(FrError::InvalidArg { what: "root domain must be a non-empty interval" });
    }
    let seed = seed.clamp(d_lo, d_hi);
    let mut step = cfg.initial_step;

    for _ in 0..=cfg.max_bracket_expansions {
        let lo = (seed - step).max(d_lo);
        let hi = (seed + step).min(d_hi);
        let (f_lo, f_hi) = (f(lo), f(hi));
        if f_lo.is_finite() && f_hi.is_finite() && brackets(f_lo, f_hi) {
            return bisect(what, &f, lo, hi, cfg);
        }
        if lo <= d_lo && hi >= d_hi {
            break;
        }
        step *= 2.0;
    }

    Err(FrError::NoBracket { what, lo: d_lo, hi: d_hi })
}
