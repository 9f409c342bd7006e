/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! Mathematical utility functions for QENS model calculations
//!
//! This module provides the small set of special functions shared by the
//! structure-factor calculators: the unnormalized sinc function, spherical
//! Bessel functions of the first kind, and trapezoidal quadrature over
//! sampled data.

use super::errors::{Result, UtilsError};

/// Unnormalized sinc function sin(x)/x
///
/// Uses the convention sinc(0) = 1, which is the limit required by the
/// structure-factor expressions where the argument q·d vanishes at q = 0
/// or at zero jump distance.
///
/// # Arguments
///
/// * `x` - The input value
///
/// # Returns
///
/// The value of sin(x)/x, or 1 when x is (numerically) zero
pub fn sinc(x: f64) -> f64 {
    if x.abs() < 1e-12 {
        1.0
    } else {
        x.sin() / x
    }
}

/// Threshold below which the ascending series is used instead of the
/// upward recurrence, which amplifies the cancellation error in j_1 by
/// roughly (2n−1)!!/x^n as x shrinks
const BESSEL_SERIES_THRESHOLD: f64 = 1.0;

/// Spherical Bessel function of the first kind j_n(x)
///
/// Small arguments use the ascending power series
/// x^n/(2n+1)!! · (1 − x²/(2(2n+3)) + …); larger arguments use upward
/// recurrence from j_0 and j_1, which is numerically adequate there for
/// the low orders (n ≤ 5) used by the rotational diffusion series.
///
/// # Arguments
///
/// * `n` - The order (n ≥ 0)
/// * `x` - The input value
///
/// # Returns
///
/// The value of j_n(x)
pub fn spherical_bessel_j(n: u32, x: f64) -> f64 {
    if x.abs() < BESSEL_SERIES_THRESHOLD {
        // Covers x = 0 as well: the series reduces to j_0 = 1, j_n = 0
        return spherical_bessel_j_series(n, x);
    }

    let j0 = x.sin() / x;
    if n == 0 {
        return j0;
    }

    let j1 = (x.sin() - x * x.cos()) / (x * x);
    if n == 1 {
        return j1;
    }

    // j_{i+1}(x) = (2i+1)/x * j_i(x) - j_{i-1}(x)
    let mut j_prev = j0;
    let mut j_curr = j1;
    for i in 1..n {
        let j_next = (2 * i + 1) as f64 / x * j_curr - j_prev;
        j_prev = j_curr;
        j_curr = j_next;
    }

    j_curr
}

/// Ascending series for j_n(x), accurate for |x| below the threshold
fn spherical_bessel_j_series(n: u32, x: f64) -> f64 {
    let x2 = x * x;
    let mut term = 1.0;
    let mut sum = 1.0;

    for k in 1..20u32 {
        // t_k / t_{k-1} = -x² / (2k (2(n+k)+1))
        term *= -x2 / (2.0 * k as f64 * (2 * (n + k) + 1) as f64);
        sum += term;
        if term.abs() < 1e-16 * sum.abs() {
            break;
        }
    }

    // Prefactor x^n / (2n+1)!!
    let mut double_factorial = 1.0;
    for i in 0..n {
        double_factorial *= (2 * i + 3) as f64;
    }

    x.powi(n as i32) / double_factorial * sum
}

/// Trapezoidal quadrature over sampled data
///
/// Integrates y over the abscissa x using the trapezoidal rule. The axis
/// does not need to be uniformly spaced.
///
/// # Arguments
///
/// * `x` - Sample positions
/// * `y` - Sample values, same length as `x`
///
/// # Returns
///
/// The approximate value of the integral or an error if the inputs disagree
/// in length or hold fewer than two samples
pub fn trapezoid(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(UtilsError::Math(format!(
            "trapezoid: x and y must have the same length, got {} and {}",
            x.len(),
            y.len()
        )));
    }

    if x.len() < 2 {
        return Err(UtilsError::Math(
            "trapezoid: need at least 2 samples".to_string(),
        ));
    }

    let mut sum = 0.0;
    for i in 1..x.len() {
        sum += 0.5 * (y[i] + y[i - 1]) * (x[i] - x[i - 1]);
    }

    Ok(sum)
}
