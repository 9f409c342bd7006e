/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! Discretized Dirac delta function

use super::errors::{PeakError, Result};
use ndarray::Array1;

/// Discretized Dirac delta scale·δ(x − center) on a finite grid
///
/// The output is zero everywhere except at the grid point nearest to
/// `center`, which is set to `scale / dx` so that the peak integrates to
/// `scale` under rectangular or trapezoidal quadrature with the same
/// spacing. The spacing is taken as (x[N−1] − x[0])/(N−1), i.e. the grid
/// is assumed uniform; for a single-point grid the spacing defaults to 1.
/// When `center` lies outside [min(x), max(x)] the whole output is zero —
/// no spike is extrapolated onto the boundary.
///
/// # Arguments
///
/// * `x` - Domain of the function (energy transfer axis)
/// * `scale` - Integrated intensity of the peak
/// * `center` - Position of the peak
///
/// # Returns
///
/// Array of the same length as `x`, or an error if `x` is empty
///
/// # Examples
///
/// ```
/// use qens_rs::peaks::delta;
///
/// let d = delta(&[0.0, 1.0, 2.0, 3.0, 4.0], 5.0, 2.0).unwrap();
/// assert_eq!(d.as_slice().unwrap(), &[0.0, 0.0, 5.0, 0.0, 0.0]);
/// ```
pub fn delta(x: &[f64], scale: f64, center: f64) -> Result<Array1<f64>> {
    if x.is_empty() {
        return Err(PeakError::EmptyAxis);
    }

    let n = x.len();
    let mut model = Array1::zeros(n);

    let (mut min, mut max) = (x[0], x[0]);
    for &v in x.iter() {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    if center < min || center > max {
        return Ok(model);
    }

    let dx = if n > 1 {
        (x[n - 1] - x[0]) / (n - 1) as f64
    } else {
        1.0
    };

    // Nearest grid point to the peak position
    let mut idx = 0;
    let mut best = (x[0] - center).abs();
    for (i, &v) in x.iter().enumerate().skip(1) {
        let d = (v - center).abs();
        if d < best {
            best = d;
            idx = i;
        }
    }

    model[idx] = scale / dx.abs();

    Ok(model)
}
