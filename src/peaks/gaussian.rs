/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! Gaussian peak shape

use super::delta::delta;
use super::errors::{PeakError, Result};
use ndarray::Array1;
use std::f64::consts::PI;

/// Gaussian line shape
///
/// Evaluates
///
/// scale / (σ√(2π)) · exp(−(x − center)² / (2σ²))
///
/// elementwise over `x`. A zero width delegates to [`delta`]. The full
/// width at half maximum of a Gaussian is 2√(2 ln 2)·σ.
///
/// # Arguments
///
/// * `x` - Domain of the function (energy transfer axis)
/// * `scale` - Integrated intensity of the curve
/// * `center` - Position of the peak
/// * `sigma` - Standard deviation, must be non-negative
///
/// # Returns
///
/// Array of the same length as `x`, or an error if `sigma` is negative or
/// `x` is empty
///
/// # Examples
///
/// ```
/// use qens_rs::peaks::gaussian;
///
/// let g = gaussian(&[1.0], 1.0, 1.0, 1.0).unwrap();
/// assert!((g[0] - 0.3989422804014327).abs() < 1e-12);
/// ```
pub fn gaussian(x: &[f64], scale: f64, center: f64, sigma: f64) -> Result<Array1<f64>> {
    if sigma < 0.0 {
        return Err(PeakError::NegativeWidth(sigma));
    }

    if x.is_empty() {
        return Err(PeakError::EmptyAxis);
    }

    if sigma == 0.0 {
        return delta(x, scale, center);
    }

    let norm = scale / (sigma * (2.0 * PI).sqrt());
    let model = x
        .iter()
        .map(|&v| norm * (-(v - center).powi(2) / (2.0 * sigma * sigma)).exp())
        .collect();

    Ok(model)
}
