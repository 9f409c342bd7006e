/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! Lorentzian peak shape

use super::delta::delta;
use super::errors::{PeakError, Result};
use ndarray::Array1;
use std::f64::consts::PI;

/// Lorentzian line shape
///
/// Evaluates
///
/// scale · hwhm / (π · ((x − center)² + hwhm²))
///
/// elementwise over `x`. A zero width delegates to [`delta`], the
/// distributional limit of the Lorentzian as hwhm → 0. The scale may be
/// negative; composite models use it as a signed amplitude.
///
/// # Arguments
///
/// * `x` - Domain of the function (energy transfer axis)
/// * `scale` - Integrated intensity of the curve
/// * `center` - Position of the peak
/// * `hwhm` - Half width at half maximum, must be non-negative
///
/// # Returns
///
/// Array of the same length as `x`, or an error if `hwhm` is negative or
/// `x` is empty
///
/// # Examples
///
/// ```
/// use qens_rs::peaks::lorentzian;
///
/// let l = lorentzian(&[1.0], 1.0, 1.0, 1.0).unwrap();
/// assert!((l[0] - 1.0 / std::f64::consts::PI).abs() < 1e-12);
/// ```
pub fn lorentzian(x: &[f64], scale: f64, center: f64, hwhm: f64) -> Result<Array1<f64>> {
    if hwhm < 0.0 {
        return Err(PeakError::NegativeWidth(hwhm));
    }

    if x.is_empty() {
        return Err(PeakError::EmptyAxis);
    }

    if hwhm == 0.0 {
        return delta(x, scale, center);
    }

    let model = x
        .iter()
        .map(|&v| scale * hwhm / (PI * ((v - center).powi(2) + hwhm * hwhm)))
        .collect();

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_peak_value() {
        // At the center, x - center = 0, so the value is scale/(π·hwhm)
        let l = lorentzian(&[1.0], 1.0, 1.0, 1.0).unwrap();
        assert_relative_eq!(l[0], 1.0 / PI, epsilon = 1e-12);

        let l = lorentzian(&[0.25], 3.0, 0.25, 0.4).unwrap();
        assert_relative_eq!(l[0], 3.0 / (PI * 0.4), epsilon = 1e-12);
    }

    #[test]
    fn test_symmetry() {
        let l = lorentzian(&[-2.0, 2.0], 1.0, 0.0, 0.5).unwrap();
        assert_relative_eq!(l[0], l[1], epsilon = 1e-12);
    }

    #[test]
    fn test_half_maximum() {
        // At x = center ± hwhm the value is half the peak value
        let hwhm = 0.7;
        let l = lorentzian(&[0.0, hwhm], 1.0, 0.0, hwhm).unwrap();
        assert_relative_eq!(l[1], 0.5 * l[0], epsilon = 1e-12);
    }

    #[test]
    fn test_zero_width_is_delta() {
        let x = [-1.0, 0.0, 1.0, 2.0];
        let l = lorentzian(&x, 2.5, 1.0, 0.0).unwrap();
        let d = delta(&x, 2.5, 1.0).unwrap();
        assert_eq!(l, d);
    }

    #[test]
    fn test_negative_width_rejected() {
        assert!(lorentzian(&[0.0], 1.0, 0.0, -0.1).is_err());
    }
}
