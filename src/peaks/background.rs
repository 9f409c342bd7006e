/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! Polynomial background

use super::errors::{PeakError, Result};
use ndarray::Array1;

/// Polynomial background evaluated over `x`
///
/// `coefficients[i]` multiplies x^i (ascending order), so a single
/// coefficient is the flat, degree-0 background. Evaluation uses Horner's
/// scheme.
///
/// # Arguments
///
/// * `x` - Domain of the function (energy transfer axis)
/// * `coefficients` - Polynomial coefficients in ascending order of power
///
/// # Returns
///
/// Array of the same length as `x`, or an error if `coefficients` or `x`
/// is empty
///
/// # Examples
///
/// ```
/// use qens_rs::peaks::background_polynomials;
///
/// let b = background_polynomials(&[5.0], &[1.0, 2.0]).unwrap();
/// assert_eq!(b[0], 11.0);
/// ```
pub fn background_polynomials(x: &[f64], coefficients: &[f64]) -> Result<Array1<f64>> {
    if coefficients.is_empty() {
        return Err(PeakError::EmptyCoefficients);
    }

    if x.is_empty() {
        return Err(PeakError::EmptyAxis);
    }

    let model = x
        .iter()
        .map(|&v| {
            coefficients
                .iter()
                .rev()
                .fold(0.0, |acc, &c| acc * v + c)
        })
        .collect();

    Ok(model)
}
