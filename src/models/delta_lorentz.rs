/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! Delta plus one Lorentzian
//!
//! A phenomenological decomposition: a fraction A₀ of the atoms is fixed
//! (elastic delta line) and the remaining 1 − A₀ undergoes diffusion seen
//! as a single Lorentzian. A₀ and the width are free per-q inputs rather
//! than being derived from a physical process, so fitting frameworks can
//! refine them independently at each q.

use super::{check_per_q, check_q, sqw_from_components, ModelComponents, Result};
use ndarray::{Array1, Array2};

/// S(q, ω) for the delta-plus-one-Lorentzian decomposition
///
/// S(qᵢ, ω) = A₀(qᵢ)·δ(ω) + (1 − A₀(qᵢ))·Lorentzian(ω, hwhm(qᵢ))
///
/// No consistency constraint is placed on A₀ beyond the shape check;
/// values outside [0, 1] pass through unchanged (the complementary weight
/// simply goes negative).
///
/// # Arguments
///
/// * `w` - Energy transfer axis (1/ps)
/// * `q` - Momentum transfer values (1/Å)
/// * `scale` - Scale factor
/// * `center` - Peak center
/// * `a0` - Elastic fraction per q value, same length as `q`
/// * `hwhm` - Lorentzian half-width per q value, same length as `q`
///
/// # Returns
///
/// The spectral surface of shape (len(q), len(ω)), or a shape error if the
/// per-q arrays disagree with `q`
pub fn sqw_delta_lorentz(
    w: &[f64],
    q: &[f64],
    scale: f64,
    center: f64,
    a0: &[f64],
    hwhm: &[f64],
) -> Result<Array2<f64>> {
    check_q(q)?;
    let n_q = q.len();
    check_per_q("a0", a0, n_q)?;
    check_per_q("hwhm", hwhm, n_q)?;

    let components = ModelComponents {
        hwhm: Array2::from_shape_fn((n_q, 1), |(i, _)| hwhm[i]),
        eisf: Array1::from_iter(a0.iter().copied()),
        qisf: Array2::from_shape_fn((n_q, 1), |(i, _)| 1.0 - a0[i]),
    };

    sqw_from_components(w, scale, center, &components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peaks::{delta, lorentzian};
    use approx::assert_relative_eq;

    #[test]
    fn test_weighted_sum() {
        let w = [-1.0, 0.0, 1.0];
        let q = [0.5, 1.0];
        let a0 = [0.3, 0.6];
        let widths = [0.5, 1.0];
        let sqw = sqw_delta_lorentz(&w, &q, 1.0, 0.0, &a0, &widths).unwrap();

        let elastic = delta(&w, 1.0, 0.0).unwrap();
        for i in 0..q.len() {
            let line = lorentzian(&w, 1.0, 0.0, widths[i]).unwrap();
            for k in 0..w.len() {
                assert_relative_eq!(
                    sqw[[i, k]],
                    a0[i] * elastic[k] + (1.0 - a0[i]) * line[k],
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let w = [0.0, 1.0];
        assert!(sqw_delta_lorentz(&w, &[1.0, 2.0], 1.0, 0.0, &[0.5], &[1.0, 1.0]).is_err());
        assert!(sqw_delta_lorentz(&w, &[1.0, 2.0], 1.0, 0.0, &[0.5, 0.5], &[1.0]).is_err());
    }

    #[test]
    fn test_negative_width_propagates() {
        let w = [0.0, 1.0];
        assert!(sqw_delta_lorentz(&w, &[1.0], 1.0, 0.0, &[0.5], &[-1.0]).is_err());
    }
}
