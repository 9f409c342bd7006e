/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! Brownian translational diffusion
//!
//! Continuous long-range isotropic translational diffusion. Particles
//! collide randomly, moving along straight lines between collisions with
//! each new direction independent of the previous one. The model describes
//! the translational component of the dynamic structure factor at low q,
//! where the probed distances involve many jumps; at high q the details of
//! the jump mechanism become visible and a jump model such as
//! Chudley-Elliott should be used instead.

use super::{check_positive, check_q, sqw_from_components, ModelComponents, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Parameters for the Brownian translational diffusion model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrownianTranslationalDiffusionParams {
    /// Scale factor
    pub scale: f64,

    /// Peak center (energy transfer, 1/ps)
    pub center: f64,

    /// Self-diffusion coefficient (Å²/ps)
    pub diffusion_coefficient: f64,
}

impl Default for BrownianTranslationalDiffusionParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            center: 0.0,
            diffusion_coefficient: 1.0,
        }
    }
}

/// Widths and structure factors for Brownian translational diffusion
///
/// A single Lorentzian per q with half-width D·q². There is no elastic
/// component: eisf is zero and the single quasi-elastic weight is one.
///
/// # Arguments
///
/// * `q` - Momentum transfer values (1/Å)
/// * `diffusion_coefficient` - Self-diffusion coefficient (Å²/ps), must be
///   strictly positive
///
/// # Returns
///
/// The per-q component decomposition, or a domain error
///
/// # Examples
///
/// ```
/// use qens_rs::models::hwhm_brownian_translational_diffusion;
///
/// let c = hwhm_brownian_translational_diffusion(&[1.0, 2.0], 1.0).unwrap();
/// assert_eq!(c.hwhm[[0, 0]], 1.0);
/// assert_eq!(c.hwhm[[1, 0]], 4.0);
/// ```
pub fn hwhm_brownian_translational_diffusion(
    q: &[f64],
    diffusion_coefficient: f64,
) -> Result<ModelComponents> {
    check_q(q)?;
    check_positive("diffusion_coefficient", diffusion_coefficient)?;

    let n_q = q.len();
    let hwhm = Array2::from_shape_fn((n_q, 1), |(i, _)| diffusion_coefficient * q[i] * q[i]);
    let eisf = Array1::zeros(n_q);
    let qisf = Array2::ones((n_q, 1));

    Ok(ModelComponents { hwhm, eisf, qisf })
}

/// S(q, ω) for Brownian translational diffusion
///
/// A Lorentzian of half-width D·q² for every q value:
///
/// S(q, ω) = Lorentzian(ω, scale, center, D·q²)
///
/// # Arguments
///
/// * `w` - Energy transfer axis (1/ps)
/// * `q` - Momentum transfer values (1/Å)
/// * `params` - Model parameters
///
/// # Returns
///
/// The spectral surface of shape (len(q), len(ω)), or a domain error
pub fn sqw_brownian_translational_diffusion(
    w: &[f64],
    q: &[f64],
    params: &BrownianTranslationalDiffusionParams,
) -> Result<Array2<f64>> {
    let components = hwhm_brownian_translational_diffusion(q, params.diffusion_coefficient)?;
    sqw_from_components(w, params.scale, params.center, &components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hwhm_grows_as_q_squared() {
        let c = hwhm_brownian_translational_diffusion(&[1.0, 2.0], 1.0).unwrap();
        assert_relative_eq!(c.hwhm[[0, 0]], 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.hwhm[[1, 0]], 4.0, epsilon = 1e-12);
        assert_eq!(c.eisf[0], 0.0);
        assert_eq!(c.qisf[[0, 0]], 1.0);
    }

    #[test]
    fn test_non_positive_diffusion_rejected() {
        assert!(hwhm_brownian_translational_diffusion(&[1.0], 0.0).is_err());
        assert!(hwhm_brownian_translational_diffusion(&[1.0], -0.5).is_err());
    }

    #[test]
    fn test_sqw_peak_value() {
        // At q = 1, D = 1 the width is 1, so S(1, ω=0) = 1/π and
        // S(1, ω=1) = 1/(2π)
        let params = BrownianTranslationalDiffusionParams::default();
        let sqw = sqw_brownian_translational_diffusion(&[0.0, 1.0], &[1.0], &params).unwrap();
        assert_relative_eq!(sqw[[0, 0]], 1.0 / std::f64::consts::PI, epsilon = 1e-12);
        assert_relative_eq!(
            sqw[[0, 1]],
            1.0 / (2.0 * std::f64::consts::PI),
            epsilon = 1e-12
        );
    }
}
