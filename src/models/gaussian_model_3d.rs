/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! Localized translational motion with Gaussian displacement statistics
//!
//! A particle moves about a fixed origin with displacement uₓ along each
//! axis a Gaussian random variable of variance ⟨uₓ²⟩ (isotropic in 3D).
//! The scattering law is an infinite sum of Lorentzians with
//! Poisson-distributed weights, truncated here at [`NUMBER_LORENTZ`]
//! terms.
//!
//! Reference: F. Volino, J.-C. Perrin, and S. Lyonnard, J. Phys. Chem. B
//! 110, 11217-11223 (2006).

use super::{check_positive, check_q, sqw_from_components, ModelComponents, Result};
use log::warn;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Number of terms kept from the infinite Poisson-weighted sum
pub const NUMBER_LORENTZ: usize = 100;

/// Argument above which the truncated sum starts losing intensity; as a
/// rule of thumb the term count must be much larger than q²·⟨uₓ²⟩
const TRUNCATION_WARN_THRESHOLD: f64 = 25.0;

/// Parameters for the localized 3D Gaussian motion model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianModel3DParams {
    /// Scale factor
    pub scale: f64,

    /// Peak center (energy transfer, 1/ps)
    pub center: f64,

    /// Diffusion coefficient (Å²/ps)
    pub diffusion_coefficient: f64,

    /// Variance ⟨uₓ²⟩ of the displacement along one axis (Å²)
    pub variance: f64,
}

impl Default for GaussianModel3DParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            center: 0.0,
            diffusion_coefficient: 1.0,
            variance: 1.0,
        }
    }
}

/// Widths and structure factors for localized 3D Gaussian motion
///
/// Term i has half-width i·D/⟨uₓ²⟩ and weight
/// exp(−q²⟨uₓ²⟩)·(q²⟨uₓ²⟩)^i / i!, the Poisson distribution in the
/// argument q²⟨uₓ²⟩. Term 0 is the elastic line. Weights are accumulated
/// iteratively, so no factorial is ever formed and the q = 0 limit
/// (eisf = 1, all quasi-elastic weights zero) falls out naturally.
///
/// Truncation adequacy (q²⟨uₓ²⟩ ≪ 100) is the caller's responsibility; a
/// warning is logged when the argument grows large enough for the
/// truncated sum to lose intensity, but no error is raised.
///
/// # Arguments
///
/// * `q` - Momentum transfer values (1/Å)
/// * `diffusion_coefficient` - Diffusion coefficient (Å²/ps), must be
///   strictly positive
/// * `variance` - Variance of the displacement (Å²), must be strictly
///   positive
///
/// # Returns
///
/// The per-q component decomposition with [`NUMBER_LORENTZ`] columns, or a
/// domain error
pub fn hwhm_gaussian_model_3d(
    q: &[f64],
    diffusion_coefficient: f64,
    variance: f64,
) -> Result<ModelComponents> {
    check_q(q)?;
    check_positive("diffusion_coefficient", diffusion_coefficient)?;
    check_positive("variance", variance)?;

    let n_q = q.len();
    let mut hwhm = Array2::zeros((n_q, NUMBER_LORENTZ));
    let mut eisf = Array1::zeros(n_q);
    let mut qisf = Array2::zeros((n_q, NUMBER_LORENTZ));

    let max_arg = q
        .iter()
        .map(|&qi| qi * qi * variance)
        .fold(0.0f64, f64::max);
    if max_arg > TRUNCATION_WARN_THRESHOLD {
        warn!(
            "gaussian_model_3d: q^2 * variance reaches {max_arg:.1}; the {NUMBER_LORENTZ}-term \
             truncation may lose intensity"
        );
    }

    for (i, &qi) in q.iter().enumerate() {
        let arg = qi * qi * variance;
        // Poisson weights exp(-arg) * arg^k / k!, built up iteratively
        let mut weight = (-arg).exp();
        eisf[i] = weight;
        for k in 1..NUMBER_LORENTZ {
            weight *= arg / k as f64;
            qisf[[i, k]] = weight;
            hwhm[[i, k]] = k as f64 * diffusion_coefficient / variance;
        }
    }

    Ok(ModelComponents { hwhm, eisf, qisf })
}

/// S(q, ω) for localized 3D Gaussian motion
///
/// S(q, ω) = A₀(q)·δ(ω) + Σᵢ Aᵢ(q)·Lorentzian(ω, i·D/⟨uₓ²⟩)
///
/// with Aᵢ(q) = exp(−q²⟨uₓ²⟩)·(q²⟨uₓ²⟩)^i / i!.
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
pub fn sqw_gaussian_model_3d(
    w: &[f64],
    q: &[f64],
    params: &GaussianModel3DParams,
) -> Result<Array2<f64>> {
    let components = hwhm_gaussian_model_3d(q, params.diffusion_coefficient, params.variance)?;
    sqw_from_components(w, params.scale, params.center, &components)
}
