/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! Chudley-Elliott jump diffusion
//!
//! Jump diffusion with a fixed jump length L. Equivalent forms of the
//! width are (6D/L²)(1 − sin(qL)/(qL)) and (1/τ)(1 − sin(qL)/(qL)) with
//! τ = L²/6D.
//!
//! Reference: R. Hempelmann, Quasielastic Neutron Scattering and Solid
//! State Diffusion (Oxford, 2000).

use super::{check_positive, check_q, sqw_from_components, ModelComponents, Result};
use crate::utils::sinc;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Parameters for the Chudley-Elliott jump diffusion model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChudleyElliottDiffusionParams {
    /// Scale factor
    pub scale: f64,

    /// Peak center (energy transfer, 1/ps)
    pub center: f64,

    /// Diffusion coefficient (Å²/ps)
    pub diffusion_coefficient: f64,

    /// Jump length (Å)
    pub jump_length: f64,
}

impl Default for ChudleyElliottDiffusionParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            center: 0.0,
            diffusion_coefficient: 0.23,
            jump_length: 1.0,
        }
    }
}

/// Widths and structure factors for Chudley-Elliott jump diffusion
///
/// A single Lorentzian per q with half-width (6D/L²)(1 − sinc(qL)). The
/// sinc convention sin(x)/x → 1 at x = 0 gives the correct q → 0 limit of
/// zero width. No elastic component.
///
/// # Arguments
///
/// * `q` - Momentum transfer values (1/Å)
/// * `diffusion_coefficient` - Diffusion coefficient (Å²/ps), must be
///   strictly positive
/// * `jump_length` - Jump length (Å), must be strictly positive
///
/// # Returns
///
/// The per-q component decomposition, or a domain error
pub fn hwhm_chudley_elliott_diffusion(
    q: &[f64],
    diffusion_coefficient: f64,
    jump_length: f64,
) -> Result<ModelComponents> {
    check_q(q)?;
    check_positive("diffusion_coefficient", diffusion_coefficient)?;
    check_positive("jump_length", jump_length)?;

    let n_q = q.len();
    let rate = 6.0 * diffusion_coefficient / (jump_length * jump_length);
    let hwhm = Array2::from_shape_fn((n_q, 1), |(i, _)| rate * (1.0 - sinc(q[i] * jump_length)));
    let eisf = Array1::zeros(n_q);
    let qisf = Array2::ones((n_q, 1));

    Ok(ModelComponents { hwhm, eisf, qisf })
}

/// S(q, ω) for Chudley-Elliott jump diffusion
///
/// S(q, ω) = Lorentzian(ω, scale, center, (6D/L²)(1 − sin(qL)/(qL)))
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
pub fn sqw_chudley_elliott_diffusion(
    w: &[f64],
    q: &[f64],
    params: &ChudleyElliottDiffusionParams,
) -> Result<Array2<f64>> {
    let components =
        hwhm_chudley_elliott_diffusion(q, params.diffusion_coefficient, params.jump_length)?;
    sqw_from_components(w, params.scale, params.center, &components)
}
