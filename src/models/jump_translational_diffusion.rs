/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! Jump translational diffusion
//!
//! Singwi-Sjölander jump diffusion: a particle stays on a site for a mean
//! residence time τ before jumping. The Lorentzian width saturates at 1/τ
//! at high q instead of growing without bound as in Brownian diffusion.
//!
//! Default parameter values are those of water at 298 K and 1 atm
//! (D = 0.23 Å²/ps, τ = 1.25 ps), after Teixeira, Bellissent-Funel, Chen,
//! and Dianoux, Phys. Rev. A 31, 1913-1917 (1985).

use super::{check_positive, check_q, sqw_from_components, ModelComponents, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Parameters for the jump translational diffusion model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpTranslationalDiffusionParams {
    /// Scale factor
    pub scale: f64,

    /// Peak center (energy transfer, 1/ps)
    pub center: f64,

    /// Self-diffusion coefficient (Å²/ps)
    pub diffusion_coefficient: f64,

    /// Residence time between jumps (ps)
    pub residence_time: f64,
}

impl Default for JumpTranslationalDiffusionParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            center: 0.0,
            diffusion_coefficient: 0.23,
            residence_time: 1.25,
        }
    }
}

/// Widths and structure factors for jump translational diffusion
///
/// A single Lorentzian per q with half-width D·q² / (1 + τ·D·q²). No
/// elastic component.
///
/// # Arguments
///
/// * `q` - Momentum transfer values (1/Å)
/// * `diffusion_coefficient` - Self-diffusion coefficient (Å²/ps), must be
///   strictly positive
/// * `residence_time` - Residence time between jumps (ps), must be
///   strictly positive
///
/// # Returns
///
/// The per-q component decomposition, or a domain error
pub fn hwhm_jump_translational_diffusion(
    q: &[f64],
    diffusion_coefficient: f64,
    residence_time: f64,
) -> Result<ModelComponents> {
    check_q(q)?;
    check_positive("diffusion_coefficient", diffusion_coefficient)?;
    check_positive("residence_time", residence_time)?;

    let n_q = q.len();
    let hwhm = Array2::from_shape_fn((n_q, 1), |(i, _)| {
        let dq2 = diffusion_coefficient * q[i] * q[i];
        dq2 / (1.0 + residence_time * dq2)
    });
    let eisf = Array1::zeros(n_q);
    let qisf = Array2::ones((n_q, 1));

    Ok(ModelComponents { hwhm, eisf, qisf })
}

/// S(q, ω) for jump translational diffusion
///
/// S(q, ω) = Lorentzian(ω, scale, center, D·q² / (1 + τ·D·q²))
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
pub fn sqw_jump_translational_diffusion(
    w: &[f64],
    q: &[f64],
    params: &JumpTranslationalDiffusionParams,
) -> Result<Array2<f64>> {
    let components = hwhm_jump_translational_diffusion(
        q,
        params.diffusion_coefficient,
        params.residence_time,
    )?;
    sqw_from_components(w, params.scale, params.center, &components)
}
