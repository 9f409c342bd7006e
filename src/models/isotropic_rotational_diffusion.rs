/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! Isotropic rotational diffusion
//!
//! Continuous rotational diffusion of a scatterer on a sphere of radius R.
//! The infinite Sears expansion over spherical Bessel functions is
//! truncated after [`NUMBER_LORENTZ`] terms: an elastic line of weight
//! j₀²(qR) plus Lorentzians of width l(l+1)·D_R weighted by
//! (2l+1)·jₗ²(qR).

use super::{check_positive, check_q, sqw_from_components, ModelComponents, Result};
use crate::utils::spherical_bessel_j;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Number of terms kept from the infinite rotational expansion
/// (the elastic l = 0 term plus five Lorentzians)
pub const NUMBER_LORENTZ: usize = 6;

/// Parameters for the isotropic rotational diffusion model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsotropicRotationalDiffusionParams {
    /// Scale factor
    pub scale: f64,

    /// Peak center (energy transfer, 1/ps)
    pub center: f64,

    /// Radius of rotation (Å)
    pub radius: f64,

    /// Rotational diffusion coefficient (1/ps)
    pub rotational_diffusion_coefficient: f64,
}

impl Default for IsotropicRotationalDiffusionParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            center: 0.0,
            radius: 1.0,
            rotational_diffusion_coefficient: 1.0,
        }
    }
}

/// Widths and structure factors for isotropic rotational diffusion
///
/// Term l has half-width l(l+1)·D_R, identical at every q. The elastic
/// weight is j₀²(qR) and term l ≥ 1 carries weight (2l+1)·jₗ²(qR). At
/// q = 0 the spherical Bessel limit gives eisf = 1 and all quasi-elastic
/// weights zero.
///
/// # Arguments
///
/// * `q` - Momentum transfer values (1/Å)
/// * `radius` - Radius of rotation (Å), must be strictly positive
/// * `rotational_diffusion_coefficient` - Rotational diffusion coefficient
///   (1/ps), must be strictly positive
///
/// # Returns
///
/// The per-q component decomposition with [`NUMBER_LORENTZ`] columns, or a
/// domain error
pub fn hwhm_isotropic_rotational_diffusion(
    q: &[f64],
    radius: f64,
    rotational_diffusion_coefficient: f64,
) -> Result<ModelComponents> {
    check_q(q)?;
    check_positive("radius", radius)?;
    check_positive(
        "rotational_diffusion_coefficient",
        rotational_diffusion_coefficient,
    )?;

    let n_q = q.len();
    let mut hwhm = Array2::zeros((n_q, NUMBER_LORENTZ));
    let mut eisf = Array1::zeros(n_q);
    let mut qisf = Array2::zeros((n_q, NUMBER_LORENTZ));

    for (i, &qi) in q.iter().enumerate() {
        let arg = qi * radius;
        for l in 0..NUMBER_LORENTZ {
            let jl = spherical_bessel_j(l as u32, arg);
            hwhm[[i, l]] = (l * (l + 1)) as f64 * rotational_diffusion_coefficient;
            if l == 0 {
                eisf[i] = jl * jl;
            } else {
                qisf[[i, l]] = (2 * l + 1) as f64 * jl * jl;
            }
        }
    }

    Ok(ModelComponents { hwhm, eisf, qisf })
}

/// S(q, ω) for isotropic rotational diffusion
///
/// S(q, ω) = j₀²(qR)·δ(ω) + Σₗ (2l+1)·jₗ²(qR)·Lorentzian(ω, l(l+1)·D_R)
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
pub fn sqw_isotropic_rotational_diffusion(
    w: &[f64],
    q: &[f64],
    params: &IsotropicRotationalDiffusionParams,
) -> Result<Array2<f64>> {
    let components = hwhm_isotropic_rotational_diffusion(
        q,
        params.radius,
        params.rotational_diffusion_coefficient,
    )?;
    sqw_from_components(w, params.scale, params.center, &components)
}
