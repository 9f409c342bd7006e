/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! Jumps between N equivalent sites on a circle
//!
//! A scatterer hops between N equally spaced sites on a circle of radius
//! R, staying a mean residence time τ on each site. The symmetric jump
//! rates give N relaxation modes with widths (2/τ)·sin²(kπ/N); their
//! structure factors follow from the discrete cosine transform of the
//! site-pair form factors sinc(q·dⱼ), where dⱼ = 2R·sin(jπ/N) is the
//! chord distance between sites j apart.

use super::{check_positive, check_q, sqw_from_components, ModelComponents, ModelError, Result};
use crate::utils::sinc;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Parameters for the equivalent-sites-circle model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquivalentSitesCircleParams {
    /// Scale factor
    pub scale: f64,

    /// Peak center (energy transfer, 1/ps)
    pub center: f64,

    /// Number of equivalent sites on the circle
    pub n_sites: usize,

    /// Radius of the circle (Å)
    pub radius: f64,

    /// Residence time on a site before jumping (ps)
    pub residence_time: f64,
}

impl Default for EquivalentSitesCircleParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            center: 0.0,
            n_sites: 3,
            radius: 1.0,
            residence_time: 1.0,
        }
    }
}

/// Widths and structure factors for jumps between N sites on a circle
///
/// Mode k (k = 0..N−1) has half-width (2/τ)·sin²(kπ/N), independent of q;
/// mode 0 is the elastic line. The structure factors are
///
/// isf(q, k) = (1/N) Σⱼ sinc(q·dⱼ)·cos(2πkj/N)
///
/// with sinc(0) = 1 so the j = 0 self term contributes exactly one. The
/// k = 0 factor is the eisf; the remaining N−1 factors are the
/// quasi-elastic weights. The factors sum to one at every q.
///
/// # Arguments
///
/// * `q` - Momentum transfer values (1/Å)
/// * `n_sites` - Number of sites, at least 2 (a single site has no
///   exchange dynamics)
/// * `radius` - Circle radius (Å), must be strictly positive
/// * `residence_time` - Residence time (ps), must be strictly positive
///
/// # Returns
///
/// The per-q component decomposition with `n_sites` columns, or a domain
/// error
pub fn hwhm_equivalent_sites_circle(
    q: &[f64],
    n_sites: usize,
    radius: f64,
    residence_time: f64,
) -> Result<ModelComponents> {
    check_q(q)?;
    if n_sites < 2 {
        return Err(ModelError::TooFewSites(n_sites));
    }
    check_positive("radius", radius)?;
    check_positive("residence_time", residence_time)?;

    let n_q = q.len();
    let n = n_sites;

    // Mode widths are q-independent
    let mut hwhm = Array2::zeros((n_q, n));
    for k in 0..n {
        let width = 2.0 / residence_time * ((k as f64) * PI / (n as f64)).sin().powi(2);
        for i in 0..n_q {
            hwhm[[i, k]] = width;
        }
    }

    // Chord distances between sites j apart
    let jump_distance: Vec<f64> =
        (0..n).map(|j| 2.0 * radius * ((j as f64) * PI / (n as f64)).sin()).collect();

    let mut eisf = Array1::zeros(n_q);
    let mut qisf = Array2::zeros((n_q, n));

    for (i, &qi) in q.iter().enumerate() {
        let sph_bessel: Vec<f64> = jump_distance.iter().map(|&d| sinc(qi * d)).collect();
        for k in 0..n {
            let mut isf = 0.0;
            for (j, &sb) in sph_bessel.iter().enumerate() {
                isf += sb * (2.0 * PI * (k * j) as f64 / n as f64).cos();
            }
            isf /= n as f64;
            if k == 0 {
                eisf[i] = isf;
            } else {
                qisf[[i, k]] = isf;
            }
        }
    }

    Ok(ModelComponents { hwhm, eisf, qisf })
}

/// S(q, ω) for jumps between N equivalent sites on a circle
///
/// S(q, ω) = eisf(q)·δ(ω) + Σₖ qisf(q, k)·Lorentzian(ω, (2/τ)·sin²(kπ/N))
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
pub fn sqw_equivalent_sites_circle(
    w: &[f64],
    q: &[f64],
    params: &EquivalentSitesCircleParams,
) -> Result<Array2<f64>> {
    let components =
        hwhm_equivalent_sites_circle(q, params.n_sites, params.radius, params.residence_time)?;
    sqw_from_components(w, params.scale, params.center, &components)
}
