/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! Teixeira water model
//!
//! Composite of jump translational diffusion and isotropic rotational
//! diffusion. The two processes are independent, so their spectra
//! convolve; because every component is a Lorentzian centered at the same
//! point, the convolution reduces to adding half-widths term by term
//! instead of a numerical convolution:
//!
//! S(q, ω) = eisf_R(q)·L(ω, Γ_T) + Σⱼ qisf_R(q, j)·L(ω, Γ_T + Γ_R,j)
//!
//! The rotational elastic term convolved with the translational Lorentzian
//! is just the translational Lorentzian, so the j = 0 term uses Γ_T alone
//! with the rotational eisf as its weight.
//!
//! Reference: J. Teixeira, M.-C. Bellissent-Funel, S.H. Chen, and
//! A.J. Dianoux, Phys. Rev. A 31, 1913-1917 (1985).

use super::isotropic_rotational_diffusion::hwhm_isotropic_rotational_diffusion;
use super::jump_translational_diffusion::hwhm_jump_translational_diffusion;
use super::{sqw_from_components, ModelComponents, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Parameters for the Teixeira water model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterTeixeiraParams {
    /// Scale factor
    pub scale: f64,

    /// Peak center (energy transfer, 1/ps)
    pub center: f64,

    /// Translational self-diffusion coefficient (Å²/ps)
    pub diffusion_coefficient: f64,

    /// Residence time between translational jumps (ps)
    pub residence_time: f64,

    /// Radius of rotation (Å)
    pub radius: f64,

    /// Rotational diffusion coefficient (1/ps)
    pub rotational_diffusion_coefficient: f64,
}

impl Default for WaterTeixeiraParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            center: 0.0,
            diffusion_coefficient: 0.23,
            residence_time: 1.25,
            radius: 1.0,
            rotational_diffusion_coefficient: 1.0,
        }
    }
}

/// S(q, ω) for the Teixeira water model
///
/// Builds the component decompositions of the translational and rotational
/// processes, then sums the widths pairwise per the
/// convolution-of-Lorentzians identity. There is no pure elastic line:
/// every rotational term is broadened by the translational width.
///
/// # Arguments
///
/// * `w` - Energy transfer axis (1/ps)
/// * `q` - Momentum transfer values (1/Å)
/// * `params` - Model parameters
///
/// # Returns
///
/// The spectral surface of shape (len(q), len(ω)), or a domain error from
/// either underlying width calculator
pub fn sqw_water_teixeira(
    w: &[f64],
    q: &[f64],
    params: &WaterTeixeiraParams,
) -> Result<Array2<f64>> {
    let trans = hwhm_jump_translational_diffusion(
        q,
        params.diffusion_coefficient,
        params.residence_time,
    )?;
    let rot = hwhm_isotropic_rotational_diffusion(
        q,
        params.radius,
        params.rotational_diffusion_coefficient,
    )?;

    let n_q = q.len();
    let n_terms = rot.n_terms();

    // Widths add term by term; the rotational term 0 has zero width, so
    // column 0 is the bare translational Lorentzian weighted by the
    // rotational eisf
    let hwhm = Array2::from_shape_fn((n_q, n_terms), |(i, j)| {
        trans.hwhm[[i, 0]] + rot.hwhm[[i, j]]
    });
    let qisf = Array2::from_shape_fn((n_q, n_terms), |(i, j)| {
        if j == 0 {
            rot.eisf[i]
        } else {
            rot.qisf[[i, j]]
        }
    });

    let components = ModelComponents {
        hwhm,
        eisf: Array1::zeros(n_q),
        qisf,
    };

    sqw_from_components(w, params.scale, params.center, &components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peaks::lorentzian;
    use approx::assert_relative_eq;

    #[test]
    fn test_matches_manual_width_addition() {
        let params = WaterTeixeiraParams::default();
        let w = [-1.0, 0.0, 0.5, 2.0];
        let q = [0.7, 1.4];
        let sqw = sqw_water_teixeira(&w, &q, &params).unwrap();

        let trans = hwhm_jump_translational_diffusion(
            &q,
            params.diffusion_coefficient,
            params.residence_time,
        )
        .unwrap();
        let rot = hwhm_isotropic_rotational_diffusion(
            &q,
            params.radius,
            params.rotational_diffusion_coefficient,
        )
        .unwrap();

        for i in 0..q.len() {
            let gamma_t = trans.hwhm[[i, 0]];
            let mut expected = lorentzian(&w, 1.0, 0.0, gamma_t).unwrap() * rot.eisf[i];
            for j in 1..rot.n_terms() {
                let line = lorentzian(&w, 1.0, 0.0, gamma_t + rot.hwhm[[i, j]]).unwrap();
                expected = expected + line * rot.qisf[[i, j]];
            }
            for k in 0..w.len() {
                assert_relative_eq!(sqw[[i, k]], expected[k], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_zero_q_reduces_to_translational_delta() {
        // At q = 0 the rotational eisf is 1 and the translational width is
        // 0, so all intensity sits in the elastic bin
        let params = WaterTeixeiraParams::default();
        let w = [-1.0, 0.0, 1.0];
        let sqw = sqw_water_teixeira(&w, &[0.0], &params).unwrap();
        // dx = 1, so the central bin holds scale/dx
        assert_relative_eq!(sqw[[0, 1]], 1.0, epsilon = 1e-6);
        assert_relative_eq!(sqw[[0, 0]], 0.0, epsilon = 1e-12);
        assert_relative_eq!(sqw[[0, 2]], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_domain_errors_propagate() {
        let mut params = WaterTeixeiraParams::default();
        params.radius = -1.0;
        assert!(sqw_water_teixeira(&[0.0, 1.0], &[1.0], &params).is_err());
    }
}
