/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! QENS spectral models
//!
//! Each physical model provides a width calculator (`hwhm_*`) returning its
//! per-q decomposition into elastic and quasi-elastic components, and a
//! spectral function (`sqw_*`) that assembles the S(q, ω) surface from the
//! peak-shape primitives:
//!
//! S(qᵢ, ω) = eisf(qᵢ)·δ(ω) + Σⱼ qisf(qᵢ, j)·L(ω, hwhm(qᵢ, j))
//!
//! `sqw_*` always returns the 2D surface with one row per q value;
//! single-spectrum callers collapse it with [`single_q_spectrum`]. Model
//! evaluation is pure: inputs are never mutated and nothing is cached
//! between calls, so fitting frameworks may call these functions freely
//! with varying parameter vectors.

mod brownian_translational_diffusion;
mod chudley_elliott_diffusion;
mod delta_lorentz;
mod delta_two_lorentz;
mod equivalent_sites_circle;
pub mod errors;
mod gaussian_model_3d;
mod isotropic_rotational_diffusion;
mod jump_translational_diffusion;
mod water_teixeira;

use crate::peaks;
use ndarray::parallel::prelude::*;
use ndarray::{Array1, Array2, Axis};

pub use brownian_translational_diffusion::{
    hwhm_brownian_translational_diffusion, sqw_brownian_translational_diffusion,
    BrownianTranslationalDiffusionParams,
};
pub use chudley_elliott_diffusion::{
    hwhm_chudley_elliott_diffusion, sqw_chudley_elliott_diffusion, ChudleyElliottDiffusionParams,
};
pub use delta_lorentz::sqw_delta_lorentz;
pub use delta_two_lorentz::sqw_delta_two_lorentz;
pub use equivalent_sites_circle::{
    hwhm_equivalent_sites_circle, sqw_equivalent_sites_circle, EquivalentSitesCircleParams,
};
pub use errors::{ModelError, Result};
pub use gaussian_model_3d::{hwhm_gaussian_model_3d, sqw_gaussian_model_3d, GaussianModel3DParams};
pub use isotropic_rotational_diffusion::{
    hwhm_isotropic_rotational_diffusion, sqw_isotropic_rotational_diffusion,
    IsotropicRotationalDiffusionParams,
};
pub use jump_translational_diffusion::{
    hwhm_jump_translational_diffusion, sqw_jump_translational_diffusion,
    JumpTranslationalDiffusionParams,
};
pub use water_teixeira::{sqw_water_teixeira, WaterTeixeiraParams};

/// Per-q decomposition of a model into elastic and quasi-elastic components
///
/// One row per momentum-transfer value, one column per Lorentzian term.
/// The `hwhm` and `qisf` columns align term by term. For models with an
/// elastic line, the elastic weight lives in `eisf` and term 0 carries a
/// zero width with a zero `qisf` entry; purely quasi-elastic models have
/// `eisf` equal to zero and a single term of weight one.
///
/// For energy-conserving models, eisf + Σⱼ qisf sums to one at every q.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelComponents {
    /// Half-widths at half maximum, shape (n_q, n_terms)
    pub hwhm: Array2<f64>,

    /// Elastic incoherent structure factor per q value, length n_q
    pub eisf: Array1<f64>,

    /// Quasi-elastic incoherent structure factors, shape (n_q, n_terms)
    pub qisf: Array2<f64>,
}

impl ModelComponents {
    /// Number of momentum-transfer values
    pub fn n_q(&self) -> usize {
        self.eisf.len()
    }

    /// Number of Lorentzian terms per q value
    pub fn n_terms(&self) -> usize {
        self.hwhm.ncols()
    }
}

/// Collapse a single-q spectral surface to a 1D spectrum over ω
///
/// Companion to the `sqw_*` functions, which always return the 2D
/// (q, ω) form. Fails if the surface holds more than one spectrum.
pub fn single_q_spectrum(sqw: Array2<f64>) -> Result<Array1<f64>> {
    if sqw.nrows() != 1 {
        return Err(ModelError::NotSingleQ { rows: sqw.nrows() });
    }
    Ok(sqw.index_axis_move(Axis(0), 0))
}

/// Check that a physical parameter is strictly positive
pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ModelError::NonPositiveParameter { name, value })
    }
}

/// Check that the momentum-transfer axis is non-empty
pub(crate) fn check_q(q: &[f64]) -> Result<()> {
    if q.is_empty() {
        Err(ModelError::EmptyAxis)
    } else {
        Ok(())
    }
}

/// Check that a per-q array matches the q axis length
pub(crate) fn check_per_q(name: &'static str, values: &[f64], n_q: usize) -> Result<()> {
    if values.len() == n_q {
        Ok(())
    } else {
        Err(ModelError::AmplitudeShape {
            name,
            expected: n_q,
            got: values.len(),
        })
    }
}

/// Assemble an S(q, ω) surface from a per-q component decomposition
///
/// Computes eisf·δ + Σⱼ qisf·Lorentzian row by row. Rows are independent,
/// so the accumulation is parallel over q. Terms with zero weight are
/// skipped; a zero-width term with non-zero weight contributes through the
/// Lorentzian's delta limit.
pub(crate) fn sqw_from_components(
    w: &[f64],
    scale: f64,
    center: f64,
    components: &ModelComponents,
) -> Result<Array2<f64>> {
    let n_q = components.n_q();
    let n_terms = components.n_terms();
    debug_assert_eq!(components.hwhm.nrows(), n_q);
    debug_assert_eq!(components.qisf.dim(), (n_q, n_terms));

    // The elastic line is the same for every q; evaluate it once
    let elastic = peaks::delta(w, scale, center)?;

    let mut sqw = Array2::zeros((n_q, w.len()));
    sqw.axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .try_for_each(|(i, mut row)| -> Result<()> {
            let eisf = components.eisf[i];
            if eisf != 0.0 {
                row.scaled_add(eisf, &elastic);
            }
            for j in 0..n_terms {
                let weight = components.qisf[[i, j]];
                if weight == 0.0 {
                    continue;
                }
                let line = peaks::lorentzian(w, scale, center, components.hwhm[[i, j]])?;
                row.scaled_add(weight, &line);
            }
            Ok(())
        })?;

    Ok(sqw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_single_q_spectrum() {
        let surface = array![[1.0, 2.0, 3.0]];
        let spectrum = single_q_spectrum(surface).unwrap();
        assert_eq!(spectrum, array![1.0, 2.0, 3.0]);

        let surface = array![[1.0, 2.0], [3.0, 4.0]];
        assert!(single_q_spectrum(surface).is_err());
    }

    #[test]
    fn test_check_positive() {
        assert!(check_positive("d", 0.1).is_ok());
        assert!(check_positive("d", 0.0).is_err());
        assert!(check_positive("d", -1.0).is_err());
    }

    #[test]
    fn test_assembler_elastic_and_quasielastic() {
        let w = [-1.0, 0.0, 1.0];
        // One q value, elastic weight 0.5 and one Lorentzian of weight 0.5
        let components = ModelComponents {
            hwhm: array![[1.0]],
            eisf: array![0.5],
            qisf: array![[0.5]],
        };
        let sqw = sqw_from_components(&w, 1.0, 0.0, &components).unwrap();

        let elastic = peaks::delta(&w, 1.0, 0.0).unwrap();
        let line = peaks::lorentzian(&w, 1.0, 0.0, 1.0).unwrap();
        for k in 0..w.len() {
            assert_relative_eq!(
                sqw[[0, k]],
                0.5 * elastic[k] + 0.5 * line[k],
                epsilon = 1e-12
            );
        }
    }
}
