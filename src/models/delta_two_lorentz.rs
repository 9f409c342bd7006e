/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! Delta plus two Lorentzians
//!
//! Phenomenological three-component decomposition with per-q amplitudes:
//! an elastic line of weight A₀, a first Lorentzian of weight A₁, and a
//! second Lorentzian taking the remainder 1 − A₀ − A₁.

use super::{check_per_q, check_q, sqw_from_components, ModelComponents, Result};
use ndarray::{Array1, Array2};

/// S(q, ω) for the delta-plus-two-Lorentzians decomposition
///
/// S(qᵢ, ω) = A₀(qᵢ)·δ(ω) + A₁(qᵢ)·Lorentzian(ω, Γ₁(qᵢ))
///          + (1 − A₀(qᵢ) − A₁(qᵢ))·Lorentzian(ω, Γ₂(qᵢ))
///
/// The remainder weight is deliberately not clamped: when a fitting
/// framework explores A₀ + A₁ > 1 the second Lorentzian receives a
/// negative weight unchanged, so gradient-based optimizers can traverse
/// infeasible intermediate points. Bounding the amplitudes is the
/// caller's responsibility.
///
/// # Arguments
///
/// * `w` - Energy transfer axis (1/ps)
/// * `q` - Momentum transfer values (1/Å)
/// * `scale` - Scale factor
/// * `center` - Peak center
/// * `a0` - Elastic fraction per q value, same length as `q`
/// * `a1` - First Lorentzian weight per q value, same length as `q`
/// * `hwhm1` - First Lorentzian half-width per q value
/// * `hwhm2` - Second Lorentzian half-width per q value
///
/// # Returns
///
/// The spectral surface of shape (len(q), len(ω)), or a shape error if any
/// per-q array disagrees with `q`
#[allow(clippy::too_many_arguments)]
pub fn sqw_delta_two_lorentz(
    w: &[f64],
    q: &[f64],
    scale: f64,
    center: f64,
    a0: &[f64],
    a1: &[f64],
    hwhm1: &[f64],
    hwhm2: &[f64],
) -> Result<Array2<f64>> {
    check_q(q)?;
    let n_q = q.len();
    check_per_q("a0", a0, n_q)?;
    check_per_q("a1", a1, n_q)?;
    check_per_q("hwhm1", hwhm1, n_q)?;
    check_per_q("hwhm2", hwhm2, n_q)?;

    let components = ModelComponents {
        hwhm: Array2::from_shape_fn(
            (n_q, 2),
            |(i, j)| if j == 0 { hwhm1[i] } else { hwhm2[i] },
        ),
        eisf: Array1::from_iter(a0.iter().copied()),
        qisf: Array2::from_shape_fn((n_q, 2), |(i, j)| {
            if j == 0 {
                a1[i]
            } else {
                1.0 - a0[i] - a1[i]
            }
        }),
    };

    sqw_from_components(w, scale, center, &components)
}
