/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

use approx::assert_relative_eq;
use qens_rs::models::{
    hwhm_brownian_translational_diffusion, hwhm_chudley_elliott_diffusion,
    hwhm_equivalent_sites_circle, hwhm_gaussian_model_3d, hwhm_isotropic_rotational_diffusion,
    hwhm_jump_translational_diffusion, sqw_water_teixeira, WaterTeixeiraParams,
};
use rstest::rstest;

#[rstest]
#[case(1.0, 0.5, 0.25)]
#[case(1.0, 2.0, 4.0)]
#[case(0.23, 1.0, 0.23)]
#[case(0.23, 2.0, 0.92)]
fn test_brownian_hwhm_is_dq2(#[case] d: f64, #[case] q: f64, #[case] expected: f64) {
    let c = hwhm_brownian_translational_diffusion(&[q], d).unwrap();
    assert_relative_eq!(c.hwhm[[0, 0]], expected, epsilon = 1e-12);
    assert_relative_eq!(c.eisf[0], 0.0, epsilon = 1e-13);
    assert_relative_eq!(c.qisf[[0, 0]], 1.0, epsilon = 1e-13);
}

#[rstest]
#[case(0.23, 1.25, 1.0)]
#[case(0.5, 2.0, 0.7)]
fn test_jump_hwhm_closed_form(#[case] d: f64, #[case] tau: f64, #[case] q: f64) {
    let c = hwhm_jump_translational_diffusion(&[q], d, tau).unwrap();
    let dq2 = d * q * q;
    assert_relative_eq!(c.hwhm[[0, 0]], dq2 / (1.0 + tau * dq2), epsilon = 1e-12);
}

#[test]
fn test_jump_hwhm_limits() {
    let (d, tau) = (0.23, 1.25);
    // Small q: width approaches the Fickian D·q²
    let c = hwhm_jump_translational_diffusion(&[1e-4], d, tau).unwrap();
    assert_relative_eq!(c.hwhm[[0, 0]], d * 1e-8, max_relative = 1e-6);
    // Large q: width saturates at 1/τ
    let c = hwhm_jump_translational_diffusion(&[1e4], d, tau).unwrap();
    assert_relative_eq!(c.hwhm[[0, 0]], 1.0 / tau, max_relative = 1e-6);
}

#[test]
fn test_chudley_elliott_small_q_matches_fickian() {
    // (6D/L²)(1 − sinc(qL)) → D·q² as qL → 0
    let (d, l) = (0.23, 1.0);
    let q = 1e-3;
    let c = hwhm_chudley_elliott_diffusion(&[q], d, l).unwrap();
    assert_relative_eq!(c.hwhm[[0, 0]], d * q * q, max_relative = 1e-4);
}

#[test]
fn test_isotropic_rotational_widths_are_q_independent() {
    let dr = 0.7;
    let c = hwhm_isotropic_rotational_diffusion(&[0.2, 0.9, 1.4], 1.1, dr).unwrap();
    assert_eq!(c.n_terms(), 6);
    for i in 0..3 {
        // l(l+1)·D_R, with the l = 0 elastic slot at zero width
        for l in 0..6 {
            assert_relative_eq!(
                c.hwhm[[i, l]],
                (l * (l + 1)) as f64 * dr,
                epsilon = 1e-12
            );
        }
    }
}

#[test]
fn test_isotropic_rotational_partition() {
    // Sears expansion: j₀² + Σ (2l+1)jₗ² = 1, exact up to the truncation.
    // The small-q values guard the series evaluation of the Bessel
    // functions, where naive recurrence blows up
    let q = [1e-6, 1e-4, 1e-2, 0.1, 0.3, 1.0, 1.5];
    let c = hwhm_isotropic_rotational_diffusion(&q, 1.0, 1.0).unwrap();
    for i in 0..q.len() {
        let total: f64 = c.eisf[i] + c.qisf.row(i).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-6);
    }
}

#[test]
fn test_water_teixeira_small_q_wing_stays_small() {
    // The Teixeira weights are the rotational decomposition, so at small q
    // nearly all intensity sits in the narrow translational term. At
    // ω = 1 the spectrum is bounded by the quasi-elastic leakage, around
    // 1e-7 here; corrupted high-order Bessel values inflate it by many
    // orders of magnitude
    let params = WaterTeixeiraParams::default();
    let sqw = sqw_water_teixeira(&[1.0], &[1e-3], &params).unwrap();
    assert!(sqw[[0, 0]] > 0.0);
    assert!(sqw[[0, 0]] < 1e-6);
}

#[rstest]
#[case(2)]
#[case(3)]
#[case(6)]
fn test_equivalent_sites_widths_and_partition(#[case] n_sites: usize) {
    let tau = 0.8;
    let c = hwhm_equivalent_sites_circle(&[0.5, 1.0], n_sites, 1.2, tau).unwrap();
    assert_eq!(c.n_terms(), n_sites);
    for k in 1..n_sites {
        let expected = (2.0 / tau) * (k as f64 * std::f64::consts::PI / n_sites as f64).sin().powi(2);
        // Widths do not depend on q
        assert_relative_eq!(c.hwhm[[0, k]], expected, epsilon = 1e-12);
        assert_relative_eq!(c.hwhm[[1, k]], expected, epsilon = 1e-12);
    }
    // The DCT of a finite site set partitions exactly
    for i in 0..2 {
        let total: f64 = c.eisf[i] + c.qisf.row(i).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-10);
    }
}

#[test]
fn test_equivalent_sites_zero_q_is_elastic() {
    let c = hwhm_equivalent_sites_circle(&[0.0], 3, 1.0, 1.0).unwrap();
    assert_relative_eq!(c.eisf[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(c.qisf.row(0).sum(), 0.0, epsilon = 1e-12);
}

#[test]
fn test_gaussian_model_3d_widths_and_weights() {
    let (d, var) = (0.5, 1.5);
    let q = 0.8;
    let c = hwhm_gaussian_model_3d(&[q], d, var).unwrap();
    assert_eq!(c.n_terms(), 100);

    let arg = q * q * var;
    // eisf = exp(−q²⟨u²⟩), widths k·D/⟨u²⟩, weights Poisson in k
    assert_relative_eq!(c.eisf[0], (-arg).exp(), epsilon = 1e-12);
    let mut poisson = (-arg).exp();
    for k in 1..10 {
        poisson *= arg / k as f64;
        assert_relative_eq!(c.hwhm[[0, k]], k as f64 * d / var, epsilon = 1e-12);
        assert_relative_eq!(c.qisf[[0, k]], poisson, epsilon = 1e-12);
    }
}

#[test]
fn test_gaussian_model_3d_partition() {
    let c = hwhm_gaussian_model_3d(&[0.3, 1.0, 2.0], 1.0, 1.0).unwrap();
    for i in 0..3 {
        let total: f64 = c.eisf[i] + c.qisf.row(i).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-10);
    }
}

#[rstest]
#[case(0.0, 1.0)]
#[case(-0.5, 1.0)]
#[case(1.0, 0.0)]
#[case(1.0, -2.0)]
fn test_two_parameter_models_reject_non_positive(#[case] a: f64, #[case] b: f64) {
    assert!(hwhm_jump_translational_diffusion(&[1.0], a, b).is_err());
    assert!(hwhm_chudley_elliott_diffusion(&[1.0], a, b).is_err());
    assert!(hwhm_isotropic_rotational_diffusion(&[1.0], a, b).is_err());
    assert!(hwhm_gaussian_model_3d(&[1.0], a, b).is_err());
}

#[test]
fn test_too_few_sites_rejected() {
    assert!(hwhm_equivalent_sites_circle(&[1.0], 1, 1.0, 1.0).is_err());
    assert!(hwhm_equivalent_sites_circle(&[1.0], 0, 1.0, 1.0).is_err());
}

#[test]
fn test_empty_q_axis_rejected() {
    assert!(hwhm_brownian_translational_diffusion(&[], 1.0).is_err());
    assert!(hwhm_equivalent_sites_circle(&[], 3, 1.0, 1.0).is_err());
}
