/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! # qens-rs
//!
//! A Rust implementation of the QENS model library: closed-form models of
//! quasi-elastic neutron scattering spectra S(q, ω).
//!
//! The crate is organized in three layers:
//!
//! - [`peaks`] - peak-shape primitives (Lorentzian, Gaussian, discretized
//!   Dirac delta, polynomial background), pure elementwise functions of an
//!   energy-transfer axis;
//! - [`models`] - physical models, each split into a width/structure-factor
//!   calculator (`hwhm_*`) returning the per-q decomposition into elastic
//!   and quasi-elastic components and a spectral function (`sqw_*`)
//!   assembling the S(q, ω) surface from the primitives;
//! - [`utils`] - the shared special functions (sinc, spherical Bessel) and
//!   quadrature helpers.
//!
//! Every evaluation is a pure function of its arguments: no caller input
//! is mutated, nothing is cached between calls, and per-q rows of a
//! surface are computed independently (and in parallel). Curve fitting,
//! experiment-file handling, and resolution convolution are left to the
//! calling frameworks.
//!
//! ```
//! use qens_rs::models::{
//!     single_q_spectrum, sqw_brownian_translational_diffusion,
//!     BrownianTranslationalDiffusionParams,
//! };
//!
//! let w: Vec<f64> = (-200..=200).map(|i| i as f64 * 0.01).collect();
//! let params = BrownianTranslationalDiffusionParams::default();
//!
//! // Full (q, ω) surface, one row per q value
//! let sqw = sqw_brownian_translational_diffusion(&w, &[0.5, 1.0, 2.0], &params).unwrap();
//! assert_eq!(sqw.dim(), (3, w.len()));
//!
//! // Single-spectrum form for one q value
//! let spectrum = single_q_spectrum(
//!     sqw_brownian_translational_diffusion(&w, &[1.0], &params).unwrap(),
//! )
//! .unwrap();
//! assert_eq!(spectrum.len(), w.len());
//! ```

pub mod models;
pub mod peaks;
pub mod utils;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
