/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! Peak-shape primitives
//!
//! Pure elementwise functions of an energy-transfer axis: the Lorentzian
//! and Gaussian line shapes, the discretized Dirac delta, and a polynomial
//! background. The spectral models in [`crate::models`] are weighted sums
//! of these primitives.
//!
//! All primitives take the axis as a slice and return a fresh
//! [`ndarray::Array1`]; callers with a scalar abscissa pass a one-element
//! slice. Zero-width Lorentzians and Gaussians delegate to the delta,
//! their distributional limit.

mod background;
mod delta;
pub mod errors;
mod gaussian;
mod lorentzian;

pub use background::background_polynomials;
pub use delta::delta;
pub use errors::{PeakError, Result};
pub use gaussian::gaussian;
pub use lorentzian::lorentzian;
