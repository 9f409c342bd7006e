/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! Utility functions shared across the QENS models
//!
//! This module provides the special functions and quadrature helpers used
//! by the structure-factor calculators and the test suite.

pub mod errors;
pub mod math;

pub use errors::{Result, UtilsError};
pub use math::{sinc, spherical_bessel_j, trapezoid};
