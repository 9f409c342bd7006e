/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! Error types for the peak-shape primitives

use thiserror::Error;

/// Errors that can occur when evaluating peak-shape primitives
#[derive(Error, Debug)]
pub enum PeakError {
    /// A width parameter (hwhm or sigma) was negative
    #[error("width parameter must be non-negative, got {0}")]
    NegativeWidth(f64),

    /// The abscissa array was empty
    #[error("abscissa array must not be empty")]
    EmptyAxis,

    /// The polynomial coefficient list was empty
    #[error("polynomial coefficient list must not be empty")]
    EmptyCoefficients,
}

/// A specialized Result type for peak-shape operations
pub type Result<T> = std::result::Result<T, PeakError>;
