/*
MIT License with QENSmodels Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: QENSmodels 0.1.2
Copyright (c) 2016 Institut Laue-Langevin and European Spallation Source ERIC.
All rights reserved.
*/

//! Error types for the model module

use crate::peaks::PeakError;
use thiserror::Error;

/// Errors that can occur when evaluating QENS models
#[derive(Error, Debug)]
pub enum ModelError {
    /// A physical parameter violated its positivity domain constraint
    #[error("parameter `{name}` must be strictly positive, got {value}")]
    NonPositiveParameter { name: &'static str, value: f64 },

    /// Fewer than two sites were requested for a site-exchange model
    #[error("parameter `n_sites` must be at least 2, got {0}")]
    TooFewSites(usize),

    /// A per-q amplitude or width array disagrees with the q axis length
    #[error("per-q array `{name}` has length {got}, expected {expected} to match the momentum-transfer axis")]
    AmplitudeShape {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    /// The momentum-transfer axis was empty
    #[error("momentum-transfer axis must not be empty")]
    EmptyAxis,

    /// A single-q convenience call received a multi-q surface
    #[error("expected a single-q spectral surface, got {rows} rows")]
    NotSingleQ { rows: usize },

    /// A peak-shape primitive failed
    #[error(transparent)]
    Peak(#[from] PeakError),
}

/// A specialized Result type for model evaluation
pub type Result<T> = std::result::Result<T, ModelError>;
