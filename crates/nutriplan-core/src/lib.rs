// ABOUTME: Core types and constants for the nutriplan nutrition estimator
// ABOUTME: Foundation crate with error handling, domain constants and value models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! Foundation crate providing shared types and constants for the nutriplan
//! estimator. It has no I/O and changes infrequently, so the calculation and
//! intake layers compile incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy factors, safety thresholds and intake limits
//! - **models**: Profiles consumed by the pipeline and the plans it produces

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models (profiles, macro plans)
pub mod models;
