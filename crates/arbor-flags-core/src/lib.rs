// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Arbor feature flags provider.
//!
//! This crate defines the evaluation surface shared between the provider
//! implementation (`arbor-flags`) and host applications: flag types,
//! resolution outcomes, evaluation context, and the [`FeatureProvider`]
//! trait.
//!
//! # Overview
//!
//! An evaluation never fails as a Rust `Err`. Every call produces a
//! [`ResolutionDetails`] carrying a usable value: the remote value on
//! success, or the caller-supplied default plus an [`ErrorCode`] and message
//! on any failure. Only provider construction is allowed to fail hard.
//!
//! # Example
//!
//! ```
//! use arbor_flags_core::{ErrorCode, FlagMetadata, Reason, ResolutionDetails};
//!
//! let ok = ResolutionDetails::static_value(true, FlagMetadata::default());
//! assert_eq!(ok.reason, Reason::Static);
//!
//! let missing: ResolutionDetails<bool> =
//! 	ResolutionDetails::error(false, ErrorCode::FlagNotFound, "DEBUG_MODE not found");
//! assert_eq!(missing.value, false);
//! assert_eq!(missing.error_code, Some(ErrorCode::FlagNotFound));
//! ```

mod context;
mod flag_type;
mod provider;
mod resolution;

pub use context::EvaluationContext;
pub use flag_type::FlagType;
pub use provider::{FeatureProvider, Hook, ProviderMetadata, ProviderStatus};
pub use resolution::{ErrorCode, FlagMetadata, Reason, ResolutionDetails};
