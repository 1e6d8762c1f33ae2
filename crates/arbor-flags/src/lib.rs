// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Feature flags provider backed by the Arbor Environments service.
//!
//! This crate adapts configuration and secret values stored in a remote
//! Arbor environment into the standardized flag-evaluation interface defined
//! by `arbor-flags-core`. A host application asks for typed values
//! ("the boolean flag `DEBUG_MODE`", "the string flag
//! `configs.USERS_DB_MONGO_URL`") without knowing the value lives in a
//! remote config service.
//!
//! Every evaluation performs exactly one remote point lookup. There is no
//! caching, no streaming of changed values, and no retry around the fetch;
//! failed evaluations return the caller's default together with a structured
//! error code rather than propagating a fault.
//!
//! # Example
//!
//! ```ignore
//! use arbor_flags::{ArborProvider, ProviderOptions};
//! use arbor_flags_core::{EvaluationContext, FeatureProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! 	let provider = ArborProvider::connect(
//! 		"acme",
//! 		"payments",
//! 		"prod",
//! 		std::env::var("ARBOR_ACCESS_TOKEN")?,
//! 		ProviderOptions::default(),
//! 	)
//! 	.await?;
//!
//! 	let ctx = EvaluationContext::new();
//! 	let debug = provider.resolve_bool_value("configs.DEBUG_MODE", false, &ctx).await;
//! 	if debug.is_error() {
//! 		eprintln!("fell back to default: {:?}", debug.error_message);
//! 	}
//! 	Ok(())
//! }
//! ```

mod error;
mod provider;
mod resolve;

pub use error::{ProviderError, Result};
pub use provider::{ArborProvider, ProviderOptions, PROVIDER_NAME};

// Re-export the evaluation surface for convenience
pub use arbor_flags_core::{
	ErrorCode, EvaluationContext, FeatureProvider, FlagMetadata, FlagType, ProviderMetadata,
	ProviderStatus, Reason, ResolutionDetails,
};
