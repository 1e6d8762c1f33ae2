// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Provider error types.
//!
//! Only construction can fail hard. Evaluation-time failures are folded into
//! `ResolutionDetails` and never surface as a Rust `Err`.

use arbor_env_client::EnvError;
use thiserror::Error;

/// Errors raised while constructing a provider.
#[derive(Debug, Error)]
pub enum ProviderError {
	/// The remote session could not be opened: bad credential, unknown
	/// environment, or a transport failure.
	#[error("failed to initialise arbor flags provider: {0}")]
	Initialization(#[from] EnvError),
}

/// Result type alias for provider construction.
pub type Result<T> = std::result::Result<T, ProviderError>;
