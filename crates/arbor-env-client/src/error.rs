// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the Arbor Environments client.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to the Arbor Environments service.
///
/// `NotFound` is carved out as its own variant so callers classify failures
/// with a plain `match` instead of probing error bodies themselves.
#[derive(Debug, Error)]
pub enum EnvError {
	/// Network-level error during HTTP communication, including timeouts
	/// and aborted requests.
	#[error("network error: {0}")]
	Network(#[from] reqwest::Error),

	/// The requested environment or property does not exist.
	#[error("{message}")]
	NotFound { message: String },

	/// The service returned a non-success status that does not indicate
	/// absence.
	#[error("Arbor API error: {status} - {message}")]
	Api { status: u16, message: String },

	/// The service returned a body this client could not decode.
	#[error("invalid response from Arbor: {0}")]
	InvalidResponse(String),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, EnvError>;

/// Structured error body the service returns alongside non-success statuses.
///
/// Older deployments return opaque text instead, so decoding this is best
/// effort.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
	code: u16,
	message: String,
}

impl EnvError {
	/// Returns true if this error indicates the target does not exist.
	pub fn is_not_found(&self) -> bool {
		matches!(self, EnvError::NotFound { .. })
	}

	/// Classifies a non-success response body.
	///
	/// Two historically-coexisting error shapes must be recognized: a
	/// structured `{code, message}` body where code 400 or 409 combined
	/// with a "not found" message signals absence, and a bare opaque body
	/// where only a substring search is possible. Structured decode is
	/// attempted first, substring match is the fallback.
	pub(crate) fn from_api_response(status: u16, body: String) -> Self {
		match serde_json::from_str::<ApiErrorBody>(&body) {
			Ok(parsed) => {
				if matches!(parsed.code, 400 | 409)
					&& parsed.message.to_lowercase().contains("not found")
				{
					EnvError::NotFound {
						message: parsed.message,
					}
				} else {
					EnvError::Api {
						status,
						message: parsed.message,
					}
				}
			}
			Err(_) => {
				if body.to_lowercase().contains("not found") {
					EnvError::NotFound { message: body }
				} else {
					EnvError::Api {
						status,
						message: body,
					}
				}
			}
		}
	}
}
