// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The single-fetch half of the typed resolver.
//!
//! [`ArborProvider::resolve_value`] performs the remote point lookup and
//! classifies failures; the per-type narrowing lives with the trait methods
//! in `provider.rs` as a pattern match over [`PropertyValue`].

use arbor_env_client::PropertyValue;
use arbor_flags_core::{ErrorCode, FlagMetadata, FlagType};
use tracing::{debug, trace};

use crate::provider::ArborProvider;

/// Outcome of the fetch step, before type reconciliation.
///
/// Existence is decided here, type compatibility later; that ordering is
/// what makes FLAG_NOT_FOUND and TYPE_MISMATCH mutually exclusive.
pub(crate) enum Resolution {
	/// The property exists; carries its raw value and provenance markers.
	Value(PropertyValue, FlagMetadata),
	/// The fetch failed; carries the classification and message.
	Failure(ErrorCode, String),
}

impl ArborProvider {
	/// Fetches `flag_key` from the opened environment and classifies the
	/// result. Never returns an `Err`: transport failures become
	/// [`Resolution::Failure`] so callers can substitute their default.
	pub(crate) async fn resolve_value(&self, flag_key: &str) -> Resolution {
		trace!(flag = %flag_key, "Resolving flag against remote environment");

		match self
			.client()
			.read_property(
				self.access_token(),
				self.org(),
				self.project(),
				self.env(),
				self.session_id(),
				flag_key,
			)
			.await
		{
			Ok(property) => {
				let metadata = FlagMetadata {
					secret: property.is_secret(),
					trace: property.trace().map(str::to_string),
				};
				Resolution::Value(property.into_value(), metadata)
			}
			Err(err) if err.is_not_found() => {
				debug!(flag = %flag_key, "Flag not found in remote environment");
				Resolution::Failure(ErrorCode::FlagNotFound, format!("{flag_key} not found"))
			}
			Err(err) => {
				debug!(flag = %flag_key, error = %err, "Flag resolution failed");
				Resolution::Failure(ErrorCode::General, err.to_string())
			}
		}
	}
}

/// Builds the TYPE_MISMATCH message naming the key, its observed dynamic
/// type, and the requested type.
pub(crate) fn type_mismatch_message(
	flag_key: &str,
	observed: &PropertyValue,
	expected: FlagType,
) -> String {
	format!(
		"{flag_key} is of type {}, not of type {expected}",
		observed.type_name()
	)
}
