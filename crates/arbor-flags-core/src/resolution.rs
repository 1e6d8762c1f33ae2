// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resolution outcomes for flag evaluations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why an evaluation produced the value it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
	/// The value was resolved from the remote environment. Values there are
	/// static between deployments, hence the name.
	Static,
	/// The evaluation failed and the returned value is the caller's default.
	Error,
}

/// Classification of a failed evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
	/// The flag key does not exist in the remote value tree.
	FlagNotFound,
	/// The key exists but its dynamic type is incompatible with the
	/// requested type.
	TypeMismatch,
	/// Any other failure: transport errors, malformed responses,
	/// unimplemented capabilities.
	General,
}

impl fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			ErrorCode::FlagNotFound => "FLAG_NOT_FOUND",
			ErrorCode::TypeMismatch => "TYPE_MISMATCH",
			ErrorCode::General => "GENERAL",
		};
		f.write_str(name)
	}
}

/// Provenance markers copied from the remote value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagMetadata {
	/// Whether the remote service marked the underlying value as sensitive.
	pub secret: bool,
	/// Remote-assigned provenance/audit token, when present.
	pub trace: Option<String>,
}

/// The outcome of a single flag evaluation.
///
/// Invariants:
/// - a successful outcome (`reason == Static`) never carries an error code,
///   and an error outcome never carries metadata;
/// - on error, `value` is the caller-supplied default, never a zero value.
///
/// The constructors below are the only way these are built, which keeps the
/// invariants by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionDetails<T> {
	pub value: T,
	pub reason: Reason,
	pub error_code: Option<ErrorCode>,
	pub error_message: Option<String>,
	pub metadata: Option<FlagMetadata>,
}

impl<T> ResolutionDetails<T> {
	/// A successful resolution carrying the remote value and its metadata.
	pub fn static_value(value: T, metadata: FlagMetadata) -> Self {
		Self {
			value,
			reason: Reason::Static,
			error_code: None,
			error_message: None,
			metadata: Some(metadata),
		}
	}

	/// A failed resolution echoing the caller's default.
	pub fn error(default_value: T, code: ErrorCode, message: impl Into<String>) -> Self {
		Self {
			value: default_value,
			reason: Reason::Error,
			error_code: Some(code),
			error_message: Some(message.into()),
			metadata: None,
		}
	}

	/// Returns true if this outcome represents a failed evaluation.
	pub fn is_error(&self) -> bool {
		self.reason == Reason::Error
	}
}
