// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of types a flag can be requested as.
///
/// `Object` is a recognized member of the enumeration, but object evaluation
/// is a deliberate capability gap: every request for it is rejected with a
/// general error. See `arbor-flags` for the rejection path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagType {
	Bool,
	String,
	Int,
	Float,
	Object,
}

impl fmt::Display for FlagType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			FlagType::Bool => "bool",
			FlagType::String => "string",
			FlagType::Int => "int",
			FlagType::Float => "float",
			FlagType::Object => "object",
		};
		f.write_str(name)
	}
}
