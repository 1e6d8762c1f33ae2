// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Caller-supplied context for a flag evaluation.
///
/// Providers backed by per-user targeting use this to pick a variant. The
/// Arbor provider resolves environment-static values and ignores the
/// context, but the trait surface carries it so hosts can swap providers
/// without changing call sites.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationContext {
	/// Stable identifier for the evaluating subject (user id, session id).
	pub targeting_key: Option<String>,
	/// Free-form attributes (plan, region, ...).
	pub attributes: HashMap<String, serde_json::Value>,
}

impl EvaluationContext {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_targeting_key(mut self, key: impl Into<String>) -> Self {
		self.targeting_key = Some(key.into());
		self
	}

	pub fn with_attribute(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
		self.attributes.insert(name.into(), value);
		self
	}
}
