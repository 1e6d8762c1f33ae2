// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Dynamically-typed property values, decoded once at the transport boundary.

use serde::Deserialize;

/// A remote property value.
///
/// The wire format is JSON, and the decoder collapses every JSON number into
/// `Number(f64)` regardless of whether it was written as an integer literal.
/// This quirk is load-bearing: an "integer" flag is a number the resolver
/// narrows by truncation.
///
/// `Composite` carries arrays and objects. This provider never evaluates
/// them, but representing them keeps an unexpected remote shape on the
/// type-mismatch path instead of aborting a decode.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
	Bool(bool),
	String(String),
	Number(f64),
	Null,
	Composite(serde_json::Value),
}

impl PropertyValue {
	/// Name of the dynamic type, used in type-mismatch messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			PropertyValue::Bool(_) => "bool",
			PropertyValue::String(_) => "string",
			PropertyValue::Number(_) => "number",
			PropertyValue::Null => "null",
			PropertyValue::Composite(serde_json::Value::Array(_)) => "array",
			PropertyValue::Composite(_) => "object",
		}
	}
}

impl From<serde_json::Value> for PropertyValue {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Bool(b) => PropertyValue::Bool(b),
			serde_json::Value::String(s) => PropertyValue::String(s),
			serde_json::Value::Number(n) => match n.as_f64() {
				Some(f) => PropertyValue::Number(f),
				// Arbitrary-precision numbers outside f64 range; keep the
				// raw value so the mismatch message names what arrived.
				None => PropertyValue::Composite(serde_json::Value::Number(n)),
			},
			serde_json::Value::Null => PropertyValue::Null,
			other => PropertyValue::Composite(other),
		}
	}
}

/// A property read out of an opened environment: the value plus the
/// sensitivity and provenance markers the service attaches to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
	value: PropertyValue,
	secret: bool,
	trace: Option<String>,
}

impl Property {
	pub fn value(&self) -> &PropertyValue {
		&self.value
	}

	pub fn into_value(self) -> PropertyValue {
		self.value
	}

	/// Whether the service marked this value as sensitive.
	pub fn is_secret(&self) -> bool {
		self.secret
	}

	/// Remote-assigned provenance/audit token, when present.
	pub fn trace(&self) -> Option<&str> {
		self.trace.as_deref()
	}
}

/// Wire shape of a property read response.
#[derive(Debug, Deserialize)]
pub(crate) struct PropertyResponse {
	value: serde_json::Value,
	#[serde(default)]
	secret: bool,
	#[serde(default)]
	trace: Option<String>,
}

impl From<PropertyResponse> for Property {
	fn from(response: PropertyResponse) -> Self {
		Property {
			value: PropertyValue::from(response.value),
			secret: response.secret,
			trace: response.trace,
		}
	}
}
