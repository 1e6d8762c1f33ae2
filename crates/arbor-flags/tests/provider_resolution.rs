// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! End-to-end resolution tests against a mock Arbor Environments service.

use arbor_flags::{ArborProvider, ProviderOptions, PROVIDER_NAME};
use arbor_flags_core::{ErrorCode, EvaluationContext, FeatureProvider, ProviderStatus, Reason};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORG: &str = "acme";
const PROJECT: &str = "payments";
const ENV: &str = "prod";
const TOKEN: &str = "arbr_test_token";
const SESSION: &str = "session-abc";

fn property_path() -> String {
	format!("/api/environments/{ORG}/{PROJECT}/{ENV}/open/{SESSION}/property")
}

async fn mount_property(server: &MockServer, key: &str, body: serde_json::Value) {
	Mock::given(method("GET"))
		.and(path(property_path()))
		.and(query_param("property", key))
		.respond_with(ResponseTemplate::new(200).set_body_json(body))
		.mount(server)
		.await;
}

/// Stands up a mock service with a fixed environment tree and returns a
/// connected provider.
async fn ready_provider(server: &MockServer) -> ArborProvider {
	Mock::given(method("POST"))
		.and(path(format!(
			"/api/environments/{ORG}/{PROJECT}/{ENV}/open"
		)))
		.respond_with(
			ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": SESSION })),
		)
		.mount(server)
		.await;

	mount_property(server, "SOME_BOOL_FLAG", serde_json::json!({"value": true})).await;
	mount_property(server, "SOME_INT_FLAG", serde_json::json!({"value": 50})).await;
	mount_property(server, "SOME_FLOAT_FLAG", serde_json::json!({"value": 0.5})).await;
	mount_property(
		server,
		"SOME_STRING_FLAG",
		serde_json::json!({"value": "string-flag-value"}),
	)
	.await;
	mount_property(server, "FRACTIONAL_FLAG", serde_json::json!({"value": 50.7})).await;
	mount_property(server, "NULL_FLAG", serde_json::json!({"value": null})).await;
	mount_property(
		server,
		"NESTED_FLAG",
		serde_json::json!({"value": {"inner": 1}}),
	)
	.await;
	mount_property(
		server,
		"SECRET_FLAG",
		serde_json::json!({
			"value": "hunter2",
			"secret": true,
			"trace": "aws.secrets"
		}),
	)
	.await;

	// Everything else is absent from the tree.
	Mock::given(method("GET"))
		.and(path(property_path()))
		.respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
			"code": 400,
			"message": "property not found"
		})))
		.with_priority(50)
		.mount(server)
		.await;

	ArborProvider::connect(
		ORG,
		PROJECT,
		ENV,
		TOKEN,
		ProviderOptions {
			endpoint: Some(server.uri()),
			..ProviderOptions::default()
		},
	)
	.await
	.expect("provider should connect against mock service")
}

#[tokio::test]
async fn metadata_reports_provider_name() {
	let server = MockServer::start().await;
	let provider = ready_provider(&server).await;
	assert_eq!(provider.metadata().name, PROVIDER_NAME);
}

#[tokio::test]
async fn status_reflects_construction_and_degradation() {
	let server = MockServer::start().await;
	let provider = ready_provider(&server).await;
	assert_eq!(provider.status(), ProviderStatus::Ready);

	provider.set_status(ProviderStatus::Error);
	assert_eq!(provider.status(), ProviderStatus::Error);
}

#[tokio::test]
async fn hooks_are_empty() {
	let server = MockServer::start().await;
	let provider = ready_provider(&server).await;
	assert!(provider.hooks().is_empty());
}

#[tokio::test]
async fn connect_fails_hard_on_bad_credential() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path(format!(
			"/api/environments/{ORG}/{PROJECT}/{ENV}/open"
		)))
		.respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
			"code": 401,
			"message": "invalid access token"
		})))
		.mount(&server)
		.await;

	let result = ArborProvider::connect(
		ORG,
		PROJECT,
		ENV,
		"bad-token",
		ProviderOptions {
			endpoint: Some(server.uri()),
			..ProviderOptions::default()
		},
	)
	.await;

	let err = result.err().expect("construction must fail");
	assert!(err.to_string().contains("invalid access token"));
}

#[tokio::test]
async fn bool_flag_resolves_statically() {
	let server = MockServer::start().await;
	let provider = ready_provider(&server).await;
	let ctx = EvaluationContext::new();

	let details = provider.resolve_bool_value("SOME_BOOL_FLAG", false, &ctx).await;
	assert!(details.value);
	assert_eq!(details.reason, Reason::Static);
	assert_eq!(details.error_code, None);
	assert_eq!(details.metadata.map(|m| m.secret), Some(false));
}

#[tokio::test]
async fn bool_flag_type_mismatch_echoes_default() {
	let server = MockServer::start().await;
	let provider = ready_provider(&server).await;
	let ctx = EvaluationContext::new();

	let details = provider.resolve_bool_value("SOME_INT_FLAG", false, &ctx).await;
	assert!(!details.value);
	assert_eq!(details.reason, Reason::Error);
	assert_eq!(details.error_code, Some(ErrorCode::TypeMismatch));
	assert_eq!(
		details.error_message.as_deref(),
		Some("SOME_INT_FLAG is of type number, not of type bool")
	);
	assert!(details.metadata.is_none());
}

#[tokio::test]
async fn missing_flag_echoes_default_not_zero_value() {
	let server = MockServer::start().await;
	let provider = ready_provider(&server).await;
	let ctx = EvaluationContext::new();

	let details = provider
		.resolve_string_value("NON_EXISTING_FLAG", "dflt", &ctx)
		.await;
	assert_eq!(details.value, "dflt");
	assert_eq!(details.error_code, Some(ErrorCode::FlagNotFound));
	assert_eq!(
		details.error_message.as_deref(),
		Some("NON_EXISTING_FLAG not found")
	);

	let details = provider.resolve_int_value("NON_EXISTING_FLAG", 10, &ctx).await;
	assert_eq!(details.value, 10);
	assert_eq!(details.error_code, Some(ErrorCode::FlagNotFound));

	let details = provider
		.resolve_float_value("NON_EXISTING_FLAG", 0.1, &ctx)
		.await;
	assert_eq!(details.value, 0.1);
	assert_eq!(details.error_code, Some(ErrorCode::FlagNotFound));

	let details = provider.resolve_bool_value("NON_EXISTING_FLAG", true, &ctx).await;
	assert!(details.value);
	assert_eq!(details.error_code, Some(ErrorCode::FlagNotFound));
}

#[tokio::test]
async fn string_flag_resolves_statically() {
	let server = MockServer::start().await;
	let provider = ready_provider(&server).await;
	let ctx = EvaluationContext::new();

	let details = provider
		.resolve_string_value("SOME_STRING_FLAG", "default-value", &ctx)
		.await;
	assert_eq!(details.value, "string-flag-value");
	assert_eq!(details.reason, Reason::Static);
}

#[tokio::test]
async fn string_flag_type_mismatch() {
	let server = MockServer::start().await;
	let provider = ready_provider(&server).await;
	let ctx = EvaluationContext::new();

	let details = provider
		.resolve_string_value("SOME_INT_FLAG", "default-value", &ctx)
		.await;
	assert_eq!(details.value, "default-value");
	assert_eq!(details.error_code, Some(ErrorCode::TypeMismatch));
}

#[tokio::test]
async fn int_flag_narrows_whole_number() {
	let server = MockServer::start().await;
	let provider = ready_provider(&server).await;
	let ctx = EvaluationContext::new();

	let details = provider.resolve_int_value("SOME_INT_FLAG", 10, &ctx).await;
	assert_eq!(details.value, 50);
	assert_eq!(details.reason, Reason::Static);
}

#[tokio::test]
async fn int_flag_truncates_fractional_number() {
	let server = MockServer::start().await;
	let provider = ready_provider(&server).await;
	let ctx = EvaluationContext::new();

	// 50.7 requested as integer truncates; a numeric value is never
	// rejected for having been decoded as floating-point.
	let details = provider.resolve_int_value("FRACTIONAL_FLAG", 10, &ctx).await;
	assert_eq!(details.value, 50);
	assert_eq!(details.reason, Reason::Static);
}

#[tokio::test]
async fn int_flag_type_mismatch_from_bool() {
	let server = MockServer::start().await;
	let provider = ready_provider(&server).await;
	let ctx = EvaluationContext::new();

	let details = provider.resolve_int_value("SOME_BOOL_FLAG", 10, &ctx).await;
	assert_eq!(details.value, 10);
	assert_eq!(details.error_code, Some(ErrorCode::TypeMismatch));
	assert_eq!(
		details.error_message.as_deref(),
		Some("SOME_BOOL_FLAG is of type bool, not of type int")
	);
}

#[tokio::test]
async fn float_flag_resolves_statically() {
	let server = MockServer::start().await;
	let provider = ready_provider(&server).await;
	let ctx = EvaluationContext::new();

	let details = provider.resolve_float_value("SOME_FLOAT_FLAG", 0.1, &ctx).await;
	assert_eq!(details.value, 0.5);
	assert_eq!(details.reason, Reason::Static);
}

#[tokio::test]
async fn integer_valued_property_is_a_valid_float_flag() {
	let server = MockServer::start().await;
	let provider = ready_provider(&server).await;
	let ctx = EvaluationContext::new();

	let details = provider.resolve_float_value("SOME_INT_FLAG", 0.1, &ctx).await;
	assert_eq!(details.value, 50.0);
	assert_eq!(details.reason, Reason::Static);
}

#[tokio::test]
async fn null_value_is_a_type_mismatch() {
	let server = MockServer::start().await;
	let provider = ready_provider(&server).await;
	let ctx = EvaluationContext::new();

	let details = provider.resolve_string_value("NULL_FLAG", "dflt", &ctx).await;
	assert_eq!(details.value, "dflt");
	assert_eq!(details.error_code, Some(ErrorCode::TypeMismatch));
	assert_eq!(
		details.error_message.as_deref(),
		Some("NULL_FLAG is of type null, not of type string")
	);
}

#[tokio::test]
async fn composite_value_is_a_type_mismatch_not_a_crash() {
	let server = MockServer::start().await;
	let provider = ready_provider(&server).await;
	let ctx = EvaluationContext::new();

	let details = provider.resolve_bool_value("NESTED_FLAG", false, &ctx).await;
	assert!(!details.value);
	assert_eq!(details.error_code, Some(ErrorCode::TypeMismatch));
	assert_eq!(
		details.error_message.as_deref(),
		Some("NESTED_FLAG is of type object, not of type bool")
	);
}

#[tokio::test]
async fn secret_markers_propagate_into_metadata() {
	let server = MockServer::start().await;
	let provider = ready_provider(&server).await;
	let ctx = EvaluationContext::new();

	let details = provider.resolve_string_value("SECRET_FLAG", "dflt", &ctx).await;
	assert_eq!(details.value, "hunter2");
	let metadata = details.metadata.expect("successful resolution has metadata");
	assert!(metadata.secret);
	assert_eq!(metadata.trace.as_deref(), Some("aws.secrets"));
}

#[tokio::test]
async fn transport_failure_is_a_general_error() {
	let server = MockServer::start().await;
	let provider = ready_provider(&server).await;
	let ctx = EvaluationContext::new();

	// Replace the property endpoint with a hard failure.
	server.reset().await;
	Mock::given(method("GET"))
		.and(path(property_path()))
		.respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
		.mount(&server)
		.await;

	let details = provider.resolve_bool_value("SOME_BOOL_FLAG", true, &ctx).await;
	assert!(details.value);
	assert_eq!(details.error_code, Some(ErrorCode::General));
	assert!(details
		.error_message
		.as_deref()
		.unwrap_or_default()
		.contains("internal error"));
}

#[tokio::test]
async fn object_evaluation_is_unimplemented() {
	let server = MockServer::start().await;
	let provider = ready_provider(&server).await;
	let ctx = EvaluationContext::new();

	let default = serde_json::json!({"fallback": true});
	let details = provider
		.resolve_object_value("NESTED_FLAG", default.clone(), &ctx)
		.await;
	assert_eq!(details.value, default);
	assert_eq!(details.error_code, Some(ErrorCode::General));
	assert_eq!(
		details.error_message.as_deref(),
		Some("ObjectEvaluation not implemented")
	);
}

#[tokio::test]
async fn concurrent_evaluations_share_one_provider() {
	let server = MockServer::start().await;
	let provider = std::sync::Arc::new(ready_provider(&server).await);
	let ctx = EvaluationContext::new();

	let mut handles = Vec::new();
	for _ in 0..8 {
		let provider = std::sync::Arc::clone(&provider);
		let ctx = ctx.clone();
		handles.push(tokio::spawn(async move {
			provider.resolve_int_value("SOME_INT_FLAG", 10, &ctx).await
		}));
	}

	for handle in handles {
		let details = handle.await.expect("task must not panic");
		assert_eq!(details.value, 50);
		assert_eq!(details.reason, Reason::Static);
	}
}
