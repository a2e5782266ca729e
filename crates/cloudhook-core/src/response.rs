// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Outcome and callback response types.
//!
//! Hooks produce a partial [`Outcome`]. The handler completes it into a
//! [`CallbackResponse`] by stamping the physical resource identifier and the
//! correlation fields from the event, and only complete responses ever reach
//! a responder.

use serde::{Deserialize, Serialize};

/// Terminal status reported to the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutcomeStatus {
	/// The operation completed.
	Success,
	/// The operation failed.
	Failed,
}

/// Partial outcome produced by an operation hook.
///
/// Carries only what the hook decides: the status, an optional
/// human-readable reason, an optional echo-suppression flag, and an optional
/// opaque data bag surfaced back to the requesting template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Outcome {
	/// Whether the operation succeeded.
	pub status: OutcomeStatus,
	/// Human-readable explanation, typically set on failure.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reason: Option<String>,
	/// Suppress echoing of the data bag in the orchestrator's console.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub no_echo: Option<bool>,
	/// Opaque result data surfaced to the requesting template.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<serde_json::Value>,
}

impl Outcome {
	/// A successful outcome with no data.
	pub fn success() -> Self {
		Self {
			status: OutcomeStatus::Success,
			reason: None,
			no_echo: None,
			data: None,
		}
	}

	/// A failed outcome with the given reason.
	pub fn failed(reason: impl Into<String>) -> Self {
		Self {
			status: OutcomeStatus::Failed,
			reason: Some(reason.into()),
			no_echo: None,
			data: None,
		}
	}

	/// Attaches a reason.
	pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
		self.reason = Some(reason.into());
		self
	}

	/// Attaches result data.
	pub fn with_data(mut self, data: serde_json::Value) -> Self {
		self.data = Some(data);
		self
	}

	/// Suppresses echoing of the result data.
	pub fn no_echo(mut self) -> Self {
		self.no_echo = Some(true);
		self
	}
}

/// Completed outcome record delivered to the callback URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallbackResponse {
	/// Whether the operation succeeded.
	pub status: OutcomeStatus,
	/// Human-readable explanation, typically set on failure.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reason: Option<String>,
	/// Suppress echoing of the data bag in the orchestrator's console.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub no_echo: Option<bool>,
	/// Opaque result data surfaced to the requesting template.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<serde_json::Value>,
	/// Identity the handler stamps onto every outcome it delivers.
	pub physical_resource_id: String,
	/// Stack identifier echoed from the event.
	pub stack_id: String,
	/// Request identifier echoed from the event.
	pub request_id: String,
	/// Logical resource identifier echoed from the event.
	pub logical_resource_id: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn completed(outcome: Outcome) -> CallbackResponse {
		CallbackResponse {
			status: outcome.status,
			reason: outcome.reason,
			no_echo: outcome.no_echo,
			data: outcome.data,
			physical_resource_id: "widget-42".to_string(),
			stack_id: "S1".to_string(),
			request_id: "R1".to_string(),
			logical_resource_id: "L1".to_string(),
		}
	}

	#[test]
	fn test_status_wire_strings() {
		assert_eq!(
			serde_json::to_value(OutcomeStatus::Success).unwrap(),
			json!("SUCCESS")
		);
		assert_eq!(
			serde_json::to_value(OutcomeStatus::Failed).unwrap(),
			json!("FAILED")
		);
	}

	#[test]
	fn test_unset_fields_are_omitted() {
		let body = serde_json::to_string(&completed(Outcome::success())).unwrap();

		assert!(body.contains("\"Status\":\"SUCCESS\""));
		assert!(body.contains("\"PhysicalResourceId\":\"widget-42\""));
		assert!(!body.contains("Reason"));
		assert!(!body.contains("NoEcho"));
		assert!(!body.contains("Data"));
	}

	#[test]
	fn test_failed_outcome_serializes_reason() {
		let body = serde_json::to_value(completed(Outcome::failed("quota exceeded"))).unwrap();

		assert_eq!(body["Status"], "FAILED");
		assert_eq!(body["Reason"], "quota exceeded");
	}

	#[test]
	fn test_data_and_no_echo_round_trip() {
		let outcome = Outcome::success()
			.with_data(json!({"Endpoint": "https://widget.example"}))
			.no_echo();
		let body = serde_json::to_value(completed(outcome)).unwrap();

		assert_eq!(body["NoEcho"], true);
		assert_eq!(body["Data"]["Endpoint"], "https://widget.example");
	}
}
