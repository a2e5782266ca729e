// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lifecycle event model for resource provisioning requests.
//!
//! Events arrive as JSON objects tagged by a `RequestType` field. The tag
//! determines which kind-specific fields are present: updates and deletes
//! carry the physical resource identifier, and updates additionally carry
//! the prior property bag. Deserializing into [`ResourceEvent`] enforces
//! that shape, so a value for one kind can never be missing that kind's
//! required fields.

use serde::{Deserialize, Serialize};

/// A resource provisioning lifecycle event.
///
/// The type parameter `P` is the resource's property schema. Property bags
/// arrive partially populated, so `P` should be a struct whose fields are
/// all optional, or the default `serde_json::Value` for untyped access.
///
/// Request kinds outside the recognized set land in the
/// [`Unrecognized`](ResourceEvent::Unrecognized) arm rather than failing to
/// parse. The kind tag is external input, and the failure must travel the
/// normal response path back to the callback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "RequestType")]
pub enum ResourceEvent<P = serde_json::Value> {
	/// A new resource must be provisioned.
	Create(CreateEvent<P>),
	/// An existing resource must be reconfigured.
	Update(UpdateEvent<P>),
	/// An existing resource must be torn down.
	Delete(DeleteEvent<P>),
	/// The request kind is outside the recognized set.
	#[serde(untagged)]
	Unrecognized(UnrecognizedEvent),
}

impl<P> ResourceEvent<P> {
	/// The callback URL the outcome must be delivered to.
	pub fn response_url(&self) -> &str {
		match self {
			ResourceEvent::Create(e) => &e.response_url,
			ResourceEvent::Update(e) => &e.response_url,
			ResourceEvent::Delete(e) => &e.response_url,
			ResourceEvent::Unrecognized(e) => &e.response_url,
		}
	}

	/// The stack identifier the event belongs to.
	pub fn stack_id(&self) -> &str {
		match self {
			ResourceEvent::Create(e) => &e.stack_id,
			ResourceEvent::Update(e) => &e.stack_id,
			ResourceEvent::Delete(e) => &e.stack_id,
			ResourceEvent::Unrecognized(e) => &e.stack_id,
		}
	}

	/// The request identifier correlating event and outcome.
	pub fn request_id(&self) -> &str {
		match self {
			ResourceEvent::Create(e) => &e.request_id,
			ResourceEvent::Update(e) => &e.request_id,
			ResourceEvent::Delete(e) => &e.request_id,
			ResourceEvent::Unrecognized(e) => &e.request_id,
		}
	}

	/// The logical resource identifier from the requesting template.
	pub fn logical_resource_id(&self) -> &str {
		match self {
			ResourceEvent::Create(e) => &e.logical_resource_id,
			ResourceEvent::Update(e) => &e.logical_resource_id,
			ResourceEvent::Delete(e) => &e.logical_resource_id,
			ResourceEvent::Unrecognized(e) => &e.logical_resource_id,
		}
	}

	/// The raw request kind, for diagnostics.
	pub fn kind(&self) -> &str {
		match self {
			ResourceEvent::Create(_) => "Create",
			ResourceEvent::Update(_) => "Update",
			ResourceEvent::Delete(_) => "Delete",
			ResourceEvent::Unrecognized(e) => &e.request_type,
		}
	}
}

/// Request to provision a new resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateEvent<P = serde_json::Value> {
	/// Callback URL for the outcome notification.
	#[serde(rename = "ResponseURL")]
	pub response_url: String,
	/// Stack the resource belongs to.
	pub stack_id: String,
	/// Unique identifier for this request.
	pub request_id: String,
	/// Resource-type tag from the requesting template.
	pub resource_type: String,
	/// Logical name of the resource in the requesting template.
	pub logical_resource_id: String,
	/// Requested resource properties.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub resource_properties: Option<P>,
}

/// Request to reconfigure an existing resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateEvent<P = serde_json::Value> {
	/// Callback URL for the outcome notification.
	#[serde(rename = "ResponseURL")]
	pub response_url: String,
	/// Stack the resource belongs to.
	pub stack_id: String,
	/// Unique identifier for this request.
	pub request_id: String,
	/// Resource-type tag from the requesting template.
	pub resource_type: String,
	/// Logical name of the resource in the requesting template.
	pub logical_resource_id: String,
	/// Identity of the resource being updated.
	pub physical_resource_id: String,
	/// Requested resource properties.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub resource_properties: Option<P>,
	/// Properties the resource was previously provisioned with.
	pub old_resource_properties: P,
}

/// Request to tear down an existing resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteEvent<P = serde_json::Value> {
	/// Callback URL for the outcome notification.
	#[serde(rename = "ResponseURL")]
	pub response_url: String,
	/// Stack the resource belongs to.
	pub stack_id: String,
	/// Unique identifier for this request.
	pub request_id: String,
	/// Resource-type tag from the requesting template.
	pub resource_type: String,
	/// Logical name of the resource in the requesting template.
	pub logical_resource_id: String,
	/// Identity of the resource being deleted.
	pub physical_resource_id: String,
	/// Requested resource properties.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub resource_properties: Option<P>,
}

/// An event whose kind tag is outside the recognized set.
///
/// Carries the common fields so the failure outcome can still be correlated
/// and delivered to the callback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnrecognizedEvent {
	/// The raw kind tag as received.
	pub request_type: String,
	/// Callback URL for the outcome notification.
	#[serde(rename = "ResponseURL")]
	pub response_url: String,
	/// Stack the resource belongs to.
	pub stack_id: String,
	/// Unique identifier for this request.
	pub request_id: String,
	/// Resource-type tag from the requesting template.
	pub resource_type: String,
	/// Logical name of the resource in the requesting template.
	pub logical_resource_id: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_create_event_deserializes() {
		let event: ResourceEvent = serde_json::from_value(json!({
			"RequestType": "Create",
			"ResponseURL": "https://cb.example/x",
			"StackId": "S1",
			"RequestId": "R1",
			"ResourceType": "Custom::Widget",
			"LogicalResourceId": "L1",
			"ResourceProperties": {"Size": "large"}
		}))
		.unwrap();

		match &event {
			ResourceEvent::Create(e) => {
				assert_eq!(e.response_url, "https://cb.example/x");
				assert_eq!(e.resource_properties, Some(json!({"Size": "large"})));
			}
			other => panic!("expected Create, got {other:?}"),
		}
		assert_eq!(event.kind(), "Create");
		assert_eq!(event.stack_id(), "S1");
	}

	#[test]
	fn test_update_event_carries_prior_properties() {
		let event: ResourceEvent = serde_json::from_value(json!({
			"RequestType": "Update",
			"ResponseURL": "https://cb.example/x",
			"StackId": "S1",
			"RequestId": "R2",
			"ResourceType": "Custom::Widget",
			"LogicalResourceId": "L1",
			"PhysicalResourceId": "widget-42",
			"ResourceProperties": {"Size": "small"},
			"OldResourceProperties": {"Size": "large"}
		}))
		.unwrap();

		match event {
			ResourceEvent::Update(e) => {
				assert_eq!(e.physical_resource_id, "widget-42");
				assert_eq!(e.old_resource_properties, json!({"Size": "large"}));
			}
			other => panic!("expected Update, got {other:?}"),
		}
	}

	#[test]
	fn test_update_event_requires_physical_resource_id() {
		let result: Result<ResourceEvent, _> = serde_json::from_value(json!({
			"RequestType": "Update",
			"ResponseURL": "https://cb.example/x",
			"StackId": "S1",
			"RequestId": "R2",
			"ResourceType": "Custom::Widget",
			"LogicalResourceId": "L1",
			"OldResourceProperties": {}
		}));

		assert!(result.is_err());
	}

	#[test]
	fn test_delete_event_requires_physical_resource_id() {
		let result: Result<ResourceEvent, _> = serde_json::from_value(json!({
			"RequestType": "Delete",
			"ResponseURL": "https://cb.example/x",
			"StackId": "S1",
			"RequestId": "R3",
			"ResourceType": "Custom::Widget",
			"LogicalResourceId": "L1"
		}));

		assert!(result.is_err());
	}

	#[test]
	fn test_unknown_kind_falls_through_to_unrecognized() {
		let event: ResourceEvent = serde_json::from_value(json!({
			"RequestType": "Replace",
			"ResponseURL": "https://cb.example/x",
			"StackId": "S1",
			"RequestId": "R4",
			"ResourceType": "Custom::Widget",
			"LogicalResourceId": "L1"
		}))
		.unwrap();

		match &event {
			ResourceEvent::Unrecognized(e) => assert_eq!(e.request_type, "Replace"),
			other => panic!("expected Unrecognized, got {other:?}"),
		}
		assert_eq!(event.kind(), "Replace");
		assert_eq!(event.request_id(), "R4");
	}

	#[test]
	fn test_typed_properties_deserialize() {
		#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
		struct WidgetProperties {
			size: Option<String>,
			count: Option<u32>,
		}

		let event: ResourceEvent<WidgetProperties> = serde_json::from_value(json!({
			"RequestType": "Create",
			"ResponseURL": "https://cb.example/x",
			"StackId": "S1",
			"RequestId": "R5",
			"ResourceType": "Custom::Widget",
			"LogicalResourceId": "L1",
			"ResourceProperties": {"size": "large"}
		}))
		.unwrap();

		match event {
			ResourceEvent::Create(e) => {
				let props = e.resource_properties.unwrap();
				assert_eq!(props.size.as_deref(), Some("large"));
				assert_eq!(props.count, None);
			}
			other => panic!("expected Create, got {other:?}"),
		}
	}
}
