// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for outcome delivery.

use thiserror::Error;

/// A specialized `Result` type for delivery operations.
pub type Result<T> = std::result::Result<T, DeliveryError>;

/// Errors that can occur while delivering a callback response.
///
/// Delivery faults are the one failure class the handler cannot recover
/// from: the callback URL is the only channel for reporting failures, so a
/// fault here propagates to the invoker instead.
#[derive(Debug, Error)]
pub enum DeliveryError {
	#[error("failed to serialize callback response: {0}")]
	Serialization(String),

	#[error("callback request failed: {0}")]
	Transport(String),
}

impl From<serde_json::Error> for DeliveryError {
	fn from(err: serde_json::Error) -> Self {
		DeliveryError::Serialization(err.to_string())
	}
}
