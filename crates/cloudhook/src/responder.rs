// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP delivery of callback responses.

use std::time::Duration;

use async_trait::async_trait;
use cloudhook_core::{CallbackResponse, DeliveryError, Responder};
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

/// Request timeout applied by [`HttpResponder::new`].
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Delivers callback responses with a single HTTP PUT per delivery.
///
/// The callback URL is a presigned address whose signature excludes a
/// content type, so the `Content-Type` header is sent empty. The peer
/// accepting the write completes the delivery; the response status is
/// recorded as a diagnostic but does not fail the delivery. There are no
/// internal retries.
pub struct HttpResponder {
	client: reqwest::Client,
}

impl HttpResponder {
	/// Creates a responder with a default client and request timeout.
	pub fn new() -> Self {
		let client = reqwest::Client::builder()
			.timeout(DEFAULT_TIMEOUT)
			.build()
			.expect("failed to create HTTP client");

		Self { client }
	}

	/// Creates a responder delivering through the given client.
	pub fn with_client(client: reqwest::Client) -> Self {
		Self { client }
	}
}

impl Default for HttpResponder {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Responder for HttpResponder {
	async fn deliver(
		&self,
		response_url: &str,
		response: &CallbackResponse,
	) -> Result<(), DeliveryError> {
		let body = serde_json::to_string(response)?;

		let reply = self
			.client
			.put(response_url)
			.header(CONTENT_TYPE, "")
			.body(body)
			.send()
			.await
			.map_err(|e| DeliveryError::Transport(e.to_string()))?;

		let status = reply.status();
		if status.is_success() {
			debug!(url = %response_url, "callback delivered");
		} else {
			warn!(url = %response_url, status = %status, "callback returned non-success status");
		}

		Ok(())
	}
}
