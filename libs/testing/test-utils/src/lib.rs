//! Shared test utilities for domain testing
//!
//! - `TestDataBuilder`: Deterministic test data generation
//! - `assertions`: Custom assertion helpers
//! - `http`: Request builders and body readers for `tower::ServiceExt::oneshot` tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::TestDataBuilder;
//! use test_utils::http::{json_body, json_request};
//!
//! # async fn example(app: axum::Router) {
//! use tower::ServiceExt;
//!
//! let builder = TestDataBuilder::from_test_name("my_test");
//! let request = json_request("POST", "/", &builder.item_payload("main"));
//!
//! let response = app.oneshot(request).await.unwrap();
//! let body: serde_json::Value = json_body(response).await;
//! # }
//! ```

use serde_json::{Value, json};
use uuid::Uuid;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_item");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique user ID for testing
    pub fn user_id(&self) -> Uuid {
        let bytes = self.seed.to_le_bytes();
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes[..8].copy_from_slice(&bytes);
        uuid_bytes[8..16].copy_from_slice(&bytes);
        Uuid::from_bytes(uuid_bytes)
    }

    /// Generate a unique name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("item", "main"), "test-item-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// A valid item creation body named `name("item", suffix)`
    pub fn item_payload(&self, suffix: &str) -> Value {
        json!({
            "name": self.name("item", suffix),
            "brand": "Nike",
            "category": "shoes",
            "color": "Blue",
            "size": "M",
            "purchaseDate": "2024-01-15",
            "purchasePrice": 129.99
        })
    }
}

/// Test assertion helpers
pub mod assertions {
    use serde_json::Value;
    use uuid::Uuid;

    /// Assert that two UUIDs are equal with a nice error message
    pub fn assert_uuid_eq(actual: Uuid, expected: Uuid, context: &str) {
        assert_eq!(
            actual, expected,
            "{}: expected UUID {}, got {}",
            context, expected, actual
        );
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that a JSON error body carries the given `error` identifier
    pub fn assert_error_code(body: &Value, expected: &str) {
        assert_eq!(
            body["error"].as_str(),
            Some(expected),
            "expected error {}, got body {}",
            expected,
            body
        );
    }
}

/// HTTP helpers for router tests
pub mod http {
    use axum::body::Body;
    use axum::http::{Request, header};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use serde::de::DeserializeOwned;
    use serde_json::Value;

    /// Request with a JSON body
    pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// Request with a JSON content type and an arbitrary body
    pub fn raw_json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// Request without a body
    pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    /// Collect the response body as raw bytes
    pub async fn body_bytes(response: Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    /// Parse the response body as JSON
    pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
        let bytes = body_bytes(response).await;
        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            panic!(
                "response body is not valid JSON ({}): {}",
                e,
                String::from_utf8_lossy(&bytes)
            )
        })
    }
}
