//! The canned response document.
//!
//! Served by the latency endpoints and embedded as the `extra` field of every
//! synthetic log record. The content is deliberately static and shaped like a
//! plausible metrics/users API response, so collection pipelines see nested
//! objects, arrays, and mixed scalar types.

use serde_json::{Value, json};
use std::sync::LazyLock;

/// Static contextual payload.
pub static DOCUMENT: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "requestId": "a1b2c3d4",
        "generatedAt": "2025-11-17T12:34:56Z",
        "metrics": {
            "latencyMs": 123,
            "successRate": 0.987,
            "errors": [
                { "code": "TIMEOUT", "count": 3 },
                { "code": "BAD_REQUEST", "count": 1 }
            ]
        },
        "users": [
            {
                "id": 1,
                "name": "Alice",
                "active": true,
                "roles": ["admin", "tester"],
                "tags": { "region": "eu-west", "plan": "pro" }
            },
            {
                "id": 2,
                "name": "Bob",
                "active": false,
                "roles": ["viewer"],
                "tags": { "region": "us-east", "plan": "free" }
            }
        ]
    })
});
