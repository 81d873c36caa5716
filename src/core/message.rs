//! The work item flowing through a message pipeline.

use serde::{Deserialize, Serialize};

/// A single unit of work handed from a producer to a consumer.
///
/// Producers create messages and push them into a
/// [`BlockingQueue`](crate::queue::BlockingQueue); consumers take ownership
/// when popping and flip [`is_processed`](Self::is_processed) once handled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Wall-clock creation time, milliseconds since the Unix epoch.
    pub timestamp: u64,
    /// Producer-assigned identifier.
    pub id: u64,
    /// Structured payload.
    pub payload: serde_json::Value,
    /// Set by the consumer after the message has been handled.
    pub is_processed: bool,
}

impl Message {
    /// Creates a message stamped with the current wall-clock time.
    pub fn new(id: u64, payload: serde_json::Value) -> Self {
        Self {
            timestamp: chrono::Utc::now().timestamp_millis() as u64,
            id,
            payload,
            is_processed: false,
        }
    }

    /// Returns the serialized size of the payload in bytes.
    ///
    /// Used for throughput accounting; a payload that fails to serialize
    /// counts as zero bytes.
    pub fn payload_bytes(&self) -> u64 {
        serde_json::to_vec(&self.payload)
            .map(|bytes| bytes.len() as u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_message_is_unprocessed() {
        let msg = Message::new(42, json!({"kind": "reading", "value": 7}));
        assert_eq!(msg.id, 42);
        assert!(!msg.is_processed);
        assert!(msg.timestamp > 0);
    }

    #[test]
    fn test_payload_bytes() {
        let msg = Message::new(1, json!("abc"));
        // "abc" serializes to five bytes including the quotes
        assert_eq!(msg.payload_bytes(), 5);
    }

    #[test]
    fn test_serde_round_trip() {
        let msg = Message::new(7, json!({"a": [1, 2, 3]}));
        let encoded = serde_json::to_string(&msg).unwrap();
        let decoded: Message = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, msg);
    }
}
