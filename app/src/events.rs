//! WebSocket event names and the broadcast helper.
//!
//! Every message sent to clients is a JSON object `{"type": ..., "data": ...}`.

use serde::Serialize;
use serde_json::json;
use tokio::sync::broadcast;

pub const CONNECTED: &str = "connected";
pub const STATUS: &str = "status";
pub const STATUS_CLEARED: &str = "status_cleared";
pub const RECORDS: &str = "records";
pub const BUSY: &str = "busy";
pub const PONG: &str = "pong";

#[derive(Debug, Clone, Serialize)]
pub struct BusyPayload {
    pub busy: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusClearedPayload {
    pub id: u64,
}

/// Encode an event for the WebSocket wire.
pub fn encode(event: &str, data: impl Serialize) -> String {
    json!({ "type": event, "data": data }).to_string()
}

/// Broadcast an event to every connected client.
///
/// Having no subscribers is not an error.
pub fn emit(tx: &broadcast::Sender<String>, event: &str, data: impl Serialize) {
    let _ = tx.send(encode(event, data));
}
