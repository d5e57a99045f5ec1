use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use serde_json::json;

use crate::app::SharedState;
use crate::events::{self, BusyPayload};

/// WebSocket upgrade handler.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<SharedState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: SharedState) {
    let (mut sender, mut receiver) = socket.split();
    let mut rx = state.subscribe_ws();

    let client_id = uuid::Uuid::new_v4().to_string();
    for msg in initial_messages(&state, &client_id).await {
        if sender.send(Message::Text(msg.into())).await.is_err() {
            return;
        }
    }

    tracing::info!("WebSocket client connected: {}", client_id);

    // Forward broadcast messages to this client
    let mut send_task = tokio::spawn(async move {
        while let Ok(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    let ws_tx = state.ws_sender().clone();
    let cid = client_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => {
                    if let Some(reply) = reply_to(&text) {
                        let _ = ws_tx.send(reply);
                    }
                }
                Message::Close(_) => break,
                _ => {}
            }
        }
        tracing::info!("WebSocket client disconnected: {}", cid);
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }
}

/// Greeting plus a snapshot of the current state for a new client.
async fn initial_messages(state: &SharedState, client_id: &str) -> Vec<String> {
    let records = state.generator().await.records().clone();
    let mut messages = vec![
        events::encode(events::CONNECTED, json!({ "clientId": client_id })),
        events::encode(events::RECORDS, &records),
        events::encode(events::BUSY, BusyPayload { busy: state.gate().is_busy() }),
    ];
    if let Some(status) = state.status().current().await {
        messages.push(events::encode(events::STATUS, &status));
    }
    messages
}

/// Client messages are only answered for application-level pings.
fn reply_to(text: &str) -> Option<String> {
    let msg = serde_json::from_str::<serde_json::Value>(text).ok()?;
    match msg.get("type").and_then(|t| t.as_str()) {
        Some("ping") => Some(events::encode(events::PONG, serde_json::Value::Null)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_state;

    #[test]
    fn ping_gets_pong() {
        let reply: serde_json::Value = serde_json::from_str(&reply_to(r#"{"type":"ping"}"#).unwrap()).unwrap();
        assert_eq!(reply["type"], "pong");
    }

    #[test]
    fn other_messages_are_ignored() {
        assert!(reply_to(r#"{"type":"generate"}"#).is_none());
        assert!(reply_to("not json").is_none());
    }

    #[tokio::test]
    async fn new_client_receives_state_snapshot() {
        let state = test_state();
        state.status().success("hello").await;

        let messages: Vec<serde_json::Value> = initial_messages(&state, "abc")
            .await
            .iter()
            .map(|m| serde_json::from_str(m).unwrap())
            .collect();
        let types: Vec<&str> = messages.iter().map(|m| m["type"].as_str().unwrap()).collect();
        assert_eq!(types, ["connected", "records", "busy", "status"]);
        assert_eq!(messages[0]["data"]["clientId"], "abc");
        assert_eq!(messages[1]["data"].as_array().unwrap().len(), 4);
        assert_eq!(messages[2]["data"]["busy"], false);
    }
}
