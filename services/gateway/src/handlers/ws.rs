//! WebSocket streaming of trades and market-data snapshots.
//!
//! Each connection subscribes to one symbol's topic and forwards events as
//! JSON text frames. A subscriber that falls behind its bounded queue loses
//! the oldest events and keeps streaming; matching is never blocked by a
//! slow connection.

use crate::models::SymbolQuery;
use crate::state::AppState;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::Response,
};
use futures::{sink::SinkExt, stream::StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tracing::warn;
use types::ids::Symbol;

/// `GET /ws/trades?symbol=` — stream trade events for one symbol.
pub async fn trades_handler(
    ws: WebSocketUpgrade,
    Query(query): Query<SymbolQuery>,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(move |socket| stream_trades(socket, query.symbol, state))
}

/// `GET /ws/marketdata?symbol=` — stream book snapshots for one symbol.
pub async fn marketdata_handler(
    ws: WebSocketUpgrade,
    Query(query): Query<SymbolQuery>,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(move |socket| stream_marketdata(socket, query.symbol, state))
}

async fn stream_trades(socket: WebSocket, symbol: String, state: AppState) {
    let symbol = Symbol::new(symbol);
    let mut events = state.engine.subscribe_trades(&symbol);
    let (mut sender, mut receiver) = socket.split();

    loop {
        tokio::select! {
            msg = receiver.next() => match msg {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
            event = events.recv() => match event {
                Ok(trade) => {
                    let Ok(json) = serde_json::to_string(&trade) else { break };
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(symbol = %symbol, skipped, "slow trade subscriber, dropped events");
                }
                Err(RecvError::Closed) => break,
            }
        }
    }
}

async fn stream_marketdata(socket: WebSocket, symbol: String, state: AppState) {
    let symbol = Symbol::new(symbol);
    let mut snapshots = state.engine.subscribe_market_data(&symbol);
    let (mut sender, mut receiver) = socket.split();

    loop {
        tokio::select! {
            msg = receiver.next() => match msg {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
            event = snapshots.recv() => match event {
                Ok(snapshot) => {
                    let Ok(json) = serde_json::to_string(&snapshot) else { break };
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(symbol = %symbol, skipped, "slow market-data subscriber, dropped snapshots");
                }
                Err(RecvError::Closed) => break,
            }
        }
    }
}
