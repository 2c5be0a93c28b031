//! WebSocket game server exposing the rules engine's action-submission API.
//!
//! Protocol:
//! - Client sends JSON messages, server responds with game updates.
//! - Each WS connection owns one game session.
//!
//! Client → Server messages:
//!   { "type": "new_game", "hero": "arythea", "seed": 42 }
//!   { "type": "action", "action": <LegalAction>, "epoch": 5 }
//!   { "type": "undo" }
//!
//! Server → Client messages:
//!   { "type": "game_update", "state": <ClientGameState>, "legal_actions": [<LegalAction>], "events": [<Event>], "epoch": 5 }
//!   { "type": "error", "message": "..." }

use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use realm_engine::client_state::to_client_state;
use realm_engine::legal_actions::enumerate_legal_actions_with_undo;
use realm_engine::setup::{create_solo_game, place_initial_tiles};
use realm_engine::submit::{submit, SubmitError};
use realm_engine::undo::UndoStack;
use realm_types::client_state::ClientGameState;
use realm_types::enums::Hero;
use realm_types::event::Event;
use realm_types::legal_action::LegalAction;
use realm_types::state::GameState;

// =============================================================================
// Wire protocol types
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ClientMessage {
    NewGame {
        hero: Hero,
        #[serde(default = "default_seed")]
        seed: u32,
    },
    Action {
        action: LegalAction,
        epoch: u64,
    },
    Undo,
}

fn default_seed() -> u32 {
    42
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ServerMessage {
    GameUpdate {
        state: Box<ClientGameState>,
        legal_actions: Vec<LegalAction>,
        events: Vec<Event>,
        epoch: u64,
    },
    Error {
        message: String,
    },
}

// =============================================================================
// Game session
// =============================================================================

struct GameSession {
    state: GameState,
    undo_stack: UndoStack,
    player_idx: usize,
}

impl GameSession {
    fn new(seed: u32, hero: Hero) -> Self {
        let mut state = create_solo_game(seed, hero);
        place_initial_tiles(&mut state);
        Self {
            state,
            undo_stack: UndoStack::new(),
            player_idx: 0,
        }
    }

    fn make_update(&self, events: Vec<Event>) -> ServerMessage {
        let player_id = self.state.players[self.player_idx].id.clone();
        let client_state = to_client_state(&self.state, &player_id);
        let action_set =
            enumerate_legal_actions_with_undo(&self.state, self.player_idx, &self.undo_stack);

        ServerMessage::GameUpdate {
            epoch: action_set.epoch,
            legal_actions: action_set.actions,
            events,
            state: Box::new(client_state),
        }
    }

    fn apply_action(&mut self, action: &LegalAction, epoch: u64) -> Result<Vec<Event>, SubmitError> {
        let player_id = self.state.players[self.player_idx].id.clone();
        let outcome = submit(&mut self.state, &mut self.undo_stack, &player_id, action, epoch)?;
        Ok(outcome.events)
    }

    fn undo(&mut self) -> bool {
        if let Some(restored) = self.undo_stack.undo() {
            self.state = restored;
            true
        } else {
            false
        }
    }
}

// =============================================================================
// WebSocket handler
// =============================================================================

async fn ws_handler(ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(handle_socket)
}

async fn handle_socket(mut socket: WebSocket) {
    let mut session: Option<GameSession> = None;
    metrics::counter!("realm_server_connections_total").increment(1);

    while let Some(msg) = socket.recv().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(_) => return, // client disconnected
        };

        let text = match msg {
            Message::Text(t) => t,
            Message::Close(_) => return,
            _ => continue, // ignore binary/ping/pong
        };

        let client_msg: ClientMessage = match serde_json::from_str(&text) {
            Ok(m) => m,
            Err(e) => {
                let _ = send_json(
                    &mut socket,
                    &ServerMessage::Error {
                        message: format!("Invalid JSON: {e}"),
                    },
                )
                .await;
                continue;
            }
        };

        let response = match client_msg {
            ClientMessage::NewGame { hero, seed } => {
                info!(?hero, seed, "starting new game");
                let s = GameSession::new(seed, hero);
                let update = s.make_update(Vec::new());
                session = Some(s);
                update
            }

            ClientMessage::Action { action, epoch } => match session.as_mut() {
                None => ServerMessage::Error {
                    message: "No active game. Send new_game first.".into(),
                },
                Some(s) => match s.apply_action(&action, epoch) {
                    Ok(events) => {
                        metrics::counter!("realm_server_actions_applied_total").increment(1);
                        s.make_update(events)
                    }
                    Err(SubmitError::Invalid(err)) => {
                        warn!(code = %err.code, predicate = %err.predicate, "action rejected");
                        ServerMessage::Error {
                            message: format!("{}: {}", err.code, err.message),
                        }
                    }
                    Err(SubmitError::Internal(msg)) => {
                        warn!(error = %msg, "internal error applying action");
                        ServerMessage::Error {
                            message: format!("Internal error: {msg}"),
                        }
                    }
                },
            },

            ClientMessage::Undo => match session.as_mut() {
                None => ServerMessage::Error {
                    message: "No active game. Send new_game first.".into(),
                },
                Some(s) => {
                    if s.undo() {
                        s.make_update(Vec::new())
                    } else {
                        ServerMessage::Error {
                            message: "Nothing to undo.".into(),
                        }
                    }
                }
            },
        };

        if send_json(&mut socket, &response).await.is_err() {
            return; // client disconnected
        }
    }
}

async fn send_json(
    socket: &mut WebSocket,
    msg: &ServerMessage,
) -> Result<(), axum::Error> {
    let json = serde_json::to_string(msg).expect("ServerMessage should serialize");
    socket.send(Message::Text(json.into())).await
}

// =============================================================================
// Routes & main
// =============================================================================

async fn health() -> &'static str {
    "realm-server ok"
}

async fn index() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html><head><title>Realm Engine Server</title></head>
<body>
<h1>Realm Engine WebSocket Server</h1>
<p>Connect via WebSocket at <code>/ws</code></p>
<pre>
// Example:
const ws = new WebSocket("ws://localhost:3030/ws");
ws.onmessage = (e) => console.log(JSON.parse(e.data));
ws.onopen = () => ws.send(JSON.stringify({ type: "new_game", hero: "arythea", seed: 42 }));
</pre>
</body></html>"#,
    )
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let metrics_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3030);

    let app = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/metrics", get(move || async move { metrics_handle.render() }))
        .route("/ws", get(ws_handler))
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{port}");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap_or_else(|e| {
        warn!(%addr, error = %e, "failed to bind");
        eprintln!("Hint: kill the old process with `lsof -ti:{port} | xargs kill`");
        std::process::exit(1);
    });
    info!(%addr, "realm-server listening");
    axum::serve(listener, app).await.unwrap();
}
