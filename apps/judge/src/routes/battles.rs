//! Webhook endpoints for the two storage events.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{info_span, warn, Instrument};

use crate::domain::{parse_submission, Hand};
use crate::error::AppError;
use crate::repos::{BattleKey, BattleState, HandCreate};
use crate::services::{on_battle_created, on_hand_created};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct BattlePath {
    room_id: String,
    battle_id: String,
}

impl From<BattlePath> for BattleKey {
    fn from(path: BattlePath) -> Self {
        BattleKey::new(path.room_id, path.battle_id)
    }
}

#[derive(Debug, Deserialize)]
struct HandBody {
    author: String,
    hand: String,
}

#[derive(Debug, Serialize)]
struct BattleAccepted {
    room_id: String,
    battle_id: String,
}

#[derive(Debug, Serialize)]
struct HandAccepted {
    author: String,
    hand: Hand,
}

/// Battle record created: run the lifecycle in the background.
async fn battle_created(
    path: web::Path<BattlePath>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let key: BattleKey = path.into_inner().into();
    let ctx = app_state.battles.clone();
    let span = info_span!("battle", room_id = %key.room_id, battle_id = %key.battle_id);

    let body = BattleAccepted {
        room_id: key.room_id.clone(),
        battle_id: key.battle_id.clone(),
    };

    // Failures are logged inside the lifecycle.
    tokio::spawn(
        async move {
            let _ = on_battle_created(ctx, key).await;
        }
        .instrument(span),
    );

    Ok(HttpResponse::Accepted().json(body))
}

/// Hand submitted: validate, store, announce.
async fn hand_created(
    path: web::Path<BattlePath>,
    body: web::Json<HandBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let key: BattleKey = path.into_inner().into();
    let HandBody { author, hand } = body.into_inner();

    let author = author.trim().to_string();
    if author.is_empty() {
        return Err(AppError::invalid("INVALID_AUTHOR", "author must not be empty"));
    }
    let hand = parse_submission(&author, &hand)?;

    let store = app_state.store();
    if store.find_battle_state(&key).await? == Some(BattleState::Closed) {
        return Err(AppError::Conflict {
            code: "BATTLE_CLOSED",
            detail: format!("battle {key} is closed"),
        });
    }
    store
        .append_hand(&key, HandCreate::new(author.clone(), hand.as_str()))
        .await?;

    if let Err(err) = on_hand_created(app_state.battles.clone(), key.clone(), &author).await {
        warn!(
            room_id = %key.room_id,
            battle_id = %key.battle_id,
            error = %err,
            "hand announcement not delivered"
        );
    }

    Ok(HttpResponse::Created().json(HandAccepted { author, hand }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{room_id}/battles/{battle_id}/created")
            .route(web::post().to(battle_created)),
    );
    cfg.service(
        web::resource("/{room_id}/battles/{battle_id}/hands").route(web::post().to(hand_created)),
    );
}
