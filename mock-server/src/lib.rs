//! In-memory stand-in for the remote users service.
//!
//! `HEAD /api/users` hands out a session cookie; every other route requires
//! it back in the `cookie` header. Mutating routes answer with plain text.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{AppendHeaders, IntoResponse},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "JSESSIONID";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
}

#[derive(Default)]
pub struct Store {
    users: HashMap<i64, User>,
    sessions: HashSet<Uuid>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route(
            "/api/users",
            get(list_users)
                .head(open_session)
                .post(create_user)
                .put(update_user),
        )
        .route("/api/users/{id}", delete(delete_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn open_session(State(db): State<Db>) -> impl IntoResponse {
    let id = Uuid::new_v4();
    db.write().await.sessions.insert(id);
    (
        StatusCode::OK,
        AppendHeaders([
            (header::SET_COOKIE, format!("{SESSION_COOKIE}={id}; Path=/api; HttpOnly")),
            (header::SET_COOKIE, "lang=en".to_string()),
        ]),
    )
}

/// Find our session id among the `;`-separated pairs of the cookie header.
fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    let cookie = headers.get(header::COOKIE)?.to_str().ok()?;
    cookie.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE {
            value.parse().ok()
        } else {
            None
        }
    })
}

async fn authorize(db: &Db, headers: &HeaderMap) -> Result<(), (StatusCode, String)> {
    let known = match session_id(headers) {
        Some(id) => db.read().await.sessions.contains(&id),
        None => false,
    };
    if known {
        Ok(())
    } else {
        Err((StatusCode::UNAUTHORIZED, "session required".to_string()))
    }
}

async fn list_users(
    State(db): State<Db>,
    headers: HeaderMap,
) -> Result<Json<Vec<User>>, (StatusCode, String)> {
    authorize(&db, &headers).await?;
    let store = db.read().await;
    let mut users: Vec<User> = store.users.values().cloned().collect();
    users.sort_by_key(|u| u.id);
    Ok(Json(users))
}

async fn create_user(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(user): Json<User>,
) -> Result<String, (StatusCode, String)> {
    authorize(&db, &headers).await?;
    let mut store = db.write().await;
    if store.users.contains_key(&user.id) {
        return Err((StatusCode::CONFLICT, format!("user {} already exists", user.id)));
    }
    let reply = format!("created user {}", user.id);
    store.users.insert(user.id, user);
    Ok(reply)
}

async fn update_user(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(user): Json<User>,
) -> Result<String, (StatusCode, String)> {
    authorize(&db, &headers).await?;
    let mut store = db.write().await;
    let existing = store
        .users
        .get_mut(&user.id)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("no user {}", user.id)))?;
    let reply = format!("updated user {}", user.id);
    *existing = user;
    Ok(reply)
}

async fn delete_user(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<String, (StatusCode, String)> {
    authorize(&db, &headers).await?;
    let mut store = db.write().await;
    store
        .users
        .remove(&id)
        .map(|_| format!("deleted user {id}"))
        .ok_or((StatusCode::NOT_FOUND, format!("no user {id}")))
}
