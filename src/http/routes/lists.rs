use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::{Path, Query, State};
use axum::{routing::{delete, get, post, put}, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    application::grocery_service::GroceryService,
    domain::grocery::{GroceryList, ItemId, ListId},
    http::types::ApiError,
};

/// One exclusive writer guards the collection; handlers never await while holding it.
pub struct AppState<S: GroceryService> {
    pub service: Arc<Mutex<S>>,
    pub recent_limit: usize,
}

impl<S: GroceryService> AppState<S> {
    pub fn new(service: S, recent_limit: usize) -> Self {
        Self { service: Arc::new(Mutex::new(service)), recent_limit }
    }

    fn lock(&self) -> Result<MutexGuard<'_, S>, ApiError> {
        self.service.lock().map_err(|_| ApiError::Internal("service lock poisoned".into()))
    }
}

impl<S: GroceryService> Clone for AppState<S> {
    fn clone(&self) -> Self { Self { service: Arc::clone(&self.service), recent_limit: self.recent_limit } }
}

pub fn router<S: GroceryService>(state: AppState<S>) -> Router {
    Router::new()
        .route("/lists", get(recent_lists::<S>).post(create_list::<S>))
        .route("/lists/:id", get(get_list::<S>))
        .route("/lists/:id/title", put(save_title::<S>))
        .route("/lists/:id/items", post(add_item::<S>))
        .route("/lists/:id/items/:item_id/toggle", post(toggle_item::<S>))
        .route("/lists/:id/items/:item_id", delete(delete_item::<S>))
        .route("/search", get(search::<S>))
        .with_state(state)
}

#[derive(Deserialize)]
struct RecentParams { limit: Option<usize> }

async fn recent_lists<S: GroceryService>(State(state): State<AppState<S>>, Query(params): Query<RecentParams>) -> Result<Json<Value>, ApiError> {
    let service = state.lock()?;
    let limit = params.limit.unwrap_or(state.recent_limit);
    let items: Vec<Value> = service.recent_lists(limit).into_iter().map(list_json).collect();
    Ok(Json(json!({ "items": items })))
}

async fn create_list<S: GroceryService>(State(state): State<AppState<S>>) -> Result<Json<Value>, ApiError> {
    let list = state.lock()?.create_list();
    Ok(Json(list_json(&list)))
}

async fn get_list<S: GroceryService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    let id = parse_list_id(&id)?;
    let list = state.lock()?.get_list(id).ok_or(ApiError::NotFound)?;
    Ok(Json(list_json(&list)))
}

#[derive(Deserialize)]
struct TitleBody { title: String }

async fn save_title<S: GroceryService>(State(state): State<AppState<S>>, Path(id): Path<String>, Json(body): Json<TitleBody>) -> Result<Json<Value>, ApiError> {
    let id = parse_list_id(&id)?;
    let list = state.lock()?.save_title(id, &body.title).ok_or(ApiError::NotFound)?;
    Ok(Json(list_json(&list)))
}

#[derive(Deserialize)]
struct ItemBody { text: String }

async fn add_item<S: GroceryService>(State(state): State<AppState<S>>, Path(id): Path<String>, Json(body): Json<ItemBody>) -> Result<Json<Value>, ApiError> {
    let id = parse_list_id(&id)?;
    let (list, added) = state.lock()?.add_item(id, &body.text).ok_or(ApiError::NotFound)?;
    Ok(Json(json!({ "added": added, "list": list_json(&list) })))
}

async fn toggle_item<S: GroceryService>(State(state): State<AppState<S>>, Path((id, item_id)): Path<(String, String)>) -> Result<Json<Value>, ApiError> {
    let (id, item_id) = (parse_list_id(&id)?, parse_item_id(&item_id)?);
    let list = state.lock()?.toggle_item(id, item_id).ok_or(ApiError::NotFound)?;
    Ok(Json(list_json(&list)))
}

async fn delete_item<S: GroceryService>(State(state): State<AppState<S>>, Path((id, item_id)): Path<(String, String)>) -> Result<Json<Value>, ApiError> {
    let (id, item_id) = (parse_list_id(&id)?, parse_item_id(&item_id)?);
    let list = state.lock()?.delete_item(id, item_id).ok_or(ApiError::NotFound)?;
    Ok(Json(list_json(&list)))
}

#[derive(Deserialize)]
struct SearchParams { #[serde(default)] q: String }

async fn search<S: GroceryService>(State(state): State<AppState<S>>, Query(params): Query<SearchParams>) -> Result<Json<Value>, ApiError> {
    let service = state.lock()?;
    let results = service.search(&params.q);
    let matches: Vec<Value> = results.matches().iter().copied().map(list_json).collect();
    Ok(Json(json!({ "active": results.is_active(), "headline": results.headline(), "results": matches })))
}

fn list_json(list: &GroceryList) -> Value {
    let preview = list.preview();
    json!({
        "id": list.id.0,
        "title": list.title,
        "display_title": list.display_title(),
        "created_at": list.created_at,
        "items": list.items,
        "preview": {
            "summary": preview.summary(),
            "leading": preview.leading,
            "remaining": preview.remaining,
            "completed": preview.completed,
            "total": preview.total,
        },
    })
}

fn parse_list_id(s: &str) -> Result<ListId, ApiError> { uuid::Uuid::parse_str(s).map(ListId).map_err(|_| ApiError::InvalidId(s.to_string())) }

fn parse_item_id(s: &str) -> Result<ItemId, ApiError> { uuid::Uuid::parse_str(s).map(ItemId).map_err(|_| ApiError::InvalidId(s.to_string())) }
