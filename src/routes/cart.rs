//! Cart routes
//!
//! All cart operations act on the authenticated user's own cart; the user
//! id comes from validated token claims, never from the request body.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::models::Worksheet;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Create cart routes
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_cart).post(add_to_cart).delete(remove_from_cart))
        .route("/checkout", post(checkout))
}

#[derive(Debug, Deserialize)]
struct CartItemRequest {
    worksheet_id: i64,
}

#[derive(Serialize)]
struct CartResponse {
    success: bool,
    cart: Vec<Worksheet>,
}

#[derive(Serialize)]
struct CartChangeResponse {
    success: bool,
    message: String,
    worksheet_id: i64,
}

#[derive(Serialize)]
struct CheckoutResponse {
    success: bool,
    message: String,
}

/// GET /api/cart - cart contents resolved to worksheet details
///
/// Items whose worksheet has since vanished from the catalog are skipped.
async fn get_cart(State(state): State<AppState>, auth: AuthUser) -> Json<CartResponse> {
    let cart = state
        .carts
        .items(auth.user_id())
        .into_iter()
        .filter_map(|id| state.catalog.get(id))
        .collect();

    Json(CartResponse {
        success: true,
        cart,
    })
}

/// POST /api/cart - add a worksheet to the cart
async fn add_to_cart(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CartItemRequest>,
) -> ApiResult<Json<CartChangeResponse>> {
    if !state.catalog.exists(req.worksheet_id) {
        return Err(ApiError::NotFound("Worksheet not found".to_string()));
    }

    state.carts.add(auth.user_id(), req.worksheet_id);
    Ok(Json(CartChangeResponse {
        success: true,
        message: "Worksheet added to cart".to_string(),
        worksheet_id: req.worksheet_id,
    }))
}

/// DELETE /api/cart - remove one occurrence of a worksheet
async fn remove_from_cart(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CartItemRequest>,
) -> ApiResult<Json<CartChangeResponse>> {
    if !state.carts.remove(auth.user_id(), req.worksheet_id) {
        return Err(ApiError::NotFound("Worksheet not found in cart".to_string()));
    }

    Ok(Json(CartChangeResponse {
        success: true,
        message: "Worksheet removed from cart".to_string(),
        worksheet_id: req.worksheet_id,
    }))
}

/// POST /api/cart/checkout - clear the cart
async fn checkout(State(state): State<AppState>, auth: AuthUser) -> Json<CheckoutResponse> {
    state.carts.clear(auth.user_id());
    info!(user_id = auth.user_id(), "cart checked out");

    Json(CheckoutResponse {
        success: true,
        message: "Checkout successful! Thank you for your purchase.".to_string(),
    })
}
