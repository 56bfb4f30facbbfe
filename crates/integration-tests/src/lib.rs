//! In-process stub of the grocery API.
//!
//! Binds an axum server to an ephemeral loopback port and serves the
//! endpoints the client talks to, backed by in-memory state the tests can
//! seed and inspect. Request counters expose how often the client actually
//! hit the wire, which is what the caching tests assert on.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::json;

use greenbasket_core::{
    AuthResponse, CartItem, CartItemRequest, CartSnapshot, Category, LoginRequest,
    ProductCreateRequest, Product, ProductId, QuantityUpdate, RegisterRequest, Role, Unit, User,
    UserId,
};

pub const TEST_EMAIL: &str = "shopper@example.com";
pub const TEST_PASSWORD: &str = "secret1";
pub const TEST_TOKEN: &str = "stub-token-1";

/// How often each endpoint group was hit.
#[derive(Debug, Default, Clone)]
pub struct Counters {
    pub product_list: usize,
    pub category_list: usize,
    pub cart_adds: usize,
    pub product_creates: usize,
}

/// Mutable server state shared with the tests.
pub struct StubState {
    pub user: User,
    pub password: String,
    pub token: String,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub cart: Vec<CartItem>,
    pub counters: Counters,
    /// Product IDs whose cart adds fail with an out-of-stock error.
    pub rejected_products: HashSet<ProductId>,
    next_user_id: u64,
}

impl StubState {
    fn new() -> Self {
        Self {
            user: User {
                id: UserId::new(1),
                name: "Test Shopper".to_string(),
                email: TEST_EMAIL.to_string(),
                role: Role::User,
            },
            password: TEST_PASSWORD.to_string(),
            token: TEST_TOKEN.to_string(),
            products: Vec::new(),
            categories: Vec::new(),
            cart: Vec::new(),
            counters: Counters::default(),
            rejected_products: HashSet::new(),
            next_user_id: 2,
        }
    }

    /// Seeds a product with sensible defaults.
    pub fn seed_product(&mut self, id: u64, name: &str, price: Decimal, stock: Decimal) {
        self.products.push(Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            price,
            stock,
            unit: Unit::Piece,
            category_id: None,
            image_url: String::new(),
            created_at: None,
            updated_at: None,
        });
    }

    fn snapshot(&self) -> CartSnapshot {
        let total_price: Decimal = self.cart.iter().map(|item| item.subtotal).sum();
        let item_count = self
            .cart
            .iter()
            .map(|item| item.quantity)
            .sum::<Decimal>()
            .to_i64()
            .unwrap_or(0);
        CartSnapshot {
            id: None,
            items: self.cart.clone(),
            total_price,
            item_count,
        }
    }
}

type SharedState = Arc<Mutex<StubState>>;

/// A running stub server.
pub struct StubApi {
    pub addr: SocketAddr,
    pub state: SharedState,
}

impl StubApi {
    /// Starts the stub on an ephemeral loopback port.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind; tests have no way to recover
    /// from that.
    pub async fn spawn() -> Self {
        let state: SharedState = Arc::new(Mutex::new(StubState::new()));

        let app = Router::new()
            .route("/api/v1/auth/register", post(register))
            .route("/api/v1/auth/login", post(login))
            .route("/api/v1/users/me", get(me))
            .route("/api/v1/products", get(list_products))
            .route("/api/v1/products/{id}", get(get_product))
            .route("/api/v1/categories", get(list_categories))
            .route("/api/v1/cart", get(get_cart).delete(clear_cart))
            .route("/api/v1/cart/items", post(add_cart_item))
            .route(
                "/api/v1/cart/items/{product_id}",
                put(update_cart_item).delete(remove_cart_item),
            )
            .route("/api/v1/admin/products", post(create_product))
            .route("/api/v1/admin/products/{id}", delete(delete_product))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state }
    }

    /// Base URL to point a `ClientConfig` at.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}/api/v1", self.addr)
    }

    /// Locks and inspects the state.
    pub fn with_state<R>(&self, f: impl FnOnce(&mut StubState) -> R) -> R {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

/// Client configuration pointed at the stub, with the session file routed
/// to a throwaway path so tests never touch a real session.
#[must_use]
pub fn test_config(stub: &StubApi) -> greenbasket_client::ClientConfig {
    greenbasket_client::ClientConfig {
        api_url: stub.base_url(),
        session_file: std::env::temp_dir().join(format!(
            "greenbasket-it-{}-{}.json",
            std::process::id(),
            stub.addr.port()
        )),
        timeout: None,
    }
}

// =============================================================================
// Handlers
// =============================================================================

fn lock(state: &SharedState) -> std::sync::MutexGuard<'_, StubState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn authorize(state: &StubState, headers: &HeaderMap) -> Result<(), Response> {
    let expected = format!("Bearer {}", state.token);
    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    if presented == Some(expected.as_str()) {
        Ok(())
    } else {
        Err(error(
            StatusCode::UNAUTHORIZED,
            "Invalid or expired token",
        ))
    }
}

async fn register(
    State(state): State<SharedState>,
    Json(request): Json<RegisterRequest>,
) -> Response {
    let mut state = lock(&state);
    if request.email == state.user.email {
        return error(StatusCode::CONFLICT, "Email already registered");
    }
    let user = User {
        id: UserId::new(state.next_user_id),
        name: request.name,
        email: request.email,
        role: Role::User,
    };
    state.next_user_id += 1;
    state.user = user.clone();
    state.password = request.password;
    Json(AuthResponse {
        token: state.token.clone(),
        user,
    })
    .into_response()
}

async fn login(State(state): State<SharedState>, Json(request): Json<LoginRequest>) -> Response {
    let state = lock(&state);
    if request.email == state.user.email && request.password == state.password {
        Json(AuthResponse {
            token: state.token.clone(),
            user: state.user.clone(),
        })
        .into_response()
    } else {
        error(StatusCode::UNAUTHORIZED, "Invalid email or password")
    }
}

async fn me(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    Json(state.user.clone()).into_response()
}

async fn list_products(State(state): State<SharedState>) -> Response {
    let mut state = lock(&state);
    state.counters.product_list += 1;
    Json(state.products.clone()).into_response()
}

async fn get_product(State(state): State<SharedState>, Path(id): Path<ProductId>) -> Response {
    let state = lock(&state);
    state.products.iter().find(|p| p.id == id).map_or_else(
        || error(StatusCode::NOT_FOUND, "Product not found"),
        |product| Json(product.clone()).into_response(),
    )
}

async fn list_categories(State(state): State<SharedState>) -> Response {
    let mut state = lock(&state);
    state.counters.category_list += 1;
    Json(state.categories.clone()).into_response()
}

async fn get_cart(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    Json(state.snapshot()).into_response()
}

async fn add_cart_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(request): Json<CartItemRequest>,
) -> Response {
    let mut state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    state.counters.cart_adds += 1;

    if state.rejected_products.contains(&request.product_id) {
        return error(StatusCode::BAD_REQUEST, "Product out of stock");
    }
    let Some(product) = state
        .products
        .iter()
        .find(|p| p.id == request.product_id)
        .cloned()
    else {
        return error(StatusCode::NOT_FOUND, "Product not found");
    };

    if let Some(line) = state
        .cart
        .iter_mut()
        .find(|item| item.product_id == request.product_id)
    {
        line.quantity += request.quantity;
        line.subtotal = line.price * line.quantity;
    } else {
        state.cart.push(CartItem {
            id: None,
            product_id: product.id,
            product_name: product.name,
            price: product.price,
            quantity: request.quantity,
            unit: product.unit,
            subtotal: product.price * request.quantity,
        });
    }
    Json(state.snapshot()).into_response()
}

async fn update_cart_item(
    State(state): State<SharedState>,
    Path(product_id): Path<ProductId>,
    headers: HeaderMap,
    Json(request): Json<QuantityUpdate>,
) -> Response {
    let mut state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    let Some(line) = state
        .cart
        .iter_mut()
        .find(|item| item.product_id == product_id)
    else {
        return error(StatusCode::NOT_FOUND, "Item not in cart");
    };
    line.quantity = request.quantity;
    line.subtotal = line.price * line.quantity;
    Json(state.snapshot()).into_response()
}

async fn remove_cart_item(
    State(state): State<SharedState>,
    Path(product_id): Path<ProductId>,
    headers: HeaderMap,
) -> Response {
    let mut state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    state.cart.retain(|item| item.product_id != product_id);
    Json(state.snapshot()).into_response()
}

async fn clear_cart(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let mut state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    state.cart.clear();
    Json(state.snapshot()).into_response()
}

async fn create_product(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(request): Json<ProductCreateRequest>,
) -> Response {
    let mut state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    state.counters.product_creates += 1;
    let next_id = state
        .products
        .iter()
        .map(|p| p.id.as_u64())
        .max()
        .unwrap_or(0)
        + 1;
    let product = Product {
        id: ProductId::new(next_id),
        name: request.name,
        description: request.description,
        price: request.price,
        stock: request.stock,
        unit: request.unit,
        category_id: Some(request.category_id),
        image_url: request.image_url,
        created_at: None,
        updated_at: None,
    };
    state.products.push(product.clone());
    Json(product).into_response()
}

async fn delete_product(
    State(state): State<SharedState>,
    Path(id): Path<ProductId>,
    headers: HeaderMap,
) -> Response {
    let mut state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    state.products.retain(|p| p.id != id);
    Json(json!({ "message": "Product deleted" })).into_response()
}
