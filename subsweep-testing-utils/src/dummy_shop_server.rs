use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use serde::Deserialize;
use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::{Arc, Mutex},
};
use subsweep_common::Subscription;
use tokio::{net::TcpListener, task::JoinHandle};

/// Records held by the dummy shop.
#[derive(Debug, Default)]
pub struct ShopState {
    pub subscriptions: Vec<Subscription>,
    pub orders: Vec<u64>,
    pub customers: Vec<u64>,
}

/// A request the dummy shop has served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopRequest {
    ListSubscriptions {
        status: String,
        per_page: usize,
        offset: usize,
    },
    DeleteSubscription {
        id: u64,
    },
    DeleteOrder {
        id: u64,
    },
    DeleteCustomer {
        id: u64,
    },
}

struct Shop {
    state: ShopState,
    requests: Vec<ShopRequest>,
}

type SharedShop = Arc<Mutex<Shop>>;

/// An in-process stand in for a WooCommerce style REST API.
///
/// Serves subscription listing and permanent deletion of subscriptions,
/// orders and customers under `/wc/v3`, recording every request it handles.
/// Requests must carry API credentials (any value) and deletes must ask for
/// permanent removal with `force=true`.
pub struct DummyShopServer {
    handle: Option<JoinHandle<()>>,
    base_url: String,
    shop: SharedShop,
}

impl DummyShopServer {
    pub async fn new(state: ShopState) -> Self {
        let shop = Arc::new(Mutex::new(Shop {
            state,
            requests: Vec::new(),
        }));

        let app = Router::new()
            .route("/wc/v3/subscriptions", get(list_subscriptions))
            .route("/wc/v3/subscriptions/{id}", delete(delete_subscription))
            .route("/wc/v3/orders/{id}", delete(delete_order))
            .route("/wc/v3/customers/{id}", delete(delete_customer))
            .with_state(shop.clone());

        let listener = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
            .await
            .expect("tcp listener should bind to a free local port");
        let address = listener
            .local_addr()
            .expect("bound tcp listener should have a local address");

        let handle = Some(tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        }));

        Self {
            handle,
            base_url: format!("http://{address}/wc/v3"),
            shop,
        }
    }

    pub async fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            let _ = handle.await;
        }
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    /// Subscriptions still held by the shop, sorted by id.
    pub fn subscriptions(&self) -> Vec<Subscription> {
        let mut subscriptions = self.shop.lock().unwrap().state.subscriptions.clone();
        subscriptions.sort_by_key(|s| s.id);
        subscriptions
    }

    /// Ids of the orders still held by the shop, sorted.
    pub fn orders(&self) -> Vec<u64> {
        let mut orders = self.shop.lock().unwrap().state.orders.clone();
        orders.sort();
        orders
    }

    /// Ids of the customer accounts still held by the shop, sorted.
    pub fn customers(&self) -> Vec<u64> {
        let mut customers = self.shop.lock().unwrap().state.customers.clone();
        customers.sort();
        customers
    }

    /// Every request served so far, in the order received.
    pub fn requests(&self) -> Vec<ShopRequest> {
        self.shop.lock().unwrap().requests.clone()
    }
}

fn check_credentials(headers: &HeaderMap) -> Result<(), Response> {
    if headers.contains_key(header::AUTHORIZATION) {
        Ok(())
    } else {
        Err((StatusCode::UNAUTHORIZED, "Missing API credentials").into_response())
    }
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    status: String,
    per_page: usize,
    offset: usize,
}

async fn list_subscriptions(
    State(shop): State<SharedShop>,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> Response {
    if let Err(response) = check_credentials(&headers) {
        return response;
    }

    let mut shop = shop.lock().unwrap();
    shop.requests.push(ShopRequest::ListSubscriptions {
        status: query.status.clone(),
        per_page: query.per_page,
        offset: query.offset,
    });

    let mut matching: Vec<Subscription> = shop
        .state
        .subscriptions
        .iter()
        .filter(|s| s.status == query.status)
        .cloned()
        .collect();
    matching.sort_by_key(|s| s.id);

    let page: Vec<Subscription> = matching
        .into_iter()
        .skip(query.offset)
        .take(query.per_page)
        .collect();

    Json(page).into_response()
}

#[derive(Debug, Deserialize)]
struct DeleteQuery {
    #[serde(default)]
    force: bool,
}

async fn delete_subscription(
    State(shop): State<SharedShop>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Query(query): Query<DeleteQuery>,
) -> Response {
    if let Err(response) = check_credentials(&headers) {
        return response;
    }
    if !query.force {
        return (StatusCode::BAD_REQUEST, "Only permanent deletion is supported").into_response();
    }

    let mut shop = shop.lock().unwrap();
    shop.requests.push(ShopRequest::DeleteSubscription { id });

    if shop.state.subscriptions.iter().any(|s| s.id == id) {
        shop.state.subscriptions.retain(|s| s.id != id);
        StatusCode::OK.into_response()
    } else {
        (StatusCode::NOT_FOUND, "No such subscription").into_response()
    }
}

async fn delete_order(
    State(shop): State<SharedShop>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Query(query): Query<DeleteQuery>,
) -> Response {
    if let Err(response) = check_credentials(&headers) {
        return response;
    }
    if !query.force {
        return (StatusCode::BAD_REQUEST, "Only permanent deletion is supported").into_response();
    }

    let mut shop = shop.lock().unwrap();
    shop.requests.push(ShopRequest::DeleteOrder { id });

    if shop.state.orders.contains(&id) {
        shop.state.orders.retain(|order| *order != id);
        StatusCode::OK.into_response()
    } else {
        (StatusCode::NOT_FOUND, "No such order").into_response()
    }
}

async fn delete_customer(
    State(shop): State<SharedShop>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Query(query): Query<DeleteQuery>,
) -> Response {
    if let Err(response) = check_credentials(&headers) {
        return response;
    }
    if !query.force {
        return (StatusCode::BAD_REQUEST, "Only permanent deletion is supported").into_response();
    }

    let mut shop = shop.lock().unwrap();
    shop.requests.push(ShopRequest::DeleteCustomer { id });

    if shop.state.customers.contains(&id) {
        shop.state.customers.retain(|customer| *customer != id);
        StatusCode::OK.into_response()
    } else {
        (StatusCode::NOT_FOUND, "No such customer").into_response()
    }
}
