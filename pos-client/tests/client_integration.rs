// pos-client/tests/client_integration.rs
// Client against an in-process axum backend

use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use pos_client::{ClientConfig, ClientError, NetworkHttpClient, PosClient};
use serde_json::{Value, json};
use shared::GENERIC_ERROR_MESSAGE;
use shared::models::{
    Customer, CustomerCreate, CustomerUpdate, OrderStatus, PayOrderRequest, PaymentMethod, PaymentPart, ShiftStatus,
};

async fn spawn(router: Router) -> PosClient<NetworkHttpClient> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ClientConfig::new(format!("http://{addr}"))
        .with_timeout(5)
        .build()
        .unwrap()
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

fn shift_json() -> Value {
    json!({
        "id": 11,
        "cashier_id": 3,
        "cashier_name": "Ольга",
        "status": "OPEN",
        "opened_at": "2024-03-01T09:00:00Z",
        "closed_at": null,
        "opening_cash": 5000.0,
        "closing_cash": null,
        "cash_sales": 1200.0
    })
}

fn order_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "number": format!("A-{id}"),
        "table_id": 4,
        "status": status,
        "items": [{"product_id": 1, "name": "Борщ", "quantity": 2.0, "price": 350.0}],
        "total": 700.0,
        "paid_total": 0.0,
        "created_at": "2024-03-01T12:30:00Z"
    })
}

#[tokio::test]
async fn test_pin_login_stores_token() {
    let router = Router::new()
        .route(
            "/auth/pin",
            post(|Json(body): Json<Value>| async move {
                if body["pin"] == "1234" {
                    Json(json!({"token": "tok-1", "user": {"id": 3, "name": "Ольга", "role": "cashier"}}))
                        .into_response()
                } else {
                    (StatusCode::UNAUTHORIZED, Json(json!({"error": "Неверный PIN-код"}))).into_response()
                }
            }),
        )
        .route(
            "/auth/me",
            get(|headers: HeaderMap| async move {
                match bearer(&headers) {
                    Some("tok-1") => Json(json!({"id": 3, "name": "Ольга", "role": "cashier"})).into_response(),
                    _ => StatusCode::UNAUTHORIZED.into_response(),
                }
            }),
        );
    let mut client = spawn(router).await;

    let err = client.pin_login("0000").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Неверный PIN-код");
    assert!(!client.is_logged_in());

    let resp = client.pin_login("1234").await.unwrap();
    assert_eq!(resp.token, "tok-1");
    assert_eq!(client.token(), Some("tok-1"));
    assert_eq!(client.current_user().unwrap().name, "Ольга");

    let me = client.me().await.unwrap();
    assert_eq!(me.id, 3);
}

#[tokio::test]
async fn test_logout_clears_session_even_on_failure() {
    let router = Router::new()
        .route(
            "/auth/pin",
            post(|| async { Json(json!({"token": "t", "user": {"id": 1, "name": "A", "role": "admin"}})) }),
        )
        .route("/auth/logout", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let mut client = spawn(router).await;

    client.pin_login("1111").await.unwrap();
    assert!(client.logout().await.is_err());
    assert!(!client.is_logged_in());
    assert!(client.current_user().is_none());
}

#[tokio::test]
async fn test_active_shift_not_found_is_none() {
    let router = Router::new().route("/shifts/me/active", get(|| async { StatusCode::NOT_FOUND }));
    let client = spawn(router).await;
    assert!(client.active_shift().await.unwrap().is_none());
}

#[tokio::test]
async fn test_active_shift_and_open() {
    let router = Router::new()
        .route("/shifts/me/active", get(|| async { Json(shift_json()) }))
        .route(
            "/shifts",
            post(|Json(body): Json<Value>| async move {
                let mut shift = shift_json();
                shift["opening_cash"] = body["opening_cash"].clone();
                Json(shift)
            }),
        )
        .route(
            "/shifts/end",
            post(|Json(body): Json<Value>| async move {
                let mut shift = shift_json();
                shift["status"] = json!("CLOSED");
                shift["closing_cash"] = body["closing_cash"].clone();
                Json(shift)
            }),
        );
    let client = spawn(router).await;

    let active = client.active_shift().await.unwrap().unwrap();
    assert_eq!(active.status, ShiftStatus::Open);
    assert_eq!(active.cash_sales, 1200.0);
    assert_eq!(active.refunds, 0.0);

    let opened = client.open_shift(3000.0).await.unwrap();
    assert_eq!(opened.opening_cash, 3000.0);

    let closed = client.end_shift(6150.0).await.unwrap();
    assert_eq!(closed.status, ShiftStatus::Closed);
    assert_eq!(closed.closing_cash, Some(6150.0));
}

#[tokio::test]
async fn test_open_shift_conflict_message() {
    let router = Router::new().route(
        "/shifts",
        post(|| async {
            (
                StatusCode::CONFLICT,
                Json(json!({"code": 3002, "message": "Смена уже открыта"})),
            )
        }),
    );
    let client = spawn(router).await;

    let err = client.open_shift(100.0).await.unwrap_err();
    assert!(matches!(err, ClientError::Rejected { .. }));
    assert_eq!(err.user_message(), "Смена уже открыта");
    assert_eq!(err.error_code(), shared::ErrorCode::ShiftAlreadyOpen);
}

#[tokio::test]
async fn test_orders_for_table_and_pay() {
    let router = Router::new()
        .route(
            "/orders",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                let table: i64 = q.get("table_id").and_then(|t| t.parse().ok()).unwrap_or(0);
                if table == 4 {
                    Json(json!([order_json(1, "OPEN"), order_json(2, "PAID")]))
                } else {
                    Json(json!([]))
                }
            }),
        )
        .route(
            "/orders/{id}/pay",
            post(|Path(id): Path<i64>, Json(body): Json<Value>| async move {
                let paid: f64 = body["payments"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|p| p["amount"].as_f64().unwrap())
                    .sum();
                if (paid - 700.0).abs() > 0.001 || body["operation_id"].as_str().is_none() {
                    return (StatusCode::BAD_REQUEST, Json(json!({"error": "Сумма не совпадает"})))
                        .into_response();
                }
                let mut order = order_json(id, "PAID");
                order["paid_total"] = json!(paid);
                Json(order).into_response()
            }),
        );
    let client = spawn(router).await;

    let orders = client.orders_for_table(4).await.unwrap();
    assert_eq!(orders.len(), 2);
    assert!(orders[0].is_open());
    assert!(client.orders_for_table(5).await.unwrap().is_empty());

    let req = PayOrderRequest {
        payments: vec![
            PaymentPart { method: PaymentMethod::Card, amount: 500.0 },
            PaymentPart { method: PaymentMethod::Cash, amount: 200.0 },
        ],
        tendered: Some(200.0),
        operation_id: "op-1".into(),
    };
    let paid = client.pay_order(1, &req).await.unwrap();
    assert_eq!(paid.status, OrderStatus::Paid);
    assert_eq!(paid.paid_total, 700.0);

    let short = PayOrderRequest {
        payments: vec![PaymentPart { method: PaymentMethod::Cash, amount: 100.0 }],
        tendered: None,
        operation_id: "op-2".into(),
    };
    let err = client.pay_order(1, &short).await.unwrap_err();
    assert_eq!(err.user_message(), "Сумма не совпадает");
}

#[tokio::test]
async fn test_resource_crud() {
    let customer = json!({
        "id": 7,
        "name": "Иван",
        "phone": "+79990001122",
        "email": null,
        "birthday": "1990-05-17",
        "group_id": 2,
        "comment": null,
        "created_at": "2024-01-01T00:00:00Z"
    });
    let listed = customer.clone();
    let router = Router::new()
        .route(
            "/customers",
            get(move || async move { Json(json!([listed])) }).post(|Json(body): Json<Value>| async move {
                if body["phone"] == "+79990001122" {
                    return (StatusCode::CONFLICT, Json(json!({"error": "Телефон уже используется"})))
                        .into_response();
                }
                let mut created = body.clone();
                created["id"] = json!(8);
                Json(created).into_response()
            }),
        )
        .route(
            "/customers/{id}",
            get(move |Path(id): Path<i64>| async move {
                if id == 7 {
                    Json(customer).into_response()
                } else {
                    (StatusCode::NOT_FOUND, Json(json!({"message": "Клиент не найден"}))).into_response()
                }
            })
            .put(|Path(id): Path<i64>, Json(mut body): Json<Value>| async move {
                body["id"] = json!(id);
                Json(body)
            })
            .delete(|| async { StatusCode::NO_CONTENT }),
        );
    let client = spawn(router).await;

    let all: Vec<Customer> = client.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].bonus_balance, 0.0);

    let one: Customer = client.get(7).await.unwrap();
    assert_eq!(one.name, "Иван");

    let err = client.get::<Customer>(99).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.user_message(), "Клиент не найден");

    let dup = CustomerCreate {
        name: "Пётр".into(),
        phone: Some("+79990001122".into()),
        email: None,
        birthday: None,
        group_id: None,
        comment: None,
    };
    let err = client.create::<Customer>(&dup).await.unwrap_err();
    assert_eq!(err.user_message(), "Телефон уже используется");

    let fresh = CustomerCreate { phone: None, ..dup };
    let created: Customer = client.create(&fresh).await.unwrap();
    assert_eq!(created.id, 8);

    let updated = client.update::<Customer>(8, &CustomerUpdate::from(fresh)).await.unwrap();
    assert_eq!(updated.id, 8);
    assert_eq!(updated.name, "Пётр");

    client.delete::<Customer>(8).await.unwrap();
}

#[tokio::test]
async fn test_non_json_error_uses_generic_message() {
    let router = Router::new().route(
        "/rooms",
        get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let client = spawn(router).await;

    let err = client.rooms().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_error_text_survives_foreign_body_fields() {
    let router = Router::new()
        .route(
            "/warehouses/{id}",
            get(|Path(id): Path<i64>| async move {
                let body = match id {
                    1 => json!({"code": "WAREHOUSE_NOT_FOUND", "error": "Склад не найден"}),
                    2 => json!({"code": 70000, "error": "Склад не найден"}),
                    _ => json!({"statusCode": 400, "message": ["Склад не найден"]}),
                };
                (StatusCode::BAD_REQUEST, Json(body))
            }),
        );
    let client = spawn(router).await;

    for id in 1..=3 {
        let err = client.get::<shared::models::Warehouse>(id).await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(err.user_message(), "Склад не найден", "warehouse {id}");
    }
    let err = client.get::<shared::models::Warehouse>(1).await.unwrap_err();
    assert_eq!(err.error_code(), shared::ErrorCode::ValidationFailed);
}

#[tokio::test]
async fn test_unexpected_shape_is_invalid_response() {
    let router = Router::new().route("/rooms", get(|| async { Json(json!({"rooms": []})) }));
    let client = spawn(router).await;

    let err = client.rooms().await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_stock_and_public_menu() {
    let router = Router::new()
        .route(
            "/stock",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                let wh: i64 = q.get("warehouse_id").and_then(|w| w.parse().ok()).unwrap_or(1);
                Json(json!([{
                    "item_id": 1, "item_name": "Мука", "unit": "kg",
                    "warehouse_id": wh, "quantity": 12.5, "unit_price": 40.0
                }]))
            }),
        )
        .route(
            "/public/menu/{slug}",
            get(|Path(slug): Path<String>| async move {
                Json(json!({"venue_name": slug, "categories": [], "items": []}))
            }),
        );
    let client = spawn(router).await;

    let stock = client.stock(Some(2)).await.unwrap();
    assert_eq!(stock[0].warehouse_id, 2);

    let menu = client.public_menu("cafe-pushkin").await.unwrap();
    assert_eq!(menu.venue_name, "cafe-pushkin");
    assert!(matches!(
        client.public_menu("../admin").await,
        Err(ClientError::Config(_))
    ));
}
