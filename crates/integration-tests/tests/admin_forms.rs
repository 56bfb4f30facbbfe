//! Admin form validation happens client-side: a form that fails
//! validation never produces a request.

use greenbasket_client::{ApiClient, MemoryStorage, SessionStore, validate};
use greenbasket_core::{CategoryId, LoginRequest, ProductCreateRequest, Unit};
use greenbasket_integration_tests::{StubApi, TEST_EMAIL, TEST_PASSWORD, test_config};
use rust_decimal::Decimal;

async fn signed_in_client(stub: &StubApi) -> ApiClient {
    let config = test_config(stub);
    let session = SessionStore::new(MemoryStorage::new());
    let api = ApiClient::new(&config, session.clone());
    let auth = api
        .login(&LoginRequest {
            email: TEST_EMAIL.to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await
        .expect("login succeeds");
    session.set_auth(auth.user, &auth.token);
    api
}

fn product_form(name: &str, price: Decimal) -> ProductCreateRequest {
    ProductCreateRequest {
        name: name.to_string(),
        description: String::new(),
        price,
        stock: Decimal::new(10, 0),
        unit: Unit::Piece,
        category_id: CategoryId::new(1),
        image_url: String::new(),
    }
}

#[tokio::test]
async fn invalid_product_form_never_reaches_the_wire() {
    let stub = StubApi::spawn().await;
    let api = signed_in_client(&stub).await;

    // The view only submits a form that passed validation
    for form in [
        product_form("", Decimal::new(249, 2)),
        product_form("Milk", Decimal::ZERO),
    ] {
        let checked = validate::validate_product(&form);
        assert!(checked.is_err());
        if checked.is_ok() {
            api.create_product(&form).await.expect("unreachable");
        }
    }

    assert_eq!(stub.with_state(|state| state.counters.product_creates), 0);
    assert!(stub.with_state(|state| state.products.is_empty()));
}

#[tokio::test]
async fn valid_product_form_is_submitted() {
    let stub = StubApi::spawn().await;
    let api = signed_in_client(&stub).await;

    let form = product_form("Milk", Decimal::new(249, 2));
    validate::validate_product(&form).expect("form is valid");
    let created = api.create_product(&form).await.expect("create succeeds");

    assert_eq!(created.name, "Milk");
    assert_eq!(stub.with_state(|state| state.counters.product_creates), 1);
}
