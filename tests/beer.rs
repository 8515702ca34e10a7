use std::sync::Arc;

use pretty_assertions::assert_eq;
use salvo::{
    http::{header::LOCATION, StatusCode},
    test::{ResponseExt, TestClient},
    Service,
};
use serde_json::{json, Value};
use uuid::Uuid;

use async_trait::async_trait;
use beer_service::{
    app::{resource::beer::BeerDto, transform::beer::BeerMapper, use_case::BeerService},
    domain::{datatype::beer_style::BeerStyle, entity::beer::Beer, repository::BeerRepository},
    error::persistence::PersistenceError,
    infra::{database::memory::InMemoryBeerRepository, router},
};

const BASE_URL: &str = "http://127.0.0.1:7878/api/v1/beer";

fn service() -> Service {
    let beer_service = BeerService::new(InMemoryBeerRepository::new(), BeerMapper::default());
    Service::new(router::app(Arc::new(beer_service)))
}

/// Yields after every read so concurrent updates observe the same version.
#[derive(Default)]
struct YieldingRepository {
    inner: InMemoryBeerRepository,
}

#[async_trait]
impl BeerRepository for YieldingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Beer>, PersistenceError> {
        let beer = self.inner.find_by_id(id).await;
        tokio::task::yield_now().await;
        beer
    }

    async fn save(&self, beer: Beer) -> Result<Beer, PersistenceError> {
        self.inner.save(beer).await
    }
}

fn valid_beer() -> Value {
    json!({
        "beerName": "Beer name",
        "beerStyle": "ALE",
        "upc": 12345,
        "price": "1.00"
    })
}

async fn create_beer(service: &Service, body: &Value) -> Uuid {
    let res = TestClient::post(BASE_URL).json(body).send(service).await;
    assert_eq!(res.status_code(), Some(StatusCode::CREATED));

    let location = res
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("Expect a location header for the created beer");
    location
        .rsplit('/')
        .next()
        .and_then(|id| id.parse().ok())
        .expect("Expect the location to end with the beer uuid")
}

#[tokio::test]
async fn create_and_get_beer() {
    let service = service();
    let id = create_beer(&service, &valid_beer()).await;

    let mut res = TestClient::get(format!("{BASE_URL}/{id}"))
        .send(&service)
        .await;
    assert_eq!(res.status_code(), Some(StatusCode::OK));

    let body: Value = res.take_json().await.unwrap();
    for field in [
        "id",
        "version",
        "createdDate",
        "lastModifiedDate",
        "beerName",
        "beerStyle",
        "upc",
        "price",
        "quantityOnHand",
    ] {
        assert!(body.get(field).is_some(), "missing field {field}");
    }

    let beer: BeerDto = serde_json::from_value(body).unwrap();
    assert_eq!(beer.id, Some(id));
    assert_eq!(beer.version, Some(0));
    assert_eq!(beer.beer_name, "Beer name");
    assert_eq!(beer.beer_style, BeerStyle::Ale);
    assert_eq!(beer.upc, 12345);
    assert_eq!(beer.price.to_string(), "1.00");
    assert_eq!(beer.quantity_on_hand, None);
    assert_eq!(beer.created_date.map(|date| date.offset().local_minus_utc()), Some(0));
}

#[tokio::test]
async fn create_ignores_client_identity() {
    let service = service();
    let forged = Uuid::new_v4();
    let mut body = valid_beer();
    body["id"] = json!(forged);
    body["version"] = json!(7);
    body["createdDate"] = json!("2001-01-01T00:00:00+02:00");

    let id = create_beer(&service, &body).await;
    assert_ne!(id, forged);

    let mut res = TestClient::get(format!("{BASE_URL}/{id}"))
        .send(&service)
        .await;
    let beer: BeerDto = res.take_json().await.unwrap();
    assert_eq!(beer.version, Some(0));
    assert_ne!(
        beer.created_date.map(|date| date.to_rfc3339()),
        Some("2001-01-01T00:00:00+02:00".to_string())
    );
}

#[tokio::test]
async fn get_unknown_beer_is_not_found() {
    let service = service();

    let mut res = TestClient::get(format!("{BASE_URL}/{}", Uuid::new_v4()))
        .send(&service)
        .await;
    assert_eq!(res.status_code(), Some(StatusCode::NOT_FOUND));

    let body: Value = res.take_json().await.unwrap();
    assert_eq!(body["error"]["NotFound"]["resource_type"], "beer::Beer");
}

#[tokio::test]
async fn get_with_malformed_id_is_bad_request() {
    let service = service();

    let res = TestClient::get(format!("{BASE_URL}/not-a-uuid"))
        .send(&service)
        .await;
    assert_eq!(res.status_code(), Some(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn update_applies_only_updatable_fields() {
    let service = service();
    let mut body = valid_beer();
    body["quantityOnHand"] = json!(24);
    let id = create_beer(&service, &body).await;

    let res = TestClient::put(format!("{BASE_URL}/{id}"))
        .json(&json!({
            "beerName": "Renamed",
            "beerStyle": "PALE_ALE",
            "upc": 999,
            "price": 4.5,
            "quantityOnHand": 1
        }))
        .send(&service)
        .await;
    assert_eq!(res.status_code(), Some(StatusCode::NO_CONTENT));

    let mut res = TestClient::get(format!("{BASE_URL}/{id}"))
        .send(&service)
        .await;
    let beer: BeerDto = res.take_json().await.unwrap();
    assert_eq!(beer.beer_name, "Renamed");
    assert_eq!(beer.beer_style, BeerStyle::PaleAle);
    assert_eq!(beer.upc, 999);
    assert_eq!(beer.price.to_string(), "4.5");
    assert_eq!(beer.quantity_on_hand, Some(24));
    assert_eq!(beer.version, Some(1));
}

#[tokio::test]
async fn update_unknown_beer_is_not_found() {
    let service = service();

    let res = TestClient::put(format!("{BASE_URL}/{}", Uuid::new_v4()))
        .json(&valid_beer())
        .send(&service)
        .await;
    assert_eq!(res.status_code(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn invalid_fields_are_listed() {
    let service = service();

    let mut res = TestClient::post(BASE_URL)
        .json(&json!({
            "beerName": " ",
            "beerStyle": "IPA",
            "upc": -1,
            "price": "2.50"
        }))
        .send(&service)
        .await;
    assert_eq!(res.status_code(), Some(StatusCode::BAD_REQUEST));

    let body: Value = res.take_json().await.unwrap();
    let paths: Vec<&str> = body["error"]["Validation"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|field| field["path"].as_str())
        .collect();
    assert_eq!(paths, vec!["/beerName", "/upc"]);
}

#[tokio::test]
async fn unknown_style_is_bad_request() {
    let service = service();
    let mut body = valid_beer();
    body["beerStyle"] = json!("PILSNER");

    let res = TestClient::post(BASE_URL).json(&body).send(&service).await;
    assert_eq!(res.status_code(), Some(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn concurrent_update_is_a_conflict() {
    let beer_service = BeerService::new(YieldingRepository::default(), BeerMapper::default());
    let service = Service::new(router::app(Arc::new(beer_service)));
    let id = create_beer(&service, &valid_beer()).await;

    let mut first = valid_beer();
    first["beerName"] = json!("First");
    let mut second = valid_beer();
    second["beerName"] = json!("Second");

    let (first, second) = tokio::join!(
        TestClient::put(format!("{BASE_URL}/{id}"))
            .json(&first)
            .send(&service),
        TestClient::put(format!("{BASE_URL}/{id}"))
            .json(&second)
            .send(&service),
    );
    let mut statuses = vec![first.status_code(), second.status_code()];
    statuses.sort();
    assert_eq!(
        statuses,
        vec![Some(StatusCode::NO_CONTENT), Some(StatusCode::CONFLICT)]
    );

    let mut res = TestClient::get(format!("{BASE_URL}/{id}"))
        .send(&service)
        .await;
    let beer: BeerDto = res.take_json().await.unwrap();
    assert_eq!(beer.version, Some(1));
}
