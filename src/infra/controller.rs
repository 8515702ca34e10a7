use std::sync::Arc;

use async_trait::async_trait;
use salvo::{
    http::{
        header::{HeaderValue, LOCATION},
        StatusCode,
    },
    writer::Json,
    Depot, FlowCtrl, Handler, Request, Response,
};
use uuid::Uuid;

use crate::{
    app::{resource::beer::BeerDto, use_case::BeerService, validation},
    domain::repository::BeerRepository,
    error::{app::ApplicationError, http::BadRequest},
};

pub const BEER_ENDPOINT: &str = "/api/v1/beer";

macro_rules! map_res_err {
    ($result:ident, $response:ident) => {
        match $result {
            Err(err) => {
                $response.render(err);
                return;
            }
            Ok(ok) => ok,
        }
    };
}

/// Extract the beer uuid from the `beer_id` path param
fn extract_id(req: &Request) -> Result<Uuid, BadRequest> {
    let param = req
        .params()
        .get("beer_id")
        .ok_or_else(|| BadRequest::InvalidPathParam("beer_id".into()))?;
    param
        .parse()
        .map_err(|_| BadRequest::InvalidPathParam(param.clone()))
}

pub struct GetBeerController<R> {
    service: Arc<BeerService<R>>,
}

impl<R> GetBeerController<R> {
    pub fn new(service: Arc<BeerService<R>>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<R: BeerRepository + 'static> Handler for GetBeerController<R> {
    async fn handle(&self, req: &mut Request, _: &mut Depot, res: &mut Response, _: &mut FlowCtrl) {
        let result = extract_id(req);
        let id = map_res_err!(result, res);

        let result = self.service.get_by_id(id).await;
        let beer = map_res_err!(result, res);

        res.render(Json(beer));
        res.set_status_code(StatusCode::OK);
    }
}

pub struct CreateBeerController<R> {
    service: Arc<BeerService<R>>,
}

impl<R> CreateBeerController<R> {
    pub fn new(service: Arc<BeerService<R>>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<R: BeerRepository + 'static> Handler for CreateBeerController<R> {
    async fn handle(&self, req: &mut Request, _: &mut Depot, res: &mut Response, _: &mut FlowCtrl) {
        let result: Result<BeerDto, _> = req.parse_body().await.map_err(BadRequest::from);
        let dto = map_res_err!(result, res);
        let result = validation::beer(&dto).map_err(ApplicationError::<BeerDto>::from);
        map_res_err!(result, res);

        let result = self.service.save_new_beer(dto).await;
        let beer = map_res_err!(result, res);

        if let Some(id) = beer.id {
            if let Ok(location) = HeaderValue::from_str(&format!("{BEER_ENDPOINT}/{id}")) {
                res.headers_mut().insert(LOCATION, location);
            }
        }
        res.set_status_code(StatusCode::CREATED);
    }
}

pub struct UpdateBeerController<R> {
    service: Arc<BeerService<R>>,
}

impl<R> UpdateBeerController<R> {
    pub fn new(service: Arc<BeerService<R>>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<R: BeerRepository + 'static> Handler for UpdateBeerController<R> {
    async fn handle(&self, req: &mut Request, _: &mut Depot, res: &mut Response, _: &mut FlowCtrl) {
        let result = extract_id(req);
        let id = map_res_err!(result, res);

        let result: Result<BeerDto, _> = req.parse_body().await.map_err(BadRequest::from);
        let dto = map_res_err!(result, res);
        let result = validation::beer(&dto).map_err(ApplicationError::<BeerDto>::from);
        map_res_err!(result, res);

        let result = self.service.update_beer(id, dto).await;
        map_res_err!(result, res);

        res.set_status_code(StatusCode::NO_CONTENT);
    }
}
