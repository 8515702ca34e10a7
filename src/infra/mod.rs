pub mod controller;
pub mod database;

pub mod router {
    use std::sync::Arc;

    use salvo::{logging::Logger, Router};

    use super::controller::*;
    use crate::{app::use_case::BeerService, domain::repository::BeerRepository};

    pub fn app<R: BeerRepository + 'static>(service: Arc<BeerService<R>>) -> Router {
        Router::new()
            .push(
                Router::with_path("api/v1/beer")
                    .post(CreateBeerController::new(service.clone()))
                    .push(
                        Router::with_path("<beer_id>")
                            .get(GetBeerController::new(service.clone()))
                            .put(UpdateBeerController::new(service)),
                    ),
            )
            .hoop(Logger)
    }
}
