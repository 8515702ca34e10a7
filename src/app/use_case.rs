use uuid::Uuid;

use crate::{
    app::{resource::beer::BeerDto, transform::beer::BeerMapper},
    domain::{
        entity::{beer::Beer, Entity},
        repository::BeerRepository,
    },
    error::{app::ApplicationError, resource::NotFoundError},
};

pub type BeerResult = Result<BeerDto, ApplicationError<BeerDto>>;

pub struct BeerService<R> {
    repository: R,
    mapper: BeerMapper,
}

impl<R: BeerRepository> BeerService<R> {
    pub fn new(repository: R, mapper: BeerMapper) -> Self {
        Self { repository, mapper }
    }

    pub async fn get_by_id(&self, id: Uuid) -> BeerResult {
        let beer = self.find(id).await?;
        Ok(self.mapper.entity_to_dto(&beer)?)
    }

    /// Persists a new beer. Client supplied id, version and audit dates are discarded.
    pub async fn save_new_beer(&self, dto: BeerDto) -> BeerResult {
        let mut beer = self.mapper.dto_to_entity(dto)?;
        beer.detach();

        let beer = self.repository.save(beer).await?;
        tracing::info!(id = ?beer.ident(), "saved new beer");

        Ok(self.mapper.entity_to_dto(&beer)?)
    }

    /// Overwrites name, style, price and UPC of an existing beer.
    ///
    /// Quantity on hand and every persistence-owned field are left as stored.
    pub async fn update_beer(&self, id: Uuid, dto: BeerDto) -> BeerResult {
        let mut beer = self.find(id).await?;

        beer.set_beer_name(dto.beer_name);
        beer.set_beer_style(dto.beer_style.as_str().into());
        beer.set_price(dto.price);
        beer.set_upc(dto.upc);

        let beer = self.repository.save(beer).await?;
        tracing::info!(%id, version = ?beer.version(), "updated beer");

        Ok(self.mapper.entity_to_dto(&beer)?)
    }

    async fn find(&self, id: Uuid) -> Result<Beer, ApplicationError<BeerDto>> {
        tracing::debug!(%id, "looking up beer");
        let beer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::of::<Beer>(id))?;
        Ok(beer)
    }
}
