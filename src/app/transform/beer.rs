use super::date::DateMapper;
use crate::{
    app::resource::beer::BeerDto,
    domain::{
        datatype::beer_style::BeerStyle,
        entity::{
            beer::{Beer, BeerState},
            Entity, EntityData,
        },
    },
    error::mapping::MappingError,
};

/// Field-for-field conversion between [`Beer`] and [`BeerDto`].
#[derive(Debug, Clone, Default)]
pub struct BeerMapper {
    date_mapper: DateMapper,
}

impl BeerMapper {
    pub fn new(date_mapper: DateMapper) -> Self {
        Self { date_mapper }
    }

    /// Fails with [`MappingError::InvalidState`] when the stored style label is
    /// not a known [`BeerStyle`].
    pub fn entity_to_dto(&self, beer: &Beer) -> Result<BeerDto, MappingError> {
        let beer_style = beer.beer_style().parse::<BeerStyle>().map_err(|mut err| {
            err.path = "/beerStyle".into();
            MappingError::InvalidState(err)
        })?;

        Ok(BeerDto {
            id: beer.ident(),
            version: beer.version(),
            created_date: beer
                .created_date()
                .map(|ts| self.date_mapper.as_offset_date_time(&ts))
                .transpose()?,
            last_modified_date: beer
                .last_modified_date()
                .map(|ts| self.date_mapper.as_offset_date_time(&ts))
                .transpose()?,
            beer_name: beer.beer_name().clone(),
            beer_style,
            upc: *beer.upc(),
            price: *beer.price(),
            quantity_on_hand: *beer.quantity_on_hand(),
        })
    }

    pub fn dto_to_entity(&self, dto: BeerDto) -> Result<Beer, MappingError> {
        let data = EntityData::new(
            dto.id,
            dto.version,
            dto.created_date
                .as_ref()
                .map(|odt| self.date_mapper.as_timestamp(odt))
                .transpose()?,
            dto.last_modified_date
                .as_ref()
                .map(|odt| self.date_mapper.as_timestamp(odt))
                .transpose()?,
        );

        Ok(Beer::restore(
            data,
            BeerState {
                beer_name: dto.beer_name,
                beer_style: dto.beer_style.as_str().into(),
                upc: dto.upc,
                price: dto.price,
                quantity_on_hand: dto.quantity_on_hand,
            },
        ))
    }
}
