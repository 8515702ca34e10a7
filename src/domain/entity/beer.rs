use rust_decimal::Decimal;

use super::{impl_entity, state_ref, state_set, EntityData};
use crate::base::resource_id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeerState {
    pub beer_name: String,
    /// Label of a [`BeerStyle`](crate::domain::datatype::beer_style::BeerStyle).
    pub beer_style: String,
    pub upc: i64,
    pub price: Decimal,
    pub quantity_on_hand: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beer {
    pub(in crate::domain) data: EntityData,
    pub(in crate::domain) state: BeerState,
}

impl_entity!(Beer);

resource_id!(Beer, "beer::Beer");

impl Beer {
    state_ref!(beer_name, String);
    state_ref!(beer_style, String);
    state_ref!(upc, i64);
    state_ref!(price, Decimal);
    state_ref!(quantity_on_hand, Option<i32>);

    state_set!(set_beer_name, beer_name, String);
    state_set!(set_beer_style, beer_style, String);
    state_set!(set_upc, upc, i64);
    state_set!(set_price, price, Decimal);

    /// A beer that was never persisted.
    pub fn new(state: BeerState) -> Self {
        Self::restore(EntityData::transient(), state)
    }

    pub fn restore(data: EntityData, state: BeerState) -> Self {
        Self { data, state }
    }

    pub fn state(&self) -> &BeerState {
        &self.state
    }

    /// Drops every persistence-owned field, turning the beer back into a new record.
    pub fn detach(&mut self) {
        self.data = EntityData::transient();
    }

    pub fn into_parts(self) -> (EntityData, BeerState) {
        (self.data, self.state)
    }
}
