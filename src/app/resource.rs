pub mod beer {
    use chrono::{DateTime, FixedOffset};
    use rust_decimal::Decimal;
    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    use crate::{base::resource_id, domain::datatype::beer_style::BeerStyle};

    /// Wire representation of a beer.
    ///
    /// `id`, `version` and the audit dates are owned by storage and ignored when
    /// received from a client.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct BeerDto {
        pub id: Option<Uuid>,
        pub version: Option<u32>,
        pub created_date: Option<DateTime<FixedOffset>>,
        pub last_modified_date: Option<DateTime<FixedOffset>>,
        pub beer_name: String,
        pub beer_style: BeerStyle,
        pub upc: i64,
        pub price: Decimal,
        pub quantity_on_hand: Option<i32>,
    }

    resource_id!(BeerDto, "beer::BeerDto");

    impl BeerDto {
        pub fn new(beer_name: String, beer_style: BeerStyle, upc: i64, price: Decimal) -> Self {
            Self {
                id: None,
                version: None,
                created_date: None,
                last_modified_date: None,
                beer_name,
                beer_style,
                upc,
                price,
                quantity_on_hand: None,
            }
        }
    }
}
