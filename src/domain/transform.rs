use sqlx::{postgres::PgRow, FromRow, Row};

use super::entity::{
    beer::{Beer, BeerState},
    EntityData,
};

impl<'r> FromRow<'r, PgRow> for EntityData {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let version: i64 = row.try_get("version")?;
        let version = u32::try_from(version).map_err(|err| sqlx::Error::ColumnDecode {
            index: "version".into(),
            source: Box::new(err),
        })?;

        Ok(Self {
            id: Some(row.try_get("id")?),
            version: Some(version),
            created_date: Some(row.try_get("created_date")?),
            last_modified_date: Some(row.try_get("last_modified_date")?),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for BeerState {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            beer_name: row.try_get("beer_name")?,
            beer_style: row.try_get("beer_style")?,
            upc: row.try_get("upc")?,
            price: row.try_get("price")?,
            quantity_on_hand: row.try_get("quantity_on_hand")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for Beer {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self::restore(
            EntityData::from_row(row)?,
            BeerState::from_row(row)?,
        ))
    }
}
