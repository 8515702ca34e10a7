pub mod beer;

use chrono::NaiveDateTime;
use uuid::Uuid;

pub trait Entity {
    fn ident(&self) -> Option<Uuid>;
    fn version(&self) -> Option<u32>;
    fn created_date(&self) -> Option<NaiveDateTime>;
    fn last_modified_date(&self) -> Option<NaiveDateTime>;
}

/// Persistence-owned entity fields.
///
/// Every field is absent until the entity is first saved by a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityData {
    pub(in crate::domain) id: Option<Uuid>,
    pub(in crate::domain) version: Option<u32>,
    pub(in crate::domain) created_date: Option<NaiveDateTime>,
    pub(in crate::domain) last_modified_date: Option<NaiveDateTime>,
}

impl EntityData {
    pub fn new(
        id: Option<Uuid>,
        version: Option<u32>,
        created_date: Option<NaiveDateTime>,
        last_modified_date: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id,
            version,
            created_date,
            last_modified_date,
        }
    }

    pub fn transient() -> Self {
        Self::default()
    }

    pub fn restore(
        id: Uuid,
        version: u32,
        created_date: NaiveDateTime,
        last_modified_date: NaiveDateTime,
    ) -> Self {
        Self::new(
            Some(id),
            Some(version),
            Some(created_date),
            Some(last_modified_date),
        )
    }
}

macro_rules! impl_entity {
    ($entity:ty) => {
        impl crate::domain::entity::Entity for $entity {
            fn ident(&self) -> Option<uuid::Uuid> {
                self.data.id
            }

            fn version(&self) -> Option<u32> {
                self.data.version
            }

            fn created_date(&self) -> Option<chrono::NaiveDateTime> {
                self.data.created_date
            }

            fn last_modified_date(&self) -> Option<chrono::NaiveDateTime> {
                self.data.last_modified_date
            }
        }
    };
}

macro_rules! state_ref {
    ($prop:ident, $rtrn:ty) => {
        pub fn $prop(&self) -> &$rtrn {
            &self.state.$prop
        }
    };
}

macro_rules! state_set {
    ($setter:ident, $prop:ident, $arg:ty) => {
        pub fn $setter(&mut self, $prop: $arg) {
            self.state.$prop = $prop;
        }
    };
}

pub(self) use impl_entity;
pub(self) use state_ref;
pub(self) use state_set;
