use async_trait::async_trait;
use uuid::Uuid;

use super::entity::beer::Beer;
use crate::error::persistence::PersistenceError;

/// Storage of [`Beer`] records.
///
/// Implementations own every persistence field of the entity: `save` assigns
/// id, version and audit timestamps to a transient beer, and performs a
/// compare-and-increment on the version of an already persisted one, failing
/// with [`PersistenceError::VersionConflict`] when the stored version moved on.
#[async_trait]
pub trait BeerRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Beer>, PersistenceError>;

    async fn save(&self, beer: Beer) -> Result<Beer, PersistenceError>;
}
