//! Accident Repository - Accidents searched by participating plate

use async_trait::async_trait;

use crate::model::accident::{Accident, NewAccident};
use crate::model::plate::{Plate, PlateMatch};
use crate::repository::error::RepositoryError;

#[async_trait]
pub trait AccidentRepository: Send + Sync {
    async fn create(&self, accident: NewAccident) -> Result<Accident, RepositoryError>;

    /// Accidents whose involved plates contain `plate` under `mode`
    async fn find_involving(
        &self,
        plate: &Plate,
        mode: PlateMatch,
    ) -> Result<Vec<Accident>, RepositoryError>;

    /// Same criteria as `find_involving`, counted in the store
    async fn count_involving(&self, plate: &Plate, mode: PlateMatch)
        -> Result<u64, RepositoryError>;
}
