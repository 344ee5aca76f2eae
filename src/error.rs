// Application error catalog. A search that finds no allocation is not an
// error; it simply leaves the hotel out of the result.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("required fields are missing")]
    MissingRequiredFields,

    #[error("hotel not found for id: {0}")]
    HotelNotFound(String),

    #[error("room not found for id: {0}")]
    RoomNotFound(String),

    #[error("room type not found for id: {0}")]
    RoomTypeNotFound(String),

    #[error("maximum room count limit reached for hotel: {0}")]
    RoomLimitReached(String),

    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

impl ServiceError {
    // Splits caller mistakes (bad id) from internal failures, the way the
    // request boundary maps errors to bad-request vs internal-error.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ServiceError::HotelNotFound(_)
                | ServiceError::RoomNotFound(_)
                | ServiceError::RoomTypeNotFound(_)
        )
    }
}
