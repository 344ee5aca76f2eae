// Hotel inventory backend: hotel / room / room type management plus the
// location + pax count allocation search.

pub mod domain;
pub mod error;
pub mod matcher;
pub mod request;
pub mod response;
pub mod service;
pub mod store;

// Re-export key types for convenience
pub use domain::{Hotel, Room, RoomType};
pub use error::ServiceError;
pub use matcher::match_rooms;
pub use request::{HotelRequest, RoomRequest, RoomTypeRequest, SearchRequest};
pub use response::{HotelListResponse, HotelSummary, ResponseWrapper, RoomSummary};
pub use service::{HotelMatch, HotelService, RoomService};
pub use store::{HotelStore, InMemoryInventory, RoomStore, RoomTypeStore, StoreError};
