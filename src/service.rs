// Hotel / room / room type operations. Services validate the request,
// resolve collaborators through the store traits and log the outcome;
// storage failures propagate unchanged to the caller.

use futures::future::try_join_all;
use std::sync::Arc;
use tracing::debug;

use crate::domain::{Hotel, Room, RoomType};
use crate::error::ServiceError;
use crate::matcher::match_rooms;
use crate::request::{HotelRequest, RoomRequest, RoomTypeRequest, SearchRequest};
use crate::store::{HotelStore, RoomStore, RoomTypeStore};

// One hotel able to satisfy a pax count, with the rooms selected for it.
// Produced fresh per search; only non-empty matches are emitted.
#[derive(Debug, Clone)]
pub struct HotelMatch {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

#[derive(Clone)]
pub struct HotelService {
    hotel_store: Arc<dyn HotelStore>,
    room_store: Arc<dyn RoomStore>,
}

impl HotelService {
    pub fn new(hotel_store: Arc<dyn HotelStore>, room_store: Arc<dyn RoomStore>) -> Self {
        Self {
            hotel_store,
            room_store,
        }
    }

    pub async fn add_hotel(&self, request: &HotelRequest) -> Result<Hotel, ServiceError> {
        if !request.has_required_fields() {
            debug!(data = %request.to_log_json(), "required fields missing");
            return Err(ServiceError::MissingRequiredFields);
        }
        let hotel = Hotel::new(request);
        self.hotel_store.save_hotel(hotel.clone()).await?;
        debug!(hotel_id = %hotel.id, "successfully added hotel data");
        Ok(hotel)
    }

    pub async fn update_hotel(&self, request: &HotelRequest) -> Result<Hotel, ServiceError> {
        if !request.has_required_fields_for_update() {
            debug!(data = %request.to_log_json(), "required fields missing");
            return Err(ServiceError::MissingRequiredFields);
        }
        let id = request.id.as_deref().unwrap_or_default();
        let mut hotel = self.hotel_by_id(id).await?;
        hotel.apply(request);
        self.hotel_store.save_hotel(hotel.clone()).await?;
        debug!(hotel_id = %hotel.id, "successfully updated hotel data");
        Ok(hotel)
    }

    // Full listing, optionally narrowed by a case-insensitive name filter.
    pub async fn hotel_list(&self, search_term: Option<&str>) -> Result<Vec<Hotel>, ServiceError> {
        let hotels = self.hotel_store.all_hotels().await?;
        let hotels = match search_term {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                hotels
                    .into_iter()
                    .filter(|hotel| hotel.name.to_lowercase().contains(&term))
                    .collect()
            }
            _ => hotels,
        };
        debug!(count = hotels.len(), "successfully returned hotels");
        Ok(hotels)
    }

    pub async fn hotel_by_id(&self, id: &str) -> Result<Hotel, ServiceError> {
        self.hotel_store
            .hotel_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::HotelNotFound(id.to_string()))
    }

    // Location + pax count search: every hotel at the location is checked
    // against the allocation matcher over its own room set. Hotels with no
    // viable allocation are left out; a storage failure anywhere aborts
    // the whole query.
    pub async fn hotels_by_location_and_pax(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<HotelMatch>, ServiceError> {
        if !request.has_required_fields() {
            return Err(ServiceError::MissingRequiredFields);
        }

        let hotels = self.hotel_store.hotels_by_location(&request.location).await?;

        // Each hotel's room fetch is independent; fan them out together.
        let room_sets = try_join_all(
            hotels
                .iter()
                .map(|hotel| self.room_store.rooms_by_hotel(&hotel.id)),
        )
        .await?;

        let matches: Vec<HotelMatch> = hotels
            .into_iter()
            .zip(room_sets)
            .filter_map(|(hotel, rooms)| {
                let selected = match_rooms(&rooms, request.pax_count);
                if selected.is_empty() {
                    None
                } else {
                    Some(HotelMatch {
                        hotel,
                        rooms: selected,
                    })
                }
            })
            .collect();

        debug!(
            location = %request.location,
            pax_count = request.pax_count,
            matches = matches.len(),
            "successfully matched hotels for pax count"
        );
        Ok(matches)
    }
}

#[derive(Clone)]
pub struct RoomService {
    room_store: Arc<dyn RoomStore>,
    room_type_store: Arc<dyn RoomTypeStore>,
    hotel_service: HotelService,
}

impl RoomService {
    pub fn new(
        room_store: Arc<dyn RoomStore>,
        room_type_store: Arc<dyn RoomTypeStore>,
        hotel_service: HotelService,
    ) -> Self {
        Self {
            room_store,
            room_type_store,
            hotel_service,
        }
    }

    pub async fn add_room(&self, request: &RoomRequest) -> Result<Room, ServiceError> {
        if !request.has_required_fields() {
            debug!(data = %request.to_log_json(), "required fields missing");
            return Err(ServiceError::MissingRequiredFields);
        }
        let hotel = self.hotel_service.hotel_by_id(&request.hotel_id).await?;
        let room_type = self.room_type_by_id(&request.room_type_id).await?;

        // The hotel declares how many rooms it holds; adding past that is
        // rejected rather than silently grown.
        let existing = self.room_store.rooms_by_hotel(&hotel.id).await?;
        if existing.len() >= hotel.room_count as usize {
            return Err(ServiceError::RoomLimitReached(hotel.id));
        }

        let room = Room::new(request, &hotel, &room_type);
        self.room_store.save_room(room.clone()).await?;
        debug!(room_id = %room.id, "successfully added room data");
        Ok(room)
    }

    pub async fn update_room(&self, request: &RoomRequest) -> Result<Room, ServiceError> {
        if !request.has_required_fields_for_update() {
            debug!(data = %request.to_log_json(), "required fields missing");
            return Err(ServiceError::MissingRequiredFields);
        }
        let id = request.id.as_deref().unwrap_or_default();
        let mut room = self
            .room_store
            .room_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::RoomNotFound(id.to_string()))?;
        let hotel = self.hotel_service.hotel_by_id(&request.hotel_id).await?;
        let room_type = self.room_type_by_id(&request.room_type_id).await?;

        room.apply(request, &hotel, &room_type);
        self.room_store.save_room(room.clone()).await?;
        debug!(room_id = %room.id, "successfully updated room data");
        Ok(room)
    }

    pub async fn delete_room(&self, id: &str) -> Result<(), ServiceError> {
        self.room_store.delete_room(id).await?;
        debug!(room_id = %id, "successfully deleted room");
        Ok(())
    }

    pub async fn rooms_by_hotel(&self, hotel_id: &str) -> Result<Vec<Room>, ServiceError> {
        Ok(self.room_store.rooms_by_hotel(hotel_id).await?)
    }

    pub async fn add_room_type(&self, request: &RoomTypeRequest) -> Result<RoomType, ServiceError> {
        if !request.has_required_fields() {
            debug!(data = %request.to_log_json(), "required fields missing");
            return Err(ServiceError::MissingRequiredFields);
        }
        let room_type = RoomType::new(request);
        self.room_type_store.save_room_type(room_type.clone()).await?;
        debug!(room_type_id = %room_type.id, "successfully added room type");
        Ok(room_type)
    }

    pub async fn room_type_by_id(&self, id: &str) -> Result<RoomType, ServiceError> {
        self.room_type_store
            .room_type_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::RoomTypeNotFound(id.to_string()))
    }
}
