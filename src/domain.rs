// Domain entities for the hotel inventory: plain data records with
// id-based cross references (a room points at its hotel and room type by id).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::request::{HotelRequest, RoomRequest, RoomTypeRequest};

const HOTEL_ID_PREFIX: &str = "hid-";
const ROOM_ID_PREFIX: &str = "rid-";
const ROOM_TYPE_ID_PREFIX: &str = "rtid-";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub location: String,
    // Declared maximum number of rooms; add-room enforces it.
    pub room_count: u32,
}

impl Hotel {
    pub fn new(request: &HotelRequest) -> Self {
        Self {
            id: format!("{}{}", HOTEL_ID_PREFIX, Uuid::new_v4()),
            name: request.name.clone(),
            location: request.location.clone(),
            room_count: request.room_count,
        }
    }

    pub fn apply(&mut self, request: &HotelRequest) {
        self.name = request.name.clone();
        self.location = request.location.clone();
        self.room_count = request.room_count;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub room_no: String,
    pub hotel_id: String,
    pub room_type_id: String,
    pub max_people: u32,
    pub price: f64,
}

impl Room {
    pub fn new(request: &RoomRequest, hotel: &Hotel, room_type: &RoomType) -> Self {
        Self {
            id: format!("{}{}", ROOM_ID_PREFIX, Uuid::new_v4()),
            room_no: request.room_no.clone(),
            hotel_id: hotel.id.clone(),
            room_type_id: room_type.id.clone(),
            max_people: request.max_people,
            price: room_type.price_for(request.max_people),
        }
    }

    // Reassigns the room from the request, re-deriving the price from its
    // room type and capacity.
    pub fn apply(&mut self, request: &RoomRequest, hotel: &Hotel, room_type: &RoomType) {
        self.room_no = request.room_no.clone();
        self.hotel_id = hotel.id.clone();
        self.room_type_id = room_type.id.clone();
        self.max_people = request.max_people;
        self.price = room_type.price_for(request.max_people);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: String,
    pub name: String,
    pub base_amount: f64,
    pub amount_per_person: f64,
}

impl RoomType {
    pub fn new(request: &RoomTypeRequest) -> Self {
        Self {
            id: format!("{}{}", ROOM_TYPE_ID_PREFIX, Uuid::new_v4()),
            name: request.name.clone(),
            base_amount: request.base_amount,
            amount_per_person: request.amount_per_person,
        }
    }

    pub fn price_for(&self, max_people: u32) -> f64 {
        self.base_amount + self.amount_per_person * f64::from(max_people)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_type() -> RoomType {
        RoomType::new(&RoomTypeRequest {
            name: "Deluxe".to_string(),
            base_amount: 100.0,
            amount_per_person: 25.0,
        })
    }

    #[test]
    fn test_ids_carry_entity_prefixes() {
        let hotel = Hotel::new(&HotelRequest {
            id: None,
            name: "Hilltop".to_string(),
            location: "Colombo".to_string(),
            room_count: 10,
        });
        let rt = room_type();
        let room = Room::new(
            &RoomRequest {
                id: None,
                room_no: "R1".to_string(),
                hotel_id: hotel.id.clone(),
                room_type_id: rt.id.clone(),
                max_people: 2,
            },
            &hotel,
            &rt,
        );

        assert!(hotel.id.starts_with("hid-"));
        assert!(room.id.starts_with("rid-"));
        assert!(rt.id.starts_with("rtid-"));
    }

    #[test]
    fn test_room_price_derived_from_type_and_capacity() {
        let rt = room_type();
        assert_eq!(rt.price_for(2), 150.0);
        assert_eq!(rt.price_for(4), 200.0);
    }

    #[test]
    fn test_apply_rederives_price() {
        let hotel = Hotel::new(&HotelRequest {
            id: None,
            name: "Hilltop".to_string(),
            location: "Colombo".to_string(),
            room_count: 10,
        });
        let rt = room_type();
        let mut room = Room::new(
            &RoomRequest {
                id: None,
                room_no: "R1".to_string(),
                hotel_id: hotel.id.clone(),
                room_type_id: rt.id.clone(),
                max_people: 2,
            },
            &hotel,
            &rt,
        );

        room.apply(
            &RoomRequest {
                id: Some(room.id.clone()),
                room_no: "R1A".to_string(),
                hotel_id: hotel.id.clone(),
                room_type_id: rt.id.clone(),
                max_people: 3,
            },
            &hotel,
            &rt,
        );

        assert_eq!(room.room_no, "R1A");
        assert_eq!(room.price, 175.0);
    }
}
