// Outbound response shapes: hotel and room summaries plus the generic
// envelope every endpoint-facing caller serializes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Hotel, Room};
use crate::service::HotelMatch;

#[derive(Debug, Clone, Serialize)]
pub struct RoomSummary {
    pub id: String,
    pub room_no: String,
    pub max_people: u32,
    pub price: f64,
}

impl From<&Room> for RoomSummary {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.clone(),
            room_no: room.room_no.clone(),
            max_people: room.max_people,
            price: room.price,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HotelSummary {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms: Option<Vec<RoomSummary>>,
}

impl From<&Hotel> for HotelSummary {
    fn from(hotel: &Hotel) -> Self {
        Self {
            id: hotel.id.clone(),
            name: hotel.name.clone(),
            location: hotel.location.clone(),
            rooms: None,
        }
    }
}

impl From<&HotelMatch> for HotelSummary {
    fn from(hotel_match: &HotelMatch) -> Self {
        Self {
            id: hotel_match.hotel.id.clone(),
            name: hotel_match.hotel.name.clone(),
            location: hotel_match.hotel.location.clone(),
            rooms: Some(hotel_match.rooms.iter().map(RoomSummary::from).collect()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HotelListResponse {
    pub hotel_list: Vec<HotelSummary>,
}

impl HotelListResponse {
    pub fn from_hotels(hotels: &[Hotel]) -> Self {
        Self {
            hotel_list: hotels.iter().map(HotelSummary::from).collect(),
        }
    }

    // Search results: every entry carries the allocated room list.
    pub fn from_matches(matches: &[HotelMatch]) -> Self {
        Self {
            hotel_list: matches.iter().map(HotelSummary::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseWrapper<T: Serialize> {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: DateTime<Utc>,
}

impl<T: Serialize> ResponseWrapper<T> {
    pub fn success(message: &str, data: Option<T>) -> Self {
        Self {
            status: "SUCCESS".to_string(),
            message: message.to_string(),
            data,
            timestamp: Utc::now(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            status: "ERROR".to_string(),
            message: message.to_string(),
            data: None,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel() -> Hotel {
        Hotel {
            id: "hid-1".to_string(),
            name: "Hilltop".to_string(),
            location: "Colombo".to_string(),
            room_count: 10,
        }
    }

    fn room(id: &str, max_people: u32) -> Room {
        Room {
            id: id.to_string(),
            room_no: format!("R-{}", id),
            hotel_id: "hid-1".to_string(),
            room_type_id: "rtid-1".to_string(),
            max_people,
            price: 150.0,
        }
    }

    #[test]
    fn test_plain_hotel_listing_omits_rooms() {
        let response = HotelListResponse::from_hotels(&[hotel()]);
        let json = serde_json::to_value(&response).unwrap();
        let entry = &json["hotel_list"][0];
        assert_eq!(entry["id"], "hid-1");
        assert!(entry.get("rooms").is_none());
    }

    #[test]
    fn test_match_listing_carries_room_summaries() {
        let matches = vec![HotelMatch {
            hotel: hotel(),
            rooms: vec![room("rid-1", 3), room("rid-2", 2)],
        }];
        let response = HotelListResponse::from_matches(&matches);
        let json = serde_json::to_value(&response).unwrap();
        let rooms = &json["hotel_list"][0]["rooms"];
        assert_eq!(rooms.as_array().unwrap().len(), 2);
        assert_eq!(rooms[0]["room_no"], "R-rid-1");
        assert_eq!(rooms[0]["max_people"], 3);
        assert_eq!(rooms[1]["price"], 150.0);
    }

    #[test]
    fn test_wrapper_skips_absent_data() {
        let wrapper: ResponseWrapper<HotelListResponse> =
            ResponseWrapper::success("Successfully added.", None);
        let json = serde_json::to_value(&wrapper).unwrap();
        assert_eq!(json["status"], "SUCCESS");
        assert!(json.get("data").is_none());
        assert!(json.get("timestamp").is_some());
    }
}
