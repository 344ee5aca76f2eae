// Persistence seam for the inventory. The services only see these traits;
// the in-memory implementation below backs the tests and any embedded use.
//
// "Not found" is Ok(None) / an empty vec, never an error. StoreError is
// reserved for backend failure and aborts the whole calling operation.

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::collections::HashMap;
use thiserror::Error;

use crate::domain::{Hotel, Room, RoomType};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("storage failure: {0}")]
    Backend(String),
}

#[async_trait]
pub trait HotelStore: Send + Sync {
    async fn save_hotel(&self, hotel: Hotel) -> Result<(), StoreError>;

    async fn hotel_by_id(&self, id: &str) -> Result<Option<Hotel>, StoreError>;

    async fn all_hotels(&self) -> Result<Vec<Hotel>, StoreError>;

    // Exact-match location filter. An empty result is not an error.
    async fn hotels_by_location(&self, location: &str) -> Result<Vec<Hotel>, StoreError>;
}

#[async_trait]
pub trait RoomStore: Send + Sync {
    async fn save_room(&self, room: Room) -> Result<(), StoreError>;

    async fn room_by_id(&self, id: &str) -> Result<Option<Room>, StoreError>;

    // Rooms come back in insertion order; exact and band matches in the
    // allocation search surface in this order.
    async fn rooms_by_hotel(&self, hotel_id: &str) -> Result<Vec<Room>, StoreError>;

    async fn delete_room(&self, id: &str) -> Result<(), StoreError>;
}

#[async_trait]
pub trait RoomTypeStore: Send + Sync {
    async fn save_room_type(&self, room_type: RoomType) -> Result<(), StoreError>;

    async fn room_type_by_id(&self, id: &str) -> Result<Option<RoomType>, StoreError>;
}

// Concurrent in-memory store: one map per entity plus an insertion-order
// index of room ids per hotel, which DashMap iteration cannot provide.
#[derive(Default)]
pub struct InMemoryInventory {
    hotels: DashMap<String, Hotel>,
    rooms: DashMap<String, Room>,
    room_types: DashMap<String, RoomType>,
    room_order: RwLock<HashMap<String, Vec<String>>>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HotelStore for InMemoryInventory {
    async fn save_hotel(&self, hotel: Hotel) -> Result<(), StoreError> {
        self.hotels.insert(hotel.id.clone(), hotel);
        Ok(())
    }

    async fn hotel_by_id(&self, id: &str) -> Result<Option<Hotel>, StoreError> {
        Ok(self.hotels.get(id).map(|entry| entry.value().clone()))
    }

    async fn all_hotels(&self) -> Result<Vec<Hotel>, StoreError> {
        let mut hotels: Vec<Hotel> = self.hotels.iter().map(|entry| entry.value().clone()).collect();
        // DashMap iteration order is arbitrary; sort for reproducible listings.
        hotels.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(hotels)
    }

    async fn hotels_by_location(&self, location: &str) -> Result<Vec<Hotel>, StoreError> {
        let mut hotels: Vec<Hotel> = self
            .hotels
            .iter()
            .filter(|entry| entry.location == location)
            .map(|entry| entry.value().clone())
            .collect();
        hotels.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(hotels)
    }
}

#[async_trait]
impl RoomStore for InMemoryInventory {
    async fn save_room(&self, room: Room) -> Result<(), StoreError> {
        let mut order = self.room_order.write();
        let ids = order.entry(room.hotel_id.clone()).or_default();
        if !ids.contains(&room.id) {
            ids.push(room.id.clone());
        }
        drop(order);

        self.rooms.insert(room.id.clone(), room);
        Ok(())
    }

    async fn room_by_id(&self, id: &str) -> Result<Option<Room>, StoreError> {
        Ok(self.rooms.get(id).map(|entry| entry.value().clone()))
    }

    async fn rooms_by_hotel(&self, hotel_id: &str) -> Result<Vec<Room>, StoreError> {
        let order = self.room_order.read();
        let Some(ids) = order.get(hotel_id) else {
            return Ok(Vec::new());
        };
        let rooms = ids
            .iter()
            .filter_map(|id| self.rooms.get(id).map(|entry| entry.value().clone()))
            .collect();
        Ok(rooms)
    }

    async fn delete_room(&self, id: &str) -> Result<(), StoreError> {
        if let Some((_, room)) = self.rooms.remove(id) {
            let mut order = self.room_order.write();
            if let Some(ids) = order.get_mut(&room.hotel_id) {
                ids.retain(|room_id| room_id != id);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl RoomTypeStore for InMemoryInventory {
    async fn save_room_type(&self, room_type: RoomType) -> Result<(), StoreError> {
        self.room_types.insert(room_type.id.clone(), room_type);
        Ok(())
    }

    async fn room_type_by_id(&self, id: &str) -> Result<Option<RoomType>, StoreError> {
        Ok(self.room_types.get(id).map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(id: &str, location: &str) -> Hotel {
        Hotel {
            id: id.to_string(),
            name: format!("Hotel {}", id),
            location: location.to_string(),
            room_count: 10,
        }
    }

    fn room(id: &str, hotel_id: &str, max_people: u32) -> Room {
        Room {
            id: id.to_string(),
            room_no: format!("R-{}", id),
            hotel_id: hotel_id.to_string(),
            room_type_id: "rtid-1".to_string(),
            max_people,
            price: 100.0,
        }
    }

    #[tokio::test]
    async fn test_rooms_come_back_in_insertion_order() {
        let store = InMemoryInventory::new();
        store.save_hotel(hotel("hid-1", "Colombo")).await.unwrap();

        for id in ["rid-c", "rid-a", "rid-b"] {
            store.save_room(room(id, "hid-1", 2)).await.unwrap();
        }

        let rooms = store.rooms_by_hotel("hid-1").await.unwrap();
        let ids: Vec<&str> = rooms.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["rid-c", "rid-a", "rid-b"]);
    }

    #[tokio::test]
    async fn test_save_room_twice_keeps_single_slot() {
        let store = InMemoryInventory::new();
        store.save_room(room("rid-1", "hid-1", 2)).await.unwrap();
        store.save_room(room("rid-1", "hid-1", 3)).await.unwrap();

        let rooms = store.rooms_by_hotel("hid-1").await.unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].max_people, 3);
    }

    #[tokio::test]
    async fn test_delete_room_removes_it_from_the_hotel() {
        let store = InMemoryInventory::new();
        store.save_room(room("rid-1", "hid-1", 2)).await.unwrap();
        store.save_room(room("rid-2", "hid-1", 3)).await.unwrap();

        store.delete_room("rid-1").await.unwrap();

        assert!(store.room_by_id("rid-1").await.unwrap().is_none());
        let rooms = store.rooms_by_hotel("hid-1").await.unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, "rid-2");
    }

    #[tokio::test]
    async fn test_location_filter_is_exact_match() {
        let store = InMemoryInventory::new();
        store.save_hotel(hotel("hid-1", "Colombo")).await.unwrap();
        store.save_hotel(hotel("hid-2", "Kandy")).await.unwrap();
        store.save_hotel(hotel("hid-3", "Colombo")).await.unwrap();

        let hotels = store.hotels_by_location("Colombo").await.unwrap();
        let ids: Vec<&str> = hotels.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["hid-1", "hid-3"]);

        assert!(store.hotels_by_location("colombo").await.unwrap().is_empty());
        assert!(store.hotels_by_location("Galle").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rooms_for_unknown_hotel_is_empty_not_error() {
        let store = InMemoryInventory::new();
        assert!(store.rooms_by_hotel("hid-missing").await.unwrap().is_empty());
    }
}
