// Inbound request payloads with field-presence checks. Validation happens
// before any store call; the allocation matcher itself assumes it already ran.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HotelRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub location: String,
    pub room_count: u32,
}

impl HotelRequest {
    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty() && !self.location.is_empty() && self.room_count > 0
    }

    pub fn has_required_fields_for_update(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty()) && self.has_required_fields()
    }

    pub fn to_log_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub room_no: String,
    pub hotel_id: String,
    pub room_type_id: String,
    pub max_people: u32,
}

impl RoomRequest {
    pub fn has_required_fields(&self) -> bool {
        !self.hotel_id.is_empty()
            && !self.room_no.is_empty()
            && !self.room_type_id.is_empty()
            && self.max_people > 0
    }

    pub fn has_required_fields_for_update(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty()) && self.has_required_fields()
    }

    pub fn to_log_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomTypeRequest {
    pub name: String,
    pub base_amount: f64,
    pub amount_per_person: f64,
}

impl RoomTypeRequest {
    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty() && self.base_amount > 0.0 && self.amount_per_person > 0.0
    }

    pub fn to_log_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

// Location + pax count search parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    pub location: String,
    pub pax_count: u32,
}

impl SearchRequest {
    pub fn has_required_fields(&self) -> bool {
        !self.location.is_empty() && self.pax_count > 0
    }
}
