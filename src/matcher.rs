// Room allocation matching: given one hotel's room pool and a required pax
// count, pick the rooms to offer. Three tiers, first non-empty result wins:
//
//   1. every room whose capacity equals the pax count exactly;
//   2. every room whose capacity sits in (pax, pax + CAPACITY_SLACK];
//   3. a greedy multi-room combination summing exactly to the pax count.
//
// The combination pass is a single greedy descending walk, not a subset-sum
// search. It can miss a feasible combination (it never backtracks after
// overshooting); that is the intended behavior and callers rely on it.

use crate::domain::Room;

// Tolerated over-capacity when no exact-size room exists.
pub const CAPACITY_SLACK: u32 = 2;

// Returns the rooms to offer for `pax_count`, or an empty list when the pool
// cannot satisfy it. Pure and side-effect free; safe to call concurrently
// for different hotels. Tier 1 and 2 results keep the input order.
pub fn match_rooms(rooms: &[Room], pax_count: u32) -> Vec<Room> {
    let exact: Vec<Room> = rooms
        .iter()
        .filter(|room| room.max_people == pax_count)
        .cloned()
        .collect();
    if !exact.is_empty() {
        return exact;
    }
    possible_rooms_for_pax_count(rooms, pax_count)
}

// Tier 2 and 3: the slack band, then the anchored greedy combination.
fn possible_rooms_for_pax_count(rooms: &[Room], pax_count: u32) -> Vec<Room> {
    let band: Vec<Room> = rooms
        .iter()
        .filter(|room| {
            room.max_people > pax_count && room.max_people <= pax_count + CAPACITY_SLACK
        })
        .cloned()
        .collect();
    if !band.is_empty() {
        return band;
    }

    // Anchor: largest capacity strictly below the pax count, ties broken by
    // smallest room id so the pick is stable across input orders.
    let anchor = rooms
        .iter()
        .filter(|room| room.max_people < pax_count)
        .max_by(|a, b| {
            a.max_people
                .cmp(&b.max_people)
                .then_with(|| b.id.cmp(&a.id))
        });

    match anchor {
        Some(anchor) => room_combination(anchor, rooms, pax_count),
        None => Vec::new(),
    }
}

// Greedy combination seeded with the anchor: walk the remaining rooms in
// descending capacity order (ties by ascending id) and take any room that
// does not push the running total past the pax count. Only an exact total
// is returned; anything else is discarded whole.
fn room_combination(anchor: &Room, rooms: &[Room], pax_count: u32) -> Vec<Room> {
    let mut selected = vec![anchor.clone()];
    let mut total = anchor.max_people;

    let mut descending: Vec<&Room> = rooms.iter().filter(|room| room.id != anchor.id).collect();
    descending.sort_by(|a, b| {
        b.max_people
            .cmp(&a.max_people)
            .then_with(|| a.id.cmp(&b.id))
    });

    for room in descending {
        if total + room.max_people <= pax_count {
            selected.push(room.clone());
            total += room.max_people;
            if total == pax_count {
                break;
            }
        }
    }

    if total != pax_count {
        return Vec::new();
    }
    selected
}
