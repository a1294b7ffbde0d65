use crate::data::{Assignment, PersonId, Room};
use crate::error::SeatingError;
use log::{debug, trace, warn};

/// Packs an interleaved sequence into rooms, in room order, filling each room
/// before moving to the next.
///
/// Every room is validated before anything is packed. Rooms that end up with
/// no occupants (zero capacity, or reached after everyone is seated) are not
/// emitted. If people remain once the last room is full the whole run fails
/// with [`SeatingError::CapacityExceeded`] carrying the exact shortfall.
pub fn pack(sequence: Vec<PersonId>, rooms: &[Room]) -> Result<Vec<Assignment>, SeatingError> {
    let capacities = rooms
        .iter()
        .map(Room::capacity)
        .collect::<Result<Vec<_>, _>>()?;

    let mut remaining = sequence.into_iter().peekable();
    let mut assignments = Vec::new();

    for (room, capacity) in rooms.iter().zip(capacities) {
        if remaining.peek().is_none() {
            break;
        }
        if capacity == 0 {
            trace!("Skipping room {} with no seats", room.id);
            continue;
        }

        let occupants: Vec<PersonId> = remaining.by_ref().take(capacity).collect();
        let assignment = Assignment {
            room_id: room.id.clone(),
            rows: room.rows as usize,
            cols: room.cols as usize,
            occupants,
        };
        debug!("Filled {}", assignment);
        assignments.push(assignment);
    }

    let unseated = remaining.count();
    if unseated > 0 {
        warn!(
            "Ran out of rooms after {} assignments with {} people unseated",
            assignments.len(),
            unseated
        );
        return Err(SeatingError::CapacityExceeded { unseated });
    }

    Ok(assignments)
}

/// Sum of all room capacities, failing on invalid rooms or if the sum overflows.
pub fn total_capacity(rooms: &[Room]) -> Result<usize, SeatingError> {
    rooms.iter().try_fold(0usize, |total, room| {
        total
            .checked_add(room.capacity()?)
            .ok_or(SeatingError::CapacityOverflow)
    })
}
