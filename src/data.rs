use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SeatingError;

// Type aliases for clarity
pub type PersonId = String;
pub type RoomId = String;
pub type Department = String;

/// A person to be seated, tagged with the department used for interleaving.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Person {
    pub id: PersonId,
    pub department: Department,
}

impl Person {
    pub fn new(id: impl Into<PersonId>, department: impl Into<Department>) -> Self {
        Person {
            id: id.into(),
            department: department.into(),
        }
    }
}

/// A physical room laid out as a rows x cols grid of seats.
///
/// Counts are signed so that malformed input survives deserialization and
/// gets rejected by [`Room::capacity`] instead of by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Room {
    pub id: RoomId,
    pub rows: i64,
    pub cols: i64,
}

impl Room {
    pub fn new(id: impl Into<RoomId>, rows: i64, cols: i64) -> Self {
        Room {
            id: id.into(),
            rows,
            cols,
        }
    }

    pub fn capacity(&self) -> Result<usize, SeatingError> {
        let invalid = || SeatingError::InvalidRoomCapacity {
            room: self.id.clone(),
            rows: self.rows,
            cols: self.cols,
        };
        let rows = usize::try_from(self.rows).map_err(|_| invalid())?;
        let cols = usize::try_from(self.cols).map_err(|_| invalid())?;
        rows.checked_mul(cols).ok_or_else(invalid)
    }
}

/// The complete input for a seating run.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeatingInput {
    pub people: Vec<Person>,
    pub rooms: Vec<Room>,
}

/// One occupied seat of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat<'a> {
    pub row: usize,
    pub col: usize,
    pub person_id: &'a str,
}

/// A room together with the people seated in it, in interleaved order.
///
/// Occupant `i` sits at `(i / cols, i % cols)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub room_id: RoomId,
    pub rows: usize,
    pub cols: usize,
    pub occupants: Vec<PersonId>,
}

impl Assignment {
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    pub fn seats(&self) -> impl Iterator<Item = Seat<'_>> {
        self.occupants.iter().enumerate().map(|(i, person_id)| {
            let (row, col) = self.position(i);
            Seat {
                row,
                col,
                person_id,
            }
        })
    }

    /// Full rows x cols grid; seats past the last occupant are `None`.
    pub fn grid(&self) -> Vec<Vec<Option<&str>>> {
        let mut grid = vec![vec![None; self.cols]; self.rows];
        for seat in self.seats() {
            if let Some(cell) = grid.get_mut(seat.row).and_then(|row| row.get_mut(seat.col)) {
                *cell = Some(seat.person_id);
            }
        }
        grid
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}x{}): {}/{} seated",
            self.room_id,
            self.rows,
            self.cols,
            self.occupants.len(),
            self.rows * self.cols
        )
    }
}

/// The final output of the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatingOutput {
    pub assignments: Vec<Assignment>,
    pub departments: Vec<Department>,
    pub total_seated: usize,
    pub total_capacity: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_rows_times_cols() {
        assert_eq!(Room::new("R1", 3, 4).capacity().unwrap(), 12);
        assert_eq!(Room::new("R0", 0, 4).capacity().unwrap(), 0);
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        let err = Room::new("R1", -1, 4).capacity().unwrap_err();
        assert!(matches!(
            err,
            SeatingError::InvalidRoomCapacity { ref room, rows: -1, cols: 4 } if room == "R1"
        ));
        assert!(Room::new("R2", 2, -3).capacity().is_err());
    }

    #[test]
    fn overflowing_capacity_is_rejected() {
        assert!(Room::new("huge", i64::MAX, i64::MAX).capacity().is_err());
    }

    #[test]
    fn grid_is_row_major_with_empty_tail() {
        let assignment = Assignment {
            room_id: "R1".to_string(),
            rows: 2,
            cols: 3,
            occupants: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        };

        assert_eq!(assignment.position(3), (1, 0));
        assert_eq!(
            assignment.grid(),
            vec![
                vec![Some("a"), Some("b"), Some("c")],
                vec![Some("d"), None, None],
            ]
        );
        let last = assignment.seats().last().unwrap();
        assert_eq!((last.row, last.col, last.person_id), (1, 0, "d"));
    }

    #[test]
    fn assignment_serializes_camel_case() {
        let assignment = Assignment {
            room_id: "R1".to_string(),
            rows: 1,
            cols: 2,
            occupants: vec!["a".into()],
        };
        let json = serde_json::to_value(&assignment).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"roomId": "R1", "rows": 1, "cols": 2, "occupants": ["a"]})
        );
    }
}
