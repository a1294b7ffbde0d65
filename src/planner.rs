use crate::data::{SeatingInput, SeatingOutput};
use crate::error::SeatingError;
use crate::{interleaver, packer};
use log::info;
use std::time::Instant;

/// Builds the seating chart: interleave departments, then pack rooms in order.
pub fn plan(input: &SeatingInput) -> Result<SeatingOutput, SeatingError> {
    let start_time = Instant::now();
    info!(
        "Planning seats for {} people across {} rooms...",
        input.people.len(),
        input.rooms.len()
    );

    let departments = interleaver::departments(&input.people);
    let sequence = interleaver::interleave(&input.people);
    let assignments = packer::pack(sequence, &input.rooms)?;

    let total_capacity = packer::total_capacity(&input.rooms)?;
    let total_seated = assignments.iter().map(|a| a.occupants.len()).sum();

    info!(
        "Seated {} of {} seats in {} rooms in {:.2?}",
        total_seated,
        total_capacity,
        assignments.len(),
        start_time.elapsed()
    );

    Ok(SeatingOutput {
        assignments,
        departments,
        total_seated,
        total_capacity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Person, PersonId, Room};
    use itertools::Itertools;

    fn input(people: &[(&str, &str)], rooms: &[(&str, i64, i64)]) -> SeatingInput {
        SeatingInput {
            people: people.iter().map(|(id, d)| Person::new(*id, *d)).collect(),
            rooms: rooms.iter().map(|(id, r, c)| Room::new(*id, *r, *c)).collect(),
        }
    }

    #[test]
    fn worked_example() {
        let input = input(
            &[("A1", "CS"), ("A2", "CS"), ("B1", "EE")],
            &[("R1", 1, 2), ("R2", 1, 1)],
        );
        let output = plan(&input).unwrap();

        let rooms: Vec<(&str, Vec<&str>)> = output
            .assignments
            .iter()
            .map(|a| {
                (
                    a.room_id.as_str(),
                    a.occupants.iter().map(String::as_str).collect(),
                )
            })
            .collect();
        assert_eq!(rooms, vec![("R1", vec!["A1", "B1"]), ("R2", vec!["A2"])]);
        assert_eq!(output.departments, vec!["CS", "EE"]);
        assert_eq!(output.total_seated, 3);
        assert_eq!(output.total_capacity, 3);
    }

    #[test]
    fn too_many_people_fails_with_shortfall() {
        let input = input(
            &[("a", "CS"), ("b", "EE"), ("c", "ME")],
            &[("R1", 1, 1), ("R2", 1, 1)],
        );
        let err = plan(&input).unwrap_err();
        assert!(matches!(err, SeatingError::CapacityExceeded { unseated: 1 }));
        assert_eq!(
            err.to_string(),
            "not enough seats: 1 people left without a room"
        );
    }

    #[test]
    fn empty_roster_plans_nothing() {
        let output = plan(&input(&[], &[("R1", 2, 2)])).unwrap();
        assert!(output.assignments.is_empty());
        assert_eq!(output.total_seated, 0);
        assert_eq!(output.total_capacity, 4);
    }

    #[test]
    fn huge_rooms_fail_instead_of_overflowing_the_total() {
        let input = input(
            &[("a", "CS")],
            &[("R1", i64::MAX, 2), ("R2", i64::MAX, 2)],
        );
        let err = plan(&input).unwrap_err();
        assert!(matches!(err, SeatingError::CapacityOverflow));
    }

    #[test]
    fn everyone_is_seated_exactly_once() {
        let depts = ["CS", "EE", "ME", "CE", "BIO"];
        let people: Vec<(String, &str)> = (0..53)
            .map(|i| (format!("R{i:03}"), depts[(i * i + 3) % depts.len()]))
            .collect();
        let people_refs: Vec<(&str, &str)> =
            people.iter().map(|(id, d)| (id.as_str(), *d)).collect();
        let input = input(
            &people_refs,
            &[("L1", 3, 4), ("L2", 0, 9), ("L3", 5, 5), ("L4", 4, 6)],
        );
        let output = plan(&input).unwrap();

        let seated: Vec<&PersonId> = output
            .assignments
            .iter()
            .flat_map(|a| &a.occupants)
            .sorted()
            .collect();
        let expected: Vec<&PersonId> = input.people.iter().map(|p| &p.id).sorted().collect();
        assert_eq!(seated, expected);

        let order: Vec<&str> = output.assignments.iter().map(|a| a.room_id.as_str()).collect();
        assert_eq!(order, vec!["L1", "L3", "L4"]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let input = input(
            &[("x1", "ME"), ("y1", "CS"), ("x2", "ME"), ("z1", "EE"), ("y2", "CS")],
            &[("R1", 2, 2), ("R2", 1, 3)],
        );
        let first = serde_json::to_string(&plan(&input).unwrap()).unwrap();
        for _ in 0..5 {
            assert_eq!(serde_json::to_string(&plan(&input).unwrap()).unwrap(), first);
        }
    }
}
