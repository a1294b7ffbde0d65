use crate::data::{Department, Person, PersonId};
use itertools::Itertools;
use log::{debug, trace};
use std::collections::{HashMap, VecDeque};

/// Distinct department labels in the fixed visiting order (lexicographic).
pub fn departments(people: &[Person]) -> Vec<Department> {
    people
        .iter()
        .map(|p| p.department.clone())
        .unique()
        .sorted()
        .collect()
}

/// Round-robins people across departments.
///
/// Each sweep visits the departments in lexicographic order and takes the next
/// person from every department that still has someone queued. Within a
/// department, input order is kept. Duplicate ids are passed through as-is.
pub fn interleave(people: &[Person]) -> Vec<PersonId> {
    let mut queues: HashMap<&str, VecDeque<&PersonId>> = people
        .iter()
        .map(|p| (p.department.as_str(), &p.id))
        .into_group_map()
        .into_iter()
        .map(|(department, ids)| (department, VecDeque::from(ids)))
        .collect();
    let order: Vec<&str> = queues.keys().copied().sorted().collect();
    debug!(
        "Interleaving {} people across {} departments",
        people.len(),
        order.len()
    );

    let mut sequence = Vec::with_capacity(people.len());
    let mut sweep = 0;
    while sequence.len() < people.len() {
        sweep += 1;
        for department in &order {
            if let Some(id) = queues.get_mut(department).and_then(VecDeque::pop_front) {
                sequence.push(id.clone());
            }
        }
        trace!("sweep {} done, {} people placed", sweep, sequence.len());
    }

    sequence
}
