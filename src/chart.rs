use crate::data::Assignment;
use crate::error::SeatingError;
use std::fmt;

/// Renders every assignment as a titled, bordered text grid.
///
/// The whole rows x cols grid of a room is drawn, so rooms with more than
/// `max_seats` seats are refused instead of rendered.
pub fn render(assignments: &[Assignment], max_seats: usize) -> Result<String, SeatingError> {
    for assignment in assignments {
        let seats = assignment
            .rows
            .checked_mul(assignment.cols)
            .filter(|seats| *seats <= max_seats);
        if seats.is_none() {
            return Err(SeatingError::ChartTooLarge {
                room: assignment.room_id.clone(),
                seats: assignment.rows.saturating_mul(assignment.cols),
                max: max_seats,
            });
        }
    }

    Ok(Chart(assignments).to_string())
}

struct Chart<'a>(&'a [Assignment]);

impl fmt::Display for Chart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, assignment) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            render_room(f, assignment)?;
        }
        Ok(())
    }
}

fn render_room(f: &mut fmt::Formatter<'_>, assignment: &Assignment) -> fmt::Result {
    let width = assignment
        .occupants
        .iter()
        .map(|id| id.chars().count())
        .max()
        .unwrap_or(0);
    let border = format!("{}+", "-".repeat(width + 2)).repeat(assignment.cols);

    writeln!(f, "{}", assignment.room_id)?;
    writeln!(f, "+{}", border)?;
    for row in assignment.grid() {
        write!(f, "|")?;
        for cell in row {
            write!(f, " {:<width$} |", cell.unwrap_or(""), width = width)?;
        }
        writeln!(f)?;
        writeln!(f, "+{}", border)?;
    }
    Ok(())
}
