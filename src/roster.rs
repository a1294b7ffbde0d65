use crate::data::{Person, Room};
use crate::error::SeatingError;
use log::info;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct PersonRecord {
    #[serde(rename = "Roll Number")]
    roll_number: String,
    #[serde(rename = "Department")]
    department: String,
}

#[derive(Debug, Deserialize)]
struct RoomRecord {
    #[serde(rename = "Room Number")]
    room_number: String,
    #[serde(rename = "Rows")]
    rows: String,
    #[serde(rename = "Cols")]
    cols: String,
}

/// Reads `Roll Number,Department` rows, in file order.
pub fn read_people<R: Read>(reader: R) -> Result<Vec<Person>, SeatingError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let people = csv_reader
        .deserialize::<PersonRecord>()
        .map(|record| {
            let record = record.map_err(|e| SeatingError::Csv {
                what: "people",
                source: e,
            })?;
            Ok(Person::new(record.roll_number, record.department))
        })
        .collect::<Result<Vec<_>, SeatingError>>()?;

    info!("Read {} people", people.len());
    Ok(people)
}

/// Reads `Room Number,Rows,Cols` rows, in file order.
///
/// Sizes are only checked for being integers here; sign checks happen when
/// the rooms are packed.
pub fn read_rooms<R: Read>(reader: R) -> Result<Vec<Room>, SeatingError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| SeatingError::Csv {
            what: "rooms",
            source: e,
        })?
        .clone();

    let mut rooms = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| SeatingError::Csv {
            what: "rooms",
            source: e,
        })?;
        let line = record.position().map_or(0, |position| position.line());
        let record: RoomRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| SeatingError::Csv {
                what: "rooms",
                source: e,
            })?;
        let rows = parse_count(&record.rows, "Rows", line)?;
        let cols = parse_count(&record.cols, "Cols", line)?;
        rooms.push(Room::new(record.room_number, rows, cols));
    }

    info!("Read {} rooms", rooms.len());
    Ok(rooms)
}

fn parse_count(value: &str, column: &str, line: u64) -> Result<i64, SeatingError> {
    value.parse().map_err(|_| SeatingError::InvalidRecord {
        line,
        reason: format!("{} must be an integer, got {:?}", column, value),
    })
}
