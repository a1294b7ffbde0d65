use thiserror::Error;

/// Everything that can stop a seating run. No partial chart is produced
/// alongside any of these.
#[derive(Error, Debug)]
pub enum SeatingError {
    #[error("room {room} has an invalid size of {rows}x{cols}")]
    InvalidRoomCapacity { room: String, rows: i64, cols: i64 },
    #[error("not enough seats: {unseated} people left without a room")]
    CapacityExceeded { unseated: usize },
    #[error("total room capacity is too large to count")]
    CapacityOverflow,
    #[error("room {room} has {seats} seats, charts are limited to {max}")]
    ChartTooLarge {
        room: String,
        seats: usize,
        max: usize,
    },
    #[error("could not read {what}: {source}")]
    Csv {
        what: &'static str,
        #[source]
        source: csv::Error,
    },
    #[error("invalid record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },
}
