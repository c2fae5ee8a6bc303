use serde::{Deserialize, Serialize};

use super::stop_record::{Direction, StopRecord};

/// Wire shape of a configured stop.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct StopResponseStop {
    pub id: u32,
    pub description: String,
    pub direction: Direction,
    pub hit_line: [[f64; 2]; 2],
}

impl From<&StopRecord> for StopResponseStop {
    fn from(stop: &StopRecord) -> Self {
        StopResponseStop {
            id: stop.id,
            description: stop.description.to_string(),
            direction: stop.direction,
            hit_line: stop.hit_line.to_pairs(),
        }
    }
}
