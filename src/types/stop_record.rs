use serde::{Deserialize, Serialize};
use validator::Validate;

/// Direction of travel, encoded by InfoPoint as a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "I")]
    Inbound,
    #[serde(rename = "O")]
    Outbound,
}

impl Direction {
    pub fn as_char(&self) -> char {
        match self {
            Direction::Inbound => 'I',
            Direction::Outbound => 'O',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'I' => Ok(Direction::Inbound),
            'O' => Ok(Direction::Outbound),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Direction::Inbound => write!(f, "Inbound"),
            Direction::Outbound => write!(f, "Outbound"),
        }
    }
}

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct Coordinate {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be within -90..90"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be within -180..180"))]
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    pub fn as_pair(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

/// Segment between two points drawn across the road at a stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitLine(pub Coordinate, pub Coordinate);

impl HitLine {
    pub const fn new(start: Coordinate, end: Coordinate) -> Self {
        HitLine(start, end)
    }

    pub fn start(&self) -> &Coordinate {
        &self.0
    }

    pub fn end(&self) -> &Coordinate {
        &self.1
    }

    /// `[[lat, lon], [lat, lon]]`
    pub fn to_pairs(&self) -> [[f64; 2]; 2] {
        [self.0.as_pair(), self.1.as_pair()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopRecord {
    /// InfoPoint stop id.
    pub id: u32,
    pub description: &'static str,
    pub direction: Direction,
    pub hit_line: HitLine,
}
