use crate::types::stop_record::{Coordinate, Direction, HitLine, StopRecord};

/// Base address of the BJCTA InfoPoint real-time API.
pub const URL: &str = "https://realtimebjcta.availtec.com/InfoPoint";

/// Watched stops, in the order they are reported.
pub const STOPS: [StopRecord; 4] = [
    StopRecord {
        id: 2492,
        description: "10th & 28th Inbound",
        direction: Direction::Inbound,
        hit_line: HitLine::new(
            Coordinate::new(33.508138, -86.787964),
            Coordinate::new(33.508757, -86.785763),
        ),
    },
    StopRecord {
        id: 1431,
        description: "20th & 1st S Outbound",
        direction: Direction::Outbound,
        hit_line: HitLine::new(
            Coordinate::new(33.511321, -86.804249),
            Coordinate::new(33.511733, -86.803235),
        ),
    },
    StopRecord {
        id: 2113,
        description: "20th & 3rd S Inbound",
        direction: Direction::Inbound,
        hit_line: HitLine::new(
            Coordinate::new(33.509628, -86.802964),
            Coordinate::new(33.510005, -86.802213),
        ),
    },
    StopRecord {
        id: 1437,
        description: "20th & 10th S Outbound",
        direction: Direction::Outbound,
        hit_line: HitLine::new(
            Coordinate::new(33.501799, -86.797381),
            Coordinate::new(33.501941, -86.797061),
        ),
    },
];

pub fn find_stop(id: u32) -> Option<&'static StopRecord> {
    STOPS.iter().find(|s| s.id == id)
}

pub fn stops_in_direction(direction: Direction) -> impl Iterator<Item = &'static StopRecord> {
    STOPS.iter().filter(move |s| s.direction == direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbound_10th_and_28th() {
        let stop = find_stop(2492).expect("stop 2492 is configured");

        assert_eq!(stop.description, "10th & 28th Inbound");
        assert_eq!(stop.direction.as_char(), 'I');
        assert_eq!(
            stop.hit_line.to_pairs(),
            [[33.508138, -86.787964], [33.508757, -86.785763]]
        );
    }

    #[test]
    fn table_keeps_declared_order() {
        let ids: Vec<u32> = STOPS.iter().map(|s| s.id).collect();

        assert_eq!(ids, vec![2492, 1431, 2113, 1437]);
    }

    #[test]
    fn unknown_stop() {
        assert!(find_stop(0).is_none());
        assert!(find_stop(9999).is_none());
    }

    #[test]
    fn filter_by_direction() {
        let outbound: Vec<u32> = stops_in_direction(Direction::Outbound)
            .map(|s| s.id)
            .collect();

        assert_eq!(outbound, vec![1431, 1437]);
        assert!(stops_in_direction(Direction::Inbound)
            .all(|s| s.description.ends_with("Inbound")));
    }

    #[test]
    fn endpoint_is_https() {
        let url = reqwest::Url::parse(URL).unwrap();

        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("realtimebjcta.availtec.com"));
    }
}
