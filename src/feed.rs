//! Passenger feed: reading records from a file or generating them
//!
//! A feed file holds one `arrival,route,duration` record per line. Records
//! that can't be parsed are skipped; the simulation only ever sees
//! well-formed passengers, sorted by arrival tick.

use anyhow::{Context, Result};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use std::fs;
use std::path::Path;

use crate::simulation::{Passenger, Route, RouteTag};

/// Tag given to records whose route field is blank
const BLANK_ROUTE: char = '?';

/// Read and parse a feed file
pub fn read_feed(path: &Path) -> Result<Vec<Passenger>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Unable to open input file {}", path.display()))?;
    let passengers = parse_feed(&text);
    info!(
        "Loaded {} passengers from {}",
        passengers.len(),
        path.display()
    );
    Ok(passengers)
}

/// Parse feed text, skipping malformed lines, and sort by arrival tick
///
/// The sort is stable so passengers arriving on the same tick keep their
/// file order.
pub fn parse_feed(text: &str) -> Vec<Passenger> {
    let mut passengers: Vec<Passenger> = text
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.replace('\r', "");
            if line.trim().is_empty() {
                return None;
            }
            let parsed = parse_record(&line);
            if parsed.is_none() {
                debug!("Skipping malformed feed line {}: {:?}", index + 1, line);
            }
            parsed
        })
        .collect();

    passengers.sort_by_key(|p| p.arrival_tick);
    passengers
}

/// Parse a single `arrival,route[,duration]` record
///
/// A missing duration means 0 and only the first character of the route
/// field counts.
pub fn parse_record(line: &str) -> Option<Passenger> {
    let mut fields = line.split(',');
    let arrival = fields.next()?.trim();
    let route = fields.next()?.trim();
    let duration = fields.next().map(str::trim).unwrap_or("");

    let arrival_tick = arrival.parse::<u32>().ok()?;
    let boarding_duration = if duration.is_empty() {
        0
    } else {
        duration.parse::<u32>().ok()?
    };
    let tag = RouteTag::from_code(route.chars().next().unwrap_or(BLANK_ROUTE));

    Some(Passenger {
        tag,
        boarding_duration,
        arrival_tick,
    })
}

/// Generate a reproducible feed of `count` passengers arriving within the
/// first `span` ticks
pub fn generate_feed(seed: u64, count: usize, span: u32) -> Vec<Passenger> {
    let mut rng = StdRng::seed_from_u64(seed);
    let span = span.max(1);

    let mut passengers: Vec<Passenger> = (0..count)
        .map(|_| {
            let route = Route::ALL[rng.random_range(0..Route::ALL.len())];
            let boarding_duration = rng.random_range(1..=4);
            let arrival_tick = rng.random_range(0..span);
            Passenger::new(route, boarding_duration, arrival_tick)
        })
        .collect();

    passengers.sort_by_key(|p| p.arrival_tick);
    passengers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_fields() {
        let p = parse_record(" 3 , L , 2 ").unwrap();
        assert_eq!(p.arrival_tick, 3);
        assert_eq!(p.tag, RouteTag::Known(Route::Long));
        assert_eq!(p.boarding_duration, 2);
    }

    #[test]
    fn test_parse_record_missing_duration_is_zero() {
        let p = parse_record("0,S").unwrap();
        assert_eq!(p.boarding_duration, 0);
    }

    #[test]
    fn test_parse_record_uses_first_route_character() {
        let p = parse_record("1,City,2").unwrap();
        assert_eq!(p.tag, RouteTag::Known(Route::City));

        let p = parse_record("1,s,2").unwrap();
        assert_eq!(p.tag, RouteTag::Unrecognized('s'));

        let p = parse_record("1, ,2").unwrap();
        assert_eq!(p.tag, RouteTag::Unrecognized(BLANK_ROUTE));
    }

    #[test]
    fn test_parse_record_rejects_malformed() {
        assert!(parse_record("").is_none());
        assert!(parse_record("7").is_none());
        assert!(parse_record("x,S,1").is_none());
        assert!(parse_record("-1,S,1").is_none());
        assert!(parse_record("1,S,abc").is_none());
    }

    #[test]
    fn test_parse_feed_skips_bad_lines_and_sorts() {
        let text = "2,C,1\r\n\nbad line\n0,S,3\n2,L,1\n1,X,2\n";
        let feed = parse_feed(text);

        let ticks: Vec<u32> = feed.iter().map(|p| p.arrival_tick).collect();
        assert_eq!(ticks, vec![0, 1, 2, 2]);

        // Same-tick records keep file order
        assert_eq!(feed[2].tag, RouteTag::Known(Route::City));
        assert_eq!(feed[3].tag, RouteTag::Known(Route::Long));
        assert_eq!(feed[1].tag, RouteTag::Unrecognized('X'));
    }

    #[test]
    fn test_read_feed_missing_file_fails() {
        let err = read_feed(Path::new("/nonexistent/boarding_sim/feed.txt")).unwrap_err();
        assert!(format!("{:#}", err).contains("Unable to open input file"));
    }

    #[test]
    fn test_generate_feed_is_reproducible_and_sorted() {
        let a = generate_feed(7, 50, 20);
        let b = generate_feed(7, 50, 20);
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
        assert!(a.windows(2).all(|w| w[0].arrival_tick <= w[1].arrival_tick));
        assert!(a.iter().all(|p| p.arrival_tick < 20 && p.tag.route().is_some()));
    }
}
