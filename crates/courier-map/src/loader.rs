//! Street map file loader.
//!
//! # File format
//!
//! A sequence of street records:
//!
//! ```text
//! <street name>
//! <segment count>
//! <startLat> <startLon> <endLat> <endLon>   (repeated segment-count times)
//! ```
//!
//! Coordinate tokens are whitespace-delimited and retained in their original
//! textual form — two records naming the same intersection produce equal
//! `GeoCoord`s because equality is defined over the text (see
//! `courier_core::geo`).  Blank lines between records are tolerated.

use std::io::BufRead;
use std::path::Path;

use courier_core::GeoCoord;

use crate::error::{MapError, MapResult};
use crate::network::{StreetNetwork, StreetNetworkBuilder};

/// Load a street network from a map file on disk.
pub fn load_streets(path: &Path) -> MapResult<StreetNetwork> {
    let file = std::fs::File::open(path).map_err(MapError::Io)?;
    load_streets_reader(std::io::BufReader::new(file))
}

/// Like [`load_streets`] but accepts any `BufRead` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from embedded
/// data.
pub fn load_streets_reader<R: BufRead>(reader: R) -> MapResult<StreetNetwork> {
    let mut builder = StreetNetworkBuilder::new();
    let mut lines = reader.lines().enumerate();

    while let Some((_, line)) = lines.next() {
        let line = line?;
        let name = line.trim();
        if name.is_empty() {
            continue;
        }

        let (count_no, count_line) = match lines.next() {
            Some((n, l)) => (n, l?),
            None => {
                return Err(MapError::Parse(format!(
                    "street {name:?} is missing its segment count"
                )));
            }
        };
        let count: usize = count_line.trim().parse().map_err(|_| {
            MapError::Parse(format!(
                "line {}: invalid segment count {:?}",
                count_no + 1,
                count_line.trim()
            ))
        })?;

        for _ in 0..count {
            let (seg_no, seg_line) = match lines.next() {
                Some((n, l)) => (n, l?),
                None => {
                    return Err(MapError::Parse(format!(
                        "street {name:?} is truncated: expected {count} segment lines"
                    )));
                }
            };
            let mut tokens = seg_line.split_whitespace();
            let (start_lat, start_lon, end_lat, end_lon) =
                match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
                    (Some(a), Some(b), Some(c), Some(d)) => (a, b, c, d),
                    _ => {
                        return Err(MapError::Parse(format!(
                            "line {}: expected 4 coordinate tokens",
                            seg_no + 1
                        )));
                    }
                };

            let start = GeoCoord::new(start_lat, start_lon)
                .map_err(|e| MapError::Parse(format!("line {}: {e}", seg_no + 1)))?;
            let end = GeoCoord::new(end_lat, end_lon)
                .map_err(|e| MapError::Parse(format!("line {}: {e}", seg_no + 1)))?;
            builder.add_street_segment(name, start, end);
        }
    }

    Ok(builder.build())
}
