//! Named location storage and the plain-text locations file.
//!
//! # File format
//!
//! A sequence of whitespace-separated `<name> <latitude> <longitude>`
//! triples.  Line breaks carry no meaning; one record per line is merely the
//! convention [`append_location`] follows.
//!
//! ```text
//! Motijheel 23.7330 90.4172
//! Shahbag   23.7383 90.3958
//! ```
//!
//! Names therefore cannot contain whitespace.  A later record with the same
//! name replaces the earlier one.

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use rp_core::GeoPoint;
use tracing::{debug, info, warn};

use crate::{NetworkError, NetworkResult};

// ── Location ──────────────────────────────────────────────────────────────────

/// A named point.  Immutable once created.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub name: String,
    pub pos:  GeoPoint,
}

impl Location {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self { name: name.into(), pos: GeoPoint::new(lat, lon) }
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.pos.lat
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.pos.lon
    }

    /// `(latitude, longitude)`, the form map-link builders want.
    #[inline]
    pub fn coordinates(&self) -> (f64, f64) {
        (self.pos.lat, self.pos.lon)
    }
}

// ── LocationStore ─────────────────────────────────────────────────────────────

/// The set of known locations, keyed and iterated by name.
#[derive(Clone, Debug, Default)]
pub struct LocationStore {
    places: BTreeMap<String, Location>,
}

impl LocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.places.contains_key(name)
    }

    /// Look up a location by name.
    pub fn get(&self, name: &str) -> NetworkResult<&Location> {
        self.places
            .get(name)
            .ok_or_else(|| NetworkError::UnknownLocation(name.to_owned()))
    }

    /// All locations in lexicographic name order.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &Location> + '_ {
        self.places.values()
    }

    /// Insert a new location.
    ///
    /// Fails without mutating the store if `name` is taken or unusable.  The
    /// caller owns any graph built from this store and must rebuild it.
    pub fn add(&mut self, name: &str, lat: f64, lon: f64) -> NetworkResult<&Location> {
        validate(name, lat, lon)?;
        if self.places.contains_key(name) {
            return Err(NetworkError::DuplicateLocation(name.to_owned()));
        }
        debug!(name, lat, lon, "location added");
        Ok(self
            .places
            .entry(name.to_owned())
            .or_insert_with(|| Location::new(name, lat, lon)))
    }

    /// Read records from the file at `path`.
    ///
    /// A file that cannot be opened or read yields
    /// [`NetworkError::DataUnavailable`] and leaves the store untouched.
    pub fn load_path(&mut self, path: &Path) -> NetworkResult<usize> {
        let unavailable = |source| NetworkError::DataUnavailable { path: path.to_path_buf(), source };
        let mut bytes = Vec::new();
        File::open(path)
            .and_then(|mut file| file.read_to_end(&mut bytes))
            .map_err(unavailable)?;
        let count = self.load_bytes(&bytes);
        info!(count, path = %path.display(), "loaded locations");
        Ok(count)
    }

    /// Like [`load_path`](Self::load_path) but accepts any `Read` source.
    pub fn load_reader<R: Read>(&mut self, mut reader: R) -> NetworkResult<usize> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(self.load_bytes(&bytes))
    }

    /// Insert triples until the input is exhausted or a record is unusable.
    ///
    /// Tokens are split on ASCII whitespace.  Names need not be UTF-8; invalid
    /// sequences become U+FFFD.  A record whose coordinates fail to parse or
    /// fall outside the ranges [`add`](Self::add) enforces ends the load, and
    /// everything after it is ignored.  Returns the number of triples
    /// accepted, overwrites included.
    fn load_bytes(&mut self, bytes: &[u8]) -> usize {
        let mut tokens = bytes.split(u8::is_ascii_whitespace).filter(|t| !t.is_empty());
        let mut count = 0;

        while let Some(name) = tokens.next() {
            let name = String::from_utf8_lossy(name).into_owned();
            let (Some(lat), Some(lon)) = (tokens.next(), tokens.next()) else {
                warn!(name = %name, "truncated record at end of input");
                break;
            };
            let (Some(lat), Some(lon)) = (parse_coordinate(lat), parse_coordinate(lon)) else {
                warn!(name = %name, after = count, "unparsable coordinates; stopping");
                break;
            };
            if let Err(e) = validate(&name, lat, lon) {
                warn!(error = %e, after = count, "invalid record; stopping");
                break;
            }
            self.places.insert(name.clone(), Location::new(name, lat, lon));
            count += 1;
        }

        count
    }
}

/// Append one record to the locations file, creating it if needed.
pub fn append_location(path: &Path, location: &Location) -> NetworkResult<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{} {} {}", location.name, location.lat(), location.lon())?;
    Ok(())
}

fn parse_coordinate(token: &[u8]) -> Option<f64> {
    std::str::from_utf8(token).ok()?.parse().ok()
}

fn validate(name: &str, lat: f64, lon: f64) -> NetworkResult<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.chars().any(char::is_whitespace) {
        "name contains whitespace"
    } else if !(-90.0..=90.0).contains(&lat) {
        "latitude outside [-90, 90]"
    } else if !(-180.0..=180.0).contains(&lon) {
        "longitude outside [-180, 180]"
    } else {
        return Ok(());
    };
    Err(NetworkError::InvalidLocation { name: name.to_owned(), reason })
}
