//! Registration ledger.
//!
//! Owns the registration counter. Each new participant takes the next index,
//! the spiral turns it into a coordinate, and only the encoded
//! [`LocationWord`] is kept.

use std::collections::HashMap;

use eykar_coords::{codec, spiral_to_coord, Coordinate, LocationWord, Pitch, SpiralIndex};
use tracing::{debug, info, warn};

use crate::config::LedgerConfig;
use crate::error::{Error, Result};

/// A participant's claimed location.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registration {
    /// Participant name
    pub name: String,
    /// Registration order
    pub index: SpiralIndex,
    /// Stored location
    pub location: LocationWord,
}

impl Registration {
    /// Decoded location.
    pub fn coordinate(&self) -> Coordinate {
        codec::decode(self.location)
    }
}

/// In-memory ledger of registered participants.
///
/// `register` takes `&mut self`, so index assignment is serialized by the
/// borrow checker. Share a ledger across threads behind a lock.
#[derive(Debug)]
pub struct Ledger {
    pitch: Pitch,
    next_index: u128,
    registrations: Vec<Registration>,
    by_name: HashMap<String, usize>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new(config: LedgerConfig) -> Result<Self> {
        let pitch = config.validate()?;
        info!(pitch = pitch.get(), "ledger created");
        Ok(Self {
            pitch,
            next_index: 0,
            registrations: Vec::new(),
            by_name: HashMap::new(),
        })
    }

    /// Spiral pitch in use.
    pub fn pitch(&self) -> Pitch {
        self.pitch
    }

    /// Index the next registration will receive.
    pub fn next_index(&self) -> SpiralIndex {
        SpiralIndex::new(self.next_index)
    }

    /// Number of registered participants.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether nobody has registered yet.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Register a participant at the next spiral location.
    ///
    /// A failed registration leaves the counter untouched.
    pub fn register(&mut self, name: impl Into<String>) -> Result<Registration> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            warn!(%name, "duplicate registration rejected");
            return Err(Error::AlreadyRegistered(name));
        }

        let index = SpiralIndex::new(self.next_index);
        let following = self.next_index.checked_add(1).ok_or(Error::IndexExhausted)?;

        let coord = spiral_to_coord(index, self.pitch)?;
        let location = codec::encode(coord);
        debug!(index = index.value(), %coord, %location, "allocated spiral slot");

        let registration = Registration {
            name: name.clone(),
            index,
            location,
        };
        self.by_name.insert(name, self.registrations.len());
        self.registrations.push(registration.clone());
        self.next_index = following;

        info!(
            name = %registration.name,
            index = index.value(),
            %coord,
            "participant registered"
        );
        Ok(registration)
    }

    /// Registration details for a participant.
    pub fn get(&self, name: &str) -> Option<&Registration> {
        self.by_name.get(name).map(|&i| &self.registrations[i])
    }

    /// Stored location word for a participant.
    pub fn location_of(&self, name: &str) -> Option<LocationWord> {
        self.get(name).map(|r| r.location)
    }

    /// Decoded coordinate for a participant.
    pub fn coordinate_of(&self, name: &str) -> Option<Coordinate> {
        self.get(name).map(Registration::coordinate)
    }

    /// Floor Euclidean distance between two participants' locations.
    pub fn distance_between(&self, a: &str, b: &str) -> Result<u128> {
        let from = self.require(a)?;
        let to = self.require(b)?;
        Ok(from.distance_to(&to)?)
    }

    /// Registrations in the order they were made.
    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.registrations.iter()
    }

    fn require(&self, name: &str) -> Result<Coordinate> {
        self.coordinate_of(name)
            .ok_or_else(|| Error::UnknownParticipant(name.to_string()))
    }
}
