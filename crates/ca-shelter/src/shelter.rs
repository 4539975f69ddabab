//! `Shelter` and its ranked form.

use ca_core::Location;

use crate::{ShelterError, ShelterResult};

/// An emergency shelter.
///
/// The name is never empty and the location is always valid.  Names are not
/// required to be unique; ranking treats shelters positionally.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Shelter {
    name:         String,
    location:     Location,
    /// Free-form category, e.g. `"Public"` or `"Staff"`.
    shelter_type: Option<String>,
    capacity:     Option<u32>,
}

impl Shelter {
    /// Build a shelter with no type or capacity.
    pub fn new(name: impl Into<String>, location: Location) -> ShelterResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ShelterError::EmptyName);
        }
        Ok(Self { name, location, shelter_type: None, capacity: None })
    }

    /// Shorthand for `Shelter::new(name, Location::new(lat, lon)?)`.
    pub fn at(name: impl Into<String>, lat: f64, lon: f64) -> ShelterResult<Self> {
        Self::new(name, Location::new(lat, lon)?)
    }

    pub fn with_type(mut self, shelter_type: impl Into<String>) -> Self {
        self.shelter_type = Some(shelter_type.into());
        self
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn shelter_type(&self) -> Option<&str> {
        self.shelter_type.as_deref()
    }

    pub fn capacity(&self) -> Option<u32> {
        self.capacity
    }
}

/// A shelter together with its distance and walking time from a reference
/// location.  Recomputed whenever the location or shelter set changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankedShelter {
    pub shelter:     Shelter,
    pub distance_km: f64,
    /// Estimated walking time; always ≥ 1.
    pub eta_minutes: u32,
}
