use crate::error::{OrreryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single catalog record.
///
/// Construct through [`CelestialBody::new`] or [`BodyInput::parse`] so the
/// field constraints always hold:
/// - `name` is non-empty after trimming
/// - `distance` is finite and `>= 0` (AU)
/// - `mass` is finite and `> 0`
/// - `orbital_period` is finite and `>= 0` (days)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    pub name: String,
    pub distance: f64,
    pub mass: f64,
    pub orbital_period: f64,
}

impl CelestialBody {
    pub fn new(name: &str, distance: f64, mass: f64, orbital_period: f64) -> Result<Self> {
        let body = Self {
            name: name.trim().to_string(),
            distance,
            mass,
            orbital_period,
        };
        body.validate()?;
        Ok(body)
    }

    /// Checks every field constraint. Used on construction and on load.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(OrreryError::validation("name", "must not be empty"));
        }
        check_number("distance", self.distance, Bound::NonNegative)?;
        check_number("mass", self.mass, Bound::Positive)?;
        check_number("orbital_period", self.orbital_period, Bound::NonNegative)?;
        Ok(())
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Distance: {} AU, Mass: {}, Orbital Period: {} days)",
            self.name, self.distance, self.mass, self.orbital_period
        )
    }
}

enum Bound {
    NonNegative,
    Positive,
}

fn check_number(field: &'static str, value: f64, bound: Bound) -> Result<()> {
    if !value.is_finite() {
        return Err(OrreryError::validation(field, "must be a finite number"));
    }
    match bound {
        Bound::NonNegative if value < 0.0 => {
            Err(OrreryError::validation(field, "must not be negative"))
        }
        Bound::Positive if value <= 0.0 => {
            Err(OrreryError::validation(field, "must be greater than zero"))
        }
        _ => Ok(()),
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(OrreryError::validation(field, "is required"));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| OrreryError::validation(field, format!("'{}' is not a number", trimmed)))
}

/// Raw field values as collected from the user, before any parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyInput {
    pub name: String,
    pub distance: String,
    pub mass: String,
    pub orbital_period: String,
}

impl BodyInput {
    pub fn new(
        name: impl Into<String>,
        distance: impl Into<String>,
        mass: impl Into<String>,
        orbital_period: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            distance: distance.into(),
            mass: mass.into(),
            orbital_period: orbital_period.into(),
        }
    }

    /// Parses and validates every field. Fails on the first bad field.
    pub fn parse(&self) -> Result<CelestialBody> {
        if self.name.trim().is_empty() {
            return Err(OrreryError::validation("name", "must not be empty"));
        }
        let distance = parse_number("distance", &self.distance)?;
        let mass = parse_number("mass", &self.mass)?;
        let orbital_period = parse_number("orbital_period", &self.orbital_period)?;
        CelestialBody::new(&self.name, distance, mass, orbital_period)
    }
}

/// Sortable columns of a [`CelestialBody`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Distance,
    Mass,
    OrbitalPeriod,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Distance,
        Field::Mass,
        Field::OrbitalPeriod,
    ];

    /// The key used in the backing file and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Distance => "distance",
            Field::Mass => "mass",
            Field::OrbitalPeriod => "orbital_period",
        }
    }

    /// Column header used when rendering.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Distance => "Distance (AU)",
            Field::Mass => "Mass",
            Field::OrbitalPeriod => "Orbital Period (days)",
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Field::Name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = OrreryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "name" => Ok(Field::Name),
            "distance" => Ok(Field::Distance),
            "mass" => Ok(Field::Mass),
            "orbital_period" | "period" => Ok(Field::OrbitalPeriod),
            _ => Err(OrreryError::UnknownField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, Direction::Descending)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => f.write_str("ascending"),
            Direction::Descending => f.write_str("descending"),
        }
    }
}

/// The eight-planet dataset used when no backing file exists.
pub fn default_bodies() -> Vec<CelestialBody> {
    [
        ("Mercury", 0.39, 0.0553, 88.0),
        ("Venus", 0.72, 0.815, 225.0),
        ("Earth", 1.00, 1.0, 365.0),
        ("Mars", 1.52, 0.1075, 687.0),
        ("Jupiter", 5.20, 317.8, 4333.0),
        ("Saturn", 9.58, 95.2, 10759.0),
        ("Uranus", 19.20, 14.6, 30687.0),
        ("Neptune", 30.05, 17.2, 60190.0),
    ]
    .into_iter()
    .map(|(name, distance, mass, orbital_period)| CelestialBody {
        name: name.to_string(),
        distance,
        mass,
        orbital_period,
    })
    .collect()
}
