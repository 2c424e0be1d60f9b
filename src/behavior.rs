// src/behavior.rs

use std::fmt;
use std::path::Path;

use clap::ValueEnum;

/// Landing maneuver category flown by the UAS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Behavior {
    #[value(name = "Lateral")]
    Lateral,
    #[value(name = "45Deg")]
    Deg45,
    #[value(name = "Straight")]
    Straight,
    #[value(name = "Oblique")]
    Oblique,
}

/// Where the UAS should hover relative to the touchdown point before descending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManeuverGeometry {
    /// Offset angle added to the ship heading, in degrees.
    pub angle_deg: f64,
    /// Horizontal distance from the touchdown point, in meters.
    pub standoff_m: f64,
}

impl Behavior {
    pub const ALL: [Behavior; 4] = [
        Behavior::Lateral,
        Behavior::Deg45,
        Behavior::Straight,
        Behavior::Oblique,
    ];

    /// Keyword used on the command line and inside log filenames.
    pub fn keyword(&self) -> &'static str {
        match self {
            Behavior::Lateral => "Lateral",
            Behavior::Deg45 => "45Deg",
            Behavior::Straight => "Straight",
            Behavior::Oblique => "Oblique",
        }
    }

    /// Infers the behavior from a log filename by keyword substring.
    ///
    /// Keywords are checked in the order Lateral, 45Deg, Oblique, Straight and the first hit wins,
    /// so a name containing several keywords resolves deterministically.
    pub fn from_filename(path: &Path) -> Option<Behavior> {
        let name = path.to_string_lossy();
        [
            Behavior::Lateral,
            Behavior::Deg45,
            Behavior::Oblique,
            Behavior::Straight,
        ]
        .into_iter()
        .find(|behavior| name.contains(behavior.keyword()))
    }

    /// Offset angle and standoff distance of the best position for this maneuver.
    pub fn geometry(&self) -> ManeuverGeometry {
        match self {
            Behavior::Lateral => ManeuverGeometry {
                angle_deg: 90.0,
                standoff_m: 20.0,
            },
            Behavior::Deg45 => ManeuverGeometry {
                angle_deg: 135.0,
                standoff_m: 30.0,
            },
            Behavior::Straight => ManeuverGeometry {
                angle_deg: 180.0,
                standoff_m: 20.0,
            },
            // Shares the 45Deg approach geometry.
            Behavior::Oblique => ManeuverGeometry {
                angle_deg: 135.0,
                standoff_m: 30.0,
            },
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}


// src/behavior.rs
