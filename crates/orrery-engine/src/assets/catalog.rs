use std::collections::{BTreeMap, HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::error::{OrreryError, Result};

const BUILTIN_CATALOG: &str = include_str!("../../data/planets.json");

/// Fallback for colors that fail to parse.
const NEUTRAL_GREY: [f32; 3] = [0.5, 0.5, 0.5];

/// Classification tag of a body. Unknown tags deserialize as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BodyKind {
    Terrestrial,
    #[serde(rename = "Gas Giant")]
    GasGiant,
    #[serde(rename = "Ice Giant")]
    IceGiant,
    #[default]
    #[serde(other)]
    Other,
}

/// Filter tab over the top-level bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyFilter {
    #[default]
    All,
    Terrestrial,
    GasGiants,
    IceGiants,
}

impl BodyFilter {
    pub const ALL: [BodyFilter; 4] = [
        BodyFilter::All,
        BodyFilter::Terrestrial,
        BodyFilter::GasGiants,
        BodyFilter::IceGiants,
    ];

    pub fn matches(self, kind: BodyKind) -> bool {
        match self {
            BodyFilter::All => true,
            BodyFilter::Terrestrial => kind == BodyKind::Terrestrial,
            BodyFilter::GasGiants => kind == BodyKind::GasGiant,
            BodyFilter::IceGiants => kind == BodyKind::IceGiant,
        }
    }

    /// Tab id used by the UI. Unknown ids fall back to `All`.
    pub fn from_tab(tab: &str) -> Self {
        match tab {
            "terrestrial" => BodyFilter::Terrestrial,
            "gas-giants" => BodyFilter::GasGiants,
            "ice-giants" => BodyFilter::IceGiants,
            _ => BodyFilter::All,
        }
    }

    pub fn tab(self) -> &'static str {
        match self {
            BodyFilter::All => "all",
            BodyFilter::Terrestrial => "terrestrial",
            BodyFilter::GasGiants => "gas-giants",
            BodyFilter::IceGiants => "ice-giants",
        }
    }

    /// Position in `ALL`, used as the numeric wire value.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A planet or a moon. Satellites share the shape and nest under their parent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelestialBody {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: BodyKind,
    /// Mean distance from the parent in AU. Satellites usually omit it.
    #[serde(rename = "distanceAU", default)]
    pub distance_au: f32,
    /// Radius relative to Earth.
    #[serde(default)]
    pub radius: f32,
    /// `#RRGGBB`.
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "moonList", default)]
    pub satellites: Vec<CelestialBody>,
    /// Display-only attributes (diameter, mass, temperature, ...), kept verbatim.
    #[serde(flatten)]
    pub details: BTreeMap<String, serde_json::Value>,
}

impl CelestialBody {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: BodyKind::Other,
            distance_au: 0.0,
            radius: 0.0,
            color: String::new(),
            description: String::new(),
            satellites: Vec::new(),
            details: BTreeMap::new(),
        }
    }

    // -- Builder pattern --

    pub fn with_kind(mut self, kind: BodyKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_distance(mut self, distance_au: f32) -> Self {
        self.distance_au = distance_au;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_satellites(mut self, satellites: Vec<CelestialBody>) -> Self {
        self.satellites = satellites;
        self
    }

    pub fn satellite(&self, id: &str) -> Option<&CelestialBody> {
        self.satellites.iter().find(|s| s.id == id)
    }

    /// Display color as normalized RGB. Unparsable colors render grey.
    pub fn rgb(&self) -> [f32; 3] {
        parse_hex_color(&self.color).unwrap_or_else(|| {
            log::warn!("body `{}` has unparsable color `{}`", self.id, self.color);
            NEUTRAL_GREY
        })
    }

    /// A display-only attribute rendered as text.
    pub fn detail(&self, key: &str) -> Option<String> {
        match self.details.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// A filter tab's description and member ids, as shipped in the data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub planets: Vec<String>,
}

/// The static body catalog. Read-only after load.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    #[serde(rename = "planets")]
    bodies: Vec<CelestialBody>,
    #[serde(default)]
    categories: BTreeMap<String, Category>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Parse a catalog from a JSON string and validate id uniqueness.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut catalog: Catalog = serde_json::from_str(json)?;
        catalog.build_index()?;
        Ok(catalog)
    }

    /// Build a catalog from already-constructed bodies.
    pub fn from_bodies(bodies: Vec<CelestialBody>) -> Result<Self> {
        let mut catalog = Catalog {
            bodies,
            categories: BTreeMap::new(),
            index: HashMap::new(),
        };
        catalog.build_index()?;
        Ok(catalog)
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    fn build_index(&mut self) -> Result<()> {
        self.index.clear();
        for (i, body) in self.bodies.iter().enumerate() {
            if body.id.is_empty() {
                return Err(OrreryError::EmptyId(body.name.clone()));
            }
            if self.index.insert(body.id.clone(), i).is_some() {
                return Err(OrreryError::DuplicateBodyId(body.id.clone()));
            }
            let mut seen = HashSet::with_capacity(body.satellites.len());
            for sat in &body.satellites {
                if sat.id.is_empty() {
                    return Err(OrreryError::EmptyId(sat.name.clone()));
                }
                if !seen.insert(sat.id.as_str()) {
                    return Err(OrreryError::DuplicateSatelliteId {
                        parent: body.id.clone(),
                        id: sat.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&CelestialBody> {
        self.index.get(id).map(|&i| &self.bodies[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Bodies passing `filter`, in catalog order.
    pub fn filtered(&self, filter: BodyFilter) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter().filter(move |b| filter.matches(b.kind))
    }

    /// Badge count for a filter tab.
    pub fn count(&self, filter: BodyFilter) -> usize {
        self.filtered(filter).count()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }
}

/// Parse `#RRGGBB` or `#RGB` into normalized RGB.
pub fn parse_hex_color(color: &str) -> Option<[f32; 3]> {
    let hex = color.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);
    match hex.len() {
        6 => Some([channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?]),
        3 => {
            let short = |i: usize| {
                u8::from_str_radix(&hex[i..i + 1], 16)
                    .ok()
                    .map(|v| (v * 17) as f32 / 255.0)
            };
            Some([short(0)?, short(1)?, short(2)?])
        }
        _ => None,
    }
}
