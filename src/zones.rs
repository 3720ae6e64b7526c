//! Geographic zones derived from the ZIP code in a stop's address.

use std::collections::HashMap;

use crate::types::Stop;

/// Zone for stops whose ZIP code is missing or not in the table.
pub const DEFAULT_ZONE: &str = "Unassigned area";

/// Las Vegas valley service area.
const SERVICE_AREA: &[(&str, &str)] = &[
    ("89002", "Henderson"),
    ("89011", "Henderson"),
    ("89012", "Henderson"),
    ("89014", "Henderson"),
    ("89015", "Henderson"),
    ("89044", "Henderson"),
    ("89052", "Henderson"),
    ("89074", "Henderson"),
    ("89030", "North Las Vegas"),
    ("89031", "North Las Vegas"),
    ("89032", "North Las Vegas"),
    ("89081", "North Las Vegas"),
    ("89084", "North Las Vegas"),
    ("89086", "North Las Vegas"),
    ("89101", "Downtown"),
    ("89102", "Downtown"),
    ("89104", "Downtown"),
    ("89106", "Downtown"),
    ("89109", "The Strip"),
    ("89119", "The Strip"),
    ("89158", "The Strip"),
    ("89169", "The Strip"),
    ("89103", "Spring Valley"),
    ("89117", "Spring Valley"),
    ("89146", "Spring Valley"),
    ("89147", "Spring Valley"),
    ("89148", "Spring Valley"),
    ("89113", "Southwest"),
    ("89139", "Southwest"),
    ("89141", "Southwest"),
    ("89178", "Southwest"),
    ("89179", "Southwest"),
    ("89183", "Southwest"),
    ("89120", "Southeast"),
    ("89123", "Southeast"),
    ("89110", "East Las Vegas"),
    ("89115", "East Las Vegas"),
    ("89121", "East Las Vegas"),
    ("89122", "East Las Vegas"),
    ("89142", "East Las Vegas"),
    ("89156", "East Las Vegas"),
    ("89134", "Summerlin"),
    ("89135", "Summerlin"),
    ("89138", "Summerlin"),
    ("89144", "Summerlin"),
    ("89145", "Summerlin"),
    ("89108", "Northwest"),
    ("89128", "Northwest"),
    ("89129", "Northwest"),
    ("89130", "Northwest"),
    ("89131", "Northwest"),
    ("89143", "Northwest"),
    ("89149", "Northwest"),
    ("89166", "Northwest"),
];

/// Stops sharing a zone, by index into the partitioned slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub name: String,
    pub stop_indices: Vec<usize>,
}

/// Static ZIP → zone-name lookup.
#[derive(Debug, Clone)]
pub struct ZoneTable {
    zones: HashMap<String, String>,
    default_zone: String,
}

impl Default for ZoneTable {
    fn default() -> Self {
        Self {
            zones: SERVICE_AREA
                .iter()
                .map(|(zip, name)| (zip.to_string(), name.to_string()))
                .collect(),
            default_zone: DEFAULT_ZONE.to_string(),
        }
    }
}

impl ZoneTable {
    /// A table with no entries; every stop lands in the default zone.
    pub fn empty() -> Self {
        Self {
            zones: HashMap::new(),
            default_zone: DEFAULT_ZONE.to_string(),
        }
    }

    pub fn with_zone(mut self, zip: impl Into<String>, name: impl Into<String>) -> Self {
        self.zones.insert(zip.into(), name.into());
        self
    }

    pub fn with_default_zone(mut self, name: impl Into<String>) -> Self {
        self.default_zone = name.into();
        self
    }

    pub fn zone_for(&self, address: &str) -> &str {
        postal_code(address)
            .and_then(|zip| self.zones.get(zip))
            .map(String::as_str)
            .unwrap_or(self.default_zone.as_str())
    }

    /// Groups `stops` by zone. Zones appear in the order their first stop
    /// appears; stop indices keep input order. No stop is dropped.
    pub fn partition(&self, stops: &[Stop]) -> Vec<Zone> {
        let mut zones: Vec<Zone> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for (idx, stop) in stops.iter().enumerate() {
            let name = self.zone_for(stop.address());
            let position = *positions.entry(name).or_insert_with(|| {
                zones.push(Zone {
                    name: name.to_string(),
                    stop_indices: Vec::new(),
                });
                zones.len() - 1
            });
            zones[position].stop_indices.push(idx);
        }

        zones
    }
}

/// Last five-digit token of `address`, ignoring any ZIP+4 suffix.
pub fn postal_code(address: &str) -> Option<&str> {
    address
        .split(|c: char| !(c.is_ascii_digit() || c == '-'))
        .filter_map(|token| {
            let base = token.split('-').next().unwrap_or(token);
            (base.len() == 5 && base.bytes().all(|b| b.is_ascii_digit())).then_some(base)
        })
        .last()
}
