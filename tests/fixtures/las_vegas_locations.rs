//! Residential service addresses around the Las Vegas valley.
//!
//! Coordinates are real points from OpenStreetMap; the street addresses are
//! representative of the ZIP code each point falls in.

/// A named location with coordinates and a postal address.
#[derive(Debug, Clone)]
pub struct ServiceAddress {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub address: &'static str,
}

impl ServiceAddress {
    pub const fn new(name: &'static str, lat: f64, lng: f64, address: &'static str) -> Self {
        Self { name, lat, lng, address }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Henderson (89012 / 89014 / 89074)
// ============================================================================

pub const HENDERSON: &[ServiceAddress] = &[
    ServiceAddress::new("Green Valley Ranch", 36.0308, -115.0825, "2300 Paseo Verde Pkwy, Henderson, NV 89012"),
    ServiceAddress::new("Sunset Station", 36.0614, -115.0631, "1301 W Sunset Rd, Henderson, NV 89014"),
    ServiceAddress::new("Anthem Hills", 35.9916660, -115.1028343, "2560 Anthem Village Dr, Henderson, NV 89052"),
    ServiceAddress::new("Whitney Ranch", 36.0335058, -114.9856162, "1520 Whitney Ranch Dr, Henderson, NV 89014"),
];

// ============================================================================
// East Las Vegas (89110 / 89142)
// ============================================================================

pub const EAST_LAS_VEGAS: &[ServiceAddress] = &[
    ServiceAddress::new("Sunrise Manor", 36.1450055, -115.0482587, "5025 E Charleston Blvd, Las Vegas, NV 89142"),
    ServiceAddress::new("Nellis Corridor", 36.1440711, -115.0634197, "4420 E Charleston Blvd, Las Vegas, NV 89110"),
    ServiceAddress::new("Hollywood Park", 36.1470458, -115.0644345, "4760 E Sahara Ave, Las Vegas, NV 89110"),
];

// ============================================================================
// The Strip (89109)
// ============================================================================

pub const STRIP: &[ServiceAddress] = &[
    ServiceAddress::new("Wynn Towers", 36.1263781, -115.1658180, "3131 S Las Vegas Blvd, Las Vegas, NV 89109"),
    ServiceAddress::new("Turnberry Place", 36.1300035, -115.1654850, "2827 Paradise Rd, Las Vegas, NV 89109"),
    ServiceAddress::new("Koval Condos", 36.1175388, -115.1695094, "3570 S Koval Ln, Las Vegas, NV 89109"),
];

// ============================================================================
// Southwest (89139 / 89141)
// ============================================================================

pub const SOUTHWEST: &[ServiceAddress] = &[
    ServiceAddress::new("Silverado Ranch", 36.0137634, -115.1614, "9850 S Maryland Pkwy, Las Vegas, NV 89183"),
    ServiceAddress::new("Blue Diamond Rd", 36.0543044, -115.1714860, "7770 S Las Vegas Blvd, Las Vegas, NV 89139"),
];

/// Crew yard on the east side.
pub const EAST_YARD: (f64, f64) = (36.1070664, -115.0591256);

/// Crew yard near the south end of the Strip.
pub const SOUTH_YARD: (f64, f64) = (36.0910624, -115.1743364);

pub fn all_addresses() -> Vec<ServiceAddress> {
    HENDERSON
        .iter()
        .chain(EAST_LAS_VEGAS)
        .chain(STRIP)
        .chain(SOUTHWEST)
        .cloned()
        .collect()
}
