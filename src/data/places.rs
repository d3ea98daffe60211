//! Static place tables: countries and sub-national regions.
//!
//! Each place carries a simplified boundary outline suitable for the
//! canvas choropleth. Outlines are coarse on purpose; the map renders at
//! world scale where a handful of vertices per place is enough.

/// A mappable place at either boundary level.
#[derive(Debug, Clone, Copy)]
pub struct Place {
    /// Stable identifier (ISO 3166 alpha-3 for countries,
    /// `CC-XX` subdivision codes for regions).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Centroid latitude (label anchor).
    pub lat: f64,
    /// Centroid longitude (label anchor).
    pub lon: f64,
    /// Resident population, used for per-capita normalization.
    pub population: u64,
    /// Simplified boundary outline as (lon, lat) vertices.
    pub outline: &'static [(f64, f64)],
}

/// Country-level places.
pub static COUNTRIES: &[Place] = &[
    Place {
        id: "USA",
        name: "United States",
        lat: 39.8,
        lon: -98.6,
        population: 331_900_000,
        outline: &[
            (-124.7, 48.4),
            (-95.2, 49.0),
            (-82.5, 45.3),
            (-66.9, 44.8),
            (-75.5, 35.2),
            (-81.5, 30.7),
            (-84.0, 29.8),
            (-97.1, 25.9),
            (-106.5, 31.8),
            (-117.1, 32.5),
            (-124.4, 40.3),
        ],
    },
    Place {
        id: "CAN",
        name: "Canada",
        lat: 56.1,
        lon: -106.3,
        population: 38_250_000,
        outline: &[
            (-141.0, 69.6),
            (-110.0, 72.9),
            (-85.0, 69.9),
            (-61.0, 60.0),
            (-52.6, 47.5),
            (-66.9, 44.8),
            (-82.5, 45.3),
            (-95.2, 49.0),
            (-124.7, 48.4),
            (-130.0, 55.0),
            (-141.0, 60.3),
        ],
    },
    Place {
        id: "MEX",
        name: "Mexico",
        lat: 23.6,
        lon: -102.6,
        population: 126_700_000,
        outline: &[
            (-117.1, 32.5),
            (-106.5, 31.8),
            (-97.1, 25.9),
            (-97.7, 21.5),
            (-87.1, 21.5),
            (-88.3, 18.5),
            (-92.2, 14.5),
            (-105.7, 20.4),
            (-114.8, 27.7),
        ],
    },
    Place {
        id: "BRA",
        name: "Brazil",
        lat: -10.8,
        lon: -52.9,
        population: 214_300_000,
        outline: &[
            (-69.9, -4.2),
            (-60.0, 5.2),
            (-51.6, 4.2),
            (-35.2, -5.5),
            (-38.5, -13.0),
            (-48.6, -25.5),
            (-53.4, -33.7),
            (-57.6, -30.2),
            (-58.4, -20.1),
            (-69.6, -11.0),
            (-73.9, -7.3),
        ],
    },
    Place {
        id: "ARG",
        name: "Argentina",
        lat: -35.4,
        lon: -65.2,
        population: 45_810_000,
        outline: &[
            (-62.6, -22.0),
            (-57.6, -30.2),
            (-58.4, -34.0),
            (-62.3, -38.8),
            (-65.1, -47.0),
            (-68.3, -52.3),
            (-72.3, -50.6),
            (-71.2, -44.8),
            (-70.0, -36.4),
            (-69.6, -28.4),
            (-66.3, -22.4),
        ],
    },
    Place {
        id: "GBR",
        name: "United Kingdom",
        lat: 54.0,
        lon: -2.5,
        population: 67_330_000,
        outline: &[
            (-5.7, 50.1),
            (1.4, 51.2),
            (1.7, 52.7),
            (-0.2, 54.5),
            (-2.1, 55.9),
            (-3.3, 58.6),
            (-5.0, 58.6),
            (-5.1, 56.8),
            (-4.7, 54.7),
            (-5.3, 51.7),
        ],
    },
    Place {
        id: "FRA",
        name: "France",
        lat: 46.6,
        lon: 2.5,
        population: 67_750_000,
        outline: &[
            (-1.8, 48.6),
            (2.5, 51.1),
            (8.2, 48.9),
            (7.0, 45.9),
            (7.5, 43.7),
            (3.0, 42.5),
            (-1.8, 43.4),
            (-1.2, 46.3),
            (-4.8, 48.4),
        ],
    },
    Place {
        id: "DEU",
        name: "Germany",
        lat: 51.1,
        lon: 10.4,
        population: 83_200_000,
        outline: &[
            (6.1, 50.8),
            (7.1, 53.7),
            (8.7, 54.9),
            (13.0, 54.4),
            (14.8, 51.1),
            (12.1, 50.3),
            (13.8, 48.7),
            (10.2, 47.3),
            (7.6, 47.6),
            (6.4, 49.5),
        ],
    },
    Place {
        id: "EGY",
        name: "Egypt",
        lat: 26.8,
        lon: 29.8,
        population: 109_300_000,
        outline: &[
            (25.0, 31.6),
            (34.2, 31.3),
            (34.9, 29.5),
            (36.9, 22.0),
            (25.0, 22.0),
        ],
    },
    Place {
        id: "ZAF",
        name: "South Africa",
        lat: -29.0,
        lon: 25.1,
        population: 59_390_000,
        outline: &[
            (16.5, -28.6),
            (20.0, -24.8),
            (25.3, -25.7),
            (31.3, -22.4),
            (32.9, -26.9),
            (27.9, -33.0),
            (20.0, -34.8),
            (18.3, -34.2),
            (17.9, -31.7),
        ],
    },
    Place {
        id: "IND",
        name: "India",
        lat: 22.9,
        lon: 79.6,
        population: 1_407_000_000,
        outline: &[
            (68.2, 23.6),
            (73.9, 34.0),
            (78.9, 35.5),
            (88.8, 27.1),
            (95.9, 28.3),
            (92.4, 21.9),
            (87.0, 21.9),
            (80.3, 13.0),
            (77.5, 8.1),
            (72.6, 19.2),
        ],
    },
    Place {
        id: "CHN",
        name: "China",
        lat: 35.9,
        lon: 104.2,
        population: 1_412_000_000,
        outline: &[
            (73.6, 39.5),
            (87.3, 49.1),
            (101.8, 42.5),
            (111.9, 45.1),
            (121.6, 53.3),
            (131.3, 43.4),
            (121.9, 39.0),
            (121.2, 30.3),
            (108.5, 21.5),
            (97.5, 24.0),
            (78.9, 35.5),
            (73.9, 34.0),
        ],
    },
    Place {
        id: "AUS",
        name: "Australia",
        lat: -25.3,
        lon: 134.4,
        population: 25_690_000,
        outline: &[
            (113.2, -26.2),
            (114.1, -21.8),
            (122.2, -16.4),
            (130.6, -12.5),
            (136.9, -12.2),
            (142.5, -10.7),
            (145.5, -16.9),
            (153.6, -28.6),
            (149.9, -37.5),
            (140.7, -38.1),
            (131.3, -31.5),
            (125.9, -32.3),
            (115.0, -34.3),
        ],
    },
];

/// Sub-national regions (a representative subset of larger countries).
pub static REGIONS: &[Place] = &[
    Place {
        id: "US-CA",
        name: "California",
        lat: 37.2,
        lon: -119.3,
        population: 39_240_000,
        outline: &[
            (-124.4, 40.3),
            (-120.0, 42.0),
            (-120.0, 39.0),
            (-114.6, 35.0),
            (-114.7, 32.7),
            (-117.1, 32.5),
            (-121.9, 36.6),
        ],
    },
    Place {
        id: "US-TX",
        name: "Texas",
        lat: 31.5,
        lon: -99.3,
        population: 29_530_000,
        outline: &[
            (-106.6, 32.0),
            (-103.0, 32.0),
            (-103.0, 36.5),
            (-100.0, 36.5),
            (-100.0, 34.6),
            (-94.0, 33.6),
            (-93.8, 29.7),
            (-97.1, 25.9),
            (-104.0, 29.3),
        ],
    },
    Place {
        id: "US-NY",
        name: "New York",
        lat: 42.9,
        lon: -75.5,
        population: 19_840_000,
        outline: &[
            (-79.8, 42.5),
            (-79.0, 43.3),
            (-76.2, 43.5),
            (-73.3, 45.0),
            (-73.4, 42.0),
            (-74.0, 40.6),
            (-75.2, 42.0),
        ],
    },
    Place {
        id: "US-FL",
        name: "Florida",
        lat: 28.6,
        lon: -82.4,
        population: 21_780_000,
        outline: &[
            (-87.6, 31.0),
            (-82.2, 30.6),
            (-81.4, 30.7),
            (-80.0, 26.8),
            (-80.4, 25.2),
            (-81.8, 26.0),
            (-82.7, 29.0),
            (-85.3, 29.7),
            (-87.5, 30.3),
        ],
    },
    Place {
        id: "BR-SP",
        name: "São Paulo",
        lat: -22.3,
        lon: -48.7,
        population: 46_650_000,
        outline: &[
            (-53.1, -22.6),
            (-50.0, -20.0),
            (-47.0, -20.2),
            (-44.2, -22.7),
            (-46.6, -24.7),
            (-48.6, -25.5),
            (-52.1, -23.9),
        ],
    },
    Place {
        id: "BR-AM",
        name: "Amazonas",
        lat: -4.2,
        lon: -63.7,
        population: 4_269_000,
        outline: &[
            (-73.9, -7.3),
            (-69.9, -4.2),
            (-67.1, 2.2),
            (-63.4, 2.2),
            (-56.1, -2.5),
            (-58.8, -7.3),
            (-63.1, -8.8),
            (-69.6, -11.0),
        ],
    },
    Place {
        id: "IN-MH",
        name: "Maharashtra",
        lat: 19.5,
        lon: 76.1,
        population: 126_300_000,
        outline: &[
            (72.6, 20.1),
            (74.2, 21.7),
            (77.6, 21.4),
            (80.9, 19.9),
            (80.1, 18.3),
            (76.8, 17.3),
            (74.0, 15.7),
            (72.9, 18.5),
        ],
    },
    Place {
        id: "IN-UP",
        name: "Uttar Pradesh",
        lat: 26.9,
        lon: 80.6,
        population: 237_900_000,
        outline: &[
            (77.1, 28.8),
            (80.1, 28.8),
            (84.7, 27.3),
            (84.6, 25.8),
            (83.3, 24.3),
            (78.8, 24.3),
            (77.6, 26.5),
        ],
    },
    Place {
        id: "CN-GD",
        name: "Guangdong",
        lat: 23.4,
        lon: 113.4,
        population: 126_000_000,
        outline: &[
            (109.7, 21.5),
            (112.2, 24.9),
            (114.5, 25.3),
            (117.2, 23.8),
            (116.1, 22.9),
            (112.8, 21.6),
        ],
    },
    Place {
        id: "CN-SC",
        name: "Sichuan",
        lat: 30.3,
        lon: 102.7,
        population: 83_670_000,
        outline: &[
            (97.4, 32.9),
            (102.9, 34.2),
            (108.5, 32.2),
            (108.4, 28.2),
            (103.8, 26.1),
            (99.0, 28.4),
        ],
    },
    Place {
        id: "AU-NSW",
        name: "New South Wales",
        lat: -32.2,
        lon: 147.0,
        population: 8_166_000,
        outline: &[
            (141.0, -29.0),
            (148.9, -29.0),
            (153.6, -28.6),
            (150.1, -35.9),
            (148.0, -37.0),
            (141.0, -34.0),
        ],
    },
    Place {
        id: "AU-WA",
        name: "Western Australia",
        lat: -25.5,
        lon: 122.3,
        population: 2_667_000,
        outline: &[
            (129.0, -14.9),
            (129.0, -31.7),
            (125.9, -32.3),
            (115.0, -34.3),
            (113.2, -26.2),
            (114.1, -21.8),
            (122.2, -16.4),
            (126.9, -13.8),
        ],
    },
];

/// Looks up a place by id at either boundary level.
#[allow(dead_code)] // Available for hover/selection features
pub fn get_place(id: &str) -> Option<&'static Place> {
    COUNTRIES
        .iter()
        .chain(REGIONS.iter())
        .find(|place| place.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_ids_unique() {
        let mut ids: Vec<&str> = COUNTRIES
            .iter()
            .chain(REGIONS.iter())
            .map(|p| p.id)
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_outlines_are_polygons() {
        for place in COUNTRIES.iter().chain(REGIONS.iter()) {
            assert!(place.outline.len() >= 3, "{} outline too small", place.id);
            assert!(place.population > 0, "{} has no population", place.id);
        }
    }

    #[test]
    fn test_get_place() {
        assert_eq!(get_place("USA").map(|p| p.name), Some("United States"));
        assert_eq!(get_place("US-CA").map(|p| p.name), Some("California"));
        assert!(get_place("XXX").is_none());
    }
}
