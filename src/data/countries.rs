//! Static country reference table
//!
//! Read-only for the lifetime of the process. City lists keep their table
//! order so option cycling and rendering are deterministic.

/// One supported country with its dialing code and cities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub dialing_code: &'static str,
    pub cities: &'static [&'static str],
}

/// All supported countries, in display order
pub static COUNTRIES: [Country; 5] = [
    Country {
        name: "India",
        dialing_code: "+91",
        cities: &[
            "Mumbai",
            "Delhi",
            "Bangalore",
            "Chennai",
            "Kolkata",
            "Hyderabad",
            "Pune",
            "Ahmedabad",
            "Rajasthan",
        ],
    },
    Country {
        name: "United States",
        dialing_code: "+1",
        cities: &[
            "New York",
            "Los Angeles",
            "Chicago",
            "Houston",
            "Phoenix",
            "Philadelphia",
            "San Antonio",
        ],
    },
    Country {
        name: "United Kingdom",
        dialing_code: "+44",
        cities: &[
            "London",
            "Manchester",
            "Birmingham",
            "Liverpool",
            "Bristol",
            "Leeds",
            "Sheffield",
        ],
    },
    Country {
        name: "Canada",
        dialing_code: "+1",
        cities: &[
            "Toronto",
            "Vancouver",
            "Montreal",
            "Calgary",
            "Ottawa",
            "Edmonton",
            "Winnipeg",
        ],
    },
    Country {
        name: "Australia",
        dialing_code: "+61",
        cities: &[
            "Sydney",
            "Melbourne",
            "Brisbane",
            "Perth",
            "Adelaide",
            "Gold Coast",
            "Canberra",
        ],
    },
];

/// Look up a country by name
pub fn find(name: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.name == name)
}

/// Dialing code for a country, or `""` when the country is unknown
pub fn dialing_code(name: &str) -> &'static str {
    find(name).map(|c| c.dialing_code).unwrap_or("")
}

/// Ordered city list for a country, empty when the country is unknown
pub fn cities(name: &str) -> &'static [&'static str] {
    find(name).map(|c| c.cities).unwrap_or(&[])
}

/// All country names, in display order
pub fn names() -> impl Iterator<Item = &'static str> {
    COUNTRIES.iter().map(|c| c.name)
}

/// Whether `city` is listed under `country`
#[allow(dead_code)]
pub fn is_city_of(country: &str, city: &str) -> bool {
    cities(country).contains(&city)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_known_country_lookup() {
        let india = find("India").unwrap();
        assert_eq!(india.dialing_code, "+91");
        assert_eq!(india.cities[0], "Mumbai");
    }

    #[test]
    fn test_unknown_country_is_empty_result() {
        assert!(find("Atlantis").is_none());
        assert_eq!(dialing_code("Atlantis"), "");
        assert!(cities("Atlantis").is_empty());
    }

    #[test]
    fn test_dialing_codes() {
        assert_eq!(dialing_code("India"), "+91");
        assert_eq!(dialing_code("United States"), "+1");
        assert_eq!(dialing_code("United Kingdom"), "+44");
        assert_eq!(dialing_code("Canada"), "+1");
        assert_eq!(dialing_code("Australia"), "+61");
    }

    #[test]
    fn test_cities_keep_table_order() {
        assert_eq!(
            cities("Canada"),
            &[
                "Toronto",
                "Vancouver",
                "Montreal",
                "Calgary",
                "Ottawa",
                "Edmonton",
                "Winnipeg"
            ]
        );
    }

    #[test]
    fn test_names_in_display_order() {
        let names: Vec<_> = names().collect();
        assert_eq!(
            names,
            vec![
                "India",
                "United States",
                "United Kingdom",
                "Canada",
                "Australia"
            ]
        );
    }

    #[test]
    fn test_is_city_of() {
        assert!(is_city_of("India", "Pune"));
        assert!(!is_city_of("India", "Toronto"));
        assert!(!is_city_of("Atlantis", "Mumbai"));
    }
}
