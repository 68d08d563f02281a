use crate::types::City;

const CITY_TABLE: &[(&str, &str, &str)] = &[
    ("San Francisco", "America/Los_Angeles", "US"),
    ("New York", "America/New_York", "US"),
    ("Los Angeles", "America/Los_Angeles", "US"),
    ("Chicago", "America/Chicago", "US"),
    ("Denver", "America/Denver", "US"),
    ("London", "Europe/London", "GB"),
    ("Paris", "Europe/Paris", "FR"),
    ("Geneva", "Europe/Zurich", "CH"),
    ("Berlin", "Europe/Berlin", "DE"),
    ("Amsterdam", "Europe/Amsterdam", "NL"),
    ("Madrid", "Europe/Madrid", "ES"),
    ("Rome", "Europe/Rome", "IT"),
    ("Stockholm", "Europe/Stockholm", "SE"),
    ("Moscow", "Europe/Moscow", "RU"),
    ("Istanbul", "Europe/Istanbul", "TR"),
    ("Dubai", "Asia/Dubai", "AE"),
    ("Mumbai", "Asia/Kolkata", "IN"),
    ("Bangkok", "Asia/Bangkok", "TH"),
    ("Singapore", "Asia/Singapore", "SG"),
    ("Hong Kong", "Asia/Hong_Kong", "HK"),
    ("Shanghai", "Asia/Shanghai", "CN"),
    ("Tokyo", "Asia/Tokyo", "JP"),
    ("Seoul", "Asia/Seoul", "KR"),
    ("Sydney", "Australia/Sydney", "AU"),
    ("Auckland", "Pacific/Auckland", "NZ"),
    ("Denpasar", "Asia/Makassar", "ID"),
    ("Jakarta", "Asia/Jakarta", "ID"),
    ("São Paulo", "America/Sao_Paulo", "BR"),
    ("Mexico City", "America/Mexico_City", "MX"),
    ("Toronto", "America/Toronto", "CA"),
    ("Vancouver", "America/Vancouver", "CA"),
    ("Lisbon", "Europe/Lisbon", "PT"),
    ("Cairo", "Africa/Cairo", "EG"),
    ("Nairobi", "Africa/Nairobi", "KE"),
    ("Honolulu", "Pacific/Honolulu", "US"),
];

pub const DEFAULT_CITY_NAMES: [&str; 3] = ["San Francisco", "Denpasar", "Geneva"];

pub fn catalog() -> Vec<City> {
    CITY_TABLE
        .iter()
        .map(|&(name, tz, country)| City::new(name, tz, country))
        .collect()
}

pub fn find_city(name: &str) -> Option<City> {
    CITY_TABLE
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|&(name, tz, country)| City::new(name, tz, country))
}

pub fn default_cities() -> Vec<City> {
    DEFAULT_CITY_NAMES.iter().filter_map(|n| find_city(n)).collect()
}

pub fn search_cities(query: &str, existing: &[City]) -> Vec<City> {
    let needle = query.to_lowercase();
    catalog()
        .into_iter()
        .filter(|city| !existing.iter().any(|c| c.same_entry(city)))
        .filter(|city| {
            needle.is_empty()
                || city.name.to_lowercase().contains(&needle)
                || city.country.to_lowercase().contains(&needle)
        })
        .collect()
}
