use rand::seq::SliceRandom;
use rand::Rng;

use super::random_digits;
use crate::domain::tracking::{FacilityType, Location, US_LATITUDE_RANGE, US_LONGITUDE_RANGE};

// ============================================================================
// Location Gazetteer
// ============================================================================
//
// City, state and ZIP are sampled independently, like the coordinates, so a
// location is plausible-looking rather than geographically consistent.
//
// ============================================================================

const CITIES: [&str; 32] = [
    "Springfield", "Riverside", "Franklin", "Greenville", "Bristol", "Clinton",
    "Fairview", "Salem", "Madison", "Georgetown", "Arlington", "Ashland",
    "Dover", "Oxford", "Jackson", "Burlington", "Manchester", "Milton",
    "Newport", "Auburn", "Dayton", "Lexington", "Hudson", "Kingston",
    "Marion", "Centerville", "Winchester", "Mount Vernon", "Lakewood", "Columbia",
    "Oakland", "Portland",
];

const STATES: [&str; 50] = [
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado",
    "Connecticut", "Delaware", "Florida", "Georgia", "Hawaii", "Idaho",
    "Illinois", "Indiana", "Iowa", "Kansas", "Kentucky", "Louisiana", "Maine",
    "Maryland", "Massachusetts", "Michigan", "Minnesota", "Mississippi",
    "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire", "New Jersey",
    "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio",
    "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island", "South Carolina",
    "South Dakota", "Tennessee", "Texas", "Utah", "Vermont", "Virginia",
    "Washington", "West Virginia", "Wisconsin", "Wyoming",
];

const COMPANIES: [&str; 20] = [
    "Northwind Freight", "Bluewater Logistics", "Summit Parcel", "Ironbridge Cargo",
    "Redwood Supply", "Keystone Transit", "Prairie Express", "Harbor Point",
    "Silverline Distribution", "Cascade Shipping", "Granite State Movers",
    "Lakeshore Carriers", "Evergreen Depot", "Pioneer Routing", "Atlas Fulfillment",
    "Meridian Hauling", "Crossroads Parcel", "Beacon Warehousing", "Frontier Freight",
    "Tri-County Delivery",
];

pub const COUNTRY: &str = "USA";

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, values: &[&'a str]) -> &'a str {
    values.choose(rng).copied().unwrap_or_default()
}

fn pick_facility_type<R: Rng + ?Sized>(rng: &mut R) -> FacilityType {
    FacilityType::ALL[rng.gen_range(0..FacilityType::ALL.len())]
}

/// A fresh random facility inside the continental US bounding box.
///
/// The facility name carries its own facility-type suffix, drawn
/// independently of `facility_type`.
pub fn generate_location<R: Rng + ?Sized>(rng: &mut R) -> Location {
    let city = pick(rng, &CITIES).to_string();
    let state = pick(rng, &STATES).to_string();
    let zip_code = random_digits(rng, 5);
    let facility_name = format!("{} {}", pick(rng, &COMPANIES), pick_facility_type(rng));
    let facility_type = pick_facility_type(rng);
    let latitude = rng.gen_range(US_LATITUDE_RANGE);
    let longitude = rng.gen_range(US_LONGITUDE_RANGE);

    Location {
        city,
        state,
        zip_code,
        country: COUNTRY.to_string(),
        latitude,
        longitude,
        facility_name,
        facility_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_locations_within_us_bounds() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..2000 {
            let location = generate_location(&mut rng);
            assert!(location.within_us_bounds(), "{location:?}");
        }
    }

    #[test]
    fn test_location_fields() {
        let mut rng = StdRng::seed_from_u64(1);
        let location = generate_location(&mut rng);

        assert_eq!(location.country, "USA");
        assert_eq!(location.zip_code.len(), 5);
        assert!(CITIES.contains(&location.city.as_str()));
        assert!(STATES.contains(&location.state.as_str()));
        assert!(FacilityType::ALL
            .iter()
            .any(|t| location.facility_name.ends_with(t.as_str())));
    }

    #[test]
    fn test_same_seed_same_location() {
        let a = generate_location(&mut StdRng::seed_from_u64(12));
        let b = generate_location(&mut StdRng::seed_from_u64(12));
        assert_eq!(a, b);
    }
}
