//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use crate::domain::entities::{AddressInfo, Condition, Details, Location, Manufacturer, NewVehicle};

/// A used 2018 Chevrolet Impala parked in Queens, NY
pub fn test_new_vehicle() -> NewVehicle {
    NewVehicle {
        condition: Condition::Used,
        location: Location {
            lat: 40.730610,
            lon: -73.935242,
        },
        details: test_details(),
    }
}

/// Same vehicle with a specific condition
pub fn test_new_vehicle_with_condition(condition: Condition) -> NewVehicle {
    NewVehicle {
        condition,
        ..test_new_vehicle()
    }
}

pub fn test_details() -> Details {
    Details {
        manufacturer: Manufacturer {
            code: 101,
            name: "Chevrolet".to_string(),
        },
        body: "sedan".to_string(),
        model: "Impala".to_string(),
        number_of_doors: 4,
        fuel_type: "Gasoline".to_string(),
        engine: "3.6L V6".to_string(),
        mileage: 32280,
        model_year: 2018,
        production_year: 2018,
        external_color: "white".to_string(),
    }
}

pub fn test_address() -> AddressInfo {
    AddressInfo {
        address: "777 Brockton Avenue".to_string(),
        city: "Abington".to_string(),
        state: "MA".to_string(),
        zip: "2351".to_string(),
    }
}
