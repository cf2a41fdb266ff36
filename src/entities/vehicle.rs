use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: u64,
    pub name: String,
    pub image_url: String,
    pub capacity: NonZeroU32,
    #[serde(rename = "type")]
    pub kind: String,
    pub rate_per_km: f64,
}

#[test]
fn parse_vehicle_record() {
    let vehicle: Vehicle = serde_json::from_str(
        r#"{
            "id": 3,
            "name": "Traveler Van",
            "imageUrl": "/img/van.jpg",
            "capacity": 9,
            "type": "Van",
            "ratePerKm": 0.85
        }"#,
    )
    .unwrap();

    assert_eq!(vehicle.kind, "Van");
    assert_eq!(vehicle.capacity.get(), 9);
    assert_eq!(vehicle.rate_per_km, 0.85);
}

#[test]
fn reject_zero_capacity() {
    let result = serde_json::from_str::<Vehicle>(
        r#"{"id": 1, "name": "x", "imageUrl": "", "capacity": 0, "type": "Car", "ratePerKm": 1.0}"#,
    );

    assert!(result.is_err());
}
