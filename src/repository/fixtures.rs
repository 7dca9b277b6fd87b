//! Sample listings backing the mock data source.

use chrono::{Duration, Utc};

use crate::models::{
    AreaSnapshot, Category, CrimeRate, Developer, Features, ListingStatus, Location, NearbyPlace,
    Property, PropertyType,
};

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    title: &str,
    price: u64,
    category: Category,
    property_type: PropertyType,
    area: &str,
    city: &str,
    days_ago: i64,
) -> Property {
    Property {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} in {}, {}.", title, area, city),
        price,
        location: Location {
            address: format!("{}, {}", area, city),
            city: city.to_string(),
            area: Some(area.to_string()),
            latitude: None,
            longitude: None,
        },
        features: Features::default(),
        property_type,
        category,
        status: ListingStatus::Available,
        images: vec![format!("/images/{}/cover.jpg", id)],
        verified: false,
        premium: false,
        developer_id: None,
        posted_at: Utc::now() - Duration::days(days_ago),
        area_snapshot: None,
    }
}

fn whitefield_snapshot() -> AreaSnapshot {
    AreaSnapshot {
        average_price: 6_800_000,
        nearby_places: vec![
            NearbyPlace {
                name: "ITPL Tech Park".to_string(),
                kind: "office".to_string(),
                distance_km: 1.2,
            },
            NearbyPlace {
                name: "Phoenix Marketcity".to_string(),
                kind: "mall".to_string(),
                distance_km: 3.5,
            },
        ],
        crime_rate: CrimeRate::Low,
        walkability_score: 64,
    }
}

/// Mock listings across Bangalore, Mumbai and Hyderabad
pub fn sample_properties() -> Vec<Property> {
    let mut whitefield_2bhk = listing(
        "prop_001",
        "2BHK Apartment",
        4_500_000,
        Category::Buy,
        PropertyType::Apartment,
        "Whitefield",
        "Bangalore",
        3,
    );
    whitefield_2bhk.features = Features {
        bedrooms: Some(2),
        bathrooms: Some(2),
        area_sqft: 1_100.0,
        furnished: Some(true),
        parking: Some(true),
        family_friendly: Some(true),
        additional: vec!["Gym".to_string(), "Power backup".to_string()],
        ..Features::default()
    };
    whitefield_2bhk.verified = true;
    whitefield_2bhk.developer_id = Some("dev_001".to_string());
    whitefield_2bhk.location.latitude = Some(12.9698);
    whitefield_2bhk.location.longitude = Some(77.7500);
    whitefield_2bhk.area_snapshot = Some(whitefield_snapshot());

    let mut itpl_1bhk = listing(
        "prop_002",
        "Furnished 1BHK near ITPL",
        18_000,
        Category::Rent,
        PropertyType::Apartment,
        "Whitefield",
        "Bangalore",
        1,
    );
    itpl_1bhk.features = Features {
        bedrooms: Some(1),
        bathrooms: Some(1),
        area_sqft: 650.0,
        furnished: Some(true),
        bachelors_allowed: Some(true),
        pet_friendly: Some(false),
        ..Features::default()
    };
    itpl_1bhk.verified = true;
    itpl_1bhk.area_snapshot = Some(whitefield_snapshot());

    let mut sarjapur_villa = listing(
        "prop_003",
        "3BHK Villa with Garden",
        12_500_000,
        Category::Buy,
        PropertyType::Villa,
        "Sarjapur Road",
        "Bangalore",
        12,
    );
    sarjapur_villa.features = Features {
        bedrooms: Some(3),
        bathrooms: Some(4),
        area_sqft: 2_400.0,
        parking: Some(true),
        pet_friendly: Some(true),
        family_friendly: Some(true),
        additional: vec!["Private garden".to_string()],
        ..Features::default()
    };
    sarjapur_villa.premium = true;
    sarjapur_villa.developer_id = Some("dev_002".to_string());

    let mut koramangala_pg = listing(
        "prop_004",
        "Women's PG Room",
        9_500,
        Category::Rent,
        PropertyType::Room,
        "Koramangala",
        "Bangalore",
        2,
    );
    koramangala_pg.features = Features {
        bedrooms: Some(1),
        bathrooms: Some(1),
        area_sqft: 200.0,
        furnished: Some(true),
        women_only: Some(true),
        additional: vec!["Meals included".to_string()],
        ..Features::default()
    };
    koramangala_pg.verified = true;

    let mut hsr_house = listing(
        "prop_005",
        "Independent House",
        4_900_000,
        Category::Buy,
        PropertyType::House,
        "HSR Layout",
        "Bangalore",
        20,
    );
    hsr_house.features = Features {
        bedrooms: Some(3),
        bathrooms: Some(3),
        area_sqft: 1_800.0,
        parking: Some(true),
        family_friendly: Some(true),
        ..Features::default()
    };
    hsr_house.verified = true;

    let mut orr_office = listing(
        "prop_006",
        "Office Space on Outer Ring Road",
        150_000,
        Category::Rent,
        PropertyType::Office,
        "Bellandur",
        "Bangalore",
        7,
    );
    orr_office.features = Features {
        bedrooms: Some(0),
        bathrooms: Some(2),
        area_sqft: 3_000.0,
        furnished: Some(true),
        parking: Some(true),
        ..Features::default()
    };
    orr_office.verified = true;
    orr_office.premium = true;

    let mut thane_1bhk = listing(
        "prop_007",
        "Compact 1BHK",
        3_200_000,
        Category::Buy,
        PropertyType::Apartment,
        "Thane West",
        "Mumbai",
        10,
    );
    thane_1bhk.features = Features {
        bedrooms: Some(1),
        bathrooms: Some(1),
        area_sqft: 560.0,
        bachelors_allowed: Some(true),
        ..Features::default()
    };
    thane_1bhk.verified = true;
    thane_1bhk.developer_id = Some("dev_001".to_string());

    let mut gachibowli_3bhk = listing(
        "prop_008",
        "Family 3BHK",
        42_000,
        Category::Rent,
        PropertyType::Apartment,
        "Gachibowli",
        "Hyderabad",
        5,
    );
    gachibowli_3bhk.features = Features {
        bedrooms: Some(3),
        bathrooms: Some(3),
        area_sqft: 1_650.0,
        furnished: Some(false),
        family_friendly: Some(true),
        bachelors_allowed: Some(false),
        ..Features::default()
    };
    gachibowli_3bhk.verified = true;

    let mut whitefield_shop = listing(
        "prop_009",
        "Retail Shop",
        8_000_000,
        Category::Buy,
        PropertyType::Commercial,
        "Whitefield",
        "Bangalore",
        30,
    );
    whitefield_shop.features = Features {
        bedrooms: Some(0),
        bathrooms: Some(1),
        area_sqft: 900.0,
        ..Features::default()
    };
    whitefield_shop.status = ListingStatus::Sold;

    vec![
        whitefield_2bhk,
        itpl_1bhk,
        sarjapur_villa,
        koramangala_pg,
        hsr_house,
        orr_office,
        thane_1bhk,
        gachibowli_3bhk,
        whitefield_shop,
    ]
}

pub fn sample_developers() -> Vec<Developer> {
    vec![
        Developer {
            id: "dev_001".to_string(),
            name: "Skyline Constructions".to_string(),
            city: "Bangalore".to_string(),
            established_year: 2004,
            completed_projects: 38,
            verified: true,
        },
        Developer {
            id: "dev_002".to_string(),
            name: "GreenNest Developers".to_string(),
            city: "Bangalore".to_string(),
            established_year: 2012,
            completed_projects: 11,
            verified: false,
        },
    ]
}
