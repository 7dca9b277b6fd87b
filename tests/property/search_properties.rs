use chrono::{Duration, TimeZone, Utc};
use property_scout::models::{Features, ListingStatus, Location};
use property_scout::{
    filter_properties, Category, FilterCriteria, Property, PropertyType, Recommender,
};
use proptest::prelude::*;

const AREAS: [&str; 4] = ["Whitefield", "Koramangala", "Thane West", "Gachibowli"];
const CITIES: [&str; 3] = ["Bangalore", "Mumbai", "Hyderabad"];

fn arb_flag() -> impl Strategy<Value = Option<bool>> {
    prop_oneof![Just(None), Just(Some(false)), Just(Some(true))]
}

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![Just(Category::Buy), Just(Category::Rent)]
}

fn arb_type() -> impl Strategy<Value = PropertyType> {
    prop_oneof![
        Just(PropertyType::Apartment),
        Just(PropertyType::House),
        Just(PropertyType::Villa),
        Just(PropertyType::Commercial),
        Just(PropertyType::Room),
        Just(PropertyType::Office),
    ]
}

prop_compose! {
    fn arb_features()(
        bedrooms in prop::option::of(0u32..6),
        bathrooms in prop::option::of(0u32..5),
        furnished in arb_flag(),
        bachelors in arb_flag(),
        families in arb_flag(),
        women in arb_flag(),
    ) -> Features {
        Features {
            bedrooms,
            bathrooms,
            area_sqft: 800.0,
            furnished,
            bachelors_allowed: bachelors,
            family_friendly: families,
            women_only: women,
            ..Features::default()
        }
    }
}

prop_compose! {
    fn arb_property()(
        id in 0u32..1_000_000,
        price in 0u64..20_000_000,
        category in arb_category(),
        property_type in arb_type(),
        area in prop::option::of(0usize..AREAS.len()),
        city in 0usize..CITIES.len(),
        features in arb_features(),
        verified in any::<bool>(),
        days in 0i64..365,
    ) -> Property {
        Property {
            id: format!("p{}", id),
            title: "Listing".to_string(),
            description: String::new(),
            price,
            location: Location {
                address: String::new(),
                city: CITIES[city].to_string(),
                area: area.map(|a| AREAS[a].to_string()),
                latitude: None,
                longitude: None,
            },
            features,
            property_type,
            category,
            status: ListingStatus::Available,
            images: Vec::new(),
            verified,
            premium: false,
            developer_id: None,
            posted_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(days),
            area_snapshot: None,
        }
    }
}

prop_compose! {
    fn arb_criteria()(
        location in prop::option::of(prop_oneof![
            Just("white".to_string()),
            Just("BANGALORE".to_string()),
            Just("mumbai".to_string()),
            Just("nowhere".to_string()),
        ]),
        category in prop::option::of(arb_category()),
        property_type in prop::option::of(arb_type()),
        min_price in prop::option::of(0u64..20_000_000),
        max_price in prop::option::of(0u64..20_000_000),
        min_bedrooms in prop::option::of(0u32..6),
        min_bathrooms in prop::option::of(0u32..5),
        furnished in arb_flag(),
        verified in arb_flag(),
        for_bachelors in arb_flag(),
        for_families in arb_flag(),
        women_only in arb_flag(),
    ) -> FilterCriteria {
        FilterCriteria {
            location,
            category,
            property_type,
            min_price,
            max_price,
            min_bedrooms,
            min_bathrooms,
            furnished,
            verified,
            for_bachelors,
            for_families,
            women_only,
        }
    }
}

fn is_ordered_subset(found: &[&Property], records: &[Property]) -> bool {
    let mut source = records.iter();
    found
        .iter()
        .all(|wanted| source.any(|candidate| std::ptr::eq(candidate, *wanted)))
}

proptest! {
    #[test]
    fn filter_is_an_ordered_subset(
        records in prop::collection::vec(arb_property(), 0..40),
        criteria in arb_criteria(),
    ) {
        let found = filter_properties(&records, &criteria);
        prop_assert!(found.len() <= records.len());
        prop_assert!(is_ordered_subset(&found, &records));
    }

    #[test]
    fn empty_criteria_is_identity(records in prop::collection::vec(arb_property(), 0..40)) {
        let found = filter_properties(&records, &FilterCriteria::default());
        prop_assert_eq!(found.len(), records.len());
        prop_assert!(found.iter().zip(records.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn filter_is_idempotent(
        records in prop::collection::vec(arb_property(), 0..40),
        criteria in arb_criteria(),
    ) {
        let once = filter_properties(&records, &criteria);
        let twice = filter_properties(once.iter().copied(), &criteria);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn every_result_satisfies_bounds(
        records in prop::collection::vec(arb_property(), 0..40),
        criteria in arb_criteria(),
    ) {
        for p in filter_properties(&records, &criteria) {
            if let Some(min) = criteria.min_price {
                prop_assert!(p.price >= min);
            }
            if let Some(max) = criteria.max_price {
                prop_assert!(p.price <= max);
            }
            if let Some(min) = criteria.min_bedrooms {
                prop_assert!(p.features.bedrooms.map_or(false, |b| b >= min));
            }
            if criteria.for_bachelors == Some(true) {
                prop_assert_eq!(p.features.bachelors_allowed, Some(true));
            }
            if criteria.verified == Some(true) {
                prop_assert!(p.verified);
            }
        }
    }

    #[test]
    fn best_deals_are_cheap_sorted_and_bounded(
        records in prop::collection::vec(arb_property(), 0..40),
    ) {
        let recommender = Recommender::default();
        let deals = recommender.best_deals(&records);
        prop_assert!(deals.len() <= recommender.limit);
        prop_assert!(deals
            .iter()
            .all(|p| p.category == Category::Buy && p.price < recommender.best_deal_max_price));
        prop_assert!(deals.windows(2).all(|w| w[0].price <= w[1].price));
        prop_assert_eq!(deals.clone(), recommender.best_deals(&records));
    }

    #[test]
    fn recently_verified_is_newest_first(records in prop::collection::vec(arb_property(), 0..40)) {
        let recommender = Recommender::default();
        let recent = recommender.recently_verified(&records);
        prop_assert!(recent.len() <= recommender.limit);
        prop_assert!(recent.iter().all(|p| p.verified));
        prop_assert!(recent.windows(2).all(|w| w[0].posted_at >= w[1].posted_at));
    }
}
