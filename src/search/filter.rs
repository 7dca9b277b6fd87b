use crate::models::{FilterCriteria, Property};

/// Applies every present criterion as an AND-combined predicate.
///
/// The result keeps the input order and borrows from it, so the output of one
/// call can be fed straight back into another.
pub fn filter_properties<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    let needle = criteria
        .location
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    records
        .into_iter()
        .filter(|property| matches(property, criteria, needle.as_deref()))
        .collect()
}

fn matches(property: &Property, criteria: &FilterCriteria, needle: Option<&str>) -> bool {
    if let Some(needle) = needle {
        if !location_matches(property, needle) {
            return false;
        }
    }

    if let Some(category) = criteria.category {
        if property.category != category {
            return false;
        }
    }

    if let Some(property_type) = criteria.property_type {
        if property.property_type != property_type {
            return false;
        }
    }

    if let Some(min) = criteria.min_price {
        if property.price < min {
            return false;
        }
    }

    if let Some(max) = criteria.max_price {
        if property.price > max {
            return false;
        }
    }

    if !at_least(property.features.bedrooms, criteria.min_bedrooms) {
        return false;
    }

    if !at_least(property.features.bathrooms, criteria.min_bathrooms) {
        return false;
    }

    let features = &property.features;
    required_flag(criteria.furnished, features.furnished)
        && required_flag(criteria.verified, Some(property.verified))
        && required_flag(criteria.for_bachelors, features.bachelors_allowed)
        && required_flag(criteria.for_families, features.family_friendly)
        && required_flag(criteria.women_only, features.women_only)
}

fn location_matches(property: &Property, needle: &str) -> bool {
    let in_area = property
        .location
        .area
        .as_deref()
        .map(|area| area.to_lowercase().contains(needle))
        .unwrap_or(false);

    in_area || property.location.city.to_lowercase().contains(needle)
}

// A missing count never satisfies a minimum.
fn at_least(value: Option<u32>, bound: Option<u32>) -> bool {
    match (bound, value) {
        (None, _) => true,
        (Some(bound), Some(value)) => value >= bound,
        (Some(_), None) => false,
    }
}

// Only a requested `true` constrains; the record must state `true` explicitly.
fn required_flag(requested: Option<bool>, actual: Option<bool>) -> bool {
    match requested {
        Some(true) => actual == Some(true),
        Some(false) | None => true,
    }
}
