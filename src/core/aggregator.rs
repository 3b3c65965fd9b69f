use crate::models::{AudienceData, DemographicVector, Distribution};

/// Region sentinel used when no region data is available
pub const NO_REGION: &str = "N/A";

/// Age brackets that make up the targeting segment (18-35)
pub const TARGET_AGE_BRACKETS: [&str; 2] = ["18-25", "26-35"];

/// Gender key read for the female share
pub const FEMALE_KEY: &str = "Female";

/// Reduce raw audience distributions to the summary fields
///
/// Empty or missing mappings never fail; they resolve to `"N/A"` and zero
/// shares. The raw age and gender distributions are carried over unchanged.
pub fn aggregate_audience(audience: &AudienceData) -> DemographicVector {
    let (top_region, top_region_share) = top_region(&audience.follower_regions);

    let target_age_share: f64 = TARGET_AGE_BRACKETS
        .iter()
        .map(|bracket| share_of(&audience.follower_age_dist, bracket))
        .sum();

    let female_share = share_of(&audience.follower_gender_dist, FEMALE_KEY);

    DemographicVector {
        top_region_display: format_region(&top_region, top_region_share),
        top_region,
        top_region_share,
        target_age_share,
        female_share,
        raw_age_dist: audience.follower_age_dist.clone(),
        raw_gender_dist: audience.follower_gender_dist.clone(),
    }
}

/// Region with the largest share
///
/// Ties on share go to the lexicographically smallest region code.
pub fn top_region(regions: &Distribution) -> (String, f64) {
    regions
        .iter()
        .max_by(|(key_a, share_a), (key_b, share_b)| {
            share_a
                .total_cmp(share_b)
                .then_with(|| key_b.cmp(key_a))
        })
        .map(|(region, &share)| (region.clone(), share))
        .unwrap_or_else(|| (NO_REGION.to_string(), 0.0))
}

/// Display form of the top region, e.g. `US (40.2%)`
#[inline]
pub fn format_region(region: &str, share: f64) -> String {
    format!("{} ({:.1}%)", region, share)
}

#[inline]
fn share_of(dist: &Distribution, key: &str) -> f64 {
    dist.get(key).copied().unwrap_or(0.0)
}
