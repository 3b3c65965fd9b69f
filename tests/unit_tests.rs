// Unit tests for the demographics classifier

use demographics_classifier::core::{
    age::bin_age,
    aggregator::{aggregate_audience, top_region},
    assembler::{assemble_final_vector, AssemblyError},
    fusion::EnsembleFuser,
};
use demographics_classifier::models::{
    AgeGroup, AudienceData, Distribution, FusionWeights, Gender, GenderEstimate, InfluencerRecord,
};

fn dist(entries: &[(&str, f64)]) -> Distribution {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn test_agreement_dominates_confidence() {
    let fuser = EnsembleFuser::with_default_weights();
    let confidences = [0.0, 0.05, 0.3, 0.5, 0.7, 0.71, 0.99, 1.0];

    for g in [Gender::Male, Gender::Female] {
        for &c in &confidences {
            for &c2 in &confidences {
                let result = fuser.fuse(&GenderEstimate::new(g, c), &GenderEstimate::new(g, c2));
                assert_eq!(result, g, "agreement on {} with ({}, {})", g, c, c2);
            }
        }
    }
}

#[test]
fn test_both_unknown() {
    let fuser = EnsembleFuser::with_default_weights();
    let result = fuser.fuse(
        &GenderEstimate::new(Gender::Unknown, 0.0),
        &GenderEstimate::new(Gender::Unknown, 0.0),
    );
    assert_eq!(result, Gender::Unknown);
}

#[test]
fn test_weighted_disagreement() {
    let fuser = EnsembleFuser::with_default_weights();

    let result = fuser.fuse(
        &GenderEstimate::new(Gender::Male, 0.9),
        &GenderEstimate::new(Gender::Female, 0.1),
    );
    assert_eq!(result, Gender::Male);

    let result = fuser.fuse(
        &GenderEstimate::new(Gender::Male, 0.5),
        &GenderEstimate::new(Gender::Female, 0.9),
    );
    assert_eq!(result, Gender::Female);
}

#[test]
fn test_single_source_boundary() {
    let fuser = EnsembleFuser::with_default_weights();

    let result = fuser.fuse(
        &GenderEstimate::new(Gender::Male, 0.6667),
        &GenderEstimate::new(Gender::Unknown, 0.0),
    );
    assert_eq!(result, Gender::Unknown);

    let result = fuser.fuse(
        &GenderEstimate::new(Gender::Unknown, 0.0),
        &GenderEstimate::new(Gender::Female, 0.85),
    );
    assert_eq!(result, Gender::Female);
}

#[test]
fn test_configured_weights_change_outcome() {
    // With equal weights the more confident bio wins
    let fuser = EnsembleFuser::new(FusionWeights {
        image: 0.5,
        bio: 0.5,
        single_source_threshold: 0.7,
    });

    let result = fuser.fuse(
        &GenderEstimate::new(Gender::Male, 0.6),
        &GenderEstimate::new(Gender::Female, 0.7),
    );
    assert_eq!(result, Gender::Female);
}

#[test]
fn test_age_binning() {
    assert_eq!(bin_age(0), AgeGroup::Unknown);
    assert_eq!(bin_age(18), AgeGroup::Age18To25);
    assert_eq!(bin_age(25), AgeGroup::Age18To25);
    assert_eq!(bin_age(26), AgeGroup::Age26To35);
    assert_eq!(bin_age(51), AgeGroup::Other);
}

#[test]
fn test_empty_region_mapping() {
    let (region, share) = top_region(&Distribution::new());
    assert_eq!(region, "N/A");
    assert_eq!(share, 0.0);
}

#[test]
fn test_target_age_share() {
    let audience = AudienceData {
        follower_age_dist: dist(&[("18-25", 20.0), ("26-35", 45.0), ("36-50", 25.0)]),
        ..Default::default()
    };

    assert_eq!(aggregate_audience(&audience).target_age_share, 65.0);
}

#[test]
fn test_shares_need_not_sum_to_100() {
    let audience = AudienceData {
        follower_regions: dist(&[("US", 80.0), ("CA", 70.0)]),
        follower_age_dist: dist(&[("18-25", 90.0), ("26-35", 90.0)]),
        follower_gender_dist: dist(&[("Female", 150.0)]),
    };

    let vector = aggregate_audience(&audience);
    assert_eq!(vector.top_region, "US");
    assert_eq!(vector.target_age_share, 180.0);
    assert_eq!(vector.female_share, 150.0);
}

#[test]
fn test_assembler_requires_id() {
    let record = InfluencerRecord {
        influencer_id: None,
        gender: Some(Gender::Male),
        age_group: Some(AgeGroup::Age26To35),
    };

    let result = assemble_final_vector(record, aggregate_audience(&AudienceData::default()));
    assert!(matches!(result, Err(AssemblyError::MissingField("influencerId"))));
}

#[test]
fn test_record_from_json_without_id() {
    let record: InfluencerRecord =
        serde_json::from_str(r#"{"gender": "MALE", "ageGroup": "26-35"}"#).unwrap();

    let result = assemble_final_vector(record, aggregate_audience(&AudienceData::default()));
    assert_eq!(result.unwrap_err(), AssemblyError::MissingField("influencerId"));
}
