use crate::models::{DemographicVector, FinalVector, InfluencerRecord};
use thiserror::Error;

/// Errors raised while assembling the final vector
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Combine an influencer record with its audience vector
///
/// Identity fields are required: a record with no id, gender or age group is
/// rejected rather than defaulted. A blank id counts as missing.
pub fn assemble_final_vector(
    record: InfluencerRecord,
    demographics: DemographicVector,
) -> Result<FinalVector, AssemblyError> {
    let influencer_id = record
        .influencer_id
        .filter(|id| !id.trim().is_empty())
        .ok_or(AssemblyError::MissingField("influencerId"))?;
    let influencer_gender = record
        .gender
        .ok_or(AssemblyError::MissingField("gender"))?;
    let influencer_age_group = record
        .age_group
        .ok_or(AssemblyError::MissingField("ageGroup"))?;

    Ok(FinalVector {
        influencer_id,
        influencer_gender,
        influencer_age_group,
        demographics_vector: demographics,
    })
}
