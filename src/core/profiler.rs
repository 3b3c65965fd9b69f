use crate::models::{
    AudienceData, FinalVector, FusionWeights, GenderEstimate, ImageAnalysis, InfluencerRecord,
};
use crate::core::{
    aggregator::aggregate_audience,
    assembler::{assemble_final_vector, AssemblyError},
    fusion::EnsembleFuser,
};

/// Per-influencer orchestrator
///
/// # Pipeline Stages
/// 1. Fuse the image and bio gender estimates
/// 2. Take the age group from the image path
/// 3. Aggregate the audience distributions
/// 4. Assemble the final vector
///
/// Classifier outputs arrive already converted to sentinels; nothing here
/// performs I/O.
#[derive(Debug, Clone)]
pub struct InfluencerProfiler {
    fuser: EnsembleFuser,
}

impl InfluencerProfiler {
    pub fn new(weights: FusionWeights) -> Self {
        Self {
            fuser: EnsembleFuser::new(weights),
        }
    }

    pub fn with_default_weights() -> Self {
        Self {
            fuser: EnsembleFuser::with_default_weights(),
        }
    }

    pub fn fuser(&self) -> &EnsembleFuser {
        &self.fuser
    }

    /// Build the fused identity record for one influencer
    pub fn profile(
        &self,
        influencer_id: Option<String>,
        image: &ImageAnalysis,
        bio: &GenderEstimate,
    ) -> InfluencerRecord {
        let gender = self.fuser.fuse(&image.gender, bio);

        InfluencerRecord {
            influencer_id,
            gender: Some(gender),
            age_group: Some(image.age.age_group),
        }
    }

    /// Combine an influencer record with its aggregated audience
    pub fn build_vector(
        &self,
        record: InfluencerRecord,
        audience: &AudienceData,
    ) -> Result<FinalVector, AssemblyError> {
        let demographics = aggregate_audience(audience);
        assemble_final_vector(record, demographics)
    }
}

impl Default for InfluencerProfiler {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
