//! Demographics Classifier - influencer demographic inference for brand matching
//!
//! Fuses an image-based and a bio-based gender estimate into one label, bins
//! the image age estimate, and reduces raw audience distributions into a
//! compact targeting vector for the downstream matchmaker.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{aggregate_audience, assemble_final_vector, bin_age, AssemblyError, EnsembleFuser, InfluencerProfiler};
pub use models::{AudienceData, DemographicVector, FinalVector, FusionWeights, Gender, GenderEstimate, InfluencerRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let fuser = EnsembleFuser::default();
        let gender = fuser.fuse(
            &GenderEstimate::new(Gender::Female, 0.8),
            &GenderEstimate::new(Gender::Female, 0.2),
        );
        assert_eq!(gender, Gender::Female);
    }
}
