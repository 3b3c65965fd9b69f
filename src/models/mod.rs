// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AgeEstimate, AgeGroup, AudienceData, DemographicVector, Distribution, FinalVector,
    FusionWeights, Gender, GenderEstimate, ImageAnalysis, InfluencerRecord,
};
pub use requests::{BuildVectorRequest, FuseGenderRequest};
pub use responses::{ErrorResponse, FuseGenderResponse, HealthResponse};
