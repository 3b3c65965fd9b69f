use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{AudienceData, GenderEstimate};

/// Request to build the full demographic vector for one influencer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BuildVectorRequest {
    #[validate(length(max = 128))]
    #[serde(alias = "influencer_id", rename = "influencerId", default)]
    pub influencer_id: Option<String>,
    #[validate(length(min = 1, max = 4096))]
    #[serde(alias = "image_path", rename = "imagePath", default)]
    pub image_path: Option<String>,
    #[validate(length(max = 2200))]
    #[serde(alias = "bio_text", rename = "bioText", default)]
    pub bio_text: String,
    #[serde(default)]
    pub audience: AudienceData,
}

/// Request to fuse two precomputed gender estimates
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FuseGenderRequest {
    #[validate(nested)]
    pub image: GenderEstimate,
    #[validate(nested)]
    pub bio: GenderEstimate,
}
