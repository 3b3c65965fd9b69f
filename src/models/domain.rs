use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use validator::Validate;

/// Category key -> percentage share
///
/// Keys are kept sorted, so a distribution serializes in key order no matter
/// how the input listed them.
pub type Distribution = BTreeMap<String, f64>;

/// Gender label produced by a classifier or by fusion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Gender {
    pub fn is_known(self) -> bool {
        self != Gender::Unknown
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single classifier's gender call with its confidence (0-1)
///
/// The confidence of an `Unknown` label carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct GenderEstimate {
    pub label: Gender,
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence: f64,
}

impl GenderEstimate {
    pub fn new(label: Gender, confidence: f64) -> Self {
        Self { label, confidence }
    }

    /// Sentinel for "no usable signal"
    pub fn unknown() -> Self {
        Self {
            label: Gender::Unknown,
            confidence: 0.0,
        }
    }
}

/// Ordered age brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "18-25")]
    Age18To25,
    #[serde(rename = "26-35")]
    Age26To35,
    #[serde(rename = "36-50")]
    Age36To50,
    #[serde(rename = "Other")]
    Other,
    #[default]
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl AgeGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Age18To25 => "18-25",
            AgeGroup::Age26To35 => "26-35",
            AgeGroup::Age36To50 => "36-50",
            AgeGroup::Other => "Other",
            AgeGroup::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Age bracket derived from the image path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgeEstimate {
    #[serde(rename = "ageGroup")]
    pub age_group: AgeGroup,
}

impl AgeEstimate {
    pub fn new(age_group: AgeGroup) -> Self {
        Self { age_group }
    }

    pub fn unknown() -> Self {
        Self {
            age_group: AgeGroup::Unknown,
        }
    }
}

/// Successful output of the image classifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    pub gender: GenderEstimate,
    pub age: AgeEstimate,
}

impl ImageAnalysis {
    /// What the core sees when image classification failed
    pub fn unknown() -> Self {
        Self {
            gender: GenderEstimate::unknown(),
            age: AgeEstimate::unknown(),
        }
    }
}

/// Raw audience survey statistics
///
/// Shares within one mapping are expected to sum to roughly 100 but nothing
/// depends on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudienceData {
    #[serde(default)]
    pub follower_regions: Distribution,
    #[serde(default)]
    pub follower_age_dist: Distribution,
    #[serde(default)]
    pub follower_gender_dist: Distribution,
}

/// Audience summary plus the raw distributions it was computed from
///
/// `raw_age_dist` and `raw_gender_dist` hold exactly the entries received;
/// only their key order is normalised (see [`Distribution`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicVector {
    #[serde(rename = "topRegion")]
    pub top_region: String,
    #[serde(rename = "topRegionShare")]
    pub top_region_share: f64,
    #[serde(rename = "topRegionDisplay")]
    pub top_region_display: String,
    #[serde(rename = "targetAgeShare")]
    pub target_age_share: f64,
    #[serde(rename = "femaleShare")]
    pub female_share: f64,
    #[serde(rename = "rawAgeDist")]
    pub raw_age_dist: Distribution,
    #[serde(rename = "rawGenderDist")]
    pub raw_gender_dist: Distribution,
}

/// Fused per-influencer identity
///
/// Fields are optional so a record decoded from an external payload can be
/// checked by the assembler instead of silently defaulting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfluencerRecord {
    #[serde(rename = "influencerId", default)]
    pub influencer_id: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(rename = "ageGroup", default)]
    pub age_group: Option<AgeGroup>,
}

impl InfluencerRecord {
    pub fn new(influencer_id: impl Into<String>, gender: Gender, age_group: AgeGroup) -> Self {
        Self {
            influencer_id: Some(influencer_id.into()),
            gender: Some(gender),
            age_group: Some(age_group),
        }
    }
}

/// Terminal artifact handed to the downstream matching stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalVector {
    #[serde(rename = "influencerId")]
    pub influencer_id: String,
    #[serde(rename = "influencerGender")]
    pub influencer_gender: Gender,
    #[serde(rename = "influencerAgeGroup")]
    pub influencer_age_group: AgeGroup,
    #[serde(rename = "demographicsVector")]
    pub demographics_vector: DemographicVector,
}

/// Fusion weights and the single-source confidence threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusionWeights {
    pub image: f64,
    pub bio: f64,
    pub single_source_threshold: f64,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            image: 0.6,
            bio: 0.4,
            single_source_threshold: 0.7,
        }
    }
}
