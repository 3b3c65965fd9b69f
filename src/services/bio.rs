use crate::models::{Gender, GenderEstimate};
use crate::services::ClassifierError;
use regex::Regex;

const FEMALE_CUES: [&str; 4] = ["mama", "mom", "she/her", "girl boss"];
const MALE_CUES: [&str; 5] = ["dad", "he/him", "guy", "father", "gearhead"];

/// Rule-based bio classifier
///
/// Stand-in for a fine-tuned text model with the same output contract.
/// Cues are matched as lower-cased substrings and female cues are checked
/// first.
#[derive(Debug, Clone)]
pub struct KeywordBioClassifier {
    noise: Regex,
    female_cues: Vec<String>,
    male_cues: Vec<String>,
    female_confidence: f64,
    male_confidence: f64,
}

impl KeywordBioClassifier {
    pub fn new() -> Self {
        Self {
            // Hashtag and mention markers, links, inline picture references
            noise: Regex::new(r"#|@|http\S+|pic\.\S+").expect("Bio noise regex pattern is valid"),
            female_cues: FEMALE_CUES.iter().map(|c| c.to_string()).collect(),
            male_cues: MALE_CUES.iter().map(|c| c.to_string()).collect(),
            female_confidence: 0.90,
            male_confidence: 0.85,
        }
    }

    /// Strip social-media noise from a bio
    pub fn clean(&self, bio_text: &str) -> String {
        self.noise.replace_all(bio_text, "").trim().to_string()
    }

    /// Classify gender from bio text
    ///
    /// A bio with no recognised cue is a valid `Unknown` answer; only a bio
    /// that is empty after cleaning is an error.
    pub fn classify(&self, bio_text: &str) -> Result<GenderEstimate, ClassifierError> {
        let cleaned = self.clean(bio_text);
        if cleaned.is_empty() {
            return Err(ClassifierError::EmptyText);
        }

        let normalized = cleaned.to_lowercase();

        if let Some(cue) = self.female_cues.iter().find(|c| normalized.contains(c.as_str())) {
            tracing::debug!("Bio matched female cue: {}", cue);
            return Ok(GenderEstimate::new(Gender::Female, self.female_confidence));
        }

        if let Some(cue) = self.male_cues.iter().find(|c| normalized.contains(c.as_str())) {
            tracing::debug!("Bio matched male cue: {}", cue);
            return Ok(GenderEstimate::new(Gender::Male, self.male_confidence));
        }

        Ok(GenderEstimate::unknown())
    }
}

impl Default for KeywordBioClassifier {
    fn default() -> Self {
        Self::new()
    }
}
