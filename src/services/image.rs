use crate::core::bin_age;
use crate::models::{AgeEstimate, Gender, GenderEstimate, ImageAnalysis};
use crate::services::ClassifierError;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;

/// Client for a DeepFace-compatible `/analyze` endpoint
///
/// Constructed once at startup and shared through application state. Every
/// call returns a `Result`; converting failures into the `UNKNOWN` sentinel is
/// left to the caller.
pub struct DeepFaceClient {
    base_url: String,
    client: Client,
}

/// One analysed face as returned by DeepFace
#[derive(Debug, Clone, Deserialize)]
pub struct FaceAnalysis {
    #[serde(default)]
    pub age: f64,
    /// Label -> probability in percent, e.g. `{"Man": 98.7, "Woman": 1.3}`
    #[serde(default)]
    pub gender: HashMap<String, f64>,
}

impl DeepFaceClient {
    /// Create a new DeepFace client
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, ClassifierError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { base_url, client })
    }

    /// Estimate gender and age group from a profile image
    pub async fn analyze(&self, image_path: &str) -> Result<ImageAnalysis, ClassifierError> {
        if tokio::fs::metadata(image_path).await.is_err() {
            return Err(ClassifierError::ImageNotFound(image_path.to_string()));
        }

        let url = format!("{}/analyze", self.base_url.trim_end_matches('/'));

        tracing::debug!("Requesting image analysis from: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "img_path": image_path,
                "actions": ["age", "gender"],
                "enforce_detection": false,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClassifierError::Api(format!(
                "Failed to analyze image: {}",
                response.status()
            )));
        }

        let body: Value = response.json().await?;
        let face = first_face(body)?;

        let analysis = map_face(&face);
        tracing::debug!(
            "Image analysis for {}: gender={} ({:.2}), age_group={}",
            image_path,
            analysis.gender.label,
            analysis.gender.confidence,
            analysis.age.age_group
        );

        Ok(analysis)
    }
}

/// Pull the first face out of an analysis response
///
/// Accepts the `{"results": [...]}` envelope, a bare array, or a single
/// object.
fn first_face(body: Value) -> Result<FaceAnalysis, ClassifierError> {
    let face = match body {
        Value::Object(mut map) if map.contains_key("results") => match map.remove("results") {
            Some(Value::Array(results)) => results.into_iter().next(),
            _ => {
                return Err(ClassifierError::InvalidResponse(
                    "results is not an array".into(),
                ))
            }
        },
        Value::Array(results) => results.into_iter().next(),
        obj @ Value::Object(_) => Some(obj),
        other => {
            return Err(ClassifierError::InvalidResponse(format!(
                "unexpected body: {}",
                other
            )))
        }
    };

    let face = face.ok_or(ClassifierError::NoFaceDetected)?;

    serde_json::from_value(face)
        .map_err(|e| ClassifierError::InvalidResponse(format!("Failed to parse face: {}", e)))
}

/// Convert a DeepFace face result into the core's contract
///
/// Unrecognised labels are dropped, then the most probable remaining gender
/// wins (ties go to the smaller label name); its probability is rescaled from
/// percent to 0-1.
pub fn map_face(face: &FaceAnalysis) -> ImageAnalysis {
    let gender = face
        .gender
        .iter()
        .map(|(label, &prob)| (parse_gender(label), label, prob))
        .filter(|(gender, _, _)| gender.is_known())
        .max_by(|(_, label_a, prob_a), (_, label_b, prob_b)| {
            prob_a
                .total_cmp(prob_b)
                .then_with(|| label_b.cmp(label_a))
        })
        .map(|(gender, _, prob)| GenderEstimate::new(gender, (prob / 100.0).clamp(0.0, 1.0)))
        .unwrap_or_else(GenderEstimate::unknown);

    let age = if face.age.is_finite() { face.age.trunc() as i32 } else { 0 };

    ImageAnalysis {
        gender,
        age: AgeEstimate::new(bin_age(age)),
    }
}

fn parse_gender(label: &str) -> Gender {
    match label.to_lowercase().as_str() {
        "man" | "male" => Gender::Male,
        "woman" | "female" => Gender::Female,
        _ => Gender::Unknown,
    }
}
