use crate::models::{FusionWeights, Gender, GenderEstimate};

/// Ensemble engine reconciling the image and bio gender calls
///
/// # Rules (first match wins)
/// 1. Both sources agree on a known label
/// 2. Both sources are unknown
/// 3. Known labels disagree: compare `confidence * weight`, ties go to the image
/// 4. Exactly one source is known: keep it only above the single-source threshold
///
/// Never fails; `Unknown` is an ordinary input.
#[derive(Debug, Clone, Copy)]
pub struct EnsembleFuser {
    weights: FusionWeights,
}

impl EnsembleFuser {
    pub fn new(weights: FusionWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: FusionWeights::default(),
        }
    }

    pub fn weights(&self) -> &FusionWeights {
        &self.weights
    }

    /// Fuse the image-derived and bio-derived estimates into one label
    pub fn fuse(&self, image: &GenderEstimate, bio: &GenderEstimate) -> Gender {
        match (image.label, bio.label) {
            (Gender::Unknown, Gender::Unknown) => Gender::Unknown,
            (img, txt) if img == txt => img,
            (img, txt) if img.is_known() && txt.is_known() => {
                let image_score = image.confidence * self.weights.image;
                let bio_score = bio.confidence * self.weights.bio;
                tracing::trace!(image_score, bio_score, "weighted disagreement");

                if bio_score > image_score {
                    txt
                } else {
                    img
                }
            }
            (img, _) if img.is_known() => self.single_source(image),
            (_, txt) if txt.is_known() => self.single_source(bio),
            _ => Gender::Unknown,
        }
    }

    /// Only trust a lone source when it is confident
    #[inline]
    fn single_source(&self, estimate: &GenderEstimate) -> Gender {
        if estimate.confidence > self.weights.single_source_threshold {
            estimate.label
        } else {
            Gender::Unknown
        }
    }
}

impl Default for EnsembleFuser {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
