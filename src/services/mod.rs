// Service exports
pub mod bio;
pub mod error;
pub mod image;

pub use bio::KeywordBioClassifier;
pub use error::ClassifierError;
pub use image::{DeepFaceClient, FaceAnalysis};
