use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{aggregate_audience, AssemblyError, InfluencerProfiler};
use crate::models::{
    AudienceData, BuildVectorRequest, ErrorResponse, FuseGenderRequest, FuseGenderResponse,
    GenderEstimate, HealthResponse, ImageAnalysis,
};
use crate::services::{ClassifierError, DeepFaceClient, KeywordBioClassifier};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub image_classifier: Arc<DeepFaceClient>,
    pub bio_classifier: Arc<KeywordBioClassifier>,
    pub profiler: InfluencerProfiler,
}

/// Configure all demographics routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/demographics/vector", web::post().to(build_vector))
        .route("/demographics/audience", web::post().to(aggregate))
        .route("/demographics/fuse", web::post().to(fuse_gender));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Build the final demographic vector for one influencer
///
/// POST /api/v1/demographics/vector
///
/// Request body:
/// ```json
/// {
///   "influencerId": "string",
///   "imagePath": "/path/to/profile.jpg",
///   "bioText": "string",
///   "audience": {
///     "follower_regions": {"US": 40.2},
///     "follower_age_dist": {"18-25": 20.0},
///     "follower_gender_dist": {"Female": 19.5}
///   }
/// }
/// ```
async fn build_vector(
    state: web::Data<AppState>,
    req: web::Json<BuildVectorRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for build_vector request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let request_id = uuid::Uuid::new_v4();

    // Identity is required; reject before spending time on the classifiers
    if req
        .influencer_id
        .as_deref()
        .map_or(true, |id| id.trim().is_empty())
    {
        return missing_field_response(request_id, AssemblyError::MissingField("influencerId"));
    }

    tracing::info!(
        %request_id,
        "Building demographic vector for influencer: {:?}",
        req.influencer_id
    );

    // Both classifiers are independent; join before fusing
    let (image, bio) = tokio::join!(
        classify_image(&state.image_classifier, req.image_path.as_deref()),
        async { classify_bio(&state.bio_classifier, &req.bio_text) }
    );

    let record = state.profiler.profile(req.influencer_id, &image, &bio);

    match state.profiler.build_vector(record, &req.audience) {
        Ok(vector) => {
            tracing::info!(
                %request_id,
                "Vector built for {}: gender={}, age_group={}, top_region={}",
                vector.influencer_id,
                vector.influencer_gender,
                vector.influencer_age_group,
                vector.demographics_vector.top_region_display
            );
            HttpResponse::Ok().json(vector)
        }
        Err(e) => missing_field_response(request_id, e),
    }
}

fn missing_field_response(request_id: uuid::Uuid, e: AssemblyError) -> HttpResponse {
    tracing::info!(%request_id, "Rejected influencer record: {}", e);
    HttpResponse::UnprocessableEntity().json(ErrorResponse {
        error: "missing_field".to_string(),
        message: e.to_string(),
        status_code: 422,
    })
}

/// Aggregate raw audience statistics
///
/// POST /api/v1/demographics/audience
async fn aggregate(req: web::Json<AudienceData>) -> impl Responder {
    let vector = aggregate_audience(&req);

    tracing::debug!(
        "Aggregated audience: top_region={}, target_age_share={:.1}, female_share={:.1}",
        vector.top_region_display,
        vector.target_age_share,
        vector.female_share
    );

    HttpResponse::Ok().json(vector)
}

/// Fuse two precomputed gender estimates
///
/// POST /api/v1/demographics/fuse
///
/// Request body:
/// ```json
/// {
///   "image": {"label": "MALE", "confidence": 0.9},
///   "bio": {"label": "FEMALE", "confidence": 0.1}
/// }
/// ```
async fn fuse_gender(
    state: web::Data<AppState>,
    req: web::Json<FuseGenderRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let gender = state.profiler.fuser().fuse(&req.image, &req.bio);

    HttpResponse::Ok().json(FuseGenderResponse { gender })
}

/// Run image classification, absorbing failures into the unknown sentinel
async fn classify_image(client: &DeepFaceClient, image_path: Option<&str>) -> ImageAnalysis {
    let Some(path) = image_path else {
        tracing::debug!("No image supplied, image signal is unknown");
        return ImageAnalysis::unknown();
    };

    match client.analyze(path).await {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::warn!("Image classification failed, defaulting to UNKNOWN: {}", e);
            ImageAnalysis::unknown()
        }
    }
}

/// Run bio classification, absorbing failures into the unknown sentinel
fn classify_bio(classifier: &KeywordBioClassifier, bio_text: &str) -> GenderEstimate {
    match classifier.classify(bio_text) {
        Ok(estimate) => estimate,
        Err(ClassifierError::EmptyText) => {
            tracing::debug!("Empty bio, bio signal is unknown");
            GenderEstimate::unknown()
        }
        Err(e) => {
            tracing::warn!("Bio classification failed, defaulting to UNKNOWN: {}", e);
            GenderEstimate::unknown()
        }
    }
}
