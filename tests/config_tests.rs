// Configuration layering tests
//
// Environment variables are process-wide, so every scenario lives in one test.

use demographics_classifier::config::Settings;
use demographics_classifier::models::FusionWeights;
use std::env;

const IMAGE_WEIGHT_VAR: &str = "DEMOGRAPHICS__FUSION__WEIGHTS__IMAGE";
const DEEPFACE_URL_VAR: &str = "DEEPFACE_URL";

fn write_config(contents: &str) -> std::path::PathBuf {
    let path = env::temp_dir().join(format!("demographics-{}.toml", uuid::Uuid::new_v4()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_config_layering() {
    let path = write_config(
        r#"
[classifier]
deepface_url = "http://file-host:5005"

[fusion.weights]
bio = 0.3
"#,
    );

    env::remove_var(IMAGE_WEIGHT_VAR);
    env::remove_var(DEEPFACE_URL_VAR);

    // File only: unspecified fields keep their defaults
    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.classifier.deepface_url, "http://file-host:5005");
    assert_eq!(
        settings.fusion_weights(),
        FusionWeights {
            image: 0.6,
            bio: 0.3,
            single_source_threshold: 0.7,
        }
    );

    // Environment overrides the file
    env::set_var(IMAGE_WEIGHT_VAR, "0.55");
    env::set_var(DEEPFACE_URL_VAR, "http://env-host:1");

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.classifier.deepface_url, "http://env-host:1");
    assert_eq!(settings.fusion_weights().image, 0.55);
    assert_eq!(settings.fusion_weights().bio, 0.3);

    // Same layering through the default config location
    let settings = Settings::load().unwrap();
    assert_eq!(settings.classifier.deepface_url, "http://env-host:1");
    assert_eq!(settings.fusion_weights().image, 0.55);
    assert_eq!(settings.fusion_weights().bio, 0.4);

    env::remove_var(IMAGE_WEIGHT_VAR);
    env::remove_var(DEEPFACE_URL_VAR);
    let _ = std::fs::remove_file(path);
}
