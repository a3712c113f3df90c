//! Test fixture loader for golden gap-analysis scenarios, plus profile builders.
//!
//! Golden files live in `test-fixtures/golden/` at the workspace root. Each holds
//! an `input.profiles` array and an `expected` object.

use std::path::PathBuf;

use culture_core::models::{DimensionId, Profile, ProfileId, Scores};
use serde::de::DeserializeOwned;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures/golden.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Deserialize the `input.profiles` array of a golden fixture.
pub fn load_profiles(relative_path: &str) -> Vec<Profile> {
    let fixture = load_fixture_value(relative_path);
    serde_json::from_value(fixture["input"]["profiles"].clone())
        .unwrap_or_else(|e| panic!("Fixture {} has invalid input.profiles: {}", relative_path, e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// A named profile with every dimension at `base`, except the listed overrides.
///
/// # Panics
/// Panics on scores above 100.
pub fn profile(id: u32, name: &str, base: u8, overrides: &[(DimensionId, u8)]) -> Profile {
    let mut scores = Scores::uniform(base).expect("base score in range");
    for &(dimension, value) in overrides {
        scores = scores.with(dimension, value).expect("override score in range");
    }
    Profile::new(ProfileId(id), name, scores)
}

/// A named profile from scores in canonical dimension order.
pub fn profile_from(id: u32, name: &str, values: [u8; 8]) -> Profile {
    Profile::new(
        ProfileId(id),
        name,
        Scores::new(values).expect("scores in range"),
    )
}
