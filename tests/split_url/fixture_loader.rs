/// Fixture loader for `split_url` tests
///
/// Fixtures live in `tests/fixtures/split_url.json`: an array of test
/// objects interleaved with plain comment strings.
use serde::Deserialize;

const FIXTURE: &str = include_str!("../fixtures/split_url.json");

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A URL test case
    UrlTest {
        input: String,
        #[serde(default)]
        scheme: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<u32>,
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        failure: Option<bool>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct Failure {
    pub test_num: usize,
    pub input: String,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<Failure>,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

pub fn load_fixtures() -> Vec<TestCase> {
    serde_json::from_str(FIXTURE).unwrap()
}

#[test]
fn test_load_fixtures() {
    let tests = load_fixtures();
    assert!(
        tests
            .iter()
            .any(|t| matches!(t, TestCase::UrlTest { failure: Some(true), .. }))
    );
    assert!(tests.iter().any(|t| matches!(t, TestCase::Comment(_))));
}
