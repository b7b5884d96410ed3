/// Case table loader
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// Expected fields of one input. A field left out of the JSON is not
    /// checked.
    UrlTest {
        input: String,
        #[serde(default)]
        protocol: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<String>,
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        query: Option<String>,
        #[serde(default)]
        fragment: Option<String>,
        #[serde(default)]
        failure: Option<bool>,
    },
    /// Section title
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct CorpusResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<CorpusFailure>,
}

#[derive(Debug, Clone)]
pub struct CorpusFailure {
    pub section: String,
    pub input: String,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

impl CorpusResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

pub fn load_cases() -> Vec<TestCase> {
    let data = include_str!("./urlcases.json");
    serde_json::from_str(data).unwrap_or_else(|e| panic!("urlcases.json is malformed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cases() {
        let cases = load_cases();
        let titles = cases
            .iter()
            .filter(|c| matches!(c, TestCase::Comment(_)))
            .count();
        assert!(titles > 0);
        assert!(cases.len() > titles + 50);
    }

    #[test]
    fn test_partial_case_deserializes() {
        let case: TestCase = serde_json::from_str(r#"{"input": "h", "host": "h"}"#).unwrap();
        match case {
            TestCase::UrlTest {
                host, port, failure, ..
            } => {
                assert_eq!(host.as_deref(), Some("h"));
                assert_eq!(port, None);
                assert_eq!(failure, None);
            }
            TestCase::Comment(_) => panic!("object parsed as a title"),
        }
    }
}
