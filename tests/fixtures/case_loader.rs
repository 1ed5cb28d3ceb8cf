/// Search fixture loader
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum TestCase {
    /// A query-string test case
    SearchTest {
        input: String,
        search: String,
        json: BTreeMap<String, Vec<String>>,
        #[serde(default)]
        keys: Option<Vec<String>>,
        #[serde(default)]
        strict_failure: Option<bool>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct CaseFailure {
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct CaseResult {
    pub passed: usize,
    pub failures: Vec<CaseFailure>,
}

impl CaseResult {
    pub fn check(&mut self, input: &str, field: &str, expected: String, actual: String) {
        if expected == actual {
            self.passed += 1;
        } else {
            self.failures.push(CaseFailure {
                input: input.to_string(),
                field: field.to_string(),
                expected,
                actual,
            });
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Passed: {}, Failed: {}",
            self.passed,
            self.failures.len()
        )
    }
}

pub fn load_cases() -> Vec<TestCase> {
    let data = include_str!("search_cases.json");
    serde_json::from_str(data).unwrap_or_else(|e| panic!("invalid fixture data: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cases() {
        let cases = load_cases();
        let comments = cases
            .iter()
            .filter(|case| matches!(case, TestCase::Comment(_)))
            .count();
        assert_eq!(comments, 4);
        assert_eq!(cases.len() - comments, 16);
    }

    #[test]
    fn test_case_result() {
        let mut result = CaseResult::default();
        result.check("a", "search", "x".into(), "x".into());
        result.check("a", "search", "x".into(), "y".into());
        assert_eq!(result.passed, 1);
        assert_eq!(result.summary(), "Passed: 1, Failed: 1");
    }
}
