use super::case_loader::{CaseResult, TestCase, load_cases};
/// Fixture runner
///
/// Runs the JSON cases against `SearchStore`
use urlsearch::SearchStore;

pub fn run_cases(cases: Vec<TestCase>) -> CaseResult {
    let mut result = CaseResult::default();

    for case in cases {
        let TestCase::SearchTest {
            input,
            search,
            json,
            keys,
            strict_failure,
        } = case
        else {
            continue;
        };

        let store = SearchStore::parse("/", &input);
        result.check(&input, "search", search, store.search());
        result.check(
            &input,
            "json",
            format!("{json:?}"),
            format!("{:?}", store.json()),
        );

        if let Some(keys) = keys {
            result.check(
                &input,
                "keys",
                format!("{keys:?}"),
                format!("{:?}", store.keys()),
            );
        }

        // Re-parsing the canonical form keeps the mapping
        let reparsed = SearchStore::parse("/", &store.search());
        result.check(
            &input,
            "round_trip",
            format!("{:?}", store.json()),
            format!("{:?}", reparsed.json()),
        );

        let strict = SearchStore::try_parse("/", &input);
        result.check(
            &input,
            "strict",
            strict_failure.unwrap_or(false).to_string(),
            strict.is_err().to_string(),
        );
    }

    result
}

#[test]
fn test_fixture_cases() {
    let result = run_cases(load_cases());
    assert!(
        result.failures.is_empty(),
        "{}\n{:#?}",
        result.summary(),
        result.failures
    );
}
