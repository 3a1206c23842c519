use super::fixture_loader::{Failure, FixtureResult, TestCase, load_fixtures};
/// Fixture runner
///
/// Splits every fixture input and compares each component
use strutils::split_url;

fn check<T: PartialEq + ToString>(
    result: &mut Vec<Failure>,
    test_num: usize,
    input: &str,
    field: &'static str,
    expected: Option<T>,
    actual: T,
) -> bool {
    match expected {
        Some(expected) if expected != actual => {
            result.push(Failure {
                test_num,
                input: input.to_string(),
                field,
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
            false
        }
        _ => true,
    }
}

pub fn run_fixtures(tests: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::default();
    let mut test_num = 0;

    for test in tests {
        let TestCase::UrlTest {
            input,
            scheme,
            host,
            port,
            path,
            failure,
        } = test
        else {
            continue;
        };
        test_num += 1;

        let mut buffer = input.clone();
        let parts = match split_url(&mut buffer) {
            Ok(parts) if failure == Some(true) => {
                result.failed += 1;
                result.failures.push(Failure {
                    test_num,
                    input,
                    field: "parsing",
                    expected: "failure".to_string(),
                    actual: parts.to_string(),
                });
                continue;
            }
            Ok(parts) => parts,
            Err(e) => {
                if failure == Some(true) {
                    result.passed += 1;
                } else {
                    result.failed += 1;
                    result.failures.push(Failure {
                        test_num,
                        input,
                        field: "parsing",
                        expected: "success".to_string(),
                        actual: e.to_string(),
                    });
                }
                continue;
            }
        };

        let failures = &mut result.failures;
        let ok = [
            check(failures, test_num, &input, "scheme", scheme.as_deref(), parts.scheme),
            check(failures, test_num, &input, "host", host.as_deref(), parts.host),
            check(failures, test_num, &input, "port", port, parts.port),
            check(failures, test_num, &input, "path", path.as_deref(), parts.path),
        ];

        if ok.iter().all(|&passed| passed) {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
    }

    result
}

#[test]
fn test_split_url_fixtures() {
    let result = run_fixtures(load_fixtures());
    for failure in &result.failures {
        eprintln!(
            "#{} {:?}: {} expected {:?}, got {:?}",
            failure.test_num, failure.input, failure.field, failure.expected, failure.actual
        );
    }
    assert_eq!(result.failed, 0, "{}", result.summary());
    assert!(result.passed > 0);
}
