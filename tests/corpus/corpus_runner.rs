use super::corpus_loader::{CorpusFailure, CorpusResult, TestCase, load_cases};
/// Runs the case table against `fasturl::Url`
use fasturl::Url;

fn check(
    result: &mut Vec<CorpusFailure>,
    section: &str,
    input: &str,
    field: &'static str,
    expected: Option<&str>,
    actual: &str,
) {
    if let Some(expected) = expected {
        if expected != actual {
            result.push(CorpusFailure {
                section: section.to_string(),
                input: input.to_string(),
                field,
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
    }
}

pub fn run_cases(cases: Vec<TestCase>) -> CorpusResult {
    let mut result = CorpusResult::default();
    let mut section = String::new();

    for case in cases {
        match case {
            TestCase::Comment(title) => section = title,
            TestCase::UrlTest {
                input,
                protocol,
                host,
                port,
                path,
                query,
                fragment,
                failure,
            } => {
                let parsed = Url::parse(&input);
                assert_eq!(
                    parsed.is_ok(),
                    Url::can_parse(&input),
                    "can_parse disagrees with parse for {input:?}"
                );

                let url = match (parsed, failure == Some(true)) {
                    (Err(_), true) => {
                        result.passed += 1;
                        continue;
                    }
                    (Ok(url), false) => url,
                    (parsed, _) => {
                        result.failed += 1;
                        result.failures.push(CorpusFailure {
                            section: section.clone(),
                            input: input.clone(),
                            field: "parsing",
                            expected: if parsed.is_ok() { "failure" } else { "success" }
                                .to_string(),
                            actual: if parsed.is_ok() { "success" } else { "failure" }
                                .to_string(),
                        });
                        continue;
                    }
                };

                let before = result.failures.len();
                let failures = &mut result.failures;
                check(failures, &section, &input, "protocol", protocol.as_deref(), url.protocol());
                check(failures, &section, &input, "host", host.as_deref(), url.host());
                check(failures, &section, &input, "port", port.as_deref(), url.port());
                check(failures, &section, &input, "path", path.as_deref(), url.path());
                check(failures, &section, &input, "query", query.as_deref(), url.query());
                check(failures, &section, &input, "fragment", fragment.as_deref(), url.fragment());

                if result.failures.len() == before {
                    result.passed += 1;
                } else {
                    result.failed += 1;
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_cases() {
        let result = run_cases(load_cases());

        if !result.failures.is_empty() {
            eprintln!("\nFailures:");
            for failure in &result.failures {
                eprintln!("  [{}] {:?}: {}", failure.section, failure.input, failure.field);
                eprintln!("    Expected: {:?}", failure.expected);
                eprintln!("    Actual:   {:?}", failure.actual);
            }
        }

        assert!(result.passed > 0, "No cases ran");
        assert_eq!(result.failed, 0, "{}", result.summary());
    }
}
