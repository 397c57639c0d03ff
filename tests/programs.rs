use std::fs;

use fplang::interpreter::session::Session;
use walkdir::WalkDir;

#[test]
fn program_fixtures_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").sort_by_file_name()
                                      .into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "fp"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = expected_output(&source).unwrap_or_else(|| {
                           panic!("{path:?} does not start with an `// expect:` line")
                       });

        count += 1;
        let output = Session::new().run(&source);
        assert_eq!(output, expected, "Program {path:?} produced the wrong output");
    }

    assert!(count > 0, "No programs found in tests/programs");
}

/// Reads the expected output from a leading `// expect: ...` comment.
fn expected_output(source: &str) -> Option<&str> {
    source.lines()
          .next()
          .and_then(|line| line.strip_prefix("// expect:"))
          .map(str::trim)
}
