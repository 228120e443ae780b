use std::{fs, path::Path};

use calc::interpreter::{config::EvalConfig, session::Session};
use walkdir::WalkDir;

/// Renders every `*.in` line under `tests/operations` and compares it with the
/// matching `*.out` file, the way the binary would print it.
#[test]
fn operation_fixtures() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/operations");
    let mut session = Session::new(EvalConfig::default()).unwrap();
    let mut checked = 0;

    for entry in WalkDir::new(&root).sort_by_file_name()
                                    .into_iter()
                                    .filter_map(Result::ok)
                                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "in"))
    {
        let input_path = entry.path();
        let expected_path = input_path.with_extension("out");

        let input = fs::read_to_string(input_path).unwrap();
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                            panic!("missing {}: {e}",
                                                                   expected_path.display())
                                                        });

        let mut actual = String::new();
        for line in input.lines() {
            if let Some(output) = session.render(line.trim_end()) {
                actual.push_str(output);
                actual.push('\n');
            }
        }

        assert_eq!(actual.trim_end(),
                   expected.trim_end(),
                   "fixture {} produced the wrong output",
                   input_path.display());
        checked += 1;
    }

    assert!(checked > 0, "no fixtures found in {}", root.display());
}
