#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

pub const MUTATOR: &str = "org.pitest.mutationtest.engine.gregor.mutators.NegateConditionalsMutator";

pub fn utf8(dir: &tempfile::TempDir) -> Utf8PathBuf {
    Utf8Path::from_path(dir.path()).unwrap().to_path_buf()
}

/// `target/` with both mutation reports for `be.game.Board.canMove(I)Z`.
pub fn write_reports(target: &Utf8Path) {
    fs::create_dir_all(target).unwrap();
    fs::write(
        target.join("mutations.json"),
        format!(
            r#"{{"mutations": [
              {{"status": "SURVIVED", "mutator": "{MUTATOR}",
                "method": {{"package": "be.game", "class": "Board", "name": "canMove", "description": "(I)Z"}},
                "tests": {{"ordered": ["be.game.BoardTest.testCanMove(be.game.BoardTest)"]}}}},
              {{"status": "KILLED", "mutator": "{MUTATOR}",
                "method": {{"package": "be.game", "class": "Board", "name": "reset", "description": "()V"}},
                "tests": {{"ordered": ["be.game.BoardTest.testReset(be.game.BoardTest)"]}}}}
            ]}}"#
        ),
    )
    .unwrap();
    fs::write(
        target.join("mutations.xml"),
        r#"<?xml version="1.0" encoding="UTF-8"?>
<mutations>
  <mutation detected="false" status="SURVIVED">
    <mutatedClass>be.game.Board</mutatedClass>
    <mutatedMethod>canMove</mutatedMethod>
    <methodDescription>(I)Z</methodDescription>
    <lineNumber>57</lineNumber>
  </mutation>
</mutations>"#,
    )
    .unwrap();
}

pub fn mutation_json(method: &str, description: &str) -> String {
    format!(
        r#"{{"package": "be.game", "class": "Board", "method": "{method}", "description": "{description}",
            "mutator": "{MUTATOR}", "tests": ["be.game.OtherTest.fallback()"]}}"#
    )
}

pub fn write_folder(folder: &Utf8Path, mutation: &str, hints: &str, diffs: Option<&str>) {
    fs::create_dir_all(folder).unwrap();
    fs::write(folder.join("mutation.json"), mutation).unwrap();
    fs::write(folder.join("hints.json"), hints).unwrap();
    if let Some(d) = diffs {
        fs::write(folder.join("diff.json"), d).unwrap();
    }
}

pub const INFECTION_DIRECT: &str = r#"{
  "hint-type": "infection",
  "entry-points": [
    {"class": "be.game.Game", "method": "play", "desc": "()V"},
    {"class": "be.game.Board", "method": "canMove", "desc": "(I)Z"}
  ]
}"#;

pub const TWO_DIFFS: &str = r#"[
  {"pointcut": "be.game.Board|canMove|3", "expected": [{"literalValue": "true"}], "unexpected": [{"literalValue": "false"}]},
  {"pointcut": "be.game.Board|canMove|0|1|#result", "expected": [{"isNull": false}], "unexpected": [{"isNull": true}]}
]"#;
