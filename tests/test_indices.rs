use mutant_hints::location_index::{LocationIndex, MethodKey};
use mutant_hints::mutation_index::{MutationIdentity, MutationIndex};
use mutant_hints::test_case::TestCase;

const MUTATIONS_JSON: &str = r#"{
  "mutations": [
    {
      "status": "SURVIVED",
      "mutator": "org.pitest.mutationtest.engine.gregor.mutators.MathMutator",
      "method": {"package": "be.game", "class": "Board", "name": "score", "description": "(I)I"},
      "tests": {"ordered": ["be.game.BoardTest.testScore(be.game.BoardTest)", "be.game.BoardTest.be.game.BoardTest"]}
    },
    {
      "status": "KILLED",
      "mutator": "org.pitest.mutationtest.engine.gregor.mutators.MathMutator",
      "method": {"package": "be.game", "class": "Board", "name": "reset", "description": "()V"},
      "tests": {"ordered": ["be.game.BoardTest.testReset()"]}
    },
    {
      "status": "survived",
      "mutator": "VoidMethodCallMutator",
      "method": {"package": "be.game", "class": "Board", "name": "clear", "description": "()V"}
    }
  ]
}"#;

fn id(method: &str, descriptor: &str, mutator: &str) -> MutationIdentity {
    MutationIdentity {
        package: "be.game".into(),
        class: "Board".into(),
        method: method.into(),
        descriptor: descriptor.into(),
        mutator: mutator.into(),
    }
}

#[test]
fn keeps_only_survived_mutants() {
    let index = MutationIndex::from_json(MUTATIONS_JSON).unwrap();
    assert_eq!(index.len(), 1);
    assert!(!index.contains(&id(
        "reset",
        "()V",
        "org.pitest.mutationtest.engine.gregor.mutators.MathMutator"
    )));
    // Status matching is case-sensitive.
    assert!(!index.contains(&id("clear", "()V", "VoidMethodCallMutator")));
}

#[test]
fn non_survived_mutants_are_remembered_as_rejected() {
    let index = MutationIndex::from_json(MUTATIONS_JSON).unwrap();
    assert!(index.is_rejected(&id(
        "reset",
        "()V",
        "org.pitest.mutationtest.engine.gregor.mutators.MathMutator"
    )));
    assert!(index.is_rejected(&id("clear", "()V", "VoidMethodCallMutator")));
    assert!(!index.is_rejected(&id(
        "score",
        "(I)I",
        "org.pitest.mutationtest.engine.gregor.mutators.MathMutator"
    )));
    assert!(!index.is_rejected(&id("absent", "()V", "VoidMethodCallMutator")));
}

#[test]
fn survived_entry_wins_over_killed_twin() {
    let json = r#"{"mutations": [
      {"status": "KILLED", "mutator": "M", "method": {"package": "p", "class": "C", "name": "m", "description": "()V"}},
      {"status": "SURVIVED", "mutator": "M", "method": {"package": "p", "class": "C", "name": "m", "description": "()V"}}
    ]}"#;
    let index = MutationIndex::from_json(json).unwrap();
    let twin = MutationIdentity {
        package: "p".into(),
        class: "C".into(),
        method: "m".into(),
        descriptor: "()V".into(),
        mutator: "M".into(),
    };
    assert!(index.contains(&twin));
    assert!(!index.is_rejected(&twin));
}

#[test]
fn tests_are_parsed_in_order() {
    let index = MutationIndex::from_json(MUTATIONS_JSON).unwrap();
    let tests = index
        .tests_for(&id(
            "score",
            "(I)I",
            "org.pitest.mutationtest.engine.gregor.mutators.MathMutator",
        ))
        .unwrap();
    assert_eq!(
        tests,
        &[
            TestCase {
                class: "be.game.BoardTest".into(),
                method: Some("testScore".into()),
            },
            TestCase::class_only("be.game.BoardTest"),
        ]
    );
}

#[test]
fn identity_includes_mutator() {
    let index = MutationIndex::from_json(MUTATIONS_JSON).unwrap();
    assert!(index.tests_for(&id("score", "(I)I", "OtherMutator")).is_none());
}

#[test]
fn malformed_json_report_is_an_error() {
    assert!(MutationIndex::from_json(r#"{"mutations": [{"status": "SURVIVED"}]}"#).is_err());
}

#[test]
fn load_keeps_the_path_in_errors() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = camino::Utf8Path::from_path(dir.path()).unwrap();
    let path = root.join("mutations.json");
    std::fs::write(&path, "not json").unwrap();
    let err = MutationIndex::load(&path).unwrap_err();
    assert!(err.to_string().contains("mutations.json"), "{err}");

    let missing = MutationIndex::load(&root.join("absent.json")).unwrap_err();
    assert!(matches!(missing, mutant_hints::ReportError::MissingArtifact(_)));
}

const MUTATIONS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<mutations>
  <mutation detected="false" status="SURVIVED" numberOfTestsRun="2">
    <sourceFile>Board.java</sourceFile>
    <mutatedClass>be.game.Board</mutatedClass>
    <mutatedMethod>score</mutatedMethod>
    <methodDescription>(I)I</methodDescription>
    <lineNumber>42</lineNumber>
    <mutator>org.pitest.mutationtest.engine.gregor.mutators.MathMutator</mutator>
  </mutation>
  <mutation detected="true" status="KILLED" numberOfTestsRun="1">
    <mutatedClass>be.game.Board</mutatedClass>
    <mutatedMethod>reset</mutatedMethod>
    <methodDescription>()V</methodDescription>
    <lineNumber>12</lineNumber>
  </mutation>
</mutations>"#;

#[test]
fn location_index_maps_survived_mutants_to_lines() {
    let index = LocationIndex::from_xml(MUTATIONS_XML).unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index.line_for(&MethodKey::new("be.game.Board", "score", "(I)I")), Some(42));
    assert_eq!(index.line_for(&MethodKey::new("be.game.Board", "reset", "()V")), None);
}

#[test]
fn location_index_rejects_bad_line_numbers() {
    let xml = r#"<mutations><mutation status="SURVIVED">
      <mutatedClass>a.B</mutatedClass><mutatedMethod>m</mutatedMethod>
      <methodDescription>()V</methodDescription><lineNumber>abc</lineNumber>
    </mutation></mutations>"#;
    assert!(LocationIndex::from_xml(xml).is_err());
}

#[test]
fn missing_xml_report_gives_empty_index() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = camino::Utf8Path::from_path(dir.path()).unwrap();
    let index = LocationIndex::load(&root.join("mutations.xml")).unwrap();
    assert!(index.is_empty());
}

#[test]
fn malformed_xml_report_is_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = camino::Utf8Path::from_path(dir.path()).unwrap();
    let path = root.join("mutations.xml");
    std::fs::write(&path, "<mutations><mutation>").unwrap();
    assert!(matches!(
        LocationIndex::load(&path),
        Err(mutant_hints::ReportError::Xml { .. })
    ));
}
