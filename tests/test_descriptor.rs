use mutant_hints::ReportError;
use mutant_hints::descriptor::{MethodRef, parse_descriptor, render_signature};

#[test]
fn empty_void_descriptor() {
    let sig = parse_descriptor("()V").unwrap();
    assert!(sig.params.is_empty());
    assert!(sig.is_void);
    assert_eq!(sig.return_type, "void");
}

#[test]
fn primitive_and_class_array_params() {
    let sig = parse_descriptor("(I[Ljava/lang/String;)Z").unwrap();
    assert_eq!(sig.params, vec!["int", "java.lang.String[]"]);
    assert_eq!(sig.return_type, "boolean");
    assert!(!sig.is_void);
}

#[test]
fn all_primitive_codes() {
    let sig = parse_descriptor("(BCDFIJSZ)J").unwrap();
    assert_eq!(
        sig.params,
        vec!["byte", "char", "double", "float", "int", "long", "short", "boolean"]
    );
    assert_eq!(sig.return_type, "long");
}

#[test]
fn nested_arrays() {
    let sig = parse_descriptor("([[I[[[Ljava/util/List;)[[Ljava/lang/Object;").unwrap();
    assert_eq!(sig.params, vec!["int[][]", "java.util.List[][][]"]);
    assert_eq!(sig.return_type, "java.lang.Object[][]");
}

#[test]
fn class_return_type() {
    let sig = parse_descriptor("(J)Ljava/lang/String;").unwrap();
    assert_eq!(sig.params, vec!["long"]);
    assert_eq!(sig.return_type, "java.lang.String");
}

#[test]
fn parsing_is_deterministic() {
    let a = parse_descriptor("(ILjava/util/Map;[D)V").unwrap();
    let b = parse_descriptor("(ILjava/util/Map;[D)V").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.param_list(), "(int, java.util.Map, double[])");
}

#[test]
fn unknown_primitive_is_an_error() {
    let err = parse_descriptor("(Q)V").unwrap_err();
    match err {
        ReportError::MalformedDescriptor { descriptor, reason } => {
            assert_eq!(descriptor, "(Q)V");
            assert!(reason.contains("`Q`"), "reason: {reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unterminated_class_reference_is_an_error() {
    assert!(matches!(
        parse_descriptor("(Ljava/lang/String)V"),
        Err(ReportError::MalformedDescriptor { .. })
    ));
}

#[test]
fn structural_errors() {
    for bad in ["", "I)V", "(I", "(I)", "(I)VV", "(V)V", "(L;)V", "([)V"] {
        assert!(parse_descriptor(bad).is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn render_signature_with_name() {
    assert_eq!(
        render_signature("move", "(Lbe/game/Direction;I)Z").unwrap(),
        "move(be.game.Direction, int)"
    );
}

#[test]
fn method_ref_signature_and_identity() {
    let m = MethodRef::new("be.game.Board", "move", "(I)V").unwrap();
    assert_eq!(m.signature, "be.game.Board.move(int)");
    assert_eq!(m.to_string(), "be.game.Board.move(int)");
    assert!(m.is_same_method("be.game.Board", "move", "(I)V"));
    assert!(!m.is_same_method("be.game.Board", "move", "(J)V"));
}
