use php_chisel::parser::ast::{Expr, Member, Program, Visibility};
use php_chisel::{parse_source, ClassEditor, FragmentParser};

fn fixture(src: &str) -> Program {
    parse_source(src).unwrap()
}

#[test]
fn set_property_inserts_at_front_of_body() {
    let mut program = fixture("class Foo { public $existing; public function f() {} }");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    editor.set_property("x", Some("1"), Some("public")).unwrap();
    drop(editor);

    let body = &program.classes[0].node.body;
    assert_eq!(body.len(), 3);
    let Member::Property(p) = &body[0].node else {
        panic!("expected property at front");
    };
    assert_eq!(p.name.node, "x");
    assert_eq!(p.flags.visibility, Some(Visibility::Public));
    assert!(matches!(p.default.as_ref().unwrap().node, Expr::IntLit(1)));
}

#[test]
fn set_property_updates_existing_in_place() {
    let mut program = fixture("class Foo { public $a; private $x = 1; public $b; }");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    editor.set_property("x", Some("2"), None).unwrap();
    drop(editor);

    let body = &program.classes[0].node.body;
    // Same member, same position, no duplicate.
    assert_eq!(body.len(), 3);
    let Member::Property(p) = &body[1].node else {
        panic!("expected property at original position");
    };
    assert_eq!(p.name.node, "x");
    assert!(matches!(p.default.as_ref().unwrap().node, Expr::IntLit(2)));
    // Flags were not supplied, so they stay as declared.
    assert_eq!(p.flags.visibility, Some(Visibility::Private));
}

#[test]
fn set_property_flags_only_keeps_value() {
    let mut program = fixture("class Foo { private $x = 7; }");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    editor.set_property("x", None, Some("public static")).unwrap();
    drop(editor);

    let Member::Property(p) = &program.classes[0].node.body[0].node else {
        panic!("expected property");
    };
    assert_eq!(p.flags.visibility, Some(Visibility::Public));
    assert!(p.flags.is_static);
    assert!(matches!(p.default.as_ref().unwrap().node, Expr::IntLit(7)));
}

#[test]
fn set_property_without_value_has_no_default() {
    let mut program = fixture("class Foo {}");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    editor.set_property("bare", None, Some("protected")).unwrap();
    drop(editor);

    let Member::Property(p) = &program.classes[0].node.body[0].node else {
        panic!("expected property");
    };
    assert!(p.default.is_none());
}

#[test]
fn set_method_appends_at_back_of_body() {
    let mut program = fixture("class Foo { public $prop; public function first() {} }");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    editor.set_method("f", Some(""), Some("return 1;"), Some("public")).unwrap();
    drop(editor);

    let body = &program.classes[0].node.body;
    assert_eq!(body.len(), 3);
    let Member::Method(m) = &body[2].node else {
        panic!("expected method at back");
    };
    assert_eq!(m.name.node, "f");
    assert!(m.params.is_empty());
    assert_eq!(m.body.as_ref().unwrap().node.stmts.len(), 1);
}

#[test]
fn set_method_updates_existing_in_place() {
    let mut program = fixture("class Foo { public function f() { return 1; } public $after; }");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    editor.set_method("f", Some("$a"), Some("return $a;"), None).unwrap();
    drop(editor);

    let body = &program.classes[0].node.body;
    assert_eq!(body.len(), 2);
    let Member::Method(m) = &body[0].node else {
        panic!("expected method at original position");
    };
    assert_eq!(m.params.len(), 1);
    assert_eq!(m.params[0].name.node, "a");
    // Flags untouched by an update that did not supply them.
    assert_eq!(m.flags.visibility, Some(Visibility::Public));
}

#[test]
fn set_method_flags_only_keeps_body() {
    let mut program = fixture("class Foo { public function f() { return 42; } }");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    editor.set_method("f", None, None, Some("private final")).unwrap();
    drop(editor);

    let Member::Method(m) = &program.classes[0].node.body[0].node else {
        panic!("expected method");
    };
    assert_eq!(m.flags.visibility, Some(Visibility::Private));
    assert!(m.flags.is_final);
    assert_eq!(m.body.as_ref().unwrap().node.stmts.len(), 1);
}

#[test]
fn property_and_method_insertion_sides_differ() {
    let mut program = fixture("class Foo { public $middle; }");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    editor.set_property("front", None, Some("public")).unwrap();
    editor.set_method("back", None, None, None).unwrap();
    drop(editor);

    let body = &program.classes[0].node.body;
    assert!(matches!(&body[0].node, Member::Property(p) if p.name.node == "front"));
    assert!(matches!(&body[1].node, Member::Property(p) if p.name.node == "middle"));
    assert!(matches!(&body[2].node, Member::Method(m) if m.name.node == "back"));
}

#[test]
fn get_property_absent_is_none() {
    let mut program = fixture("class Foo { public $a; }");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    assert!(editor.get_property("missing").is_none());
    assert!(editor.get_property("a").is_some());
}

#[test]
fn get_method_absent_is_none() {
    let mut program = fixture("class Foo { public function f() {} }");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    assert!(editor.get_method("missing").is_none());
    assert!(editor.get_method("f").is_some());
}

#[test]
fn get_property_does_not_match_methods() {
    let mut program = fixture("class Foo { public function same() {} }");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    assert!(editor.get_property("same").is_none());
}

#[test]
fn property_editor_set_value_through_lookup() {
    let mut program = fixture("class Foo { public $x = 1; }");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    let mut property = editor.get_property("x").unwrap();
    property.set_value("['a' => 1]").unwrap();
    assert!(matches!(
        property.decl().default.as_ref().unwrap().node,
        Expr::ArrayLit { .. }
    ));
}

#[test]
fn method_editor_set_args_empty_clears_params() {
    let mut program = fixture("class Foo { public function f($a, $b) {} }");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    let mut method = editor.get_method("f").unwrap();
    method.set_args("").unwrap();
    assert!(method.decl().params.is_empty());
}
