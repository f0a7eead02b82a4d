use php_chisel::parser::ast::{ConstEntry, Program};
use php_chisel::{parse_source, pretty_print, ClassEditor, FragmentParser, Value};

fn fixture(src: &str) -> Program {
    parse_source(src).unwrap()
}

#[test]
fn set_constant_appends_bare_entry() {
    let mut program = fixture("class Foo {}");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    editor.set_constant("C", &Value::Int(1));
    drop(editor);

    let entries = &program.classes[0].node.constants;
    assert_eq!(entries.len(), 1);
    assert!(matches!(entries[0], ConstEntry::Bare(_)));
    assert_eq!(entries[0].decl().name, "C");
    assert_eq!(entries[0].decl().value, "1");
}

#[test]
fn set_constant_updates_in_place_without_growing() {
    let mut program = fixture("class Foo {}");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    editor.set_constant("C", &Value::Int(1));
    editor.set_constant("C", &Value::Int(2));
    drop(editor);

    let entries = &program.classes[0].node.constants;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].decl().value, "2");
}

#[test]
fn set_constant_preserves_metadata_wrappers() {
    let mut program = fixture("class Foo { /** Build number */ const C = 1; }");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    editor.set_constant("C", &Value::Int(2));
    drop(editor);

    let entries = &program.classes[0].node.constants;
    assert_eq!(entries.len(), 1);
    // The position wrapper and doc comment survive a value overwrite.
    assert!(matches!(entries[0], ConstEntry::WithPosition { .. }));
    assert_eq!(entries[0].doc(), Some("/** Build number */"));
    assert_eq!(entries[0].decl().value, "2");

    let out = pretty_print(&program);
    assert!(out.contains("/** Build number */"));
    assert!(out.contains("const C = 2;"));
}

#[test]
fn set_constant_fluent_chaining() {
    let mut program = fixture("class Foo {}");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    editor
        .set_constant("A", &Value::Int(1))
        .set_constant("B", &Value::Bool(true));
    assert_eq!(editor.get_constant("A"), Some(Value::Int(1)));
    assert_eq!(editor.get_constant("B"), Some(Value::Bool(true)));
}

#[test]
fn get_constant_reads_parsed_source_entries() {
    let mut program = fixture("class Foo { const VERSION = '1.0'; const LIMITS = [1, 2]; }");
    let fragments = FragmentParser::new();
    let editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    assert_eq!(editor.get_constant("VERSION"), Some(Value::Str("1.0".into())));
    assert_eq!(
        editor.get_constant("LIMITS"),
        Some(Value::Seq(vec![Value::Int(1), Value::Int(2)]))
    );
}

#[test]
fn get_constant_absent_is_none() {
    let mut program = fixture("class Foo { const A = 1; }");
    let fragments = FragmentParser::new();
    let editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    assert_eq!(editor.get_constant("MISSING"), None);
}

#[test]
fn get_constant_non_literal_is_none() {
    let mut program = fixture("class Foo { const REF = Other::VALUE; }");
    let fragments = FragmentParser::new();
    let editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    assert_eq!(editor.get_constant("REF"), None);
}

#[test]
fn set_constant_round_trips_compound_values() {
    let mut program = fixture("class Foo {}");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();

    let value = Value::Map(vec![
        (Value::Str("name".into()), Value::Str("it's".into())),
        (Value::Str("sizes".into()), Value::Seq(vec![Value::Int(1), Value::Float(2.5)])),
        (Value::Str("on".into()), Value::Bool(false)),
        (Value::Str("none".into()), Value::Null),
    ]);
    editor.set_constant("CONFIG", &value);
    assert_eq!(editor.get_constant("CONFIG"), Some(value));
}

#[test]
fn set_constant_updates_only_the_named_entry() {
    let mut program = fixture("class Foo { const A = 1, B = 2; }");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    editor.set_constant("B", &Value::Int(9));
    drop(editor);

    let entries = &program.classes[0].node.constants;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].decl().value, "1");
    assert_eq!(entries[1].decl().value, "9");
}
