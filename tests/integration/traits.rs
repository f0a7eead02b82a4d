use php_chisel::parser::ast::{Member, Program};
use php_chisel::{parse_source, EditError, ClassEditor, FragmentParser};

fn fixture(src: &str) -> Program {
    parse_source(src).unwrap()
}

#[test]
fn get_traits_flattens_every_use_entry() {
    let mut program = fixture("class Foo { use A, B; public $x; use \\Vendor\\C; }");
    let fragments = FragmentParser::new();
    let editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    assert_eq!(editor.get_traits(), vec!["A", "B", "Vendor\\C"]);
}

#[test]
fn get_traits_absent_is_empty_sequence() {
    let mut program = fixture("class Foo {}");
    let fragments = FragmentParser::new();
    let editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    assert_eq!(editor.get_traits(), Vec::<String>::new());
}

#[test]
fn set_traits_replaces_entries_at_first_position() {
    let mut program = fixture("class Foo { public $a; use Old; public $b; use Older; }");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    editor.set_traits(&["New1", "New2"]).unwrap();
    drop(editor);

    let body = &program.classes[0].node.body;
    assert_eq!(body.len(), 3);
    assert!(matches!(&body[0].node, Member::Property(p) if p.name.node == "a"));
    let Member::TraitUse(u) = &body[1].node else {
        panic!("expected the new trait use where the first old one sat");
    };
    assert_eq!(u.traits.len(), 2);
    assert_eq!(u.traits[0].name, "New1");
    assert!(matches!(&body[2].node, Member::Property(p) if p.name.node == "b"));
}

#[test]
fn set_traits_on_class_without_any_goes_to_front() {
    let mut program = fixture("class Foo { public $x; }");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    editor.set_traits(&["T"]).unwrap();
    drop(editor);

    let body = &program.classes[0].node.body;
    assert!(matches!(&body[0].node, Member::TraitUse(_)));
    assert!(matches!(&body[1].node, Member::Property(_)));
}

#[test]
fn set_traits_empty_removes_all_entries() {
    let mut program = fixture("class Foo { use A; public $x; use B; }");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    editor.set_traits(&[]).unwrap();
    assert_eq!(editor.get_traits(), Vec::<String>::new());
    drop(editor);

    assert_eq!(program.classes[0].node.body.len(), 1);
}

#[test]
fn add_trait_is_idempotent() {
    let mut program = fixture("class Foo {}");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    editor.add_trait("T").unwrap();
    editor.add_trait("T").unwrap();
    assert_eq!(editor.get_traits(), vec!["T"]);
}

#[test]
fn add_trait_keeps_existing_entries() {
    let mut program = fixture("class Foo { use A; }");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    editor.add_trait("B").unwrap();
    assert_eq!(editor.get_traits(), vec!["A", "B"]);
}

#[test]
fn traits_and_implements_are_symmetric_contracts() {
    let mut program = fixture("class Foo {}");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();

    editor.add_implements("I").unwrap();
    editor.add_trait("T").unwrap();
    assert_eq!(editor.get_implements(), vec!["I"]);
    assert_eq!(editor.get_traits(), vec!["T"]);

    editor.set_implements(&[]).unwrap();
    editor.set_traits(&[]).unwrap();
    assert_eq!(editor.get_implements(), Vec::<String>::new());
    assert_eq!(editor.get_traits(), Vec::<String>::new());
}

#[test]
fn trait_adaptation_blocks_fail_fast_on_parse() {
    let err = parse_source("class Foo { use A { A::f as g; } }").unwrap_err();
    assert!(matches!(err, EditError::Unsupported { .. }));
}

#[test]
fn set_traits_with_adaptation_block_is_a_fragment_error() {
    let mut program = fixture("class Foo {}");
    let fragments = FragmentParser::new();
    let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
    let err = editor.set_traits(&["T { T::f as g; }"]).unwrap_err();
    assert!(matches!(err, EditError::Fragment { .. }));
}
