use proptest::prelude::*;

use php_chisel::lexer::is_keyword;
use php_chisel::parser::ast::Resolution;
use php_chisel::{parse_source, ClassEditor, FragmentParser, Value};

fn ident() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,10}"
        .prop_filter("keywords are not identifiers", |s| !is_keyword(s))
}

proptest! {
    #[test]
    fn set_name_reads_back(name in ident()) {
        let mut program = parse_source("class Foo {}").unwrap();
        let fragments = FragmentParser::new();
        let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
        editor.set_name(&name);
        prop_assert_eq!(editor.name(), Some(name.as_str()));
    }

    #[test]
    fn set_extends_resolves_to_the_given_name(name in ident()) {
        let mut program = parse_source("class Foo {}").unwrap();
        let fragments = FragmentParser::new();
        let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
        editor.set_extends(Some(&name)).unwrap();
        let base = editor.extends().unwrap();
        prop_assert_eq!(&base.name, &name);
        prop_assert_eq!(base.resolution, Resolution::Unqualified);
    }

    #[test]
    fn set_extends_accepts_any_qualified_spelling(
        segments in proptest::collection::vec(ident(), 1..4),
    ) {
        let name = segments.join("\\");
        let mut program = parse_source("class Foo {}").unwrap();
        let fragments = FragmentParser::new();
        let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
        editor.set_extends(Some(&name)).unwrap();
        prop_assert_eq!(&editor.extends().unwrap().name, &name);
    }

    #[test]
    fn add_implements_twice_yields_one_entry(name in ident()) {
        let mut program = parse_source("class Foo {}").unwrap();
        let fragments = FragmentParser::new();
        let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
        editor.add_implements(&name).unwrap();
        editor.add_implements(&name).unwrap();
        prop_assert_eq!(editor.get_implements(), vec![name]);
    }

    #[test]
    fn add_trait_twice_yields_one_entry(name in ident()) {
        let mut program = parse_source("class Foo {}").unwrap();
        let fragments = FragmentParser::new();
        let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
        editor.add_trait(&name).unwrap();
        editor.add_trait(&name).unwrap();
        prop_assert_eq!(editor.get_traits(), vec![name]);
    }

    #[test]
    fn set_constant_overwrite_never_grows(
        name in "[A-Z][A-Z0-9_]{0,8}",
        first in -1_000_000i64..1_000_000,
        second in -1_000_000i64..1_000_000,
    ) {
        let mut program = parse_source("class Foo {}").unwrap();
        let fragments = FragmentParser::new();
        let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
        editor.set_constant(&name, &Value::Int(first));
        editor.set_constant(&name, &Value::Int(second));
        prop_assert_eq!(editor.get_constant(&name), Some(Value::Int(second)));
        prop_assert_eq!(editor.decl().constants.len(), 1);
    }

    #[test]
    fn constant_values_round_trip_through_literal_text(n in -1_000_000i64..1_000_000) {
        let mut program = parse_source("class Foo {}").unwrap();
        let fragments = FragmentParser::new();
        let mut editor = ClassEditor::locate(&mut program, "Foo", &fragments).unwrap();
        let value = Value::Seq(vec![Value::Int(n), Value::Null, Value::Bool(n % 2 == 0)]);
        editor.set_constant("C", &value);
        prop_assert_eq!(editor.get_constant("C"), Some(value));
    }
}
