//! Golden tests for the generated Go declarations.
//!
//! Whole-file output is pinned with snapshots.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use dataclass_codegen::Indent;
use dataclass_codegen_go::{Generator, GeneratorConfig, GoFile};
use dataclass_schema::{Error, TypeName};

fn generate_with(type_name: &str, fields: &str, config: GeneratorConfig) -> String {
    let name = TypeName::parse(type_name).expect("valid type name");
    Generator::new(name, config)
        .generate(fields)
        .expect("valid field list")
}

/// Generate with two-space indentation, which keeps the expected text readable.
fn generate(type_name: &str, fields: &str) -> String {
    generate_with(
        type_name,
        fields,
        GeneratorConfig::default().with_indent(Indent::Spaces(2)),
    )
}

fn single_field_output(ty: &str) -> String {
    format!(
        "type OneType interface {{
  V() {ty}
}}
type oneType struct {{
  v {ty}
}}
func (s *oneType) V() {ty} {{ return s.v }}
func NewOneType(
  v {ty},
) OneType {{
  return &oneType{{
    v: v,
  }}
}}
"
    )
}

#[test]
fn test_single_field_types() {
    for ty in [
        "int",
        "string",
        "[]int",
        "[1]int",
        "map[string]int",
        "chan string",
        "chan<- string",
        "<-chan string",
        "func()",
        "[][]int",
        "[]map[string]int",
        "map[string][]int",
        "chan []int",
        "func() error",
        "func(int)",
        "func(int) error",
        "func(int) (string, error)",
        "func(int, string) (map[string]int, error)",
        "*int",
        "*[]int",
        "flag.ErrorHandler",
        "chan chan map[string]int",
    ] {
        assert_eq!(
            generate("OneType", &format!("V {}", ty)),
            single_field_output(ty),
            "field type {:?}",
            ty
        );
    }
}

#[test]
fn test_one_method() {
    assert_eq!(
        generate("OneType", "OneField int"),
        "type OneType interface {
  OneField() int
}
type oneType struct {
  oneField int
}
func (s *oneType) OneField() int { return s.oneField }
func NewOneType(
  oneField int,
) OneType {
  return &oneType{
    oneField: oneField,
  }
}
"
    );
}

#[test]
fn test_pointer() {
    assert_eq!(
        generate("PointerType", "First *http.Request"),
        "type PointerType interface {
  First() *http.Request
}
type pointerType struct {
  first *http.Request
}
func (s *pointerType) First() *http.Request { return s.first }
func NewPointerType(
  first *http.Request,
) PointerType {
  return &pointerType{
    first: first,
  }
}
"
    );
}

#[test]
fn test_two_types() {
    assert_eq!(
        generate("TwoType", "First *http.Request|Second string"),
        "type TwoType interface {
  First() *http.Request
  Second() string
}
type twoType struct {
  first *http.Request
  second string
}
func (s *twoType) First() *http.Request { return s.first }
func (s *twoType) Second() string { return s.second }
func NewTwoType(
  first *http.Request,
  second string,
) TwoType {
  return &twoType{
    first: first,
    second: second,
  }
}
"
    );
}

#[test]
fn test_keyword_names_are_escaped() {
    assert_eq!(
        generate("Func", "Type string|Range []int"),
        "type Func interface {
  Type() string
  Range() []int
}
type func_ struct {
  type_ string
  range_ []int
}
func (s *func_) Type() string { return s.type_ }
func (s *func_) Range() []int { return s.range_ }
func NewFunc(
  type_ string,
  range_ []int,
) Func {
  return &func_{
    type_: type_,
    range_: range_,
  }
}
"
    );
}

#[test]
fn test_rejections() {
    let name = TypeName::parse("OneType").unwrap();
    let generator = Generator::new(name, GeneratorConfig::default());

    let cases: [(&str, fn(&Error) -> bool); 4] = [
        ("", |e| matches!(e, Error::EmptyFieldList { .. })),
        ("lower int", |e| matches!(e, Error::InvalidFieldName { .. })),
        ("A int|A string", |e| {
            matches!(e, Error::DuplicateFieldName { .. })
        }),
        ("A notatype<<<", |e| {
            matches!(e, Error::InvalidTypeSyntax { .. })
        }),
    ];

    for (fields, is_expected) in cases {
        let err = generator.generate(fields).unwrap_err();
        assert!(is_expected(&err), "{:?} gave {:?}", fields, err);
    }
}

#[test]
fn test_one_type_file() {
    let body = generate_with("OneType", "OneField int", GeneratorConfig::default());
    let file = GoFile::new("main")
        .generated_by(["-type", "OneType", "-field", "OneField int"])
        .body(body)
        .render();
    insta::assert_snapshot!("one_type_file", file);
}

#[test]
fn test_two_type_file() {
    let body = generate_with(
        "TwoType",
        "First *http.Request|Second string",
        GeneratorConfig::default(),
    );
    let file = GoFile::new("models")
        .generated_by(["-type", "TwoType", "-field", "First *http.Request|Second string"])
        .body(body)
        .render();
    insta::assert_snapshot!("two_type_file", file);
}

#[test]
fn test_composite_types_file() {
    let body = generate_with(
        "Handler",
        "Route map[string][]int|Callback func(int, string) (map[string]int, error)|Events <-chan string",
        GeneratorConfig::default(),
    );
    let file = GoFile::new("handler")
        .generated_by(["-type", "Handler"])
        .body(body)
        .render();
    insta::assert_snapshot!("composite_types_file", file);
}
