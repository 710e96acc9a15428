use std::path::Path;

use crate::scanner::LineScanner;

use super::*;

fn extract_named(name: &str, source: &str) -> SourceFile {
    let scanner = LineScanner::new(4);
    let (lines, open) = scanner.scan_with_state(source);
    JavaExtractor::new("test").extract(Path::new(name), lines, open)
}

fn extract(source: &str) -> SourceFile {
    extract_named("Sample.java", source)
}

#[test]
fn extracts_public_class() {
    let file = extract("public class Stack {\n}\n");
    assert_eq!(file.classes.len(), 1);
    let class = &file.classes[0];
    assert_eq!(class.name, "Stack");
    assert!(class.is_public());
    assert_eq!(class.kind, ClassKind::Class);
    assert_eq!(class.span, (1, 2));
}

#[test]
fn extracts_interface_and_enum() {
    let file = extract("interface Sized {\n}\nenum Color {\n}\n");
    assert_eq!(file.classes.len(), 2);
    assert_eq!(file.classes[0].kind, ClassKind::Interface);
    assert_eq!(file.classes[1].kind, ClassKind::Enum);
    assert!(!file.classes[0].is_public());
}

#[test]
fn extracts_extends_name() {
    let file = extract("public class Sub extends Good {\n}\n");
    assert_eq!(file.classes[0].extends.as_deref(), Some("Good"));
}

#[test]
fn extracts_method_signature() {
    let source = "public class Calc {\n    public int add(int a, int b) {\n        return a + b;\n    }\n}\n";
    let file = extract(source);
    let class = &file.classes[0];
    assert_eq!(class.methods.len(), 1);
    let method = &class.methods[0];
    assert_eq!(method.name, "add");
    assert_eq!(method.return_type, "int");
    assert!(!method.is_void());
    assert_eq!(method.param_names, ["a", "b"]);
    assert_eq!(method.body_span, Some((2, 4)));
    assert!(!method.is_empty);
}

#[test]
fn extracts_generic_parameters() {
    let source = "public class Index {\n    public void put(Map<String, Integer> map, int count) {\n        map.size();\n    }\n}\n";
    let file = extract(source);
    let method = &file.classes[0].methods[0];
    assert_eq!(method.param_names, ["map", "count"]);
    assert_eq!(method.param_count(), 2);
}

#[test]
fn detects_constructor() {
    let source = "public class Point {\n    public Point(int x) {\n        this.x = x;\n    }\n\n    private int x;\n}\n";
    let file = extract(source);
    let class = &file.classes[0];
    assert_eq!(class.methods.len(), 1);
    assert!(class.methods[0].is_constructor);
    assert_eq!(class.methods[0].name, "Point");
    assert_eq!(class.fields.len(), 1);
    assert_eq!(class.fields[0].name, "x");
}

#[test]
fn interface_method_has_no_body() {
    let source = "interface Sized {\n    int size();\n}\n";
    let file = extract(source);
    let method = &file.classes[0].methods[0];
    assert_eq!(method.body_span, None);
    assert!(!method.is_empty);
}

#[test]
fn detects_empty_body() {
    let source = "public class Noop {\n    public void nothing() { }\n\n    public void commented() {\n        // intentionally blank\n    }\n}\n";
    let file = extract(source);
    let methods = &file.classes[0].methods;
    assert_eq!(methods.len(), 2);
    assert!(methods[0].is_empty);
    assert!(methods[1].is_empty);
}

#[test]
fn statements_are_not_members() {
    let source = "public class Flow {\n    public int run(int x) {\n        if (x > 0) {\n            return x;\n        }\n        return 0;\n    }\n}\n";
    let file = extract(source);
    assert_eq!(file.classes[0].methods.len(), 1);
    assert!(file.classes[0].fields.is_empty());
}

#[test]
fn attaches_javadoc_and_annotations() {
    let source = concat!(
        "/**\n",
        " * A widget.\n",
        " * @author Sam\n",
        " */\n",
        "public class Widget {\n",
        "    /**\n",
        "     * Doubles the input.\n",
        "     * @param x the input\n",
        "     * @return twice x\n",
        "     */\n",
        "    @Override\n",
        "    public int twice(int x) {\n",
        "        return x * 2;\n",
        "    }\n",
        "}\n"
    );
    let file = extract(source);
    let class = &file.classes[0];
    assert!(class.javadoc.as_ref().is_some_and(|d| d.has_tag("author")));
    let method = &class.methods[0];
    assert!(method.has_annotation("Override"));
    assert!(method.javadoc.as_ref().is_some_and(|d| d.has_tag("return")));
    assert_eq!(
        method
            .javadoc
            .as_ref()
            .map(|d| d.tag_leading_tokens("param"))
            .unwrap_or_default(),
        ["x"]
    );
}

#[test]
fn javadoc_separated_by_code_is_not_attached() {
    let source = "public class Gap {\n    /** Doc for the field. */\n    private int gap;\n    public void method() {\n        gap = 1;\n    }\n}\n";
    let file = extract(source);
    let method = &file.classes[0].methods[0];
    assert!(method.javadoc.is_none());
}

#[test]
fn plain_block_comment_is_not_javadoc() {
    let source = "public class Plain {\n    /* not javadoc */\n    public void method() {\n        int x = 1;\n    }\n}\n";
    let file = extract(source);
    assert!(file.classes[0].methods[0].javadoc.is_none());
}

#[test]
fn field_modifiers_parsed() {
    let source = "public class Fields {\n    public static final int MAX = 10;\n    private static int count;\n    private String name;\n}\n";
    let file = extract(source);
    let fields = &file.classes[0].fields;
    assert_eq!(fields.len(), 3);
    assert!(fields[0].is_constant());
    assert!(fields[1].modifiers.is_static);
    assert!(!fields[1].is_constant());
    assert!(!fields[2].modifiers.is_static);
}

#[test]
fn call_tokens_recorded() {
    let source = "public class Util {\n    private int helper() {\n        return 1;\n    }\n\n    public int use() {\n        return helper();\n    }\n}\n";
    let file = extract(source);
    let class = &file.classes[0];
    let helper = &class.methods[0];
    let user = &class.methods[1];
    assert!(user.calls("helper"));
    assert!(file.is_called_outside("helper", helper));
}

#[test]
fn self_recursion_is_not_a_use() {
    let source = "public class Lonely {\n    private int lonely() {\n        return lonely();\n    }\n}\n";
    let file = extract(source);
    let method = &file.classes[0].methods[0];
    assert!(!file.is_called_outside("lonely", method));
}

#[test]
fn braces_in_strings_do_not_break_spans() {
    let source = "public class S {\n    public String brace() {\n        return \"}\";\n    }\n\n    public int after() {\n        return 1;\n    }\n}\n";
    let file = extract(source);
    let class = &file.classes[0];
    assert_eq!(class.methods.len(), 2);
    assert_eq!(class.methods[1].name, "after");
    assert_eq!(class.span, (1, 9));
}

#[test]
fn unbalanced_braces_degrade_to_warning() {
    let source = "public class Broken {\n    public void open() {\n        int x = 1;\n";
    let file = extract(source);
    assert_eq!(file.classes.len(), 1);
    assert!(!file.issues.is_empty());
}

#[test]
fn test_prefix_marks_candidates() {
    let source = "public class StackTest {\n    public void testPush() {\n        int x = 1;\n    }\n\n    public void helper() {\n        int y = 2;\n    }\n}\n";
    let file = extract_named("StackTest.java", source);
    let methods = &file.classes[0].methods;
    assert!(methods[0].is_test_candidate);
    assert!(!methods[1].is_test_candidate);
    assert!(file.is_test_file());
}

#[test]
fn two_public_classes_both_extracted() {
    let source = "public class First {\n}\n\npublic class Second {\n}\n";
    let file = extract(source);
    let publics: Vec<_> = file.classes.iter().filter(|c| c.is_public()).collect();
    assert_eq!(publics.len(), 2);
}
