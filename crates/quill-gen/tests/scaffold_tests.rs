//! Per-kind scaffold output tests.

mod common;

use common::{char_span, function_data, span_of, span_of_last};
use quill_ast::{
    AccessorData, BlockData, ClassData, ConstructorData, EnumData, EnumMemberData, FunctionData,
    HeritageRelation, HeritageTypeData, InterfaceData, NodeId, ParameterData, Position,
    PropertyData, ReturnData, SourceFileData, SyntaxKind, SyntaxTree, TextSpan, TypeParameterData,
};
use quill_gen::{DocCommentProvider, DocOptions, ScaffoldError};

fn scaffold(tree: &SyntaxTree, options: &DocOptions, offset: u32) -> String {
    DocCommentProvider::new(tree, options)
        .scaffold_at_offset(offset)
        .expect("scaffold succeeds")
        .snippet
}

/// `export class Foo extends Bar implements Baz<string> {}`
fn build_class_tree() -> (SyntaxTree, u32) {
    let src = "export class Foo extends Bar implements Baz<string> {\n}\n";
    let mut tree = SyntaxTree::new("class.ts", src);

    let export = tree.add_token(SyntaxKind::ExportKeyword, span_of(src, "export"));
    let name = tree.add_identifier("Foo", span_of(src, "Foo"));

    let bar = tree.add_identifier("Bar", span_of(src, "Bar"));
    let bar_type = tree.add_heritage_type(
        span_of(src, "Bar"),
        HeritageTypeData {
            expression: bar,
            type_arguments: vec![],
        },
    );
    let extends_clause = tree.add_heritage_clause(
        HeritageRelation::Extends,
        vec![bar_type],
        span_of(src, "extends Bar"),
    );

    let baz = tree.add_identifier("Baz", span_of(src, "Baz"));
    let string_arg = tree.add_type_reference(span_of(src, "string"));
    let baz_type = tree.add_heritage_type(
        span_of(src, "Baz<string>"),
        HeritageTypeData {
            expression: baz,
            type_arguments: vec![string_arg],
        },
    );
    let implements_clause = tree.add_heritage_clause(
        HeritageRelation::Implements,
        vec![baz_type],
        span_of(src, "implements Baz<string>"),
    );

    let class = tree.add_class(
        SyntaxKind::ClassDeclaration,
        TextSpan::new(0, src.len() as u32 - 1),
        ClassData {
            name,
            modifiers: vec![export],
            type_parameters: vec![],
            heritage_clauses: vec![extends_clause, implements_clause],
            members: vec![],
        },
    );
    tree.add_source_file(
        TextSpan::new(0, src.len() as u32),
        SourceFileData {
            statements: vec![class],
        },
    );

    let caret = span_of(src, "Foo").start;
    (tree, caret)
}

/// `function add(a, b) { return a + b; }`
fn build_add_tree() -> (SyntaxTree, u32) {
    let src = "function add(a, b) {\n    return a + b;\n}\n";
    let mut tree = SyntaxTree::new("add.ts", src);

    let a_ident = tree.add_identifier("a", char_span(src, "(a, b)", 1));
    let param_a = tree.add_parameter(
        char_span(src, "(a, b)", 1),
        ParameterData {
            name: a_ident,
            type_annotation: NodeId::NONE,
        },
    );
    let b_ident = tree.add_identifier("b", char_span(src, "(a, b)", 4));
    let param_b = tree.add_parameter(
        char_span(src, "(a, b)", 4),
        ParameterData {
            name: b_ident,
            type_annotation: NodeId::NONE,
        },
    );

    let sum = tree.add_expression(SyntaxKind::BinaryExpression, vec![], span_of(src, "a + b"));
    let ret = tree.add_return(span_of(src, "return a + b;"), ReturnData { expression: sum });
    let body = tree.add_block(
        span_of(src, "{\n    return a + b;\n}"),
        BlockData {
            statements: vec![ret],
        },
    );

    let name = tree.add_identifier("add", span_of(src, "add"));
    let func = tree.add_function(
        SyntaxKind::FunctionDeclaration,
        TextSpan::new(0, src.len() as u32 - 1),
        function_data(name, vec![param_a, param_b], NodeId::NONE, body),
    );
    tree.add_source_file(
        TextSpan::new(0, src.len() as u32),
        SourceFileData {
            statements: vec![func],
        },
    );

    let caret = span_of(src, "return").start;
    (tree, caret)
}

/// `class Box { get value() { … } [set value(v) {}] }`
fn build_box_tree(with_setter: bool) -> (SyntaxTree, u32) {
    let src = "class Box {\n    get value() {\n        return this._v;\n    }\n    set value(v) {}\n}\n";
    let mut tree = SyntaxTree::new("box.ts", src);

    let backing = tree.add_expression(
        SyntaxKind::PropertyAccessExpression,
        vec![],
        span_of(src, "this._v"),
    );
    let ret = tree.add_return(
        span_of(src, "return this._v;"),
        ReturnData {
            expression: backing,
        },
    );
    let getter_body = tree.add_block(
        span_of(src, "{\n        return this._v;\n    }"),
        BlockData {
            statements: vec![ret],
        },
    );
    let getter_name = tree.add_identifier("value", span_of(src, "value"));
    let getter = tree.add_accessor(
        SyntaxKind::GetAccessor,
        span_of(src, "get value() {\n        return this._v;\n    }"),
        AccessorData {
            name: getter_name,
            modifiers: vec![],
            parameters: vec![],
            body: getter_body,
        },
    );

    let mut members = vec![getter];
    if with_setter {
        let v_ident = tree.add_identifier("v", char_span(src, "(v)", 1));
        let param_v = tree.add_parameter(
            char_span(src, "(v)", 1),
            ParameterData {
                name: v_ident,
                type_annotation: NodeId::NONE,
            },
        );
        let setter_body = tree.add_block(span_of_last(src, "{}"), BlockData { statements: vec![] });
        let setter_name = tree.add_identifier("value", span_of_last(src, "value"));
        let setter = tree.add_accessor(
            SyntaxKind::SetAccessor,
            span_of(src, "set value(v) {}"),
            AccessorData {
                name: setter_name,
                modifiers: vec![],
                parameters: vec![param_v],
                body: setter_body,
            },
        );
        members.push(setter);
    }

    let class_name = tree.add_identifier("Box", span_of(src, "Box"));
    let class = tree.add_class(
        SyntaxKind::ClassDeclaration,
        TextSpan::new(0, src.len() as u32 - 1),
        ClassData {
            name: class_name,
            modifiers: vec![],
            type_parameters: vec![],
            heritage_clauses: vec![],
            members,
        },
    );
    tree.add_source_file(
        TextSpan::new(0, src.len() as u32),
        SourceFileData {
            statements: vec![class],
        },
    );

    let caret = span_of(src, "value").start;
    (tree, caret)
}

// =============================================================================
// Classes
// =============================================================================

#[test]
fn class_with_heritage_and_modifier() {
    let (tree, caret) = build_class_tree();
    let snippet = scaffold(&tree, &DocOptions::default(), caret);
    assert_eq!(
        snippet,
        "Class: Foo\n$1\n@export\n@extends Bar\n@implements Baz<string>\n"
    );
}

#[test]
fn class_heritage_suppressed_without_include_types() {
    let (tree, caret) = build_class_tree();
    let options = DocOptions {
        include_types: false,
        ..DocOptions::default()
    };
    let snippet = scaffold(&tree, &options, caret);
    assert_eq!(snippet, "Class: Foo\n$1\n@export\n");
}

#[test]
fn class_author_line_follows_description() {
    let (tree, caret) = build_class_tree();
    let options = DocOptions {
        include_author_tag: true,
        author_name: "Ada".to_string(),
        ..DocOptions::default()
    };
    let snippet = scaffold(&tree, &options, caret);
    assert_eq!(
        snippet,
        "Class: Foo\n$1\nAuthor: Ada $2\n@export\n@extends Bar\n@implements Baz<string>\n"
    );
}

#[test]
fn anonymous_class_expression_omits_header_line() {
    let src = "register(class {\n});\n";
    let mut tree = SyntaxTree::new("anon.ts", src);
    let class = tree.add_class(
        SyntaxKind::ClassExpression,
        span_of(src, "class {\n}"),
        ClassData {
            name: NodeId::NONE,
            modifiers: vec![],
            type_parameters: vec![],
            heritage_clauses: vec![],
            members: vec![],
        },
    );
    let callee = tree.add_identifier("register", span_of(src, "register"));
    let call = tree.add_expression(
        SyntaxKind::CallExpression,
        vec![callee, class],
        span_of(src, "register(class {\n})"),
    );
    let stmt = tree.add_expression_statement(
        TextSpan::new(0, src.len() as u32 - 1),
        quill_ast::ExpressionStatementData { expression: call },
    );
    tree.add_source_file(
        TextSpan::new(0, src.len() as u32),
        SourceFileData {
            statements: vec![stmt],
        },
    );

    let snippet = scaffold(&tree, &DocOptions::default(), span_of(src, "class").start);
    assert_eq!(snippet, "$1\n");
}

// =============================================================================
// Interfaces, enums, enum members
// =============================================================================

/// `export interface Shape<T> extends Base { area(): number; readonly id: string; }`
fn build_interface_tree() -> (SyntaxTree, String) {
    let src = "export interface Shape<T> extends Base {\n    area(): number;\n    readonly id: string;\n}\n";
    let mut tree = SyntaxTree::new("shape.ts", src);

    let export = tree.add_token(SyntaxKind::ExportKeyword, span_of(src, "export"));
    let t_ident = tree.add_identifier("T", char_span(src, "<T>", 1));
    let type_param = tree.add_type_parameter(
        char_span(src, "<T>", 1),
        TypeParameterData { name: t_ident },
    );

    let base = tree.add_identifier("Base", span_of(src, "Base"));
    let base_type = tree.add_heritage_type(
        span_of(src, "Base"),
        HeritageTypeData {
            expression: base,
            type_arguments: vec![],
        },
    );
    let extends_clause = tree.add_heritage_clause(
        HeritageRelation::Extends,
        vec![base_type],
        span_of(src, "extends Base"),
    );

    let number_type = tree.add_type_reference(span_of(src, "number"));
    let area_name = tree.add_identifier("area", span_of(src, "area"));
    let area = tree.add_function(
        SyntaxKind::MethodSignature,
        span_of(src, "area(): number;"),
        function_data(area_name, vec![], number_type, NodeId::NONE),
    );

    let readonly = tree.add_token(SyntaxKind::ReadonlyKeyword, span_of(src, "readonly"));
    let string_type = tree.add_type_reference(span_of(src, "string"));
    let id_name = tree.add_identifier("id", span_of(src, "id:"));
    let id = tree.add_property(
        SyntaxKind::PropertySignature,
        span_of(src, "readonly id: string;"),
        PropertyData {
            name: id_name,
            modifiers: vec![readonly],
            type_annotation: string_type,
            initializer: NodeId::NONE,
        },
    );

    let name = tree.add_identifier("Shape", span_of(src, "Shape"));
    let interface = tree.add_interface(
        TextSpan::new(0, src.len() as u32 - 1),
        InterfaceData {
            name,
            modifiers: vec![export],
            type_parameters: vec![type_param],
            heritage_clauses: vec![extends_clause],
            members: vec![area, id],
        },
    );
    tree.add_source_file(
        TextSpan::new(0, src.len() as u32),
        SourceFileData {
            statements: vec![interface],
        },
    );

    (tree, src.to_string())
}

#[test]
fn interface_marker_heritage_and_template_lines() {
    let (tree, src) = build_interface_tree();
    let snippet = scaffold(&tree, &DocOptions::default(), span_of(&src, "Shape").start);
    assert_eq!(
        snippet,
        "$1\n@export\n@interface Shape\n@extends Base\n@template T\n"
    );
}

#[test]
fn method_signature_gets_returns_without_parameters_header() {
    let (tree, src) = build_interface_tree();
    let snippet = scaffold(&tree, &DocOptions::default(), span_of(&src, "area").start);
    assert_eq!(snippet, "Function: area\n$1\nReturns: $2\n");
}

#[test]
fn property_signature_skips_unrecognized_modifiers() {
    let (tree, src) = build_interface_tree();
    let snippet = scaffold(&tree, &DocOptions::default(), span_of(&src, "id:").start);
    // `readonly` is not one of the five marker modifiers.
    assert_eq!(snippet, "Property: id\n$1\n");
}

fn build_enum_tree() -> (SyntaxTree, String) {
    let src = "export enum Direction {\n    Up,\n    Down,\n}\n";
    let mut tree = SyntaxTree::new("dir.ts", src);

    let export = tree.add_token(SyntaxKind::ExportKeyword, span_of(src, "export"));
    let up_name = tree.add_identifier("Up", span_of(src, "Up"));
    let up = tree.add_enum_member(
        span_of(src, "Up"),
        EnumMemberData {
            name: up_name,
            initializer: NodeId::NONE,
        },
    );
    let down_name = tree.add_identifier("Down", span_of(src, "Down"));
    let down = tree.add_enum_member(
        span_of(src, "Down"),
        EnumMemberData {
            name: down_name,
            initializer: NodeId::NONE,
        },
    );
    let name = tree.add_identifier("Direction", span_of(src, "Direction"));
    let decl = tree.add_enum(
        TextSpan::new(0, src.len() as u32 - 1),
        EnumData {
            name,
            modifiers: vec![export],
            members: vec![up, down],
        },
    );
    tree.add_source_file(
        TextSpan::new(0, src.len() as u32),
        SourceFileData {
            statements: vec![decl],
        },
    );

    (tree, src.to_string())
}

#[test]
fn enum_gets_fixed_marker() {
    let (tree, src) = build_enum_tree();
    let snippet = scaffold(&tree, &DocOptions::default(), span_of(&src, "Direction").start);
    assert_eq!(snippet, "$1\n@export\n@enum {number}\n");
}

#[test]
fn enum_member_gets_blank_line_without_slot() {
    let (tree, src) = build_enum_tree();
    let result = DocCommentProvider::new(&tree, &DocOptions::default())
        .scaffold_at_offset(span_of(&src, "Up").start)
        .unwrap();
    assert_eq!(result.snippet, "\n");
    assert!(result.placeholders.is_empty());
}

// =============================================================================
// Accessors
// =============================================================================

#[test]
fn getter_with_sibling_setter_is_not_readonly() {
    let (tree, caret) = build_box_tree(true);
    let snippet = scaffold(&tree, &DocOptions::default(), caret);
    assert_eq!(snippet, "Property: value\n$1\n");
}

#[test]
fn getter_without_sibling_setter_is_readonly() {
    let (tree, caret) = build_box_tree(false);
    let snippet = scaffold(&tree, &DocOptions::default(), caret);
    assert_eq!(snippet, "Property: value\n$1\n@readonly\n");
}

// =============================================================================
// Functions and methods
// =============================================================================

#[test]
fn function_with_parameters_and_detected_return() {
    let (tree, caret) = build_add_tree();
    let result = DocCommentProvider::new(&tree, &DocOptions::default())
        .scaffold_at_offset(caret)
        .unwrap();
    assert_eq!(
        result.snippet,
        "Function: add\n$1\nParameters:\n- a - $2\n- b - $3\nReturns: $4\n"
    );
    // One placeholder per parameter plus description and returns.
    assert_eq!(result.placeholders.len(), 4);
    assert_eq!(result.anchor, Position::new(0, 0));
}

#[test]
fn function_author_line_carries_configured_name() {
    let (tree, caret) = build_add_tree();
    let options = DocOptions {
        include_author_tag: true,
        author_name: "Ada".to_string(),
        ..DocOptions::default()
    };
    let snippet = scaffold(&tree, &options, caret);
    assert_eq!(
        snippet,
        "Function: add\n$1\nAuthor: Ada $2\nParameters:\n- a - $3\n- b - $4\nReturns: $5\n"
    );
}

#[test]
fn void_annotated_method_without_returns_section() {
    let src = "class C {\n    run(): void {}\n}\n";
    let mut tree = SyntaxTree::new("void.ts", src);
    let void_type = tree.add_type_reference(span_of(src, "void"));
    let body = tree.add_block(span_of(src, "{}"), BlockData { statements: vec![] });
    let run_name = tree.add_identifier("run", span_of(src, "run"));
    let method = tree.add_function(
        SyntaxKind::MethodDeclaration,
        span_of(src, "run(): void {}"),
        function_data(run_name, vec![], void_type, body),
    );
    let class_name = tree.add_identifier("C", char_span(src, "class C", 6));
    let class = tree.add_class(
        SyntaxKind::ClassDeclaration,
        TextSpan::new(0, src.len() as u32 - 1),
        ClassData {
            name: class_name,
            modifiers: vec![],
            type_parameters: vec![],
            heritage_clauses: vec![],
            members: vec![method],
        },
    );
    tree.add_source_file(
        TextSpan::new(0, src.len() as u32),
        SourceFileData {
            statements: vec![class],
        },
    );

    let snippet = scaffold(&tree, &DocOptions::default(), span_of(src, "run").start);
    assert_eq!(snippet, "Function: run\n$1\n");
}

#[test]
fn never_annotation_still_triggers_returns_section() {
    let src = "class Calc {\n    private static compute(): never {\n    }\n}\n";
    let mut tree = SyntaxTree::new("never.ts", src);
    let private = tree.add_token(SyntaxKind::PrivateKeyword, span_of(src, "private"));
    let static_kw = tree.add_token(SyntaxKind::StaticKeyword, span_of(src, "static"));
    let never_type = tree.add_type_reference(span_of(src, "never"));
    let body = tree.add_block(span_of(src, "{\n    }"), BlockData { statements: vec![] });
    let name = tree.add_identifier("compute", span_of(src, "compute"));
    let method = tree.add_function(
        SyntaxKind::MethodDeclaration,
        span_of(src, "private static compute(): never {\n    }"),
        FunctionData {
            name,
            modifiers: vec![private, static_kw],
            type_parameters: vec![],
            parameters: vec![],
            return_type: never_type,
            body,
        },
    );
    let class_name = tree.add_identifier("Calc", span_of(src, "Calc"));
    let class = tree.add_class(
        SyntaxKind::ClassDeclaration,
        TextSpan::new(0, src.len() as u32 - 1),
        ClassData {
            name: class_name,
            modifiers: vec![],
            type_parameters: vec![],
            heritage_clauses: vec![],
            members: vec![method],
        },
    );
    tree.add_source_file(
        TextSpan::new(0, src.len() as u32),
        SourceFileData {
            statements: vec![class],
        },
    );

    let snippet = scaffold(&tree, &DocOptions::default(), span_of(src, "compute").start);
    assert_eq!(
        snippet,
        "Function: compute\n$1\n@private\n@static\nReturns: $2\n"
    );
}

#[test]
fn generic_function_template_lines_respect_include_types() {
    let src = "function wrap<T>(value: T) {\n    return value;\n}\n";
    let mut tree = SyntaxTree::new("wrap.ts", src);
    let t_ident = tree.add_identifier("T", char_span(src, "<T>", 1));
    let type_param = tree.add_type_parameter(
        char_span(src, "<T>", 1),
        TypeParameterData { name: t_ident },
    );
    let value_type = tree.add_type_reference(char_span(src, ": T)", 2));
    let value_ident = tree.add_identifier("value", span_of(src, "value"));
    let param = tree.add_parameter(
        span_of(src, "value: T"),
        ParameterData {
            name: value_ident,
            type_annotation: value_type,
        },
    );
    let result = tree.add_identifier("value", span_of(src, "value;"));
    let ret = tree.add_return(
        span_of(src, "return value;"),
        ReturnData { expression: result },
    );
    let body = tree.add_block(
        span_of(src, "{\n    return value;\n}"),
        BlockData {
            statements: vec![ret],
        },
    );
    let name = tree.add_identifier("wrap", span_of(src, "wrap"));
    let func = tree.add_function(
        SyntaxKind::FunctionDeclaration,
        TextSpan::new(0, src.len() as u32 - 1),
        FunctionData {
            name,
            modifiers: vec![],
            type_parameters: vec![type_param],
            parameters: vec![param],
            return_type: NodeId::NONE,
            body,
        },
    );
    tree.add_source_file(
        TextSpan::new(0, src.len() as u32),
        SourceFileData {
            statements: vec![func],
        },
    );

    let caret = span_of(src, "wrap").start;
    let snippet = scaffold(&tree, &DocOptions::default(), caret);
    assert_eq!(
        snippet,
        "Function: wrap\n$1\n@template T\nParameters:\n- value - $2\nReturns: $3\n"
    );

    // Parameter and return sections are not gated by includeTypes.
    let options = DocOptions {
        include_types: false,
        ..DocOptions::default()
    };
    let snippet = scaffold(&tree, &options, caret);
    assert_eq!(
        snippet,
        "Function: wrap\n$1\nParameters:\n- value - $2\nReturns: $3\n"
    );
}

#[test]
fn destructured_parameter_keeps_source_text_as_name() {
    let src = "function load({ path, mode }) {\n    return mode;\n}\n";
    let mut tree = SyntaxTree::new("load.ts", src);
    let pattern = tree.add_token(
        SyntaxKind::ObjectBindingPattern,
        span_of(src, "{ path, mode }"),
    );
    let param = tree.add_parameter(
        span_of(src, "{ path, mode }"),
        ParameterData {
            name: pattern,
            type_annotation: NodeId::NONE,
        },
    );
    let mode = tree.add_identifier("mode", span_of(src, "mode;"));
    let ret = tree.add_return(span_of(src, "return mode;"), ReturnData { expression: mode });
    let body = tree.add_block(
        span_of(src, "{\n    return mode;\n}"),
        BlockData {
            statements: vec![ret],
        },
    );
    let name = tree.add_identifier("load", span_of(src, "load"));
    let func = tree.add_function(
        SyntaxKind::FunctionDeclaration,
        TextSpan::new(0, src.len() as u32 - 1),
        function_data(name, vec![param], NodeId::NONE, body),
    );
    tree.add_source_file(
        TextSpan::new(0, src.len() as u32),
        SourceFileData {
            statements: vec![func],
        },
    );

    let snippet = scaffold(&tree, &DocOptions::default(), span_of(src, "load").start);
    assert_eq!(
        snippet,
        "Function: load\n$1\nParameters:\n- { path, mode } - $2\nReturns: $3\n"
    );
}

// =============================================================================
// Constructors
// =============================================================================

fn build_point_tree() -> (SyntaxTree, String) {
    let src = "class Point {\n    constructor(x: number, y: number) {\n    }\n}\n";
    let mut tree = SyntaxTree::new("point.ts", src);

    let x_type = tree.add_type_reference(span_of(src, "number"));
    let x_ident = tree.add_identifier("x", char_span(src, "(x:", 1));
    let param_x = tree.add_parameter(
        span_of(src, "x: number"),
        ParameterData {
            name: x_ident,
            type_annotation: x_type,
        },
    );
    let y_type = tree.add_type_reference(span_of_last(src, "number"));
    let y_ident = tree.add_identifier("y", char_span(src, "y: number", 0));
    let param_y = tree.add_parameter(
        span_of(src, "y: number"),
        ParameterData {
            name: y_ident,
            type_annotation: y_type,
        },
    );
    let body = tree.add_block(span_of(src, "{\n    }"), BlockData { statements: vec![] });
    let ctor = tree.add_constructor(
        span_of(src, "constructor(x: number, y: number) {\n    }"),
        ConstructorData {
            modifiers: vec![],
            parameters: vec![param_x, param_y],
            body,
        },
    );
    let name = tree.add_identifier("Point", span_of(src, "Point"));
    let class = tree.add_class(
        SyntaxKind::ClassDeclaration,
        TextSpan::new(0, src.len() as u32 - 1),
        ClassData {
            name,
            modifiers: vec![],
            type_parameters: vec![],
            heritage_clauses: vec![],
            members: vec![ctor],
        },
    );
    tree.add_source_file(
        TextSpan::new(0, src.len() as u32),
        SourceFileData {
            statements: vec![class],
        },
    );

    (tree, src.to_string())
}

#[test]
fn constructor_prefills_instance_text_with_class_name() {
    let (tree, src) = build_point_tree();
    let snippet = scaffold(
        &tree,
        &DocOptions::default(),
        span_of(&src, "constructor").start,
    );
    assert_eq!(
        snippet,
        "${1:Creates an instance of Point.}\nParameters:\n- x - $2\n- y - $3\n"
    );
}

#[test]
fn constructor_author_line_sits_between_text_and_parameters() {
    let (tree, src) = build_point_tree();
    let options = DocOptions {
        include_author_tag: true,
        author_name: "Ada".to_string(),
        ..DocOptions::default()
    };
    let snippet = scaffold(&tree, &options, span_of(&src, "constructor").start);
    assert_eq!(
        snippet,
        "${1:Creates an instance of Point.}\nAuthor: Ada $2\nParameters:\n- x - $3\n- y - $4\n"
    );
}

// =============================================================================
// Failure and boundary behavior
// =============================================================================

#[test]
fn caret_in_string_literal_finds_nothing() {
    let src = "run(\"hello world\");\n";
    let mut tree = SyntaxTree::new("str.ts", src);
    let literal = tree.add_token(SyntaxKind::StringLiteral, span_of(src, "\"hello world\""));
    let callee = tree.add_identifier("run", span_of(src, "run"));
    let call = tree.add_expression(
        SyntaxKind::CallExpression,
        vec![callee, literal],
        span_of(src, "run(\"hello world\")"),
    );
    let stmt = tree.add_expression_statement(
        TextSpan::new(0, src.len() as u32 - 1),
        quill_ast::ExpressionStatementData { expression: call },
    );
    tree.add_source_file(
        TextSpan::new(0, src.len() as u32),
        SourceFileData {
            statements: vec![stmt],
        },
    );

    let result = DocCommentProvider::new(&tree, &DocOptions::default())
        .scaffold_at_offset(span_of(src, "hello").start);
    assert_eq!(result, Err(ScaffoldError::NoDocumentableDeclaration));
}

#[test]
fn out_of_range_offset_and_position_are_rejected() {
    let (tree, _) = build_add_tree();
    let options = DocOptions::default();
    let provider = DocCommentProvider::new(&tree, &options);

    let err = provider.scaffold_at_offset(10_000).unwrap_err();
    assert!(matches!(err, ScaffoldError::OffsetOutOfRange { .. }));

    let err = provider
        .scaffold_at_position(Position::new(99, 0))
        .unwrap_err();
    assert!(matches!(err, ScaffoldError::PositionOutOfRange { line: 99 }));
}

#[test]
fn position_and_offset_entry_points_agree() {
    let (tree, caret) = build_add_tree();
    let options = DocOptions::default();
    let provider = DocCommentProvider::new(&tree, &options);
    let position = tree.line_map().offset_to_position(caret, tree.text());

    let by_offset = provider.scaffold_at_offset(caret).unwrap();
    let by_position = provider.scaffold_at_position(position).unwrap();
    assert_eq!(by_offset, by_position);
}

#[test]
fn scaffolding_twice_is_byte_identical() {
    let (tree, caret) = build_add_tree();
    let options = DocOptions::default();
    let provider = DocCommentProvider::new(&tree, &options);
    let first = provider.scaffold_at_offset(caret).unwrap();
    let second = provider.scaffold_at_offset(caret).unwrap();
    assert_eq!(first, second);
}

#[test]
fn tree_snapshot_round_trips_through_json() {
    let (tree, caret) = build_class_tree();
    let expected = scaffold(&tree, &DocOptions::default(), caret);

    let json = serde_json::to_string(&tree).unwrap();
    let restored: SyntaxTree = serde_json::from_str(&json).unwrap();
    let snippet = scaffold(&restored, &DocOptions::default(), caret);
    assert_eq!(snippet, expected);
}
