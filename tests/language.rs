use std::collections::HashSet;

use zlang::{
    ast::{Expr, LiteralValue},
    interpreter::{
        evaluator::{builtin::BUILTIN_FUNCTIONS, core::{Context, Scope}},
        value::Value,
    },
    parse_source, run_program,
};

fn assert_success(src: &str) {
    if let Err(e) = run_program(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) -> String {
    match run_program(src) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e.to_string(),
    }
}

/// Parses `src` and invokes one of its functions with no arguments, returning
/// the resulting value.
fn eval_function(src: &str, name: &str) -> Value {
    let program = parse_source(src).expect("script failed to parse");
    let mut context = Context::new(program);
    context.invoke(name, Vec::new(), 0)
           .unwrap_or_else(|e| panic!("Invoking '{name}' failed: {e}"))
}

#[test]
fn empty_main_runs() {
    assert_success("function main() { }");
}

#[test]
fn missing_main_is_error() {
    let msg = assert_failure("function helper() { $x <- 1 }");
    assert!(msg.contains("main"));

    assert_failure("");
}

#[test]
fn last_definition_wins_for_duplicate_names() {
    // The first main would fail on an unassigned variable if it ever ran.
    assert_success(
                   r#"
        function main() { print($boom) }
        function main() { $x <- 1 }
    "#,
    );

    let program = parse_source(
                               r#"
        function f($a) { return($a) }
        function f($a, $b) { return($b) }
        function main() { }
    "#,
    ).unwrap();
    let context = Context::new(program);
    assert_eq!(context.functions["f"].params.len(), 2);
}

#[test]
fn registry_names_match_declared_functions() {
    let program = parse_source(
                               r#"
        function alpha() { }
        function beta($x) { }
        function main() { }
    "#,
    ).unwrap();
    let context = Context::new(program);

    let names: HashSet<&str> = context.functions.keys().map(String::as_str).collect();
    let declared: HashSet<&str> = ["alpha", "beta", "main"].into_iter().collect();
    assert_eq!(names, declared);
}

#[test]
fn builtins_are_registered() {
    for name in ["add", "not", "print", "get"] {
        assert!(BUILTIN_FUNCTIONS.contains(&name));
    }
}

#[test]
fn wrong_function_arity_is_error() {
    let msg = assert_failure(
                             r#"
        function double($n) { return(add($n, $n)) }
        function main() { print(double(1, 2)) }
    "#,
    );
    assert!(msg.contains("double"));
}

#[test]
fn unknown_variable_is_error() {
    let msg = assert_failure("function main() { print($y) }");
    assert!(msg.contains("Undefined variable 'y'"));
}

#[test]
fn unknown_function_is_error() {
    let msg = assert_failure("function main() { frobnicate(1) }");
    assert!(msg.contains("Undefined function 'frobnicate'"));
}

#[test]
fn builtin_with_too_few_arguments_is_error() {
    let msg = assert_failure("function main() { not() }");
    assert!(msg.contains("No arguments provided to function 'not'"));

    let msg = assert_failure("function main() { $x <- add(1) }");
    assert!(msg.contains("add"));
}

#[test]
fn builtin_with_too_many_arguments_is_error() {
    assert_failure(r#"function main() { print(1, 2) }"#);
    assert_failure("function main() { $x <- get(1) }");
}

#[test]
fn falsy_condition_skips_body() {
    // The bodies reference an unassigned variable, so reaching them would
    // fail the run. Checked for a numeric and a boolean falsy test.
    assert_success("function main() { if (0) { print($boom) } }");
    assert_success("function main() { if (1 < 0) { print($boom) } }");
    assert_success("function main() { if (not(1)) { print($boom) } }");
}

#[test]
fn truthy_condition_runs_body() {
    let msg = assert_failure("function main() { if (1) { print($boom) } }");
    assert!(msg.contains("boom"));
}

#[test]
fn condition_shares_the_enclosing_scope() {
    // $x is assigned inside the condition body and read after it.
    assert_success(
                   r#"
        function main() {
            if (1) { $x <- 5 }
            if ($x < 4) { print($boom) }
        }
    "#,
    );
}

#[test]
fn return_stops_the_statement_list() {
    assert_success(
                   r#"
        function main() {
            return(1)
            print($boom)
        }
    "#,
    );
}

#[test]
fn falsy_return_values_still_halt() {
    assert_success("function main() { return(0) print($boom) }");
    assert_success(r#"function main() { return("") print($boom) }"#);
    assert_success("function main() { return(1 < 0) print($boom) }");
}

#[test]
fn return_inside_condition_halts_the_whole_function() {
    let value = eval_function(
                              r#"
        function f() {
            if (1) { return(7) }
            print($boom)
            return(8)
        }
        function main() { }
    "#,
                              "f",
    );
    assert_eq!(value, Value::Integer(7));
}

#[test]
fn function_without_return_yields_absent() {
    let value = eval_function("function f() { $x <- 1 } function main() { }", "f");
    assert_eq!(value, Value::Absent);
}

#[test]
fn return_outside_statement_position_is_error() {
    assert_failure("function main() { $x <- return(5) }");
}

#[test]
fn literals_keep_their_numeric_kind() {
    let src = r#"
        function int() { return(-3) }
        function real() { return(2.5) }
        function trailing_dot() { return(5.) }
        function main() { }
    "#;
    assert_eq!(eval_function(src, "int"), Value::Integer(-3));
    assert_eq!(eval_function(src, "real"), Value::Real(2.5));
    assert_eq!(eval_function(src, "trailing_dot"), Value::Real(5.0));
}

#[test]
fn string_escapes_are_resolved() {
    let value = eval_function(
                              "function f() { return(\"a\\tb\\nc\") } function main() { }",
                              "f",
    );
    assert_eq!(value, Value::Str("a\tb\nc".to_string()));
}

#[test]
fn add_concatenates_strings() {
    let value = eval_function(
                              r#"function f() { return(add("foo", "bar")) } function main() { }"#,
                              "f",
    );
    assert_eq!(value, Value::Str("foobar".to_string()));
}

#[test]
fn add_promotes_mixed_numerics_to_real() {
    let src = r#"
        function ints() { return(add(2, 3)) }
        function mixed() { return(add(2, 0.5)) }
        function main() { }
    "#;
    assert_eq!(eval_function(src, "ints"), Value::Integer(5));
    assert_eq!(eval_function(src, "mixed"), Value::Real(2.5));
}

#[test]
fn add_of_incompatible_types_is_error() {
    let msg = assert_failure(r#"function main() { $x <- add("a", 1) }"#);
    assert!(msg.contains("Type error"));
}

#[test]
fn integer_overflow_is_error() {
    assert_failure("function main() { $x <- add(9223372036854775807, 1) }");
}

#[test]
fn comparison_of_non_numbers_is_error() {
    assert_failure(r#"function main() { $x <- 1 < "a" }"#);
    assert_failure(r#"function main() { $x <- "a" < "b" }"#);
}

#[test]
fn comparison_promotes_mixed_numerics() {
    assert_success(
                   r#"
        function main() {
            if (not(1 < 1.5)) { print($boom) }
            if (2.5 < 2) { print($boom) }
        }
    "#,
    );
}

#[test]
fn builtin_shadowed_by_user_function() {
    let value = eval_function(
                              r#"
        function add($a, $b) { return(0) }
        function f() { return(add(1, 2)) }
        function main() { }
    "#,
                              "f",
    );
    assert_eq!(value, Value::Integer(0));
}

#[test]
fn recursion_works_within_the_limit() {
    let value = eval_function(
                              r#"
        function sum($n) {
            if ($n < 1) { return(0) }
            return(add($n, sum(add($n, -1))))
        }
        function f() { return(sum(100)) }
        function main() { }
    "#,
                              "f",
    );
    assert_eq!(value, Value::Integer(5050));
}

#[test]
fn unbounded_recursion_is_cut_off() {
    let msg = assert_failure(
                             r#"
        function forever() { return(forever()) }
        function main() { forever() }
    "#,
    );
    assert!(msg.contains("Recursion limit"));
}

#[test]
fn parameters_bind_in_order() {
    let value = eval_function(
                              r#"
        function second($a, $b) { return($b) }
        function f() { return(second(1, 2)) }
        function main() { }
    "#,
                              "f",
    );
    assert_eq!(value, Value::Integer(2));
}

#[test]
fn scopes_do_not_leak_between_invocations() {
    // $x is local to f; main cannot see it.
    let msg = assert_failure(
                             r#"
        function f() { $x <- 1 }
        function main() {
            f()
            print($x)
        }
    "#,
    );
    assert!(msg.contains("Undefined variable 'x'"));
}

#[test]
fn comments_are_ignored() {
    assert_success(
                   r#"
        // A leading comment.
        function main() {
            $x <- 1 // trailing comment
            // if (1) { print($boom) }
        }
    "#,
    );
}

#[test]
fn malformed_programs_fail_to_parse() {
    assert_failure("function main( { }");
    assert_failure("function main() {");
    assert_failure("function () { }");
    assert_failure("garbage");
    assert_failure("function main() { $x <- }");
    assert_failure("function main() { if 1 { } }");
}

#[test]
fn pure_expression_evaluation_is_idempotent() {
    let expr = Expr::Comparison { left:  Box::new(Expr::Literal { value: LiteralValue::Integer(1),
                                                                  line:  1, }),
                                  right: Box::new(Expr::Literal { value: LiteralValue::Real(2.5),
                                                                  line:  1, }),
                                  line:  1, };

    let mut context = Context::new(Vec::new());
    let scope = Scope::new();
    let first = context.eval_expr(&expr, &scope).unwrap();
    let second = context.eval_expr(&expr, &scope).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, Value::Bool(true));
}
