use std::{
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

/// Runs the interpreter with the program piped in on standard input.
fn run_script(source: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_zlang")).stdin(Stdio::piped())
                                                             .stdout(Stdio::piped())
                                                             .stderr(Stdio::piped())
                                                             .spawn()
                                                             .expect("failed to spawn interpreter");
    child.stdin
         .take()
         .expect("stdin not captured")
         .write_all(source.as_bytes())
         .expect("failed to write program");
    child.wait_with_output().expect("interpreter did not exit")
}

/// Runs the interpreter on a script file, with `input` piped to standard
/// input for `get()` to consume.
fn run_file(path: &PathBuf, input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_zlang")).arg(path)
                                                             .stdin(Stdio::piped())
                                                             .stdout(Stdio::piped())
                                                             .stderr(Stdio::piped())
                                                             .spawn()
                                                             .expect("failed to spawn interpreter");
    child.stdin
         .take()
         .expect("stdin not captured")
         .write_all(input.as_bytes())
         .expect("failed to write input");
    child.wait_with_output().expect("interpreter did not exit")
}

/// Writes a script to a uniquely named temporary file and returns its path.
fn write_script(name: &str, source: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("zlang-test-{name}.z"));
    std::fs::write(&path, source).expect("failed to write script file");
    path
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn literal_program_prints_small() {
    let output = run_script(
                            r#"
        function main() {
            $x <- 5
            if ($x < 10) { print("small") }
        }
    "#,
    );
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "small");
}

#[test]
fn arity_error_names_the_function_and_prints_nothing() {
    let output = run_script(
                            r#"
        function double($n) { return(add($n, $n)) }
        function main() { print(double(1, 2)) }
    "#,
    );
    assert!(!output.status.success());
    assert_eq!(stdout_of(&output), "");
    assert!(stderr_of(&output).contains("double"));
}

#[test]
fn undefined_variable_is_fatal() {
    let output = run_script("function main() { print($y) }");
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Undefined variable 'y'"));
}

#[test]
fn builtin_composition_prints_true() {
    let output = run_script("function main() { print(not(5 < 3)) }");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "true");
}

#[test]
fn print_adds_no_trailing_newline() {
    let output = run_script(r#"function main() { print("a") print("b") }"#);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "ab");
}

#[test]
fn print_without_argument_writes_one_newline() {
    let output = run_script(r#"function main() { print("a") print() print("b") }"#);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "a\nb");
}

#[test]
fn real_values_display_with_a_decimal_point() {
    let output = run_script("function main() { print(add(1.5, 2.5)) }");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "4.0");
}

#[test]
fn missing_main_is_fatal() {
    let output = run_script("function helper() { $x <- 1 }");
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("main"));
}

#[test]
fn syntax_errors_are_fatal() {
    let output = run_script("function main( { }");
    assert!(!output.status.success());
    assert_eq!(stdout_of(&output), "");
}

#[test]
fn get_parses_integers_reals_and_strings() {
    let path = write_script("get", "function main() { print(get()) }");

    let output = run_file(&path, "42\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "42");

    let output = run_file(&path, "3.5\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "3.5");

    let output = run_file(&path, "hello\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "hello");
}

#[test]
fn get_consumes_one_line_per_call() {
    let path = write_script("get-twice",
                            r#"
        function main() {
            $a <- get()
            $b <- get()
            print(add($a, $b))
        }
    "#);

    let output = run_file(&path, "40\n2\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "42");
}

#[test]
fn missing_file_is_fatal() {
    let path = PathBuf::from("does-not-exist.z");
    let output = run_file(&path, "");
    assert!(!output.status.success());
}

#[test]
fn example_script_runs_from_a_file() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/example.z");
    let output = run_file(&path, "");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "55");
}
