use std::process::{Command, Output};

fn run_program(program: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tinycalc")).arg(program)
                                                .output()
                                                .expect("Failed to run the tinycalc binary")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn print_emits_one_line_per_statement() {
    let output = run_program("x = 5; print x + 1;");

    assert_eq!(stdout_of(&output), "6\n");
}

#[test]
fn statements_execute_in_source_order() {
    let output = run_program("x = 1; print x; x = 2; print x;");

    assert_eq!(stdout_of(&output), "1\n2\n");
}

#[test]
fn division_by_zero_prints_infinity() {
    let output = run_program("print 1 / 0;");

    assert_eq!(stdout_of(&output), "inf\n");
}

#[test]
fn non_integral_results_round_trip() {
    let output = run_program("print 10 / 4; print 1 / 3;");

    assert_eq!(stdout_of(&output), "2.5\n0.3333333333333333\n");
}

#[test]
fn failure_aborts_remaining_statements() {
    let output = run_program("x = 1; print x; print y; print x;");

    // The first print ran; the failing one stopped the rest of the program.
    assert_eq!(stdout_of(&output), "1\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Undefined variable"));
}

#[test]
fn errors_are_reported_on_stderr() {
    let output = run_program("print y;");

    assert_eq!(stdout_of(&output), "");
    assert!(!output.stderr.is_empty());
}

#[test]
fn token_dump_shows_kind_and_source_text() {
    let output = Command::new(env!("CARGO_BIN_EXE_tinycalc")).args(["--tokens", "x = 1;"])
                                                             .output()
                                                             .expect("Failed to run the tinycalc binary");

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Identifier(\"x\"): 'x'"));
    assert!(stdout.contains("Equals: '='"));
    assert!(stdout.contains("Semicolon: ';'"));
}
