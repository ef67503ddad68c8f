use tally::OutputFormat;
use tally::core::action::replay;
use tally::core::script::{self, ScriptError};
use tally::core::state::Calculator;
use tally::headless;

// ============================================================================
// Helper Functions
// ============================================================================

/// Final display of a script as `(current, previous)`.
fn display_after(keys: &str) -> (String, String) {
    let actions = script::parse(keys).expect("valid script");
    let mut calc = Calculator::new();
    replay(&mut calc, &actions);
    let snapshot = calc.snapshot();
    (snapshot.current, snapshot.previous)
}

fn current_after(keys: &str) -> String {
    display_after(keys).0
}

// ============================================================================
// Sessions
// ============================================================================

#[test]
fn test_divide_by_zero_then_recover() {
    assert_eq!(current_after("5/0="), "Error");
    assert_eq!(current_after("5/0=3"), "3");
    assert_eq!(current_after("5/0=3+4="), "7");
}

#[test]
fn test_chained_operators_left_to_right() {
    assert_eq!(current_after("1+2+3="), "6");
    // No precedence: (2 + 3) × 4
    assert_eq!(current_after("2+3*4="), "20");
    assert_eq!(display_after("1+2+"), ("3".to_string(), "3 +".to_string()));
}

#[test]
fn test_rounding_hides_float_noise() {
    assert_eq!(current_after("0.1+0.2="), "0.3");
    assert_eq!(current_after(".1+.2="), "0.3");
}

#[test]
fn test_negate_then_percent() {
    assert_eq!(current_after("50{negate}"), "-50");
    assert_eq!(current_after("50{negate}%"), "-0.5");
}

#[test]
fn test_delete_collapses_to_zero() {
    assert_eq!(current_after("5{bs}"), "0");
    assert_eq!(current_after("5{negate}{bs}"), "0");
    assert_eq!(current_after("123{bs}"), "12");
}

#[test]
fn test_delete_after_result_starts_over() {
    assert_eq!(current_after("2*3={bs}"), "0");
    assert_eq!(current_after("2*3={bs}4"), "4");
}

#[test]
fn test_escape_clears_everything() {
    assert_eq!(display_after("12+7{esc}"), ("0".to_string(), String::new()));
}

#[test]
fn test_operator_switch_keeps_operand() {
    // A second operator with no new operand just replaces the first
    assert_eq!(display_after("8+-"), ("8".to_string(), "8 −".to_string()));
    assert_eq!(current_after("8+-3="), "5");
}

#[test]
fn test_equals_repeats_nothing() {
    assert_eq!(current_after("2+3=="), "5");
    assert_eq!(current_after("="), "0");
}

#[test]
fn test_long_results_go_exponential() {
    assert_eq!(current_after("100000000*100000000="), "1.00000e+16");
    assert_eq!(current_after("1000/3="), "3.33333e+2");
}

#[test]
fn test_exponential_ties_round_up() {
    assert_eq!(current_after("1234565*1000000000="), "1.23457e+15");
}

#[test]
fn test_digit_cap() {
    assert_eq!(current_after("1234567890123456789"), "123456789012345");
}

#[test]
fn test_decimal_rules() {
    assert_eq!(current_after("1.2.3"), "1.23");
    assert_eq!(current_after("5+."), "0.");
    assert_eq!(current_after("5/0=."), "Error");
}

// ============================================================================
// Headless runs
// ============================================================================

#[test]
fn test_headless_text() {
    let output = headless::run("6*7=", false, OutputFormat::Text).unwrap();
    assert_eq!(output, "42");
}

#[test]
fn test_headless_json_error() {
    let output = headless::run("1/0{enter}", false, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["current"], "Error");
}

#[test]
fn test_headless_rejects_unknown_token() {
    let err = headless::run("1+{sqrt}", false, OutputFormat::Text).unwrap_err();
    assert!(matches!(err, ScriptError::UnknownToken { .. }));
    assert_eq!(err.to_string(), "unknown token {sqrt} at position 2");
}
