//! # Headless Adapter
//!
//! Runs a key script on a fresh calculator and renders the display as
//! text or JSON. Backs `tally --keys`.

use serde::Serialize;

use crate::OutputFormat;
use crate::core::action::{Action, replay};
use crate::core::script::{self, ScriptError};
use crate::core::state::{Calculator, DisplaySnapshot};

/// One action and the display it produced.
#[derive(Debug, Serialize)]
pub struct TraceStep {
    pub input: Action,
    pub display: DisplaySnapshot,
}

/// Replay `keys` and render the final display, or every step when `trace` is set.
pub fn run(keys: &str, trace: bool, format: OutputFormat) -> Result<String, ScriptError> {
    let actions = script::parse(keys)?;
    let mut calculator = Calculator::new();
    let displays = replay(&mut calculator, &actions);

    let output = if trace {
        let steps: Vec<TraceStep> = actions
            .into_iter()
            .zip(displays)
            .map(|(input, display)| TraceStep { input, display })
            .collect();
        render_trace(&steps, format)
    } else {
        render_display(&calculator.snapshot(), format)
    };
    Ok(output)
}

fn render_display(display: &DisplaySnapshot, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if display.previous.is_empty() {
                display.current.clone()
            } else {
                format!("{}\n{}", display.previous, display.current)
            }
        }
        OutputFormat::Json => to_json(display),
    }
}

fn render_trace(steps: &[TraceStep], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => steps
            .iter()
            .map(|step| {
                let label = step.input.label();
                if step.display.previous.is_empty() {
                    format!("{:>2}  {}", label, step.display.current)
                } else {
                    format!("{:>2}  {}  ({})", label, step.display.current, step.display.previous)
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => to_json(&steps),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    // Plain structs of strings can't fail to serialize.
    serde_json::to_string_pretty(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_final_display() {
        assert_eq!(run("12+7=", false, OutputFormat::Text).unwrap(), "19");
    }

    #[test]
    fn test_text_shows_pending_line() {
        assert_eq!(run("12+7", false, OutputFormat::Text).unwrap(), "12 +\n7");
    }

    #[test]
    fn test_text_trace() {
        let output = run("2*3=", true, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, [" 2  2", " ×  2  (2 ×)", " 3  3  (2 ×)", " =  6"]);
    }

    #[test]
    fn test_json_final_display() {
        let output = run("5/0=", false, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["current"], "Error");
        assert_eq!(value["previous"], "");
    }

    #[test]
    fn test_json_trace() {
        let output = run("9{negate}", true, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let steps = value.as_array().unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0]["input"]["action"], "input_digit");
        assert_eq!(steps[0]["input"]["value"], 9);
        assert_eq!(steps[1]["input"]["action"], "negate");
        assert_eq!(steps[1]["display"]["current"], "-9");
    }

    #[test]
    fn test_empty_script_shows_zero() {
        assert_eq!(run("", false, OutputFormat::Text).unwrap(), "0");
    }

    #[test]
    fn test_script_error_propagates() {
        assert!(run("1{bogus}", false, OutputFormat::Text).is_err());
    }
}
