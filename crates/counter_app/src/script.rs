//! Headless event scripts.
//!
//! A script is a list of activation events separated by commas or whitespace,
//! for example `"inc, inc, dec"` or `"+ + -"`. [`run_script`] mounts a fresh
//! widget in the simulator, clicks the matching button for each event and
//! returns the final widget.

use counter_widget::simulator::ProgramSimulator;
use counter_widget::{CounterMsg, CounterWidget, DECREMENT_ID, INCREMENT_ID};
use tracing::debug;

/// Script error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    /// A token is not a known event.
    #[error("unknown event {token:?} at position {position} (expected inc, dec, + or -)")]
    UnknownEvent {
        /// The offending token.
        token: String,
        /// 1-based position in the script.
        position: usize,
    },
}

/// Parse a script into activation events.
pub fn parse_script(script: &str) -> Result<Vec<CounterMsg>, ScriptError> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| match token.to_ascii_lowercase().as_str() {
            "inc" | "+" | "increment" => Ok(CounterMsg::Increment),
            "dec" | "-" | "decrement" => Ok(CounterMsg::Decrement),
            _ => Err(ScriptError::UnknownEvent {
                token: token.to_string(),
                position: i + 1,
            }),
        })
        .collect()
}

/// Apply `events` to a fresh widget by clicking its buttons.
pub fn run_events(widget: CounterWidget, events: &[CounterMsg]) -> CounterWidget {
    let mut sim = ProgramSimulator::new(widget);
    sim.init();
    for event in events {
        let id = match event {
            CounterMsg::Increment => INCREMENT_ID,
            CounterMsg::Decrement => DECREMENT_ID,
        };
        sim.simulate_click(id);
    }
    debug!(
        events = events.len(),
        updates = sim.stats().update_calls,
        "script finished"
    );
    sim.into_model()
}

/// Parse and run a script.
pub fn run_script(widget: CounterWidget, script: &str) -> Result<CounterWidget, ScriptError> {
    let events = parse_script(script)?;
    Ok(run_events(widget, &events))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mixed_separators_and_aliases() {
        let events = parse_script("inc, +  INCREMENT,dec\n- decrement").unwrap();
        assert_eq!(
            events,
            vec![
                CounterMsg::Increment,
                CounterMsg::Increment,
                CounterMsg::Increment,
                CounterMsg::Decrement,
                CounterMsg::Decrement,
                CounterMsg::Decrement,
            ]
        );
    }

    #[test]
    fn parse_empty_script() {
        assert!(parse_script("").unwrap().is_empty());
        assert!(parse_script(" , ,").unwrap().is_empty());
    }

    #[test]
    fn parse_reports_unknown_token() {
        let err = parse_script("inc, reset, dec").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownEvent {
                token: "reset".into(),
                position: 2
            }
        );
        assert!(err.to_string().contains("\"reset\""));
    }

    #[test]
    fn run_script_floors_at_zero() {
        let widget = run_script(CounterWidget::new(), "dec").unwrap();
        assert_eq!(widget.state().count(), 0);
        assert!(widget.state().show_error());
    }

    #[test]
    fn run_script_counts() {
        let widget = run_script(CounterWidget::new(), "+ + + -").unwrap();
        assert_eq!(widget.state().count(), 2);
        assert!(!widget.state().show_error());
    }
}
