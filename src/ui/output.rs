//! Output abstraction layer
//!
//! Reports the outcome of a picker session once the terminal has been
//! restored. The trait keeps the reporting code testable without stdout.

use crate::combo::ComboOption;
use colored::Colorize;

/// Trait for output operations
///
/// # Examples
///
/// ```
/// use pillbox::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.success("2 options selected");
/// output.info("(nothing created)");
/// ```
pub trait OutputWriter {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr with colors
pub struct StdoutWriter;

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    fn info(&self, message: &str) {
        println!("{}", message.dimmed());
    }
}

/// How the final selection is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionFormat {
    /// Summary line followed by one value per line
    #[default]
    Pretty,
    /// Values only, one per line, for piping
    Plain,
    /// A JSON array of `{label, value, group_label}` objects
    Json,
}

/// Print the final selection through `output`
///
/// Custom options (not in `catalog_labels`) are marked as created in the
/// pretty format.
pub fn report_selection(
    output: &dyn OutputWriter,
    selected: &[ComboOption],
    catalog_labels: &[String],
    format: SelectionFormat,
) {
    match format {
        SelectionFormat::Plain => {
            for option in selected {
                output.write(&option.value);
            }
        }
        SelectionFormat::Json => match serde_json::to_string_pretty(selected) {
            Ok(json) => output.write(&json),
            Err(e) => output.error(&format!("Failed to encode selection: {e}")),
        },
        SelectionFormat::Pretty => {
            if selected.is_empty() {
                output.info("Nothing selected");
                return;
            }
            let noun = if selected.len() == 1 { "option" } else { "options" };
            output.success(&format!("{} {noun} selected", selected.len()));
            for option in selected {
                let created = !catalog_labels.contains(&option.label);
                match (&option.group_label, created) {
                    (_, true) => output.write(&format!("  {} (created)", option.value)),
                    (Some(group), false) => output.write(&format!("  {} [{group}]", option.value)),
                    (None, false) => output.write(&format!("  {}", option.value)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        lines: RefCell<Vec<String>>,
    }

    impl OutputWriter for Recorder {
        fn write(&self, message: &str) {
            self.lines.borrow_mut().push(message.to_string());
        }
        fn error(&self, message: &str) {
            self.lines.borrow_mut().push(format!("error: {message}"));
        }
        fn success(&self, message: &str) {
            self.lines.borrow_mut().push(format!("ok: {message}"));
        }
        fn info(&self, message: &str) {
            self.lines.borrow_mut().push(format!("info: {message}"));
        }
    }

    fn selection() -> Vec<ComboOption> {
        vec![
            ComboOption::labelled("Red"),
            ComboOption::labelled("Apple").with_group("Fruit"),
            ComboOption::labelled("Teal"),
        ]
    }

    fn catalog_labels() -> Vec<String> {
        vec!["Red".to_string(), "Apple".to_string()]
    }

    #[test]
    fn test_pretty_marks_groups_and_created() {
        let out = Recorder::default();
        report_selection(&out, &selection(), &catalog_labels(), SelectionFormat::Pretty);
        assert_eq!(
            *out.lines.borrow(),
            vec![
                "ok: 3 options selected",
                "  Red",
                "  Apple [Fruit]",
                "  Teal (created)",
            ]
        );
    }

    #[test]
    fn test_pretty_empty() {
        let out = Recorder::default();
        report_selection(&out, &[], &[], SelectionFormat::Pretty);
        assert_eq!(*out.lines.borrow(), vec!["info: Nothing selected"]);
    }

    #[test]
    fn test_plain_values_only() {
        let out = Recorder::default();
        report_selection(&out, &selection(), &catalog_labels(), SelectionFormat::Plain);
        assert_eq!(*out.lines.borrow(), vec!["Red", "Apple", "Teal"]);
    }

    #[test]
    fn test_json_array() {
        let out = Recorder::default();
        report_selection(&out, &selection()[..1], &catalog_labels(), SelectionFormat::Json);
        let lines = out.lines.borrow();
        let parsed: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(parsed[0]["label"], "Red");
        assert!(parsed[0].get("group_label").is_none());
    }
}
