use colored::Colorize;

use vash_codegen::TraceEvent;

/// Formats errors and traces for the terminal.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// `error: <outermost>` followed by one `  caused by: <cause>` line per
    /// underlying error.
    pub fn format_error(&self, error: &anyhow::Error) -> String {
        let mut out = String::new();
        let label = if self.color {
            "error".red().bold().to_string()
        } else {
            "error".to_string()
        };
        out.push_str(&label);
        out.push_str(": ");
        out.push_str(&error.to_string());
        for cause in error.chain().skip(1) {
            out.push_str("\n  caused by: ");
            out.push_str(&cause.to_string());
        }
        out
    }

    pub fn format_trace(&self, name: &str, events: &[TraceEvent]) -> String {
        let mut out = String::new();
        let header = format!("trace {}", name);
        if self.color {
            out.push_str(&header.cyan().to_string());
        } else {
            out.push_str(&header);
        }
        for event in events {
            out.push('\n');
            out.push_str(&event.to_string());
        }
        out
    }
}
