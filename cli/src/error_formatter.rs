use ariadne::{Color, Label, Report, ReportKind, Source};
use deduce::DeduceError;

const SOURCE_ID: &str = "formula";

/// Format a DeduceError with fancy terminal output using Ariadne
pub fn format_error(error: &DeduceError) -> String {
    match error {
        DeduceError::Syntax(details) => {
            let mut output = Vec::new();

            // Errors at the end of input point one past the last character;
            // pad the source so the label has somewhere to sit.
            let source_text = format!("{} ", details.source_text);
            let start = details.span.start;
            let end = details.span.end.max(start + 1);

            let mut report = Report::build(ReportKind::Error, SOURCE_ID, start)
                .with_message(format!("Syntax error: {}", details.message))
                .with_label(
                    Label::new((SOURCE_ID, start..end))
                        .with_message("here")
                        .with_color(Color::Red),
                );

            if let Some(suggestion) = &details.suggestion {
                report = report.with_help(suggestion);
            }

            match report
                .finish()
                .write((SOURCE_ID, Source::from(source_text.as_str())), &mut output)
            {
                Ok(_) => String::from_utf8_lossy(&output).to_string(),
                Err(_) => format!("{}", error),
            }
        }
        DeduceError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            suggestion,
        } => {
            format!(
                "Resource limit exceeded: {}\n  Limit: {}\n  Actual: {}\n  {}",
                limit_name, limit_value, actual_value, suggestion
            )
        }
        other => format!("Error: {}", other),
    }
}
