//! Fixed-style JavaScript formatting
//!
//! Snippet content is first parsed as an ES module (so top-level `await` is
//! accepted, as it is in the devtools console) to reject invalid source with
//! precise diagnostics. Valid source is then pretty-printed with a fixed
//! style: two-space indent, semicolons, single quotes, and trailing commas
//! where ES5 allows them. Comments and single blank lines are kept. Output
//! is deterministic, which keeps repeated loads byte-identical.

use std::path::Path;
use std::sync::OnceLock;

use dprint_plugin_typescript::configuration::{
    Configuration, ConfigurationBuilder, QuoteStyle, SemiColons, TrailingCommas,
};
use dprint_plugin_typescript::{FormatTextOptions, format_text};
use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::error::{Result, SnipsyncError};

const LINE_WIDTH: u32 = 80;
const INDENT_WIDTH: u8 = 2;

/// Formats snippet source text
pub struct SnippetFormatter;

impl SnippetFormatter {
    /// Format `source` belonging to the snippet `name`
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Format`] with every parser diagnostic if the
    /// source is not valid JavaScript.
    pub fn format(name: &str, source: &str) -> Result<String> {
        Self::check_syntax(name, source)?;

        let formatted = format_text(FormatTextOptions {
            path: Path::new("snippet.js"),
            extension: None,
            text: source.to_string(),
            config: style(),
            external_formatter: None,
        })
        .map_err(|e| SnipsyncError::Format {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        // `None` means the source is already in the target style
        Ok(formatted.unwrap_or_else(|| source.to_string()))
    }

    fn check_syntax(name: &str, source: &str) -> Result<()> {
        let allocator = Allocator::default();
        let parsed = Parser::new(&allocator, source, SourceType::mjs()).parse();

        if !parsed.panicked && parsed.errors.is_empty() {
            return Ok(());
        }

        let reason = if parsed.errors.is_empty() {
            "parser aborted".to_string()
        } else {
            parsed
                .errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        };

        Err(SnipsyncError::Format {
            name: name.to_string(),
            reason,
        })
    }
}

fn style() -> &'static Configuration {
    static STYLE: OnceLock<Configuration> = OnceLock::new();

    STYLE.get_or_init(|| {
        ConfigurationBuilder::new()
            .line_width(LINE_WIDTH)
            .indent_width(INDENT_WIDTH)
            .use_tabs(false)
            .semi_colons(SemiColons::Always)
            .quote_style(QuoteStyle::PreferSingle)
            .trailing_commas(TrailingCommas::OnlyMultiLine)
            // ES5 has no trailing commas in calls or parameter lists
            .arguments_trailing_commas(TrailingCommas::Never)
            .parameters_trailing_commas(TrailingCommas::Never)
            .build()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_adds_spacing_and_semicolon() {
        let formatted = SnippetFormatter::format("foo", "let x=1").unwrap();

        assert_eq!(formatted, "let x = 1;\n");
    }

    #[test]
    fn test_format_indents_with_two_spaces() {
        let formatted = SnippetFormatter::format("f", "function f(){return 1}").unwrap();

        assert_eq!(formatted, "function f() {\n  return 1;\n}\n");
    }

    #[test]
    fn test_format_prefers_single_quotes() {
        let formatted = SnippetFormatter::format("log", r#"console.log("hi")"#).unwrap();

        assert_eq!(formatted, "console.log('hi');\n");
    }

    #[test]
    fn test_format_keeps_trailing_line_comment() {
        let formatted = SnippetFormatter::format("c", "let x=1 // trailing").unwrap();

        assert_eq!(formatted, "let x = 1; // trailing\n");
    }

    #[test]
    fn test_format_keeps_comments_inside_array() {
        let formatted =
            SnippetFormatter::format("c", "const a = [\n  1, // one\n  2,\n];").unwrap();

        assert!(formatted.contains("// one"), "got: {formatted}");
        assert!(formatted.contains("2,\n"), "got: {formatted}");
    }

    #[test]
    fn test_format_keeps_comment_in_call_arguments() {
        let formatted = SnippetFormatter::format("c", "call(/* arg */ 1)").unwrap();

        assert_eq!(formatted, "call(/* arg */ 1);\n");
    }

    #[test]
    fn test_format_adds_trailing_comma_to_multiline_object() {
        let formatted =
            SnippetFormatter::format("o", "const o = {\n  aaaa: 1,\n  bbbb: 2,\n  cccc: 3\n}")
                .unwrap();

        assert!(formatted.contains("  cccc: 3,\n};"), "got: {formatted}");
    }

    #[test]
    fn test_format_keeps_blank_line_between_statements() {
        let formatted = SnippetFormatter::format("b", "a()\n\nb()").unwrap();

        assert_eq!(formatted, "a();\n\nb();\n");
    }

    #[test]
    fn test_format_accepts_top_level_await() {
        assert!(SnippetFormatter::format("fetch", "const r = await fetch('/');").is_ok());
    }

    #[test]
    fn test_format_is_idempotent() {
        let once = SnippetFormatter::format(
            "f",
            "// helper\nfunction f(a,b){return a+b} // sum\nf(1,2)",
        )
        .unwrap();
        let twice = SnippetFormatter::format("f", &once).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_format_rejects_invalid_source() {
        let err = SnippetFormatter::format("broken", "let = ;").unwrap_err();

        match err {
            SnipsyncError::Format { name, reason } => {
                assert_eq!(name, "broken");
                assert!(!reason.is_empty());
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_format_empty_source() {
        assert_eq!(SnippetFormatter::format("empty", "").unwrap().trim(), "");
    }
}
