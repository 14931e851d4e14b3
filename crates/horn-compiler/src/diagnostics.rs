//! Rendering parse errors against their source.

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use crate::error::ParseError;

/// Render a parse error as an annotated snippet.
pub fn render_parse_error(
    error: &ParseError,
    source: &str,
    path: Option<&str>,
    colored: bool,
) -> String {
    let renderer = if colored {
        Renderer::styled()
    } else {
        Renderer::plain()
    };

    let message = error.to_string();
    let span = adjust_range(error.span(), source.len());

    let mut snippet = Snippet::source(source)
        .line_start(1)
        .annotation(AnnotationKind::Primary.span(span).label(&message));
    if let Some(p) = path {
        snippet = snippet.path(p);
    }

    let report = vec![Level::ERROR.primary_title(&message).element(snippet)];
    renderer.render(&report).to_string()
}

/// Widen empty spans so the caret lands on a character.
fn adjust_range(range: std::ops::Range<usize>, limit: usize) -> std::ops::Range<usize> {
    if range.start == range.end {
        return range.start..(range.start + 1).min(limit).max(range.start);
    }
    range
}
