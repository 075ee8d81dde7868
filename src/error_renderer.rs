//! Error rendering using ariadne
//!
//! This module provides utilities for rendering Tarn errors with rich
//! formatting, source code snippets, and helpful annotations.

use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

use crate::{Diagnostic, Error, Severity};

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The name to display for the expression in error messages.
    /// Defaults to "<expression>" if not provided.
    pub filename: Option<&'a str>,
    /// The character set to use for rendering.
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Render an error with rich formatting to stderr using default config.
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use bumpalo::Bump;
/// use tarn::{Engine, EngineOptions, RenderConfig, render_error_to};
///
/// let arena = Bump::new();
/// let engine = Engine::new(EngineOptions::default(), &arena, |env| env);
///
/// if let Err(e) = engine.compile("(1+2") {
///     let mut buf = Vec::new();
///     let config = RenderConfig { color: false, ..Default::default() };
///     render_error_to(&e, &mut buf, &config).ok();
///     let output = String::from_utf8_lossy(&buf);
///     assert!(output.contains("mismatched parentheses"));
/// }
/// ```
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let filename = config.filename.unwrap_or("<expression>");

    match error {
        Error::Compilation {
            diagnostics,
            source,
        } => render_diagnostics(source, diagnostics, writer, config, filename),
        Error::Runtime { diagnostic, source } => {
            render_diagnostics(source, &[diagnostic.clone()], writer, config, filename)
        }
        Error::ResourceExceeded(msg) => {
            writeln!(writer, "resource limit exceeded: {msg}")
        }
    }
}

fn render_diagnostics(
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
    config: &RenderConfig,
    filename: &str,
) -> std::io::Result<()> {
    for diag in diagnostics {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.

        let kind = match diag.severity {
            Severity::Error => ReportKind::Error,
            Severity::Warning => ReportKind::Warning,
            Severity::Info => ReportKind::Advice,
        };

        let ariadne_charset = match config.charset {
            CharSet::Unicode => ariadne::CharSet::Unicode,
            CharSet::Ascii => ariadne::CharSet::Ascii,
        };
        let ariadne_config = ariadne::Config::default()
            .with_color(config.color)
            .with_char_set(ariadne_charset);

        let mut report = Report::build(kind, (filename, diag.span.0.clone()))
            .with_message(&diag.message)
            .with_config(ariadne_config);

        // Add error code if present
        if let Some(code) = &diag.code {
            report = report.with_code(code);
        }

        // Primary label with the main error span
        let color = colors.next();
        report = report.with_label(
            Label::new((filename, diag.span.0.clone()))
                .with_message(&diag.message)
                .with_color(color),
        );

        // Related info as secondary labels
        for related in &diag.related {
            let color = colors.next();
            report = report.with_label(
                Label::new((filename, related.span.0.clone()))
                    .with_message(&related.message)
                    .with_color(color),
            );
        }

        // Help text as notes
        for help_msg in &diag.help {
            report = report.with_help(help_msg);
        }

        report
            .finish()
            .write((filename, Source::from(source)), &mut *writer)?;
    }

    Ok(())
}
