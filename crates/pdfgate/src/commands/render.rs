//! `pdfgate render` command implementation.
//!
//! Renders a local Markdown or HTML file into the same complete HTML document
//! the API would send to the renderer. Markdown front matter may set the
//! document `title` and name an extra stylesheet with `css`, resolved relative
//! to the input file.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use pdfgate_render::{DEFAULT_CSS, MarkdownConverter, RenderedFragment};

use crate::error::CliError;
use crate::output::Output;

/// Title used when neither `--title` nor front matter provides one.
const DEFAULT_TITLE: &str = "Document";

/// Input document format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Markdown,
    Html,
}

impl Format {
    /// Infer the format from a file extension.
    fn detect(path: &Path) -> Result<Self, CliError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("md" | "markdown") => Ok(Self::Markdown),
            Some("html" | "htm") => Ok(Self::Html),
            _ => Err(CliError::Validation(format!(
                "cannot infer format of {}, pass --format",
                path.display()
            ))),
        }
    }
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown or HTML file to render.
    input: PathBuf,

    /// Input format (default: inferred from the file extension).
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Document title (overrides front matter).
    #[arg(short, long)]
    title: Option<String>,

    /// Stylesheet replacing the built-in default.
    #[arg(long)]
    css: Option<PathBuf>,

    /// Output file (default: input path with an `.html` extension).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or written, or the format
    /// cannot be determined.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let format = match self.format {
            Some(format) => format,
            None => Format::detect(&self.input)?,
        };
        let destination = self.destination()?;
        let content = read_file(&self.input)?;

        let fragment = match format {
            Format::Markdown => MarkdownConverter.render_fragment(&content),
            Format::Html => RenderedFragment::from_html(content),
        };
        let front_matter = &fragment.front_matter;

        let title = self
            .title
            .clone()
            .or_else(|| front_matter.get_str("title").map(str::to_owned))
            .unwrap_or_else(|| DEFAULT_TITLE.to_owned());

        let mut css = match &self.css {
            Some(path) => read_file(path)?,
            None => DEFAULT_CSS.to_owned(),
        };
        if let Some(extra) = front_matter.get_str("css") {
            let path = self.input_dir().join(extra);
            match std::fs::read_to_string(&path) {
                Ok(extra_css) => {
                    css.push('\n');
                    css.push_str(&extra_css);
                }
                Err(e) => output.warning(&format!(
                    "Warning: ignoring stylesheet {}: {e}",
                    path.display()
                )),
            }
        }

        let document = fragment.into_document(&title, &css);
        tracing::debug!(
            keys = document.front_matter.len(),
            bytes = document.html.len(),
            "Rendered document"
        );

        std::fs::write(&destination, document.html)?;
        output.success(&format!("Wrote {}", destination.display()));

        Ok(())
    }

    /// Directory front matter paths are resolved against.
    fn input_dir(&self) -> &Path {
        self.input.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Where to write the document. Never the input file itself.
    fn destination(&self) -> Result<PathBuf, CliError> {
        if let Some(path) = &self.output {
            return Ok(path.clone());
        }
        let path = self.input.with_extension("html");
        if path == self.input {
            return Err(CliError::Validation(format!(
                "{} would overwrite the input, pass --output",
                path.display()
            )));
        }
        Ok(path)
    }
}

/// Read a text file, naming the path in the error.
fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {e}", path.display()),
        ))
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn args(input: PathBuf) -> RenderArgs {
        RenderArgs {
            input,
            format: None,
            title: None,
            css: None,
            output: None,
        }
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(Format::detect(Path::new("a.md")).unwrap(), Format::Markdown);
        assert_eq!(Format::detect(Path::new("a.MARKDOWN")).unwrap(), Format::Markdown);
        assert_eq!(Format::detect(Path::new("a.htm")).unwrap(), Format::Html);
        assert!(matches!(
            Format::detect(Path::new("a.txt")),
            Err(CliError::Validation(_))
        ));
    }

    #[test]
    fn test_render_markdown_with_defaults() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("notes.md");
        fs::write(&input, "# Notes\n\n| a | b |\n|---|---|\n| 1 | 2 |\n").unwrap();

        args(input).execute(&Output::new()).unwrap();

        let html = fs::read_to_string(dir.path().join("notes.html")).unwrap();
        assert!(html.contains("<title>Document</title>"));
        assert!(html.contains(DEFAULT_CSS));
        assert!(html.contains("<h1>Notes</h1>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_front_matter_title_and_css() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("extra.css"), "h1 { color: teal; }").unwrap();
        let input = dir.path().join("doc.md");
        fs::write(&input, "---\ntitle: Quarterly\ncss: extra.css\n---\n# Body").unwrap();

        args(input).execute(&Output::new()).unwrap();

        let html = fs::read_to_string(dir.path().join("doc.html")).unwrap();
        assert!(html.contains("<title>Quarterly</title>"));
        assert!(html.contains(DEFAULT_CSS));
        assert!(html.contains("h1 { color: teal; }"));
        assert!(!html.contains("css: extra.css"));
    }

    #[test]
    fn test_missing_front_matter_css_is_ignored() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("doc.md");
        fs::write(&input, "---\ncss: missing.css\n---\nText").unwrap();

        args(input).execute(&Output::new()).unwrap();

        let html = fs::read_to_string(dir.path().join("doc.html")).unwrap();
        assert!(html.contains("<p>Text</p>"));
    }

    #[test]
    fn test_cli_overrides() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("page.txt");
        let css = dir.path().join("custom.css");
        let output = dir.path().join("out").join("page.html");
        fs::create_dir(dir.path().join("out")).unwrap();
        fs::write(&input, "---\ntitle: Ignored\n---\n<b>raw</b>").unwrap();
        fs::write(&css, "b { font-weight: 900; }").unwrap();

        RenderArgs {
            input,
            format: Some(Format::Html),
            title: Some("Custom".to_owned()),
            css: Some(css),
            output: Some(output.clone()),
        }
        .execute(&Output::new())
        .unwrap();

        let html = fs::read_to_string(output).unwrap();
        assert!(html.contains("<title>Custom</title>"));
        assert!(html.contains("b { font-weight: 900; }"));
        assert!(!html.contains(DEFAULT_CSS));
        assert!(html.contains("---\ntitle: Ignored\n---\n<b>raw</b>"));
    }

    #[test]
    fn test_html_input_requires_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("page.html");
        fs::write(&input, "<p>x</p>").unwrap();

        let err = args(input.clone()).execute(&Output::new()).unwrap_err();

        assert!(matches!(err, CliError::Validation(_)));
        assert_eq!(fs::read_to_string(input).unwrap(), "<p>x</p>");
    }

    #[test]
    fn test_missing_input_names_path() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("absent.md");

        let err = args(input).execute(&Output::new()).unwrap_err();

        assert!(matches!(err, CliError::Io(_)));
        assert!(err.to_string().contains("absent.md"));
    }
}
