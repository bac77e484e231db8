//! Inbound conversion request model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Named paper sizes understood by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum PaperSize {
    /// ISO A4.
    A4,
    /// US Letter.
    Letter,
    /// 80 mm thermal receipt roll.
    #[serde(rename = "mm80")]
    Mm80,
    /// 58 mm thermal receipt roll.
    #[serde(rename = "mm58")]
    Mm58,
}

impl PaperSize {
    /// Wire name of the size.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A4 => "A4",
            Self::Letter => "Letter",
            Self::Mm80 => "mm80",
            Self::Mm58 => "mm58",
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page margins. All four sides are required.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Margin {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

/// Body accepted by every conversion route.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ConversionRequest {
    /// Document title.
    pub title: String,
    /// Markdown or HTML source, depending on the route.
    pub content: String,
    /// Stylesheet placed in the document head.
    #[serde(default)]
    pub css: String,
    /// Page to render (URL route only).
    #[serde(default)]
    pub url: Option<String>,
    /// Named paper size; takes precedence over `width`/`height`.
    #[serde(default)]
    pub size: Option<PaperSize>,
    /// Explicit page width, e.g. `"210mm"`.
    #[serde(default)]
    pub width: Option<String>,
    /// Explicit page height.
    #[serde(default)]
    pub height: Option<String>,
    /// Page margins.
    pub margin: Margin,
}
