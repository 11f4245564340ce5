//! Value enums for closed-set options
//!
//! Most Swagger UI options are passed through verbatim, but a few only accept
//! a fixed token set. Parsing rejects anything outside that set instead of
//! forwarding junk to the viewer.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Default expansion setting for operations and tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocExpansion {
    /// Expand only the tags.
    List,
    /// Expand the tags and operations.
    Full,
    /// Expand nothing.
    None,
}

impl DocExpansion {
    pub(crate) const EXPECTED: &'static str = "one of `list`, `full`, `none`";

    /// The token used in configuration input and in the viewer initializer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Full => "full",
            Self::None => "none",
        }
    }
}

impl fmt::Display for DocExpansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocExpansion {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Self::List),
            "full" => Ok(Self::Full),
            "none" => Ok(Self::None),
            _ => Err(()),
        }
    }
}

/// HTTP method for the `supportedSubmitMethods` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    pub(crate) const EXPECTED: &'static str =
        "one of `get`, `put`, `post`, `delete`, `options`, `head`, `patch`, `trace`";

    /// The lowercase token the viewer expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Put => "put",
            Self::Post => "post",
            Self::Delete => "delete",
            Self::Options => "options",
            Self::Head => "head",
            Self::Patch => "patch",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(Self::Get),
            "put" => Ok(Self::Put),
            "post" => Ok(Self::Post),
            "delete" => Ok(Self::Delete),
            "options" => Ok(Self::Options),
            "head" => Ok(Self::Head),
            "patch" => Ok(Self::Patch),
            "trace" => Ok(Self::Trace),
            _ => Err(()),
        }
    }
}

/// Bundled Swagger UI stylesheet themes.
///
/// Each variant maps to a stylesheet shipped alongside the viewer assets;
/// the page renderer links [`Theme::href`] into the HTML head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// The stock Swagger UI stylesheet.
    Original,
    FeelingBlue,
    Flattop,
    Material,
    Monokai,
    Muted,
    Newspaper,
    Outline,
}

impl Theme {
    pub(crate) const EXPECTED: &'static str = "one of `original`, `feeling-blue`, `flattop`, \
         `material`, `monokai`, `muted`, `newspaper`, `outline`";

    /// The token used in configuration input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::FeelingBlue => "feeling-blue",
            Self::Flattop => "flattop",
            Self::Material => "material",
            Self::Monokai => "monokai",
            Self::Muted => "muted",
            Self::Newspaper => "newspaper",
            Self::Outline => "outline",
        }
    }

    /// Stylesheet href, relative to the viewer's asset root.
    pub fn href(&self) -> &'static str {
        match self {
            Self::Original => "style.css",
            Self::FeelingBlue => "theme-feeling-blue.css",
            Self::Flattop => "theme-flattop.css",
            Self::Material => "theme-material.css",
            Self::Monokai => "theme-monokai.css",
            Self::Muted => "theme-muted.css",
            Self::Newspaper => "theme-newspaper.css",
            Self::Outline => "theme-outline.css",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(Self::Original),
            "feeling-blue" => Ok(Self::FeelingBlue),
            "flattop" => Ok(Self::Flattop),
            "material" => Ok(Self::Material),
            "monokai" => Ok(Self::Monokai),
            "muted" => Ok(Self::Muted),
            "newspaper" => Ok(Self::Newspaper),
            "outline" => Ok(Self::Outline),
            _ => Err(()),
        }
    }
}
