//! Asset reference extraction.
//!
//! Pattern matching over raw text, not an HTML parser. Two consequences are
//! kept on purpose:
//! - a stylesheet `<link>` is only seen when `rel="stylesheet"` comes before `href`
//! - duplicate references are reported as many times as they occur

use regex::Regex;
use std::sync::LazyLock;

static RE_SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<script[^>]+src="([^"]+)"[^>]*>"#).unwrap());

static RE_STYLESHEET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<link[^>]+rel="stylesheet"[^>]*href="([^"]+)"[^>]*>"#).unwrap()
});

static RE_FONT_PRELOAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<link[^>]+rel="preload"[^>]*href="([^"]+\.woff2?)"[^>]*>"#).unwrap()
});

/// Local asset references found in a document, in first-match order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetManifest {
    pub scripts: Vec<String>,
    pub styles: Vec<String>,
    pub fonts: Vec<String>,
}

impl AssetManifest {
    /// Scan `html` for script, stylesheet and font references.
    ///
    /// Scripts and stylesheets pointing at absolute URLs or data URIs are
    /// skipped. Fonts are taken as-is.
    pub fn extract(html: &str) -> Self {
        Self {
            scripts: captures(&RE_SCRIPT, html).filter(|s| is_local(s)).collect(),
            styles: captures(&RE_STYLESHEET, html).filter(|s| is_local(s)).collect(),
            fonts: captures(&RE_FONT_PRELOAD, html).collect(),
        }
    }

    /// First script containing `marker`, else the first script.
    pub fn main_script(&self, marker: &str) -> Option<&str> {
        self.scripts
            .iter()
            .find(|s| s.contains(marker))
            .or_else(|| self.scripts.first())
            .map(String::as_str)
    }

    /// Every stylesheet containing `marker`, in manifest order.
    pub fn main_styles<'a>(&'a self, marker: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.styles
            .iter()
            .filter(move |s| s.contains(marker))
            .map(String::as_str)
    }
}

/// First capture group of every non-overlapping match.
fn captures<'a>(re: &'a Regex, html: &'a str) -> impl Iterator<Item = String> + 'a {
    re.captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Relative or root-relative reference served by the site itself.
#[inline]
fn is_local(path: &str) -> bool {
    !path.starts_with("http") && !path.contains("data:")
}
