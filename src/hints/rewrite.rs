//! Resource hint injection.
//!
//! Each step rewrites the output of the previous one. Insertions anchor on the
//! first literal `<head>` / `</head>`; a missing anchor skips that insertion.
//!
//! Only the script and stylesheet preloads check for an existing tag. Running
//! the rewrite twice duplicates the preconnect block and the font style block.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::manifest::AssetManifest;
use crate::config::HintsSection;

const HEAD_OPEN: &str = "<head>";
const HEAD_CLOSE: &str = "</head>";

static RE_FONT_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<link([^>]+)href="([^"]+\.woff2?)"([^>]*)\s*/?>"#).unwrap()
});

const FONT_DISPLAY_STYLE: &str = "
    <style>
      /* Font Loading Performance Optimization */
      @font-face {
        font-display: swap;
        font-weight: normal;
      }
    </style>
  ";

/// Apply every rewrite step to `html`.
pub fn add_hints(html: &str, manifest: &AssetManifest, hints: &HintsSection) -> String {
    let mut html = inject_connection_hints(html, hints);

    if let Some(script) = manifest.main_script(&hints.main_marker) {
        html = preload_script(&html, script);
    }

    for style in manifest.main_styles(&hints.main_marker) {
        html = preload_style(&html, style);
    }

    html = rewrite_font_links(&html);

    if hints.font_display {
        html = insert_before_head_close(&html, FONT_DISPLAY_STYLE);
    }

    html
}

/// `preconnect` and `dns-prefetch` tags right after `<head>`.
fn inject_connection_hints(html: &str, hints: &HintsSection) -> String {
    let block = connection_hints_block(hints);
    html.replacen(HEAD_OPEN, &format!("{HEAD_OPEN}{block}"), 1)
}

fn connection_hints_block(hints: &HintsSection) -> String {
    let mut block = String::from("\n    <!-- Critical Performance Optimization -->\n");
    for href in &hints.preconnect {
        block.push_str(&format!(
            "    <link rel=\"preconnect\" href=\"{href}\" crossorigin />\n"
        ));
    }
    for href in &hints.dns_prefetch {
        block.push_str(&format!("    <link rel=\"dns-prefetch\" href=\"{href}\" />\n"));
    }
    block.push_str("  ");
    block
}

/// Preload tag for the main script, unless one already exists.
fn preload_script(html: &str, script: &str) -> String {
    if html.contains(&format!("href=\"{script}\" as=\"script\"")) {
        return html.to_string();
    }
    let tag = format!(
        "    <link rel=\"preload\" href=\"{script}\" as=\"script\" importance=\"high\" crossorigin />\n"
    );
    insert_before_head_close(html, &tag)
}

/// Preload tag for a main stylesheet, unless one already exists.
fn preload_style(html: &str, style: &str) -> String {
    if html.contains(&format!("href=\"{style}\" as=\"style\"")) {
        return html.to_string();
    }
    let tag =
        format!("    <link rel=\"preload\" href=\"{style}\" as=\"style\" importance=\"high\" />\n");
    insert_before_head_close(html, &tag)
}

/// Rewrite every `.woff`/`.woff2` link into a font preload.
///
/// Attributes before `href` survive; everything after it is replaced.
fn rewrite_font_links(html: &str) -> String {
    RE_FONT_LINK
        .replace_all(html, |caps: &Captures| {
            format!(
                "<link{}href=\"{}\" rel=\"preload\" as=\"font\" type=\"font/woff2\" \
                 font-display=\"swap\" importance=\"high\" crossorigin />",
                &caps[1], &caps[2]
            )
        })
        .into_owned()
}

fn insert_before_head_close(html: &str, content: &str) -> String {
    html.replacen(HEAD_CLOSE, &format!("{content}{HEAD_CLOSE}"), 1)
}
