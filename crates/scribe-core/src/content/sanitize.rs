//! HTML sanitization for untrusted editor output.
//!
//! Cleaning is strip-based, not escape-based: a disallowed element is
//! unwrapped and its text content survives, disallowed attributes are
//! dropped, and bare URLs in text become links. Re-sanitizing sanitizer
//! output is a fixed point, so content can round-trip through the
//! pipeline safely.

use std::collections::{HashMap, HashSet};

use regex::Regex;
use ego_tree::NodeRef;
use scraper::node::{Element, Node};
use scraper::Html;

/// Default excerpt length when the author does not supply one.
pub const DEFAULT_EXCERPT_CHARS: usize = 200;

/// Elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "img"];

const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "strong", "em", "u", "s", "sub", "sup",
    "h1", "h2", "h3", "h4", "h5", "h6",
    "ul", "ol", "li",
    "blockquote", "pre", "code",
    "a", "img",
    "span", "div",
    "table", "thead", "tbody", "tr", "th", "td",
];

const GLOBAL_ATTRIBUTES: &[&str] = &["class", "style"];

const TAG_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href", "title", "target", "rel"]),
    ("img", &["src", "alt", "title", "width", "height"]),
];

const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Immutable allow-list configuration for a [`Sanitizer`].
#[derive(Debug, Clone)]
pub struct SanitizePolicy {
    /// Elements kept in the output; everything else is unwrapped.
    pub tags: HashSet<&'static str>,
    /// Attributes allowed on every kept element.
    pub global_attributes: HashSet<&'static str>,
    /// Extra attributes allowed on specific elements.
    pub tag_attributes: HashMap<&'static str, HashSet<&'static str>>,
    /// Schemes an href/src value may carry; relative URLs always pass.
    pub url_schemes: HashSet<&'static str>,
}

impl Default for SanitizePolicy {
    fn default() -> Self {
        Self {
            tags: ALLOWED_TAGS.iter().copied().collect(),
            global_attributes: GLOBAL_ATTRIBUTES.iter().copied().collect(),
            tag_attributes: TAG_ATTRIBUTES
                .iter()
                .map(|(tag, attrs)| (*tag, attrs.iter().copied().collect()))
                .collect(),
            url_schemes: ALLOWED_URL_SCHEMES.iter().copied().collect(),
        }
    }
}

/// Cleans untrusted HTML down to the configured allow-lists.
pub struct Sanitizer {
    policy: SanitizePolicy,
    url_re: Regex,
}

impl Sanitizer {
    pub fn new(policy: SanitizePolicy) -> Self {
        let url_re = Regex::new(r#"https?://[^\s<>"]+"#).expect("url pattern compiles");
        Self { policy, url_re }
    }

    /// Reduce `raw` to safe HTML: disallowed tags unwrapped (their text
    /// retained), disallowed attributes dropped, bare URLs in text made
    /// clickable except inside pre/code. Idempotent on its own output.
    pub fn sanitize(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }

        let fragment = Html::parse_fragment(raw);
        let mut out = String::with_capacity(raw.len());
        for child in fragment.root_element().children() {
            self.emit(child, &mut out, false);
        }
        out
    }

    /// Remove all markup and return the decoded text content.
    pub fn strip_to_text(&self, html: &str) -> String {
        if html.is_empty() {
            return String::new();
        }

        let fragment = Html::parse_fragment(html);
        fragment.root_element().text().collect()
    }

    /// Plain-text excerpt of at most `max_chars` characters, truncated at
    /// the last word boundary before the limit and marked with `...`.
    /// Content with no space before the limit is cut at the raw length.
    pub fn derive_excerpt(&self, html: &str, max_chars: usize) -> String {
        let plain = self.strip_to_text(html);
        if plain.chars().count() <= max_chars {
            return plain;
        }

        let cut: String = plain.chars().take(max_chars).collect();
        let truncated = match cut.rfind(' ') {
            Some(boundary) => &cut[..boundary],
            None => cut.as_str(),
        };
        format!("{truncated}...")
    }

    /// Serialize one node, recursing into children. `no_links` is set
    /// inside pre, code, and a elements, where bare URLs stay plain.
    fn emit(&self, node: NodeRef<'_, Node>, out: &mut String, no_links: bool) {
        match node.value() {
            Node::Text(text) => {
                let text: &str = &text.text;
                if no_links {
                    escape_text(text, out);
                } else {
                    self.linkify_into(text, out);
                }
            }
            Node::Element(element) => {
                let name = element.name();
                if !self.policy.tags.contains(name) {
                    // Unwrap: the tag disappears, its content does not.
                    for child in node.children() {
                        self.emit(child, out, no_links);
                    }
                    return;
                }

                out.push('<');
                out.push_str(name);
                for (attr, value) in self.filter_attributes(name, &element) {
                    out.push(' ');
                    out.push_str(attr);
                    out.push_str("=\"");
                    escape_attribute(value, out);
                    out.push('"');
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&name) {
                    return;
                }

                let no_links = no_links || matches!(name, "pre" | "code" | "a");
                for child in node.children() {
                    self.emit(child, out, no_links);
                }

                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
            // Comments, doctypes and processing instructions are dropped.
            _ => {}
        }
    }

    /// Attributes surviving the per-tag allow-list, in a deterministic
    /// order so that re-sanitizing reproduces the same byte stream.
    fn filter_attributes<'a>(
        &self,
        tag: &str,
        element: &'a Element,
    ) -> Vec<(&'a str, &'a str)> {
        let extra = self.policy.tag_attributes.get(tag);
        let mut kept: Vec<(&str, &str)> = element
            .attrs()
            .filter(|(attr, _)| {
                self.policy.global_attributes.contains(attr)
                    || extra.is_some_and(|attrs| attrs.contains(attr))
            })
            .filter(|(attr, value)| {
                !matches!(*attr, "href" | "src") || self.url_allowed(value)
            })
            .collect();
        kept.sort_by_key(|(attr, _)| *attr);
        kept.dedup_by_key(|(attr, _)| *attr);
        kept
    }

    /// A URL value passes when it is relative or carries an allow-listed
    /// scheme. Anything scheme-shaped that is not on the list (including
    /// obfuscated forms like `jav\nascript:`) drops the attribute.
    fn url_allowed(&self, value: &str) -> bool {
        let head = value
            .trim()
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default();
        match head.split_once(':') {
            None => true,
            Some((scheme, _)) => self
                .policy
                .url_schemes
                .contains(scheme.to_ascii_lowercase().as_str()),
        }
    }

    /// Escape `text` into `out`, wrapping bare URLs in anchors. Trailing
    /// punctuation stays outside the link.
    fn linkify_into(&self, text: &str, out: &mut String) {
        let mut last = 0;
        for m in self.url_re.find_iter(text) {
            escape_text(&text[last..m.start()], out);

            let url = m.as_str();
            let link = url.trim_end_matches(['.', ',', ';', ':', '!', '?', ')', '\'']);
            out.push_str("<a href=\"");
            escape_attribute(link, out);
            out.push_str("\" rel=\"nofollow\">");
            escape_text(link, out);
            out.push_str("</a>");
            escape_text(&url[link.len()..], out);

            last = m.end();
        }
        escape_text(&text[last..], out);
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(SanitizePolicy::default())
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
