//! # Help Topics
//!
//! Built-in help and FAQ content for the generator, written in the
//! restricted markup grammar and rendered to HTML fragments on demand.
//! The content is static; it is parsed fresh on every render, which is
//! cheap enough that no caching is done.

use crate::markup;

/// A help topic: registry name plus source text and list-mode flag.
struct Topic {
    name: &'static str,
    /// Whether ordered-list rules apply when rendering this topic.
    numbered_lists: bool,
    source: &'static str,
}

const TOPICS: &[Topic] = &[
    Topic {
        name: "getting-started",
        numbered_lists: true,
        source: "\
### Getting Started

Pick a content type, fill in its fields, and the preview updates as you type.

1. Choose what the code should carry: a URL, plain text, Wi-Fi credentials, a calendar event, or a menu link.
2. Adjust the **foreground** and **background** colors if you like.
3. Optionally upload a logo.
    1. Keep the logo between 10% and 30% of the code size.
    2. Bigger logos cover more modules; error correction absorbs the loss.
4. Download the finished code as a PNG.

Codes are generated locally. Nothing you type leaves your machine.",
    },
    Topic {
        name: "wifi",
        numbered_lists: true,
        source: "\
### Wi-Fi Codes

Scanning a Wi-Fi code joins the network without typing the password.

1. Enter the network name (SSID) exactly as broadcast.
2. Enter the password.
3. Pick the encryption: **WPA** for almost every modern network, **WEP** for legacy gear, or **None** for open networks.

Avoid semicolons, commas, backslashes and colons in the SSID or password.
They are part of the code's grammar and are not escaped.",
    },
    Topic {
        name: "logos",
        numbered_lists: false,
        source: "\
### Logo Overlays

A logo sits centered on the code and the modules beneath it are cleared.
The code stays scannable because it is generated at the **highest**
error-correction level, which tolerates roughly 30% damage.<br/>
Keep the logo small and leave the slider near the low end unless your logo
has strong contrast.",
    },
    Topic {
        name: "faq",
        numbered_lists: true,
        source: "\
### FAQ

1. **Do these codes expire?** No. The data is baked into the image; there is no server behind it.
2. **Are scans tracked?** No. Static codes carry the data themselves.
3. **Why did my code stop scanning after I enlarged the logo?** The logo covered too many modules. Shrink it or raise the contrast.
4. **Can I use any color?** Yes, but keep the foreground much darker than the background or scanners will struggle.",
    },
];

/// Names of all built-in help topics.
pub fn topics() -> Vec<&'static str> {
    TOPICS.iter().map(|t| t.name).collect()
}

/// True if `name` is a known topic.
pub fn is_topic(name: &str) -> bool {
    TOPICS.iter().any(|t| t.name == name)
}

/// Render a topic to an HTML fragment. Returns `None` for unknown names.
pub fn html(name: &str) -> Option<String> {
    TOPICS
        .iter()
        .find(|t| t.name == name)
        .map(|t| markup::render(t.source, t.numbered_lists))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        assert!(is_topic("faq"));
        assert!(!is_topic("nope"));
        assert!(html("nope").is_none());
    }

    #[test]
    fn test_all_topics_render_balanced() {
        for name in topics() {
            let html = html(name).unwrap();
            assert!(!html.is_empty());
            for (open, close) in [
                ("<ol>", "</ol>"),
                ("<li>", "</li>"),
                ("<h3>", "</h3>"),
                ("<strong>", "</strong>"),
            ] {
                assert_eq!(
                    html.matches(open).count(),
                    html.matches(close).count(),
                    "unbalanced {open} in topic {name}"
                );
            }
        }
    }

    #[test]
    fn test_faq_is_an_ordered_list() {
        let html = html("faq").unwrap();
        assert!(html.contains("<ol>"));
        assert!(html.contains("<strong>Do these codes expire?</strong>"));
    }

    #[test]
    fn test_logos_topic_has_no_lists() {
        let html = html("logos").unwrap();
        assert!(!html.contains("<ol>"));
        assert!(html.contains("<br/>"));
    }
}
