use ammonia::Builder;

use crate::{
    entities::{
        blog_post::{CodeBlock, ContentBlock, MarkDef, Span, TextBlock},
        image::{ImageSource, SanityImage},
    },
    infrastructure::utils::image_url::{ImageOptions, ImageUrlBuilder},
};

const CONTENT_IMAGE_WIDTH: u32 = 800;
const EMPTY_CONTENT: &str = "<p>Full content coming soon...</p>";
const MAX_LIST_DEPTH: u32 = 6;
const HEADINGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Renders a post body to sanitized HTML.
///
/// Consecutive list blocks are folded into (possibly nested) `ul`/`ol`
/// elements. Unknown block types render nothing.
pub fn render_content(blocks: Option<&[ContentBlock]>, images: &ImageUrlBuilder) -> String {
    let blocks = match blocks {
        Some(blocks) if !blocks.is_empty() => blocks,
        _ => return EMPTY_CONTENT.to_string(),
    };

    let mut html = String::with_capacity(blocks.len() * 128);
    let mut lists: Vec<&'static str> = Vec::new();

    for block in blocks {
        match block {
            ContentBlock::Text(text) if text.list_item.is_some() => {
                render_list_item(&mut html, &mut lists, text);
            }
            other => {
                close_lists(&mut html, &mut lists, 0);
                match other {
                    ContentBlock::Text(text) => render_text_block(&mut html, text),
                    ContentBlock::Image(image) => render_image(&mut html, image, images),
                    ContentBlock::Code(code) => render_code(&mut html, code),
                    ContentBlock::Unknown => {}
                }
            }
        }
    }
    close_lists(&mut html, &mut lists, 0);

    sanitize_html(&html)
}

fn sanitize_html(html: &str) -> String {
    let mut builder = Builder::default();
    for heading in HEADINGS {
        builder.add_tag_attributes(heading, &["id"]);
    }
    builder
        .add_tag_attributes("code", &["class"])
        .link_rel(Some("nofollow noopener noreferrer"))
        .clean(html)
        .to_string()
}

fn render_text_block(html: &mut String, block: &TextBlock) {
    let inner = render_spans(&block.children, &block.mark_defs);
    let style = block.style.as_str();

    if HEADINGS.contains(&style) {
        let anchor = slug::slugify(plain_text(&block.children));
        html.push_str(&format!("<{style} id=\"{}\">{inner}</{style}>", escape(&anchor)));
    } else if style == "blockquote" {
        html.push_str(&format!("<blockquote>{inner}</blockquote>"));
    } else {
        html.push_str(&format!("<p>{inner}</p>"));
    }
}

fn render_list_item(html: &mut String, lists: &mut Vec<&'static str>, block: &TextBlock) {
    let tag = match block.list_item.as_deref() {
        Some("number") => "ol",
        _ => "ul",
    };
    let level = block.level.unwrap_or(1).clamp(1, MAX_LIST_DEPTH) as usize;

    close_lists(html, lists, level);
    if lists.len() == level && lists.last() != Some(&tag) {
        close_lists(html, lists, level - 1);
    }
    if lists.len() == level {
        html.push_str("</li>");
    }
    while lists.len() < level {
        html.push_str(&format!("<{tag}>"));
        lists.push(tag);
    }

    html.push_str("<li>");
    html.push_str(&render_spans(&block.children, &block.mark_defs));
}

/// Closes open lists until at most `depth` remain.
fn close_lists(html: &mut String, lists: &mut Vec<&'static str>, depth: usize) {
    while lists.len() > depth {
        if let Some(tag) = lists.pop() {
            html.push_str(&format!("</li></{tag}>"));
        }
    }
}

fn render_spans(spans: &[Span], mark_defs: &[MarkDef]) -> String {
    spans
        .iter()
        .map(|span| {
            span.marks.iter().rev().fold(escape(&span.text), |inner, mark| {
                wrap_mark(inner, mark, mark_defs)
            })
        })
        .collect()
}

fn wrap_mark(inner: String, mark: &str, mark_defs: &[MarkDef]) -> String {
    let tag = match mark {
        "strong" => "strong",
        "em" => "em",
        "code" => "code",
        "underline" => "u",
        "strike-through" => "s",
        key => {
            return match mark_defs.iter().find(|d| d.key == key) {
                Some(MarkDef { kind, href: Some(href), .. }) if kind == "link" => {
                    format!("<a href=\"{}\">{inner}</a>", escape(href))
                }
                _ => inner,
            };
        }
    };
    format!("<{tag}>{inner}</{tag}>")
}

fn render_image(html: &mut String, image: &SanityImage, images: &ImageUrlBuilder) {
    let source = ImageSource::Asset(image.clone());
    let Some(src) = images.resolve_real(Some(&source), &ImageOptions::width(CONTENT_IMAGE_WIDTH).auto_format()) else {
        return;
    };
    let alt = image.alt.as_deref().unwrap_or_default();
    html.push_str(&format!("<figure><img src=\"{}\" alt=\"{}\"></figure>", escape(&src), escape(alt)));
}

fn render_code(html: &mut String, code: &CodeBlock) {
    let class = code
        .language
        .as_deref()
        .map(|lang| format!(" class=\"language-{}\"", escape(lang)))
        .unwrap_or_default();
    html.push_str(&format!("<pre><code{class}>{}</code></pre>", escape(&code.code)));
}

fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

fn escape(text: &str) -> String {
    ammonia::clean_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entities::image::AssetRef, settings::SanityConfig};

    fn images() -> ImageUrlBuilder {
        ImageUrlBuilder::new(&SanityConfig {
            project_id: Some("proj".into()),
            dataset: Some("production".into()),
            ..SanityConfig::default()
        })
    }

    fn blocks(json: &str) -> Vec<ContentBlock> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn missing_content_renders_placeholder() {
        assert_eq!(render_content(None, &images()), "<p>Full content coming soon...</p>");
        assert_eq!(render_content(Some(&[]), &images()), "<p>Full content coming soon...</p>");
    }

    #[test]
    fn headings_get_slugified_anchors() {
        let content = blocks(
            r#"[{"_type": "block", "style": "h2", "children": [{"text": "Getting Started!"}]}]"#,
        );

        let html = render_content(Some(&content), &images());

        assert_eq!(html, r#"<h2 id="getting-started">Getting Started!</h2>"#);
    }

    #[test]
    fn marks_and_links_are_rendered() {
        let content = blocks(
            r#"[{"_type": "block", "style": "normal",
                 "markDefs": [{"_key": "l1", "_type": "link", "href": "https://example.com"}],
                 "children": [
                    {"text": "bold", "marks": ["strong"]},
                    {"text": " and "},
                    {"text": "linked", "marks": ["l1", "em"]}
                 ]}]"#,
        );

        let html = render_content(Some(&content), &images());

        assert!(html.starts_with("<p><strong>bold</strong> and <a href=\"https://example.com\""), "{html}");
        assert!(html.contains("<em>linked</em></a></p>"), "{html}");
        assert!(html.contains("rel=\"nofollow noopener noreferrer\""), "{html}");
    }

    #[test]
    fn code_blocks_are_escaped() {
        let content = vec![ContentBlock::Code(CodeBlock {
            language: Some("html".into()),
            code: "<script>alert(1)</script>".into(),
            filename: None,
        })];

        let html = render_content(Some(&content), &images());

        assert_eq!(
            html,
            r#"<pre><code class="language-html">&lt;script&gt;alert(1)&lt;/script&gt;</code></pre>"#
        );
    }

    #[test]
    fn consecutive_list_items_are_grouped_and_nested() {
        let content = blocks(
            r#"[
                {"_type": "block", "listItem": "bullet", "level": 1, "children": [{"text": "a"}]},
                {"_type": "block", "listItem": "bullet", "level": 2, "children": [{"text": "b"}]},
                {"_type": "block", "listItem": "bullet", "level": 1, "children": [{"text": "c"}]},
                {"_type": "block", "children": [{"text": "after"}]},
                {"_type": "block", "listItem": "number", "children": [{"text": "one"}]}
            ]"#,
        );

        let html = render_content(Some(&content), &images());

        assert_eq!(
            html,
            "<ul><li>a<ul><li>b</li></ul></li><li>c</li></ul><p>after</p><ol><li>one</li></ol>"
        );
    }

    #[test]
    fn list_depth_is_capped() {
        let content = blocks(
            r#"[{"_type": "block", "listItem": "bullet", "level": 4000000000, "children": [{"text": "deep"}]}]"#,
        );

        let html = render_content(Some(&content), &images());

        assert_eq!(html.matches("<ul>").count(), 6, "{html}");
        assert_eq!(html.matches("</ul>").count(), 6, "{html}");
        assert!(html.contains("<li>deep</li>"), "{html}");
    }

    #[test]
    fn images_resolve_at_content_width_and_placeholders_are_dropped() {
        let content = vec![
            ContentBlock::Image(SanityImage {
                asset: Some(AssetRef { reference: Some("image-abc-1600x900-jpg".into()), url: None }),
                alt: Some("Diagram".into()),
                ..SanityImage::default()
            }),
            ContentBlock::Image(SanityImage::default()),
            ContentBlock::Unknown,
        ];

        let html = render_content(Some(&content), &images());

        assert_eq!(
            html,
            r#"<figure><img src="https://cdn.sanity.io/images/proj/production/abc-1600x900.jpg?w=800&amp;auto=format" alt="Diagram"></figure>"#
        );
    }

    #[test]
    fn raw_html_in_text_never_survives() {
        let content = blocks(
            r#"[{"_type": "block", "children": [{"text": "<img src=x onerror=alert(1)>"}]}]"#,
        );

        let html = render_content(Some(&content), &images());

        assert!(!html.contains("<img"), "{html}");
        assert!(html.contains("&lt;img"), "{html}");
    }
}
