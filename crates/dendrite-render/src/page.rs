//! The variant page renderer.

use crate::chrome;
use crate::escape::escape_html;
use crate::inline::render_inline;
use crate::model::{PageContext, ResolvedOption, ResolvedTarget};
use crate::script::REDIRECT_SCRIPT;

/// Render a variant page. Pure: identical input yields identical bytes.
#[must_use]
pub fn variant_page(ctx: &PageContext) -> String {
    let head = chrome::head(&chrome::head_title(&ctx.story_title));
    let main = main_content(ctx);
    format!(
        "<!doctype html>\n<html lang=\"en\">\n{head}\n  <body>\n{header}\n{main}\n{REDIRECT_SCRIPT}\n  </body>\n</html>",
        header = chrome::HEADER,
    )
}

fn main_content(ctx: &PageContext) -> String {
    let title = title_heading(ctx);
    let paragraphs = paragraphs_html(&ctx.content);
    let items: String = ctx
        .options
        .iter()
        .map(|option| option_item(ctx.page_number, &ctx.variant_name, option))
        .collect();
    let author = author_html(&ctx.author_name, ctx.author_url.as_deref());
    let parent = link_paragraph(ctx.parent_url.as_deref(), "Back");
    let first = link_paragraph(ctx.first_page_url.as_deref(), "First page");
    let n = ctx.page_number;

    format!(
        "    <main>{title}{paragraphs}<ol>{items}</ol>{author}{parent}{first}\
         <p><a href=\"../new-page.html?page={n}\">Rewrite</a> \
         <a href=\"./{n}-alts.html\">Other variants</a></p>{pager}</main>",
        pager = pager_html(n),
    )
}

fn title_heading(ctx: &PageContext) -> String {
    if ctx.show_title_heading && !ctx.story_title.is_empty() {
        format!("<h1>{}</h1>", escape_html(&ctx.story_title))
    } else {
        String::new()
    }
}

/// Each newline starts a new paragraph; CRLF is normalized first.
fn paragraphs_html(content: &str) -> String {
    content
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(|line| format!("<p>{}</p>", render_inline(line)))
        .collect()
}

fn option_item(page_number: i64, variant_name: &str, option: &ResolvedOption) -> String {
    let slug = format!("{page_number}-{variant_name}-{}", option.position);
    let href = match &option.target {
        ResolvedTarget::Open => format!("../new-page.html?option={slug}"),
        ResolvedTarget::Fixed {
            page_number,
            variant_name,
        } => format!(
            "/p/{page_number}{}.html",
            variant_name.as_deref().unwrap_or("")
        ),
        ResolvedTarget::Weighted {
            page_number,
            default_variant,
            ..
        } => format!("/p/{page_number}{default_variant}.html"),
    };

    let mut attrs = vec![
        "class=\"variant-link\"".to_string(),
        format!("data-link-id=\"{slug}\""),
        format!("href=\"{href}\""),
    ];
    if let ResolvedTarget::Weighted {
        page_number,
        candidates,
        ..
    } = &option.target
    {
        let list: String = candidates
            .iter()
            .map(|c| format!("{page_number}{}:{}", c.name, c.weight))
            .collect::<Vec<_>>()
            .join(",");
        attrs.push(format!("data-variants=\"{}\"", escape_html(&list)));
    }

    format!(
        "<li><a {}>{}</a></li>",
        attrs.join(" "),
        render_inline(&option.content)
    )
}

fn author_html(author_name: &str, author_url: Option<&str>) -> String {
    if author_name.is_empty() {
        return String::new();
    }
    match author_url {
        Some(url) => format!("<p>By <a href=\"{url}\">{}</a></p>", escape_html(author_name)),
        None => format!("<p>By {}</p>", escape_html(author_name)),
    }
}

fn link_paragraph(url: Option<&str>, label: &str) -> String {
    match url {
        Some(url) => format!("<p><a href=\"{url}\">{label}</a></p>"),
        None => String::new(),
    }
}

fn pager_html(page_number: i64) -> String {
    format!(
        "<p style=\"text-align:center\">\
         <a style=\"text-decoration:none\" href=\"/p/{prev}a.html\">\u{25c0}</a> \
         {page_number} \
         <a style=\"text-decoration:none\" href=\"/p/{next}a.html\">\u{25b6}</a>\
         </p>",
        prev = page_number - 1,
        next = page_number + 1,
    )
}

#[cfg(test)]
mod tests {
    use crate::model::{PageContext, ResolvedOption, ResolvedTarget, WeightedVariant};

    use super::*;

    fn base_context() -> PageContext {
        PageContext {
            page_number: 5,
            variant_name: "a".into(),
            content: "First line\nSecond line".into(),
            options: vec![],
            story_title: "The Hollow Oak".into(),
            author_name: String::new(),
            author_url: None,
            parent_url: None,
            first_page_url: None,
            show_title_heading: true,
        }
    }

    #[test]
    fn test_rendering_twice_is_byte_identical() {
        let ctx = PageContext {
            options: vec![ResolvedOption {
                content: "Open the door".into(),
                position: 1,
                target: ResolvedTarget::Weighted {
                    page_number: 6,
                    default_variant: "a".into(),
                    candidates: vec![
                        WeightedVariant {
                            name: "a".into(),
                            weight: 1.0,
                        },
                        WeightedVariant {
                            name: "b".into(),
                            weight: 0.5,
                        },
                    ],
                },
            }],
            ..base_context()
        };

        assert_eq!(variant_page(&ctx), variant_page(&ctx));
    }

    #[test]
    fn test_title_heading_rendered_only_for_story_root() {
        let root = base_context();
        assert!(variant_page(&root).contains("<h1>The Hollow Oak</h1>"));

        let off_root = PageContext {
            show_title_heading: false,
            ..base_context()
        };
        assert!(!variant_page(&off_root).contains("<h1>"));
    }

    #[test]
    fn test_content_splits_into_paragraphs_with_inline_markdown() {
        let ctx = PageContext {
            content: "A **dark** wood\r\nNo way back".into(),
            ..base_context()
        };
        let html = variant_page(&ctx);

        assert!(html.contains("<p>A <strong>dark</strong> wood</p><p>No way back</p>"));
    }

    #[test]
    fn test_open_option_links_to_authoring_form() {
        let ctx = PageContext {
            options: vec![ResolvedOption {
                content: "Keep going".into(),
                position: 2,
                target: ResolvedTarget::Open,
            }],
            ..base_context()
        };
        let html = variant_page(&ctx);

        assert!(html.contains("href=\"../new-page.html?option=5-a-2\""));
        assert!(html.contains("data-link-id=\"5-a-2\""));
        assert!(!html.contains("data-variants"));
    }

    #[test]
    fn test_fixed_option_links_to_page_number() {
        let ctx = PageContext {
            options: vec![ResolvedOption {
                content: "Jump ahead".into(),
                position: 1,
                target: ResolvedTarget::Fixed {
                    page_number: 9,
                    variant_name: None,
                },
            }],
            ..base_context()
        };

        assert!(variant_page(&ctx).contains("href=\"/p/9.html\""));
    }

    #[test]
    fn test_weighted_option_carries_candidate_weights() {
        let ctx = PageContext {
            options: vec![ResolvedOption {
                content: "Cross the river".into(),
                position: 1,
                target: ResolvedTarget::Weighted {
                    page_number: 6,
                    default_variant: "a".into(),
                    candidates: vec![
                        WeightedVariant {
                            name: "a".into(),
                            weight: 1.0,
                        },
                        WeightedVariant {
                            name: "b".into(),
                            weight: 0.5,
                        },
                    ],
                },
            }],
            ..base_context()
        };
        let html = variant_page(&ctx);

        assert!(html.contains("href=\"/p/6a.html\""));
        assert!(html.contains("data-variants=\"6a:1,6b:0.5\""));
        assert!(html.contains("pickWeighted"));
    }

    #[test]
    fn test_author_credit_and_navigation_links() {
        let ctx = PageContext {
            author_name: "Ada".into(),
            author_url: Some("/a/u-1.html".into()),
            parent_url: Some("/p/4a.html".into()),
            first_page_url: Some("/p/1a.html".into()),
            ..base_context()
        };
        let html = variant_page(&ctx);

        assert!(html.contains("<p>By <a href=\"/a/u-1.html\">Ada</a></p>"));
        assert!(html.contains("<p><a href=\"/p/4a.html\">Back</a></p>"));
        assert!(html.contains("<p><a href=\"/p/1a.html\">First page</a></p>"));
    }

    #[test]
    fn test_story_title_is_escaped_everywhere() {
        let ctx = PageContext {
            story_title: "Tom & Co <3".into(),
            ..base_context()
        };
        let html = variant_page(&ctx);

        assert!(html.contains("<title>Dendrite - Tom &amp; Co &lt;3</title>"));
        assert!(html.contains("<h1>Tom &amp; Co &lt;3</h1>"));
    }
}
