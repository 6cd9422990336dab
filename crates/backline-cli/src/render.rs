//! Static HTML preview of a product document.
//!
//! One self-contained page: every enabled module in document order, rich
//! text rendered through the markup transcoder. This is an authoring
//! preview, not the production page.

use backline_config::classify::{MediaSource, classify_source};
use backline_config::{MediaItem, ProductConfig};
use backline_markup::html::escape;
use std::fmt::Write;

/// Render the whole document as an HTML page.
pub fn render_page(config: &ProductConfig) -> String {
    let mut out = String::new();
    let info = &config.info;

    let _ = write!(
        out,
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n",
        escape(&info.name)
    );

    let _ = write!(
        out,
        "<header>\n<h1>{}</h1>\n<p class=\"brand\">{}</p>\n</header>\n",
        escape(&info.name),
        escape(&info.brand)
    );

    if let Some(hero) = &info.hero {
        out.push_str("<section class=\"hero\">\n");
        render_media(&mut out, hero);
        out.push_str("</section>\n");
    }

    if !info.info_box.is_empty() {
        out.push_str("<aside class=\"info-box\">\n<dl>\n");
        for field in &info.info_box {
            let _ = write!(
                out,
                "<dt>{}</dt><dd>{}</dd>\n",
                escape(&field.label),
                escape(&field.value)
            );
        }
        out.push_str("</dl>\n</aside>\n");
    }

    if !info.links.is_empty() {
        out.push_str("<nav class=\"links\">\n");
        for link in &info.links {
            let icon = link
                .icon
                .map(|icon| format!(" data-icon=\"{}\"", icon.key()))
                .unwrap_or_default();
            let _ = write!(
                out,
                "<a href=\"{}\"{}>{}</a>\n",
                escape(&link.url),
                icon,
                escape(&link.text)
            );
        }
        out.push_str("</nav>\n");
    }

    if let Some(intro) = config.intro.as_ref().filter(|m| m.enabled) {
        out.push_str("<section class=\"intro\">\n");
        let _ = write!(out, "<h2>{}</h2>\n", intro.heading.to_html());
        let _ = write!(out, "<div>{}</div>\n", intro.body.to_html());
        if let Some(media) = &intro.media {
            render_media(&mut out, media);
        }
        out.push_str("</section>\n");
    }

    if let Some(concept) = config.concept.as_ref().filter(|m| m.enabled) {
        out.push_str("<section class=\"concept\">\n");
        for section in &concept.sections {
            let _ = write!(out, "<h3>{}</h3>\n", section.title.to_html());
            let _ = write!(out, "<div>{}</div>\n", section.body.to_html());
            if let Some(media) = &section.media {
                render_media(&mut out, media);
            }
        }
        out.push_str("</section>\n");
    }

    if let Some(function) = config.function.as_ref().filter(|m| m.enabled) {
        out.push_str("<section class=\"functions\">\n<ul>\n");
        for feature in &function.features {
            let _ = write!(
                out,
                "<li><strong>{}</strong><div>{}</div>",
                escape(&feature.name),
                feature.description.to_html()
            );
            if let Some(media) = &feature.media {
                render_media(&mut out, media);
            }
            out.push_str("</li>\n");
        }
        out.push_str("</ul>\n</section>\n");
    }

    if let Some(faq) = config.faq.as_ref().filter(|m| m.enabled) {
        out.push_str("<section class=\"faq\">\n");
        for item in &faq.items {
            let _ = write!(
                out,
                "<details>\n<summary>{}</summary>\n<div>{}</div>\n</details>\n",
                escape(&item.question),
                item.answer.to_html()
            );
        }
        out.push_str("</section>\n");
    }

    if let Some(manual) = config.manual.as_ref().filter(|m| m.enabled) {
        let label = if manual.label.is_empty() {
            "Manual"
        } else {
            &manual.label
        };
        let _ = write!(
            out,
            "<section class=\"manual\">\n<button>{}</button>\n</section>\n",
            escape(label)
        );
    }

    out.push_str("</body>\n</html>\n");
    out
}

/// Render one media item as img / video / iframe.
fn render_media(out: &mut String, item: &MediaItem) {
    match item {
        MediaItem::Image {
            src,
            transparent_background,
        } => {
            let class = if *transparent_background {
                " class=\"transparent\""
            } else {
                ""
            };
            let _ = write!(out, "<img src=\"{}\"{}>\n", escape(src), class);
        }
        MediaItem::Video {
            src,
            as_animated_gif,
        } => {
            // YouTube embeds get an iframe; everything else a video tag.
            if let MediaSource::Youtube { embed_url } = classify_source(src) {
                let _ = write!(
                    out,
                    "<iframe src=\"{}\" allowfullscreen></iframe>\n",
                    escape(&embed_url)
                );
            } else if *as_animated_gif {
                let _ = write!(
                    out,
                    "<video src=\"{}\" autoplay loop muted playsinline></video>\n",
                    escape(src)
                );
            } else {
                let _ = write!(out, "<video src=\"{}\" controls></video>\n", escape(src));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backline_config::{FaqItem, FaqModule, IntroModule, ProductInfo};

    fn config() -> ProductConfig {
        ProductConfig {
            info: ProductInfo {
                name: "iD14 MKII".into(),
                slug: "id14-mkii".into(),
                brand: "audient".into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_page_skeleton() {
        let html = render_page(&config());
        assert!(html.contains("<title>iD14 MKII</title>"));
        assert!(html.contains("<p class=\"brand\">audient</p>"));
    }

    #[test]
    fn test_disabled_module_not_rendered() {
        let mut cfg = config();
        cfg.intro = Some(IntroModule {
            enabled: false,
            heading: "**Hi**".into(),
            ..Default::default()
        });
        assert!(!render_page(&cfg).contains("class=\"intro\""));

        cfg.intro.as_mut().unwrap().enabled = true;
        let html = render_page(&cfg);
        assert!(html.contains("class=\"intro\""));
        assert!(html.contains("<strong>Hi</strong>"));
    }

    #[test]
    fn test_youtube_video_renders_iframe() {
        let mut cfg = config();
        cfg.info.hero = Some(backline_config::MediaItem::video(
            "https://www.youtube.com/embed/abc123",
        ));
        let html = render_page(&cfg);
        assert!(html.contains("<iframe src=\"https://www.youtube.com/embed/abc123\""));
    }

    #[test]
    fn test_faq_renders_details() {
        let mut cfg = config();
        cfg.faq = Some(FaqModule {
            enabled: true,
            items: vec![FaqItem {
                question: "Phantom power?".into(),
                answer: "**Yes**, 48V.".into(),
            }],
        });
        let html = render_page(&cfg);
        assert!(html.contains("<summary>Phantom power?</summary>"));
        assert!(html.contains("<strong>Yes</strong>, 48V."));
    }

    #[test]
    fn test_names_are_escaped() {
        let mut cfg = config();
        cfg.info.name = "Tone <Master>".into();
        let html = render_page(&cfg);
        assert!(html.contains("Tone &lt;Master&gt;"));
    }
}
