//! Server-side rendering of containers and the preview document
use crate::components::container::{ Container, ContainerProps };
use crate::components::preview::{ PreviewDocument, PreviewDocumentProps };
use crate::libs::classes::ContainerOptions;
use crate::state::config::PreviewConfig;
use crate::debug_print;
use dioxus::prelude::*;

/// Render a single container around `children` to an HTML fragment
pub fn render_container(options: &ContainerOptions, children: Element) -> String {
    let props = ContainerProps {
        children,
        class: options.class.clone().unwrap_or_default(),
        max_width: options.max_width,
        padding: options.padding,
    };
    let mut dom = VirtualDom::new_with_props(Container, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render the full tier gallery as a standalone HTML document
pub fn render_preview_document(config: &PreviewConfig) -> String {
    let props = PreviewDocumentProps { config: config.clone() };
    let mut dom = VirtualDom::new_with_props(PreviewDocument, props);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    debug_print!("🖨️ Rendered preview document ({} bytes)", html.len());
    format!("<!DOCTYPE html>\n{}\n", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::classes::{ padding_classes, width_classes };
    use crate::libs::tiers::{ PaddingTier, WidthTier };

    #[test]
    fn container_renders_merged_class_and_children() {
        let options = ContainerOptions::new()
            .with_max_width(WidthTier::Lg)
            .with_padding(PaddingTier::Sm)
            .with_class("border");
        let rendered = render_container(&options, rsx! { span { "hello" } });

        assert!(
            rendered.starts_with(
                "<div class=\"mx-auto w-full max-w-lg sm:max-w-xl md:max-w-2xl lg:max-w-4xl p-2 sm:p-3 md:p-4 border\""
            ),
            "{rendered}"
        );
        assert!(rendered.contains("<span>hello</span>"));
        assert!(rendered.ends_with("</div>"));
    }

    #[test]
    fn container_defaults_apply_when_props_are_omitted() {
        let rendered = render_container(&ContainerOptions::default(), rsx! { "plain text" });
        assert!(rendered.contains("class=\"mx-auto w-full max-w-full p-4 sm:p-6 md:p-8\""));
        assert!(rendered.contains("plain text"));
    }

    #[test]
    fn nested_children_are_not_rewrapped() {
        let rendered = render_container(
            &ContainerOptions::new().with_padding(PaddingTier::None),
            rsx! {
                ul {
                    li { "one" }
                    li { "two" }
                }
            }
        );
        assert!(rendered.contains("<ul><li>one</li><li>two</li></ul>"));
        assert_eq!(rendered.matches("<div").count(), 1);
    }

    #[test]
    fn container_rendering_is_idempotent() {
        let options = ContainerOptions::new().with_max_width(WidthTier::ThreeXl).with_class("shadow");
        let first = render_container(&options, rsx! { p { "same" } });
        let second = render_container(&options, rsx! { p { "same" } });
        assert_eq!(first, second);
    }

    #[test]
    fn preview_document_shows_every_tier() {
        let config = PreviewConfig::default();
        let html = render_preview_document(&config);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("https://cdn.tailwindcss.com"));
        assert!(html.contains("'3xl': '1920px'"));
        assert!(html.contains("Width tiers"));
        assert!(html.contains("Padding tiers"));
        for tier in WidthTier::all() {
            assert!(html.contains(&format!("max_width: {}", tier)));
            assert!(html.contains(&width_classes(tier).join(" ")));
        }
        for tier in PaddingTier::all() {
            assert!(html.contains(&format!("padding: {}", tier)));
            assert!(html.contains(&padding_classes(tier).join(" ")));
        }
    }

    #[test]
    fn preview_sections_can_be_hidden() {
        let config = PreviewConfig {
            show_padding_tiers: false,
            ..PreviewConfig::default()
        };
        let html = render_preview_document(&config);
        assert!(html.contains("Width tiers"));
        assert!(!html.contains("Padding tiers"));
    }
}
