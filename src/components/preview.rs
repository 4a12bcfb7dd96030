use crate::components::container::Container;
use crate::components::ui::PageHeader;
use crate::libs::classes::ContainerOptions;
use crate::libs::tiers::{ PaddingTier, WidthTier };
use crate::state::config::PreviewConfig;
use crate::utils::constants::{ APP_NAME, APP_VERSION, CUSTOM_SCREENS, TAILWIND_CDN_URL };
use dioxus::prelude::*;

/// Inline Tailwind play-CDN config declaring the breakpoints past `2xl`
pub fn tailwind_config_script() -> String {
    let screens = CUSTOM_SCREENS.iter()
        .map(|(name, width)| format!("'{}': '{}'", name, width))
        .collect::<Vec<_>>()
        .join(", ");
    format!("tailwind.config = {{ theme: {{ extend: {{ screens: {{ {} }} }} }} }};", screens)
}

#[derive(Props, Clone, PartialEq)]
pub struct PreviewDocumentProps {
    pub config: PreviewConfig,
}

/// Standalone HTML document around the gallery
#[component]
pub fn PreviewDocument(props: PreviewDocumentProps) -> Element {
    let config = props.config;

    rsx! {
      html { lang: "en",
        head {
          meta { charset: "utf-8" }
          meta { name: "viewport", content: "width=device-width, initial-scale=1" }
          title { "{config.title}" }
          script { src: TAILWIND_CDN_URL }
          script { dangerous_inner_html: tailwind_config_script() }
        }
        body { class: "bg-white",
          PreviewPage { config }
        }
      }
    }
}

/// Gallery with one sample container per width tier and per padding tier
#[component]
pub fn PreviewPage(config: PreviewConfig) -> Element {
    let subtitle = format!("{} {}: {}", APP_NAME, APP_VERSION, config.defaults.class_string());

    rsx! {
      main { class: "min-h-screen py-10 space-y-12",
        Container { max_width: WidthTier::FourXl, padding: PaddingTier::Sm,
          PageHeader { title: config.title.clone(), subtitle }
        }
        if config.show_width_tiers {
          section { class: "space-y-6",
            Container { max_width: WidthTier::FourXl, padding: PaddingTier::Sm,
              h2 { class: "text-xl font-semibold", "Width tiers" }
            }
            for tier in WidthTier::all() {
              TierSample {
                key: "width-{tier}",
                label: format!("max_width: {}", tier),
                options: config.defaults.clone().with_max_width(tier),
                sample_text: config.sample_text.clone(),
                sample_class: config.sample_class.clone(),
              }
            }
          }
        }
        if config.show_padding_tiers {
          section { class: "space-y-6",
            Container { max_width: WidthTier::FourXl, padding: PaddingTier::Sm,
              h2 { class: "text-xl font-semibold", "Padding tiers" }
            }
            for tier in PaddingTier::all() {
              TierSample {
                key: "padding-{tier}",
                label: format!("padding: {}", tier),
                options: config.defaults.clone().with_padding(tier),
                sample_text: config.sample_text.clone(),
                sample_class: config.sample_class.clone(),
              }
            }
          }
        }
      }
    }
}

#[component]
fn TierSample(
    label: String,
    options: ContainerOptions,
    sample_text: String,
    sample_class: String
) -> Element {
    let class_string = options.class_string();

    rsx! {
      figure { class: "space-y-2",
        figcaption { class: "mx-auto w-full max-w-7xl px-4 font-mono text-slate-600",
          span { class: "text-sm font-semibold", "{label}" }
          code { class: "block break-all text-xs", "{class_string}" }
        }
        Container {
          max_width: options.max_width,
          padding: options.padding,
          class: options.class.clone().unwrap_or_default(),
          div { class: "{sample_class}", "{sample_text}" }
        }
      }
    }
}
