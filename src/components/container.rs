use crate::libs::classes::resolve_container_class;
use crate::libs::tiers::{ PaddingTier, WidthTier };
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ContainerProps {
    /// Content rendered inside the container, untouched
    pub children: Element,
    /// Extra classes appended after the tier classes
    #[props(default, into)]
    pub class: String,
    /// Maximum width tier, `full` when omitted
    #[props(default)]
    pub max_width: WidthTier,
    /// Padding tier, `md` when omitted
    #[props(default)]
    pub padding: PaddingTier,
}

/// Centered wrapper whose width cap and padding come from tier tokens
#[component]
pub fn Container(props: ContainerProps) -> Element {
    let class = resolve_container_class(props.max_width, props.padding, Some(props.class.as_str()));

    rsx! {
        div { class: "{class}", {props.children} }
    }
}
