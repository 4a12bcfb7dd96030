use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct PageHeaderProps {
    pub title: String,
    #[props(optional)]
    pub subtitle: Option<String>,
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
      header { class: "mb-8",
        h1 { class: "text-2xl leading-tight font-bold text-slate-900", "{props.title}" }
        if let Some(subtitle) = props.subtitle {
          p { class: "text-slate-500 leading-tight text-md", "{subtitle}" }
        }
      }
    }
}
