//! Centered Dioxus container whose width cap and padding are chosen from
//! enumerated tiers and emitted as Tailwind utility classes.
#![allow(non_snake_case)]

pub mod components;
pub mod libs;
pub mod state;
pub mod utils;

pub use components::{ Container, ContainerProps };
pub use libs::{ resolve_container_class, resolve_from_tokens, ContainerOptions, PaddingTier, WidthTier };

#[doc(hidden)]
pub use log;
