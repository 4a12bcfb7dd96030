pub mod classes;
pub mod render;
pub mod tiers;

pub use classes::{ merge_classes, resolve_container_class, resolve_from_tokens, ContainerOptions };
pub use tiers::{ PaddingTier, WidthTier };
