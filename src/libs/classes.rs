//! Utility class tables for the container and the helpers that merge them
//!
//! Every tier maps to a fixed list of breakpoint-scoped utility classes. The
//! lists are ordered from the smallest viewport upwards, so a later token in
//! the merged string always targets a wider breakpoint. Conflicts between the
//! tables and a caller-supplied class are left to the CSS cascade.
use serde::{ Deserialize, Serialize };

use super::tiers::{ PaddingTier, WidthTier };

/// Classes every container carries: centered, full width up to its cap
pub const BASE_CLASSES: &str = "mx-auto w-full";

/// Width cap classes for a tier
pub fn width_classes(tier: WidthTier) -> &'static [&'static str] {
    match tier {
        WidthTier::Sm => &["max-w-sm", "sm:max-w-md", "md:max-w-lg", "lg:max-w-xl"],
        WidthTier::Md => &["max-w-md", "sm:max-w-lg", "md:max-w-xl", "lg:max-w-2xl"],
        WidthTier::Lg => &["max-w-lg", "sm:max-w-xl", "md:max-w-2xl", "lg:max-w-4xl"],
        WidthTier::Xl => &["max-w-xl", "sm:max-w-2xl", "md:max-w-4xl", "lg:max-w-6xl", "xl:max-w-7xl"],
        WidthTier::TwoXl =>
            &["max-w-2xl", "sm:max-w-4xl", "md:max-w-6xl", "lg:max-w-7xl", "2xl:max-w-[1600px]"],
        WidthTier::ThreeXl =>
            &[
                "max-w-4xl",
                "md:max-w-6xl",
                "lg:max-w-7xl",
                "2xl:max-w-[1600px]",
                "3xl:max-w-[2000px]",
            ],
        WidthTier::FourXl =>
            &[
                "max-w-6xl",
                "lg:max-w-7xl",
                "2xl:max-w-[1600px]",
                "3xl:max-w-[2000px]",
                "4xl:max-w-[2400px]",
                "5xl:max-w-[3000px]",
            ],
        WidthTier::Full => &["max-w-full"],
    }
}

/// Padding classes for a tier
pub fn padding_classes(tier: PaddingTier) -> &'static [&'static str] {
    match tier {
        PaddingTier::None => &[],
        PaddingTier::Sm => &["p-2", "sm:p-3", "md:p-4"],
        PaddingTier::Md => &["p-4", "sm:p-6", "md:p-8"],
        PaddingTier::Lg => &["p-6", "sm:p-8", "md:p-10", "lg:p-12"],
        PaddingTier::Xl => &["p-8", "sm:p-10", "md:p-12", "lg:p-16", "3xl:p-20"],
    }
}

/// Join class strings with single spaces, in order.
///
/// Blank parts are skipped; every other part is copied verbatim.
pub fn merge_classes<I, S>(parts: I) -> String where I: IntoIterator<Item = S>, S: AsRef<str> {
    let mut merged = String::new();
    for part in parts {
        let part = part.as_ref();
        if part.trim().is_empty() {
            continue;
        }
        if !merged.is_empty() {
            merged.push(' ');
        }
        merged.push_str(part);
    }
    merged
}

/// Full class string for a container: base, width, padding, then the caller's class
pub fn resolve_container_class(
    max_width: WidthTier,
    padding: PaddingTier,
    class: Option<&str>
) -> String {
    let width = width_classes(max_width).join(" ");
    let padding = padding_classes(padding).join(" ");
    merge_classes([BASE_CLASSES, width.as_str(), padding.as_str(), class.unwrap_or_default()])
}

/// Resolve from raw tokens, for callers that cannot hand over typed tiers.
///
/// Missing tokens take the defaults and unknown tokens fall back to them.
pub fn resolve_from_tokens(
    max_width: Option<&str>,
    padding: Option<&str>,
    class: Option<&str>
) -> String {
    let max_width = max_width.map(WidthTier::from_token).unwrap_or_default();
    let padding = padding.map(PaddingTier::from_token).unwrap_or_default();
    resolve_container_class(max_width, padding, class)
}

/// Container options with every field present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerOptions {
    pub max_width: WidthTier,
    pub padding: PaddingTier,
    pub class: Option<String>,
}

impl ContainerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_width(mut self, max_width: WidthTier) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_padding(mut self, padding: PaddingTier) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn class_string(&self) -> String {
        resolve_container_class(self.max_width, self.padding, self.class.as_deref())
    }
}
