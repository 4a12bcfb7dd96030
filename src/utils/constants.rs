//! Application constants used throughout the application

/// The display name of the application
pub const APP_NAME: &str = "tierbox";

/// Qualifier used to locate the platform config directory
pub const APP_QUALIFIER: &str = "dev";

/// Organization used to locate the platform config directory
pub const APP_ORGANIZATION: &str = "tierbox";

/// Version of the application (should match Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name of the preview configuration
pub const PREVIEW_CONFIG_FILE: &str = "preview.json";

/// Tailwind play CDN used by the preview document
pub const TAILWIND_CDN_URL: &str = "https://cdn.tailwindcss.com";

/// Custom breakpoints the class tables refer to beyond Tailwind's defaults
pub const CUSTOM_SCREENS: [(&str, &str); 3] = [
    ("3xl", "1920px"),
    ("4xl", "2560px"),
    ("5xl", "3200px"),
];
