use clap::Parser;
use std::process::ExitCode;
use tierbox::libs::render::render_preview_document;
use tierbox::resolve_from_tokens;
use tierbox::state::config::PreviewConfig;
use tierbox::utils::args::CliArgs;
use tierbox::utils::constants::{ APP_NAME, APP_VERSION };
use tierbox::utils::{ data, logger };
use tierbox::{ always_eprint, always_print, debug_print };

fn main() -> ExitCode {
    let cli = CliArgs::parse();

    logger::init_debug_logging(cli.verbose);
    debug_print!("🚀 {} {} ({:?})", APP_NAME, APP_VERSION, cli);

    if cli.resolve {
        let class = resolve_from_tokens(
            cli.max_width.as_deref(),
            cli.padding.as_deref(),
            cli.class.as_deref()
        );
        always_print!("{}", class);
        return ExitCode::SUCCESS;
    }

    let config = match &cli.config {
        Some(path) => PreviewConfig::load_from(path),
        None => PreviewConfig::load(),
    };
    let html = render_preview_document(&config);

    match cli.out.or(config.output) {
        Some(path) => {
            if let Err(e) = data::write_text_file(&html, &path) {
                always_eprint!("❌ {}", e);
                return ExitCode::FAILURE;
            }
            debug_print!("✅ Wrote preview to {}", path.display());
        }
        None => always_print!("{}", html),
    }
    ExitCode::SUCCESS
}
