use asset_sitemap::{generate_sitemap, DEFAULT_SITEMAP_CONFIG};
use log::error;

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    match generate_sitemap(DEFAULT_SITEMAP_CONFIG) {
        Ok(summary) => {
            println!(
                "Sitemap generated with {} URLs -> {}",
                summary.url_count,
                summary.output_file.display()
            );
        }
        Err(e) => {
            error!("Error generating sitemap: {}", e);
            #[cfg(not(feature = "logger-support"))]
            eprintln!("Error generating sitemap: {}", e);
            std::process::exit(1);
        }
    }
}
