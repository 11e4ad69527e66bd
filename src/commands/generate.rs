//! Generate static files

use anyhow::Result;
use std::time::Instant;

use crate::content::loader::ContentLoader;
use crate::generator::{BuildReport, Generator};
use crate::Site;

/// Load every post, then render and write the whole site
pub fn run(site: &Site) -> Result<BuildReport> {
    let start = Instant::now();

    // Reject bad pagination settings before touching the content
    let generator = Generator::new(site)?;

    let store = ContentLoader::new(site).load_store()?;
    tracing::info!("Loaded {} posts", store.len());

    let report = generator.generate(&store)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} pages in {:.2}s",
        report.total(),
        duration.as_secs_f64()
    );

    Ok(report)
}
