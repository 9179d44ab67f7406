//! Generation command handlers

use anyhow::{bail, Context, Result};
use unity_constants::Domain;

use super::Session;

/// Handle `all`: run every generator, report each, fail if any failed
pub fn all(session: &Session) -> Result<()> {
    let report = session.generator().generate_all();

    for (domain, outcome) in &report.outcomes {
        match outcome {
            Ok(generated) => println!(
                "  ok    {:<24} {} ({} constants)",
                domain.to_string(),
                generated.path.display(),
                generated.constants
            ),
            Err(e) => println!("  FAIL  {:<24} {}", domain.to_string(), e),
        }
    }

    let failed = report.failures().count();
    if failed > 0 {
        bail!("{} of {} generators failed", failed, report.outcomes.len());
    }

    println!("Generated {} files", report.outcomes.len());
    Ok(())
}

/// Handle `generate <domain>`
pub fn one(session: &Session, domain: Domain, dry_run: bool) -> Result<()> {
    let generator = session.generator();

    if dry_run {
        let text = generator
            .render(domain)
            .with_context(|| format!("Failed to generate {}", domain))?;
        print!("{}", text);
        return Ok(());
    }

    let generated = generator
        .generate(domain)
        .with_context(|| format!("Failed to generate {}", domain))?;
    println!(
        "Wrote {} ({} constants)",
        generated.path.display(),
        generated.constants
    );
    Ok(())
}
