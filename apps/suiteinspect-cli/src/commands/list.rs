//! List discovered inspectors

use clap::Args;
use std::path::PathBuf;
use suiteinspect_engine::InspectorRegistry;
use suiteinspect_inspectors::builtin_checks;

#[derive(Args)]
pub struct ListArgs {
    /// Directory holding inspector descriptor documents
    #[arg(long, default_value = "inspectors")]
    inspector_dir: PathBuf,
}

pub fn run(args: ListArgs) -> anyhow::Result<()> {
    let registry = InspectorRegistry::open(&args.inspector_dir, builtin_checks())?;

    for id in registry.discover() {
        match registry.load_descriptor(id) {
            Ok(descriptor) => {
                println!(
                    "{:<26} {:<14} {}",
                    id,
                    descriptor.severity.label(),
                    descriptor.name
                )
            }
            Err(e) => println!("{id:<26} (descriptor error: {e})"),
        }
    }
    println!("{} inspectors available", registry.discover().len());

    Ok(())
}
