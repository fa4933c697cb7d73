//! Assessment scan command

use crate::snapshot;
use anyhow::Context;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;
use suiteinspect_core::RunConfig;
use suiteinspect_engine::{aggregate, InspectorRegistry, InspectorRunner, RunnerConfig};
use suiteinspect_inspectors::builtin_checks;
use suiteinspect_report::{assemble, write_report, ReportMetadata, TemplateSet};

#[derive(Args)]
pub struct ScanArgs {
    /// Run configuration file (YAML or JSON); flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Organization (tenant) name shown in the report
    #[arg(long)]
    org: Option<String>,

    /// Directory holding inspector descriptor documents
    #[arg(long)]
    inspector_dir: Option<PathBuf>,

    /// Report template document
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory for the report and sidecar files
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Snapshot directory with exported tenant state
    #[arg(long)]
    snapshot: PathBuf,

    /// Inspector ids to run (default: all discovered)
    #[arg(long, value_delimiter = ',')]
    select: Vec<String>,

    /// Run inspectors on a worker pool
    #[arg(long)]
    parallel: bool,
}

impl ScanArgs {
    /// Resolve the effective run configuration: file first, flags on top
    fn resolve(&self) -> anyhow::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => RunConfig {
                organization: String::new(),
                inspector_dir: PathBuf::from("inspectors"),
                template_path: PathBuf::new(),
                output_dir: PathBuf::from("reports"),
                selection: Vec::new(),
                parallel: false,
                query_timeout_secs: None,
            },
        };

        if let Some(org) = &self.org {
            config.organization = org.clone();
        }
        if let Some(dir) = &self.inspector_dir {
            config.inspector_dir = dir.clone();
        }
        if let Some(template) = &self.template {
            config.template_path = template.clone();
        }
        if let Some(out) = &self.out_dir {
            config.output_dir = out.clone();
        }
        if !self.select.is_empty() {
            config.selection = self.select.clone();
        }
        if self.parallel {
            config.parallel = true;
        }

        if config.organization.is_empty() {
            anyhow::bail!("an organization name is required (--org or config file)");
        }
        if config.template_path.as_os_str().is_empty() {
            anyhow::bail!("a report template is required (--template or config file)");
        }

        Ok(config)
    }
}

pub fn run(args: ScanArgs) -> anyhow::Result<()> {
    let config = args.resolve()?;

    let mut ctx = snapshot::connect(&config.organization, &args.snapshot)?;
    if let Some(secs) = config.query_timeout_secs {
        ctx = ctx.with_query_timeout(Duration::from_secs(secs));
    }

    let registry = InspectorRegistry::open(&config.inspector_dir, builtin_checks())
        .with_context(|| format!("scanning {}", config.inspector_dir.display()))?;

    let outcome = InspectorRunner::new(&registry, &ctx)
        .with_config(RunnerConfig {
            parallel: config.parallel,
        })
        .run(&config.selection);
    let run = aggregate(outcome);

    let raw_template = std::fs::read_to_string(&config.template_path)
        .with_context(|| format!("reading template {}", config.template_path.display()))?;
    let templates = TemplateSet::parse(&raw_template)?;

    let meta = ReportMetadata {
        organization: config.organization.clone(),
        executed_ids: run.summary.executed_ids.clone(),
        generated_at: Utc::now(),
    };
    let artifacts = assemble(&run.findings, &templates, &meta)?;
    let report_path = write_report(&config.output_dir, &artifacts, meta.generated_at)?;

    println!(
        "{} out of {} executed inspector modules identified possible opportunities for improvement.",
        run.summary.triggered, run.summary.executed
    );
    println!("Report written to {}", report_path.display());

    Ok(())
}
