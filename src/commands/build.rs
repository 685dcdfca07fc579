use crate::{
    BuildArgs,
    build::{Builder, FileOutcome, base_path_from_config, resolve_against},
    config::Config,
};

pub fn run(args: &BuildArgs) -> Result<(), anyhow::Error> {
    let (config, config_path) = Config::load_from_arg(args.config_file.as_deref())?;

    // Documents are looked up next to the config file unless told otherwise
    let base_path = base_path_from_config(&config_path);
    let source_dir = match &args.source {
        Some(source) => resolve_against(&std::env::current_dir()?, source),
        None => base_path,
    };

    let mut builder = Builder::new(config, source_dir);
    if let Some(output) = &args.output {
        builder = builder.with_output_dir(resolve_against(&std::env::current_dir()?, output));
    }

    let report = builder.build()?;

    tracing::info!(
        "{} file(s) converted successfully",
        report.converted()
    );
    tracing::info!("HTML files saved in: {}", report.output_dir.display());
    tracing::info!("Open the file: {}", report.index_path.display());

    if args.strict && !report.is_complete() {
        let missing: Vec<&str> = report
            .documents
            .iter()
            .filter(|d| !matches!(d.outcome, FileOutcome::Converted(_)))
            .map(|d| d.name.as_str())
            .chain(report.finalize_errors.iter().map(|(stage, _)| *stage))
            .collect();
        return Err(anyhow::anyhow!(
            "{} of {} document(s) converted; not converted: {}",
            report.converted(),
            report.attempted(),
            missing.join(", ")
        ));
    }

    Ok(())
}
