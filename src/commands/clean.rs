use crate::{
    CleanArgs,
    build::{Builder, base_path_from_config, resolve_against},
    config::Config,
};

pub fn run(args: &CleanArgs) -> Result<(), anyhow::Error> {
    let (config, config_path) = Config::load_from_arg(args.config_file.as_deref())?;

    // Resolve the output folder the same way `build` does
    let base_path = base_path_from_config(&config_path);
    let mut builder = Builder::new(config, base_path);
    if let Some(output) = &args.output {
        builder = builder.with_output_dir(resolve_against(&std::env::current_dir()?, output));
    }
    let site_path = builder.output_dir();

    if !site_path.exists() {
        tracing::info!("Nothing to clean at {}", site_path.display());
        return Ok(());
    }

    if args.dry_run {
        tracing::info!("Would delete {}", site_path.display());
    } else {
        std::fs::remove_dir_all(site_path)?;
        tracing::info!("Deleted {}", site_path.display());
    }

    Ok(())
}
