use crate::{
    InitArgs,
    config::{Config, DEFAULT_CONFIG_FILE},
};

pub fn run(args: &InitArgs) -> Result<(), anyhow::Error> {
    let path = if args.path.is_relative() {
        std::env::current_dir()?.join(&args.path)
    } else {
        args.path.clone()
    };

    if !path.exists() {
        if args.create {
            std::fs::create_dir_all(&path)?;
            tracing::info!("Created directory {path}", path = path.display());
        } else {
            return Err(anyhow::anyhow!(
                "Directory does not exist: {path}",
                path = path.display()
            ));
        }
    }

    let config_file = path.join(DEFAULT_CONFIG_FILE);
    if config_file.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "{} already exists (use --force to overwrite)",
            config_file.display()
        ));
    }

    tracing::info!("Initializing project in {}", path.display());

    let config_text = serde_yaml::to_string(&Config::default())?;
    std::fs::write(&config_file, config_text)?;

    tracing::info!(
        "Created config file {config_file}",
        config_file = config_file.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let args = InitArgs {
            path: dir.path().to_path_buf(),
            create: false,
            force: false,
        };

        run(&args).unwrap();

        let config = Config::load_from_file(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        let defaults = Config::default();
        assert_eq!(config.documents, defaults.documents);
        assert_eq!(config.nav, defaults.nav);
        assert_eq!(config.site.date_format, defaults.site.date_format);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "documents: []\n").unwrap();
        let args = InitArgs {
            path: dir.path().to_path_buf(),
            create: false,
            force: false,
        };

        assert!(run(&args).is_err());
    }

    #[test]
    fn test_init_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("docs");
        let args = InitArgs {
            path: target.clone(),
            create: true,
            force: false,
        };

        run(&args).unwrap();
        assert!(target.join(DEFAULT_CONFIG_FILE).exists());
    }
}
