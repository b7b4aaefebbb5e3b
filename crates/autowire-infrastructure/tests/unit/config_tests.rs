//! Tests for configuration loading
//!
//! Each test runs inside a `figment::Jail`, which isolates the working
//! directory and environment variables.

use autowire_domain::{MissingMethodPolicy, RegistryPrecedence};
use autowire_infrastructure::{AutowireConfig, ConfigLoader};
use figment::Jail;

fn load(loader: &ConfigLoader) -> Result<AutowireConfig, figment::Error> {
    loader.load().map_err(|err| err.to_string().into())
}

#[test]
fn test_defaults() {
    Jail::expect_with(|_jail| {
        let config = load(&ConfigLoader::new())?;
        assert_eq!(config.resolver.constructor_member, "new");
        assert_eq!(config.resolver.on_missing_method, MissingMethodPolicy::Fail);
        assert_eq!(
            config.resolver.on_missing_constructor,
            MissingMethodPolicy::TreatAsNoParameters
        );
        assert_eq!(config.resolver.registry_precedence, RegistryPrecedence::BaseFirst);
        assert_eq!(config.logging.level, "info");
        Ok(())
    });
}

#[test]
fn test_toml_file_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "autowire.toml",
            r#"
                [resolver]
                constructor_member = "create"
                registry_precedence = "extras_first"

                [logging]
                level = "debug"
            "#,
        )?;

        let config = load(&ConfigLoader::new())?;
        assert_eq!(config.resolver.constructor_member, "create");
        assert_eq!(config.resolver.registry_precedence, RegistryPrecedence::ExtrasFirst);
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[resolver]\non_missing_method = \"fail\"\n")?;
        jail.set_env("AUTOWIRE__RESOLVER__ON_MISSING_METHOD", "treat_as_no_parameters");

        let config = load(&ConfigLoader::new().with_config_path("custom.toml"))?;
        assert_eq!(
            config.resolver.on_missing_method,
            MissingMethodPolicy::TreatAsNoParameters
        );
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let config = load(&ConfigLoader::new().with_config_path("absent.toml"))?;
        assert_eq!(config, AutowireConfig::default());
        Ok(())
    });
}

#[test]
fn test_invalid_values_are_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("AUTOWIRE__RESOLVER__CONSTRUCTOR_MEMBER", " ");
        assert!(ConfigLoader::new().load().is_err());

        jail.set_env("AUTOWIRE__RESOLVER__CONSTRUCTOR_MEMBER", "new");
        jail.set_env("AUTOWIRE__LOGGING__LEVEL", "chatty");
        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("saved.toml");

    let mut config = AutowireConfig::default();
    config.resolver.constructor_member = "build".to_string();
    config.resolver.on_missing_method = MissingMethodPolicy::TreatAsNoParameters;

    let loader = ConfigLoader::new()
        .with_env_prefix("AUTOWIRE_SAVE_TEST")
        .with_config_path(&path);
    loader.save_to_file(&config, &path).expect("save");

    let reloaded = loader.load().expect("reload");
    assert_eq!(reloaded.resolver, config.resolver);
}
