//! Tests for repository factory and configuration.

mod support;

use cpa_rust::db::repo_config::RepositoryConfig;
use cpa_rust::db::{RepositoryFactory, RepositoryType};
use support::with_scoped_env;

#[test]
fn test_repository_type_from_env_default() {
    with_scoped_env(&[("REPOSITORY_TYPE", None)], || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
    });
}

#[test]
fn test_repository_type_from_env_explicit() {
    with_scoped_env(&[("REPOSITORY_TYPE", Some("local"))], || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
    });
}

#[test]
fn test_repository_type_from_env_unknown_falls_back_to_local() {
    with_scoped_env(&[("REPOSITORY_TYPE", Some("oracle"))], || {
        assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
    });
}

#[tokio::test]
async fn test_factory_creates_usable_repository() {
    let repo = RepositoryFactory::create(RepositoryType::Local).unwrap();
    assert!(repo.health_check().await.unwrap());
    assert!(repo.fetch_customers().await.unwrap().is_empty());
}

#[test]
fn test_data_file_env_overrides_config() {
    let config = RepositoryConfig::from_toml_str(
        r#"
        [dataset]
        data_file = "from-config.json"
        "#,
    )
    .unwrap();

    with_scoped_env(&[("CPA_DATA_FILE", Some("from-env.json"))], || {
        assert_eq!(
            config.data_file().unwrap().to_str().unwrap(),
            "from-env.json"
        );
    });

    with_scoped_env(&[("CPA_DATA_FILE", None)], || {
        assert_eq!(
            config.data_file().unwrap().to_str().unwrap(),
            "from-config.json"
        );
    });
}

#[test]
fn test_empty_data_file_env_is_ignored() {
    let config = RepositoryConfig::default();

    with_scoped_env(&[("CPA_DATA_FILE", Some(""))], || {
        assert!(config.data_file().is_none());
    });
}
