//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, RunArgs};
use crate::config::RunConfig;
use crate::endpoint::{self, EntityKind};
use crate::engine::Extractor;
use crate::error::Result;
use crate::http::HttpClient;
use crate::output::{CloudSink, DestinationKind};
use crate::scope::RepositoryScope;
use crate::template::{self, TemplateContext};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Run(args) => self.run_extraction(args).await,
            Commands::Resolve {
                entity_kind,
                organization,
                repository,
            } => self.resolve(entity_kind, organization, repository.as_deref()),
            Commands::Kinds => self.kinds(),
        }
    }

    /// Extract, serialize and upload one snapshot
    async fn run_extraction(&self, args: &RunArgs) -> Result<()> {
        let mut config = RunConfig::from_file(&args.config)?;
        apply_overrides(&mut config, args);

        let request = config.to_request()?;
        let ctx =
            TemplateContext::for_run(request.entity_kind(), request.organization(), Utc::now());
        let key = template::render(&config.destination.key, &ctx)?;

        let sink = match &args.output_dir {
            Some(dir) => {
                CloudSink::for_destination(DestinationKind::Local, &dir.to_string_lossy(), None)?
            }
            None => CloudSink::for_destination(
                config.destination.kind,
                &config.destination.bucket,
                config.destination.endpoint.as_deref(),
            )?,
        };

        let client = HttpClient::with_auth(config.http_config(), config.auth_config()?)?;
        let extractor = Extractor::new(client).with_config(config.extract_config());

        info!(
            destination = %config.destination.kind,
            connection = config.destination.connection.as_deref().unwrap_or("default"),
            bucket = %config.destination.bucket,
            key = %key,
            "Uploading snapshot"
        );

        let summary = extractor.run(&request, &sink, &key).await?;

        self.output_message(&json!({
            "type": "SUMMARY",
            "entity_kind": request.entity_kind(),
            "organization": request.organization(),
            "location": summary.location,
            "bytes": summary.bytes,
            "records": summary.stats.records,
            "units": summary.stats.units,
            "skipped_units": summary.stats.skipped_units,
            "duration_ms": summary.stats.duration_ms,
        }));

        Ok(())
    }

    /// Print the resolved path
    fn resolve(
        &self,
        entity_kind: &str,
        organization: &str,
        repository: Option<&str>,
    ) -> Result<()> {
        let kind: EntityKind = entity_kind.parse()?;
        let path = endpoint::resolve(kind, organization, repository)?;

        self.output_message(&json!({
            "type": "PATH",
            "entity_kind": kind,
            "path": path,
        }));

        Ok(())
    }

    /// Print supported entity kinds
    fn kinds(&self) -> Result<()> {
        let kinds: Vec<Value> = EntityKind::ALL
            .iter()
            .map(|kind| {
                json!({
                    "name": kind.as_str(),
                    "repository_scoped": kind.is_repository_scoped(),
                })
            })
            .collect();

        self.output_message(&json!({
            "type": "KINDS",
            "kinds": kinds,
        }));

        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Apply command-line overrides on top of the loaded config
fn apply_overrides(config: &mut RunConfig, args: &RunArgs) {
    if let Some(kind) = &args.entity_kind {
        config.entity_kind.clone_from(kind);
    }
    if let Some(org) = &args.organization {
        config.organization.clone_from(org);
    }
    if let Some(repos) = &args.repository {
        config.repository = match repos.as_slice() {
            [] => RepositoryScope::None,
            [one] => RepositoryScope::single(one.clone()),
            many => RepositoryScope::List(many.to_vec()),
        };
    }
    if let Some(key) = &args.key {
        config.destination.key.clone_from(key);
    }
}

impl std::fmt::Debug for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner").field("cli", &self.cli).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn base_config() -> RunConfig {
        RunConfig::from_yaml_str(
            r#"
entity_kind: commits
organization: acme
repository: api
destination: {bucket: lake, key: "c/{{ ds }}.json"}
"#,
        )
        .unwrap()
    }

    fn args() -> RunArgs {
        RunArgs {
            config: PathBuf::from("run.yaml"),
            entity_kind: None,
            organization: None,
            repository: None,
            key: None,
            output_dir: None,
        }
    }

    #[test]
    fn test_no_overrides() {
        let mut config = base_config();
        apply_overrides(&mut config, &args());

        assert_eq!(config.entity_kind, "commits");
        assert_eq!(config.repository, RepositoryScope::Single("api".into()));
    }

    #[test]
    fn test_overrides() {
        let mut config = base_config();
        let args = RunArgs {
            entity_kind: Some("issues".into()),
            organization: Some("octo".into()),
            repository: Some(vec!["all".into()]),
            key: Some("i.json".into()),
            ..args()
        };

        apply_overrides(&mut config, &args);

        assert_eq!(config.entity_kind, "issues");
        assert_eq!(config.organization, "octo");
        assert_eq!(config.repository, RepositoryScope::All);
        assert_eq!(config.destination.key, "i.json");
    }

    #[test]
    fn test_repository_list_override() {
        let mut config = base_config();
        let args = RunArgs {
            repository: Some(vec!["b".into(), "a".into()]),
            ..args()
        };

        apply_overrides(&mut config, &args);

        assert_eq!(
            config.repository,
            RepositoryScope::List(vec!["b".into(), "a".into()])
        );
    }
}
