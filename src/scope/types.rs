//! Extraction request and scope types

use crate::endpoint::{self, EntityKind};
use crate::error::{Error, Result};
use crate::types::StringMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Repository value meaning "every repository of the organization"
pub const ALL_REPOSITORIES: &str = "all";

/// Which repositories a request covers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RepositoryScope {
    /// No repository given
    #[default]
    None,
    /// A single named repository
    Single(String),
    /// Every repository in the organization
    All,
    /// An explicit list, processed in the given order
    List(Vec<String>),
}

impl RepositoryScope {
    /// Build a scope from a single configured value (`"all"` or a name)
    pub fn single(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == ALL_REPOSITORIES {
            Self::All
        } else {
            Self::Single(name)
        }
    }

    /// Whether the scope names at least one repository and no blank ones
    pub fn names_repositories(&self) -> bool {
        match self {
            Self::None => false,
            Self::All => true,
            Self::Single(name) => !name.trim().is_empty(),
            Self::List(names) => {
                !names.is_empty() && names.iter().all(|name| !name.trim().is_empty())
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RepositoryValue {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for RepositoryScope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Option::<RepositoryValue>::deserialize(deserializer)?;
        Ok(match value {
            None => Self::None,
            Some(RepositoryValue::One(name)) => Self::single(name),
            Some(RepositoryValue::Many(names)) => Self::List(names),
        })
    }
}

impl Serialize for RepositoryScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::None => serializer.serialize_none(),
            Self::Single(name) => serializer.serialize_str(name),
            Self::All => serializer.serialize_str(ALL_REPOSITORIES),
            Self::List(names) => names.serialize(serializer),
        }
    }
}

/// A validated extraction request. Built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    entity_kind: EntityKind,
    organization: String,
    repository: RepositoryScope,
    extra_query_params: StringMap,
}

impl ExtractionRequest {
    /// Validate and build a request from a raw entity kind name.
    ///
    /// Fails with `UnsupportedEntityKind` before anything touches the network.
    pub fn new(
        entity_kind: &str,
        organization: impl Into<String>,
        repository: RepositoryScope,
        extra_query_params: StringMap,
    ) -> Result<Self> {
        let kind = entity_kind.parse::<EntityKind>()?;
        Self::for_kind(kind, organization, repository, extra_query_params)
    }

    /// Build a request for an already-parsed entity kind
    pub fn for_kind(
        entity_kind: EntityKind,
        organization: impl Into<String>,
        repository: RepositoryScope,
        extra_query_params: StringMap,
    ) -> Result<Self> {
        let organization = organization.into();
        if organization.trim().is_empty() {
            return Err(Error::missing_field("organization"));
        }
        if entity_kind.is_repository_scoped() && !repository.names_repositories() {
            return Err(Error::missing_field("repository"));
        }

        Ok(Self {
            entity_kind,
            organization,
            repository,
            extra_query_params,
        })
    }

    pub fn entity_kind(&self) -> EntityKind {
        self.entity_kind
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn repository(&self) -> &RepositoryScope {
        &self.repository
    }

    pub fn extra_query_params(&self) -> &StringMap {
        &self.extra_query_params
    }
}

/// One (entity kind, organization, repository) combination to extract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionUnit {
    pub entity_kind: EntityKind,
    pub organization: String,
    pub repository: Option<String>,
}

impl ExtractionUnit {
    /// Create a unit
    pub fn new(
        entity_kind: EntityKind,
        organization: impl Into<String>,
        repository: Option<String>,
    ) -> Self {
        Self {
            entity_kind,
            organization: organization.into(),
            repository,
        }
    }

    /// Resource path for this unit
    pub fn path(&self) -> Result<String> {
        endpoint::resolve(
            self.entity_kind,
            &self.organization,
            self.repository.as_deref(),
        )
    }
}

impl fmt::Display for ExtractionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repository {
            Some(repo) => write!(f, "{}:{}/{repo}", self.entity_kind, self.organization),
            None => write!(f, "{}:{}", self.entity_kind, self.organization),
        }
    }
}
