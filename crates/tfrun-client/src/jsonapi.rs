//! JSON:API documents exchanged with the control plane.
//!
//! These types mirror the wire format only; they are converted into the
//! `tfrun_core` types at the edge of the client.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use tfrun_core::{Run, RunCreateOptions, RunVariable, StateVersion, Workspace};

use crate::error::ClientError;

/// Media type required by the API for requests and responses.
pub(crate) const MEDIA_TYPE: &str = "application/vnd.api+json";

/// Top-level document with a single primary resource.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Document<T> {
    pub data: T,
}

/// A resource object with loosely typed attributes.
#[derive(Debug, Deserialize)]
pub(crate) struct Resource<A> {
    pub id: String,
    pub attributes: A,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StateVersionAttributes {
    #[serde(rename = "resources-processed", default)]
    pub resources_processed: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WorkspaceAttributes {
    pub name: String,
}

/// Request body for `POST /runs`.
#[derive(Debug, Serialize)]
pub(crate) struct RunCreateData<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    attributes: RunCreateAttributes<'a>,
    relationships: RunCreateRelationships<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct RunCreateAttributes<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_destroy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_apply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    save_plan: Option<bool>,
    #[serde(skip_serializing_if = "is_empty")]
    target_addrs: &'a [String],
    #[serde(skip_serializing_if = "is_empty")]
    replace_addrs: &'a [String],
    #[serde(skip_serializing_if = "is_empty")]
    variables: &'a [RunVariable],
}

fn is_empty<T>(items: &&[T]) -> bool {
    items.is_empty()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct RunCreateRelationships<'a> {
    workspace: Relationship<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    configuration_version: Option<Relationship<'a>>,
}

#[derive(Debug, Serialize)]
struct Relationship<'a> {
    data: Identifier<'a>,
}

#[derive(Debug, Serialize)]
struct Identifier<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    id: &'a str,
}

impl<'a> RunCreateData<'a> {
    /// Build the request body. Fails when no workspace was assigned.
    pub fn from_options(options: &'a RunCreateOptions) -> Result<Self, ClientError> {
        let workspace_id = options.workspace_id.as_ref().ok_or_else(|| {
            ClientError::InvalidRequest("run options carry no workspace id".to_string())
        })?;

        Ok(Self {
            kind: "runs",
            attributes: RunCreateAttributes {
                message: options.message.as_deref(),
                is_destroy: options.is_destroy,
                auto_apply: options.auto_apply,
                plan_only: options.plan_only,
                refresh: options.refresh,
                refresh_only: options.refresh_only,
                save_plan: options.save_plan,
                target_addrs: &options.target_addrs,
                replace_addrs: &options.replace_addrs,
                variables: &options.variables,
            },
            relationships: RunCreateRelationships {
                workspace: Relationship {
                    data: Identifier {
                        kind: "workspaces",
                        id: workspace_id.as_str(),
                    },
                },
                configuration_version: options.configuration_version_id.as_deref().map(|id| {
                    Relationship {
                        data: Identifier {
                            kind: "configuration-versions",
                            id,
                        },
                    }
                }),
            },
        })
    }
}

impl TryFrom<Resource<Map<String, Value>>> for Run {
    type Error = ClientError;

    fn try_from(resource: Resource<Map<String, Value>>) -> Result<Self, Self::Error> {
        let mut attributes = resource.attributes;
        let status = match attributes.remove("status") {
            Some(Value::String(status)) => status,
            Some(other) => {
                return Err(ClientError::Serialization(format!(
                    "run {} has non-string status: {other}",
                    resource.id
                )))
            }
            None => {
                return Err(ClientError::Serialization(format!(
                    "run {} has no status attribute",
                    resource.id
                )))
            }
        };

        Ok(Run {
            id: resource.id.into(),
            status: status.into(),
            attributes,
        })
    }
}

impl From<Resource<StateVersionAttributes>> for StateVersion {
    fn from(resource: Resource<StateVersionAttributes>) -> Self {
        // Absent or null means processing has not finished yet.
        StateVersion::new(
            resource.id,
            resource.attributes.resources_processed.unwrap_or(false),
        )
    }
}

impl Resource<WorkspaceAttributes> {
    pub fn into_workspace(self, organization: &str) -> Workspace {
        Workspace::new(self.id, self.attributes.name, organization)
    }
}
