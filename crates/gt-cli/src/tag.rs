// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use std::io::Write;

use anyhow::Context;
use clap::{Args, Subcommand};
use gt_api_contract::{Committer, GitTag, NewTag, TaggedType};
use gt_client_api::{RepositoryRef, TagsApi};

/// Repository selection shared by the tag commands
#[derive(Args, Clone, Debug)]
#[group(required = true, multiple = false)]
pub struct RepositoryArgs {
    /// Repository as OWNER/NAME
    #[arg(long, value_name = "OWNER/NAME")]
    pub repo: Option<String>,
    /// Numeric repository id
    #[arg(long = "repo-id", value_name = "ID")]
    pub repo_id: Option<u64>,
}

impl RepositoryArgs {
    pub fn repository(&self) -> anyhow::Result<RepositoryRef> {
        match (&self.repo, self.repo_id) {
            (_, Some(id)) => Ok(RepositoryRef::by_id(id)),
            (Some(repo), None) => {
                let repository: RepositoryRef = repo.parse()?;
                match repository {
                    RepositoryRef::Name { .. } => Ok(repository),
                    RepositoryRef::Id(_) => {
                        anyhow::bail!("--repo expects OWNER/NAME, got '{}'; use --repo-id for ids", repo)
                    }
                }
            }
            (None, None) => anyhow::bail!("either --repo or --repo-id is required"),
        }
    }
}

#[derive(Args, Clone, Debug)]
pub struct TagGetArgs {
    #[command(flatten)]
    pub repository: RepositoryArgs,
    /// SHA of the tag object
    #[arg(value_name = "SHA")]
    pub reference: String,
}

#[derive(Args, Clone, Debug)]
pub struct TagCreateArgs {
    #[command(flatten)]
    pub repository: RepositoryArgs,
    /// Tag label, e.g. v1.0.0
    #[arg(long, value_name = "LABEL")]
    pub tag: String,
    /// SHA of the object being tagged
    #[arg(long, value_name = "SHA")]
    pub object: String,
    /// Tag message
    #[arg(long, short = 'm', default_value = "")]
    pub message: String,
    /// Kind of the tagged object
    #[arg(long = "type", value_name = "TYPE", default_value = "commit", value_parser = parse_tagged_type)]
    pub object_type: TaggedType,
    #[arg(long, value_name = "NAME", requires = "tagger_email")]
    pub tagger_name: Option<String>,
    #[arg(long, value_name = "EMAIL", requires = "tagger_name")]
    pub tagger_email: Option<String>,
}

impl TagCreateArgs {
    /// Request body; the tagger, when given, is stamped with the current time
    pub fn new_tag(&self) -> NewTag {
        let tagger = match (&self.tagger_name, &self.tagger_email) {
            (Some(name), Some(email)) => Some(Committer {
                name: name.clone(),
                email: email.clone(),
                date: chrono::Utc::now(),
            }),
            _ => None,
        };

        NewTag {
            tag: self.tag.clone(),
            message: self.message.clone(),
            object: self.object.clone(),
            object_type: self.object_type,
            tagger,
        }
    }
}

fn parse_tagged_type(value: &str) -> Result<TaggedType, String> {
    value.parse().map_err(|e: gt_api_contract::ApiContractError| e.to_string())
}

#[derive(Subcommand, Clone, Debug)]
pub enum TagCommands {
    /// Fetch a tag object by SHA
    Get(TagGetArgs),
    /// Create an annotated tag object
    ///
    /// Only the tag object is created; point a reference at it separately.
    Create(TagCreateArgs),
}

impl TagCommands {
    /// Run against any tags implementation and print the resulting tag as JSON
    pub async fn run<A, W>(self, api: &A, out: &mut W) -> anyhow::Result<()>
    where
        A: TagsApi + ?Sized,
        W: Write,
    {
        let tag = match self {
            TagCommands::Get(args) => {
                let repository = args.repository.repository()?;
                tracing::info!(%repository, reference = %args.reference, "fetching tag");
                api.get(&repository, &args.reference)
                    .await
                    .with_context(|| format!("failed to fetch tag {} from {}", args.reference, repository))?
            }
            TagCommands::Create(args) => {
                let repository = args.repository.repository()?;
                let new_tag = args.new_tag();
                tracing::info!(%repository, tag = %new_tag.tag, object = %new_tag.object, "creating tag");
                api.create(&repository, &new_tag)
                    .await
                    .with_context(|| format!("failed to create tag {} in {}", new_tag.tag, repository))?
            }
        };

        print_tag(&tag, out)
    }
}

fn print_tag<W: Write>(tag: &GitTag, out: &mut W) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(tag)?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}
