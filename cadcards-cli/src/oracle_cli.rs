//! Oracle CLI commands
//!
//! `lore`, `decode`, `scope` and `avatar` all exit 0 when the generative
//! service is offline or fails; the inline message is the result.

use anyhow::{anyhow, Context, Result};
use clap::Args;
use std::path::Path;

use cadcards_core::catalog::Category;
use cadcards_core::config::LibraryConfig;
use cadcards_core::directory::Department;
use cadcards_core::oracle::{AvatarResult, Oracle, OracleConfig};
use cadcards_core::source::{DirectorySource, MockCatalogSource};

/// Flags shared by the generative commands
#[derive(Args, Debug, Default)]
pub struct OracleArgs {
    /// Use this model instead of the configured one
    #[clap(long)]
    pub model: Option<String>,

    /// Log the resolved prompt but skip the API call
    #[clap(long)]
    pub dry_run: bool,
}

impl OracleArgs {
    /// Load `oracle/config.json` from the config dir, then apply the flags
    fn build(self) -> Oracle {
        let mut config = OracleConfig::load_default();
        config.dry_run |= self.dry_run;

        let mut oracle = Oracle::new(config);
        if let Some(model) = self.model {
            oracle.override_model(model);
        }
        oracle
    }
}

pub async fn lore(category: Category, args: OracleArgs) -> Result<()> {
    let oracle = args.build();
    let text = oracle.category_lore(category).await;
    println!("{} {}", category.theme().icon.glyph(), category.theme().label);
    println!("{text}");
    Ok(())
}

pub async fn decode(code: &str, args: OracleArgs) -> Result<()> {
    let oracle = args.build();
    match oracle.decode_field_code(code).await {
        None => println!("Enter a field code to decode."),
        Some(decoded) => {
            println!("{}", code.trim());
            println!("  {}", decoded.description);
            println!("  category:   {}", decoded.category);
            println!("  confidence: {}", decoded.confidence);
        }
    }
    Ok(())
}

pub async fn scope(config: &LibraryConfig, project_id: &str, args: OracleArgs) -> Result<()> {
    let source = MockCatalogSource::from_config(config);
    let projects = source.fetch_projects().await?;
    let project = projects
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(project_id.trim()))
        .ok_or_else(|| anyhow!("No project with job number '{project_id}'"))?;

    let oracle = args.build();
    let text = oracle.project_scope(project).await;
    println!("{} {}", project.id, project.name);
    println!("{text}");
    Ok(())
}

pub async fn avatar(
    description: &str,
    department: Option<Department>,
    out: &Path,
    args: OracleArgs,
) -> Result<()> {
    let oracle = args.build();
    match oracle.avatar(description, department).await {
        AvatarResult::Image(image) => {
            std::fs::write(out, &image.data)
                .with_context(|| format!("Failed to write avatar to {}", out.display()))?;
            println!(
                "Wrote {} bytes ({}) to {}",
                image.data.len(),
                image.mime_type,
                out.display()
            );
        }
        AvatarResult::Unavailable(message) => println!("{message}"),
    }
    Ok(())
}
