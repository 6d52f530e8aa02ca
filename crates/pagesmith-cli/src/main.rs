//! `pagesmith` command line: catalog queries plus the API-backed flows.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use pagesmith_core::catalog::{ComponentInfo, TagCatalog};
use pagesmith_core::tags;
use pagesmith_gen::{Completion, ComponentProcessor, DataGenerator, TagFinder};

#[derive(Parser)]
#[command(name = "pagesmith", about = "Landing page data generation and tagging tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the tag catalog
    Search { query: String },
    /// List recommended component combinations
    List {
        #[arg(long, default_value_t = 5)]
        count: usize,
        /// Focus area: conversion, trust, awareness, or engagement
        #[arg(long)]
        focus: Option<String>,
    },
    /// Show recommended tags for a component
    Tags { component: String },
    /// Analyze a landing page component list (JSON file or inline JSON)
    Analyze { components: String },
    /// Export the tag catalog as JSON
    Export {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Select components for a landing page (API-backed, local fallback)
    Find {
        components: Vec<String>,
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
    /// Generate JSON data conforming to a schema file
    Generate {
        #[arg(long)]
        schema: PathBuf,
        #[arg(long, default_value = "")]
        prompt: String,
        #[arg(long, default_value_t = 1)]
        examples: usize,
    },
    /// Convert a React component file to TypeScript
    Convert { file: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = TagCatalog::builtin();

    match cli.command {
        Command::Search { query } => print_json(&json!(catalog.search(&query)))?,
        Command::List { count, focus } => {
            print_json(&json!(catalog.combinations(count, focus.as_deref())))?
        }
        Command::Tags { component } => print_json(&json!(catalog.lookup(&component)))?,
        Command::Analyze { components } => {
            let components = load_components(&components)?;
            print_json(&serde_json::to_value(catalog.analyze(&components))?)?
        }
        Command::Export { output } => {
            let rendered = serde_json::to_string_pretty(&export_catalog())?;
            match output {
                Some(path) => fs::write(&path, rendered)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => println!("{rendered}"),
            }
        }
        Command::Find { components, count } => {
            let finder = match Completion::from_env() {
                Ok(completion) => TagFinder::new(completion),
                Err(err) => {
                    tracing::warn!(error = %err, "no completion provider, using local catalog");
                    TagFinder::local()
                }
            };
            print_json(&json!(finder.find_tags(&components, count).await))?
        }
        Command::Generate {
            schema,
            prompt,
            examples,
        } => {
            let raw = fs::read_to_string(&schema)
                .with_context(|| format!("reading {}", schema.display()))?;
            let schema_value: Value =
                serde_json::from_str(&raw).context("schema file is not valid JSON")?;
            let schemas = match schema_value {
                Value::Array(items) => items,
                other => vec![other],
            };
            let generator = DataGenerator::new(Completion::from_env()?);
            let data = generator.generate(&schemas, &prompt, examples).await?;
            print_json(&Value::Array(data))?
        }
        Command::Convert { file } => {
            let source = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let processor = ComponentProcessor::new(Completion::from_env()?);
            let processed = processor.process(&source, &file.to_string_lossy()).await?;
            print_json(&serde_json::to_value(&processed)?)?
        }
    }

    Ok(())
}

/// Components come either as inline JSON or as a path to a JSON file.
fn load_components(input: &str) -> anyhow::Result<Vec<ComponentInfo>> {
    if let Ok(components) = serde_json::from_str(input) {
        return Ok(components);
    }
    let raw = fs::read_to_string(input)
        .with_context(|| format!("components must be inline JSON or a readable file: {input}"))?;
    serde_json::from_str(&raw).context("component file is not a JSON list")
}

fn export_catalog() -> Value {
    let categories: serde_json::Map<String, Value> = tags::CATEGORIES
        .iter()
        .map(|(name, category_tags)| ((*name).to_string(), json!(category_tags)))
        .collect();
    let components: serde_json::Map<String, Value> = tags::COMPONENT_TAGS
        .iter()
        .map(|c| {
            (
                c.name.to_string(),
                json!({ "primary": c.primary, "recommended": c.recommended }),
            )
        })
        .collect();
    json!({ "categories": categories, "components": components })
}

fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
