//! Command-line interface.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::catalog::{create_gml_catalog, load_catalog_file, Catalog};
use crate::census::{category_table, Census};
use crate::dispatch::Dispatcher;
use crate::error::{Result, SchemaError};
use crate::registry::TypeDescriptor;
use crate::walk::Walker;
use crate::xml::parse_document;

/// GML switch - Inspect schema types and dispatch over GML documents.
#[derive(Parser)]
#[command(name = "gml-switch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// YAML file with additional types and element bindings
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the type hierarchy of the catalog.
    Types,

    /// Print the ancestor chain of a type.
    Chain {
        /// Type name (e.g., PointType)
        type_name: String,
    },

    /// Parse a GML document and count its nodes by category.
    Inspect {
        /// Path to the GML document
        file: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let catalog = build_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Types => {
            print!("{}", format_type_tree(&catalog)?);
            Ok(())
        }
        Commands::Chain { type_name } => chain_command(&catalog, &type_name),
        Commands::Inspect { file } => inspect_command(&catalog, &file),
    }
}

/// Build the GML catalog, extended from YAML if requested.
fn build_catalog(extension: Option<&Path>) -> Result<Catalog> {
    let mut catalog = create_gml_catalog()?;

    if let Some(path) = extension {
        load_catalog_file(&mut catalog, path)?;
    }

    Ok(catalog)
}

/// Render the catalog as an indented inheritance tree.
///
/// Each line shows the type name, its discriminant, and its bound elements.
/// Abstract types are marked with `(abstract)`.
///
/// # Errors
/// Returns `UnknownType` if the registry's parent links are inconsistent.
pub fn format_type_tree(catalog: &Catalog) -> Result<String> {
    let mut out = String::new();
    for root in catalog.registry().roots() {
        write_subtree(catalog, root, &mut out)?;
    }
    Ok(out)
}

fn write_subtree(catalog: &Catalog, descriptor: &TypeDescriptor, out: &mut String) -> Result<()> {
    let indent = "  ".repeat(descriptor.depth);
    let name = &descriptor.name;
    let discriminant = descriptor.discriminant;
    let elements = catalog.elements_of(discriminant);

    out.push_str(&format!("{indent}{name} {discriminant}"));
    if descriptor.is_abstract {
        out.push_str(" (abstract)");
    }
    if !elements.is_empty() {
        out.push_str(&format!(" <{}>", elements.join(", ")));
    }
    out.push('\n');

    for child in catalog.registry().children(discriminant)? {
        write_subtree(catalog, child, out)?;
    }
    Ok(())
}

/// Execute the chain command.
fn chain_command(catalog: &Catalog, type_name: &str) -> Result<()> {
    let registry = catalog.registry();
    let descriptor = registry
        .lookup(type_name)
        .ok_or_else(|| SchemaError::UnknownTypeName(type_name.to_string()))?;

    let chain: Vec<String> = registry
        .ancestors(descriptor.discriminant)?
        .map(|t| t.name.clone())
        .collect();

    println!("{}", style(chain.join(" -> ")).cyan());

    let table = category_table();
    let dispatcher = Dispatcher::new(registry);
    if let Some(level) = dispatcher.claimant(descriptor.discriminant, &table)? {
        println!(
            "  {} {}",
            style("Categorized at:").bold(),
            style(&level.name).green()
        );
    } else {
        println!("  {}", style("Categorized by default handler").yellow());
    }

    Ok(())
}

/// Execute the inspect command.
fn inspect_command(catalog: &Catalog, file: &Path) -> Result<()> {
    let xml = fs::read_to_string(file)?;
    let root = parse_document(&xml, catalog)?;
    let walker = Walker::new(catalog.registry());
    let census = Census::take(&walker, &root)?;

    let root_type = catalog.registry().descriptor(root.discriminant)?;
    println!(
        "{} <{}> ({})",
        style("Root:").bold(),
        root.tag,
        style(&root_type.name).cyan()
    );
    println!("{} {}", style("Nodes:").bold(), census.total);
    println!();

    println!("{}", style("By category:").bold());
    for (category, count) in &census.by_category {
        println!("  {:<18} {}", category.as_str(), count);
    }
    println!();

    println!("{}", style("By type:").bold());
    for (type_name, count) in &census.by_type {
        println!("  {:<34} {}", type_name, count);
    }

    Ok(())
}
