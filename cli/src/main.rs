//! unhtml CLI - HTML table and list extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use unhtml::{
    render, ExtractedObject, HtmlDocument, InferenceContext, JsonFormat, ObjectKind, ObjectModel,
    ScanOptions,
};

#[derive(Parser)]
#[command(name = "unhtml")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract tables, lists, and definition lists from HTML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the objects found in a document
    #[command(alias = "ls")]
    List {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Include layout tables (cellspacing="0" cellpadding="0")
        #[arg(long)]
        layout_tables: bool,
    },

    /// Show one object by name
    Show {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Object name
        #[arg(value_name = "NAME")]
        name: String,

        /// Treat the first table row as headers
        #[arg(long)]
        headers: bool,

        /// Show only this group of a definition list
        #[arg(long, value_name = "N")]
        index: Option<usize>,
    },

    /// Convert all objects to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include layout tables
        #[arg(long)]
        layout_tables: bool,
    },

    /// Convert all objects to JSON
    Json {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Infer table headers, units, and column types
        #[arg(long)]
        infer: bool,

        /// Include layout tables
        #[arg(long)]
        layout_tables: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List {
            input,
            layout_tables,
        } => cmd_list(&input, layout_tables),
        Commands::Show {
            input,
            name,
            headers,
            index,
        } => cmd_show(&input, &name, headers, index),
        Commands::Markdown {
            input,
            output,
            layout_tables,
        } => cmd_markdown(&input, output.as_deref(), layout_tables),
        Commands::Json {
            input,
            output,
            compact,
            infer,
            layout_tables,
        } => cmd_json(&input, output.as_deref(), compact, infer, layout_tables),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn scan_options(layout_tables: bool) -> ScanOptions {
    ScanOptions::new().with_layout_tables(layout_tables)
}

fn cmd_list(input: &Path, layout_tables: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = HtmlDocument::from_file(input)?;
    let objects = doc.objects_with(&scan_options(layout_tables));

    if objects.is_empty() {
        println!("{}", "No tables or lists found".yellow());
        return Ok(());
    }

    for object in objects.iter() {
        println!(
            "{:<16} {}  {}",
            object.kind().to_string().cyan(),
            object.name().bold(),
            describe_size(object).dimmed()
        );
    }

    Ok(())
}

fn describe_size(object: &ExtractedObject<'_>) -> String {
    match object {
        ExtractedObject::Table(t) => format!("{}x{}", t.row_count(), t.column_count()),
        ExtractedObject::List(l) => format!("{} values", l.len()),
        ExtractedObject::DefinitionList(d) => format!("{} groups", d.len()),
    }
}

fn cmd_show(
    input: &Path,
    name: &str,
    headers: bool,
    index: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = HtmlDocument::from_file(input)?;
    let objects = doc.objects();
    print!("{}", show_object(&objects, name, headers, index)?);
    Ok(())
}

/// Render one object through the typed accessors.
fn show_object(
    objects: &ObjectModel<'_>,
    name: &str,
    headers: bool,
    index: Option<usize>,
) -> unhtml::Result<String> {
    let mut output = String::new();

    match (objects.get(name)?.kind(), index) {
        (ObjectKind::Table, _) => {
            let table = objects.get_table(name, headers, |row| row.join(" | "))?;
            if let Some(headers) = &table.headers {
                output.push_str(&format!("| {} |\n", headers.join(" | ")));
                output.push_str(&format!("|{}\n", " --- |".repeat(headers.len())));
            }
            for row in &table.rows {
                output.push_str(&format!("| {} |\n", row));
            }
        }
        (ObjectKind::List, _) => {
            for value in objects.get_list(name, str::to_string)?.values {
                output.push_str(&format!("- {}\n", value));
            }
        }
        (ObjectKind::DefinitionList, Some(index)) => {
            for value in objects.get_nested_list(name, index, str::to_string)?.values {
                output.push_str(&format!("- {}\n", value));
            }
        }
        (ObjectKind::DefinitionList, None) => {
            output.push_str(&render::render_object(objects.get(name)?));
        }
    }

    Ok(output)
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    layout_tables: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = HtmlDocument::from_file(input)?;
    let objects = doc.objects_with(&scan_options(layout_tables));
    let markdown = render::to_markdown(objects.as_slice());

    write_output(output, &markdown)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    infer: bool,
    layout_tables: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("json: {} (inference: {})", input.display(), infer);
    let doc = HtmlDocument::from_file(input)?;
    let options = scan_options(layout_tables);

    let context = InferenceContext::default();
    let objects = if infer {
        doc.objects_with_inference(&options, &context)
    } else {
        doc.objects_with(&options)
    };

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(objects.as_slice(), format)?;
    write_output(output, &json)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unhtml".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("HTML table and list extraction tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unhtml".dimmed());
    println!("License: MIT");
}
