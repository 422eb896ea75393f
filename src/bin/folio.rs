//! folio - document transformation and patch tool

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use folio::{
    Template, apply_patch, builtin_templates, find_template, to_elements, to_paginated_styles,
    to_reflow_css,
};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Document transformation and patch tool", long_about = None)]
#[command(after_help = "EXAMPLES:
    folio css --template classic            Print reflow CSS
    folio elements --template classic ch1.html
                                            Convert a chapter to draw elements
    folio patch ch1.html --search 'teh end' --replace 'the end'
                                            Apply a suggested fix")]
struct Cli {
    /// JSON file holding a template list (defaults to the built-in set)
    #[arg(long, global = true, value_name = "FILE")]
    templates: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available template ids
    Templates,
    /// Print the reflow stylesheet for a template
    Css {
        /// Template id
        #[arg(long)]
        template: String,
    },
    /// Print the paginated style sheet for a template as JSON
    Styles {
        /// Template id
        #[arg(long)]
        template: String,
    },
    /// Convert a chapter file to paginated draw elements as JSON
    Elements {
        /// Template id
        #[arg(long)]
        template: String,

        /// Chapter content file (rich-text HTML dialect)
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
    /// Apply a suggested fix to a chapter file and print the patched content
    Patch {
        /// Chapter content file (rich-text HTML dialect)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// The excerpt to locate (tolerates markup and whitespace drift)
        #[arg(long)]
        search: String,

        /// Replacement text
        #[arg(long)]
        replace: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let templates = load_templates(cli.templates.as_deref())?;

    match cli.command {
        Command::Templates => {
            for template in &templates {
                println!("{}\t{}", template.id, template.name);
            }
        }
        Command::Css { template } => {
            let template = find_template(&templates, &template).map_err(|e| e.to_string())?;
            print!("{}", to_reflow_css(template).map_err(|e| e.to_string())?);
        }
        Command::Styles { template } => {
            let template = find_template(&templates, &template).map_err(|e| e.to_string())?;
            let styles = to_paginated_styles(template).map_err(|e| e.to_string())?;
            println!(
                "{}",
                serde_json::to_string_pretty(&styles).map_err(|e| e.to_string())?
            );
        }
        Command::Elements { template, input } => {
            let template = find_template(&templates, &template).map_err(|e| e.to_string())?;
            let styles = to_paginated_styles(template).map_err(|e| e.to_string())?;
            let content = read_file(&input)?;
            let elements = to_elements(&content, &styles);
            println!(
                "{}",
                serde_json::to_string_pretty(&elements).map_err(|e| e.to_string())?
            );
        }
        Command::Patch {
            input,
            search,
            replace,
        } => {
            let content = read_file(&input)?;
            let outcome = apply_patch(&content, &search, &replace);
            match outcome.result {
                Some(patched) => {
                    if outcome.fuzzy_match {
                        eprintln!("note: located via whitespace-normalized match");
                    }
                    print!("{patched}");
                }
                None => return Err("could not locate the target text".to_string()),
            }
        }
    }

    Ok(())
}

fn load_templates(path: Option<&Path>) -> Result<Vec<Template>, String> {
    match path {
        Some(path) => {
            let json = read_file(path)?;
            let templates: Vec<Template> = serde_json::from_str(&json)
                .map_err(|e| format!("{}: {e}", path.display()))?;
            for template in &templates {
                template.validate().map_err(|e| e.to_string())?;
            }
            Ok(templates)
        }
        None => Ok(builtin_templates()),
    }
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))
}
