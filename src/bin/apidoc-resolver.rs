//! API documentation resolver CLI
//!
//! Command-line interface for inspecting type references and building
//! documentation hrefs.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use apidoc_resolver::{
    bare_name, clean_path, enum_example_value, find_enum, find_operation, is_array,
    is_iso_date_time, load_service, locate_type, simplify_name, NavHref, Service, TypeKind,
    TypeSource,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "apidoc-resolver")]
#[command(about = "Resolve type references in API documentation schemas")]
#[command(version)]
struct Cli {
    /// Log resolution steps to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a type token and show where it is defined
    Describe {
        /// Type token, e.g. "[user]" or "io.acme.v1.models.address"
        type_token: String,

        /// Home service JSON file
        #[arg(long)]
        service: PathBuf,

        /// Imported service JSON file (repeatable, searched in order)
        #[arg(long = "import")]
        imports: Vec<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find an operation by resource type, method and path
    Operation {
        /// Home service JSON file
        #[arg(long)]
        service: PathBuf,

        /// Resource type
        #[arg(long = "type")]
        resource_type: String,

        /// HTTP method (case-insensitive)
        #[arg(long)]
        method: String,

        /// Operation path; non-word characters are ignored
        #[arg(long)]
        path: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a documentation href
    Href {
        #[arg(long)]
        org: Option<String>,
        #[arg(long)]
        doc: Option<String>,
        #[arg(long)]
        app: Option<String>,
        #[arg(long)]
        resource: Option<String>,
        #[arg(long)]
        method: Option<String>,
        #[arg(long)]
        path: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        field: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Describe {
            type_token,
            service,
            imports,
            json,
        } => run_describe(&type_token, &service, &imports, json),

        Commands::Operation {
            service,
            resource_type,
            method,
            path,
            json,
        } => run_operation(&service, &resource_type, &method, &path, json),

        Commands::Href {
            org,
            doc,
            app,
            resource,
            method,
            path,
            model,
            field,
        } => {
            let href = NavHref {
                organization: org,
                documentation: doc,
                application: app,
                resource,
                method,
                path,
                model,
                field,
            };
            println!("{}", href);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load(path: &Path) -> Result<Service, u8> {
    load_service(path).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })
}

fn run_describe(token: &str, service: &Path, imports: &[PathBuf], json: bool) -> Result<(), u8> {
    let service = load(service)?;
    let imports = imports
        .iter()
        .map(|path| load(path))
        .collect::<Result<Vec<_>, _>>()?;

    let Some(bare) = bare_name(token) else {
        eprintln!("Error: cannot parse type token '{}'", token);
        return Err(2);
    };
    let located = locate_type(token, &service, &imports);

    let source = located.map(|resolved| match resolved.source {
        TypeSource::Local => service.name.clone(),
        TypeSource::Import { service, .. } => service.name.clone(),
    });
    let example = match located {
        Some(resolved) if resolved.kind == TypeKind::Enum => find_enum(token, &service, &imports)
            .map(enum_example_value)
            .transpose()
            .map_err(|e| {
                eprintln!("Error: {}", e);
                e.exit_code() as u8
            })?,
        _ => None,
    };
    let display = simplify_name(bare);
    let href = NavHref::new().model(bare).build();

    if json {
        let output = serde_json::json!({
            "token": token,
            "name": bare,
            "display": display,
            "array": is_array(token),
            "iso_date_time": is_iso_date_time(token),
            "kind": located.map(|r| r.kind),
            "local": located.map(|r| r.source.is_local()),
            "source": source,
            "example": example,
            "href": href,
        });
        println!("{}", output);
    } else {
        println!("name:    {}", bare);
        println!("display: {}", display);
        println!("array:   {}", is_array(token));
        match (located, &source) {
            (Some(resolved), Some(source)) => {
                let origin = if resolved.source.is_local() {
                    "local"
                } else {
                    "import"
                };
                println!("kind:    {}", resolved.kind.as_str());
                println!("source:  {} ({})", source, origin);
            }
            _ => println!("kind:    unknown"),
        }
        if let Some(example) = example {
            println!("example: {}", example);
        }
        println!("href:    {}", href);
    }

    if located.is_some() {
        Ok(())
    } else {
        Err(1)
    }
}

fn run_operation(
    service: &Path,
    resource_type: &str,
    method: &str,
    path: &str,
    json: bool,
) -> Result<(), u8> {
    let service = load(service)?;
    let operation = find_operation(resource_type, method, path, &service).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let href = NavHref::new()
        .resource(resource_type)
        .method(operation.method.to_lowercase())
        .path(clean_path(&operation.path))
        .build();

    if json {
        let output = serde_json::json!({
            "operation": operation,
            "href": href,
        });
        println!("{}", output);
    } else {
        println!("{} {}", operation.method, operation.path);
        if let Some(description) = &operation.description {
            println!("  {}", description);
        }
        println!("href: {}", href);
    }

    Ok(())
}
