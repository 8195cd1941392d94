use aztagpolicy::{acl_policies, ClientBuilder, Error, MatchPolicy, Result, ServiceTags};
use clap::Parser;
use log::info;
use std::fs;
use std::process;

mod cli;

/*-------------------------------------------------------------------------------------------------
  Main CLI Entry Point
-------------------------------------------------------------------------------------------------*/

fn main() {
    // Parse CLI arguments
    let args = cli::Args::parse();

    // Configure logging
    stderrlog::new()
        .module(module_path!())
        .verbosity(args.verbose.log_level_filter())
        .init()
        .unwrap();

    // Run the pipeline; each failure kind exits with its own non-zero status
    if let Err(error) = run(&args) {
        log::error!("{error}");
        process::exit(error.exit_code());
    }
}

/*-------------------------------------------------------------------------------------------------
  Pipeline
-------------------------------------------------------------------------------------------------*/

fn run(args: &cli::Args) -> Result<()> {
    let service_tags = load_service_tags(args)?;

    if args.list_tags {
        cli::output::service_tag_names(&service_tags);
        return Ok(());
    }

    let name = args
        .service_tag
        .as_deref()
        .expect("clap requires a service tag unless --list-tags is passed");

    let policy = if args.error_on_multiple_matches {
        MatchPolicy::ErrorOnAmbiguity
    } else {
        MatchPolicy::FirstMatch
    };

    let tag = service_tags.tag_by_name(name, policy)?;
    info!(
        "Matched service tag {:?} with {} address prefixes",
        tag.name,
        tag.prefixes.len()
    );

    let document = acl_policies(&tag.prefixes);
    fs::write(&args.output, &document).map_err(|source| Error::FileWrite {
        path: args.output.clone(),
        source,
    })?;

    println!("Terraform policy file generated: {}", args.output.display());

    if args.summary {
        cli::output::prefix_table(tag);
    }

    Ok(())
}

/*--------------------------------------------------------------------------------------
  Load the Service Tags Dataset
--------------------------------------------------------------------------------------*/

fn load_service_tags(args: &cli::Args) -> Result<ServiceTags> {
    match &args.dataset_file {
        Some(path) => {
            info!("Reading dataset from file: {:?}", path);
            let json = fs::read_to_string(path).map_err(|source| Error::FileRead {
                path: path.clone(),
                source,
            })?;
            ServiceTags::from_json(&json)
        }
        None => {
            let mut builder = ClientBuilder::new();
            if let Some(source_url) = &args.source_url {
                builder.source_url(source_url);
            }
            if let Some(timeout) = args.timeout {
                builder.timeout(timeout);
            }
            builder.build().get_service_tags()
        }
    }
}
