use clap::Parser;
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate Terraform ACL allow-list policies from the Azure IP Ranges service tags.", long_about = None)]
pub struct Args {
    /// Service tag name to allow (exact match, case-sensitive)
    #[arg(required_unless_present = "list_tags")]
    pub service_tag: Option<String>,

    /// Confirmation-page URL hosting the dataset download link
    #[arg(short = 'u', long = "url")]
    pub source_url: Option<String>,

    /// Read the dataset from a local JSON file instead of downloading it
    #[arg(long = "dataset-file", value_name = "PATH")]
    pub dataset_file: Option<PathBuf>,

    /// Output file path for the rendered Terraform policy document
    #[arg(short = 'o', long = "output", default_value = "main.tf")]
    pub output: PathBuf,

    /// HTTP request timeout in seconds
    #[arg(short = 't', long = "timeout", value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Fail when multiple service tags share the requested name (default: use the first)
    #[arg(long = "error-on-multiple-matches")]
    pub error_on_multiple_matches: bool,

    /// List the service tag names available in the dataset and exit
    #[arg(long = "list-tags")]
    pub list_tags: bool,

    /// Print a table of the matched address prefixes
    #[arg(long)]
    pub summary: bool,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}
