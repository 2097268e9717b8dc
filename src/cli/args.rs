use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::{DEFAULT_CONTENT_TYPE, DEFAULT_GATEWAY, DEFAULT_METHOD};

#[derive(Parser, Debug)]
#[command(name = "faasctl")]
#[command(version)]
#[command(about = "Invoke and list functions on an OpenFaaS gateway", long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Invoke a function, reading the request body from STDIN
    #[command(after_help = "Examples:
  faasctl invoke echo --gateway https://domain:port
  faasctl invoke echo --gateway https://domain:port --content-type application/json
  faasctl invoke env --query repo=faas-cli --query org=openfaas
  faasctl invoke env --header X-Ping-Url=http://request.bin/etc
  faasctl invoke resize-img --async -H \"X-Callback-Url=http://gateway:8080/function/send2slack\" < image.png
  faasctl invoke flask --method GET")]
    Invoke(InvokeArgs),
    /// List the functions deployed on the gateway
    List(ListArgs),
    /// Show version information
    Version,
}

/// Where to find the gateway
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Gateway URL starting with http(s)://
    #[arg(short, long, default_value = DEFAULT_GATEWAY)]
    pub gateway: String,

    /// Deployment descriptor (stack YAML) whose provider.gateway is used
    #[arg(short = 'f', long = "yaml", value_name = "FILE")]
    pub yaml: Option<PathBuf>,

    /// Namespace of the function
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Disable TLS validation
    #[arg(long = "tls-no-verify")]
    pub tls_no_verify: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InvokeArgs {
    /// Name of the function to invoke
    #[arg(value_name = "FUNCTION_NAME")]
    pub function: Option<String>,

    /// Name of the deployed function, overrides FUNCTION_NAME
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub target: TargetArgs,

    /// The content-type HTTP header such as application/json
    #[arg(long, default_value = DEFAULT_CONTENT_TYPE)]
    pub content_type: String,

    /// Pass query-string options (key=value), repeatable
    #[arg(long, value_name = "KEY=VALUE")]
    pub query: Vec<String>,

    /// Pass HTTP request header (key=value or key:value), repeatable
    #[arg(short = 'H', long, value_name = "HEADER")]
    pub header: Vec<String>,

    /// Invoke the function asynchronously
    #[arg(short, long = "async")]
    pub async_invoke: bool,

    /// HTTP request method
    #[arg(short, long, default_value = DEFAULT_METHOD)]
    pub method: String,

    /// Request timeout in seconds, 0 for none (defaults to the configured value)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Also show the image of each function
    #[arg(long)]
    pub verbose_list: bool,

    /// Print the function list as JSON
    #[arg(long, conflicts_with = "verbose_list")]
    pub json: bool,
}
