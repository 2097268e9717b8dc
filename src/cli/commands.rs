use anyhow::{Context, Result};
use colored::Colorize;
use std::fmt::Write as _;
use std::io::{IsTerminal, Read, Write};

use crate::{
    app::Config,
    constants::{DEFAULT_GATEWAY, OPENFAAS_URL_ENV},
    gateway::{descriptor_gateway, resolve_gateway_url, GatewaySources},
    proxy::{
        build_invoke_request, build_list_request, invoke_function, list_functions, make_client,
        timeout_from_secs, ConfigAuth, Function, InvocationRequest, ReqwestTransport,
    },
    utils::{FaasError, FaasResult},
};

use super::{Commands, InvokeArgs, ListArgs, TargetArgs};

/// Everything a command needs besides its own arguments
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub config: Config,
    /// Value of `OPENFAAS_URL`, if set
    pub environment_gateway: Option<String>,
}

impl CommandContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            environment_gateway: std::env::var(OPENFAAS_URL_ENV).ok(),
        }
    }
}

/// Handle CLI subcommands
pub async fn handle_command(command: Commands, ctx: &CommandContext) -> Result<()> {
    match command {
        Commands::Invoke(args) => invoke(args, ctx).await,
        Commands::List(args) => list(args, ctx).await,
        Commands::Version => {
            show_version();
            Ok(())
        }
    }
}

/// Invoke a function with the body read from STDIN
pub async fn invoke(args: InvokeArgs, ctx: &CommandContext) -> Result<()> {
    // Fail on a missing name before touching stdin or the network
    function_name(&args)?;
    let gateway = resolve_target(&args.target, ctx)?;

    let timeout = timeout_from_secs(args.timeout.unwrap_or(ctx.config.http.invoke_timeout_secs));
    let body = read_stdin()?;
    let invocation = to_invocation(args, body)?;

    let client = make_client(timeout, invocation.tls_insecure)?;
    let auth = ConfigAuth::from_config(&ctx.config);

    let async_invoke = invocation.async_invoke;
    let request = build_invoke_request(&gateway, invocation, &auth)?;
    let transport = ReqwestTransport::new(client);

    if let Some(output) = invoke_function(&transport, request, async_invoke, &gateway).await? {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&output)?;
        stdout.flush()?;
    }

    Ok(())
}

/// List deployed functions
pub async fn list(args: ListArgs, ctx: &CommandContext) -> Result<()> {
    let gateway = resolve_target(&args.target, ctx)?;

    let timeout = timeout_from_secs(ctx.config.http.list_timeout_secs);
    let client = make_client(timeout, args.target.tls_no_verify)?;
    let auth = ConfigAuth::from_config(&ctx.config);

    let request = build_list_request(&gateway, args.target.namespace.as_deref(), &auth)?;
    let transport = ReqwestTransport::new(client);
    let functions = list_functions(&transport, request, &gateway).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&functions)?);
    } else {
        print!("{}", render_function_table(&functions, args.verbose_list));
    }
    Ok(())
}

/// Pick the gateway for a command from the flag, descriptor and environment
pub fn resolve_target(target: &TargetArgs, ctx: &CommandContext) -> FaasResult<String> {
    let descriptor_value = match &target.yaml {
        Some(path) => descriptor_gateway(path)?,
        None => None,
    };

    Ok(resolve_gateway_url(&GatewaySources {
        explicit_flag: Some(target.gateway.clone()),
        default_value: DEFAULT_GATEWAY.to_string(),
        descriptor_value,
        environment_value: ctx.environment_gateway.clone(),
    }))
}

/// Turn parsed `invoke` arguments and a body into an invocation
pub fn to_invocation(args: InvokeArgs, body: Vec<u8>) -> FaasResult<InvocationRequest> {
    Ok(InvocationRequest {
        function_name: function_name(&args)?,
        namespace: args.target.namespace,
        content_type: args.content_type,
        query: args.query,
        headers: args.header,
        async_invoke: args.async_invoke,
        method: args.method,
        body,
        tls_insecure: args.target.tls_no_verify,
    })
}

fn function_name(args: &InvokeArgs) -> FaasResult<String> {
    args.name
        .as_deref()
        .or(args.function.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| FaasError::Usage("please provide a name for the function".to_string()))
}

fn read_stdin() -> Result<Vec<u8>> {
    let mut stdin = std::io::stdin().lock();
    if stdin.is_terminal() {
        eprintln!("Reading from STDIN - hit (Control + D) to stop.");
    }

    let mut input = Vec::new();
    stdin
        .read_to_end(&mut input)
        .context("unable to read standard input")?;
    Ok(input)
}

/// Render functions as the aligned table printed by `list`
pub fn render_function_table(functions: &[Function], verbose: bool) -> String {
    let mut out = String::new();

    let header = if verbose {
        format!(
            "{:<30}\t{:<30}\t{:<15}\t{:<5}",
            "Function", "Image", "Invocations", "Replicas"
        )
    } else {
        format!("{:<30}\t{:<15}\t{:<5}", "Function", "Invocations", "Replicas")
    };
    let _ = writeln!(out, "{}", header.bold());

    for function in functions {
        let invocations = format!("{}", function.invocation_count as u64);
        let _ = if verbose {
            writeln!(
                out,
                "{:<30}\t{:<30}\t{:<15}\t{:<5}",
                function.name, function.image, invocations, function.replicas
            )
        } else {
            writeln!(
                out,
                "{:<30}\t{:<15}\t{:<5}",
                function.name, invocations, function.replicas
            )
        };
    }

    out
}

/// Show version information
pub fn show_version() {
    println!("faasctl v{}", env!("CARGO_PKG_VERSION"));
    println!("   Invoke and list functions on an OpenFaaS gateway");
}
