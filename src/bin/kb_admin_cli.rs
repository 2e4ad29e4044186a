//! kb-admin — 知识库管理 API 的命令行工具
//!
//! Usage:
//!   kb-admin databases                          List knowledge databases
//!   kb-admin query <db_id> <text>               Query a knowledge database
//!   kb-admin upload <path> [--db <db_id>]       Upload a file
//!   kb-admin table-data <name> [--offset N]     Page through a table

use anyhow::{anyhow, bail, Context};
use kb_admin_client::{FilePart, KnowledgeAdminClient, Page, ParamBag};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = args[1].as_str();
    match command {
        "version" | "--version" | "-V" => {
            println!("kb-admin {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        _ => {}
    }

    if let Err(e) = run(command, &args[2..]).await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"kb-admin — knowledge base admin client

USAGE:
    kb-admin <COMMAND> [OPTIONS]

COMMANDS:
    databases                           List knowledge databases
    database <db_id>                    Show one database
    document <db_id> <doc_id>           Show document info
    download <db_id> <doc_id> <out>     Save the original document file
    query <db_id> <text>                Query a database (production path)
    query-test <db_id> <text>           Query a database without usage logging
    upload <path> [--db <db_id>]        Upload a file, optionally into a database
    file-types                          List accepted file types
    types                               List knowledge base types
    stats                               Show aggregate statistics
    models [<model_id>]                 Embedding model status
    tables                              List tables of the tabular source
    table-data <name> [--offset N] [--limit N]
                                        Page through table rows (default 0/100)
    version                             Show version information
    help                                Show this help message

ENVIRONMENT:
    KB_ADMIN_BASE_URL                   Backend address (default http://127.0.0.1:5050)
    KB_ADMIN_TOKEN                      Admin bearer token
    KB_ADMIN_TIMEOUT_SECS               Request timeout (default 30)
    RUST_LOG                            Log filter (default warn)"#
    );
}

async fn run(command: &str, args: &[String]) -> anyhow::Result<()> {
    let client = KnowledgeAdminClient::from_env().context("building client")?;

    let output = match command {
        "databases" => client.databases().list().await?,
        "database" => client.databases().get(positional(args, 0, "db_id")?).await?,
        "document" => {
            client
                .documents()
                .info(positional(args, 0, "db_id")?, positional(args, 1, "doc_id")?)
                .await?
        }
        "download" => {
            let out = positional(args, 2, "out")?;
            let file = client
                .documents()
                .download(positional(args, 0, "db_id")?, positional(args, 1, "doc_id")?)
                .await?;
            tokio::fs::write(out, &file.bytes)
                .await
                .with_context(|| format!("writing {out}"))?;
            eprintln!("saved {} bytes to {out}", file.bytes.len());
            return Ok(());
        }
        "query" => {
            client
                .queries()
                .query(positional(args, 0, "db_id")?, positional(args, 1, "text")?, &ParamBag::new())
                .await?
        }
        "query-test" => {
            client
                .queries()
                .query_test(positional(args, 0, "db_id")?, positional(args, 1, "text")?, &ParamBag::new())
                .await?
        }
        "upload" => {
            let path = positional(args, 0, "path")?;
            let file = FilePart::from_path(path)
                .await
                .with_context(|| format!("reading {path}"))?;
            client.files().upload(file, flag(args, "--db")).await?
        }
        "file-types" => client.files().supported_types().await?,
        "types" => client.types().kb_types().await?,
        "stats" => client.types().statistics().await?,
        "models" => match args.first() {
            Some(model_id) => client.embedding_models().status(model_id).await?,
            None => client.embedding_models().all_status().await?,
        },
        "tables" => client.tables().list().await?,
        "table-data" => {
            let defaults = Page::default();
            let page = Page::new(
                numeric_flag(args, "--offset")?.unwrap_or(defaults.offset),
                numeric_flag(args, "--limit")?.unwrap_or(defaults.limit),
            );
            client.tables().data(positional(args, 0, "name")?, page).await?
        }
        other => {
            print_usage();
            bail!("unknown command: {other}");
        }
    };

    print_json(&output)
}

fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Positional arguments, skipping `--flag value` pairs.
fn positional<'a>(args: &'a [String], index: usize, name: &str) -> anyhow::Result<&'a str> {
    let mut rest = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg.starts_with("--") {
            iter.next();
        } else {
            rest.push(arg.as_str());
        }
    }
    rest.get(index)
        .copied()
        .ok_or_else(|| anyhow!("missing argument <{name}>"))
}

fn flag<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn numeric_flag(args: &[String], name: &str) -> anyhow::Result<Option<u64>> {
    flag(args, name)
        .map(|v| v.parse::<u64>().with_context(|| format!("{name} expects a number, got {v}")))
        .transpose()
}
