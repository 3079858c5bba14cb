//! A small operator-facing tool for exercising a list against
//! [`kvlist_store::InMemoryStore`].
//!
//! This workspace has no server process of its own — the real KV store
//! is an external system reached through [`kvlist_store::KvStore`], not
//! a wire protocol this crate serves. `kvlist-cli` is a command-line
//! entry point for driving the in-memory reference store interactively.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use kvlist_client::PagedListClient;
use kvlist_core::config::Configuration;
use kvlist_core::types::Value;
use kvlist_store::InMemoryStore;

#[derive(Parser)]
#[command(name = "kvlist", about = "Exercise a paged list against an in-memory store")]
struct Cli {
    /// Maximum number of elements per page before rollover
    #[arg(long, default_value_t = 50)]
    max_element_per_page: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a scripted demo: create a list, append N items, print the
    /// last few and walk a cursor back through the rest
    Demo {
        #[arg(long, default_value = "demo")]
        list_id: String,
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
    /// Read list operations from stdin, one per line, against a single
    /// in-process list: `append <json>`, `page <n>`, `last <n>`,
    /// `current`, `quit`
    Repl {
        #[arg(long, default_value = "repl")]
        list_id: String,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let client = PagedListClient::new(
        Arc::new(InMemoryStore::new()),
        Configuration::builder()
            .store("local", "lists")
            .max_element_per_page(cli.max_element_per_page)
            .build(),
    );

    match cli.command {
        Command::Demo { list_id, count } => run_demo(&client, &list_id, count).await,
        Command::Repl { list_id } => run_repl(&client, &list_id).await,
    }
}

async fn run_demo(client: &PagedListClient<InMemoryStore>, list_id: &str, count: usize) {
    let list_id = list_id.to_string();
    client
        .idempotent_create(&list_id, None)
        .await
        .expect("idempotent_create");

    for i in 0..count {
        let (page, sequence_id) = client
            .atomic_append(&list_id, Value::from(format!("item-{i}")))
            .await
            .expect("atomic_append");
        println!("appended item-{i} at page {page}, sequence_id {sequence_id}");
    }

    let current_page = client.get_current_page(&list_id).await.expect("get_current_page");
    println!("currentPage = {current_page}");

    let recent = client
        .retrieve_last_most_recent(&list_id, count.min(3))
        .await
        .expect("retrieve_last_most_recent");
    for item in &recent {
        println!(
            "recent: {} @ ({}, {})",
            item.value, item.page_id, item.sequence_id
        );
    }
}

async fn run_repl(client: &PagedListClient<InMemoryStore>, list_id: &str) {
    let list_id = list_id.to_string();
    client
        .idempotent_create(&list_id, None)
        .await
        .expect("idempotent_create");

    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush().ok();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let parts: Vec<&str> = line.trim().splitn(2, ' ').collect();
        match parts.as_slice() {
            ["quit"] | ["exit"] => break,
            ["append", payload] => match serde_json::from_str::<Value>(payload) {
                Ok(value) => match client.atomic_append(&list_id, value).await {
                    Ok((page, seq)) => println!("ok: page={page} sequence_id={seq}"),
                    Err(e) => println!("error: {e}"),
                },
                Err(e) => println!("invalid json: {e}"),
            },
            ["page", n] => match n.parse() {
                Ok(n) => match client.get_data_page(&list_id, n).await {
                    Ok(items) => items.iter().for_each(|i| println!("{i:?}")),
                    Err(e) => println!("error: {e}"),
                },
                Err(_) => println!("page must be a number"),
            },
            ["last", n] => match n.parse() {
                Ok(n) => match client.retrieve_last_most_recent(&list_id, n).await {
                    Ok(items) => items.iter().for_each(|i| println!("{i:?}")),
                    Err(e) => println!("error: {e}"),
                },
                Err(_) => println!("n must be a number"),
            },
            ["current"] => match client.get_current_page(&list_id).await {
                Ok(p) => println!("currentPage = {p}"),
                Err(e) => println!("error: {e}"),
            },
            _ => println!("commands: append <json> | page <n> | last <n> | current | quit"),
        }
        print!("> ");
        io::stdout().flush().ok();
    }
}
