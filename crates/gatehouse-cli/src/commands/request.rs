use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use gatehouse_core::confirmation::ConfirmationRequest;
use gatehouse_core::envelope::Envelope;
use gatehouse_interaction::GetOptions;
use serde_json::Value;

use super::context::AppContext;

pub async fn get(ctx: &mut AppContext, path: &str, allow_errors: Vec<String>) -> Result<ExitCode> {
    ctx.announce(format!("GET {}", path));

    let options = allow_errors
        .into_iter()
        .fold(GetOptions::new(), GetOptions::allow_error);
    let envelope = ctx.dispatcher.get(path, options).await?;
    print_envelope(&envelope)
}

pub async fn post(ctx: &mut AppContext, path: &str, body: &str) -> Result<ExitCode> {
    ctx.announce(format!("POST {}", path));
    let body = parse_body(body)?;
    let envelope = ctx.dispatcher.post(path, &body).await?;
    print_envelope(&envelope)
}

pub async fn put(ctx: &mut AppContext, path: &str, body: &str) -> Result<ExitCode> {
    ctx.announce(format!("PUT {}", path));
    let body = parse_body(body)?;
    let envelope = ctx.dispatcher.put(path, &body).await?;
    print_envelope(&envelope)
}

/// Deletes only after the user confirms.
pub async fn delete(ctx: &mut AppContext, path: &str) -> Result<ExitCode> {
    ctx.announce(format!("DELETE {}", path));

    let request = ConfirmationRequest::new(format!(
        "Delete {} on {}?",
        path, ctx.config.backend_url
    ))
    .with_headline("Confirm deletion")
    .with_accept_label("Delete");

    let answer = ctx.gate.ask(request).await;
    if !answer.is_confirmed() {
        tracing::info!("[CLI] Delete of {} not confirmed: {:?}", path, answer);
        println!("{}", "Cancelled".dimmed());
        return Ok(ExitCode::SUCCESS);
    }

    let envelope = ctx.dispatcher.delete(path).await?;
    print_envelope(&envelope)
}

fn parse_body(body: &str) -> Result<Value> {
    serde_json::from_str(body).context("Request body is not valid JSON")
}

/// Success payloads go to stdout as pretty JSON. Application errors have
/// already been surfaced as a toast unless allow-listed, so only the
/// message is echoed.
fn print_envelope(envelope: &Envelope) -> Result<ExitCode> {
    match envelope {
        Envelope::Success(payload) => {
            println!("{}", serde_json::to_string_pretty(payload)?);
            Ok(ExitCode::SUCCESS)
        }
        Envelope::Error { message } => {
            println!("{} {}", "error:".red(), message);
            Ok(ExitCode::FAILURE)
        }
    }
}
