use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use gatehouse_core::identity::{Credentials, Identity};
use rustyline::DefaultEditor;

use super::context::AppContext;

pub async fn login(ctx: &mut AppContext, email: String, password: Option<String>) -> Result<ExitCode> {
    ctx.announce("Login");

    let password = match password {
        Some(password) => password,
        None => read_password()?,
    };

    let outcome = ctx.session.login(Credentials::new(email, password)).await;
    if !outcome.is_authenticated() {
        return Ok(ExitCode::FAILURE);
    }

    if let Some(identity) = ctx.session.current_user() {
        println!("Logged in as {}", describe(&identity));
    }
    Ok(ExitCode::SUCCESS)
}

pub fn logout(ctx: &mut AppContext) -> Result<ExitCode> {
    ctx.announce("Logout");
    ctx.session.logout();
    println!("Logged out");
    Ok(ExitCode::SUCCESS)
}

pub fn whoami(ctx: &mut AppContext) -> Result<ExitCode> {
    ctx.announce("Profile");
    match ctx.session.current_user() {
        Some(identity) => {
            println!("{}", describe(&identity));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("{}", "Not logged in".dimmed());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn read_password() -> Result<String> {
    let mut editor = DefaultEditor::new().context("Failed to open prompt")?;
    let line = editor.readline("Password: ").context("No password given")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn describe(identity: &Identity) -> String {
    format!("{} <{}> ({})", identity.name, identity.email, identity.role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_core::identity::Role;

    #[test]
    fn test_describe_identity() {
        let identity = Identity {
            id: None,
            email: "example@example.com".to_string(),
            name: "SuperUser".to_string(),
            role: Role::Admin,
            token: "SuperSecretToken".to_string(),
        };
        assert_eq!(
            describe(&identity),
            "SuperUser <example@example.com> (admin)"
        );
    }
}
