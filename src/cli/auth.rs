//! Sign-in CLI commands

use tracing::warn;
use zeroize::Zeroizing;

use super::context::CliContext;
use crate::display::Notification;
use crate::error::{FarmError, FarmResult};
use crate::forms::{LoginForm, SignupForm};

fn password_or_prompt(password: Option<String>) -> FarmResult<Zeroizing<String>> {
    match password {
        Some(password) => Ok(Zeroizing::new(password)),
        None => rpassword::prompt_password("Password: ")
            .map(Zeroizing::new)
            .map_err(|e| FarmError::Io(format!("Failed to read password: {}", e))),
    }
}

pub async fn handle_login(
    ctx: &mut CliContext,
    identifier: String,
    password: Option<String>,
) -> FarmResult<()> {
    let form = LoginForm {
        identifier: Some(identifier),
        password: Some(password_or_prompt(password)?),
    };
    form.validate()?;

    let mut session = ctx.session()?;
    let user = session.login(&form).await;
    // The cookie is valid even if the first reload failed
    if session.is_authenticated() {
        ctx.remember(&session)?;
    }
    let user = user?;

    ctx.notify(Notification::success(user.greeting()))
}

pub async fn handle_register(
    ctx: &mut CliContext,
    name: String,
    email: String,
    password: Option<String>,
) -> FarmResult<()> {
    let form = SignupForm {
        name: Some(name),
        email: Some(email),
        password: Some(password_or_prompt(password)?),
    };
    form.validate()?;

    let mut session = ctx.session()?;
    let user = session.register(&form).await;
    if session.is_authenticated() {
        ctx.remember(&session)?;
    }
    let user = user?;

    ctx.notify(Notification::success(format!(
        "Account created. {}",
        user.greeting()
    )))
}

/// Always forgets the saved session, even one that no longer parses
pub async fn handle_logout(ctx: &mut CliContext) -> FarmResult<()> {
    match ctx.stored_session() {
        Ok(Some(_)) => match ctx.session() {
            Ok(mut session) => session.logout().await,
            Err(e) => warn!(error = %e, "skipping server logout"),
        },
        Ok(None) => {}
        Err(e) => warn!(error = %e, "discarding unreadable saved session"),
    }
    ctx.forget()?;
    ctx.notify(Notification::success("Logged out"))
}

pub async fn handle_whoami(ctx: &mut CliContext) -> FarmResult<()> {
    let session = ctx.signed_in().await?;
    let message = match session.user() {
        Some(user) if !user.email.is_empty() => {
            format!("Signed in as {} <{}>", user.username, user.email)
        }
        Some(user) => format!("Signed in as {}", user.username),
        None => return Err(FarmError::NotAuthenticated),
    };
    ctx.notify(Notification::info(message))
}
