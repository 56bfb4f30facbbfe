//! Session commands: register, login, logout, whoami.

use greenbasket_core::{LoginRequest, RegisterRequest};

use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

pub async fn register(
    ctx: &AppContext,
    name: String,
    email: String,
    password: String,
) -> Result<(), CliError> {
    if password.len() < 6 {
        return Err(CliError::Message(
            "Password must be at least 6 characters".to_owned(),
        ));
    }

    let request = RegisterRequest {
        name,
        email,
        password,
    };
    let auth = ctx
        .api
        .register(&request)
        .await
        .map_err(|e| CliError::action(&e, "Registration failed"))?;

    ctx.session.set_auth(auth.user.clone(), &auth.token);
    println!("Welcome, {}! You are now signed in.", auth.user.name);
    Ok(())
}

pub async fn login(ctx: &AppContext, email: String, password: String) -> Result<(), CliError> {
    let request = LoginRequest { email, password };
    let auth = ctx
        .api
        .login(&request)
        .await
        .map_err(|e| CliError::action(&e, "Login failed"))?;

    ctx.session.set_auth(auth.user.clone(), &auth.token);
    println!("Signed in as {} <{}>.", auth.user.name, auth.user.email);
    Ok(())
}

pub fn logout(ctx: &AppContext) {
    ctx.session.logout();
    ctx.cart.clear();
    println!("Signed out.");
}

pub async fn whoami(ctx: &AppContext) -> Result<(), CliError> {
    ctx.require_auth()?;

    let user = ctx
        .api
        .me()
        .await
        .map_err(|e| CliError::action(&e, "Failed to load profile"))?;
    output::user(&user);
    Ok(())
}
