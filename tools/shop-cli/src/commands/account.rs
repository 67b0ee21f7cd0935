//! Customer sign-in and registration.

use anyhow::{Context as _, Result};
use shop_commerce::account::{Customer, LoginRequest};

use super::{LoginArgs, RegisterArgs};
use crate::context::Context;

/// Run the login command.
pub async fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let request = LoginRequest::new(args.email, args.password)?;
    let api = ctx.api()?;

    let spinner = ctx.output.spinner("Signing in...");
    let result = api.login(&request).await;
    spinner.finish_and_clear();

    let customer = result.context("Sign-in failed")?;
    print_customer(customer, "Signed in", ctx);
    Ok(())
}

/// Run the register command.
pub async fn register(args: RegisterArgs, ctx: &Context) -> Result<()> {
    let customer = Customer::registration(
        args.name,
        args.email,
        args.password,
        args.phone,
        args.address,
        chrono::Utc::now().to_rfc3339(),
    )?;
    let api = ctx.api()?;

    let spinner = ctx.output.spinner("Creating account...");
    let result = api.register(&customer).await;
    spinner.finish_and_clear();

    let customer = result.context("Registration failed")?;
    print_customer(customer, "Registered", ctx);
    Ok(())
}

fn print_customer(mut customer: Customer, verb: &str, ctx: &Context) {
    customer.password.clear();

    if ctx.output.is_json() {
        ctx.output.json(&customer);
        return;
    }

    ctx.output.success(&format!("{} as {}", verb, customer.name));
    ctx.output.kv("id", customer.id.as_str());
    ctx.output.kv("email", &customer.email);
    if !customer.address.is_empty() {
        ctx.output.kv("address", &customer.address);
    }
}
