use clap::Subcommand;

use crate::auth::{AuthState, IdentityProvider, SessionGate};
use crate::error::Result;

use super::App;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Sign in with email and password
    SignIn {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    SignUp {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out of the current session
    SignOut,
    /// Show the current session state
    Status,
}

pub fn run(app: &App, action: AuthAction) -> Result<()> {
    match action {
        AuthAction::SignIn { email, password } => {
            let session = app.provider.sign_in(&email, &password)?;
            if let Some(user) = &session.user {
                println!("Signed in as {}.", user.email);
            }
        }
        AuthAction::SignUp { email, password } => {
            let session = app.provider.sign_up(&email, &password)?;
            if let Some(user) = &session.user {
                println!("Account created for {}.", user.email);
            }
        }
        AuthAction::SignOut => {
            app.provider.sign_out()?;
            println!("Signed out.");
        }
        AuthAction::Status => {
            let gate = SessionGate::resolve(&app.provider);
            match gate.state() {
                AuthState::SignedIn(session) => {
                    let email = session.user.as_ref().map(|u| u.email.as_str()).unwrap_or("?");
                    println!("Signed in as {email}.");
                }
                // resolve() never leaves the gate loading
                AuthState::SignedOut | AuthState::Loading => println!("Signed out."),
            }
        }
    }
    Ok(())
}
