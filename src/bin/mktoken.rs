use anyhow::Result;
use clap::{Parser, ValueEnum};

use catalog_api_rust::auth::{generate_jwt, Claims, Role};

/// Mint a JWT for local development and testing. Production tokens come from
/// the identity provider, never from this tool.
#[derive(Parser)]
#[command(name = "mktoken")]
#[command(about = "Mint a JWT for the Catalog API (development/testing)")]
struct Args {
    #[arg(help = "Subject (username) to issue the token for")]
    subject: String,

    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_value = "user",
        help = "Comma-separated roles to grant"
    )]
    roles: Vec<RoleArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RoleArg {
    User,
    Admin,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::User => Role::User,
            RoleArg::Admin => Role::Admin,
        }
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let roles = args.roles.into_iter().map(Role::from).collect();

    let token = generate_jwt(Claims::new(args.subject, roles))?;
    println!("{}", token);

    Ok(())
}
