use clap::Parser;

use crate::error::PageError;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address the HTTP server binds to
    #[arg(long, value_name = "BIND_ADDR", default_value = "0.0.0.0:8081")]
    pub bind_addr: String,
    /// Supabase project base url; falls back to the SUPABASE_URL env var
    #[arg(long, value_name = "SUPABASE_URL")]
    pub supabase_url: Option<String>,
    /// Service role key; falls back to the SUPABASE_SERVICE_ROLE_KEY env var
    #[arg(long, value_name = "SUPABASE_SERVICE_ROLE_KEY")]
    pub supabase_key: Option<String>,
}

/// Immutable process-wide configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub supabase_url: String,
    pub supabase_key: String,
}

/// # Errors
///
/// Will return `Err` if the data-store endpoint or credential is missing
/// from both the CLI and the environment.
pub fn resolve_config() -> Result<AppConfig, PageError> {
    Args::parse().into_config()
}

impl Args {
    /// # Errors
    ///
    /// Same contract as [`resolve_config`].
    pub fn into_config(self) -> Result<AppConfig, PageError> {
        let supabase_url = resolve_value(self.supabase_url, "SUPABASE_URL")?;
        let supabase_key = resolve_value(self.supabase_key, "SUPABASE_SERVICE_ROLE_KEY")?;
        Ok(AppConfig {
            bind_addr: self.bind_addr,
            supabase_url,
            supabase_key,
        })
    }
}

fn resolve_value(flag: Option<String>, env_var: &str) -> Result<String, PageError> {
    let value = match flag {
        Some(v) => v,
        None => std::env::var(env_var).unwrap_or_default(),
    };
    if value.trim().is_empty() {
        return Err(PageError::Config(format!("{env_var} is not configured")));
    }
    Ok(value)
}
