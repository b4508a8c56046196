//! # Redis
//!
//! RAM database holding sign-in sessions.
//!
//! ## Requirements
//!
//! - One owner, a handful of live tokens at most
//! - O(1) token lookup on every write request
//! - Tokens expire on their own, no cleanup pass
//!
//! ## Implementation
//!
//! - One `session:<uuid>` string key per issued token
//! - TTL of 30 days, matching the long-lived verified cookie on the client
//! - Expiry is Redis's job, a token that is gone is simply signed out
use std::time::Duration;

use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};

use crate::error::AppError;

const SESSION_PREFIX: &str = "session:";

/// 30 days, the lifetime of the owner's sign-in.
pub const SESSION_TTL_SECS: u64 = 60 * 60 * 24 * 30;

pub async fn init_redis(redis_url: &str) -> ConnectionManager {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(100));

    let client = Client::open(redis_url).unwrap();

    client
        .get_connection_manager_with_config(config)
        .await
        .unwrap()
}

pub async fn create_session(
    connection: &mut ConnectionManager,
    token: &str,
) -> Result<(), AppError> {
    let _: () = connection
        .set_ex(session_key(token), 1u8, SESSION_TTL_SECS)
        .await?;

    Ok(())
}

pub async fn session_exists(
    connection: &mut ConnectionManager,
    token: &str,
) -> Result<bool, AppError> {
    let exists: bool = connection.exists(session_key(token)).await?;

    Ok(exists)
}

fn session_key(token: &str) -> String {
    format!("{SESSION_PREFIX}{token}")
}
