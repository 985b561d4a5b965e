//! Database collaborator used by the connectivity check

use crate::error::{AppError, Result};
use crate::models::DatabaseConnectionConfig;
use async_trait::async_trait;
use std::time::Duration;

/// Opens connections described by a [`DatabaseConnectionConfig`]
#[async_trait]
pub trait DatabaseConnector: Send + Sync {
    async fn connect(&self, config: &DatabaseConnectionConfig) -> Result<Box<dyn DatabaseConnection>>;
}

/// An open connection
#[async_trait]
pub trait DatabaseConnection: Send {
    async fn query(&mut self, sql: &str) -> Result<()>;

    async fn close(self: Box<Self>) -> Result<()>;
}

/// Connector that always succeeds without touching the network
#[derive(Debug, Clone, Copy, Default)]
pub struct StubConnector;

struct StubConnection;

#[async_trait]
impl DatabaseConnector for StubConnector {
    async fn connect(&self, _config: &DatabaseConnectionConfig) -> Result<Box<dyn DatabaseConnection>> {
        Ok(Box::new(StubConnection))
    }
}

#[async_trait]
impl DatabaseConnection for StubConnection {
    async fn query(&mut self, _sql: &str) -> Result<()> {
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}

/// Bounds the connect step of an inner connector
#[derive(Debug, Clone)]
pub struct TimeoutConnector<C> {
    inner: C,
    timeout: Duration,
}

impl<C: DatabaseConnector> TimeoutConnector<C> {
    pub fn new(inner: C, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl<C: DatabaseConnector> DatabaseConnector for TimeoutConnector<C> {
    async fn connect(&self, config: &DatabaseConnectionConfig) -> Result<Box<dyn DatabaseConnection>> {
        tokio::time::timeout(self.timeout, self.inner.connect(config))
            .await
            .map_err(|_| {
                AppError::timeout(format!(
                    "connecting to {} took longer than {}ms",
                    config.display_target(),
                    self.timeout.as_millis()
                ))
            })?
    }
}
