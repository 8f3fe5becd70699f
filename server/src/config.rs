use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    sync::Arc,
};

use clap::Parser;

use crate::store::{MemoryStore, SharedStore, SledStore, StoreError};

/// Command-line and environment configuration for `todo-server`.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", about = "REST backend for the todo list")]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Directory of the sled database. Todos are kept in memory when unset.
    #[arg(long = "db", env = "TODO_DB")]
    pub db_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn open_store(&self) -> Result<SharedStore, StoreError> {
        match &self.db_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "opening sled store");
                Ok(Arc::new(SledStore::open(path)?))
            }
            None => {
                tracing::info!("using in-memory store");
                Ok(Arc::new(MemoryStore::new()))
            }
        }
    }
}
