//! Process configuration, read from the environment (and an optional `.env`
//! file loaded by `main`).
//!
//! - `COCO_BIND_ADDR`: listen address, default `127.0.0.1:3000`
//! - `COCO_DATA_URL`: base URL of the catalog files; when unset they are read
//!   from `COCO_DATA_DIR` (default `public/data`)
//! - `API_KEY` or `GEMINI_API_KEY`: credential for the trip planner
//! - `GEMINI_API_BASE`: planner endpoint base
//! - `COCO_SUBMIT_DELAY_MS`, `COCO_CLOSE_DELAY_MS`: simulated submission delay
//!   and modal close transition

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Error;
use crate::external::gemini;
use crate::forms::{booking::CLOSE_TRANSITION, SimulatedSubmitter};

#[derive(Clone, Debug, PartialEq)]
pub enum DataSource {
    Http(String),
    Dir(PathBuf),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub data_source: DataSource,
    pub data_dir: PathBuf,
    pub api_key: Option<String>,
    pub api_base: String,
    pub submit_delay: Duration,
    pub close_transition: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; empty values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = match get("COCO_BIND_ADDR") {
            Some(addr) => addr.parse()?,
            None => SocketAddr::from(([127, 0, 0, 1], 3000)),
        };

        let data_dir = PathBuf::from(get("COCO_DATA_DIR").unwrap_or_else(|| "public/data".into()));

        let data_source = match get("COCO_DATA_URL") {
            Some(url) => DataSource::Http(url),
            None => DataSource::Dir(data_dir.clone()),
        };

        let api_key = get("API_KEY").or_else(|| get("GEMINI_API_KEY"));
        let api_base = get("GEMINI_API_BASE").unwrap_or_else(|| gemini::DEFAULT_API_BASE.into());

        let submit_delay = match get("COCO_SUBMIT_DELAY_MS") {
            Some(ms) => Duration::from_millis(ms.parse()?),
            None => SimulatedSubmitter::DEFAULT_DELAY,
        };

        let close_transition = match get("COCO_CLOSE_DELAY_MS") {
            Some(ms) => Duration::from_millis(ms.parse()?),
            None => CLOSE_TRANSITION,
        };

        Ok(Self {
            bind_addr,
            data_source,
            data_dir,
            api_key,
            api_base,
            submit_delay,
            close_transition,
        })
    }
}
