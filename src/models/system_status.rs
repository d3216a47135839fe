//! System status model.
//!
//! Returned by `GET api/v1/system/status`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use tokio_util::sync::CancellationToken;

use crate::client::ProwlarrClient;
use crate::dispatch::Request;
use crate::error::Result;

const STATUS_PATH: &str = "api/v1/system/status";

/// Build, runtime and host information about a Prowlarr instance.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemStatus {
    pub app_name: Option<String>,
    pub instance_name: Option<String>,
    pub version: Option<String>,
    pub build_time: Option<DateTime<Utc>>,
    pub is_debug: bool,
    pub is_production: bool,
    /// Whether the API key grants administrator rights.
    pub is_admin: bool,
    pub is_user_interactive: bool,
    pub startup_path: Option<String>,
    pub app_data: Option<String>,
    pub os_name: Option<String>,
    pub os_version: Option<String>,
    pub is_net_core: bool,
    pub is_linux: bool,
    pub is_osx: bool,
    pub is_windows: bool,
    pub is_docker: bool,
    /// Runtime mode, e.g. "console" or "service".
    pub mode: Option<String>,
    pub branch: Option<String>,
    /// Configured authentication method, e.g. "forms".
    pub authentication: Option<String>,
    pub sqlite_version: Option<String>,
    pub migration_version: i32,
    pub url_base: Option<String>,
    pub runtime_version: Option<String>,
    pub runtime_name: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub package_version: Option<String>,
    pub package_author: Option<String>,
    pub package_update_mechanism: Option<String>,
    pub update_date: Option<DateTime<Utc>>,
    pub update_package_version: Option<String>,
    pub update_package_author: Option<String>,
    pub update_available: bool,
}

impl SystemStatus {
    /// Name of the host operating system family.
    pub fn platform(&self) -> &'static str {
        if self.is_windows {
            "windows"
        } else if self.is_osx {
            "macos"
        } else if self.is_linux {
            "linux"
        } else {
            "unknown"
        }
    }
}

/// Fetch the system status.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_system_status(client: &ProwlarrClient) -> Result<SystemStatus> {
    get_system_status_cancellable(client, &CancellationToken::new()).await
}

/// Fetch the system status, abandoning the request if `cancel` fires.
///
/// # Errors
///
/// Returns an error if the request fails.
#[tracing::instrument(skip_all)]
pub async fn get_system_status_cancellable(
    client: &ProwlarrClient,
    cancel: &CancellationToken,
) -> Result<SystemStatus> {
    let request = Request::get(STATUS_PATH);
    Ok(client.dispatcher().dispatch_value(&request, cancel).await?)
}
