use crate::types::AppId;
use serde::Deserialize;

/// An appid/name pair from `GetAppList`.
#[derive(Debug, Clone, Deserialize)]
pub struct App {
    pub appid: AppId,
    pub name: String,
}
