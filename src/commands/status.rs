//! Status Request

use crate::models::StatusReport;
use super::{api_url, read_json};

pub async fn get_status() -> Result<StatusReport, String> {
    let response = reqwest::get(api_url("/status")?)
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}
