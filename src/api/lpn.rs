//! LPN Status Endpoint
//!
//! Canned license-plate-number lookup; no warehouse integration behind it.

use axum::{extract::Path, response::Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LpnOut {
    pub lpn: String,
    pub status: &'static str,
    pub location: &'static str,
    pub last_update: &'static str,
    pub recommendation: &'static str,
}

/// GET /lpn/:lpn_id
pub async fn lpn_status(Path(lpn_id): Path<String>) -> Json<LpnOut> {
    Json(LpnOut {
        lpn: lpn_id,
        status: "In Picking",
        location: "Subinventory STAGE / Locator A1-01",
        last_update: "2025-11-11T10:00:00Z",
        recommendation: "Confirm reservation; if stuck, run pick release or close task and reassign.",
    })
}
