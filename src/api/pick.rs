//! Pick Status Endpoint
//!
//! Mock pick/delivery evaluation for support triage.

use axum::{extract::Path, response::Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PickOut {
    pub delivery: String,
    pub status: &'static str,
    pub issue: Option<&'static str>,
    pub suggestion: &'static str,
}

/// GET /pick/status/:delivery_id
///
/// Deliveries whose id ends in 9 simulate a held backorder.
pub async fn pick_status(Path(delivery_id): Path<String>) -> Json<PickOut> {
    if delivery_id.ends_with('9') {
        return Json(PickOut {
            delivery: delivery_id,
            status: "Held",
            issue: Some("Backorder on item 12345"),
            suggestion: "Release after replenishment or split delivery.",
        });
    }

    Json(PickOut {
        delivery: delivery_id,
        status: "Ready",
        issue: None,
        suggestion: "Proceed with pick release.",
    })
}
