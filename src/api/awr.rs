//! AWR Monitoring Endpoints
//!
//! Canned database wait-time statistics for the support view.

use axum::{extract::Query, response::Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct HoursQuery {
    pub hours: Option<u32>,
}

impl HoursQuery {
    /// Reporting window in hours, clamped to 1..=24.
    fn window(&self) -> u32 {
        self.hours.unwrap_or(1).clamp(1, 24)
    }
}

#[derive(Debug, Serialize)]
pub struct WaitEvent {
    pub event: &'static str,
    pub seconds_waited: f64,
}

#[derive(Debug, Serialize)]
pub struct TopWaitsOut {
    pub hours: u32,
    pub top_waits: Vec<WaitEvent>,
}

/// GET /monitor/awr/top-waits
pub async fn top_waits(Query(query): Query<HoursQuery>) -> Json<TopWaitsOut> {
    Json(TopWaitsOut {
        hours: query.window(),
        top_waits: vec![
            WaitEvent {
                event: "db file sequential read",
                seconds_waited: 123.4,
            },
            WaitEvent {
                event: "log file sync",
                seconds_waited: 88.1,
            },
            WaitEvent {
                event: "enq: TX - row lock contention",
                seconds_waited: 52.0,
            },
        ],
    })
}

#[derive(Debug, Serialize)]
pub struct DbTimeStat {
    pub stat: &'static str,
    pub seconds: f64,
}

#[derive(Debug, Serialize)]
pub struct DbTimeOut {
    pub hours: u32,
    pub db_time: Vec<DbTimeStat>,
}

/// GET /monitor/awr/db-time
pub async fn db_time(Query(query): Query<HoursQuery>) -> Json<DbTimeOut> {
    Json(DbTimeOut {
        hours: query.window(),
        db_time: vec![
            DbTimeStat {
                stat: "DB time",
                seconds: 210.2,
            },
            DbTimeStat {
                stat: "DB CPU",
                seconds: 140.7,
            },
            DbTimeStat {
                stat: "background cpu time",
                seconds: 12.2,
            },
        ],
    })
}
