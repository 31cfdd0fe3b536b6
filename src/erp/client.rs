//! ERP API client.
//!
//! Wraps the three upstream endpoints that feed a [`RawSnapshot`].
//! Every fetch degrades to an empty payload on failure so a flaky ERP
//! produces reduced answers instead of request errors; failures are
//! logged with the employee they affected.

use std::time::Duration;

use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::ErpConfig;
use crate::error::{EngineError, EngineResult};
use crate::normalize::display_key;

use super::snapshot::RawSnapshot;

/// Client for the ERP employee and leave endpoints.
pub struct ErpClient {
    client: Client,
    base_url: String,
    bearer_token: String,
    company_id: i64,
    window_start: String,
    window_end: String,
}

impl ErpClient {
    /// Creates a client from ERP configuration.
    ///
    /// A missing bearer token is sent as a blank one; the upstream API
    /// accepts that in development setups.
    pub fn from_config(config: &ErpConfig) -> EngineResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| EngineError::Transport {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bearer_token: config.bearer_token.clone().unwrap_or_default(),
            company_id: config.company_id,
            window_start: config.balance_window_start.clone(),
            window_end: config.balance_window_end.clone(),
        })
    }

    async fn request_json(&self, request: reqwest::RequestBuilder) -> EngineResult<Value> {
        let response = request
            .header("Authorization", format!("Bearer {}", self.bearer_token))
            .header("Content-Type", "application/json; charset=UTF-8")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EngineError::Transport {
                        message: "Request timed out".to_string(),
                    }
                } else if e.is_connect() {
                    EngineError::Transport {
                        message: format!("Connection failed: {}", e),
                    }
                } else {
                    EngineError::Transport {
                        message: format!("Request failed: {}", e),
                    }
                }
            })?;

        let response = response
            .error_for_status()
            .map_err(|e| EngineError::Transport {
                message: format!("Request failed: {}", e),
            })?;

        response
            .json::<Value>()
            .await
            .map_err(|e| EngineError::Transport {
                message: format!("Failed to parse response: {}", e),
            })
    }

    /// Fetches the employee master rows. Failures degrade to empty.
    pub async fn employee_details(&self, employee_id: i64) -> Vec<Value> {
        let url = format!("{}/EmployeeMasterApi/HrmGetEmployeeDetails/", self.base_url);
        let request = self
            .client
            .post(&url)
            .query(&[("strEmp_ID_N", employee_id.to_string())]);

        match self.request_json(request).await {
            Ok(value) => as_rows(value),
            Err(error) => {
                warn!(employee_id, %error, "Failed to fetch employee details");
                Vec::new()
            }
        }
    }

    /// Fetches the leave policy rows. Failures degrade to empty.
    pub async fn leave_types(&self, employee_id: i64) -> Vec<Value> {
        let url = format!("{}/LeaveApplicationApi/FillLeaveType", self.base_url);
        let request = self.client.get(&url).query(&[
            ("Emp_ID_N", employee_id.to_string()),
            ("Cgm_ID_N", self.company_id.to_string()),
        ]);

        match self.request_json(request).await {
            Ok(value) => as_rows(value),
            Err(error) => {
                warn!(employee_id, %error, "Failed to fetch leave types");
                Vec::new()
            }
        }
    }

    /// Fetches the balance rows for one leave definition. Failures
    /// degrade to empty.
    pub async fn leave_balance(&self, employee_id: i64, definition_id: &str) -> Vec<Value> {
        let url = format!("{}/LeaveApplicationApi", self.base_url);
        let str_sql = format!(
            "{},{},'{}','{}',0,0,1,0",
            employee_id, definition_id, self.window_start, self.window_end
        );
        let request = self.client.post(&url).query(&[("StrSql", str_sql)]);

        match self.request_json(request).await {
            Ok(value) => as_rows(value),
            Err(error) => {
                warn!(employee_id, definition_id, %error, "Failed to fetch leave balance");
                Vec::new()
            }
        }
    }

    /// Fetches everything the engine needs for one employee.
    ///
    /// Balances are fetched per leave definition found in the policy
    /// rows and keyed by the stringified definition identifier, in
    /// policy order.
    pub async fn fetch_snapshot(&self, employee_id: i64) -> RawSnapshot {
        let employee = self.employee_details(employee_id).await;
        let leave_types = self.leave_types(employee_id).await;

        let mut leave_balances = Map::new();
        for row in &leave_types {
            let Some(record) = row.as_object() else {
                continue;
            };
            let Some(definition_id) = display_key(record.get("Lpd_ID_N")) else {
                continue;
            };
            let rows = self.leave_balance(employee_id, &definition_id).await;
            leave_balances.insert(definition_id, Value::Array(rows));
        }

        debug!(
            employee_id,
            employee_rows = employee.len(),
            leave_type_rows = leave_types.len(),
            balance_keys = leave_balances.len(),
            "Fetched ERP snapshot"
        );

        RawSnapshot {
            employee,
            leave_types,
            leave_balances,
        }
    }
}

fn as_rows(value: Value) -> Vec<Value> {
    match value {
        Value::Array(rows) => rows,
        _ => Vec::new(),
    }
}
