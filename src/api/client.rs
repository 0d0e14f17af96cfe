use serde::de::DeserializeOwned;
use tracing::{debug, info};
use ureq::Agent;

use super::records::{Collection, Expense, Invoice};
use crate::config::ApiConfig;
use crate::error::{ReportError, Result};

const TOKEN_HEADER: &str = "X-Api-Token";

/// Collections exposed by the billing API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Invoices,
    Expenses,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Invoices => "invoices",
            Endpoint::Expenses => "expenses",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) type Query = Vec<(&'static str, String)>;

/// Active invoices of non-deleted clients that are paid or overdue, newest first
pub(crate) fn invoice_query(per_page: u32) -> Query {
    vec![
        ("include", "client".to_string()),
        ("without_deleted_clients", "true".to_string()),
        ("sort", "id|desc".to_string()),
        ("per_page", per_page.to_string()),
        ("page", "1".to_string()),
        ("filter", String::new()),
        ("client_status", "paid,overdue".to_string()),
        ("status", "active".to_string()),
    ]
}

/// Active expenses of non-deleted clients and vendors, newest first
pub(crate) fn expense_query(per_page: u32) -> Query {
    vec![
        ("include", "client,vendor,category".to_string()),
        ("without_deleted_clients", "true".to_string()),
        ("without_deleted_vendors", "true".to_string()),
        ("sort", "date|desc".to_string()),
        ("per_page", per_page.to_string()),
        ("page", "1".to_string()),
        ("filter", String::new()),
        ("client_status", String::new()),
        ("status", "active".to_string()),
    ]
}

/// Blocking client for the billing API. One request per call, no retries.
pub struct ApiClient {
    agent: Agent,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .build()
            .into();

        Self { agent, config }
    }

    /// GET `{api_url}/{endpoint}` and return the `data` array of the body
    pub fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.config.api_url, endpoint);
        debug!(%url, params = query.len(), "GET");

        let request_err = |source: ureq::Error| ReportError::Request {
            endpoint: endpoint.to_string(),
            source,
        };

        let mut request = self
            .agent
            .get(url.as_str())
            .header(TOKEN_HEADER, self.config.api_key.as_str());
        for (key, value) in query {
            request = request.query(key, value);
        }

        let body: String = request
            .call()
            .map_err(request_err)?
            .body_mut()
            .read_to_string()
            .map_err(request_err)?;

        let collection: Collection<T> =
            serde_json::from_str(&body).map_err(|source| ReportError::Json {
                endpoint: endpoint.to_string(),
                source,
            })?;

        info!(%endpoint, records = collection.data.len(), "fetched");
        Ok(collection.data)
    }

    pub fn fetch_invoices(&self, per_page: u32) -> Result<Vec<Invoice>> {
        self.fetch(Endpoint::Invoices, &invoice_query(per_page))
    }

    pub fn fetch_expenses(&self, per_page: u32) -> Result<Vec<Expense>> {
        self.fetch(Endpoint::Expenses, &expense_query(per_page))
    }
}
