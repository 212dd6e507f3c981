//! HTTP client for the Mesa REST API
//!
//! Every data operation requires an established [`Session`]; without one the
//! call refuses to go out on the wire. A 401 from the server clears the
//! session and surfaces [`ClientError::AuthExpired`]. After a successful
//! mutation callers are expected to re-fetch the affected collection rather
//! than patch local state.

use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use shared::client::{LoginRequest, LoginResponse, UserInfo};
use shared::error::{ApiResponse, ErrorCode};
use shared::models::{
    Category, CategoryCreate, CategoryUpdate, DiningTable, DiningTableCreate,
    DiningTableStatusUpdate, DiningTableUpdate, Invoice, InvoiceCreate, InvoicePaymentStatus,
    InvoiceStatusUpdate, Order, OrderCreate, OrderStatus, OrderStatusUpdate, Payment,
    PaymentCreate, Product, ProductCreate, ProductUpdate, TableStatus,
};

use crate::config::ClientConfig;
use crate::draft::OrderDraft;
use crate::error::{ClientError, ClientResult};
use crate::normalize;
use crate::session::Session;

/// Typed client for the Mesa server
#[derive(Debug, Clone)]
pub struct MesaClient {
    http: reqwest::Client,
    base_url: String,
    session: Option<Session>,
}

impl MesaClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session: None,
        })
    }

    /// The current session, if one is established
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether a session is established
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Drop the session without calling the server
    pub fn clear_session(&mut self) {
        self.session = None;
    }

    /// Restore a previously established session
    ///
    /// The credential is not verified here; the first request carrying it
    /// will surface [`ClientError::AuthExpired`] if the server rejects it.
    pub fn restore_session(&mut self, session: Session) {
        self.session = Some(session);
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn bearer(&self) -> ClientResult<String> {
        self.session
            .as_ref()
            .map(|s| format!("Bearer {}", s.token))
            .ok_or(ClientError::NotAuthenticated)
    }

    // ========== Request plumbing ==========

    async fn get<T: DeserializeOwned>(&mut self, path: &str) -> ClientResult<T> {
        let auth = self.bearer()?;
        let response = self
            .http
            .get(self.url(path))
            .header(AUTHORIZATION, auth)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// GET a collection endpoint through the normalization boundary
    async fn get_collection<T: DeserializeOwned>(&mut self, path: &str) -> ClientResult<Vec<T>> {
        let value: Value = self.get(path).await?;
        normalize::collection(value)
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &mut self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let auth = self.bearer()?;
        let response = self
            .http
            .post(self.url(path))
            .header(AUTHORIZATION, auth)
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&mut self, path: &str) -> ClientResult<T> {
        let auth = self.bearer()?;
        let response = self
            .http
            .post(self.url(path))
            .header(AUTHORIZATION, auth)
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &mut self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let auth = self.bearer()?;
        let response = self
            .http
            .put(self.url(path))
            .header(AUTHORIZATION, auth)
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn put_empty<T: DeserializeOwned>(&mut self, path: &str) -> ClientResult<T> {
        let auth = self.bearer()?;
        let response = self
            .http
            .put(self.url(path))
            .header(AUTHORIZATION, auth)
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn delete<T: DeserializeOwned>(&mut self, path: &str) -> ClientResult<T> {
        let auth = self.bearer()?;
        let response = self
            .http
            .delete(self.url(path))
            .header(AUTHORIZATION, auth)
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &mut self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // The stored credential is no longer accepted; clear it so the
            // caller can route to the authentication entry point.
            self.session = None;

            let text = response.text().await.unwrap_or_default();
            if let Ok(envelope) = serde_json::from_str::<ApiResponse<Value>>(&text)
                && envelope.code == Some(ErrorCode::InvalidCredentials.code())
            {
                return Err(ClientError::Api {
                    code: ErrorCode::InvalidCredentials.code(),
                    message: envelope.message,
                });
            }
            return Err(ClientError::AuthExpired);
        }

        if !status.is_success() {
            let text = response.text().await?;
            if let Ok(envelope) = serde_json::from_str::<ApiResponse<Value>>(&text)
                && let Some(code) = envelope.code
                && code != 0
            {
                return Err(ClientError::Api {
                    code,
                    message: envelope.message,
                });
            }
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        Ok(response.json().await?)
    }

    // ========== Auth API ==========

    /// Login and establish the session
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<UserInfo> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(self.url("api/auth/login"))
            .json(&request)
            .send()
            .await?;
        let login: LoginResponse = self.handle_response(response).await?;

        let user = login.user.clone();
        self.session = Some(Session::new(login.token, login.user));
        tracing::debug!(username = %user.username, "Session established");
        Ok(user)
    }

    /// Current user, as the server sees the credential
    pub async fn me(&mut self) -> ClientResult<UserInfo> {
        self.get("api/auth/me").await
    }

    /// Logout and clear the session
    ///
    /// The session is cleared even when the server call fails.
    pub async fn logout(&mut self) -> ClientResult<()> {
        let result: ClientResult<ApiResponse<Value>> = self.post_empty("api/auth/logout").await;
        self.session = None;
        result.map(|_| ())
    }

    // ========== Tables API ==========

    pub async fn tables(&mut self) -> ClientResult<Vec<DiningTable>> {
        self.get_collection("api/tables").await
    }

    pub async fn table(&mut self, id: &str) -> ClientResult<DiningTable> {
        self.get(&format!("api/tables/{}", id)).await
    }

    pub async fn create_table(&mut self, payload: &DiningTableCreate) -> ClientResult<DiningTable> {
        self.post("api/tables", payload).await
    }

    pub async fn update_table(
        &mut self,
        id: &str,
        payload: &DiningTableUpdate,
    ) -> ClientResult<DiningTable> {
        self.put(&format!("api/tables/{}", id), payload).await
    }

    pub async fn update_table_status(
        &mut self,
        id: &str,
        status: TableStatus,
    ) -> ClientResult<DiningTable> {
        self.put(
            &format!("api/tables/{}/status", id),
            &DiningTableStatusUpdate { status },
        )
        .await
    }

    pub async fn delete_table(&mut self, id: &str) -> ClientResult<bool> {
        self.delete(&format!("api/tables/{}", id)).await
    }

    // ========== Categories API ==========

    pub async fn categories(&mut self) -> ClientResult<Vec<Category>> {
        self.get_collection("api/product-categories").await
    }

    pub async fn create_category(&mut self, payload: &CategoryCreate) -> ClientResult<Category> {
        self.post("api/product-categories", payload).await
    }

    pub async fn update_category(
        &mut self,
        id: &str,
        payload: &CategoryUpdate,
    ) -> ClientResult<Category> {
        self.put(&format!("api/product-categories/{}", id), payload)
            .await
    }

    pub async fn delete_category(&mut self, id: &str) -> ClientResult<bool> {
        self.delete(&format!("api/product-categories/{}", id)).await
    }

    // ========== Products API ==========

    pub async fn products(&mut self) -> ClientResult<Vec<Product>> {
        self.get_collection("api/products").await
    }

    pub async fn product(&mut self, id: &str) -> ClientResult<Product> {
        self.get(&format!("api/products/{}", id)).await
    }

    pub async fn products_by_category(&mut self, category_id: &str) -> ClientResult<Vec<Product>> {
        self.get_collection(&format!("api/products/category/{}", category_id))
            .await
    }

    pub async fn create_product(&mut self, payload: &ProductCreate) -> ClientResult<Product> {
        self.post("api/products", payload).await
    }

    pub async fn update_product(
        &mut self,
        id: &str,
        payload: &ProductUpdate,
    ) -> ClientResult<Product> {
        self.put(&format!("api/products/{}", id), payload).await
    }

    // ========== Orders API ==========

    /// List orders, optionally filtered by exact status match
    pub async fn orders(&mut self, status: Option<OrderStatus>) -> ClientResult<Vec<Order>> {
        let path = match status {
            Some(status) => format!("api/orders?status={}", status.as_str()),
            None => "api/orders".to_string(),
        };
        self.get_collection(&path).await
    }

    pub async fn order(&mut self, id: &str) -> ClientResult<Order> {
        self.get(&format!("api/orders/{}", id)).await
    }

    pub async fn create_order(&mut self, payload: &OrderCreate) -> ClientResult<Order> {
        self.post("api/orders", payload).await
    }

    pub async fn update_order_status(
        &mut self,
        id: &str,
        status: OrderStatus,
    ) -> ClientResult<Order> {
        self.put(
            &format!("api/orders/{}/status", id),
            &OrderStatusUpdate { status },
        )
        .await
    }

    /// The newest active order for a table, if any
    pub async fn active_order_for_table(&mut self, table_id: &str) -> ClientResult<Option<Order>> {
        match self
            .get(&format!("api/orders/table/{}/active", table_id))
            .await
        {
            Ok(order) => Ok(Some(order)),
            Err(ClientError::NotFound(_)) => Ok(None),
            Err(ClientError::Api { code, .. }) if code == ErrorCode::OrderNotFound.code() => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Submit a draft
    ///
    /// The draft is cleared only after the server acknowledged the order; on
    /// any failure every entered line is preserved so the user can retry.
    pub async fn submit_draft(&mut self, draft: &mut OrderDraft) -> ClientResult<Order> {
        let request = draft
            .to_request()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        let order: Order = self.post("api/orders", &request).await?;
        draft.clear();
        Ok(order)
    }

    // ========== Invoices API ==========

    pub async fn invoices(&mut self) -> ClientResult<Vec<Invoice>> {
        self.get_collection("api/invoices").await
    }

    pub async fn invoice(&mut self, id: &str) -> ClientResult<Invoice> {
        self.get(&format!("api/invoices/{}", id)).await
    }

    pub async fn create_invoice(&mut self, payload: &InvoiceCreate) -> ClientResult<Invoice> {
        self.post("api/invoices", payload).await
    }

    /// Cancel a pending invoice
    pub async fn cancel_invoice(&mut self, id: &str) -> ClientResult<Invoice> {
        self.put(
            &format!("api/invoices/{}/status", id),
            &InvoiceStatusUpdate {
                payment_status: InvoicePaymentStatus::Cancelled,
            },
        )
        .await
    }

    // ========== Payments API ==========

    pub async fn payments(&mut self) -> ClientResult<Vec<Payment>> {
        self.get_collection("api/payments").await
    }

    pub async fn payment(&mut self, id: &str) -> ClientResult<Payment> {
        self.get(&format!("api/payments/{}", id)).await
    }

    pub async fn payments_for_invoice(&mut self, invoice_id: &str) -> ClientResult<Vec<Payment>> {
        self.get_collection(&format!("api/payments/invoice/{}", invoice_id))
            .await
    }

    pub async fn record_payment(&mut self, payload: &PaymentCreate) -> ClientResult<Payment> {
        self.post("api/payments", payload).await
    }

    pub async fn cancel_payment(&mut self, id: &str) -> ClientResult<Payment> {
        self.put_empty(&format!("api/payments/{}/cancel", id)).await
    }
}
