use crate::config::FrontendConfig;
use crate::storage;
use once_cell::unsync::OnceCell;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    AuthResponse, Campaign, CampaignQuery, Comment, CreateCampaignRequest, CreateCommentRequest,
    CreateDonationRequest, CreateExpenseReport, CreateIssueRequest, DashboardStats,
    DeleteCommentRequest, Donation, DonationQuery, ErrorResponse, Issue, IssueId, IssueQuery,
    IssueStats, ListResponse, LoginRequest, RefreshRequest, RefreshResponse, RegisterRequest,
    TransparencyReport, TransparencySummary, UpdateStatusRequest, User, VoteResponse,
};
use shared::session::Session;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use wasm_bindgen_futures::JsFuture;
use yew::Callback;

const GENERIC_FAILURE: &str = "An error occurred";

thread_local! {
    static SHARED_CLIENT: OnceCell<SudhaarClient> = OnceCell::new();
}

/// Backend paths, relative to the API origin.
pub mod endpoints {
    pub const LOGIN: &str = "api/auth/login/";
    pub const REGISTER: &str = "api/auth/register/";
    pub const REFRESH: &str = "api/auth/refresh/";
    pub const USER_ME: &str = "api/users/me/";
    pub const ISSUES: &str = "api/issues/";
    pub const ISSUE_STATS: &str = "api/issues/stats/";
    pub const CAMPAIGNS: &str = "api/campaigns/";
    pub const DONATIONS: &str = "api/donations/";
    pub const TRANSPARENCY_REPORTS: &str = "api/transparency-reports/";
    pub const TRANSPARENCY_SUMMARY: &str = "api/transparency/summary/";
    pub const DASHBOARD_STATS: &str = "api/dashboard/stats/";

    /// `api/issues/{id}/{action}/`, or the issue itself when `action` is empty.
    pub fn issue(id: i64, action: &str) -> String {
        if action.is_empty() {
            format!("{ISSUES}{id}/")
        } else {
            format!("{ISSUES}{id}/{action}/")
        }
    }

    /// `api/campaigns/{id}/{action}/`, or the campaign itself when `action` is empty.
    pub fn campaign(id: i64, action: &str) -> String {
        if action.is_empty() {
            format!("{CAMPAIGNS}{id}/")
        } else {
            format!("{CAMPAIGNS}{id}/{action}/")
        }
    }
}

/// Failures surfaced by [`SudhaarClient`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error. Please check your connection.")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The body could not be read or parsed.
    #[error("Failed to parse response")]
    Decode(String),
    /// The token expired and could not be refreshed.
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
}

impl ApiError {
    /// Build a status error from a raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            message: ErrorResponse::from_body(body, GENERIC_FAILURE).message,
        }
    }

    /// Banner text for this failure.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// HTTP status, when the backend answered.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Unauthorized => Some(401),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Network(error.to_string())
        }
    }
}

/// A file picked in the browser, read into memory for a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Read a browser `File` into memory.
    pub async fn from_file(file: &web_sys::File) -> Result<Self, ApiError> {
        let buffer = JsFuture::from(file.array_buffer())
            .await
            .map_err(|_| ApiError::Decode(format!("Unable to read {}", file.name())))?;
        Ok(Self {
            file_name: file.name(),
            mime: file.type_(),
            bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
        })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn part(&self) -> Part {
        let bare = || Part::bytes(self.bytes.clone()).file_name(self.file_name.clone());
        if self.mime.is_empty() {
            return bare();
        }
        bare().mime_str(&self.mime).unwrap_or_else(|_| bare())
    }
}

/// Multipart body from text fields plus an optional file part.
fn multipart(fields: &[(&'static str, String)], file_field: &'static str, upload: Option<&Upload>) -> Form {
    let form = fields
        .iter()
        .fold(Form::new(), |form, (name, value)| form.text(*name, value.clone()));
    match upload {
        Some(upload) => form.part(file_field, upload.part()),
        None => form,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Tokens {
    access: String,
    refresh: String,
}

/// REST client for the Sudhaar backend.
#[derive(Clone, Debug)]
pub struct SudhaarClient {
    base_url: String,
    client: Client,
    tokens: Arc<Mutex<Option<Tokens>>>,
    on_expired: Rc<RefCell<Option<Callback<()>>>>,
}

impl SudhaarClient {
    /// Create a new API client with the provided backend origin.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            tokens: Arc::new(Mutex::new(None)),
            on_expired: Rc::new(RefCell::new(None)),
        }
    }

    /// The per-thread client, primed with any stored session.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let client = Self::new(FrontendConfig::new().api_base_url());
                client.set_session(storage::load_session().as_ref());
                client
            })
            .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Adopt (or drop) the tokens of a session.
    pub fn set_session(&self, session: Option<&Session>) {
        if let Ok(mut guard) = self.tokens.lock() {
            *guard = session.map(|session| Tokens {
                access: session.access.clone(),
                refresh: session.refresh.clone(),
            });
        }
    }

    /// Called once the session can no longer be refreshed.
    pub fn on_session_expired(&self, callback: Callback<()>) {
        *self.on_expired.borrow_mut() = Some(callback);
    }

    pub(crate) fn notify_expired(&self) {
        let listener = self.on_expired.borrow().clone();
        if let Some(callback) = listener {
            callback.emit(());
        }
    }

    fn tokens(&self) -> Option<Tokens> {
        self.tokens.lock().ok().and_then(|guard| guard.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.tokens().is_some_and(|tokens| !tokens.access.is_empty())
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens() {
            Some(tokens) if !tokens.access.is_empty() => request.bearer_auth(tokens.access),
            _ => request,
        }
    }

    /// Send an authorized request; on `401` refresh the access token once and
    /// replay. A failed refresh signs the user out.
    async fn send_with_refresh<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: Fn() -> RequestBuilder,
    {
        let response = self.authorize(build()).send().await?;
        let can_refresh = self.tokens().is_some_and(|tokens| !tokens.refresh.is_empty());
        if response.status() != StatusCode::UNAUTHORIZED || !can_refresh {
            return Ok(response);
        }
        drop(response);
        if self.refresh_session().await.is_err() {
            self.logout();
            self.notify_expired();
            return Err(ApiError::Unauthorized);
        }
        Ok(self.authorize(build()).send().await?)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(|error| ApiError::Decode(error.to_string()))
    }

    async fn read_empty(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await?;
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.api_url(path);
        let response = self
            .send_with_refresh(move || self.client.get(url.clone()))
            .await?;
        Self::read_json(response).await
    }

    async fn get_list<T, Q>(&self, path: &str, query: &Q) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
        Q: serde::Serialize,
    {
        let url = self.api_url(path);
        let response = self
            .send_with_refresh(move || self.client.get(url.clone()).query(query))
            .await?;
        Self::read_json::<ListResponse<T>>(response)
            .await
            .map(ListResponse::into_items)
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: serde::Serialize,
    {
        let url = self.api_url(path);
        let response = self
            .send_with_refresh(move || self.client.post(url.clone()).json(body))
            .await?;
        Self::read_json(response).await
    }

    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&'static str, String)],
        file_field: &'static str,
        upload: Option<&Upload>,
    ) -> Result<T, ApiError> {
        let url = self.api_url(path);
        let response = self
            .send_with_refresh(move || {
                self.client
                    .post(url.clone())
                    .multipart(multipart(fields, file_field, upload))
            })
            .await?;
        Self::read_json(response).await
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let response = self
            .client
            .post(self.api_url(endpoints::LOGIN))
            .json(payload)
            .send()
            .await?;
        let body: AuthResponse = Self::read_json(response).await?;
        self.set_session(Some(&Session::from(body.clone())));
        Ok(body)
    }

    /// Create an account. The caller signs in separately; the returned tokens
    /// are not adopted.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let response = self
            .client
            .post(self.api_url(endpoints::REGISTER))
            .json(payload)
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// Exchange the refresh token for a new access token.
    pub async fn refresh_session(&self) -> Result<(), ApiError> {
        let refresh = self
            .tokens()
            .map(|tokens| tokens.refresh)
            .filter(|refresh| !refresh.is_empty())
            .ok_or(ApiError::Unauthorized)?;
        let response = self
            .client
            .post(self.api_url(endpoints::REFRESH))
            .json(&RefreshRequest { refresh })
            .send()
            .await?;
        let body: RefreshResponse = Self::read_json(response).await?;
        if let Ok(mut guard) = self.tokens.lock() {
            if let Some(tokens) = guard.as_mut() {
                tokens.access.clone_from(&body.access);
            }
        }
        storage::save_access_token(&body.access);
        Ok(())
    }

    /// Forget the tokens held by this client.
    pub fn logout(&self) {
        self.set_session(None);
        storage::clear_session();
    }

    /// The signed-in user's profile.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get_json(endpoints::USER_ME).await
    }

    /// List issues matching `query`.
    pub async fn list_issues(&self, query: &IssueQuery) -> Result<Vec<Issue>, ApiError> {
        self.get_list(endpoints::ISSUES, query).await
    }

    #[allow(dead_code)] // Pages read issues from the feed listing
    pub async fn get_issue(&self, id: IssueId) -> Result<Issue, ApiError> {
        self.get_json(&endpoints::issue(id, "")).await
    }

    /// File a new report. Sent as multipart so the photo and decimal
    /// coordinates travel in one request.
    pub async fn create_issue(
        &self,
        payload: &CreateIssueRequest,
        photo: Option<&Upload>,
    ) -> Result<Issue, ApiError> {
        self.post_multipart(endpoints::ISSUES, &payload.form_fields(), "image", photo)
            .await
    }

    pub async fn upvote(&self, id: IssueId) -> Result<VoteResponse, ApiError> {
        self.post_json(&endpoints::issue(id, "upvote"), &serde_json::json!({}))
            .await
    }

    pub async fn remove_upvote(&self, id: IssueId) -> Result<VoteResponse, ApiError> {
        self.post_json(&endpoints::issue(id, "remove_upvote"), &serde_json::json!({}))
            .await
    }

    /// Comment thread of an issue, newest first.
    pub async fn comments(&self, id: IssueId) -> Result<Vec<Comment>, ApiError> {
        self.get_list(&endpoints::issue(id, "comments"), &())
            .await
    }

    pub async fn post_comment(
        &self,
        id: IssueId,
        payload: &CreateCommentRequest,
    ) -> Result<Comment, ApiError> {
        self.post_json(&endpoints::issue(id, "comments"), payload)
            .await
    }

    pub async fn delete_comment(
        &self,
        id: IssueId,
        payload: &DeleteCommentRequest,
    ) -> Result<(), ApiError> {
        let url = self.api_url(&endpoints::issue(id, "delete_comment"));
        let response = self
            .send_with_refresh(move || self.client.post(url.clone()).json(payload))
            .await?;
        Self::read_empty(response).await
    }

    /// Move an issue to a new status. Officials only.
    pub async fn update_status(
        &self,
        id: IssueId,
        payload: &UpdateStatusRequest,
    ) -> Result<Issue, ApiError> {
        self.post_json(&endpoints::issue(id, "update_status"), payload)
            .await
    }

    pub async fn issue_stats(&self) -> Result<IssueStats, ApiError> {
        self.get_json(endpoints::ISSUE_STATS).await
    }

    /// Campaigns visible to the caller. NGOs only see their own.
    pub async fn list_campaigns(&self, query: &CampaignQuery) -> Result<Vec<Campaign>, ApiError> {
        self.get_list(endpoints::CAMPAIGNS, query).await
    }

    pub async fn get_campaign(&self, id: i64) -> Result<Campaign, ApiError> {
        self.get_json(&endpoints::campaign(id, "")).await
    }

    /// Launch a campaign with its banner image.
    pub async fn create_campaign(
        &self,
        payload: &CreateCampaignRequest,
        banner: &Upload,
    ) -> Result<Campaign, ApiError> {
        self.post_multipart(endpoints::CAMPAIGNS, &payload.form_fields(), "image", Some(banner))
            .await
    }

    pub async fn delete_campaign(&self, id: i64) -> Result<(), ApiError> {
        let url = self.api_url(&endpoints::campaign(id, ""));
        let response = self
            .send_with_refresh(move || self.client.delete(url.clone()))
            .await?;
        Self::read_empty(response).await
    }

    pub async fn campaign_donations(&self, id: i64) -> Result<Vec<Donation>, ApiError> {
        self.get_list(&endpoints::campaign(id, "donations"), &())
            .await
    }

    /// The caller's donations.
    #[allow(dead_code)] // No donation history page yet
    pub async fn list_donations(&self, query: &DonationQuery) -> Result<Vec<Donation>, ApiError> {
        self.get_list(endpoints::DONATIONS, query).await
    }

    pub async fn create_donation(
        &self,
        payload: &CreateDonationRequest,
    ) -> Result<Donation, ApiError> {
        self.post_json(endpoints::DONATIONS, payload).await
    }

    pub async fn transparency_reports(&self) -> Result<Vec<TransparencyReport>, ApiError> {
        self.get_list(endpoints::TRANSPARENCY_REPORTS, &())
            .await
    }

    /// Publish an expense disclosure with an optional receipt photo.
    pub async fn create_expense_report(
        &self,
        payload: &CreateExpenseReport,
        receipt: Option<&Upload>,
    ) -> Result<TransparencyReport, ApiError> {
        self.post_multipart(
            endpoints::TRANSPARENCY_REPORTS,
            &payload.form_fields(),
            "receipt_image",
            receipt,
        )
        .await
    }

    pub async fn transparency_summary(&self) -> Result<TransparencySummary, ApiError> {
        self.get_json(endpoints::TRANSPARENCY_SUMMARY).await
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json(endpoints::DASHBOARD_STATS).await
    }
}
