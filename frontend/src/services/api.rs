use gloo::net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    EntryResource, LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserProfile,
};

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    fn collection_url<R: EntryResource>(&self) -> String {
        format!("{}/api/{}", self.base_url, R::COLLECTION)
    }

    fn entry_url<R: EntryResource>(&self, id: &str) -> String {
        format!("{}/api/{}/{}", self.base_url, R::COLLECTION, id)
    }

    /// Download link for the spreadsheet export of a collection
    pub fn csv_url<R: EntryResource>(&self) -> String {
        format!("{}/api/reports/{}/csv", self.base_url, R::COLLECTION)
    }

    pub async fn list<R: EntryResource>(&self) -> Result<Vec<R::Entry>, String> {
        let response = Request::get(&self.collection_url::<R>())
            .send()
            .await
            .map_err(|e| format!("Failed to fetch {}: {}", R::COLLECTION, e))?;
        read_json(response).await
    }

    /// A single entry by id
    pub async fn get<R: EntryResource>(&self, id: &str) -> Result<R::Entry, String> {
        let response = Request::get(&self.entry_url::<R>(id))
            .send()
            .await
            .map_err(|e| format!("Failed to fetch {} {}: {}", R::TITLE.to_lowercase(), id, e))?;
        read_json(response).await
    }

    pub async fn create<R: EntryResource>(&self, request: &R::Request) -> Result<R::Entry, String> {
        send_json(Request::post(&self.collection_url::<R>()), request).await
    }

    pub async fn update<R: EntryResource>(
        &self,
        id: &str,
        request: &R::Request,
    ) -> Result<R::Entry, String> {
        send_json(Request::put(&self.entry_url::<R>(id)), request).await
    }

    pub async fn delete<R: EntryResource>(&self, id: &str) -> Result<MessageResponse, String> {
        let response = Request::delete(&self.entry_url::<R>(id))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        read_json(response).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, String> {
        let url = format!("{}/api/users/register", self.base_url);
        send_json(Request::post(&url), request).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, String> {
        let url = format!("{}/api/users/login", self.base_url);
        send_json(Request::post(&url), request).await
    }

    /// Profile of the user the token belongs to
    pub async fn me(&self, token: &str) -> Result<UserProfile, String> {
        let url = format!("{}/api/users/me", self.base_url);
        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        read_json(response).await
    }
}

async fn send_json<B, T>(builder: RequestBuilder, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = builder
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    read_json(response).await
}

/// Decode a success body, or surface the server's `{message}` on failure
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e));
    }

    let status = response.status();
    match response.json::<MessageResponse>().await {
        Ok(body) => Err(body.message),
        Err(_) => Err(format!("Request failed with status {}", status)),
    }
}
