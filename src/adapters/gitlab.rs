use crate::core::{ConfigProvider, Result, User, UserSource};
use crate::utils::error::DomainsError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

const API_PREFIX: &str = "/api/v4";
const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// 無法解析或非 HTTP 的位址視為連線失敗，而非設定缺失
fn parse_endpoint(gitlab_url: &str) -> Result<String> {
    let invalid = |reason: String| DomainsError::InvalidEndpointError {
        url: gitlab_url.to_string(),
        reason,
    };

    let url = Url::parse(gitlab_url).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(format!("{}{}", url.as_str().trim_end_matches('/'), API_PREFIX)),
        scheme => Err(invalid(format!("Unsupported URL scheme: {}", scheme))),
    }
}

/// GitLab REST v4 client authenticated with a private token.
///
/// TLS certificate verification is disabled so that self-hosted instances
/// with internal certificates can be queried.
pub struct GitLabClient {
    client: Client,
    api_base: String,
    token: String,
}

impl GitLabClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let api_base = parse_endpoint(config.gitlab_url())?;
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(DomainsError::ConnectivityError)?;

        Ok(Self {
            client,
            api_base,
            token: config.token().to_string(),
        })
    }

    /// Builds the client and checks the credential before handing it out.
    pub async fn connect<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Self::new(config)?;
        let user = client.authenticate().await?;
        tracing::info!("✅ Successfully connected to GitLab as {}!", user.username);
        Ok(client)
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<(StatusCode, Option<T>)> {
        tracing::debug!("Making API request to: {} {:?}", url, query);
        let response = self
            .client
            .get(url)
            .header(TOKEN_HEADER, &self.token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Ok((status, None));
        }

        let body = response.text().await?;
        Ok((status, Some(serde_json::from_str(&body)?)))
    }
}

#[async_trait]
impl UserSource for GitLabClient {
    async fn authenticate(&self) -> Result<User> {
        let url = self.endpoint("/user");
        let (status, user) = self.get_json::<User>(&url, &[]).await.map_err(|e| match e {
            DomainsError::HttpError(source) => DomainsError::ConnectivityError(source),
            other => other,
        })?;

        match (status, user) {
            (_, Some(user)) => Ok(user),
            (StatusCode::UNAUTHORIZED, None) => Err(DomainsError::AuthenticationError {
                url,
                message: status.to_string(),
            }),
            (status, None) => Err(DomainsError::ApiError {
                status: status.as_u16(),
                url,
            }),
        }
    }

    async fn list_users(&self, per_page: u32, page: u32) -> Result<Vec<User>> {
        let url = self.endpoint("/users");
        let query = [("per_page", per_page.to_string()), ("page", page.to_string())];

        match self.get_json::<Vec<User>>(&url, &query).await? {
            (_, Some(users)) => Ok(users),
            (status, None) => Err(DomainsError::ApiError {
                status: status.as_u16(),
                url,
            }),
        }
    }
}
