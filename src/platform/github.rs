//! GitHub platform service implementation

use crate::auth::Credential;
use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{PullRequest, PullRequestDescriptor};
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::{debug, instrument};

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `host` selects a GitHub Enterprise instance (`https://{host}/api/v3`).
    pub fn new(credential: &Credential, host: Option<&str>) -> Result<Self> {
        match host {
            Some(h) => Self::with_base_url(credential, &format!("https://{h}/api/v3")),
            None => {
                let client = Octocrab::builder()
                    .personal_token(credential.token().to_string())
                    .build()
                    .map_err(|e| Error::GitHubApi(e.to_string()))?;
                Ok(Self { client })
            }
        }
    }

    /// Create a service talking to an explicit API base URL
    pub fn with_base_url(credential: &Credential, base_url: &str) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(credential.token().to_string())
            .base_uri(base_url)
            .map_err(|e| Error::GitHubApi(e.to_string()))?
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self { client })
    }

    /// Login of the authenticated user
    pub async fn current_user(&self) -> Result<String> {
        let user = self
            .client
            .current()
            .user()
            .await
            .map_err(|e| Error::GitHubApi(e.to_string()))?;
        Ok(user.login)
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    #[instrument(skip_all, fields(owner = %pr.owner, repo = %pr.repo, head = %pr.head_branch))]
    async fn create_pr(&self, pr: &PullRequestDescriptor) -> Result<PullRequest> {
        let created = self
            .client
            .pulls(&pr.owner, &pr.repo)
            .create(&pr.title, &pr.head_branch, &pr.base_branch)
            .body(&pr.body)
            .send()
            .await
            .map_err(|e| Error::PullRequestCreate {
                head: pr.head_branch.clone(),
                base: pr.base_branch.clone(),
                source: Box::new(e),
            })?;

        debug!(number = created.number, "pull request created");

        Ok(PullRequest {
            number: created.number,
            html_url: created
                .html_url
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            base_ref: created.base.ref_field.clone(),
            head_ref: created.head.ref_field.clone(),
            title: created.title.as_deref().unwrap_or_default().to_string(),
        })
    }
}
