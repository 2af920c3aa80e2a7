//! Link management service
//!
//! Provides unified business logic for link operations, shared between
//! the HTTP handlers and the CLI.

use std::sync::Arc;

use tracing::{debug, info, trace, warn};

use crate::config::FeaturesConfig;
use crate::errors::ShortlinkError;
use crate::storage::{LinkPatch, LinkStore, NewLink, ShortLink};
use crate::utils::generate_random_code;
use crate::utils::url_validator::validate_url;

// ============ User-facing messages ============

pub const INVALID_URL_MESSAGE: &str = "Invalid URL format.";
pub const CUSTOM_CODE_TAKEN_MESSAGE: &str = "Custom short URL already taken.";
pub const SHORT_URL_TAKEN_MESSAGE: &str = "This short URL is already taken.";
pub const LINK_NOT_FOUND_MESSAGE: &str = "Short link not found.";

// ============ Request/Response DTOs ============

/// Request to create a new link
#[derive(Debug, Clone, Default)]
pub struct CreateLinkRequest {
    /// Destination URL, must be an absolute URI
    pub original_url: String,
    /// Caller-chosen short code; generated when absent or empty
    pub custom_short_url: Option<String>,
}

/// Request to update an existing link
///
/// Empty strings are treated the same as absent fields.
#[derive(Debug, Clone, Default)]
pub struct UpdateLinkRequest {
    /// New destination URL (not re-validated)
    pub original_url: Option<String>,
    /// New short code
    pub new_short_url: Option<String>,
}

/// Result of link creation
#[derive(Debug, Clone)]
pub struct LinkCreateResult {
    /// The created link
    pub link: ShortLink,
    /// Whether the code was auto-generated
    pub generated_code: bool,
}

// ============ LinkService Implementation ============

/// Service for link management operations
///
/// Holds nothing but the injected store handle and immutable settings, so a
/// single instance is shared by all workers.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
    random_code_length: usize,
    max_generate_attempts: u32,
}

impl LinkService {
    /// Create a new LinkService instance
    pub fn new(store: Arc<dyn LinkStore>, features: &FeaturesConfig) -> Self {
        Self {
            store,
            random_code_length: features.random_code_length.max(1),
            max_generate_attempts: features.max_generate_attempts.max(1),
        }
    }

    pub fn backend_name(&self) -> &str {
        self.store.backend_name()
    }

    // ============ CRUD Operations ============

    /// Create a new short link
    pub async fn create_link(
        &self,
        req: CreateLinkRequest,
    ) -> Result<LinkCreateResult, ShortlinkError> {
        if let Err(e) = validate_url(&req.original_url) {
            debug!(
                "LinkService: rejected original URL '{}': {}",
                req.original_url, e
            );
            return Err(ShortlinkError::validation(INVALID_URL_MESSAGE));
        }

        let result = match req.custom_short_url.filter(|c| !c.is_empty()) {
            Some(code) => LinkCreateResult {
                link: self.insert_custom(code, req.original_url).await?,
                generated_code: false,
            },
            None => LinkCreateResult {
                link: self.insert_generated(req.original_url).await?,
                generated_code: true,
            },
        };

        info!(
            "LinkService: created link '{}' -> '{}'",
            result.link.short_code, result.link.original_url
        );
        Ok(result)
    }

    async fn insert_custom(
        &self,
        code: String,
        original_url: String,
    ) -> Result<ShortLink, ShortlinkError> {
        if self.store.find_by_code(&code).await?.is_some() {
            warn!("LinkService: custom code already taken: {}", code);
            return Err(ShortlinkError::conflict(CUSTOM_CODE_TAKEN_MESSAGE));
        }

        // 并发创建同一短码时，由存储层唯一索引拒绝后到者
        self.store
            .insert(NewLink {
                short_code: code,
                original_url,
            })
            .await
            .map_err(|e| match e {
                ShortlinkError::Conflict(_) => ShortlinkError::conflict(CUSTOM_CODE_TAKEN_MESSAGE),
                other => other,
            })
    }

    async fn insert_generated(&self, original_url: String) -> Result<ShortLink, ShortlinkError> {
        for attempt in 1..=self.max_generate_attempts {
            let code = generate_random_code(self.random_code_length);

            if self.store.find_by_code(&code).await?.is_some() {
                debug!(
                    "LinkService: generated code '{}' collided (attempt {})",
                    code, attempt
                );
                continue;
            }

            match self
                .store
                .insert(NewLink {
                    short_code: code.clone(),
                    original_url: original_url.clone(),
                })
                .await
            {
                Ok(link) => return Ok(link),
                Err(ShortlinkError::Conflict(_)) => {
                    debug!(
                        "LinkService: generated code '{}' lost an insert race (attempt {})",
                        code, attempt
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Err(ShortlinkError::internal(format!(
            "Failed to generate a unique short code after {} attempts",
            self.max_generate_attempts
        )))
    }

    /// List every link, oldest first
    pub async fn list_links(&self) -> Result<Vec<ShortLink>, ShortlinkError> {
        let links = self.store.find_all().await?;
        trace!("LinkService: listed {} links", links.len());
        Ok(links)
    }

    /// Resolve a short code for redirection
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, ShortlinkError> {
        match self.store.find_by_code(code).await? {
            Some(link) => {
                trace!("LinkService: resolved '{}' -> '{}'", code, link.original_url);
                Ok(link)
            }
            None => {
                debug!("LinkService: short code not found: {}", code);
                Err(ShortlinkError::not_found(LINK_NOT_FOUND_MESSAGE))
            }
        }
    }

    /// Update an existing link
    ///
    /// A rejected rename leaves the record untouched.
    pub async fn update_link(
        &self,
        code: &str,
        req: UpdateLinkRequest,
    ) -> Result<ShortLink, ShortlinkError> {
        let existing = self
            .store
            .find_by_code(code)
            .await?
            .ok_or_else(|| ShortlinkError::not_found(LINK_NOT_FOUND_MESSAGE))?;

        let mut patch = LinkPatch::default();

        if let Some(new_code) = req.new_short_url.filter(|c| !c.is_empty() && c != code) {
            if self.store.find_by_code(&new_code).await?.is_some() {
                warn!(
                    "LinkService: cannot rename '{}', '{}' is already taken",
                    code, new_code
                );
                return Err(ShortlinkError::conflict(SHORT_URL_TAKEN_MESSAGE));
            }
            patch.short_code = Some(new_code);
        }

        if let Some(original_url) = req.original_url.filter(|u| !u.is_empty()) {
            patch.original_url = Some(original_url);
        }

        let updated = self
            .store
            .update(&existing.id, patch)
            .await
            .map_err(|e| match e {
                ShortlinkError::Conflict(_) => ShortlinkError::conflict(SHORT_URL_TAKEN_MESSAGE),
                ShortlinkError::NotFound(_) => ShortlinkError::not_found(LINK_NOT_FOUND_MESSAGE),
                other => other,
            })?;

        info!(
            "LinkService: updated '{}' -> '{}' ({})",
            code, updated.short_code, updated.original_url
        );
        Ok(updated)
    }

    /// Delete a link
    pub async fn delete_link(&self, code: &str) -> Result<(), ShortlinkError> {
        self.store.delete_by_code(code).await.map_err(|e| match e {
            ShortlinkError::NotFound(_) => ShortlinkError::not_found(LINK_NOT_FOUND_MESSAGE),
            other => other,
        })?;

        info!("LinkService: deleted '{}'", code);
        Ok(())
    }
}
