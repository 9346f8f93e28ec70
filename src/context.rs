//! Task-local request context.
//!
//! Every inbound request gets exactly one `RequestContext`, established by the
//! request-id middleware before any route logic runs and dropped when the
//! response future completes. Handlers, the error serializer, and the outbound
//! client read it through the free functions below; concurrent requests never
//! see each other's context because the storage is task-local, not global.

use std::future::Future;
use std::sync::{Arc, OnceLock};

/// Per-request correlation state.
///
/// The request id is fixed at creation. The user id slot starts empty and is
/// written at most once by the authentication extractor; a second write is
/// ignored.
#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: Arc<str>,
    user_id: Arc<OnceLock<String>>,
}

impl RequestContext {
    pub fn new(request_id: String) -> Self {
        Self {
            request_id: request_id.into(),
            user_id: Arc::new(OnceLock::new()),
        }
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.get().map(String::as_str)
    }

    /// Write-once. Returns false (and keeps the first value) on a repeat write.
    pub fn set_user_id(&self, user_id: &str) -> bool {
        self.user_id.set(user_id.to_string()).is_ok()
    }
}

tokio::task_local! {
    static CURRENT: RequestContext;
}

/// Run a future with `ctx` as the current request context.
///
/// Called by the request-id middleware around the rest of the handler chain.
pub async fn scope<F, T>(ctx: RequestContext, fut: F) -> T
where
    F: Future<Output = T>,
{
    CURRENT.scope(ctx, fut).await
}

/// The current request's context, if one is established.
///
/// Inside the handler chain this is always `Some` because the middleware is
/// unconditional; `None` only happens outside a request (startup, tests).
pub fn try_current() -> Option<RequestContext> {
    CURRENT.try_with(RequestContext::clone).ok()
}

/// The current request id, if inside a request scope.
pub fn request_id() -> Option<String> {
    CURRENT.try_with(|ctx| ctx.request_id().to_string()).ok()
}

/// Record the authenticated user on the current context.
///
/// No-op outside a request scope. A second write within the same request is
/// ignored and logged at debug level.
pub fn set_user_id(user_id: &str) {
    if let Some(ctx) = try_current() {
        if !ctx.set_user_id(user_id) {
            tracing::debug!(user_id, "user id already set on request context, ignoring");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_context_outside_scope() {
        assert!(try_current().is_none());
        assert!(request_id().is_none());
    }

    #[tokio::test]
    async fn request_id_visible_inside_scope() {
        let ctx = RequestContext::new("11111111-2222-4333-8444-555555555555".to_string());

        scope(ctx, async {
            assert_eq!(
                request_id().as_deref(),
                Some("11111111-2222-4333-8444-555555555555")
            );
        })
        .await;

        assert!(request_id().is_none());
    }

    #[tokio::test]
    async fn user_id_writes_once() {
        let ctx = RequestContext::new("11111111-2222-4333-8444-555555555555".to_string());

        scope(ctx, async {
            set_user_id("alice");
            set_user_id("mallory");

            let ctx = try_current().unwrap();
            assert_eq!(ctx.user_id(), Some("alice"));
        })
        .await;
    }

    #[tokio::test]
    async fn concurrent_scopes_are_isolated() {
        let a = tokio::spawn(scope(
            RequestContext::new("aaaaaaaa-aaaa-4aaa-8aaa-aaaaaaaaaaaa".to_string()),
            async {
                tokio::task::yield_now().await;
                request_id()
            },
        ));
        let b = tokio::spawn(scope(
            RequestContext::new("bbbbbbbb-bbbb-4bbb-8bbb-bbbbbbbbbbbb".to_string()),
            async {
                tokio::task::yield_now().await;
                request_id()
            },
        ));

        assert_eq!(
            a.await.unwrap().as_deref(),
            Some("aaaaaaaa-aaaa-4aaa-8aaa-aaaaaaaaaaaa")
        );
        assert_eq!(
            b.await.unwrap().as_deref(),
            Some("bbbbbbbb-bbbb-4bbb-8bbb-bbbbbbbbbbbb")
        );
    }
}
