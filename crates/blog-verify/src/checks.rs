use std::io::{self, Write};

use blog_api::{BlogClient, BlogQuery, HealthStatus};
use tracing::{debug, warn};

use crate::report;

/// One request against the blog API and the report printed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// `GET /api/health`
    Health,
    /// `GET /api/blogs`
    Blogs,
    /// `GET /api/blogs/{slug}`
    Blog(String),
}

/// Run a single check and write its report to `out`.
///
/// Request failures end up in the report; only a failing writer is an error.
pub async fn run<W: Write>(
    client: &BlogClient,
    check: &Check,
    query: &BlogQuery,
    out: &mut W,
) -> io::Result<()> {
    debug!(?check, "running check");
    match check {
        Check::Health => {
            let result = client.health().await;
            match &result {
                Ok(resp) => {
                    let healthy = serde_json::from_value::<HealthStatus>(resp.body.clone())
                        .is_ok_and(|h| h.is_healthy(resp.status));
                    debug!(status = resp.status, healthy, "health payload received");
                }
                Err(e) => warn!(error = %e, "health request failed"),
            }
            report::write_health(out, result)
        }
        Check::Blogs => {
            let result = client.list_blogs(query).await;
            if let Err(e) = &result {
                warn!(error = %e, "blog listing failed");
            }
            report::write_blogs(out, result)
        }
        Check::Blog(slug) => {
            let result = client.get_blog(slug).await;
            if let Err(e) = &result {
                warn!(error = %e, %slug, "blog lookup failed");
            }
            report::write_blog(out, slug, result)
        }
    }
}

/// Run `checks` one after another, in order.
pub async fn run_all<W: Write>(
    client: &BlogClient,
    checks: &[Check],
    query: &BlogQuery,
    out: &mut W,
) -> io::Result<()> {
    for check in checks {
        run(client, check, query, out).await?;
    }
    out.flush()
}
