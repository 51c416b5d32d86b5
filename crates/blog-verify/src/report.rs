//! Console reports for each check.
//!
//! Every writer takes the raw request outcome and prints it; request errors
//! become an `Error: ...` line rather than failing the run.

use std::io::{self, Write};

use blog_api::{ApiError, ApiResponse, Blog, Envelope};

pub type HealthResult = Result<ApiResponse<serde_json::Value>, ApiError>;
pub type BlogsResult = Result<ApiResponse<Envelope<Vec<Blog>>>, ApiError>;
pub type BlogResult = Result<ApiResponse<Envelope<Blog>>, ApiError>;

pub fn write_health<W: Write>(out: &mut W, result: HealthResult) -> io::Result<()> {
    writeln!(out, "Testing Health Check...")?;
    match result {
        Ok(resp) => {
            writeln!(out, "Status: {}", resp.status)?;
            writeln!(out, "Content: {}", resp.body)
        }
        Err(e) => write_error(out, &e),
    }
}

pub fn write_blogs<W: Write>(out: &mut W, result: BlogsResult) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Testing GET /api/blogs...")?;
    let resp = match result {
        Ok(resp) => resp,
        Err(e) => return write_error(out, &e),
    };
    writeln!(out, "Status: {}", resp.status)?;

    if !resp.body.success {
        return write_failure(out, resp.body.message.as_deref());
    }
    let (blogs, pagination) = match resp.body.into_page() {
        Ok(page) => page,
        Err(e) => return write_error(out, &e),
    };

    writeln!(out, "Found {} blogs", blogs.len())?;
    writeln!(out, "Total pagination count: {}", pagination.total)?;
    if let Some(first) = blogs.first() {
        let Some(title) = &first.title else {
            return write_error(out, &ApiError::MissingField("title"));
        };
        writeln!(out, "First blog title: {title}")?;
        let Some(slug) = &first.slug else {
            return write_error(out, &ApiError::MissingField("slug"));
        };
        writeln!(out, "First blog slug: {slug}")?;
    }
    Ok(())
}

pub fn write_blog<W: Write>(out: &mut W, slug: &str, result: BlogResult) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Testing GET /api/blogs/{slug}...")?;
    let resp = match result {
        Ok(resp) => resp,
        Err(e) => return write_error(out, &e),
    };
    writeln!(out, "Status: {}", resp.status)?;

    if !resp.body.success {
        return write_failure(out, resp.body.message.as_deref());
    }
    let blog = match resp.body.into_data() {
        Ok(blog) => blog,
        Err(e) => return write_error(out, &e),
    };

    writeln!(out, "Title: {}", blog.title.as_deref().unwrap_or("None"))?;
    writeln!(out, "   Category: {}", blog.category)?;
    writeln!(
        out,
        "   Featured: {}",
        if blog.featured { "Yes" } else { "No" }
    )?;
    writeln!(out, "   Image: {}", blog.image)?;
    writeln!(out, "   Read Time: {}", blog.read_time)
}

/// A body that failed to decode still arrived with a status, which is
/// printed ahead of the error.
fn write_error<W: Write>(out: &mut W, err: &ApiError) -> io::Result<()> {
    if let ApiError::Decode { status, .. } = err {
        writeln!(out, "Status: {status}")?;
    }
    writeln!(out, "Error: {err}")
}

fn write_failure<W: Write>(out: &mut W, message: Option<&str>) -> io::Result<()> {
    writeln!(out, "Failed: {}", message.unwrap_or("None"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_api::Pagination;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn blog(title: &str, slug: &str) -> Blog {
        serde_json::from_value(serde_json::json!({"title": title, "slug": slug})).unwrap()
    }

    fn envelope<T>(success: bool, data: Option<T>, total: Option<u64>) -> Envelope<T> {
        Envelope {
            success,
            data,
            pagination: total.map(|total| Pagination {
                total,
                page: 1,
                limit: 5,
                pages: 1,
            }),
            message: None,
        }
    }

    #[test]
    fn health_prints_status_and_compact_json() {
        let out = render(|w| {
            write_health(
                w,
                Ok(ApiResponse {
                    status: 200,
                    body: serde_json::json!({"success": true}),
                }),
            )
        });
        assert_eq!(
            out,
            "Testing Health Check...\nStatus: 200\nContent: {\"success\":true}\n"
        );
    }

    #[test]
    fn health_prints_error_line() {
        let out = render(|w| write_health(w, Err(ApiError::MissingField("data"))));
        assert_eq!(
            out,
            "Testing Health Check...\nError: response is missing the 'data' field\n"
        );
    }

    #[test]
    fn decode_error_prints_status_first() {
        let source = serde_json::from_str::<serde_json::Value>("Bad Gateway").unwrap_err();
        let out = render(|w| write_health(w, Err(ApiError::Decode { status: 502, source })));
        assert!(
            out.starts_with("Testing Health Check...\nStatus: 502\nError: API returned 502"),
            "got: {out}"
        );
    }

    #[test]
    fn blogs_counts_rows_when_later_rows_are_sparse() {
        let rows: Vec<Blog> = serde_json::from_value(serde_json::json!([
            {"title": "A", "slug": "a"},
            {"title": "B"},
            {"title": "C", "slug": "c", "image": null}
        ]))
        .unwrap();
        let body = envelope(true, Some(rows), Some(3));
        let out = render(|w| write_blogs(w, Ok(ApiResponse { status: 200, body })));
        assert!(
            out.ends_with(
                "Found 3 blogs\nTotal pagination count: 3\n\
                 First blog title: A\nFirst blog slug: a\n"
            ),
            "got: {out}"
        );
    }

    #[test]
    fn blogs_first_row_without_slug_is_an_error_line() {
        let first = Blog {
            title: Some("A".into()),
            ..Blog::default()
        };
        let body = envelope(true, Some(vec![first]), Some(1));
        let out = render(|w| write_blogs(w, Ok(ApiResponse { status: 200, body })));
        assert!(out.ends_with(
            "First blog title: A\nError: response is missing the 'slug' field\n"
        ));
    }

    #[test]
    fn blogs_prints_first_entry() {
        let body = envelope(
            true,
            Some(vec![blog("Hello", "hello"), blog("Second", "second")]),
            Some(7),
        );
        let out = render(|w| write_blogs(w, Ok(ApiResponse { status: 200, body })));
        assert_eq!(
            out,
            "\nTesting GET /api/blogs...\nStatus: 200\nFound 2 blogs\n\
             Total pagination count: 7\nFirst blog title: Hello\nFirst blog slug: hello\n"
        );
    }

    #[test]
    fn blogs_skips_first_entry_when_empty() {
        let body = envelope(true, Some(Vec::new()), Some(0));
        let out = render(|w| write_blogs(w, Ok(ApiResponse { status: 200, body })));
        assert!(out.ends_with("Found 0 blogs\nTotal pagination count: 0\n"));
        assert!(!out.contains("First blog"));
    }

    #[test]
    fn blogs_prints_failure_message() {
        let mut body = envelope::<Vec<Blog>>(false, None, None);
        body.message = Some("db down".into());
        let out = render(|w| write_blogs(w, Ok(ApiResponse { status: 500, body })));
        assert!(out.ends_with("Status: 500\nFailed: db down\n"));
    }

    #[test]
    fn blogs_failure_without_message_prints_none() {
        let body = envelope::<Vec<Blog>>(false, None, None);
        let out = render(|w| write_blogs(w, Ok(ApiResponse { status: 400, body })));
        assert!(out.ends_with("Failed: None\n"));
    }

    #[test]
    fn blogs_missing_pagination_is_an_error_line() {
        let body = envelope(true, Some(vec![blog("Hello", "hello")]), None);
        let out = render(|w| write_blogs(w, Ok(ApiResponse { status: 200, body })));
        assert!(out.ends_with("Status: 200\nError: response is missing the 'pagination' field\n"));
    }

    #[test]
    fn blog_prints_detail_fields() {
        let mut post = blog("Hello", "hello");
        post.category = "News".into();
        post.featured = true;
        post.image = "cargo".into();
        post.read_time = "5 min read".into();
        let body = envelope(true, Some(post), None);
        let out = render(|w| write_blog(w, "hello", Ok(ApiResponse { status: 200, body })));
        assert_eq!(
            out,
            "\nTesting GET /api/blogs/hello...\nStatus: 200\nTitle: Hello\n   Category: News\n   \
             Featured: Yes\n   Image: cargo\n   Read Time: 5 min read\n"
        );
    }
}
