// ABOUTME: Page methods of the Telegraph API: create, edit, fetch, list, view counts and media upload.
// ABOUTME: Content is sent as JSON-encoded ContentNode arrays; uploads go out as multipart forms.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::request::{Request, RequestOption};
use crate::types::{ContentNode, Page, PageList, PageViews, UploadResponse};

/// Optional fields for createPage and editPage.
#[derive(Debug, Clone, Default)]
pub struct PageParams {
    /// Author name displayed below the title.
    pub author_name: String,
    /// Profile link opened from the author's name.
    pub author_url: String,
    /// Ask the server to include `content` in the returned page.
    pub return_content: bool,
}

/// Paging for getPageList.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageListParams {
    /// Sequential number of the first page to return.
    pub offset: Option<u32>,
    /// Number of pages to return (0-200, server default 50).
    pub limit: Option<u32>,
}

/// Time bucket for getViews. Each field requires the one before it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewsParams {
    /// 2000-2100
    pub year: Option<u32>,
    /// 1-12
    pub month: Option<u32>,
    /// 1-31
    pub day: Option<u32>,
    /// 0-24
    pub hour: Option<u32>,
}

fn page_request(
    endpoint: String,
    title: &str,
    content: &[ContentNode],
    params: Option<&PageParams>,
) -> Result<Request> {
    let mut req = Request::new(endpoint).secured();
    req.set_form_param("title", title);
    req.set_form_param("content", serde_json::to_string(content)?);
    if let Some(params) = params {
        req.set_form_param_if("author_name", &params.author_name);
        req.set_form_param_if("author_url", &params.author_url);
        if params.return_content {
            req.set_form_param("return_content", true);
        }
    }
    Ok(req)
}

/// Multipart field name for an uploaded file: hex SHA-256 of its path.
fn upload_field_name(path: &str) -> String {
    hex::encode(Sha256::digest(path.as_bytes()))
}

impl Client {
    /// Create a new page.
    pub async fn create_page(
        &self,
        title: &str,
        content: &[ContentNode],
        params: Option<&PageParams>,
        opts: &[RequestOption],
    ) -> Result<Page> {
        let req = page_request("createPage".to_string(), title, content, params)?;
        self.call_api(req, opts).await
    }

    /// Replace the title and content of an existing page.
    pub async fn edit_page(
        &self,
        path: &str,
        title: &str,
        content: &[ContentNode],
        params: Option<&PageParams>,
        opts: &[RequestOption],
    ) -> Result<Page> {
        let req = page_request(format!("editPage/{path}"), title, content, params)?;
        self.call_api(req, opts).await
    }

    /// Get a page by path.
    pub async fn get_page(
        &self,
        path: &str,
        return_content: bool,
        opts: &[RequestOption],
    ) -> Result<Page> {
        let mut req = Request::new(format!("getPage/{path}"));
        if return_content {
            req.set_form_param("return_content", true);
        }
        self.call_api(req, opts).await
    }

    /// List pages of the account, most recently created first.
    pub async fn get_page_list(
        &self,
        params: &PageListParams,
        opts: &[RequestOption],
    ) -> Result<PageList> {
        let mut req = Request::new("getPageList").secured();
        if let Some(offset) = params.offset {
            req.set_form_param("offset", offset);
        }
        if let Some(limit) = params.limit {
            req.set_form_param("limit", limit);
        }
        self.call_api(req, opts).await
    }

    /// Get the number of views of a page, in total or for one time bucket.
    pub async fn get_views(
        &self,
        path: &str,
        params: &ViewsParams,
        opts: &[RequestOption],
    ) -> Result<PageViews> {
        let mut req = Request::new(format!("getViews/{path}"));
        let buckets = [
            ("year", params.year),
            ("month", params.month),
            ("day", params.day),
            ("hour", params.hour),
        ];
        for (key, value) in buckets {
            if let Some(value) = value {
                req.set_form_param(key, value);
            }
        }
        self.call_api(req, opts).await
    }

    /// Upload local files and return their paths on the server
    /// (e.g. `/file/6a5b15e7eb4d7329ca7af.jpg`).
    pub async fn upload<P: AsRef<Path>>(
        &self,
        files: &[P],
        opts: &[RequestOption],
    ) -> Result<Vec<String>> {
        if files.is_empty() {
            return Err(Error::NoInputData);
        }

        let mut form = Form::new();
        for file in files {
            let file = file.as_ref();
            let name = file.to_string_lossy().into_owned();
            let data = tokio::fs::read(file).await?;
            debug!(file = %name, size = data.len(), "adding upload part");
            form = form.part(upload_field_name(&name), Part::bytes(data).file_name(name));
        }

        let req = self.prepare(Request::new("upload"), opts)?;
        let builder = self.post(&self.options().upload_url, &req).multipart(form);
        let body = self.send(builder).await?;

        let response: UploadResponse = serde_json::from_slice(&body)?;
        match response {
            UploadResponse::Files(files) => Ok(files.into_iter().map(|f| f.src).collect()),
            UploadResponse::Error { error } => Err(Error::api(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeElement;
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn client_for(server: &MockServer) -> Client {
        Client::builder()
            .api_url(server.base_url())
            .upload_url(server.url("/upload"))
            .access_token("tok")
            .build()
    }

    fn sample_page(content: serde_json::Value) -> serde_json::Value {
        json!({
            "ok": true,
            "result": {
                "path": "Test-page-10-19",
                "url": "https://telegra.ph/Test-page-10-19",
                "title": "Test page",
                "description": "",
                "content": content,
                "views": 0,
                "can_edit": true
            }
        })
    }

    #[tokio::test]
    async fn create_page_sends_json_content() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/createPage")
                .form_urlencoded_tuple("access_token", "tok")
                .form_urlencoded_tuple("title", "Test page")
                .form_urlencoded_tuple("content", r#"[{"tag":"p","children":["Hello, World!"]}]"#)
                .form_urlencoded_tuple("return_content", "true");
            then.status(200)
                .json_body(sample_page(json!([{"tag": "p", "children": ["Hello, World!"]}])));
        });

        let content = vec![ContentNode::from(
            NodeElement::new("p").with_child("Hello, World!"),
        )];
        let params = PageParams {
            return_content: true,
            ..Default::default()
        };
        let page = client_for(&server)
            .create_page("Test page", &content, Some(&params), &[])
            .await
            .expect("create_page should succeed");

        mock.assert();
        assert_eq!(page.path, "Test-page-10-19");
        assert_eq!(page.content, content);
        assert!(page.can_edit);
    }

    #[tokio::test]
    async fn edit_page_targets_path() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/editPage/Test-page-10-19")
                .form_urlencoded_tuple("access_token", "tok")
                .form_urlencoded_tuple("title", "Test page (edited)")
                .form_urlencoded_tuple("author_name", "Anonymous");
            then.status(200).json_body(sample_page(json!([])));
        });

        let params = PageParams {
            author_name: "Anonymous".to_string(),
            ..Default::default()
        };
        let page = client_for(&server)
            .edit_page("Test-page-10-19", "Test page (edited)", &[], Some(&params), &[])
            .await
            .unwrap();
        mock.assert();
        assert!(page.content.is_empty());
    }

    #[tokio::test]
    async fn get_page_is_public() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/getPage/Test-page-10-19")
                .form_urlencoded_tuple("return_content", "true");
            then.status(200)
                .json_body(sample_page(json!(["text", {"tag": "hr"}])));
        });

        let client = Client::builder().api_url(server.base_url()).build();
        let page = client.get_page("Test-page-10-19", true, &[]).await.unwrap();
        mock.assert();
        assert_eq!(
            page.content,
            vec![ContentNode::from("text"), ContentNode::from(NodeElement::new("hr"))]
        );
    }

    #[tokio::test]
    async fn get_page_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/getPage/missing");
            then.status(200)
                .json_body(json!({"ok": false, "error": "PAGE_NOT_FOUND"}));
        });

        let err = client_for(&server)
            .get_page("missing", false, &[])
            .await
            .unwrap_err();
        assert!(err.is_api());
        assert_eq!(err.api_message(), Some("PAGE_NOT_FOUND"));
    }

    #[tokio::test]
    async fn get_page_list_sends_paging() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/getPageList")
                .form_urlencoded_tuple("offset", "0")
                .form_urlencoded_tuple("limit", "50");
            then.status(200).json_body(json!({
                "ok": true,
                "result": {
                    "total_count": 1,
                    "pages": [{
                        "path": "Test-page-10-19",
                        "url": "https://telegra.ph/Test-page-10-19",
                        "title": "Test page",
                        "description": "",
                        "views": 4
                    }]
                }
            }));
        });

        let params = PageListParams {
            offset: Some(0),
            limit: Some(50),
        };
        let list = client_for(&server).get_page_list(&params, &[]).await.unwrap();
        mock.assert();
        assert_eq!(list.total_count, 1);
        assert_eq!(list.pages[0].views, 4);
    }

    #[tokio::test]
    async fn get_views_sends_only_set_buckets() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/getViews/Test-page-10-19")
                .form_urlencoded_tuple("year", "2016")
                .form_urlencoded_tuple("hour", "0");
            then.status(200)
                .json_body(json!({"ok": true, "result": {"views": 9}}));
        });

        let params = ViewsParams {
            year: Some(2016),
            hour: Some(0),
            ..Default::default()
        };
        let views = client_for(&server)
            .get_views("Test-page-10-19", &params, &[])
            .await
            .unwrap();
        mock.assert();
        assert_eq!(views.views, 9);
    }

    #[tokio::test]
    async fn upload_returns_paths() {
        let dir = TempDir::new().unwrap();
        let image = dir.path().join("pixel.png");
        fs::write(&image, [0x89, b'P', b'N', b'G']).unwrap();

        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/upload");
            then.status(200)
                .json_body(json!([{"src": "/file/6a5b15e7eb4d7329ca7af.png"}]));
        });

        let paths = client_for(&server).upload(&[&image], &[]).await.unwrap();
        mock.assert();
        assert_eq!(paths, vec!["/file/6a5b15e7eb4d7329ca7af.png".to_string()]);
    }

    #[tokio::test]
    async fn upload_error_object() {
        let dir = TempDir::new().unwrap();
        let doc = dir.path().join("notes.txt");
        fs::write(&doc, "text").unwrap();

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/upload");
            then.status(400).json_body(json!({"error": "File type invalid"}));
        });

        let err = client_for(&server).upload(&[&doc], &[]).await.unwrap_err();
        assert_eq!(err.api_message(), Some("File type invalid"));
    }

    #[tokio::test]
    async fn upload_requires_files() {
        let files: [&str; 0] = [];
        let err = Client::builder().build().upload(&files, &[]).await.unwrap_err();
        assert!(matches!(err, Error::NoInputData));
    }

    #[tokio::test]
    async fn upload_missing_file_is_io_error() {
        let err = Client::builder()
            .build()
            .upload(&["/definitely/not/here.png"], &[])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn upload_field_name_is_sha256_hex() {
        assert_eq!(
            upload_field_name("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
