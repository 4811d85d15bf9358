// ABOUTME: Account methods of the Telegraph API: create, edit, inspect and revoke tokens.
// ABOUTME: Each method builds a form request and decodes an Account from the response envelope.

use serde::Serialize;

use crate::client::Client;
use crate::error::Result;
use crate::request::{Request, RequestOption};
use crate::types::Account;

/// Optional fields for createAccount.
#[derive(Debug, Clone, Default)]
pub struct CreateAccountParams {
    /// Default author name for new pages (0-128 characters).
    pub author_name: String,
    /// Default profile link opened from the author's name (0-512 characters).
    pub author_url: String,
}

/// Fields to change with editAccountInfo. Empty fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct EditAccountInfoParams {
    pub short_name: String,
    pub author_name: String,
    pub author_url: String,
}

/// Account fields that getAccountInfo can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountField {
    ShortName,
    AuthorName,
    AuthorUrl,
    AuthUrl,
    PageCount,
}

impl Client {
    /// Create a new Telegraph account.
    ///
    /// The returned account carries a fresh `access_token`.
    pub async fn create_account(
        &self,
        short_name: &str,
        params: Option<&CreateAccountParams>,
        opts: &[RequestOption],
    ) -> Result<Account> {
        let mut req = Request::new("createAccount");
        req.set_form_param("short_name", short_name);
        if let Some(params) = params {
            req.set_form_param_if("author_name", &params.author_name);
            req.set_form_param_if("author_url", &params.author_url);
        }
        self.call_api(req, opts).await
    }

    /// Update information about the account.
    pub async fn edit_account_info(
        &self,
        params: &EditAccountInfoParams,
        opts: &[RequestOption],
    ) -> Result<Account> {
        let mut req = Request::new("editAccountInfo").secured();
        req.set_form_param_if("short_name", &params.short_name);
        req.set_form_param_if("author_name", &params.author_name);
        req.set_form_param_if("author_url", &params.author_url);
        self.call_api(req, opts).await
    }

    /// Get information about the account.
    ///
    /// With no `fields` the server returns short_name, author_name and author_url.
    pub async fn get_account_info(
        &self,
        fields: &[AccountField],
        opts: &[RequestOption],
    ) -> Result<Account> {
        let mut req = Request::new("getAccountInfo").secured();
        if !fields.is_empty() {
            req.set_form_param("fields", serde_json::to_string(fields)?);
        }
        self.call_api(req, opts).await
    }

    /// Revoke the access token and generate a new one.
    ///
    /// The client keeps using the old token; call
    /// [`Client::set_access_token`] with the returned one.
    pub async fn revoke_access_token(&self, opts: &[RequestOption]) -> Result<Account> {
        self.call_api(Request::new("revokeAccessToken").secured(), opts)
            .await
    }
}
