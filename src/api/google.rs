//! Implements `SheetStore` using the `sheets::Client` to interact with a Google sheet.

use crate::api::credentials::Credentials;
use crate::api::{Rows, SheetStore};
use crate::{Config, Result};
use anyhow::Context;
use sheets::types::{
    DateTimeRenderOption, Dimension, InsertDataOption, ValueInputOption, ValueRange,
    ValueRenderOption,
};
use sheets::ClientError;
use tracing::trace;

/// Talks to the Google Sheets API for a single spreadsheet.
pub(super) struct GoogleStore {
    spreadsheet_id: String,
    client: sheets::Client,
}

impl GoogleStore {
    pub(super) async fn new(config: &Config) -> Result<Self> {
        let creds = Credentials::load(&config.credentials_path()).await?;
        let client = sheets::Client::new(
            creds.client_id,
            creds.client_secret,
            creds.redirect_uri,
            creds.access_token,
            creds.refresh_token,
        );
        Ok(Self {
            spreadsheet_id: config.spreadsheet_id().to_string(),
            client,
        })
    }
}

#[async_trait::async_trait]
impl SheetStore for GoogleStore {
    async fn read(&mut self, range: &str) -> Result<Option<Rows>> {
        trace!("read {range}");
        let response = self
            .client
            .spreadsheets()
            .values_get(
                &self.spreadsheet_id,
                range,
                DateTimeRenderOption::FormattedString,
                Dimension::Rows,
                ValueRenderOption::FormattedValue,
            )
            .await
            .map_err(map_client_error)
            .with_context(|| format!("Failed to read range {range}"))?;
        // The API omits "values" entirely when the range holds no data; the generated client
        // surfaces that as an empty list.
        let values = response.body.values;
        if values.is_empty() {
            Ok(None)
        } else {
            Ok(Some(values))
        }
    }

    async fn append(&mut self, range: &str, rows: Rows) -> Result<()> {
        trace!("append {} rows to {range}", rows.len());
        let body = ValueRange {
            major_dimension: Some(Dimension::Rows),
            range: range.to_string(),
            values: rows,
        };
        self.client
            .spreadsheets()
            .values_append(
                &self.spreadsheet_id,
                range,
                false,
                InsertDataOption::InsertRows,
                DateTimeRenderOption::FormattedString,
                ValueRenderOption::FormattedValue,
                ValueInputOption::UserEntered,
                &body,
            )
            .await
            .map_err(map_client_error)
            .with_context(|| format!("Failed to append to range {range}"))?;
        Ok(())
    }

    async fn update(&mut self, range: &str, rows: Rows) -> Result<()> {
        trace!("update {range} with {} rows", rows.len());
        let body = ValueRange {
            major_dimension: Some(Dimension::Rows),
            range: range.to_string(),
            values: rows,
        };
        self.client
            .spreadsheets()
            .values_update(
                &self.spreadsheet_id,
                range,
                false,
                DateTimeRenderOption::FormattedString,
                ValueRenderOption::FormattedValue,
                ValueInputOption::UserEntered,
                &body,
            )
            .await
            .map_err(map_client_error)
            .with_context(|| format!("Failed to update range {range}"))?;
        Ok(())
    }
}

fn map_client_error(e: sheets::ClientError) -> anyhow::Error {
    let error_name = match &e {
        ClientError::EmptyRefreshToken => "EmptyRefreshToken".to_string(),
        ClientError::FromUtf8Error(inner) => format!("FromUtf8Error {inner}"),
        ClientError::UrlParserError(inner) => format!("UrlParserError {inner}"),
        ClientError::SerdeJsonError(inner) => format!("SerdeJsonError {inner}"),
        ClientError::ReqwestError(inner) => format!("ReqwestError {inner}"),
        ClientError::InvalidHeaderValue(inner) => format!("InvalidHeaderValue {inner}"),
        ClientError::ReqwestMiddleWareError(inner) => format!("ReqwestMiddleWareError {inner}"),
        ClientError::HttpError { .. } => "HttpError".to_string(),
        ClientError::Other(_) => "Other".to_string(),
    };
    anyhow::Error::new(e).context(error_name)
}
