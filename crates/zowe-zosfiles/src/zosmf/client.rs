//! z/OSMF client struct, URL and header building, and response parsing.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{GetOptions, ListOptions, ZosFilesError};

use super::config::ZosmfConfig;

pub(crate) const RESTFILES_DS: &str = "/zosmf/restfiles/ds";

const CSRF_HEADER: &str = "x-csrf-zosmf-header";
const ATTRIBUTES_HEADER: &str = "x-ibm-attributes";
const MAX_ITEMS_HEADER: &str = "x-ibm-max-items";
const DATA_TYPE_HEADER: &str = "x-ibm-data-type";
const RESPONSE_TIMEOUT_HEADER: &str = "x-ibm-response-timeout";

/// z/OSMF REST files client.
pub struct ZosmfClient {
    pub(crate) config: ZosmfConfig,
    pub(crate) http: reqwest::Client,
}

/// Envelope shared by the data set and member list responses.
#[derive(Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

impl ZosmfClient {
    pub fn new(config: ZosmfConfig) -> Result<Self, ZosFilesError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(config.connect_timeout_secs))
            .danger_accept_invalid_certs(!config.reject_unauthorized)
            .build()
            .map_err(|e| ZosFilesError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ZosmfConfig {
        &self.config
    }

    pub(crate) fn data_set_list_url(&self, pattern: &str) -> String {
        format!(
            "{}{RESTFILES_DS}?dslevel={}",
            self.config.base_url(),
            urlencoding::encode(pattern)
        )
    }

    pub(crate) fn member_list_url(&self, dsn: &str) -> String {
        format!(
            "{}{RESTFILES_DS}/{}/member",
            self.config.base_url(),
            urlencoding::encode(dsn)
        )
    }

    pub(crate) fn content_url(&self, target: &str, options: &GetOptions) -> String {
        let mut url = format!("{}{RESTFILES_DS}/", self.config.base_url());
        if let Some(volume) = &options.volume {
            url.push_str(&format!("-({})/", encode_component(volume)));
        }
        url.push_str(&encode_component(target));
        if let Some(query) = &options.query_params {
            url.push_str(query);
        }
        url
    }

    pub(crate) fn list_headers(&self, options: &ListOptions) -> Result<HeaderMap, ZosFilesError> {
        let mut headers = base_headers(options.response_timeout)?;
        headers.insert(ATTRIBUTES_HEADER, HeaderValue::from_static("base"));
        insert(
            &mut headers,
            MAX_ITEMS_HEADER,
            &options.max_length.unwrap_or(0).to_string(),
        )?;
        Ok(headers)
    }

    pub(crate) fn content_headers(&self, options: &GetOptions) -> Result<HeaderMap, ZosFilesError> {
        let mut headers = base_headers(options.response_timeout)?;
        let mut data_type = if options.binary { "binary" } else { "text" }.to_string();
        if let Some(encoding) = options.encoding.as_deref().filter(|_| !options.binary) {
            data_type.push_str(";fileEncoding=");
            data_type.push_str(encoding);
        }
        insert(&mut headers, DATA_TYPE_HEADER, &data_type)?;
        Ok(headers)
    }
}

/// Percent-encode one path segment the way browsers' `encodeURIComponent`
/// does, leaving `!*'()` literal so `DSN(MEMBER)` keeps its parentheses.
fn encode_component(segment: &str) -> String {
    urlencoding::encode(segment)
        .replace("%21", "!")
        .replace("%2A", "*")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
}

fn base_headers(response_timeout: Option<u32>) -> Result<HeaderMap, ZosFilesError> {
    let mut headers = HeaderMap::new();
    headers.insert(CSRF_HEADER, HeaderValue::from_static("true"));
    if let Some(timeout) = response_timeout {
        insert(&mut headers, RESPONSE_TIMEOUT_HEADER, &timeout.to_string())?;
    }
    Ok(headers)
}

fn insert(headers: &mut HeaderMap, name: &'static str, value: &str) -> Result<(), ZosFilesError> {
    let value = HeaderValue::from_str(value)
        .map_err(|e| ZosFilesError::InvalidInput(format!("invalid {name} header: {e}")))?;
    headers.insert(HeaderName::from_static(name), value);
    Ok(())
}

/// Parse the `items` array out of a z/OSMF list response body.
pub(crate) fn parse_list_response<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, ZosFilesError> {
    let response: ListResponse<T> =
        serde_json::from_slice(body).map_err(|e| ZosFilesError::Parse(e.to_string()))?;
    Ok(response.items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DataSetEntry, MemberEntry};

    fn client() -> ZosmfClient {
        ZosmfClient::new(ZosmfConfig::new("lpar1", "ibmuser", "pw").with_port(443)).unwrap()
    }

    #[test]
    fn list_url_encodes_pattern() {
        assert_eq!(
            client().data_set_list_url("IBMUSER.**"),
            "https://lpar1:443/zosmf/restfiles/ds?dslevel=IBMUSER.%2A%2A"
        );
    }

    #[test]
    fn member_list_url() {
        assert_eq!(
            client().member_list_url("IBMUSER.CNTL"),
            "https://lpar1:443/zosmf/restfiles/ds/IBMUSER.CNTL/member"
        );
    }

    #[test]
    fn content_url_with_volume_and_query() {
        let options = GetOptions {
            volume: Some("VOL001".into()),
            query_params: Some("?search=abc&maxreturnsize=1".into()),
            ..GetOptions::default()
        };
        assert_eq!(
            client().content_url("IBMUSER.CNTL(JCL1)", &options),
            "https://lpar1:443/zosmf/restfiles/ds/-(VOL001)/IBMUSER.CNTL(JCL1)?search=abc&maxreturnsize=1"
        );
    }

    #[test]
    fn content_url_escapes_everything_but_member_parentheses() {
        assert_eq!(
            client().content_url("USER.A B(#M$1)", &GetOptions::default()),
            "https://lpar1:443/zosmf/restfiles/ds/USER.A%20B(%23M%241)"
        );
        assert_eq!(encode_component("A.B(C)"), "A.B(C)");
        assert_eq!(encode_component("a/b?c"), "a%2Fb%3Fc");
    }

    #[test]
    fn content_headers_carry_encoding() {
        let options = GetOptions {
            encoding: Some("IBM-1047".into()),
            response_timeout: Some(30),
            ..GetOptions::default()
        };
        let headers = client().content_headers(&options).unwrap();
        assert_eq!(headers[DATA_TYPE_HEADER], "text;fileEncoding=IBM-1047");
        assert_eq!(headers[RESPONSE_TIMEOUT_HEADER], "30");
        assert_eq!(headers[CSRF_HEADER], "true");
    }

    #[test]
    fn binary_downloads_ignore_encoding() {
        let options = GetOptions {
            binary: true,
            encoding: Some("IBM-1047".into()),
            ..GetOptions::default()
        };
        let headers = client().content_headers(&options).unwrap();
        assert_eq!(headers[DATA_TYPE_HEADER], "binary");
    }

    #[test]
    fn list_headers_default_to_unlimited_items() {
        let headers = client().list_headers(&ListOptions::default()).unwrap();
        assert_eq!(headers[MAX_ITEMS_HEADER], "0");
        assert_eq!(headers[ATTRIBUTES_HEADER], "base");
    }

    #[test]
    fn parses_data_set_list() {
        let body = br#"{"items":[
            {"dsname":"IBMUSER.CNTL","dsorg":"PO","migr":"NO"},
            {"dsname":"IBMUSER.OLD","migr":"YES"}
        ],"returnedRows":2,"totalRows":2,"JSONversion":1}"#;
        let items: Vec<DataSetEntry> = parse_list_response(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].dsname, "IBMUSER.CNTL");
        assert!(items[1].is_migrated());
    }

    #[test]
    fn parses_member_list_without_items() {
        let items: Vec<MemberEntry> = parse_list_response(br#"{"returnedRows":0}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        let result: Result<Vec<MemberEntry>, _> = parse_list_response(b"<html>");
        assert!(matches!(result, Err(ZosFilesError::Parse(_))));
    }
}
