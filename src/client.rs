use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, RETRY_AFTER};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::BoxDiceError;
use crate::types::{
    ApiConfig, Consultant, Contact, ContactCategory, CreatedRecord, Enquiry, LeadFlowLead, Office,
    Page, Project, PropertyCategory, PropertyOtherCategory, PropertyType, RentalListing,
    RentalListingUpdate, SalesListing, SalesListingUpdate, Suburb,
};

/// Seconds to wait when a 429 response carries no usable `Retry-After` header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Async client for the BoxDice website API.
///
/// Every typed operation funnels through [`Self::request_json_with_headers`],
/// which owns URL joining, header injection, error classification, and JSON
/// parsing. List operations return [`Page`] values whose `paging.next` cursor
/// is passed back verbatim as the `after` parameter to fetch the next page.
#[derive(Clone, Debug)]
pub struct BoxDiceClient {
    base_url: Url,
    headers: HeaderMap,
    http: reqwest::Client,
}

impl BoxDiceClient {
    /// Creates a client for `https://<domain>/website_api/`.
    pub fn new(config: &ApiConfig) -> Result<Self, BoxDiceError> {
        let base = format!("https://{}/website_api/", config.domain);
        let parsed =
            Url::parse(&base).map_err(|_| BoxDiceError::InvalidDomain(config.domain.clone()))?;

        Ok(Self {
            base_url: parsed,
            headers: default_headers(&config.api_key)?,
            http: reqwest::Client::new(),
        })
    }

    /// Creates a client against an explicit base URL.
    ///
    /// The URL is normalized to include a trailing slash, so relative endpoint
    /// paths join correctly. Intended for non-production hosts and tests.
    pub fn with_base_url(
        base_url: impl AsRef<str>,
        api_key: &str,
    ) -> Result<Self, BoxDiceError> {
        let parsed = Url::parse(base_url.as_ref())
            .map_err(|_| BoxDiceError::InvalidBaseUrl(base_url.as_ref().to_owned()))?;

        Ok(Self {
            base_url: ensure_trailing_slash(parsed),
            headers: default_headers(api_key)?,
            http: reqwest::Client::new(),
        })
    }

    /// Returns a new client that issues requests through the given
    /// `reqwest::Client`.
    ///
    /// Use this to control timeouts, proxies, or connection pooling; the
    /// BoxDice client itself enforces none of those.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Sends a request and parses the response as JSON.
    ///
    /// Use [`Self::request_json_with_query`] when query parameters are needed.
    pub async fn request_json(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<Value, BoxDiceError> {
        self.request_json_with_query(method, endpoint, &[], body)
            .await
    }

    /// Sends a request with query parameters and parses the response as JSON.
    pub async fn request_json_with_query(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value, BoxDiceError> {
        self.request_json_with_headers(method, endpoint, query, None, body)
            .await
    }

    /// Single chokepoint for every network call.
    ///
    /// Joins `endpoint` (a relative path, no leading slash needed) to the base
    /// URL, sends the fixed `Authorization`/`Content-Type` headers merged with
    /// any caller overrides, and classifies the response: 401 becomes
    /// [`BoxDiceError::Authentication`], 429 becomes
    /// [`BoxDiceError::RateLimit`], any other non-2xx status becomes
    /// [`BoxDiceError::Api`]. Successful responses with an empty body parse as
    /// [`Value::Null`].
    pub async fn request_json_with_headers(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        headers: Option<HeaderMap>,
        body: Option<Value>,
    ) -> Result<Value, BoxDiceError> {
        let url = self.build_url(endpoint)?;

        let mut request_headers = self.headers.clone();
        if let Some(overrides) = headers {
            request_headers.extend(overrides);
        }

        let mut request = self.http.request(method, url).headers(request_headers);

        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(json_body) = body {
            request = request.json(&json_body);
        }

        let response = request.send().await?;
        let status = response.status();
        let response_headers = response.headers().clone();
        let payload = response.text().await?;

        if !status.is_success() {
            return Err(classify_failure(status, &response_headers, payload));
        }

        if payload.trim().is_empty() {
            Ok(Value::Null)
        } else {
            Ok(serde_json::from_str(&payload)?)
        }
    }

    /// Sends a cursor-aware `GET` and parses the response as a [`Page`].
    ///
    /// `params` is merged into the query string as-is. To fetch page N+1, pass
    /// the previous page's `paging.next` value back as the `after` parameter;
    /// omitting it restarts from page 1.
    pub async fn get_paginated<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Page<T>, BoxDiceError> {
        self.request_typed(Method::GET, endpoint, params, None).await
    }

    async fn request_typed<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<T, BoxDiceError> {
        let value = self
            .request_json_with_query(method, endpoint, query, body)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn request_unit(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<(), BoxDiceError> {
        self.request_json(method, endpoint, body).await.map(|_| ())
    }

    // Contacts

    /// Lists contacts. `ignore_ealert_enabled` includes contacts that have
    /// e-alerts switched off.
    pub async fn get_contacts(
        &self,
        ignore_ealert_enabled: bool,
        after: Option<&str>,
    ) -> Result<Page<Contact>, BoxDiceError> {
        let mut params = Vec::new();
        if ignore_ealert_enabled {
            params.push(("ignore_ealert_enabled", "true".to_owned()));
        }
        push_cursor(&mut params, after);
        self.get_paginated("contacts", &params).await
    }

    /// Creates a contact from a partial payload and returns its new id.
    pub async fn create_contact<C: Serialize>(
        &self,
        contact: &C,
    ) -> Result<CreatedRecord, BoxDiceError> {
        self.request_typed(
            Method::POST,
            "contacts",
            &[],
            Some(json!({ "contact": contact })),
        )
        .await
    }

    /// Applies a partial update to an existing contact.
    pub async fn update_contact<C: Serialize>(
        &self,
        id: u64,
        contact: &C,
    ) -> Result<(), BoxDiceError> {
        self.request_unit(
            Method::PATCH,
            &format!("contacts/{id}"),
            Some(json!({ "contact": contact })),
        )
        .await
    }

    // Contact categories

    /// Adds the given categories to a contact.
    pub async fn assign_contact_categories(
        &self,
        contact_id: u64,
        categories: &[ContactCategory],
    ) -> Result<(), BoxDiceError> {
        self.request_unit(
            Method::POST,
            &format!("contacts/{contact_id}/categories"),
            Some(json!({ "categories": categories })),
        )
        .await
    }

    /// Removes the given categories from a contact.
    pub async fn remove_contact_categories(
        &self,
        contact_id: u64,
        categories: &[ContactCategory],
    ) -> Result<(), BoxDiceError> {
        self.request_unit(
            Method::DELETE,
            &format!("contacts/{contact_id}/categories"),
            Some(json!({ "categories": categories })),
        )
        .await
    }

    // Contact notes

    /// Attaches a note to a contact and returns the note's id.
    pub async fn create_contact_note<N: Serialize>(
        &self,
        contact_id: u64,
        note: &N,
    ) -> Result<CreatedRecord, BoxDiceError> {
        self.request_typed(
            Method::POST,
            &format!("contacts/{contact_id}/notes"),
            &[],
            Some(json!({ "note": note })),
        )
        .await
    }

    // Search criteria

    /// Creates saved search criteria for a contact.
    pub async fn create_search_criteria<C: Serialize>(
        &self,
        contact_id: u64,
        criteria: &C,
    ) -> Result<CreatedRecord, BoxDiceError> {
        self.request_typed(
            Method::POST,
            &format!("contacts/{contact_id}/criteria"),
            &[],
            Some(json!({ "criteria": criteria })),
        )
        .await
    }

    /// Applies a partial update to saved search criteria.
    pub async fn update_search_criteria<C: Serialize>(
        &self,
        contact_id: u64,
        criteria_id: u64,
        criteria: &C,
    ) -> Result<(), BoxDiceError> {
        self.request_unit(
            Method::PATCH,
            &format!("contacts/{contact_id}/criteria/{criteria_id}"),
            Some(json!({ "criteria": criteria })),
        )
        .await
    }

    /// Deletes saved search criteria from a contact.
    pub async fn delete_search_criteria(
        &self,
        contact_id: u64,
        criteria_id: u64,
    ) -> Result<(), BoxDiceError> {
        self.request_unit(
            Method::DELETE,
            &format!("contacts/{contact_id}/criteria/{criteria_id}"),
            None,
        )
        .await
    }

    // Sales listings

    /// Lists sales listings, optionally scoped to one office.
    pub async fn get_sales_listings(
        &self,
        office_id: Option<u64>,
        after: Option<&str>,
    ) -> Result<Page<SalesListing>, BoxDiceError> {
        self.get_paginated("sales_listings", &office_cursor_params(office_id, after))
            .await
    }

    /// Updates the writable fields of a sales listing.
    pub async fn update_sales_listing(
        &self,
        id: u64,
        update: &SalesListingUpdate,
    ) -> Result<(), BoxDiceError> {
        self.request_unit(
            Method::PATCH,
            &format!("sales_listings/{id}"),
            Some(json!({ "sales_listing": update })),
        )
        .await
    }

    // Rental listings

    /// Lists rental listings, optionally scoped to one office.
    pub async fn get_rental_listings(
        &self,
        office_id: Option<u64>,
        after: Option<&str>,
    ) -> Result<Page<RentalListing>, BoxDiceError> {
        self.get_paginated("rental_listings", &office_cursor_params(office_id, after))
            .await
    }

    /// Updates the writable fields of a rental listing.
    pub async fn update_rental_listing(
        &self,
        id: u64,
        update: &RentalListingUpdate,
    ) -> Result<(), BoxDiceError> {
        self.request_unit(
            Method::PATCH,
            &format!("rental_listings/{id}"),
            Some(json!({ "rental_listing": update })),
        )
        .await
    }

    // Offices and consultants

    /// Lists offices.
    pub async fn get_offices(&self, after: Option<&str>) -> Result<Page<Office>, BoxDiceError> {
        self.get_paginated("offices", &cursor_params(after)).await
    }

    /// Lists consultants.
    pub async fn get_consultants(
        &self,
        after: Option<&str>,
    ) -> Result<Page<Consultant>, BoxDiceError> {
        self.get_paginated("consultants", &cursor_params(after)).await
    }

    // Projects and reference data

    /// Lists projects, optionally scoped to one office.
    pub async fn get_projects(
        &self,
        office_id: Option<u64>,
        after: Option<&str>,
    ) -> Result<Page<Project>, BoxDiceError> {
        self.get_paginated("projects", &office_cursor_params(office_id, after))
            .await
    }

    /// Lists property types.
    pub async fn get_property_types(
        &self,
        after: Option<&str>,
    ) -> Result<Page<PropertyType>, BoxDiceError> {
        self.get_paginated("property_types", &cursor_params(after))
            .await
    }

    /// Lists property categories.
    pub async fn get_property_categories(
        &self,
        after: Option<&str>,
    ) -> Result<Page<PropertyCategory>, BoxDiceError> {
        self.get_paginated("property_categories", &cursor_params(after))
            .await
    }

    /// Lists "other" property categories.
    pub async fn get_property_other_categories(
        &self,
        after: Option<&str>,
    ) -> Result<Page<PropertyOtherCategory>, BoxDiceError> {
        self.get_paginated("property_other_categories", &cursor_params(after))
            .await
    }

    /// Lists suburbs.
    pub async fn get_suburbs(&self, after: Option<&str>) -> Result<Page<Suburb>, BoxDiceError> {
        self.get_paginated("suburbs", &cursor_params(after)).await
    }

    // Lead flow and enquiries

    /// Pushes an appraisal lead into the Lead Flow pipeline.
    pub async fn create_lead_flow_lead(
        &self,
        lead: &LeadFlowLead,
    ) -> Result<CreatedRecord, BoxDiceError> {
        self.request_typed(
            Method::POST,
            "appraisal_leads",
            &[],
            Some(json!({ "appraisal_lead": lead })),
        )
        .await
    }

    /// Submits a website enquiry.
    pub async fn create_enquiry(&self, enquiry: &Enquiry) -> Result<(), BoxDiceError> {
        self.request_unit(
            Method::POST,
            "enquiries",
            Some(json!({ "enquiry": enquiry })),
        )
        .await
    }

    fn build_url(&self, endpoint: &str) -> Result<Url, BoxDiceError> {
        let relative = endpoint.trim_start_matches('/');
        self.base_url
            .join(relative)
            .map_err(|_| BoxDiceError::InvalidEndpoint(endpoint.to_owned()))
    }
}

/// Fixed header set sent with every request.
///
/// Computed once at construction; per-request overrides are merged on top.
pub(crate) fn default_headers(api_key: &str) -> Result<HeaderMap, BoxDiceError> {
    let mut auth = HeaderValue::from_str(&format!("Api-Key token={api_key}"))
        .map_err(|_| BoxDiceError::InvalidApiKey)?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Maps a non-2xx response to the error taxonomy. First match wins:
/// 401, then 429, then everything else.
pub(crate) fn classify_failure(
    status: StatusCode,
    headers: &HeaderMap,
    payload: String,
) -> BoxDiceError {
    if status == StatusCode::UNAUTHORIZED {
        return BoxDiceError::Authentication;
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return BoxDiceError::RateLimit {
            retry_after_secs: parse_retry_after(headers),
        };
    }

    BoxDiceError::Api {
        status,
        status_text: status.canonical_reason().unwrap_or("").to_owned(),
        body: if payload.is_empty() { None } else { Some(payload) },
    }
}

/// Reads `Retry-After` as integer seconds, falling back to
/// [`DEFAULT_RETRY_AFTER_SECS`] when the header is absent, empty, or not an
/// integer.
pub(crate) fn parse_retry_after(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

pub(crate) fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let mut path = url.path().to_owned();
        path.push('/');
        url.set_path(&path);
    }
    url
}

fn cursor_params(after: Option<&str>) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    push_cursor(&mut params, after);
    params
}

// `None` omits the key entirely; an absent filter is signalled by omission,
// never by an empty value.
fn office_cursor_params(
    office_id: Option<u64>,
    after: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(office_id) = office_id {
        params.push(("office_id", office_id.to_string()));
    }
    push_cursor(&mut params, after);
    params
}

fn push_cursor(params: &mut Vec<(&'static str, String)>, after: Option<&str>) {
    if let Some(after) = after {
        params.push(("after", after.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::{BoxDiceClient, parse_retry_after};
    use crate::BoxDiceError;
    use crate::types::{ApiConfig, SalesListingUpdate};
    use reqwest::StatusCode;
    use reqwest::header::{HeaderMap, HeaderValue, RETRY_AFTER};
    use serde_json::json;
    use wiremock::matchers::{
        body_json, header, method, path, query_param, query_param_is_missing,
    };
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> BoxDiceClient {
        BoxDiceClient::with_base_url(server.uri(), "secret").expect("valid base url")
    }

    #[test]
    fn joins_endpoints_under_the_website_api_prefix() {
        let client = BoxDiceClient::new(&ApiConfig {
            api_key: "secret".to_owned(),
            domain: "agency.boxdice.com.au".to_owned(),
        })
        .expect("valid config");
        let url = client.build_url("contacts").expect("valid endpoint");
        assert_eq!(
            url.as_str(),
            "https://agency.boxdice.com.au/website_api/contacts"
        );
    }

    #[test]
    fn retry_after_parses_integer_seconds() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("5"));
        assert_eq!(parse_retry_after(&headers), 5);
    }

    #[test]
    fn retry_after_defaults_when_missing_empty_or_non_numeric() {
        assert_eq!(parse_retry_after(&HeaderMap::new()), 60);

        let mut empty = HeaderMap::new();
        empty.insert(RETRY_AFTER, HeaderValue::from_static(""));
        assert_eq!(parse_retry_after(&empty), 60);

        let mut non_numeric = HeaderMap::new();
        non_numeric.insert(RETRY_AFTER, HeaderValue::from_static("abc"));
        assert_eq!(parse_retry_after(&non_numeric), 60);
    }

    #[tokio::test]
    async fn get_contacts_sends_auth_header_and_returns_page_unchanged() {
        let server = MockServer::start().await;

        let body = json!({
            "data": [{
                "id": 1,
                "first_name": "Ada",
                "last_name": "Lovelace",
                "mobile": "0400000000",
                "email": "ada@example.com",
                "permit_email_campaign": true,
                "permit_sms": false,
                "ealert_enabled": true
            }],
            "paging": { "next": "abc" }
        });

        Mock::given(method("GET"))
            .and(path("/contacts"))
            .and(header("Authorization", "Api-Key token=secret"))
            .and(query_param_is_missing("after"))
            .and(query_param_is_missing("ignore_ealert_enabled"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&server)
            .await;

        let page = test_client(&server)
            .get_contacts(false, None)
            .await
            .expect("contacts page");

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].first_name, "Ada");
        assert_eq!(page.next_cursor(), Some("abc"));
    }

    #[tokio::test]
    async fn status_401_is_an_authentication_error_regardless_of_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/offices"))
            .respond_with(ResponseTemplate::new(401).set_body_string("go away"))
            .mount(&server)
            .await;

        let error = test_client(&server)
            .get_offices(None)
            .await
            .expect_err("401 should fail");

        assert!(matches!(error, BoxDiceError::Authentication));
        assert_eq!(error.to_string(), "Authentication failed");
    }

    #[tokio::test]
    async fn status_429_reads_retry_after_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/offices"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "5"))
            .mount(&server)
            .await;

        let error = test_client(&server)
            .get_offices(None)
            .await
            .expect_err("429 should fail");

        assert_eq!(error.retry_after_secs(), Some(5));
    }

    #[tokio::test]
    async fn status_429_defaults_to_sixty_seconds_without_usable_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/offices"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "abc"))
            .mount(&server)
            .await;

        let error = test_client(&server)
            .get_offices(None)
            .await
            .expect_err("429 should fail");

        assert_eq!(error.retry_after_secs(), Some(60));
    }

    #[tokio::test]
    async fn other_failures_carry_status_code_and_status_text() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/offices"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let error = test_client(&server)
            .get_offices(None)
            .await
            .expect_err("500 should fail");

        assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(error.to_string().contains("Internal Server Error"));
        match error {
            BoxDiceError::Api { body, .. } => assert_eq!(body.as_deref(), Some("boom")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn sales_listing_filters_are_sent_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sales_listings"))
            .and(query_param("office_id", "42"))
            .and(query_param("after", "cursorABC"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let page = test_client(&server)
            .get_sales_listings(Some(42), Some("cursorABC"))
            .await
            .expect("sales listings page");

        assert!(page.data.is_empty());
    }

    #[tokio::test]
    async fn cursor_round_trips_between_pages() {
        let server = MockServer::start().await;
        let office = json!({
            "id": 1,
            "name": "HQ",
            "company_name": "Agency",
            "street_address": "1 Main St",
            "suburb": "Carlton",
            "state": "VIC",
            "postcode": "3053",
            "phone": "03 9000 0000",
            "email": "hq@example.com"
        });

        Mock::given(method("GET"))
            .and(path("/offices"))
            .and(query_param_is_missing("after"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [office],
                "paging": { "next": "page-2" }
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/offices"))
            .and(query_param("after", "page-2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "data": [], "paging": {} })),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        let first = client.get_offices(None).await.expect("first page");
        let cursor = first.next_cursor().expect("cursor present").to_owned();
        let second = client
            .get_offices(Some(&cursor))
            .await
            .expect("second page");

        assert_eq!(first.data.len(), 1);
        assert!(second.data.is_empty());
        assert_eq!(second.next_cursor(), None);
    }

    #[tokio::test]
    async fn create_contact_wraps_payload_under_resource_key() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/contacts"))
            .and(body_json(json!({ "contact": { "first_name": "Ada" } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 7 })))
            .expect(1)
            .mount(&server)
            .await;

        let created = test_client(&server)
            .create_contact(&json!({ "first_name": "Ada" }))
            .await
            .expect("created contact");

        assert_eq!(created.id, 7);
    }

    #[tokio::test]
    async fn updates_accept_empty_response_bodies() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/sales_listings/3"))
            .and(body_json(
                json!({ "sales_listing": { "url": "https://example.com/3" } }),
            ))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let update = SalesListingUpdate {
            url: Some("https://example.com/3".to_owned()),
            internet_hits: None,
        };
        test_client(&server)
            .update_sales_listing(3, &update)
            .await
            .expect("update succeeds");
    }

    #[tokio::test]
    async fn delete_search_criteria_sends_no_body() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/contacts/1/criteria/2"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        test_client(&server)
            .delete_search_criteria(1, 2)
            .await
            .expect("delete succeeds");
    }
}
