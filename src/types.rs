//! Wire-level data shapes for the BoxDice website API.
//!
//! Payloads are exchanged verbatim with the server; nothing here validates
//! business rules. Optional fields are omitted from serialized bodies rather
//! than sent as `null`.

use serde::{Deserialize, Serialize};

/// Credentials and tenant for one BoxDice account.
///
/// Consumed at client construction; the resulting base URL is
/// `https://<domain>/website_api/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// API key sent as `Authorization: Api-Key token=<api_key>`.
    pub api_key: String,
    /// Tenant domain, for example `agency.boxdice.com.au`.
    pub domain: String,
}

/// Cursor block returned by list endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// Opaque cursor for the next page. Pass it back verbatim as the
    /// `after` query parameter; `None` means no further pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// One page of a list endpoint, in server-defined order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

impl<T> Page<T> {
    /// Cursor to request the next page, when the server provided one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.paging.as_ref().and_then(|paging| paging.next.as_deref())
    }
}

/// Response shape of create operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRecord {
    pub id: u64,
}

/// Category assignment on a contact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCategory {
    pub name: String,
    pub consultant_id: u64,
    pub type_id: u64,
}

/// Note attached to a contact record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactComment {
    pub id: u64,
    pub consultant_id: u64,
    pub text: String,
    pub important: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Listing market a search criteria applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriteriaKind {
    Sales,
    Rental,
}

/// Saved property search criteria for a contact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactCriteria {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: CriteriaKind,
    pub suburb_ids: Vec<u64>,
    pub property_type_ids: Vec<u64>,
    pub property_category_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beds_from: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beds_to: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baths: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cars: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_size_from: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_size_to: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_measure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub land_size_from: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub land_size_to: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub land_measure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_pa_from: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_pa_to: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ealert_enabled: Option<bool>,
}

/// Postal address on a contact.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// A contact record with its nested categories, comments, and criteria.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub email: String,
    pub permit_email_campaign: bool,
    pub permit_sms: bool,
    pub ealert_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultant_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<ContactAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<ContactCategory>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<ContactComment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Vec<ContactCriteria>>,
}

/// Physical property attributes shared by sales and rental listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub street_name: String,
    pub street_type: String,
    pub suburb: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_category_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_other_category_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baths: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub garages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toilets: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_spaces: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_carspace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cars: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub powder_rooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_rates: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_corporate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub land_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub land_measure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_measure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eer: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_styles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_views: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_materials: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingImage {
    pub index: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicFile {
    pub id: String,
    pub name: String,
    pub url: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherLink {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertisingCopy {
    pub heading: String,
    pub text: String,
}

/// Scheduled open-for-inspection window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspection {
    pub inspection_date: String,
    pub start_time: String,
    pub end_time: String,
}

/// A listing on the sales market.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalesListing {
    pub id: u64,
    pub office_id: u64,
    pub status: String,
    pub consultant_ids: Vec<u64>,
    pub primary_consultant_id: u64,
    pub listing_type: String,
    pub project_listing: bool,
    pub hidden: bool,
    pub price_undisclosed: bool,
    pub address_undisclosed: bool,
    pub suburb_undisclosed: bool,
    pub under_offer: bool,
    pub website_status: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_hits: Option<String>,
    pub auction: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auctioneer_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passed_in_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auction_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auction_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_from: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_to: Option<u64>,
    pub display_price: String,
    pub situation_very_sensitive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub date_listed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_status: Option<String>,
    pub record_price: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspections: Option<Vec<Inspection>>,
    pub images: Vec<ListingImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_tour_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactive_floor_plan_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soi_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_files: Option<Vec<PublicFile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_links: Option<Vec<OtherLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertising_copy: Option<AdvertisingCopy>,
    pub property: Property,
}

/// Writable fields of a sales listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesListingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_hits: Option<String>,
}

/// A listing on the rental market.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RentalListing {
    pub id: u64,
    pub office_id: u64,
    pub status: String,
    pub consultant_ids: Vec<u64>,
    pub primary_consultant_id: u64,
    pub rental_type: String,
    pub price_undisclosed: bool,
    pub address_undisclosed: bool,
    pub advertisable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_from: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_to: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_period: Option<String>,
    pub display_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bond: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leased_duration: Option<u64>,
    pub date_listed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_date_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_available: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_leased: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_offmarket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_withdrawn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_tour_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspections: Option<Vec<Inspection>>,
    pub images: Vec<ListingImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertising_copy: Option<AdvertisingCopy>,
    pub property: Property,
}

/// Writable fields of a rental listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalListingUpdate {
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Office {
    pub id: u64,
    pub name: String,
    pub company_name: String,
    pub street_address: String,
    pub suburb: String,
    pub state: String,
    pub postcode: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultantTestimonial {
    pub text: String,
    pub provider: String,
    pub date: String,
}

/// An agent attached to an office.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultant {
    pub id: u64,
    pub office_id: u64,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub phone_bh: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<Vec<ConsultantTestimonial>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty_suburb_ids: Option<Vec<u64>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyType {
    pub id: u64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyCategory {
    pub id: u64,
    pub type_id: u64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyOtherCategory {
    pub id: u64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suburb {
    pub id: u64,
    pub name: String,
    pub postcode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Market a lead-flow lead relates to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadListingKind {
    Sales,
    Rentals,
}

/// Qualitative lead temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadTemperature {
    Hot,
    Warm,
    Cold,
}

/// Appraisal lead pushed into the Lead Flow pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadFlowLead {
    pub consultant_id: u64,
    pub contact_id: u64,
    pub property_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_type: Option<LeadListingKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<LeadTemperature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Website enquiry against a listing or consultant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enquiry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultant_id: Option<u64>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::{CriteriaKind, Page, Suburb};

    #[test]
    fn page_without_paging_block_deserializes() {
        let page: Page<Suburb> = serde_json::from_str(r#"{"data": []}"#).expect("valid page");
        assert!(page.data.is_empty());
        assert_eq!(page.next_cursor(), None);
    }

    #[test]
    fn next_cursor_reads_through_the_paging_block() {
        let page: Page<Suburb> =
            serde_json::from_str(r#"{"data": [], "paging": {"next": "abc123"}}"#)
                .expect("valid page");
        assert_eq!(page.next_cursor(), Some("abc123"));
    }

    #[test]
    fn criteria_kind_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&CriteriaKind::Sales).expect("serializes"),
            r#""sales""#
        );
        let kind: CriteriaKind = serde_json::from_str(r#""rental""#).expect("deserializes");
        assert_eq!(kind, CriteriaKind::Rental);
    }
}
