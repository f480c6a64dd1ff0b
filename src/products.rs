//! Request and response shapes for the pharmacy product search.
//!
//! Only the payload side lives here. Sending the request and cleaning up
//! product names are left to the caller.

use serde::{Deserialize, Serialize};

pub const PHARMACY_DOMAIN: &str = "nhathuoclongchau.com.vn";

/// Search endpoint for [`ProductQuery`] bodies.
pub fn search_endpoint() -> String {
	format!("https://api.{PHARMACY_DOMAIN}/lccus/search-product-service/api/products/ecom/product/search")
}

const FACET_CODES: [&str; 9] = [
	"category",
	"objectUse",
	"prescription",
	"skin",
	"flavor",
	"manufactor",
	"indications",
	"brand",
	"brandOrigin",
];

/// POST body for a keyword search limited to non-prescription products.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
	pub keyword: String,
	pub max_result_count: u32,
	pub skip_count: u32,
	pub sort_type: u32,
	pub codes: Vec<String>,
	pub suggest_size: u32,
	pub prescription: Vec<String>,
}

impl ProductQuery {
	pub fn new(keyword: impl Into<String>) -> Self {
		Self {
			keyword: keyword.into(),
			max_result_count: 5,
			skip_count: 0,
			sort_type: 4,
			codes: FACET_CODES.iter().map(|code| code.to_string()).collect(),
			suggest_size: 6,
			prescription: vec!["false".into()],
		}
	}

	pub fn with_count(mut self, count: u32) -> Self {
		self.max_result_count = count;
		self
	}
}

/// Product as returned by the search endpoint. Unused fields are ignored.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
	pub web_name: String,
	pub image: String,
	pub slug: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
	#[serde(default)]
	products: Vec<RawProduct>,
}

/// Thumbnail sizing applied to product image URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageOptions {
	pub width: String,
	pub quality: String,
}

impl Default for ImageOptions {
	fn default() -> Self {
		Self {
			width: "1080".into(),
			quality: "90".into(),
		}
	}
}

/// Product ready for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductResult {
	pub name: String,
	pub image: String,
	pub url: String,
}

impl ProductResult {
	pub fn from_raw(raw: RawProduct, image: &ImageOptions) -> Self {
		let resized = format!(
			"unsafe/{}x0/filters:quality({})/",
			image.width, image.quality
		);
		Self {
			name: raw.web_name,
			image: raw.image.replacen("unsafe/", &resized, 1),
			url: format!("https://{PHARMACY_DOMAIN}/{}", raw.slug),
		}
	}
}

/// Map a search response body into display results.
pub fn parse_search_response(
	body: &str,
	image: &ImageOptions,
) -> Result<Vec<ProductResult>, serde_json::Error> {
	let response: SearchResponse = serde_json::from_str(body)?;
	Ok(response
		.products
		.into_iter()
		.map(|raw| ProductResult::from_raw(raw, image))
		.collect())
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn query_serializes_fixed_search_options() {
		let body = serde_json::to_value(ProductQuery::new("iron").with_count(3)).expect("json");
		assert_eq!(body["keyword"], "iron");
		assert_eq!(body["maxResultCount"], 3);
		assert_eq!(body["skipCount"], 0);
		assert_eq!(body["sortType"], 4);
		assert_eq!(body["suggestSize"], 6);
		assert_eq!(body["prescription"], json!(["false"]));
		assert_eq!(body["codes"].as_array().map(Vec::len), Some(9));
	}

	#[test]
	fn response_maps_image_and_url() {
		let body = json!({
			"products": [{
				"webName": "Vitamin C 500mg",
				"image": "https://cdn.example/unsafe/products/vitc.png",
				"slug": "thuc-pham-chuc-nang/vitamin-c.html",
				"price": 1000
			}]
		})
		.to_string();

		let results = parse_search_response(&body, &ImageOptions::default()).expect("parse");
		assert_eq!(
			results,
			[ProductResult {
				name: "Vitamin C 500mg".into(),
				image: "https://cdn.example/unsafe/1080x0/filters:quality(90)/products/vitc.png"
					.into(),
				url: "https://nhathuoclongchau.com.vn/thuc-pham-chuc-nang/vitamin-c.html".into(),
			}]
		);
	}

	#[test]
	fn missing_products_yield_no_results() {
		let results = parse_search_response("{}", &ImageOptions::default()).expect("parse");
		assert!(results.is_empty());
		assert!(search_endpoint().starts_with("https://api.nhathuoclongchau.com.vn/"));
	}
}
