// SPDX-License-Identifier: MPL-2.0
//! Lenient decoding of the gallery response envelope.
//!
//! The public data portal is loose about types: numeric-looking strings may
//! arrive as numbers, an empty result set is sent as `"items": ""`, and a
//! single result is sometimes an object instead of an array, and the item
//! list may be `null`. All of those decode here. A missing `header` or `body`
//! is a hard decode failure, as is a malformed item; its serde message is
//! kept as the decode detail.

use crate::domain::gallery::item::ItemDetails;
use crate::domain::gallery::GalleryItem;
use crate::error::FetchError;
use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::marker::PhantomData;

/// Result code the portal uses for a normal response.
const RESULT_CODE_OK: &str = "0000";

/// A successfully decoded, non-empty page.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPage {
    /// Items in server order. Never empty.
    pub items: Vec<GalleryItem>,
    pub page_no: Option<u32>,
    pub num_of_rows: Option<u32>,
    pub total_count: Option<u32>,
}

/// Decodes a response body into a page.
///
/// # Errors
///
/// - [`FetchError::Decode`] when the envelope shape does not match
/// - [`FetchError::Empty`] when the envelope is valid but holds no items
pub fn decode_page(body: &[u8]) -> Result<DecodedPage, FetchError> {
    let envelope: ApiEnvelope =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    let WireResponse { header, body } = envelope.response;

    if header.result_code != RESULT_CODE_OK {
        tracing::warn!(
            result_code = %header.result_code,
            result_msg = %header.result_msg,
            "gallery API reported a non-OK result code"
        );
    }

    let items: Vec<GalleryItem> = body
        .items
        .unwrap_or_default()
        .0
        .into_iter()
        .map(GalleryItem::from)
        .collect();

    if items.is_empty() {
        return Err(FetchError::Empty);
    }

    Ok(DecodedPage {
        items,
        page_no: body.page_no,
        num_of_rows: body.num_of_rows,
        total_count: body.total_count,
    })
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    response: WireResponse,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    header: WireHeader,
    body: WireBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireHeader {
    #[serde(default, deserialize_with = "lenient_string")]
    result_code: String,
    #[serde(default, deserialize_with = "lenient_string")]
    result_msg: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireBody {
    #[serde(default)]
    items: Option<ItemsField>,
    #[serde(default, deserialize_with = "lenient_u32")]
    num_of_rows: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    page_no: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    total_count: Option<u32>,
}

/// `items` is an object normally and an empty string when there are no rows.
#[derive(Debug, Default)]
struct ItemsField(Vec<WireItem>);

impl<'de> Deserialize<'de> for ItemsField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ItemsVisitor;

        impl<'de> Visitor<'de> for ItemsVisitor {
            type Value = ItemsField;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an items object or an empty string")
            }

            fn visit_str<E: de::Error>(self, _value: &str) -> Result<Self::Value, E> {
                Ok(ItemsField::default())
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(ItemsField::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                let items = WireItems::deserialize(MapAccessDeserializer::new(map))?;
                Ok(ItemsField(
                    items.item.map(OneOrMany::into_vec).unwrap_or_default(),
                ))
            }
        }

        deserializer.deserialize_any(ItemsVisitor)
    }
}

#[derive(Debug, Deserialize)]
struct WireItems {
    #[serde(default)]
    item: Option<OneOrMany<WireItem>>,
}

#[derive(Debug)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OneOrMany<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OneOrManyVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for OneOrManyVisitor<T> {
            type Value = OneOrMany<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an item object or an array of items")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
                Vec::<T>::deserialize(SeqAccessDeserializer::new(seq)).map(OneOrMany::Many)
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                T::deserialize(MapAccessDeserializer::new(map)).map(OneOrMany::One)
            }
        }

        deserializer.deserialize_any(OneOrManyVisitor(PhantomData))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireItem {
    #[serde(deserialize_with = "lenient_string")]
    gal_content_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    gal_title: String,
    gal_web_image_url: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    gal_content_type_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    gal_createdtime: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    gal_modifiedtime: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    gal_photography_month: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    gal_photography_location: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    gal_photographer: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    gal_search_keyword: Option<String>,
}

impl From<WireItem> for GalleryItem {
    fn from(wire: WireItem) -> Self {
        GalleryItem::new(
            wire.gal_content_id,
            wire.gal_title,
            wire.gal_web_image_url,
            ItemDetails {
                content_type_id: wire.gal_content_type_id,
                created_time: wire.gal_createdtime,
                modified_time: wire.gal_modifiedtime,
                photography_month: wire.gal_photography_month,
                photography_location: wire.gal_photography_location,
                photographer: wire.gal_photographer,
                search_keyword: wire.gal_search_keyword,
            },
        )
    }
}

// =============================================================================
// Lenient scalar helpers
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Int(value) => value.to_string(),
            Scalar::Float(value) => value.to_string(),
            Scalar::Bool(value) => value.to_string(),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_string)
        .unwrap_or_default())
}

/// Absent, `null` and blank strings all decode to `None`.
fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_string)
        .filter(|value| !value.trim().is_empty()))
}

/// Numbers may arrive as strings; anything unparsable is treated as absent.
fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.and_then(|scalar| match scalar {
        Scalar::Int(value) => u32::try_from(value).ok(),
        Scalar::Text(text) => text.trim().parse().ok(),
        Scalar::Float(_) | Scalar::Bool(_) => None,
    }))
}
