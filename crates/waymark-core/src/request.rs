//! Search request types and spatial-mode resolution.
//!
//! Callers hand the facade a loosely-shaped [`SearchParams`]; resolution
//! produces a [`SearchRequest`] carrying exactly one [`SearchMode`]. When a
//! caller supplies more than one complete spatial mode, a fixed priority
//! order applies: radius beats bounds, bounds beats keyword listing,
//! keyword listing beats plain recency listing. Callers rely on that order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::defaults::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::error::{Error, Result};
use crate::geo::Coordinates;

// =============================================================================
// PAGE REQUEST
// =============================================================================

/// Zero-based page request with a bounded size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index.
    pub number: u32,
    /// Items per page, 1..=[`MAX_PAGE_SIZE`].
    pub size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            number: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Page request with the default size.
    pub fn page(number: u32) -> Self {
        Self {
            number,
            size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Reject zero or oversized page sizes.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_PAGE_SIZE {
            return Err(Error::InvalidRequest(format!(
                "page size {} outside 1..={}",
                self.size, MAX_PAGE_SIZE
            )));
        }
        Ok(())
    }

    /// Offset of the first item on this page.
    pub fn offset(&self) -> usize {
        self.number as usize * self.size as usize
    }
}

// =============================================================================
// SEARCH MODE
// =============================================================================

/// Exactly one spatial mode per resolved request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SearchMode {
    /// Records within `radius_meters` of `center`, nearest first.
    Radius {
        center: Coordinates,
        radius_meters: f64,
    },
    /// Records inside a lat/lon box, most recent first.
    Bounds {
        north_east: Coordinates,
        south_west: Coordinates,
    },
    /// No spatial constraint, most recent first.
    Listing,
}

/// Group membership filter.
///
/// `Unassigned` matches records that belong to no group, which is distinct
/// from not filtering on group at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupFilter {
    #[default]
    Any,
    Unassigned,
    Group(Uuid),
}

// =============================================================================
// RAW SEARCH PARAMETERS
// =============================================================================

/// Unresolved caller input for a search.
///
/// Spatial fields come in pairs: `center` + `radius_meters`, and
/// `north_east` + `south_west`. A pair with only one half present is
/// malformed and rejected rather than ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    pub owner_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_meters: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub north_east: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub south_west: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub group: GroupFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default)]
    pub page: PageRequest,
}

impl SearchParams {
    /// Minimal listing request for an owner.
    pub fn listing(owner_id: Uuid) -> Self {
        Self {
            owner_id,
            ..Default::default()
        }
    }

    /// Radius request for an owner.
    pub fn radius(owner_id: Uuid, center: Coordinates, radius_meters: f64) -> Self {
        Self {
            owner_id,
            center: Some(center),
            radius_meters: Some(radius_meters),
            ..Default::default()
        }
    }

    /// Bounding-box request for an owner.
    pub fn bounds(owner_id: Uuid, north_east: Coordinates, south_west: Coordinates) -> Self {
        Self {
            owner_id,
            north_east: Some(north_east),
            south_west: Some(south_west),
            ..Default::default()
        }
    }

    /// Resolve raw parameters into a request with exactly one mode.
    ///
    /// Validation happens before any storage access: partial spatial pairs,
    /// non-positive radii, and page-size violations all fail here.
    pub fn resolve(self) -> Result<SearchRequest> {
        self.page.validate()?;

        let radius_mode = match (self.center, self.radius_meters) {
            (Some(center), Some(radius_meters)) => {
                if !radius_meters.is_finite() || radius_meters <= 0.0 {
                    return Err(Error::InvalidRequest(format!(
                        "radius must be positive, got {}",
                        radius_meters
                    )));
                }
                Some(SearchMode::Radius {
                    center,
                    radius_meters,
                })
            }
            (Some(_), None) => {
                return Err(Error::InvalidRequest(
                    "center supplied without radius_meters".into(),
                ))
            }
            (None, Some(_)) => {
                return Err(Error::InvalidRequest(
                    "radius_meters supplied without center".into(),
                ))
            }
            (None, None) => None,
        };

        let bounds_mode = match (self.north_east, self.south_west) {
            (Some(north_east), Some(south_west)) => Some(SearchMode::Bounds {
                north_east,
                south_west,
            }),
            (Some(_), None) | (None, Some(_)) => {
                return Err(Error::InvalidRequest(
                    "bounding box requires both north_east and south_west".into(),
                ))
            }
            (None, None) => None,
        };

        // Priority order: radius over bounds over listing.
        let mode = radius_mode
            .or(bounds_mode)
            .unwrap_or(SearchMode::Listing);

        let keyword = self
            .keyword
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        Ok(SearchRequest {
            owner_id: self.owner_id,
            mode,
            category_id: self.category_id,
            group: self.group,
            keyword,
            page: self.page,
        })
    }
}

/// A validated search request carrying exactly one spatial mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub owner_id: Uuid,
    pub mode: SearchMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub group: GroupFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub page: PageRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinates {
        Coordinates::new(lat, lon).unwrap()
    }

    #[test]
    fn test_page_request_default() {
        let page = PageRequest::default();
        assert_eq!(page.number, 0);
        assert_eq!(page.size, DEFAULT_PAGE_SIZE);
        assert!(page.validate().is_ok());
    }

    #[test]
    fn test_page_request_rejects_zero_size() {
        let page = PageRequest { number: 0, size: 0 };
        assert!(page.validate().is_err());
    }

    #[test]
    fn test_page_request_rejects_oversize() {
        let page = PageRequest {
            number: 0,
            size: MAX_PAGE_SIZE + 1,
        };
        assert!(page.validate().is_err());
        let page = PageRequest {
            number: 0,
            size: MAX_PAGE_SIZE,
        };
        assert!(page.validate().is_ok());
    }

    #[test]
    fn test_page_offset() {
        let page = PageRequest { number: 3, size: 20 };
        assert_eq!(page.offset(), 60);
    }

    #[test]
    fn test_resolve_plain_listing() {
        let req = SearchParams::listing(Uuid::new_v4()).resolve().unwrap();
        assert_eq!(req.mode, SearchMode::Listing);
        assert!(req.keyword.is_none());
    }

    #[test]
    fn test_resolve_radius() {
        let center = coord(37.5, 127.0);
        let req = SearchParams::radius(Uuid::new_v4(), center, 2000.0)
            .resolve()
            .unwrap();
        assert_eq!(
            req.mode,
            SearchMode::Radius {
                center,
                radius_meters: 2000.0
            }
        );
    }

    #[test]
    fn test_resolve_bounds() {
        let ne = coord(38.0, 128.0);
        let sw = coord(37.0, 126.0);
        let req = SearchParams::bounds(Uuid::new_v4(), ne, sw).resolve().unwrap();
        assert_eq!(
            req.mode,
            SearchMode::Bounds {
                north_east: ne,
                south_west: sw
            }
        );
    }

    #[test]
    fn test_resolve_radius_takes_priority_over_bounds() {
        let mut params = SearchParams::radius(Uuid::new_v4(), coord(37.5, 127.0), 500.0);
        params.north_east = Some(coord(38.0, 128.0));
        params.south_west = Some(coord(37.0, 126.0));
        let req = params.resolve().unwrap();
        assert!(matches!(req.mode, SearchMode::Radius { .. }));
    }

    #[test]
    fn test_resolve_bounds_takes_priority_over_keyword_listing() {
        let mut params = SearchParams::bounds(Uuid::new_v4(), coord(38.0, 128.0), coord(37.0, 126.0));
        params.keyword = Some("cafe".to_string());
        let req = params.resolve().unwrap();
        assert!(matches!(req.mode, SearchMode::Bounds { .. }));
        // Keyword still applies as a filter within the spatial mode.
        assert_eq!(req.keyword.as_deref(), Some("cafe"));
    }

    #[test]
    fn test_resolve_rejects_radius_without_center() {
        let params = SearchParams {
            owner_id: Uuid::new_v4(),
            radius_meters: Some(100.0),
            ..Default::default()
        };
        assert!(matches!(
            params.resolve(),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_center_without_radius() {
        let params = SearchParams {
            owner_id: Uuid::new_v4(),
            center: Some(coord(37.5, 127.0)),
            ..Default::default()
        };
        assert!(params.resolve().is_err());
    }

    #[test]
    fn test_resolve_rejects_non_positive_radius() {
        let params = SearchParams::radius(Uuid::new_v4(), coord(37.5, 127.0), 0.0);
        assert!(params.resolve().is_err());

        let params = SearchParams::radius(Uuid::new_v4(), coord(37.5, 127.0), -5.0);
        assert!(params.resolve().is_err());

        let params = SearchParams::radius(Uuid::new_v4(), coord(37.5, 127.0), f64::NAN);
        assert!(params.resolve().is_err());
    }

    #[test]
    fn test_resolve_rejects_partial_bounds() {
        let params = SearchParams {
            owner_id: Uuid::new_v4(),
            north_east: Some(coord(38.0, 128.0)),
            ..Default::default()
        };
        assert!(params.resolve().is_err());
    }

    #[test]
    fn test_resolve_trims_blank_keyword_to_none() {
        let mut params = SearchParams::listing(Uuid::new_v4());
        params.keyword = Some("   ".to_string());
        let req = params.resolve().unwrap();
        assert!(req.keyword.is_none());
        assert_eq!(req.mode, SearchMode::Listing);
    }

    #[test]
    fn test_group_filter_default_is_any() {
        assert_eq!(GroupFilter::default(), GroupFilter::Any);
    }

    #[test]
    fn test_search_params_serde_roundtrip() {
        let params = SearchParams {
            owner_id: Uuid::new_v4(),
            center: Some(coord(37.5, 127.0)),
            radius_meters: Some(1500.0),
            category_id: Some(Uuid::new_v4()),
            group: GroupFilter::Unassigned,
            keyword: Some("cafe".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: SearchParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back.owner_id, params.owner_id);
        assert_eq!(back.group, GroupFilter::Unassigned);
        assert_eq!(back.radius_meters, Some(1500.0));
    }
}
