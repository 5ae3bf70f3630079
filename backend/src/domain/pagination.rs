/// Search queries and paginated result envelopes shared by every list operation
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Field a search is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Name,
    Id,
    CreatedAt,
}

impl SortField {
    /// Map a request parameter to a sort field; anything unknown sorts by name
    pub fn from_param(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "id" => SortField::Id,
            "createdat" | "created_at" => SortField::CreatedAt,
            _ => SortField::Name,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Name => write!(f, "name"),
            SortField::Id => write!(f, "id"),
            SortField::CreatedAt => write!(f, "createdAt"),
        }
    }
}

/// Sort direction of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDirection {
    #[default]
    Asc,
    Desc,
}

impl SearchDirection {
    /// Map a request parameter to a direction; anything but `desc` is ascending
    pub fn from_param(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            SearchDirection::Desc
        } else {
            SearchDirection::Asc
        }
    }
}

impl fmt::Display for SearchDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchDirection::Asc => write!(f, "asc"),
            SearchDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Immutable filter, sort and pagination request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    page: u32,
    per_page: u32,
    terms: String,
    sort: SortField,
    direction: SearchDirection,
}

impl SearchQuery {
    /// Build a query. `page` and `per_page` are raised to at least 1.
    pub fn new(
        page: u32,
        per_page: u32,
        terms: impl Into<String>,
        sort: SortField,
        direction: SearchDirection,
    ) -> Self {
        SearchQuery {
            page: page.max(1),
            per_page: per_page.max(1),
            terms: terms.into(),
            sort,
            direction,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn terms(&self) -> &str {
        &self.terms
    }

    pub fn sort(&self) -> SortField {
        self.sort
    }

    pub fn direction(&self) -> SearchDirection {
        self.direction
    }

    /// Whether the query filters by name; blank terms match everything
    pub fn has_terms(&self) -> bool {
        !self.terms.trim().is_empty()
    }

    /// Number of matching items skipped before the requested page
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    /// Whether `item` passes the name filter
    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        !self.has_terms() || item.search_name().contains(self.terms.as_str())
    }

    /// Total order over items for this query.
    ///
    /// Ties on the sort field are broken by the item key in the same
    /// direction, so equal names never produce an unstable order.
    pub fn compare<T: Searchable>(&self, a: &T, b: &T) -> Ordering {
        let primary = match self.sort {
            SortField::Name => a.search_name().cmp(b.search_name()),
            SortField::Id => Ordering::Equal,
            SortField::CreatedAt => a.search_created_at().cmp(&b.search_created_at()),
        };
        let ordering = primary.then_with(|| a.search_key().cmp(b.search_key()));

        match self.direction {
            SearchDirection::Asc => ordering,
            SearchDirection::Desc => ordering.reverse(),
        }
    }

    /// Filter, sort and slice an in-memory collection into a page
    pub fn paginate<T, I>(&self, items: I) -> Page<T>
    where
        T: Searchable,
        I: IntoIterator<Item = T>,
    {
        let mut matching: Vec<T> = items.into_iter().filter(|item| self.matches(item)).collect();
        matching.sort_by(|a, b| self.compare(a, b));

        let total = matching.len() as u64;
        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let data = matching
            .into_iter()
            .skip(offset)
            .take(self.per_page as usize)
            .collect();

        Page::new(self.page, self.per_page, total, data)
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        SearchQuery::new(
            DEFAULT_PAGE,
            DEFAULT_PER_PAGE,
            "",
            SortField::default(),
            SearchDirection::default(),
        )
    }
}

/// Fields an item exposes so that a [`SearchQuery`] can filter and order it
pub trait Searchable {
    type Key: Ord;

    /// Unique key, used as the tie-break
    fn search_key(&self) -> &Self::Key;

    fn search_name(&self) -> &str;

    fn search_created_at(&self) -> DateTime<Utc>;
}

/// Pagination metadata of a [`Page`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub current_page: u32,
    pub per_page: u32,
    /// Matching items before pagination
    pub total: u64,
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    meta: Metadata,
    data: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(current_page: u32, per_page: u32, total: u64, data: Vec<T>) -> Self {
        Page::from_parts(
            Metadata {
                current_page,
                per_page,
                total,
            },
            data,
        )
    }

    pub fn from_parts(meta: Metadata, data: Vec<T>) -> Self {
        debug_assert!(data.len() <= meta.per_page as usize);
        Page { meta, data }
    }

    pub fn meta(&self) -> &Metadata {
        &self.meta
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Convert every element, keeping order and metadata untouched
    pub fn map<U, F>(self, mapper: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            meta: self.meta,
            data: self.data.into_iter().map(mapper).collect(),
        }
    }
}
