//! Lead Table State
//!
//! Search, sort and paging state for the leads table, and the page it
//! produces from a collection snapshot.

use super::pipeline::{filter_leads, paginate, sort_leads};
use crate::domain::{Lead, LeadField};

/// Selectable page sizes; the first is the default
pub const PAGE_SIZES: [usize; 5] = [10, 20, 30, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// Sortable table columns, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LeadColumn {
    #[default]
    FullName,
    CompanyName,
    LeadStatus,
    Email,
    PhoneNumber,
    DateOfBirth,
}

impl LeadColumn {
    pub const ALL: &'static [LeadColumn] = &[
        LeadColumn::FullName,
        LeadColumn::CompanyName,
        LeadColumn::LeadStatus,
        LeadColumn::Email,
        LeadColumn::PhoneNumber,
        LeadColumn::DateOfBirth,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            LeadColumn::FullName => "Name",
            LeadColumn::CompanyName => "Company",
            LeadColumn::LeadStatus => "Lead Status",
            LeadColumn::Email => "Email",
            LeadColumn::PhoneNumber => "Phone",
            LeadColumn::DateOfBirth => "DOB",
        }
    }

    pub fn field(&self) -> LeadField {
        match self {
            LeadColumn::FullName => LeadField::FullName,
            LeadColumn::CompanyName => LeadField::CompanyName,
            LeadColumn::LeadStatus => LeadField::LeadStatus,
            LeadColumn::Email => LeadField::Email,
            LeadColumn::PhoneNumber => LeadField::PhoneNumber,
            LeadColumn::DateOfBirth => LeadField::DateOfBirth,
        }
    }

    /// Sort key of a lead for this column
    pub fn key<'a>(&self, lead: &'a Lead) -> &'a str {
        lead.field(self.field())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortStatus {
    pub column: LeadColumn,
    pub direction: SortDirection,
}

impl SortStatus {
    pub fn new(column: LeadColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }
}

/// Interactive state of the leads table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadTableState {
    search: String,
    sort: SortStatus,
    /// 1-based
    page: usize,
    page_size: usize,
}

impl Default for LeadTableState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortStatus::default(),
            page: 1,
            page_size: PAGE_SIZES[0],
        }
    }
}

impl LeadTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortStatus {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Change the search term; returns to the first page
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Change the sort; returns to the first page
    pub fn set_sort(&mut self, sort: SortStatus) {
        self.sort = sort;
        self.page = 1;
    }

    /// Header click: flip direction on the active column, otherwise sort
    /// the clicked column ascending
    pub fn toggle_sort(&mut self, column: LeadColumn) {
        let sort = if self.sort.column == column {
            SortStatus::new(column, self.sort.direction.toggled())
        } else {
            SortStatus::new(column, SortDirection::Asc)
        };
        self.set_sort(sort);
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Change the page size (one of `PAGE_SIZES`); returns to the first page.
    /// Unknown sizes are ignored.
    pub fn set_page_size(&mut self, page_size: usize) {
        if PAGE_SIZES.contains(&page_size) {
            self.page_size = page_size;
            self.page = 1;
        }
    }

    /// The stored collection changed; go back to the first page
    pub fn collection_changed(&mut self) {
        self.page = 1;
    }

    /// Filter, sort and slice a collection snapshot
    pub fn view(&self, leads: &[Lead]) -> LeadPage {
        let mut matching = filter_leads(leads, &self.search);
        sort_leads(&mut matching, self.sort);
        LeadPage {
            records: paginate(&matching, self.page, self.page_size).to_vec(),
            total: matching.len(),
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// One rendered page of the leads table
#[derive(Debug, Clone, PartialEq)]
pub struct LeadPage {
    pub records: Vec<Lead>,
    /// Number of leads matching the search
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

impl LeadPage {
    /// 1-based index of the first record shown, 0 when empty
    pub fn from(&self) -> usize {
        if self.records.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    /// 1-based index of the last record shown, 0 when empty
    pub fn to(&self) -> usize {
        if self.records.is_empty() {
            0
        } else {
            self.from() + self.records.len() - 1
        }
    }

    /// Number of pages (at least one)
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    pub fn summary(&self) -> String {
        format!("Showing {} to {} of {} entries", self.from(), self.to(), self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_leads(n: u64) -> Vec<Lead> {
        (0..n)
            .map(|i| Lead {
                id: i,
                full_name: format!("Lead {:02}", i),
                email: format!("lead{}@example.com", i),
                phone_number: "555".to_string(),
                lead_status: "New".to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_defaults() {
        let state = LeadTableState::new();
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size(), 10);
        assert_eq!(state.sort(), SortStatus::new(LeadColumn::FullName, SortDirection::Asc));
    }

    #[test]
    fn test_third_page_view() {
        let leads = make_leads(25);
        let mut state = LeadTableState::new();
        state.set_page(3);

        let page = state.view(&leads);
        assert_eq!(page.records.len(), 5);
        assert_eq!(page.records[0].id, 20);
        assert_eq!(page.total, 25);
        assert_eq!(page.page_count(), 3);
        assert_eq!(page.summary(), "Showing 21 to 25 of 25 entries");
    }

    #[test]
    fn test_search_and_sort_reset_page() {
        let mut state = LeadTableState::new();
        state.set_page(3);
        state.set_search("lead");
        assert_eq!(state.page(), 1);

        state.set_page(2);
        state.toggle_sort(LeadColumn::Email);
        assert_eq!(state.page(), 1);
        assert_eq!(state.sort(), SortStatus::new(LeadColumn::Email, SortDirection::Asc));

        state.toggle_sort(LeadColumn::Email);
        assert_eq!(state.sort().direction, SortDirection::Desc);
    }

    #[test]
    fn test_page_size_must_be_offered() {
        let mut state = LeadTableState::new();
        state.set_page(2);
        state.set_page_size(7);
        assert_eq!(state.page_size(), 10);
        assert_eq!(state.page(), 2);

        state.set_page_size(20);
        assert_eq!(state.page_size(), 20);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_total_counts_filtered_leads() {
        let leads = make_leads(25);
        let mut state = LeadTableState::new();
        state.set_search("lead 1");
        let page = state.view(&leads);
        assert_eq!(page.total, 10);
        assert_eq!(page.summary(), "Showing 1 to 10 of 10 entries");
    }

    #[test]
    fn test_collection_change_returns_to_first_page() {
        let leads = make_leads(21);
        let mut state = LeadTableState::new();
        state.set_page(3);
        assert_eq!(state.view(&leads).records.len(), 1);

        // Last row deleted
        state.collection_changed();
        let page = state.view(&leads[..20]);
        assert_eq!(page.page, 1);
        assert_eq!(page.records.len(), 10);
        assert_eq!(page.summary(), "Showing 1 to 10 of 20 entries");
    }

    #[test]
    fn test_empty_page_summary() {
        let page = LeadTableState::new().view(&[]);
        assert_eq!(page.summary(), "Showing 0 to 0 of 0 entries");
        assert_eq!(page.page_count(), 1);
    }

    #[test]
    fn test_descending_view() {
        let leads = make_leads(3);
        let mut state = LeadTableState::new();
        state.set_sort(SortStatus::new(LeadColumn::FullName, SortDirection::Desc));
        let ids: Vec<u64> = state.view(&leads).records.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2, 1, 0]);
    }
}
