//! Lead Table Pipeline
//!
//! Pure filter, sort and page functions over a lead collection.

use super::table::{SortDirection, SortStatus};
use crate::domain::Lead;

/// Keep leads whose name, email, phone or company contains `search`,
/// ignoring case. An empty search keeps everything.
pub fn filter_leads(leads: &[Lead], search: &str) -> Vec<Lead> {
    let needle = search.to_lowercase();
    leads.iter().filter(|lead| lead.matches_search(&needle)).cloned().collect()
}

/// Stable ascending sort by the status column; descending reverses the
/// ascending result, so equal keys come out in reverse original order.
pub fn sort_leads(leads: &mut [Lead], sort: SortStatus) {
    leads.sort_by(|a, b| sort.column.key(a).cmp(sort.column.key(b)));
    if sort.direction == SortDirection::Desc {
        leads.reverse();
    }
}

/// The 1-based `page` window of `page_size` items
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::LeadColumn;
    use proptest::prelude::*;

    fn make_lead(id: u64, full_name: &str, company_name: &str) -> Lead {
        Lead {
            id,
            full_name: full_name.to_string(),
            email: format!("lead{}@example.com", id),
            phone_number: format!("555-{:04}", id),
            lead_status: "New".to_string(),
            company_name: company_name.to_string(),
            ..Default::default()
        }
    }

    fn ids(leads: &[Lead]) -> Vec<u64> {
        leads.iter().map(|l| l.id).collect()
    }

    #[test]
    fn test_filter_single_match_by_name() {
        let leads = vec![
            make_lead(1, "John Doe", "Acme"),
            make_lead(2, "Jane Roe", "Globex"),
            make_lead(3, "Max Payne", "Initech"),
        ];
        let filtered = filter_leads(&leads, "john");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_filter_matches_company_and_phone() {
        let leads = vec![make_lead(1, "A", "Acme"), make_lead(2, "B", "Globex")];
        assert_eq!(ids(&filter_leads(&leads, "GLOB")), vec![2]);
        assert_eq!(ids(&filter_leads(&leads, "555-0001")), vec![1]);
        assert_eq!(filter_leads(&leads, "").len(), 2);
    }

    #[test]
    fn test_descending_reverses_ties() {
        let mut leads = vec![
            make_lead(1, "Same", ""),
            make_lead(2, "Alpha", ""),
            make_lead(3, "Same", ""),
        ];
        sort_leads(&mut leads, SortStatus::new(LeadColumn::FullName, SortDirection::Asc));
        assert_eq!(ids(&leads), vec![2, 1, 3]);

        let mut leads = vec![
            make_lead(1, "Same", ""),
            make_lead(2, "Alpha", ""),
            make_lead(3, "Same", ""),
        ];
        sort_leads(&mut leads, SortStatus::new(LeadColumn::FullName, SortDirection::Desc));
        assert_eq!(ids(&leads), vec![3, 1, 2]);
    }

    #[test]
    fn test_third_page_of_twenty_five() {
        let leads: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(&leads, 3, 10), &leads[20..25]);
        assert!(paginate(&leads, 4, 10).is_empty());
        assert_eq!(paginate(&leads, 1, 10).len(), 10);
    }

    fn arb_lead() -> impl Strategy<Value = Lead> {
        (
            any::<u64>(),
            "[a-zA-Z ]{0,12}",
            "[a-z@.]{0,12}",
            "[0-9-]{0,8}",
            "[a-zA-Z]{0,8}",
        )
            .prop_map(|(id, full_name, email, phone_number, company_name)| Lead {
                id,
                full_name,
                email,
                phone_number,
                company_name,
                lead_status: "New".to_string(),
                ..Default::default()
            })
    }

    fn arb_column() -> impl Strategy<Value = LeadColumn> {
        prop::sample::select(LeadColumn::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_filter_is_matching_subset(leads in prop::collection::vec(arb_lead(), 0..30), search in "[a-zA-Z]{0,3}") {
            let filtered = filter_leads(&leads, &search);
            let needle = search.to_lowercase();
            for lead in &filtered {
                prop_assert!(leads.contains(lead));
                prop_assert!(lead.matches_search(&needle));
            }
            let expected = leads.iter().filter(|l| l.matches_search(&needle)).count();
            prop_assert_eq!(filtered.len(), expected);
        }

        #[test]
        fn prop_ascending_sort_is_stable(leads in prop::collection::vec(arb_lead(), 0..30), column in arb_column()) {
            // Ids double as original positions
            let leads: Vec<Lead> = leads
                .into_iter()
                .enumerate()
                .map(|(index, lead)| Lead { id: index as u64, ..lead })
                .collect();
            let mut sorted = leads.clone();
            sort_leads(&mut sorted, SortStatus::new(column, SortDirection::Asc));
            for pair in sorted.windows(2) {
                let (a, b) = (column.key(&pair[0]), column.key(&pair[1]));
                prop_assert!(a <= b);
                if a == b {
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }

        #[test]
        fn prop_descending_is_reversed_ascending(leads in prop::collection::vec(arb_lead(), 0..30), column in arb_column()) {
            let mut asc = leads.clone();
            sort_leads(&mut asc, SortStatus::new(column, SortDirection::Asc));
            let mut desc = leads.clone();
            sort_leads(&mut desc, SortStatus::new(column, SortDirection::Desc));
            desc.reverse();
            prop_assert_eq!(desc, asc);
        }

        #[test]
        fn prop_page_is_window(len in 0usize..120, page in 1usize..15, size in 1usize..40) {
            let items: Vec<usize> = (0..len).collect();
            let window = paginate(&items, page, size);
            let expected = size.min(len.saturating_sub((page - 1) * size));
            prop_assert_eq!(window.len(), expected);
            if let Some(first) = window.first() {
                prop_assert_eq!(*first, (page - 1) * size);
            }
        }
    }
}
