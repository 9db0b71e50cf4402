//! Properties that must hold for any record set.

use marquee_lib::model::Record;
use marquee_lib::table::engine;
use marquee_lib::table::paginate::page_window;
use marquee_lib::table::paginate::paginate;
use marquee_lib::table::paginate::total_pages;
use marquee_lib::table::{Column, DataTable, Direction, FilterClause, PageLink, SortState, ViewConfig};
use proptest::prelude::*;
use proptest::test_runner::Config;

const STATUSES: [&str; 3] = ["Active", "Inactive", "Pending"];

fn records(names: &[String], statuses: &[usize], scores: &[i64]) -> Vec<Record> {
    names
        .iter()
        .zip(statuses)
        .zip(scores)
        .enumerate()
        .map(|(i, ((name, status), score))| {
            Record::new(format!("#{}", i))
                .set("name", name.as_str())
                .set("status", STATUSES[*status])
                .set("score", *score)
        })
        .collect()
}

fn columns() -> Vec<Column<Record>> {
    vec![
        Column::field("name", "Name").sortable(),
        Column::field("status", "Status").filterable(),
        Column::field("score", "Score").sortable(),
    ]
}

fn dataset(max: usize) -> impl Strategy<Value = Vec<Record>> {
    (0..max).prop_flat_map(|n| {
        (
            prop::collection::vec("[a-cA-C ]{0,8}", n),
            prop::collection::vec(0..STATUSES.len(), n),
            prop::collection::vec(0_i64..5, n),
        )
            .prop_map(|(names, statuses, scores)| records(&names, &statuses, &scores))
    })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn search_keeps_exactly_the_matches(rows in dataset(30), term in "[a-cA-C]{1,2}") {
        let all: Vec<&Record> = rows.iter().collect();
        let kept = engine::search(all, &term, None);
        let needle = term.to_lowercase();
        for row in &rows {
            let name = row.get_string("name").unwrap().unwrap_or_default().to_lowercase();
            let status = row.get_string("status").unwrap().unwrap_or_default().to_lowercase();
            let matches = name.contains(&needle) || status.contains(&needle);
            let included = kept.iter().any(|r| r.id() == row.id());
            prop_assert_eq!(matches, included);
        }
    }

    #[test]
    fn filter_keeps_rows_satisfying_every_clause(
        rows in dataset(30),
        wanted in prop::collection::btree_set(0..STATUSES.len(), 1..=STATUSES.len()),
        max_score in 0_i64..5,
    ) {
        let status = FilterClause::any_of("status", wanted.iter().map(|i| STATUSES[*i]));
        let score = FilterClause::any_of("score", 0..=max_score);
        let clauses = vec![status, score];
        let all: Vec<&Record> = rows.iter().collect();
        let kept = engine::filter(all, &clauses, &columns());
        for row in &rows {
            let s = row.get_string("status").unwrap().unwrap_or_default();
            let n = row.get_long("score").unwrap().unwrap_or_default();
            let satisfies = wanted.iter().any(|i| STATUSES[*i] == s) && n <= max_score;
            let included = kept.iter().any(|r| r.id() == row.id());
            prop_assert_eq!(satisfies, included);
        }
    }

    #[test]
    fn descending_is_reversed_ascending_up_to_ties(rows in dataset(30), by_name in any::<bool>()) {
        let key = if by_name { "name" } else { "score" };
        let columns = columns();
        let asc = engine::sort(rows.iter().collect(), &SortState::asc(key), &columns);
        let desc = engine::sort(rows.iter().collect(), &SortState::desc(key), &columns);
        let value = |r: &&Record| r.get(key).cloned().unwrap_or_default();
        let mut reversed: Vec<_> = asc.iter().map(value).collect();
        reversed.reverse();
        let descending: Vec<_> = desc.iter().map(value).collect();
        prop_assert_eq!(reversed, descending);
    }

    #[test]
    fn page_slice_length(total in 0_usize..200, size in 1_usize..25, page in 1_usize..12) {
        let rows: Vec<usize> = (0..total).collect();
        let slice = paginate(&rows, page, size);
        let expected = size.min(total.saturating_sub((page - 1) * size));
        prop_assert_eq!(slice.len(), expected);
        prop_assert_eq!(slice.total_count(), total);
    }

    #[test]
    fn page_window_is_bounded(total in 1_usize..500, current in 1_usize..500) {
        let current = current.min(total);
        let window = page_window(total, current);
        prop_assert!(window.len() <= 7);
        prop_assert!(window.contains(&PageLink::Page(current)));
        prop_assert!(window.contains(&PageLink::Page(total)));
    }

    #[test]
    fn query_changes_reset_page(rows in dataset(60), page in 1_usize..8, change in 0_u8..3) {
        let table = DataTable::new(columns(), rows).with_config(ViewConfig::new().with_page_size(5));
        table.set_page(page);
        match change {
            0 => table.set_search("a"),
            1 => table.set_filter("status", ["Active"]).unwrap(),
            _ => table.set_sort("score", Direction::Desc).unwrap(),
        }
        prop_assert_eq!(table.page(), 1);
        prop_assert!(table.page() <= total_pages(table.total_count(), 5));
    }
}
