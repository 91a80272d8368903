//! Behaviour tests for the market-table view model: filter, sort, paginate,
//! and the state-reset rules around them.

use marketclock_tests::{
    market, MarketTable, NormalizedMarket, SortDirection, SortKey, ViewState,
};

fn normalized(region: &str, is_open_now: bool) -> NormalizedMarket {
    NormalizedMarket {
        record: market(region, "09:00", "17:00", ""),
        viewer_hours: String::from("09:00-17:00"),
        is_open_now,
        degraded: false,
    }
}

fn batch_of(count: usize) -> Vec<NormalizedMarket> {
    (0..count)
        .map(|index| normalized(&format!("Region {index:02}"), index % 2 == 0))
        .collect()
}

fn regions(view: &marketclock_tests::PageView) -> Vec<&str> {
    view.records
        .iter()
        .map(|market| market.record.region.as_str())
        .collect()
}

// =============================================================================
// Status sort is a boolean partition
// =============================================================================

#[test]
fn when_sorted_by_status_descending_open_markets_come_first_in_stable_order() {
    // Given: alternating open/closed markets A..D
    let table = MarketTable::with_markets(vec![
        normalized("Alpha", true),
        normalized("Bravo", false),
        normalized("Charlie", true),
        normalized("Delta", false),
    ]);

    // When: the default view (status, descending) is derived
    let view = table.visible_page();

    // Then: open precede closed, each side keeping its pre-sort order
    assert_eq!(regions(&view), ["Alpha", "Charlie", "Bravo", "Delta"]);
}

#[test]
fn when_sorted_by_status_ascending_the_partition_flips() {
    let mut table = MarketTable::with_markets(vec![
        normalized("Alpha", true),
        normalized("Bravo", false),
        normalized("Charlie", true),
        normalized("Delta", false),
    ]);
    table.set_sort(SortKey::Status); // toggles the default Descending

    let view = table.visible_page();

    assert_eq!(view.sort_direction, SortDirection::Ascending);
    assert_eq!(regions(&view), ["Bravo", "Delta", "Alpha", "Charlie"]);
}

#[test]
fn when_sorted_by_region_ordering_is_lexicographic() {
    let mut table = MarketTable::with_markets(vec![
        normalized("Japan", false),
        normalized("Brazil", true),
        normalized("Germany", false),
    ]);
    table.set_sort(SortKey::Region);

    assert_eq!(regions(&table.visible_page()), ["Brazil", "Germany", "Japan"]);

    table.set_sort(SortKey::Region); // same column again: toggle to descending
    assert_eq!(regions(&table.visible_page()), ["Japan", "Germany", "Brazil"]);
}

// =============================================================================
// Search filter
// =============================================================================

#[test]
fn when_searching_all_three_text_fields_are_matched_case_insensitively() {
    let mut with_type = normalized("Germany", false);
    with_type.record.market_type = String::from("Japanese Bonds");
    let mut with_exchange = normalized("Mexico", false);
    with_exchange.record.primary_exchanges = String::from("JAPEX");

    let mut table = MarketTable::with_markets(vec![
        normalized("Japan", true),
        normalized("Canada", false),
        with_type,
        with_exchange,
    ]);
    table.set_search("jap");

    let view = table.visible_page();
    assert_eq!(view.filtered_count, 3);
    // Status partition: the open Japan row first, then source order
    assert_eq!(regions(&view), ["Japan", "Germany", "Mexico"]);
}

#[test]
fn when_the_query_is_empty_every_record_passes_in_order() {
    let mut table = MarketTable::with_markets(batch_of(4));
    table.set_search("");
    table.set_sort(SortKey::Region); // deterministic order for the assertion

    let view = table.visible_page();
    assert_eq!(view.filtered_count, 4);
    assert_eq!(
        regions(&view),
        ["Region 00", "Region 01", "Region 02", "Region 03"]
    );
}

#[test]
fn when_nothing_matches_the_view_is_empty_but_well_formed() {
    let mut table = MarketTable::with_markets(batch_of(4));
    table.set_search("zanzibar");

    let view = table.visible_page();
    assert!(view.records.is_empty());
    assert_eq!(view.filtered_count, 0);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.range_label, "0-0 of 0");
}

// =============================================================================
// Pagination
// =============================================================================

#[test]
fn when_25_records_fill_3_pages_requests_are_clamped_to_range() {
    let mut table = MarketTable::with_markets(batch_of(25));
    assert_eq!(table.total_pages(), 3);

    table.set_page(5);
    assert_eq!(table.state().page, 3, "past-the-end request clamps to last");

    table.set_page(0);
    assert_eq!(table.state().page, 1, "page zero clamps to first");
}

#[test]
fn the_last_page_holds_the_remainder_and_labels_its_range() {
    let mut table = MarketTable::with_markets(batch_of(25));
    table.set_sort(SortKey::Region);
    table.set_page(3);

    let view = table.visible_page();
    assert_eq!(view.records.len(), 5);
    assert_eq!(view.range_label, "21-25 of 25");
    assert_eq!(view.page, 3);
    assert_eq!(view.total_pages, 3);
}

#[test]
fn when_search_or_sort_changes_the_page_resets_to_first() {
    let mut table = MarketTable::with_markets(batch_of(25));

    table.set_page(3);
    table.set_search("region");
    assert_eq!(table.state().page, 1, "new query must reset the page");

    table.set_page(3);
    table.set_sort(SortKey::Region);
    assert_eq!(table.state().page, 1, "new sort must reset the page");
}

// =============================================================================
// Batch refresh
// =============================================================================

#[test]
fn when_a_smaller_batch_arrives_selections_survive_but_the_page_is_reclamped() {
    let mut table = MarketTable::with_markets(batch_of(25));
    table.set_search("region");
    table.set_sort(SortKey::Region);
    table.set_page(3);

    // A refresh replaces the list wholesale; no incremental merge
    table.replace_markets(batch_of(5));

    let state = table.state();
    assert_eq!(state.search, "region");
    assert_eq!(state.sort_key, SortKey::Region);
    assert_eq!(state.page, 1, "page must be clamped against the new size");
}

#[test]
fn when_an_empty_batch_arrives_the_table_stays_usable() {
    let mut table = MarketTable::with_markets(batch_of(12));
    table.set_page(2);

    table.replace_markets(Vec::new());

    let view = table.visible_page();
    assert!(view.records.is_empty());
    assert_eq!(view.page, 1);
    assert_eq!(view.total_pages, 1);
}

// =============================================================================
// Derived metadata
// =============================================================================

#[test]
fn the_view_echoes_the_sort_affordance_state() {
    let table = MarketTable::with_state(
        batch_of(3),
        ViewState {
            search: String::new(),
            sort_key: SortKey::TradingHours,
            sort_direction: SortDirection::Descending,
            page: 9,
        },
    );

    let view = table.visible_page();
    assert_eq!(view.sort_key, SortKey::TradingHours);
    assert_eq!(view.sort_direction, SortDirection::Descending);
    assert_eq!(view.page, 1, "explicit state is clamped on construction");
}
