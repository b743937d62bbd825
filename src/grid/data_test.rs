use super::*;

#[test]
fn fetch_first_page_yields_offset_range() {
    let provider = RangeDataProvider::new();
    let rows: Vec<u32> = provider.fetch(&Query::new(0, 20)).collect();
    assert_eq!(rows, (0..20).collect::<Vec<_>>());
}

#[test]
fn fetch_is_restartable() {
    let provider = RangeDataProvider::new();
    let query = Query::new(9_990, 5);
    let first: Vec<u32> = provider.fetch(&query).collect();
    let second: Vec<u32> = provider.fetch(&query).collect();
    assert_eq!(first, vec![9_990, 9_991, 9_992, 9_993, 9_994]);
    assert_eq!(first, second);
}

#[test]
fn size_ignores_query_window() {
    let provider = RangeDataProvider::new();
    assert_eq!(provider.size(&Query::new(0, 0)), DEFAULT_ROW_COUNT);
    assert_eq!(provider.size(&Query::new(5_000, 50)), 10_000);
    assert_eq!(provider.size(&Query::new(u32::MAX, u32::MAX)), 10_000);
}

#[test]
fn zero_limit_yields_nothing() {
    let provider = RangeDataProvider::new();
    assert_eq!(provider.fetch(&Query::new(42, 0)).count(), 0);
}

#[test]
fn range_saturates_instead_of_overflowing() {
    let query = Query::new(u32::MAX - 2, 10);
    assert_eq!(query.range(), (u32::MAX - 2)..u32::MAX);
}
