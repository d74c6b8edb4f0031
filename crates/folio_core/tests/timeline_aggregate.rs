use folio_core::{load_collection, Category, CategoryFilter, TimelineAggregator, TimelineEntry};
use serde_json::json;

fn entry(id: &str, date: &str, category: Category) -> TimelineEntry {
    TimelineEntry::new(id, id.to_uppercase(), date, category)
}

fn sample() -> Vec<TimelineEntry> {
    vec![
        entry("cli-tool", "2023-11", Category::Project),
        entry("hackathon", "2024-03", Category::Activity),
        entry("rust-post", "2024-03", Category::Writing),
        entry("site", "2024-08", Category::Project),
        entry("meetup", "2022-05", Category::Activity),
    ]
}

fn ids(entries: &[&TimelineEntry]) -> Vec<String> {
    entries.iter().map(|entry| entry.id.clone()).collect()
}

#[test]
fn two_entry_example_sorts_filters_and_counts() {
    let aggregator = TimelineAggregator::new(vec![
        entry("x", "2024-01", Category::Project),
        entry("y", "2024-06", Category::Activity),
    ]);

    let sorted = aggregator
        .sorted()
        .iter()
        .map(|entry| entry.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(sorted, vec!["y", "x"]);

    let view = aggregator.view(CategoryFilter::Only(Category::Project));
    assert_eq!(ids(&view.entries), vec!["x"]);
    assert_eq!(view.counts.project, 1);
    assert_eq!(view.counts.activity, 1);
    assert_eq!(view.counts.writing, 0);
    assert_eq!(view.counts.all, 2);
}

#[test]
fn sorted_output_is_permutation_with_non_increasing_dates() {
    let input = sample();
    let aggregator = TimelineAggregator::new(input.clone());
    let sorted = aggregator.sorted();

    assert_eq!(sorted.len(), input.len());
    for original in &input {
        assert!(sorted.contains(original), "missing {}", original.id);
    }
    for pair in sorted.windows(2) {
        assert!(
            pair[0].date >= pair[1].date,
            "{} before {}",
            pair[0].date,
            pair[1].date
        );
    }
}

#[test]
fn equal_dates_keep_source_order() {
    let aggregator = TimelineAggregator::new(sample());
    let march = aggregator
        .sorted()
        .iter()
        .filter(|entry| entry.date == "2024-03")
        .map(|entry| entry.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(march, vec!["hackathon", "rust-post"]);
}

#[test]
fn counts_reflect_unfiltered_collection_for_every_filter() {
    let aggregator = TimelineAggregator::new(sample());
    let filters = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Project),
        CategoryFilter::Only(Category::Activity),
        CategoryFilter::Only(Category::Writing),
    ];

    for filter in filters {
        let view = aggregator.view(filter);
        assert_eq!(view.counts.all, 5, "filter {filter}");
        assert_eq!(view.counts.project, 2);
        assert_eq!(view.counts.activity, 2);
        assert_eq!(view.counts.writing, 1);
        assert_eq!(view.entries.len(), view.counts.get(filter));
        assert!(view
            .entries
            .iter()
            .all(|entry| filter.matches(entry.category)));
    }
}

#[test]
fn all_filter_matches_sorted_collection_exactly() {
    let aggregator = TimelineAggregator::new(sample());
    let all = aggregator.filter(CategoryFilter::All);
    let sorted = aggregator.sorted().iter().collect::<Vec<_>>();
    assert_eq!(all, sorted);
}

#[test]
fn malformed_collection_degrades_to_empty_view() {
    let entries: Vec<TimelineEntry> = load_collection(r#"{"not":"an array"}"#);
    let aggregator = TimelineAggregator::new(entries);

    let view = aggregator.view(CategoryFilter::All);
    assert!(view.entries.is_empty());
    assert_eq!(view.counts.all, 0);
    assert!(aggregator.is_empty());
}

#[test]
fn wire_format_uses_bundle_field_names() {
    let json = json!([{
        "id": "portfolio",
        "title": "Portfolio site",
        "summary": "Personal site",
        "tags": ["React", "TypeScript"],
        "date": "2024-02",
        "category": "project",
        "hasDetail": true,
        "externalLink": "https://example.com",
        "developmentType": "individual"
    }])
    .to_string();

    let entries: Vec<TimelineEntry> = load_collection(&json);
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert!(entry.has_detail);
    assert_eq!(entry.external_link.as_deref(), Some("https://example.com"));
    assert_eq!(
        entry.development_type,
        Some(folio_core::DevelopmentType::Individual)
    );

    let aggregator = TimelineAggregator::new(entries);
    assert_eq!(ids(&aggregator.with_tag("React")), vec!["portfolio"]);
    assert!(aggregator.with_tag("react").is_empty());
    assert_eq!(aggregator.detail_key("portfolio"), Some("portfolio"));
}

#[test]
fn unknown_category_value_drops_only_that_entry() {
    let json = json!([
        {"id": "ok", "title": "Ok", "date": "2024-01", "category": "activity"},
        {"id": "bad", "title": "Bad", "date": "2024-02", "category": "talk"}
    ])
    .to_string();

    let aggregator = TimelineAggregator::new(load_collection(&json));
    assert_eq!(aggregator.len(), 1);
    assert!(aggregator.find("ok").is_some());
    assert!(aggregator.find("bad").is_none());
}
