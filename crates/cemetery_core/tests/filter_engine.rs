use cemetery_core::{
    apply_filters, BurialSpace, BurialSpaceKind, Category, FilterSpec, NewBurialSpace, Priority,
    StatusFilter,
};
use uuid::Uuid;

fn space(name: &str, description: &str, category: &str, priority: Priority, active: bool) -> BurialSpace {
    let input = NewBurialSpace::new(
        name,
        category,
        priority,
        BurialSpaceKind::Columbarium {
            niche_count: 20,
            indoor: true,
        },
    )
    .with_description(description);
    let mut record = BurialSpace::from_input(Uuid::new_v4(), input, 1_000);
    record.active = active;
    record
}

fn fixture() -> Vec<BurialSpace> {
    vec![
        space("Plot 12", "east lawn", "standard", Priority::Low, true),
        space("Plot 7", "Family vault", "premium", Priority::High, true),
        space("Niche A3", "indoor wall", "standard", Priority::Medium, false),
        space("Garden 2", "near the FOUNTAIN", "premium", Priority::Low, false),
    ]
}

fn names(records: &[BurialSpace]) -> Vec<&str> {
    records.iter().map(|record| record.name.as_str()).collect()
}

#[test]
fn default_spec_returns_input_unchanged() {
    let records = fixture();
    let filtered = apply_filters(&records, &FilterSpec::default());
    assert_eq!(filtered, records);
}

#[test]
fn search_scenario_matches_name_substring() {
    let a = space("Plot 12", "", "standard", Priority::Low, true);
    let b = space("Plot 7", "", "premium", Priority::High, true);
    let spec = FilterSpec {
        search_text: "12".to_string(),
        ..FilterSpec::default()
    };

    let filtered = apply_filters(&[a.clone(), b], &spec);
    assert_eq!(filtered, vec![a]);
}

#[test]
fn search_is_case_insensitive_over_name_and_description() {
    let records = fixture();
    let by_description = FilterSpec {
        search_text: "fountain".to_string(),
        ..FilterSpec::default()
    };
    assert_eq!(names(&apply_filters(&records, &by_description)), vec!["Garden 2"]);

    let by_name = FilterSpec {
        search_text: "PLOT".to_string(),
        ..FilterSpec::default()
    };
    assert_eq!(
        names(&apply_filters(&records, &by_name)),
        vec!["Plot 12", "Plot 7"]
    );
}

#[test]
fn search_text_whitespace_is_significant() {
    let records = vec![
        space("Plot12", "", "standard", Priority::Low, true),
        space("Plot 7", "", "standard", Priority::Low, true),
    ];

    let single_space = FilterSpec {
        search_text: " ".to_string(),
        ..FilterSpec::default()
    };
    assert_eq!(names(&apply_filters(&records, &single_space)), vec!["Plot 7"]);

    let trailing_space = FilterSpec {
        search_text: "plot ".to_string(),
        ..FilterSpec::default()
    };
    assert_eq!(names(&apply_filters(&records, &trailing_space)), vec!["Plot 7"]);

    let empty = FilterSpec::default();
    assert_eq!(apply_filters(&records, &empty).len(), records.len());
}

#[test]
fn status_filter_splits_active_and_inactive() {
    let records = fixture();
    let active = FilterSpec {
        status: StatusFilter::Active,
        ..FilterSpec::default()
    };
    let inactive = FilterSpec {
        status: StatusFilter::Inactive,
        ..FilterSpec::default()
    };

    assert_eq!(names(&apply_filters(&records, &active)), vec!["Plot 12", "Plot 7"]);
    assert_eq!(
        names(&apply_filters(&records, &inactive)),
        vec!["Niche A3", "Garden 2"]
    );
}

#[test]
fn criteria_combine_conjunctively_and_keep_order() {
    let records = fixture();
    let spec = FilterSpec {
        status: StatusFilter::Inactive,
        category: Some(Category::new("premium")),
        priority: Some(Priority::Low),
        search_text: "garden".to_string(),
    };
    assert_eq!(names(&apply_filters(&records, &spec)), vec!["Garden 2"]);

    let premium = FilterSpec {
        category: Some(Category::new("Premium")),
        ..FilterSpec::default()
    };
    assert_eq!(
        names(&apply_filters(&records, &premium)),
        vec!["Plot 7", "Garden 2"]
    );
}

#[test]
fn filtering_does_not_mutate_input_and_is_deterministic() {
    let records = fixture();
    let snapshot = records.clone();
    let spec = FilterSpec::from_form("active", "all", "high", "plot").unwrap();

    let first = apply_filters(&records, &spec);
    let second = apply_filters(&records, &spec);

    assert_eq!(records, snapshot);
    assert_eq!(first, second);
    assert_eq!(names(&first), vec!["Plot 7"]);
}
