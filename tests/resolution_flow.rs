use queue_scout::geo::cities;
use queue_scout::location::mock::{MockLocationProvider, MockPermissionProbe};
use queue_scout::location::{PermissionGate, resolve_default_region};

fn supported() -> Vec<String> {
    ["杭州", "上海", "北京", "深圳"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[tokio::test]
async fn user_near_shanghai_resolves_to_shanghai() {
    let shanghai = cities::coordinate_of("上海").expect("上海 in table");
    let mut gate = PermissionGate::new(MockPermissionProbe::granted());
    let provider = MockLocationProvider::at(shanghai);

    let resolved = resolve_default_region(&mut gate, &provider, &supported(), "杭州").await;

    assert_eq!(resolved.as_deref(), Some("上海"));
}

#[tokio::test]
async fn denied_permission_falls_back_to_configured_region() {
    let mut gate = PermissionGate::new(MockPermissionProbe::denied());
    let provider = MockLocationProvider::at(cities::coordinate_of("上海").unwrap());

    let resolved = resolve_default_region(&mut gate, &provider, &supported(), "杭州").await;

    assert_eq!(resolved.as_deref(), Some("杭州"));
}

#[tokio::test]
async fn location_failure_falls_back_even_with_permission() {
    let mut gate = PermissionGate::new(MockPermissionProbe::granted());
    let provider = MockLocationProvider::unavailable();

    let resolved = resolve_default_region(&mut gate, &provider, &supported(), "杭州").await;

    assert_eq!(resolved.as_deref(), Some("杭州"));
}

#[tokio::test]
async fn fallback_absent_from_supported_list_yields_no_selection() {
    let mut gate = PermissionGate::new(MockPermissionProbe::denied());
    let provider = MockLocationProvider::unavailable();
    let supported = vec!["上海".to_string(), "北京".to_string()];

    let resolved = resolve_default_region(&mut gate, &provider, &supported, "杭州").await;

    assert_eq!(resolved, None);
}

#[tokio::test]
async fn no_candidate_in_table_falls_back() {
    let mut gate = PermissionGate::new(MockPermissionProbe::granted());
    let provider = MockLocationProvider::at(cities::coordinate_of("上海").unwrap());
    let supported = vec!["某新区".to_string(), "杭州".to_string()];

    let resolved = resolve_default_region(&mut gate, &provider, &supported, "杭州").await;

    // 某新区 has no table entry; 杭州 still matches by distance.
    assert_eq!(resolved.as_deref(), Some("杭州"));
}

#[tokio::test]
async fn declined_prompt_is_not_reissued_on_a_later_resolution() {
    let mut gate = PermissionGate::new(MockPermissionProbe::unasked(false));
    let provider = MockLocationProvider::at(cities::coordinate_of("上海").unwrap());

    let first = resolve_default_region(&mut gate, &provider, &supported(), "杭州").await;
    // A manual "locate me" re-runs the same steps; the dismissed prompt must
    // not come back.
    let second = resolve_default_region(&mut gate, &provider, &supported(), "杭州").await;

    assert_eq!(first.as_deref(), Some("杭州"));
    assert_eq!(second.as_deref(), Some("杭州"));
}
