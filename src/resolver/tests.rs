use super::*;
use crate::fragment::Fragment;
use crate::test_utils::{init_test_logging, names};

fn reversed_chain() -> Vec<Fragment> {
    vec![
        Fragment::new("A").with_dependency("B"),
        Fragment::new("B").with_dependency("C"),
        Fragment::new("C"),
    ]
}

fn valid_chain() -> Vec<Fragment> {
    vec![
        Fragment::new("C"),
        Fragment::new("B").with_dependency("C"),
        Fragment::new("A").with_dependency("B"),
    ]
}

const ALL_POLICIES: [ResolutionPolicy; 3] = [
    ResolutionPolicy::Basic,
    ResolutionPolicy::RequireDependencies,
    ResolutionPolicy::SkipProblems,
];

#[test]
fn test_basic_leaves_valid_order_unchanged() {
    let resolution =
        DependencyResolver::new(ResolutionPolicy::Basic).resolve_detailed(valid_chain()).unwrap();

    assert_eq!(resolution.names(), ["C", "B", "A"]);
    assert_eq!(resolution.passes, 1);
    assert!(resolution.converged);
}

#[test]
fn test_every_policy_is_idempotent_on_valid_order() {
    for policy in ALL_POLICIES {
        let ordered = resolve(valid_chain(), policy).unwrap();
        assert_eq!(names(&ordered), ["C", "B", "A"], "policy {policy}");
    }
}

#[test]
fn test_require_dependencies_reorders_chain() {
    let ordered = resolve(reversed_chain(), ResolutionPolicy::RequireDependencies).unwrap();
    assert_eq!(names(&ordered), ["C", "B", "A"]);
}

#[test]
fn test_every_policy_orders_reversed_chain() {
    for policy in ALL_POLICIES {
        let ordered = resolve(reversed_chain(), policy).unwrap();
        assert!(ordering_violations(&ordered).is_empty(), "policy {policy}: {:?}", names(&ordered));
        assert_eq!(ordered.len(), 3);
    }
}

#[test]
fn test_alias_equivalence() {
    for policy in ALL_POLICIES {
        let fragments = vec![
            Fragment::new("B").with_dependency("foo"),
            Fragment::new("A").with_alias("foo"),
        ];
        let ordered = resolve(fragments, policy).unwrap();
        assert_eq!(names(&ordered), ["A", "B"], "policy {policy}");
    }
}

#[test]
fn test_dependency_on_source_reference() {
    let fragments = vec![
        Fragment::inline("app", "App.start();").with_dependency("~/js/jquery.js"),
        Fragment::external("~/js/jquery.js"),
    ];
    let ordered = resolve(fragments, ResolutionPolicy::RequireDependencies).unwrap();
    assert_eq!(names(&ordered), ["~/js/jquery.js", "app"]);
}

#[test]
fn test_missing_dependency_require_dependencies() {
    let fragments = vec![Fragment::new("X").with_dependency("ghost")];

    let err = resolve(fragments, ResolutionPolicy::RequireDependencies).unwrap_err();
    assert!(
        matches!(
            &err,
            ScriptseqError::MissingDependency { script, dependency }
                if script == "X" && dependency == "ghost"
        ),
        "unexpected error: {err}"
    );
}

#[test]
fn test_missing_dependency_require_fails_on_first() {
    let fragments = vec![
        Fragment::new("ok"),
        Fragment::new("first").with_dependency("ghost-1"),
        Fragment::new("second").with_dependency("ghost-2"),
    ];

    let err = resolve(fragments, ResolutionPolicy::RequireDependencies).unwrap_err();
    assert!(err.to_string().contains("ghost-1"));
}

#[test]
fn test_missing_dependency_skip_problems() {
    let fragments = vec![Fragment::new("X").with_dependency("ghost")];

    let resolution = DependencyResolver::new(ResolutionPolicy::SkipProblems)
        .resolve_detailed(fragments)
        .unwrap();
    assert!(resolution.fragments.is_empty());
    assert_eq!(resolution.skipped.len(), 1);
    assert_eq!(resolution.skipped[0].script, "X");
    assert_eq!(resolution.skipped[0].missing, "ghost");
}

#[test]
fn test_skip_problems_keeps_unaffected_fragments() {
    let fragments = vec![
        Fragment::new("app").with_dependency("lib"),
        Fragment::new("X").with_dependency("ghost"),
        Fragment::new("lib"),
    ];

    let ordered = resolve(fragments, ResolutionPolicy::SkipProblems).unwrap();
    assert_eq!(names(&ordered), ["lib", "app"]);
}

#[test]
fn test_skip_problems_cascades_to_dependents() {
    let fragments = vec![
        Fragment::new("Y").with_dependency("X"),
        Fragment::new("X").with_dependency("ghost"),
        Fragment::new("Z"),
    ];

    let resolution = DependencyResolver::new(ResolutionPolicy::SkipProblems)
        .resolve_detailed(fragments)
        .unwrap();
    assert_eq!(resolution.names(), ["Z"]);
    let dropped: Vec<&str> = resolution.skipped.iter().map(|s| s.script.as_str()).collect();
    assert_eq!(dropped, ["X", "Y"]);
    assert!(resolution.converged);
}

#[test]
fn test_basic_ignores_missing_dependency() {
    let fragments = vec![Fragment::new("X").with_dependency("ghost"), Fragment::new("Y")];

    let ordered = resolve(fragments, ResolutionPolicy::Basic).unwrap();
    assert_eq!(names(&ordered), ["X", "Y"]);
}

#[test]
fn test_first_matching_provider_wins() {
    // Two fragments expose "shared"; the first one after the dependent is pulled.
    let fragments = vec![
        Fragment::new("app").with_dependency("shared"),
        Fragment::new("one").with_alias("shared"),
        Fragment::new("two").with_alias("shared"),
    ];

    let ordered = resolve(fragments, ResolutionPolicy::RequireDependencies).unwrap();
    assert_eq!(names(&ordered), ["one", "app", "two"]);
}

#[test]
fn test_cycle_terminates_at_pass_cap() {
    init_test_logging(None);
    for policy in ALL_POLICIES {
        let fragments =
            vec![Fragment::new("A").with_dependency("B"), Fragment::new("B").with_dependency("A")];

        let resolution = DependencyResolver::new(policy).resolve_detailed(fragments).unwrap();
        assert!(!resolution.converged, "policy {policy}");
        assert_eq!(resolution.passes, MAX_RESOLUTION_PASSES);
        assert_eq!(resolution.fragments.len(), 2);
    }
}

#[test]
fn test_custom_pass_cap() {
    let fragments =
        vec![Fragment::new("A").with_dependency("B"), Fragment::new("B").with_dependency("A")];

    let resolver = DependencyResolver::new(ResolutionPolicy::Basic).with_max_passes(3);
    let resolution = resolver.resolve_detailed(fragments).unwrap();
    assert_eq!(resolution.passes, 3);

    assert_eq!(DependencyResolver::default().with_max_passes(0).max_passes(), 1);
}

#[test]
fn test_diamond_ordering() {
    let fragments = vec![
        Fragment::new("app").with_dependencies(["left", "right"]),
        Fragment::new("left").with_dependency("core"),
        Fragment::new("right").with_dependency("core"),
        Fragment::new("core"),
    ];

    for policy in ALL_POLICIES {
        let ordered = resolve(fragments.clone(), policy).unwrap();
        assert!(ordering_violations(&ordered).is_empty(), "policy {policy}: {:?}", names(&ordered));
    }
}

#[test]
fn test_dependency_only_flag_is_inert_in_resolver() {
    // Pending a product decision the resolver treats dependency-only fragments
    // like any other: they are neither dropped nor moved for being unused.
    let fragments = vec![
        Fragment::new("unused").with_dependency_only(true),
        Fragment::new("app"),
    ];

    for policy in ALL_POLICIES {
        let ordered = resolve(fragments.clone(), policy).unwrap();
        assert_eq!(names(&ordered), ["unused", "app"], "policy {policy}");
    }
}

#[test]
fn test_empty_input() {
    for policy in ALL_POLICIES {
        assert!(resolve(Vec::new(), policy).unwrap().is_empty());
    }
}

#[test]
fn test_policy_display_and_serde() {
    assert_eq!(ResolutionPolicy::RequireDependencies.to_string(), "require-dependencies");
    assert_eq!(ResolutionPolicy::default(), ResolutionPolicy::Basic);

    let parsed: ResolutionPolicy = serde_json::from_str("\"skip-problems\"").unwrap();
    assert_eq!(parsed, ResolutionPolicy::SkipProblems);
}
