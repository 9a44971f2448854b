use proptest::prelude::*;
use reverse_router_rs::record::{FieldRef, FieldType, RecordError, Reflect, Reflection};
use reverse_router_rs::reverse::OptionsError;
use reverse_router_rs::{
    CheckOptions, Handler, IrreversibleRoutes, Multiplexer, MuxError, NonExistentRoutes, Request,
    Response, ReverseError, RouteMatch, RouteRegistry, route_table,
};
use parking_lot::Mutex;
use std::sync::Arc;

route_table! {
    #[derive(Debug, Default)]
    struct NoRoutes {}
}

route_table! {
    #[derive(Debug, Default)]
    struct HelloRoutes {
        root: String = "/",
        hello: String = "/hello/",
        ignore: String = "/ignore/",
    }
}

route_table! {
    #[derive(Debug, Default)]
    struct WithCounter {
        root: String = "/",
        hits: u64,
    }
}

/// A route table whose fields are only known at runtime.
struct Listed(Vec<String>);

impl Reflect for Listed {
    fn reflect(&self) -> Reflection<'_> {
        Reflection::Record(
            self.0
                .iter()
                .map(|pattern| FieldRef::new("route", pattern.field_value()))
                .collect(),
        )
    }
}

/// Accepts every pattern, duplicates included.
#[derive(Default)]
struct PermissiveMux {
    seen: Mutex<Vec<String>>,
}

impl Multiplexer for PermissiveMux {
    fn handle(&self, pattern: &str, _handler: Arc<dyn Handler>) -> Result<(), MuxError> {
        self.seen.lock().push(pattern.to_string());
        Ok(())
    }

    fn handler(&self, _req: &Request) -> RouteMatch {
        RouteMatch::new(Arc::new(reverse_router_rs::mux::NotFound), "")
    }
}

fn noop(_: &Request, _: &mut Response) {}

fn hello_registry() -> RouteRegistry {
    let registry: RouteRegistry = RouteRegistry::default();
    for pattern in ["/", "/hello/", "/ignore/"] {
        registry.handle_fn(pattern, noop).expect("pattern should register");
    }
    registry
}

route_table! {
    #[derive(Debug, Default)]
    struct StaticHelloRoutes {
        root: &'static str = "/",
        hello: &'static str = "/hello/",
        ignore: &'static str = "/ignore/",
    }
}

fn sorted(values: &[String]) -> Vec<String> {
    let mut values = values.to_vec();
    values.sort();
    values
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn reverse_when_reference_record_is_empty_then_all_routes_are_irreversible() {
    let registry = hello_registry();

    let err = registry
        .check_reverse(&NoRoutes::default())
        .expect_err("expected irreversible routes");
    assert_eq!(
        err,
        ReverseError::IrreversibleRoutes(IrreversibleRoutes(strings(&[
            "/", "/hello/", "/ignore/"
        ])))
    );
}

#[test]
fn reverse_when_reference_is_unregistered_then_non_existent_wins() {
    let registry = hello_registry();
    let routes = HelloRoutes {
        root: "/".into(),
        hello: "/hello/".into(),
        ignore: "/other/".into(),
    };

    let err = registry
        .check_reverse(&routes)
        .expect_err("expected non-existent routes");
    assert_eq!(
        err,
        ReverseError::NonExistentRoutes(NonExistentRoutes(strings(&["/other/"])))
    );
}

#[test]
fn reverse_when_static_str_table_is_filled_then_check_passes() {
    let registry = hello_registry();
    let routes: StaticHelloRoutes =
        reverse_router_rs::populated().expect("static str fields should fill");

    assert_eq!(routes.hello, "/hello/");
    registry
        .check_reverse(&routes)
        .expect("filled static routes should be reversible");
}

#[test]
fn reverse_when_references_match_registrations_then_check_passes() {
    let registry = hello_registry();
    let routes: HelloRoutes = reverse_router_rs::populated().expect("defaults should fill");

    registry.check_reverse(&routes).expect("routes should be reversible");
    registry
        .check_reverse(&Arc::new(Box::new(routes)))
        .expect("indirections should be followed");
}

#[test]
fn reverse_when_given_a_number_then_reports_invalid_input() {
    let registry = hello_registry();

    let err = registry.check_reverse(&42).expect_err("expected invalid input");
    assert_eq!(
        err,
        ReverseError::InvalidInput(RecordError::NonRecord { type_name: "i32" })
    );
    assert_eq!(err.kind(), "invalid_input");
}

#[test]
fn reverse_when_record_has_non_string_field_then_reports_invalid_input() {
    let registry = hello_registry();

    match registry.check_reverse(&WithCounter::default()) {
        Err(ReverseError::InvalidInput(RecordError::NonStringField { field, .. })) => {
            assert_eq!(field, "hits");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn reverse_when_indirection_is_null_then_reports_invalid_input() {
    let registry = hello_registry();
    let missing: Option<HelloRoutes> = None;

    match registry.check_reverse(&missing) {
        Err(ReverseError::InvalidInput(RecordError::NullIndirection { .. })) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn reverse_when_route_is_tolerated_then_it_is_not_irreversible() {
    let registry = hello_registry();
    registry
        .handle_fn("/healthz", noop)
        .expect("health route should register");
    let routes: HelloRoutes = reverse_router_rs::populated().expect("defaults should fill");

    let options = CheckOptions::builder()
        .tolerate("/healthz")
        .build()
        .expect("options should build");
    registry
        .check_reverse_with(&options, &routes)
        .expect("tolerated route should pass");

    assert!(matches!(
        registry.check_reverse(&routes),
        Err(ReverseError::IrreversibleRoutes(_))
    ));
}

#[test]
fn reverse_when_tolerated_pattern_is_empty_then_options_fail() {
    let err = CheckOptions::builder()
        .tolerate("")
        .build()
        .expect_err("expected options error");
    assert_eq!(err, OptionsError::EmptyToleratedPattern { index: 0 });
}

#[test]
fn reverse_when_diffed_then_both_sides_are_reported() {
    let registry = hello_registry();
    let diff = registry
        .reverse_diff(&Listed(strings(&["/", "/missing"])))
        .expect("record should be valid");

    assert_eq!(diff.irreversible, strings(&["/hello/", "/ignore/"]));
    assert_eq!(diff.non_existent, strings(&["/missing"]));
}

#[test]
fn registry_when_host_rejects_pattern_then_it_is_not_recorded() {
    let registry = hello_registry();

    let err = registry.handle_fn("/hello/", noop).expect_err("duplicate");
    assert_eq!(
        err,
        MuxError::MultipleRegistrations {
            pattern: "/hello/".to_string()
        }
    );
    assert!(registry.handle_fn("", noop).is_err());

    assert_eq!(registry.patterns(), strings(&["/", "/hello/", "/ignore/"]));
    let metrics = registry.metrics();
    assert_eq!(metrics.total_routes_registered, 3);
    assert_eq!(metrics.rejected_registrations, 2);
}

#[test]
fn registry_when_host_accepts_duplicates_then_check_treats_them_as_one() {
    let registry = RouteRegistry::new(PermissiveMux::default());
    for pattern in ["/a/", "/b", "/a/", "/b"] {
        registry.handle_fn(pattern, noop).expect("permissive host");
    }

    assert_eq!(registry.mux().seen.lock().len(), 4);
    registry
        .check_reverse(&Listed(strings(&["/b", "/a/"])))
        .expect("duplicates should collapse");
}

#[test]
fn registry_when_registered_concurrently_then_every_pattern_is_recorded() {
    let registry: RouteRegistry = RouteRegistry::default();
    let threads = 8;
    let per_thread = 50;

    std::thread::scope(|scope| {
        for t in 0..threads {
            let registry = &registry;
            scope.spawn(move || {
                for i in 0..per_thread {
                    registry
                        .handle_fn(&format!("/t{t}/r{i}/"), noop)
                        .expect("pattern should register");
                }
            });
        }
        scope.spawn(|| {
            for _ in 0..10 {
                let _ = registry.reverse_diff(&Listed(Vec::new()));
            }
        });
    });

    let expected: Vec<String> = (0..threads)
        .flat_map(|t| (0..per_thread).map(move |i| format!("/t{t}/r{i}/")))
        .collect();
    assert_eq!(registry.patterns().len(), threads * per_thread);
    registry
        .check_reverse(&Listed(expected))
        .expect("every pattern should be recorded");
}

proptest! {
    #[test]
    fn reverse_when_orders_are_permuted_then_result_is_unchanged(
        (registered, referenced) in (
            prop::collection::btree_set("/[a-e]{1,3}/?", 0..12),
            prop::collection::btree_set("/[a-e]{1,3}/?", 0..12),
        ).prop_flat_map(|(registered, referenced)| {
            let registered: Vec<String> = registered.into_iter().collect();
            let referenced: Vec<String> = referenced.into_iter().collect();
            (
                Just(registered).prop_shuffle(),
                Just(referenced).prop_shuffle(),
            )
        }),
    ) {
        let baseline: RouteRegistry = RouteRegistry::default();
        for pattern in sorted(&registered) {
            baseline.handle_fn(&pattern, noop).expect("distinct patterns register");
        }
        let shuffled: RouteRegistry = RouteRegistry::default();
        for pattern in &registered {
            shuffled.handle_fn(pattern, noop).expect("distinct patterns register");
        }

        let expected = baseline.check_reverse(&Listed(sorted(&referenced)));
        let actual = shuffled.check_reverse(&Listed(referenced.clone()));
        prop_assert_eq!(actual, expected);

        let diff = shuffled
            .reverse_diff(&Listed(referenced))
            .expect("listed records are valid");
        prop_assert_eq!(diff.irreversible.clone(), sorted(&diff.irreversible));
        prop_assert_eq!(diff.non_existent.clone(), sorted(&diff.non_existent));
    }

    #[test]
    fn reverse_when_references_equal_registrations_then_check_passes(
        registered in prop::collection::btree_set("/[a-z]{1,4}/?", 0..16)
            .prop_flat_map(|set| Just(set.into_iter().collect::<Vec<String>>()).prop_shuffle()),
    ) {
        let registry: RouteRegistry = RouteRegistry::default();
        for pattern in &registered {
            registry.handle_fn(pattern, noop).expect("distinct patterns register");
        }
        let mut referenced = registered.clone();
        referenced.reverse();
        referenced.extend(registered.iter().take(2).cloned());

        prop_assert_eq!(registry.check_reverse(&Listed(referenced)), Ok(()));
    }
}
