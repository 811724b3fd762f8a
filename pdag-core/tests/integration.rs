use pdag_core::{add_parser, id_of, new_edge, new_literal_edge, normalize, optimize, Context, NoopAnnotator};
use serde_json::Value;

fn literal_path(ctx: &mut Context, mut root: petgraph::graph::NodeIndex, text: &str) -> petgraph::graph::NodeIndex {
    for b in text.bytes() {
        add_parser(ctx, &mut root, new_literal_edge(b)).unwrap();
    }
    root
}

/// Scenario 1 (spec.md section 8): two samples sharing a literal prefix,
/// one resolving via ipv4 and one via word.
#[test]
fn login_from_ip_or_host() {
    let mut ctx = Context::new();

    let mut ip_branch = literal_path(&mut ctx, ctx.main_root(), "login from ");
    add_parser(
        &mut ctx,
        &mut ip_branch,
        new_edge("ip", id_of("ipv4").unwrap(), None, None, None).unwrap(),
    )
    .unwrap();
    ctx.set_terminal(ip_branch, true);

    let mut host_branch = literal_path(&mut ctx, ctx.main_root(), "login from ");
    add_parser(
        &mut ctx,
        &mut host_branch,
        new_edge("host", id_of("word").unwrap(), None, None, None).unwrap(),
    )
    .unwrap();
    ctx.set_terminal(host_branch, true);

    optimize(&mut ctx);

    let ip_case = normalize(&ctx, "login from 10.0.0.1", &NoopAnnotator);
    assert!(ip_case.is_matched());
    assert_eq!(ip_case.result().get("ip"), Some(&Value::String("10.0.0.1".into())));

    let host_case = normalize(&ctx, "login from server01", &NoopAnnotator);
    assert!(host_case.is_matched());
    assert_eq!(
        host_case.result().get("host"),
        Some(&Value::String("server01".into()))
    );

    let failure = normalize(&ctx, "login from", &NoopAnnotator);
    assert!(!failure.is_matched());
    assert_eq!(
        failure.result().get("originalmsg"),
        Some(&Value::String("login from".into()))
    );
}

/// Scenario 4 (spec.md section 8): two samples sharing a `"user="` prefix
/// compact to a single multi-character literal edge after optimization,
/// and still match.
#[test]
fn shared_prefix_survives_compaction() {
    let mut ctx = Context::new();

    let mut name_branch = literal_path(&mut ctx, ctx.main_root(), "user=");
    add_parser(
        &mut ctx,
        &mut name_branch,
        new_edge("name", id_of("word").unwrap(), None, None, None).unwrap(),
    )
    .unwrap();
    ctx.set_terminal(name_branch, true);

    optimize(&mut ctx);

    assert_eq!(ctx.node(ctx.main_root()).edges.len(), 1);

    let outcome = normalize(&ctx, "user=bob", &NoopAnnotator);
    assert!(outcome.is_matched());
    assert_eq!(outcome.result().get("name"), Some(&Value::String("bob".into())));
}

/// Scenario 6 (spec.md section 8): nothing matches, so the result carries
/// the full original message and full unparsed suffix.
#[test]
fn total_failure_reports_whole_line_as_unparsed() {
    let ctx = Context::new();
    let outcome = normalize(&ctx, "????", &NoopAnnotator);
    assert!(!outcome.is_matched());
    assert_eq!(
        outcome.result().get("originalmsg"),
        Some(&Value::String("????".into()))
    );
    assert_eq!(
        outcome.result().get("unparsed-data"),
        Some(&Value::String("????".into()))
    );
}

/// Installing the same sample list twice into two fresh contexts yields
/// graphs that accept the same input and produce identical result trees
/// (spec.md section 8, insertion-order determinism).
#[test]
fn repeated_installation_is_deterministic() {
    fn build() -> Context {
        let mut ctx = Context::new();
        let mut root = literal_path(&mut ctx, ctx.main_root(), "count=");
        add_parser(
            &mut ctx,
            &mut root,
            new_edge("n", id_of("digits").unwrap(), None, None, None).unwrap(),
        )
        .unwrap();
        ctx.set_terminal(root, true);
        optimize(&mut ctx);
        ctx
    }

    let a = build();
    let b = build();

    let input = "count=42";
    let out_a = normalize(&a, input, &NoopAnnotator);
    let out_b = normalize(&b, input, &NoopAnnotator);
    assert_eq!(out_a.result(), out_b.result());
    assert_eq!(out_a.is_matched(), out_b.is_matched());
}
