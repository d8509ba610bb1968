use mertens_core::{
    from_json_slice, from_yaml_slice, stable_hash_string, to_canonical_json_bytes,
    to_yaml_string, RunProvenance, SchemaVersion,
};

fn sample_provenance() -> RunProvenance {
    RunProvenance {
        schema_version: SchemaVersion::new(1, 2, 0),
        config_hash: "abc123".into(),
        method: "sieve".into(),
        tool_versions: Default::default(),
    }
    .with_tool("mertens-core", "0.1.0")
}

#[test]
fn provenance_round_trip_json() {
    let provenance = sample_provenance();
    let bytes = to_canonical_json_bytes(&provenance).expect("serialize");
    let decoded: RunProvenance = from_json_slice(&bytes).expect("deserialize");
    assert_eq!(decoded, provenance);
}

#[test]
fn provenance_round_trip_yaml() {
    let provenance = sample_provenance();
    let yaml = to_yaml_string(&provenance).expect("serialize");
    let decoded: RunProvenance = from_yaml_slice(yaml.as_bytes()).expect("deserialize");
    assert_eq!(decoded, provenance);
}

#[test]
fn stable_hash_ignores_construction_order() {
    let a = sample_provenance().with_tool("mertens-arith", "0.1.0");
    let mut b = sample_provenance();
    b.tool_versions.clear();
    let b = b
        .with_tool("mertens-arith", "0.1.0")
        .with_tool("mertens-core", "0.1.0");
    assert_eq!(
        stable_hash_string(&a).expect("hash"),
        stable_hash_string(&b).expect("hash")
    );
    assert_eq!(stable_hash_string(&a).expect("hash").len(), 64);
}

#[test]
fn default_schema_is_one_zero_zero() {
    assert_eq!(SchemaVersion::default(), SchemaVersion::new(1, 0, 0));
}
