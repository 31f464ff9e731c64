// crates/shared-kernel/tests/serde_roundtrip.rs
use metastat_shared_kernel::{FileMode, FileSize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    mode: FileMode,
    size: FileSize,
}

#[test]
fn value_objects_serialize_transparently() {
    let original = Wrapper { mode: FileMode::new(0o644), size: FileSize::from(2048) };
    let json = serde_json::to_string(&original).expect("serializes");
    assert_eq!(json, r#"{"mode":420,"size":2048}"#);
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}
