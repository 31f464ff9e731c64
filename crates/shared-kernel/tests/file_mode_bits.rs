// crates/shared-kernel/tests/file_mode_bits.rs
use metastat_shared_kernel::FileMode;

#[test]
fn owner_bits_are_masked_individually() {
    let rw = FileMode::new(0o100_600);
    assert!(rw.readable_by_owner());
    assert!(rw.writable_by_owner());
    assert!(!rw.executable_by_owner());

    let group_only = FileMode::new(0o070);
    assert!(!group_only.readable_by_owner());
    assert!(!group_only.writable_by_owner());
    assert!(!group_only.executable_by_owner());

    assert!(FileMode::new(0o100).executable_by_owner());
}

#[test]
fn describe_shows_decimal_and_octal() {
    assert_eq!(FileMode::new(0o100_644).describe(), "33188 (0o100644)");
    assert_eq!(FileMode::new(0o040_755).permissions(), 0o755);
    assert_eq!(format!("{:#}", FileMode::new(0o644)), "0o644");
}
