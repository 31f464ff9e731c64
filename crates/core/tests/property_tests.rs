use std::path::PathBuf;

use metastat_core::{
    CreationTime, CreationTimeSource, EntryKind, MetadataReport, RenderOptions, RenderStyle, StatSnapshot,
    render_with,
};
use metastat_shared_kernel::{FileMode, FileSize, Timestamp};
use proptest::prelude::*;

fn kind() -> impl Strategy<Value = EntryKind> {
    prop_oneof![
        Just(EntryKind::File),
        Just(EntryKind::Directory),
        Just(EntryKind::Symlink),
        Just(EntryKind::Special),
    ]
}

fn style() -> impl Strategy<Value = RenderStyle> {
    prop_oneof![Just(RenderStyle::Table), Just(RenderStyle::Annotated), Just(RenderStyle::Plain)]
}

prop_compose! {
    fn report()(
        name in "[a-zA-Z0-9_.]{1,40}",
        size in any::<u64>(),
        kind in kind(),
        mode in any::<u32>(),
        secs in 0i64..4_000_000_000,
        nlink in 1u64..64,
        exists in any::<bool>(),
    ) -> MetadataReport {
        let at = Timestamp::from_unix(secs, 0).unwrap();
        let path = PathBuf::from("/prop").join(name);
        if !exists {
            return MetadataReport::missing(&path, at);
        }
        let stat = StatSnapshot {
            size: FileSize::new(size),
            kind,
            created: Some(CreationTime::new(CreationTimeSource::Birth, at)),
            modified: Some(at),
            accessed: None,
            mode: FileMode::new(mode),
            inode: size ^ 0xdead_beef,
            device_id: 1,
            hard_link_count: nlink,
            owner_uid: 0,
            group_gid: 0,
        };
        MetadataReport::observed(&path, at, stat, Vec::new())
    }
}

proptest! {
    #[test]
    fn render_is_byte_identical_across_calls(
        report in report(),
        style in style(),
        width in 20usize..120,
        spaced in any::<bool>(),
    ) {
        let options = RenderOptions { column_width: width, spaced, ..RenderOptions::default() };
        let first = render_with(&report, style, &options);
        let second = render_with(&report.clone(), style, &options);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn mode_is_always_shown_in_both_bases(report in report(), style in style()) {
        let text = render_with(&report, style, &RenderOptions::default());
        match report.mode() {
            Some(mode) => prop_assert!(text.contains(&mode.describe())),
            None => prop_assert!(text.contains("NOT FOUND")),
        }
    }
}
