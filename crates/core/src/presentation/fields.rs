// crates/core/src/presentation/fields.rs
//! Label/value pairs shared by every layout.
//!
//! All layouts pull their rows from here so labels, value formatting and the
//! mode representation stay identical across styles.

use metastat_domain::{MetadataReport, StatSnapshot};
use metastat_shared_kernel::{FileSize, Timestamp};

/// Marker every layout prints for an entry that does not exist.
pub const NOT_FOUND: &str = "NOT FOUND";

const UNAVAILABLE: &str = "unavailable";
/// Label of the creation-time row when the platform gave neither timestamp.
pub const CREATION_OR_CHANGE: &str = "Creation/Change Time";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self { label, value: value.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub fields: Vec<Field>,
}

pub fn flag(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Exact byte count, plus a base-2 approximation once it reaches a KiB.
fn size(value: FileSize) -> String {
    if value.bytes() < 1024 {
        format!("{value} bytes")
    } else {
        format!("{value} bytes ({})", value.to_human())
    }
}

fn timestamp(value: Option<Timestamp>) -> String {
    value.map_or_else(|| UNAVAILABLE.to_string(), |t| t.to_string())
}

/// Grouped fields of an existing entry, in display order.
pub fn sections(report: &MetadataReport, stat: &StatSnapshot) -> Vec<Section> {
    let (created_label, created_value) = match stat.created {
        Some(created) => (created.source.label(), created.at.to_string()),
        None => (CREATION_OR_CHANGE, UNAVAILABLE.to_string()),
    };

    let mut sections = vec![
        Section {
            title: "Timestamps",
            fields: vec![
                Field::new(created_label, created_value),
                Field::new("Modification Time", timestamp(stat.modified)),
                Field::new("Access Time", timestamp(stat.accessed)),
            ],
        },
        Section {
            title: "Permissions & Links",
            fields: vec![
                Field::new("File Mode", stat.mode.describe()),
                Field::new("Readable (owner)", flag(stat.mode.readable_by_owner())),
                Field::new("Writable (owner)", flag(stat.mode.writable_by_owner())),
                Field::new("Executable (owner)", flag(stat.mode.executable_by_owner())),
                Field::new("Number of Hard Links", stat.hard_link_count.to_string()),
            ],
        },
        Section {
            title: "Ownership & Size",
            fields: vec![
                Field::new("Owner User ID (UID)", stat.owner_uid.to_string()),
                Field::new("Group ID (GID)", stat.group_gid.to_string()),
                Field::new("File Size", size(stat.size)),
            ],
        },
        Section {
            title: "File System Details",
            fields: vec![
                Field::new("Inode", stat.inode.to_string()),
                Field::new("Device ID", stat.device_id.to_string()),
            ],
        },
        Section {
            title: "Path & Existence",
            fields: vec![
                Field::new("Absolute Path", report.path().to_string_lossy()),
                Field::new("File Type", stat.kind.label()),
                Field::new("Is Symlink", flag(stat.is_symlink())),
                Field::new("File Exists", flag(true)),
                Field::new("Parent Directory", report.parent_directory()),
                Field::new("File Name", report.name().as_str()),
            ],
        },
    ];

    if !report.diagnostics().is_empty() {
        sections.push(Section {
            title: "Notes",
            fields: report.diagnostics().iter().map(|d| Field::new("Note", d.to_string())).collect(),
        });
    }
    sections
}

/// The few fields that still mean something when the entry is missing.
pub fn missing_fields(report: &MetadataReport) -> Vec<Field> {
    vec![
        Field::new("File Name", report.name().as_str()),
        Field::new("Absolute Path", report.path().to_string_lossy()),
        Field::new("File Exists", flag(false)),
        Field::new("Status", NOT_FOUND),
    ]
}

/// Flat `Label: value` lines, for console echo and the plain layout.
pub fn lines(report: &MetadataReport) -> Vec<String> {
    let fields: Vec<Field> = match report.stat() {
        Some(stat) => sections(report, stat).into_iter().flat_map(|s| s.fields).collect(),
        None => missing_fields(report),
    };
    fields.into_iter().map(|f| format!("{}: {}", f.label, f.value)).collect()
}

/// Splits `value` into chunks of at most `width` characters.
pub fn wrap(value: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let chars: Vec<char> = value.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars.chunks(width).map(|chunk| chunk.iter().collect()).collect()
}
