//! Canonical upload names: `{owner}_{activity}.{extension}` with whitespace runs collapsed
//! to a single underscore.
//!
//! A file name without a dot yields an empty extension and the name keeps its trailing
//! dot (`A_B_C.`). Uploads are keyed with a storage-side token, so the odd-looking name
//! never collides.

pub(crate) fn canonical_name(
    owner_display_name: &str,
    activity_name: &str,
    extension: &str,
) -> String {
    format!(
        "{}_{}.{}",
        collapse_whitespace(owner_display_name),
        collapse_whitespace(activity_name),
        extension
    )
}

/// Everything after the last `.` of `file_name`, or `""` when there is none.
pub(crate) fn extension_of(file_name: &str) -> &str {
    file_name.rsplit_once('.').map(|(_, extension)| extension).unwrap_or("")
}

fn collapse_whitespace(value: &str) -> String {
    let mut collapsed = String::with_capacity(value.len());
    let mut in_whitespace = false;

    for ch in value.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                collapsed.push('_');
            }
            in_whitespace = true;
        } else {
            collapsed.push(ch);
            in_whitespace = false;
        }
    }

    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_owner_activity_and_extension() {
        assert_eq!(
            canonical_name("Jane Doe", "Week 1 Reflection", "pdf"),
            "Jane_Doe_Week_1_Reflection.pdf"
        );
    }

    #[test]
    fn whitespace_runs_collapse_and_empty_extension_keeps_dot() {
        assert_eq!(canonical_name("A  B", "C", ""), "A_B_C.");
        assert_eq!(canonical_name("A\t\n B", "C D", "zip"), "A_B_C_D.zip");
    }

    #[test]
    fn edge_whitespace_is_kept_as_underscores() {
        assert_eq!(canonical_name(" Jane ", "Essay", "txt"), "_Jane__Essay.txt");
    }

    #[test]
    fn naming_is_deterministic() {
        let first = canonical_name("Jane Doe", "Lab 2", "docx");
        let second = canonical_name("Jane Doe", "Lab 2", "docx");
        assert_eq!(first, second);
    }

    #[test]
    fn extension_is_text_after_last_dot() {
        assert_eq!(extension_of("report.final.pdf"), "pdf");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of(".bashrc"), "bashrc");
        assert_eq!(extension_of("notes."), "");
    }
}
