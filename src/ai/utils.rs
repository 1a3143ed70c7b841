//! Response cleanup helpers

/// Strip markdown code fences from a model reply.
///
/// A reply that opens with ```` ```sql ```` or ```` ``` ```` has every fence
/// marker removed and the remainder trimmed. The result is never validated
/// as SQL. Total over all inputs and idempotent.
pub fn strip_code_fences(raw: &str) -> String {
    let text = raw.trim();
    if text.starts_with("```sql") {
        text.replace("```sql", "")
            .replace("```", "")
            .trim()
            .to_string()
    } else if text.starts_with("```") {
        text.replace("```", "").trim().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_sql_fence() {
        assert_eq!(
            strip_code_fences("```sql\nSELECT 1\n```"),
            "SELECT 1"
        );
    }

    #[test]
    fn test_strips_bare_fence() {
        assert_eq!(strip_code_fences("```\nSELECT 1\n```"), "SELECT 1");
    }

    #[test]
    fn test_plain_sql_untouched() {
        assert_eq!(strip_code_fences("SELECT 1"), "SELECT 1");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(strip_code_fences("  SELECT 1  \n"), "SELECT 1");
    }

    #[test]
    fn test_empty_fence_block_yields_empty() {
        assert_eq!(strip_code_fences("```sql\n```"), "");
        assert_eq!(strip_code_fences("``````"), "");
        assert_eq!(strip_code_fences(""), "");
    }

    #[test]
    fn test_inner_fences_only_removed_when_reply_opens_with_one() {
        // A fence in the middle of a non-fenced reply stays put.
        assert_eq!(
            strip_code_fences("SELECT 1 -- ``` comment"),
            "SELECT 1 -- ``` comment"
        );
    }

    #[test]
    fn test_prose_passes_through() {
        let prose = "I cannot answer that question.";
        assert_eq!(strip_code_fences(prose), prose);
    }

    proptest! {
        #[test]
        fn prop_total_and_idempotent(input in ".*") {
            let once = strip_code_fences(&input);
            let twice = strip_code_fences(&once);
            prop_assert_eq!(&once, &twice);
        }

        #[test]
        fn prop_output_never_opens_with_fence(input in ".*") {
            let out = strip_code_fences(&input);
            prop_assert!(!out.starts_with("```"));
        }
    }
}
