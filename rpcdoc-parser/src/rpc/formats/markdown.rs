//! Markdown serialization (method records → reference document)
//!
//! Renders the extracted records as the markdown reference page used by
//! the mdbook docs: a `## Methods` index of anchor links, then one
//! section per method with its description, a `[src]` deep link into the
//! repository, and the two sample payloads in a `json` fence.
//!
//! Rendering is pure formatting. The whole document is built into one
//! string so a fault elsewhere never leaves a half-written page on
//! stdout, and sample payloads pass through byte-for-byte.

use crate::rpc::method::MethodRecord;

/// Repository blob URL the `[src]` links resolve against.
const REPO_BASE_URL: &str = "https://github.com/darkrenaissance/darkfi/blob/master/";

/// Serialize method records to the markdown reference document.
///
/// `source_path` is the path the caller scanned, as given on the command
/// line; it becomes part of each deep link with any `../` segments
/// removed so links stay repository-relative.
pub fn render_document(methods: &[MethodRecord], source_path: &str) -> String {
    let mut out = String::new();

    out.push_str("\n## Methods\n");
    for method in methods {
        out.push_str(&format!("* [`{}`](#{})\n", method.name, method.name));
    }

    out.push_str("\n\n");
    for method in methods {
        out.push_str(&format!("### `{}`\n\n", method.name));
        out.push_str(&method.description);
        out.push('\n');
        out.push_str(&format!(
            "<br><sup><a href=\"{}\">[src]</a></sup>\n",
            source_link(source_path, method.source_line)
        ));
        out.push_str("\n```json\n");
        out.push_str(&method.request_sample);
        out.push('\n');
        out.push_str(&method.response_sample);
        out.push('\n');
        out.push_str("```\n");
    }

    out
}

/// Deep link to the line a method's samples sit at in the repository.
fn source_link(source_path: &str, line: usize) -> String {
    format!(
        "{}{}#L{}",
        REPO_BASE_URL,
        source_path.replace("../", ""),
        line
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn height_record() -> MethodRecord {
        MethodRecord {
            name: "blockchain.get_height".to_string(),
            description: "Returns the current block height.".to_string(),
            request_sample:
                r#" {"jsonrpc": "2.0", "method": "blockchain.get_height", "params": [], "id": 1}"#
                    .to_string(),
            response_sample: r#" {"jsonrpc": "2.0", "result": 1234, "id": 1}"#.to_string(),
            source_line: 5,
        }
    }

    #[test]
    fn renders_reference_document() {
        let doc = render_document(&[height_record()], "../rpc/blockchain.rs");

        let expected = concat!(
            "\n## Methods\n",
            "* [`blockchain.get_height`](#blockchain.get_height)\n",
            "\n\n",
            "### `blockchain.get_height`\n\n",
            "Returns the current block height.\n",
            "<br><sup><a href=\"https://github.com/darkrenaissance/darkfi/blob/master/rpc/blockchain.rs#L5\">[src]</a></sup>\n",
            "\n```json\n",
            " {\"jsonrpc\": \"2.0\", \"method\": \"blockchain.get_height\", \"params\": [], \"id\": 1}\n",
            " {\"jsonrpc\": \"2.0\", \"result\": 1234, \"id\": 1}\n",
            "```\n",
        );

        assert_eq!(doc, expected);
    }

    #[test]
    fn renders_empty_record_list() {
        assert_eq!(render_document(&[], "src/lib.rs"), "\n## Methods\n\n\n");
    }

    #[test]
    fn index_and_sections_share_record_order() {
        let mut second = height_record();
        second.name = "blockchain.last_known_slot".to_string();
        let doc = render_document(&[height_record(), second], "src/rpc.rs");

        let first_index = doc.find("* [`blockchain.get_height`]").unwrap();
        let second_index = doc.find("* [`blockchain.last_known_slot`]").unwrap();
        assert!(first_index < second_index);

        let first_section = doc.find("### `blockchain.get_height`").unwrap();
        let second_section = doc.find("### `blockchain.last_known_slot`").unwrap();
        assert!(first_section < second_section);
    }

    #[test]
    fn path_escape_segments_are_stripped_from_links() {
        let doc = render_document(&[height_record()], "../../src/rpc.rs");
        assert!(doc.contains("blob/master/src/rpc.rs#L5"));
    }

    #[test]
    fn samples_pass_through_unvalidated() {
        let mut rec = height_record();
        rec.request_sample = " not json at all".to_string();
        rec.response_sample = " {\"unbalanced\": ".to_string();

        let doc = render_document(&[rec], "src/rpc.rs");
        assert!(doc.contains("\n not json at all\n"));
        assert!(doc.contains("\n {\"unbalanced\": \n"));
    }
}
