use serde::Deserialize;
use serde::Serialize;

/// POST endpoint resolving a pathway to the node's children/files/keywords.
pub const NAVIGATE_ENDPOINT: &str = "castanet.do";
/// GET endpoint producing a keyword-scoped summary for one file.
pub const SUMMARY_ENDPOINT: &str = "autosummary.do";

pub const PATHWAY_PARAM: &str = "pathway";
pub const FILE_PARAM: &str = "file";
pub const SELECTED_KEYWORDS_PARAM: &str = "selectedKeywords";

/// The server's view of the hierarchy node at a requested pathway.
///
/// All three arrays are in server order; callers must iterate them as
/// given rather than relying on any implicit ordering.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigateResponse {
    pub children: Vec<String>,
    pub files: Vec<String>,
    pub keywords: Vec<String>,
}

/// Server-computed summary for one file under a keyword context.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileSummary {
    pub filepath: String,
    #[serde(rename = "selectedKeywords")]
    pub selected_keywords: String,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn navigate_response_decodes_documented_fields() -> Result<(), serde_json::Error> {
        let response: NavigateResponse = serde_json::from_str(
            r#"{"children":["dog.1","cat.2"],"files":["f1"],"keywords":["animal.0"]}"#,
        )?;
        assert_eq!(response.children, ["dog.1", "cat.2"]);
        assert_eq!(response.files, ["f1"]);
        assert_eq!(response.keywords, ["animal.0"]);
        Ok(())
    }

    #[test]
    fn navigate_response_rejects_missing_fields() {
        let result: Result<NavigateResponse, _> =
            serde_json::from_str(r#"{"children":[],"files":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn file_summary_uses_the_wire_field_name() -> Result<(), serde_json::Error> {
        let summary: FileSummary = serde_json::from_str(
            r#"{"filepath":"doc.txt","selectedKeywords":"dog,cat","summary":"about pets"}"#,
        )?;
        assert_eq!(summary.selected_keywords, "dog,cat");
        let encoded = serde_json::to_string(&summary)?;
        assert!(encoded.contains("\"selectedKeywords\""));
        Ok(())
    }
}
