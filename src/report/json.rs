use serde::Serialize;

pub fn to_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::media_report;
    use serde_json::Value;

    #[test]
    fn json_report_uses_wire_names() {
        let rendered = to_json(&media_report()).expect("json should serialize");
        let value: Value = serde_json::from_str(&rendered).expect("json should parse");

        assert_eq!(value["kind"], "media");
        assert_eq!(value["result"]["score"], 72);
        assert_eq!(value["result"]["grade"], "B+");
        assert_eq!(value["result"]["grade_class"], "info");
        assert_eq!(value["result"]["checklist"][1]["severity"], "danger");
        assert!(value.get("reading").is_none());
    }
}
