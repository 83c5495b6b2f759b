use clap::ValueEnum;

/// Tags-only instruction, asks for `{"tags": []}`. Wire contract with the
/// model, keep it byte-for-byte.
pub const TAGS_PROMPT: &str = r#"我有一个标过star的github库需要进行分类和标记，给出最相关的8个标记。我会给你它的的readme文件，请你分析后给出一个json结构的标签，
限制：只给出严格的json结果，其他内容比如json标签等不需要。
输出格式严格如下
{
  "tags": []
}"#;

/// Richer instruction that also asks for a group and a one-line description.
/// This text is our own, not a copy of an established prompt; cached outputs
/// produced with it are not comparable to tags-only runs.
pub const DETAILED_PROMPT: &str = r#"我有一个标过star的github库需要进行分类和标记，给出它所属的分组、最相关的8个标记和一句话描述。我会给你它的的readme文件，请你分析后给出一个json结构的标签，
限制：只给出严格的json结果，其他内容比如json标签等不需要。
输出格式严格如下
{
  "group": "",
  "tags": [],
  "desc": ""
}"#;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PromptVariant {
    /// Tags only
    #[default]
    Tags,
    /// Group, tags and description
    Detailed,
}

impl PromptVariant {
    pub fn instruction(self) -> &'static str {
        match self {
            PromptVariant::Tags => TAGS_PROMPT,
            PromptVariant::Detailed => DETAILED_PROMPT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_tags_only() {
        assert_eq!(PromptVariant::default(), PromptVariant::Tags);
        assert_eq!(PromptVariant::default().instruction(), TAGS_PROMPT);
    }

    #[test]
    fn test_prompts_request_expected_fields() {
        assert!(PromptVariant::Tags.instruction().contains("\"tags\": []"));
        assert!(!PromptVariant::Tags.instruction().contains("\"group\""));

        let detailed = PromptVariant::Detailed.instruction();
        for field in ["\"group\"", "\"tags\"", "\"desc\""] {
            assert!(detailed.contains(field), "missing {}", field);
        }
    }
}
