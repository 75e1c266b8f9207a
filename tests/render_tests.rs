// ABOUTME: Integration tests for template rendering and manuscript values
// ABOUTME: Exercises the library API from paper YAML through to the finished document

use chrono::NaiveDate;
use proptest::prelude::*;

use paperfill::cli::scaffold::DEFAULT_TEMPLATE;
use paperfill::{
    render, Manuscript, PlaceholderKey, RenderPolicy, Template, TemplateError, TemplateValues,
};

mod common;
use common::{TestEnvironment, TestPaperBuilder};

fn sample_values() -> TemplateValues {
    [("TITLE", "Green Growth"), ("ABSTRACT", "Summary text.")]
        .into_iter()
        .collect()
}

#[test]
fn test_documented_example() {
    let rendered = render("# {{TITLE}}\n{{ABSTRACT}}", &sample_values());
    assert_eq!(rendered, "# Green Growth\nSummary text.");
}

#[test]
fn test_empty_mapping_lenient_and_strict() {
    let source = "# {{TITLE}}\n{{ABSTRACT}}";
    let template = Template::parse(source);

    let lenient = template
        .render(&TemplateValues::new(), RenderPolicy::Lenient)
        .unwrap();
    assert_eq!(lenient.text, source);

    let strict = template.render(&TemplateValues::new(), RenderPolicy::Strict);
    match strict {
        Err(TemplateError::MissingValues { names }) => {
            assert_eq!(names, vec!["TITLE", "ABSTRACT"])
        }
        other => panic!("expected missing values error, got {:?}", other.map(|r| r.text)),
    }
}

#[test]
fn test_full_coverage_leaves_no_markers() {
    let templates = [
        "{{TITLE}}",
        "a {{TITLE}} b {{ABSTRACT}} c {{TITLE}}",
        DEFAULT_TEMPLATE,
    ];
    let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let mut values = Manuscript::default().values_on(today);
    values.extend_variables(sample_values().iter());

    for source in templates {
        let rendered = Template::parse(source)
            .render(&values, RenderPolicy::Strict)
            .unwrap();
        assert!(
            !Template::parse(rendered.text.as_str()).has_placeholders(),
            "markers left in {:?}",
            rendered.text
        );
    }
}

#[test]
fn test_render_is_idempotent_on_rendered_output() {
    let values = sample_values();
    let once = render("# {{TITLE}}\n{{ABSTRACT}}", &values);
    let twice = render(&once, &values);
    assert_eq!(once, twice);

    let other: TemplateValues = [("TITLE", "changed")].into_iter().collect();
    assert_eq!(render(&once, &other), once);
}

#[test]
fn test_default_template_with_standard_keys_only() {
    let template = Template::parse(DEFAULT_TEMPLATE);
    for name in template.placeholders() {
        assert!(PlaceholderKey::from_name(name).is_some(), "unknown {name}");
    }
}

#[tokio::test]
async fn test_manuscript_file_to_document() {
    let env = TestEnvironment::new();
    let builder = TestPaperBuilder::new("Kinh tế tuần hoàn")
        .with_subtitle("Tổng quan hệ thống")
        .with_date("2023-11-20")
        .with_author("Nguyễn Văn A", "Đại học Kinh tế", "a@example.edu")
        .with_author("Trần B", "", "")
        .with_keywords(&["circular economy", "PRISMA"])
        .with_section("methods", "PICOS.")
        .with_section("prisma", "1 200 records screened.")
        .with_statement("funding", "Không có.")
        .with_statement("acknowledgments", "  Xin cảm ơn.  ")
        .with_reference(
            "{title: Circularity., container: J. Clean. Prod., date: 2021-02-03, \
             volume: 280, issue: 1, pages: 1-12, doi: 10.1016/j.jclepro.2020.124, \
             authors: [{family: Kirchherr, given: J.}, {family: Reike, given: D.}, \
             {family: Hekkert, given: M.}]}",
        );
    let path = env.create_paper_file("paper.yaml", &builder).await;

    let manuscript = Manuscript::from_file(&path).await.unwrap();
    let values = manuscript.values();

    assert_eq!(values.get_variable("SUBTITLE"), Some("Tổng quan hệ thống"));
    assert_eq!(values.get_variable("DATE"), Some("2023-11-20"));
    assert_eq!(
        values.get_variable("AUTHORS"),
        Some("- **Nguyễn Văn A** — Đại học Kinh tế | ✉ a@example.edu\n- **Trần B**")
    );
    assert_eq!(values.get_variable("KEYWORDS"), Some("circular economy, PRISMA"));
    assert_eq!(values.get_variable("PRISMA"), Some("1 200 records screened."));
    assert_eq!(values.get_variable("ACK"), Some("Xin cảm ơn."));
    assert_eq!(values.get_variable("FUNDING"), Some("Không có."));
    assert_eq!(values.get_variable("ETHICS"), Some(""));
    assert_eq!(
        values.get_variable("REFERENCES"),
        Some(
            "- Kirchherr, J., Reike, D., & Hekkert, M. (2021). Circularity. \
             *J. Clean. Prod.*, 280(1), 1-12. https://doi.org/10.1016/j.jclepro.2020.124"
        )
    );

    let rendered = Template::parse(DEFAULT_TEMPLATE)
        .render(&values, RenderPolicy::Strict)
        .unwrap();
    assert!(rendered.text.starts_with("# Kinh tế tuần hoàn\n\n*Tổng quan hệ thống*\n"));
    assert!(rendered.text.contains("### 2.1 Sơ đồ PRISMA (mô tả)\n1 200 records screened.\n"));
    assert!(rendered.unused.is_empty());
}

#[tokio::test]
async fn test_missing_manuscript_file_names_path() {
    let env = TestEnvironment::new();
    let err = Manuscript::from_file(env.file("absent.yaml"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("absent.yaml"));
}

/// Template pieces: a brace-free literal followed by a placeholder name
fn template_parts() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-z #\n.,]{0,12}", "[A-Z_][A-Z0-9_]{0,8}"), 0..8)
}

fn assemble(parts: &[(String, String)], tail: &str) -> String {
    let mut source = String::new();
    for (text, name) in parts {
        source.push_str(text);
        source.push_str("{{");
        source.push_str(name);
        source.push_str("}}");
    }
    source.push_str(tail);
    source
}

proptest! {
    #[test]
    fn test_full_coverage_never_leaves_markers(
        parts in template_parts(),
        tail in "[a-z #\n]{0,12}",
        value in "[a-z0-9 .,]{0,16}",
    ) {
        let source = assemble(&parts, &tail);
        let values: TemplateValues = parts
            .iter()
            .map(|(_, name)| (name.clone(), value.clone()))
            .collect();

        let rendered = Template::parse(source.as_str())
            .render(&values, RenderPolicy::Strict)
            .unwrap();
        prop_assert!(!Template::parse(rendered.text.as_str()).has_placeholders());
        prop_assert!(rendered.unresolved.is_empty());
    }

    #[test]
    fn test_empty_mapping_is_identity(parts in template_parts(), tail in "[a-z #\n]{0,12}") {
        let source = assemble(&parts, &tail);
        prop_assert_eq!(render(&source, &TemplateValues::new()), source);
    }

    #[test]
    fn test_rendering_is_idempotent(
        parts in template_parts(),
        tail in "[a-z #\n]{0,12}",
        known in prop::collection::hash_map("[A-Z_][A-Z0-9_]{0,8}", "[a-z0-9 .,]{0,16}", 0..6),
    ) {
        let source = assemble(&parts, &tail);
        let values: TemplateValues = known.into_iter().collect();

        let once = render(&source, &values);
        prop_assert_eq!(render(&once, &values), once);
    }
}
