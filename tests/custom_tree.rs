use ferrite_logic::tree::comparison::Comparison;
use ferrite_logic::{run_demo, DecisionTree, DemoConfig, LogicError, Node, Section, TestCase};

fn loan_tree() -> DecisionTree {
    DecisionTree::new(
        "Approve the Loan?",
        Node::split(
            "income",
            Comparison::Greater,
            50_000.0,
            Node::split(
                "has_debt",
                Comparison::Equal,
                1.0,
                Node::leaf("Review manually"),
                Node::leaf("Approve"),
            ),
            Node::leaf("Decline"),
        ),
    )
}

#[test]
fn tree_and_cases_load_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let tree_path = dir.path().join("loan.json");
    let cases_path = dir.path().join("cases.json");
    loan_tree().save_json(&tree_path).unwrap();
    let cases = vec![
        TestCase::new("Rich, no debt", &[("income", 90_000.0), ("has_debt", 0.0)]),
        TestCase::new("Exactly at the line", &[("income", 50_000.0), ("has_debt", 0.0)]),
    ];
    std::fs::write(&cases_path, serde_json::to_string(&cases).unwrap()).unwrap();

    let config = DemoConfig {
        tree_path: Some(tree_path),
        cases_path: Some(cases_path),
        trace: true,
        ..DemoConfig::only(Section::Tree)
    };
    let mut out = Vec::new();
    run_demo(&config, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Decision Tree: Approve the Loan?\n"));
    assert!(text.contains("\nRich, no debt:\n  has_debt: 0, income: 90000\n"));
    assert!(text.contains("    income > 50000 (90000) -> true\n"));
    assert!(text.contains("  Decision: Approve\n"));
    assert!(text.contains("    income > 50000 (50000) -> false\n  Decision: Decline\n"));
}

#[test]
fn a_case_missing_a_tested_feature_fails() {
    let dir = tempfile::tempdir().unwrap();
    let cases_path = dir.path().join("cases.json");
    std::fs::write(
        &cases_path,
        r#"[{"description": "No rain info", "features": {"temperature": 40}}]"#,
    )
    .unwrap();
    let config = DemoConfig { cases_path: Some(cases_path), ..DemoConfig::only(Section::Tree) };
    let err = run_demo(&config, &mut Vec::<u8>::new()).unwrap_err();
    assert!(matches!(err, LogicError::MissingFeature(ref f) if f == "is_raining"));
}
