//! The "Should I Go Outside?" example: a three-split tree over the
//! `temperature` (°F) and `is_raining` (0/1) features.

use crate::tree::comparison::Comparison;
use crate::tree::node::Node;
use crate::tree::tree::{DecisionTree, TestCase};

pub const TEMPERATURE: &str = "temperature";
pub const IS_RAINING: &str = "is_raining";

pub fn go_outside_tree() -> DecisionTree {
    // Warm enough (>= 60)? Then only heat matters; otherwise only rain does.
    let hot_check = Node::split(
        TEMPERATURE,
        Comparison::GreaterOrEqual,
        85.0,
        Node::leaf("Stay inside - too hot!"),
        Node::leaf("Go outside - nice weather!"),
    );
    let rain_check = Node::split(
        IS_RAINING,
        Comparison::Equal,
        1.0,
        Node::leaf("Stay inside - it's raining!"),
        Node::leaf("Go outside - not too cold!"),
    );
    let root = Node::split(TEMPERATURE, Comparison::GreaterOrEqual, 60.0, hot_check, rain_check);
    DecisionTree::new("Should I Go Outside?", root)
}

pub fn go_outside_cases() -> Vec<TestCase> {
    vec![
        TestCase::new("Nice sunny day", &[(TEMPERATURE, 75.0), (IS_RAINING, 0.0)]),
        TestCase::new("Very hot day", &[(TEMPERATURE, 95.0), (IS_RAINING, 0.0)]),
        TestCase::new("Cold and rainy", &[(TEMPERATURE, 50.0), (IS_RAINING, 1.0)]),
        TestCase::new("Cold but dry", &[(TEMPERATURE, 50.0), (IS_RAINING, 0.0)]),
    ]
}
