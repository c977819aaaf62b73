// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::parser::parse;

#[test]
fn summary_of_auth_plan() {
    let text = "\
**Project Identifier**: `ABC`
## Modules
### Module 1: Auth
```yaml
name: Auth
```
#### ABC-001: Login (5pt, High)
```yaml
estimate_point: 5
```
#### ABC-002: Logout (3pt, Low)
```yaml
estimate_point: 3
```
";
    let summary = PlanSummary::of(&parse(text));
    assert_eq!(summary.identifier, "ABC");
    assert_eq!(summary.cycles, 0);
    assert_eq!(summary.module_count(), 1);
    assert_eq!(summary.total_issues, 2);
    assert_eq!(summary.total_story_points, 8);
    assert_eq!(
        summary.modules,
        vec![ModuleSummary {
            name: "Auth".into(),
            issues: 2,
            story_points: 8,
        }]
    );
}

#[test]
fn summary_counts_unestimated_issues_as_zero_points() {
    let text = "\
## Modules
### Module 1: A
```yaml
name: A
```
#### PROJ-1: Unsized
#### PROJ-2: Sized
```yaml
estimate_point: 2
```
### Module 2: B
```yaml
name: B
```
";
    let summary = PlanSummary::of(&parse(text));
    assert_eq!(summary.total_issues, 2);
    assert_eq!(summary.total_story_points, 2);
    assert_eq!(summary.modules[1].issues, 0);
}

#[test]
fn summary_serializes_to_json() {
    let summary = PlanSummary::of(&Document::default());
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["identifier"], "PROJ");
    assert_eq!(json["total_issues"], 0);
    assert!(json["modules"].as_array().unwrap().is_empty());
}
