//! Canned GitHub REST payloads for mock servers

#![allow(dead_code)]

use serde_json::{json, Value};

/// Minimal "create pull request" response octocrab can deserialize
pub fn pull_request_json(server_url: &str, owner: &str, repo: &str, head: &str, number: u64) -> Value {
    json!({
        "url": format!("{server_url}/repos/{owner}/{repo}/pulls/{number}"),
        "id": 1000 + number,
        "node_id": "PR_kwDOtest",
        "html_url": format!("https://github.com/{owner}/{repo}/pull/{number}"),
        "number": number,
        "state": "open",
        "locked": false,
        "title": "Add catalog-info.yaml",
        "body": "Add catalog-info.yaml",
        "draft": false,
        "head": {
            "label": format!("{owner}:{head}"),
            "ref": head,
            "sha": "1111111111111111111111111111111111111111"
        },
        "base": {
            "label": format!("{owner}:main"),
            "ref": "main",
            "sha": "2222222222222222222222222222222222222222"
        }
    })
}
