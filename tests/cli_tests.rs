use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    report_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let report_path = dir.path().join("report.json");

        // Two categories (a=80 with skills s1=50/s2=20, b=30 with
        // s3=70) and two contexts (k1=55, k2=10).
        let json = r##"{
          "categories": [
            { "id": 1, "slug": "a", "name": "A", "icon": "", "description": "",
              "skills": [
                { "id": 10, "img": "", "description": "",
                  "skill": { "slug": "s1", "name": "S1" } },
                { "id": 11, "img": "", "description": "",
                  "skill": { "slug": "s2", "name": "S2" } } ] },
            { "id": 2, "slug": "b", "name": "B", "icon": "", "description": "",
              "skills": [
                { "id": 12, "img": "", "description": "",
                  "skill": { "slug": "s3", "name": "S3" } } ] }
          ],
          "contexts": [
            { "id": 5, "slug": "k1", "name": "K1", "description": "" },
            { "id": 6, "slug": "k2", "name": "K2", "description": "" }
          ],
          "result": {
            "name": "Test Taker",
            "data": {
              "category": {
                "a": { "color": "#7367f0", "value": 80, "comment": "ok" },
                "b": { "color": "#7367f0", "value": 30, "comment": "weak" }
              },
              "skills": {
                "s1": { "color": "#28c76f", "value": 50 },
                "s2": { "color": "#28c76f", "value": 20 },
                "s3": { "color": "#28c76f", "value": 70 }
              },
              "contexts": {
                "k1": { "color": "#ea5455", "value": 55 },
                "k2": { "color": "#ea5455", "value": 10 }
              }
            }
          }
        }"##;
        std::fs::write(&report_path, json).unwrap();

        Self { dir, report_path }
    }
}

fn run_cli(ctx: &TestContext, args: &[&str]) -> std::process::Output {
    let mut final_args = vec!["--input", ctx.report_path.to_str().unwrap()];
    final_args.extend_from_slice(args);

    Command::new(env!("CARGO_BIN_EXE_skillreport"))
        .args(&final_args)
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn export_writes_one_row_per_category_skill_and_context() {
    let ctx = TestContext::new();
    let out_path = ctx.dir.path().join("scores.csv");

    let output = run_cli(
        &ctx,
        &["export", "--out", out_path.to_str().unwrap()],
    );
    assert!(output.status.success(), "export failed: {output:?}");

    let csv = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    // Header + 2 categories + 3 skills + 2 contexts.
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "kind,category,slug,name,value,color");

    // Rows come out in shaped (weakest-first) order, each category's
    // ranked skills right after it.
    assert!(lines[1].starts_with("category,,b,B,30.0"));
    assert!(lines[2].starts_with("skill,b,s3,S3,70.0"));
    assert!(lines[3].starts_with("category,,a,A,80.0"));
    assert!(lines[4].starts_with("skill,a,s2,S2,20.0"));
    assert!(lines[5].starts_with("skill,a,s1,S1,50.0"));
    assert!(lines[6].starts_with("context,,k2,K2,10.0"));
    assert!(lines[7].starts_with("context,,k1,K1,55.0"));
}

#[test]
fn show_renders_the_requested_view() {
    let ctx = TestContext::new();

    let output = run_cli(&ctx, &["show", "--view", "categories", "--category", "0"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    // Slot 0 of the shaped list is the weakest category.
    assert!(stdout.contains("Detailed breakdown: B"));
}

#[test]
fn unknown_view_exits_nonzero_and_lists_valid_views() {
    let ctx = TestContext::new();

    let output = run_cli(&ctx, &["show", "--view", "bogus"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("categories, contexts, recommendations"));
}

#[test]
fn inconsistent_report_fails_the_whole_load() {
    let ctx = TestContext::new();
    let broken = ctx.dir.path().join("broken.json");
    let json = std::fs::read_to_string(&ctx.report_path)
        .unwrap()
        .replace("\"s3\":", "\"other\":");
    std::fs::write(&broken, json).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_skillreport"))
        .args(["--input", broken.to_str().unwrap(), "show"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No skill score entry for slug 's3'"));
}
