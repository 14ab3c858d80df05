use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn run_analysis(root: &std::path::Path, output: &std::path::Path) -> Value {
    Command::cargo_bin("line-counter-cli")
        .unwrap()
        .arg(root)
        .arg("-o")
        .arg(output)
        .assert()
        .success();

    serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap()
}

#[test]
fn test_simple_project_report() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "x\n").unwrap();
    fs::write(temp_dir.path().join("b.txt"), "y\nz\n").unwrap();

    let output = temp_dir.path().join("report.json");
    let json = run_analysis(temp_dir.path(), &output);

    let txt = &json["contagem_por_extensao"][".txt"];
    assert_eq!(txt["total_linhas"], 3);
    assert_eq!(txt["total_arquivos"], 2);
    assert_eq!(txt["total_bytes"], 6);
    assert_eq!(json["total_geral_linhas_do_projeto"], 3);
}

#[test]
fn test_invalid_root_exits_with_distinct_code() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("report.json");

    Command::cargo_bin("line-counter-cli")
        .unwrap()
        .arg(temp_dir.path().join("missing"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("不是有效的目录"));

    // 报告不应该被写出
    assert!(!output.exists());
}

#[test]
fn test_reports_are_idempotent() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("main.rs"), "fn main() {}\n").unwrap();
    fs::write(temp_dir.path().join("notes"), "todo\nmore\n").unwrap();

    // 报告写到被分析的树之外，避免第二次运行统计到第一次的报告
    let outside = tempdir().unwrap();
    let first = outside.path().join("first.json");
    let second = outside.path().join("second.json");

    run_analysis(temp_dir.path(), &first);
    run_analysis(temp_dir.path(), &second);

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_gitignore_and_lockfile_rules() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join(".gitignore"), "*.log\n").unwrap();
    fs::write(temp_dir.path().join("app.log"), "ignored\n").unwrap();
    fs::write(temp_dir.path().join("main.rs"), "fn main() {}\n").unwrap();
    fs::write(temp_dir.path().join("package-lock.json"), "{}\n").unwrap();

    let outside = tempdir().unwrap();
    let output = outside.path().join("report.json");
    let json = run_analysis(temp_dir.path(), &output);

    let counts = json["contagem_por_extensao"].as_object().unwrap();

    assert!(!counts.contains_key(".log"));
    assert!(!counts.contains_key(".json"));
    assert_eq!(counts[".rs"]["total_arquivos"], 1);
    // .gitignore 本身是一个无扩展名的文本文件
    assert_eq!(counts["no_extension"]["total_arquivos"], 1);
}

#[test]
fn test_node_modules_pruned_without_gitignore() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("index.js"), "console.log(1);\n").unwrap();

    let package_dir = temp_dir.path().join("node_modules").join("pkg");
    fs::create_dir_all(&package_dir).unwrap();
    fs::write(package_dir.join("lib.js"), "module.exports = {};\n").unwrap();

    let outside = tempdir().unwrap();
    let output = outside.path().join("report.json");
    let json = run_analysis(temp_dir.path(), &output);

    assert_eq!(json["contagem_por_extensao"][".js"]["total_arquivos"], 1);
}

#[test]
fn test_custom_config_overrides_fallback_sets() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("kept.txt"), "a\n").unwrap();

    let generated_dir = temp_dir.path().join("generated");
    fs::create_dir(&generated_dir).unwrap();
    fs::write(generated_dir.join("skipped.txt"), "b\n").unwrap();

    let outside = tempdir().unwrap();
    let config_path = outside.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
[ignore]
directories = ["generated"]
files = []
"#,
    )
    .unwrap();

    let output = outside.path().join("report.json");
    Command::cargo_bin("line-counter-cli")
        .unwrap()
        .arg(temp_dir.path())
        .arg("-o")
        .arg(&output)
        .arg("-c")
        .arg(&config_path)
        .assert()
        .success();

    let json: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();

    assert_eq!(json["contagem_por_extensao"][".txt"]["total_arquivos"], 1);
    assert_eq!(json["total_geral_linhas_do_projeto"], 1);
}

#[test]
fn test_write_failure_falls_back_to_stdout() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "x\n").unwrap();

    let missing_output = temp_dir.path().join("missing").join("report.json");

    Command::cargo_bin("line-counter-cli")
        .unwrap()
        .arg(temp_dir.path())
        .arg("-o")
        .arg(&missing_output)
        .assert()
        .success()
        .stdout(predicates::str::contains("contagem_por_extensao"));

    assert!(!missing_output.exists());
}
