use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const MESSAGE: &str = "UNH+1+DELFOR:D:97A:UN'BGM+351+ORDER123'DTM+137:240301:102'\
NAD+SU+VENDOR1:91'NAD+SF+PLANT7'LIN+1++EAN001:SRV'QTY+79:100'SCC+4'\
DTM+158:240301'QTY+3:50'UNT+10+1'";

fn cargo_bin() -> PathBuf {
    if let Ok(path) = env::var("CARGO_BIN_EXE_delfor") {
        return PathBuf::from(path);
    }

    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| repo_root().join("target"));
    let executable_name = format!("delfor{}", std::env::consts::EXE_SUFFIX);
    let fallback = target_dir.join("debug").join(executable_name);

    if fallback.exists() {
        return fallback;
    }

    panic!(
        "CARGO_BIN_EXE_delfor is not set and fallback binary was not found at {}",
        fallback.display()
    );
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(cargo_bin())
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to execute delfor")
}

fn write_message(dir: &Path) -> PathBuf {
    let path = dir.join("delfor.edi");
    fs::write(&path, MESSAGE).expect("message should be writable");
    path
}

#[test]
fn convert_writes_default_xml_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_message(dir.path());

    let output = run_in(dir.path(), &["convert", input.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Conversion summary: article_lines=1, demand_lines=1"));

    let xml = fs::read(dir.path().join("delforoutput.xml"))?;
    let xml = String::from_utf8_lossy(&xml);
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>"));
    assert!(xml.contains("<MESSAGE_ID>ORDER123</MESSAGE_ID>"));
    assert!(xml.contains("<VALID_FROM>24-03-01T00:00:00</VALID_FROM>"));
    assert!(xml.contains("<EAN_CODE>EAN001</EAN_CODE>"));
    assert!(xml.contains("<CUMULATIVE_QUANTITY_DUE>50</CUMULATIVE_QUANTITY_DUE>"));
    Ok(())
}

#[test]
fn convert_to_explicit_path_with_options() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_message(dir.path());
    let target = dir.path().join("schedule.xml");

    let output = run_in(
        dir.path(),
        &[
            "convert",
            input.to_str().unwrap(),
            "-o",
            target.to_str().unwrap(),
            "--encoding",
            "utf-8",
            "--indent",
            "0",
        ],
    );
    assert!(output.status.success());

    let xml = fs::read_to_string(&target)?;
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?><SCHEDULES>"));
    assert!(!dir.path().join("delforoutput.xml").exists());
    Ok(())
}

#[test]
fn convert_json_to_stdout() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_message(dir.path());

    let output = run_in(
        dir.path(),
        &["convert", input.to_str().unwrap(), "--format", "json", "-o", "-"],
    );
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["metadata"]["doc_type"], "DELFOR");
    assert_eq!(json["metadata"]["message_refs"][0], "ORDER123");
    assert_eq!(json["root"]["name"], "SCHEDULES");
    assert!(json["metadata"]["created_at"].is_string());
    Ok(())
}

#[test]
fn missing_input_exits_with_failure() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    let output = run_in(dir.path(), &["convert", "does-not-exist.edi"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR:"));
    assert!(stderr.contains("does-not-exist.edi"));
    assert!(!dir.path().join("delforoutput.xml").exists());
    Ok(())
}

#[test]
fn invalid_config_exits_with_config_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_message(dir.path());
    let config = dir.path().join("delfor.yaml");
    fs::write(&config, "output:\n  colour: blue\n")?;

    let output = run_in(
        dir.path(),
        &["--config", config.to_str().unwrap(), "convert", input.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERROR:"));
    Ok(())
}

#[test]
fn clashing_separators_exit_with_config_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write_message(dir.path());
    let config = dir.path().join("delfor.yaml");
    fs::write(&config, "separators:\n  element: \"'\"\n")?;

    let output = run_in(
        dir.path(),
        &["--config", config.to_str().unwrap(), "convert", input.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(3));
    Ok(())
}

#[test]
fn config_selects_separators_and_format() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("custom.edi");
    fs::write(&input, "BGM*351*ORDER9~LIN*1**EAN9>SRV~QTY*79>7~")?;
    let config = dir.path().join("delfor.yaml");
    fs::write(
        &config,
        "separators:\n  segment: \"~\"\n  element: \"*\"\n  component: \">\"\n\
         output:\n  format: json\n",
    )?;

    let output = run_in(
        dir.path(),
        &["--config", config.to_str().unwrap(), "convert", input.to_str().unwrap()],
    );
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("delforoutput.json"))?)?;
    assert_eq!(json["metadata"]["message_refs"][0], "ORDER9");
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("Conversion summary: article_lines=1, demand_lines=0")
    );
    Ok(())
}
