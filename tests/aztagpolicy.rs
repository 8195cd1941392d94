use assert_cmd::Command;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread;

/*-------------------------------------------------------------------------------------------------
  aztagpolicy Binary Tests
-------------------------------------------------------------------------------------------------*/

const DATASET: &str = r#"{
  "changeNumber": 342,
  "cloud": "Public",
  "values": [
    {
      "name": "AzureActiveDirectory.ServiceEndpoint",
      "id": "AzureActiveDirectory.ServiceEndpoint",
      "properties": { "addressPrefixes": ["1.2.3.0/24", "4.5.6.0/24"] }
    },
    {
      "name": "Storage",
      "id": "Storage",
      "properties": { "addressPrefixes": ["10.0.0.0/8"] }
    },
    {
      "name": "Storage",
      "id": "Storage.WestUS",
      "properties": { "region": "westus", "addressPrefixes": ["2603:1000::/40"] }
    }
  ]
}"#;

/// Write the test dataset into ./scratch and return its path.
fn dataset_file(test_name: &str) -> PathBuf {
    let path: PathBuf = [".", "scratch", &format!("{test_name}_dataset.json")]
        .iter()
        .collect();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, DATASET).unwrap();
    path
}

fn output_file(test_name: &str) -> PathBuf {
    [".", "scratch", &format!("{test_name}_main.tf")]
        .iter()
        .collect()
}

fn command() -> Command {
    Command::cargo_bin("aztagpolicy").unwrap()
}

/*--------------------------------------------------------------------------------------
  Version and Help
--------------------------------------------------------------------------------------*/

#[test]
fn command_version() {
    command().arg("--version").assert().success();
}

#[test]
fn command_help() {
    command().arg("--help").assert().success();
}

/*--------------------------------------------------------------------------------------
  Generate a Policy Document from a Dataset File
--------------------------------------------------------------------------------------*/

#[test]
fn command_generate_policy_document() {
    let dataset = dataset_file("command_generate_policy_document");
    let output = output_file("command_generate_policy_document");

    command()
        .arg("AzureActiveDirectory.ServiceEndpoint")
        .arg("--dataset-file")
        .arg(&dataset)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let document = fs::read_to_string(&output).unwrap();

    // Exception-list values: quoted, comma-joined, original order and whitespace
    assert!(document.contains("\"1.2.3.0/24\",\n                \"4.5.6.0/24\""));

    // Both policy resources are present
    assert!(document
        .contains(r#"resource "incapsula_policy" "acl_block_all_except_microsoft_ips" {"#));
    assert!(document.contains(r#"resource "incapsula_policy" "acl_block_all" {"#));
}

/*--------------------------------------------------------------------------------------
  No Match - Distinct Exit Code, No Output File
--------------------------------------------------------------------------------------*/

#[test]
fn command_no_match_exits_without_writing() {
    let dataset = dataset_file("command_no_match_exits_without_writing");
    let output = output_file("command_no_match_exits_without_writing");
    let _ = fs::remove_file(&output);

    command()
        .arg("DoesNotExist")
        .arg("--dataset-file")
        .arg(&dataset)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .code(7);

    assert!(!Path::new(&output).exists());
}

/*--------------------------------------------------------------------------------------
  Multiple Matches
--------------------------------------------------------------------------------------*/

#[test]
fn command_multiple_matches_uses_first_by_default() {
    let dataset = dataset_file("command_multiple_matches_uses_first_by_default");
    let output = output_file("command_multiple_matches_uses_first_by_default");

    command()
        .arg("Storage")
        .arg("--dataset-file")
        .arg(&dataset)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let document = fs::read_to_string(&output).unwrap();
    assert!(document.contains("\"10.0.0.0/8\""));
    assert!(!document.contains("2603:1000::/40"));
}

#[test]
fn command_multiple_matches_error_flag() {
    let dataset = dataset_file("command_multiple_matches_error_flag");
    let output = output_file("command_multiple_matches_error_flag");
    let _ = fs::remove_file(&output);

    command()
        .arg("Storage")
        .arg("--dataset-file")
        .arg(&dataset)
        .arg("--output")
        .arg(&output)
        .arg("--error-on-multiple-matches")
        .assert()
        .failure()
        .code(8);

    assert!(!Path::new(&output).exists());
}

/*--------------------------------------------------------------------------------------
  List Tags
--------------------------------------------------------------------------------------*/

#[test]
fn command_list_tags() {
    let dataset = dataset_file("command_list_tags");

    let assert = command()
        .arg("--list-tags")
        .arg("--dataset-file")
        .arg(&dataset)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("AzureActiveDirectory.ServiceEndpoint"));
    assert!(stdout.contains("Storage"));
}

/*--------------------------------------------------------------------------------------
  Invalid Dataset
--------------------------------------------------------------------------------------*/

#[test]
fn command_invalid_json_dataset() {
    let path: PathBuf = [".", "scratch", "command_invalid_json_dataset.json"]
        .iter()
        .collect();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ not json").unwrap();

    command()
        .arg("Storage")
        .arg("--dataset-file")
        .arg(&path)
        .assert()
        .failure()
        .code(5);
}

#[test]
fn command_dataset_missing_values() {
    let path: PathBuf = [".", "scratch", "command_dataset_missing_values.json"]
        .iter()
        .collect();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, r#"{"changeNumber": 1}"#).unwrap();

    command()
        .arg("Storage")
        .arg("--dataset-file")
        .arg(&path)
        .assert()
        .failure()
        .code(6);
}

/*--------------------------------------------------------------------------------------
  HTTP Status Error - Distinct Exit Code, No Output File
--------------------------------------------------------------------------------------*/

#[test]
fn command_http_status_error_exits_without_writing() {
    // Local listener that answers the confirmation-page request with a 404
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let server = thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
            );
        }
    });

    let output = output_file("command_http_status_error_exits_without_writing");
    let _ = fs::remove_file(&output);

    command()
        .arg("Storage")
        .arg("--url")
        .arg(format!("http://{addr}/"))
        .arg("--timeout")
        .arg("5")
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .code(3);

    server.join().unwrap();
    assert!(!Path::new(&output).exists());
}

/*--------------------------------------------------------------------------------------
  Summary Output
--------------------------------------------------------------------------------------*/

#[test]
fn command_summary() {
    let dataset = dataset_file("command_summary");
    let output = output_file("command_summary");

    let assert = command()
        .arg("AzureActiveDirectory.ServiceEndpoint")
        .arg("--dataset-file")
        .arg(&dataset)
        .arg("--output")
        .arg(&output)
        .arg("--summary")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("1.2.3.0/24"));
    assert!(stdout.contains("Address Prefixes"));
}
