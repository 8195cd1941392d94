use ipnetwork::IpNetwork;

/*-------------------------------------------------------------------------------------------------
  Terraform Policy Rendering
-------------------------------------------------------------------------------------------------*/

// The two incapsula_policy resource blocks, split around the exception-list values array.
// Downstream tooling parses the heredoc bodies as JSON, so the structural shape (quoting,
// indentation, comma placement) must be preserved exactly.

const BLOCK_ALL_EXCEPT_HEAD: &str = r#"
resource "incapsula_policy" "acl_block_all_except_microsoft_ips" {
  name            = "Block ALL - Except Microsoft IPs"
  enabled         = true
  policy_type     = "ACL"
  policy_settings = <<POLICY
  [
    {
      "settingsAction": "BLOCK",
      "policySettingType": "IP",
      "data": {
        "ips": [
          "0.0.0.0-255.255.255.255"
        ]
      },
      "policyDataExceptions": [
        {
          "data": [
            {
              "exceptionType": "IP",
              "values": [
                "#;

const BLOCK_ALL_EXCEPT_TAIL: &str = r#"
              ]
            }
          ]
        }
      ]

    }
  ]
  POLICY
}
"#;

const BLOCK_ALL: &str = r#"
resource "incapsula_policy" "acl_block_all" {
  name            = "Block ALL"
  enabled         = true
  policy_type     = "ACL"
  policy_settings = <<POLICY
  [
    {
      "settingsAction": "BLOCK",
      "policySettingType": "IP",
      "data": {
        "ips": [
          "0.0.0.0-255.255.255.255"
        ]
      }
    }
  ]
  POLICY
}
"#;

// Continuation indent for the exception-list values array.
const VALUES_SEPARATOR: &str = ",\n                ";

/// Render the Terraform policy document for a list of allowed address prefixes.
///
/// The document contains two ACL policy resources: one that blocks all traffic except
/// the given prefixes (via an exception list) and one that unconditionally blocks all
/// traffic. The second block is emitted verbatim regardless of input.
pub fn acl_policies(prefixes: &[IpNetwork]) -> String {
    let values = prefixes
        .iter()
        .map(|prefix| format!("\"{}\"", prefix))
        .collect::<Vec<String>>()
        .join(VALUES_SEPARATOR);

    format!("{BLOCK_ALL_EXCEPT_HEAD}{values}{BLOCK_ALL_EXCEPT_TAIL}{BLOCK_ALL}")
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
