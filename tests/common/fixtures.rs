//! Test fixtures - reusable content constants for tests.

/// Values file with a root image section
pub const ROOT_VALUES: &str = r#"replicaCount: 2
image:
  repository: repo/test
  tag: "1.0.0"
  pullPolicy: IfNotPresent
service:
  type: ClusterIP
  port: 80
"#;

/// Values file where images live under subchart keys
pub const SUBCHART_VALUES: &str = r#"global:
  env: staging
sub:
  image:
    repository: r
    tag: t
other:
  image:
    repository: o
    tag: ot
"#;

/// Values file without any image section
pub const NO_IMAGE_VALUES: &str = r#"replicaCount: 1
service:
  port: 8080
"#;

/// A Chart.yaml
pub const CHART: &str = r#"apiVersion: v2
name: api
description: A Helm chart for the API
type: application
version: 0.1.0
appVersion: "1.0.0"
"#;

/// A Chart.yaml that lacks appVersion
pub const CHART_WITHOUT_APP_VERSION: &str = r#"apiVersion: v2
name: library
type: library
version: 0.1.0
"#;
