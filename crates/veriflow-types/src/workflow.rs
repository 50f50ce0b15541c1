//! Workflow definition types for veriflow.
//!
//! Defines the on-disk model for `verify.yml`: the six fixed phases, the
//! five step kinds, and the scalar-or-struct forms each kind accepts. The
//! definition is parsed once per run and read-only thereafter.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

/// One of the six fixed workflow phases.
///
/// Phases execute in the order of [`Phase::ORDER`], never reordered. A phase
/// absent from the definition is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Setup,
    Build,
    Start,
    Checks,
    Tests,
    Teardown,
}

impl Phase {
    /// All phases in fixed execution order.
    pub const ORDER: [Phase; 6] = [
        Phase::Setup,
        Phase::Build,
        Phase::Start,
        Phase::Checks,
        Phase::Tests,
        Phase::Teardown,
    ];

    /// Stable snake_case form, matching the YAML keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::Build => "build",
            Phase::Start => "start",
            Phase::Checks => "checks",
            Phase::Tests => "tests",
            Phase::Teardown => "teardown",
        }
    }

    /// Whether this is the cleanup phase excluded from the verdict.
    pub fn is_teardown(&self) -> bool {
        matches!(self, Phase::Teardown)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Step Spec
// ---------------------------------------------------------------------------

/// A single declarative step.
///
/// Externally tagged: a step object is a map with exactly one of the five
/// kind-keys present. Zero keys, multiple keys, or an unrecognized key fail
/// at parse time, before anything executes.
///
/// ```yaml
/// - run: npm install
/// - http:
///     url: http://localhost:3000/health
/// - port_open: 3000
/// - file_exists: [dist/index.js, package.json]
/// - env_var_set: DATABASE_URL
/// ```
#[derive(Debug, Clone)]
pub enum StepSpec {
    /// Shell command with exit-code expectations.
    Run(RunSpec),
    /// HTTP request with status/body expectations and retries.
    Http(HttpSpec),
    /// Existence check for one or more project-relative paths.
    FileExists(PathList),
    /// TCP connect poll against a host/port.
    PortOpen(PortSpec),
    /// Presence check for one or more environment variables.
    EnvVarSet(NameList),
}

impl StepSpec {
    /// The kind tag used for registry dispatch and result labels.
    pub fn kind(&self) -> StepKind {
        match self {
            StepSpec::Run(_) => StepKind::Run,
            StepSpec::Http(_) => StepKind::Http,
            StepSpec::FileExists(_) => StepKind::FileExists,
            StepSpec::PortOpen(_) => StepKind::PortOpen,
            StepSpec::EnvVarSet(_) => StepKind::EnvVarSet,
        }
    }
}

// Hand-written singleton-map form: `{ <kind-key>: <options> }`. The derived
// externally-tagged representation would use `!tag` YAML notation, which is
// not the documented format and is only accepted by serde_yaml_ng at nested
// positions, not at a document root.
impl Serialize for StepSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            StepSpec::Run(spec) => map.serialize_entry("run", spec)?,
            StepSpec::Http(spec) => map.serialize_entry("http", spec)?,
            StepSpec::FileExists(spec) => map.serialize_entry("file_exists", spec)?,
            StepSpec::PortOpen(spec) => map.serialize_entry("port_open", spec)?,
            StepSpec::EnvVarSet(spec) => map.serialize_entry("env_var_set", spec)?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StepSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct StepSpecVisitor;

        impl<'de> serde::de::Visitor<'de> for StepSpecVisitor {
            type Value = StepSpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map with exactly one step kind key")
            }

            fn visit_map<A>(self, mut map: A) -> Result<StepSpec, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let kind: StepKind = map
                    .next_key()?
                    .ok_or_else(|| serde::de::Error::invalid_length(0, &self))?;
                let step = match kind {
                    StepKind::Run => StepSpec::Run(map.next_value()?),
                    StepKind::Http => StepSpec::Http(map.next_value()?),
                    StepKind::FileExists => StepSpec::FileExists(map.next_value()?),
                    StepKind::PortOpen => StepSpec::PortOpen(map.next_value()?),
                    StepKind::EnvVarSet => StepSpec::EnvVarSet(map.next_value()?),
                };
                if map.next_key::<StepKind>()?.is_some() {
                    return Err(serde::de::Error::custom(
                        "step object must have exactly one kind key",
                    ));
                }
                Ok(step)
            }
        }

        deserializer.deserialize_map(StepSpecVisitor)
    }
}

/// The kind tag of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Run,
    Http,
    FileExists,
    PortOpen,
    EnvVarSet,
}

impl StepKind {
    /// Stable snake_case form, matching the YAML kind-keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Run => "run",
            StepKind::Http => "http",
            StepKind::FileExists => "file_exists",
            StepKind::PortOpen => "port_open",
            StepKind::EnvVarSet => "env_var_set",
        }
    }

    /// All step kinds, in no particular order.
    pub const ALL: [StepKind; 5] = [
        StepKind::Run,
        StepKind::Http,
        StepKind::FileExists,
        StepKind::PortOpen,
        StepKind::EnvVarSet,
    ];
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Run step options
// ---------------------------------------------------------------------------

/// Options for a `run` step: a bare command string or the full form.
///
/// ```yaml
/// run: npm install
/// ```
/// or
/// ```yaml
/// run:
///   command: npm run build
///   timeout_seconds: 600
///   expect_exit: 0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RunSpec {
    /// Bare command text with default timeout and exit expectations.
    Command(String),
    /// Full form with explicit options.
    Detailed {
        /// Shell command text.
        command: String,
        /// Wall-clock limit in seconds (default 300).
        #[serde(default = "default_run_timeout_seconds")]
        timeout_seconds: u64,
        /// Expected exit code (default 0).
        #[serde(default)]
        expect_exit: i32,
    },
}

impl RunSpec {
    /// The command text.
    pub fn command(&self) -> &str {
        match self {
            RunSpec::Command(command) => command,
            RunSpec::Detailed { command, .. } => command,
        }
    }

    /// Wall-clock limit for the command.
    pub fn timeout(&self) -> Duration {
        match self {
            RunSpec::Command(_) => Duration::from_secs(default_run_timeout_seconds()),
            RunSpec::Detailed {
                timeout_seconds, ..
            } => Duration::from_secs(*timeout_seconds),
        }
    }

    /// Expected exit code.
    pub fn expect_exit(&self) -> i32 {
        match self {
            RunSpec::Command(_) => 0,
            RunSpec::Detailed { expect_exit, .. } => *expect_exit,
        }
    }
}

fn default_run_timeout_seconds() -> u64 {
    300
}

// ---------------------------------------------------------------------------
// HTTP step options
// ---------------------------------------------------------------------------

/// Options for an `http` probe step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSpec {
    /// Target URL.
    pub url: String,
    /// HTTP method (default GET).
    #[serde(default = "default_http_method")]
    pub method: String,
    /// Request headers, applied verbatim.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    /// Optional JSON body, sent with `Content-Type: application/json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// Acceptable response status code(s) (default 200).
    #[serde(default = "default_expect_status")]
    pub expect_status: StatusSet,
    /// Substrings that must all appear in the response body.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expect_body_contains: Vec<String>,
    /// Per-attempt timeout in seconds (default 30), independent of retries.
    #[serde(default = "default_http_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Total attempts before giving up on network-level failures (default 3).
    #[serde(default = "default_http_retries")]
    pub retries: u32,
}

impl HttpSpec {
    /// Per-attempt timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn default_http_method() -> String {
    "GET".to_string()
}

fn default_http_timeout_seconds() -> u64 {
    30
}

fn default_http_retries() -> u32 {
    3
}

fn default_expect_status() -> StatusSet {
    StatusSet::One(200)
}

/// One acceptable status code or a set of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusSet {
    One(u16),
    Many(Vec<u16>),
}

impl StatusSet {
    /// Whether `status` is in the accepted set.
    pub fn matches(&self, status: u16) -> bool {
        match self {
            StatusSet::One(code) => *code == status,
            StatusSet::Many(codes) => codes.contains(&status),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, StatusSet::Many(codes) if codes.is_empty())
    }
}

impl fmt::Display for StatusSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusSet::One(code) => write!(f, "{code}"),
            StatusSet::Many(codes) => {
                let joined = codes
                    .iter()
                    .map(u16::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{joined}]")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Port step options
// ---------------------------------------------------------------------------

/// Options for a `port_open` step: a bare port number or the full form.
///
/// ```yaml
/// port_open: 3000
/// ```
/// or
/// ```yaml
/// port_open:
///   port: 5432
///   host: db.internal
///   timeout_seconds: 60
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PortSpec {
    /// Bare port on localhost with the default window.
    Port(u16),
    /// Full form with explicit host and timeout.
    Detailed {
        port: u16,
        #[serde(default = "default_port_host")]
        host: String,
        /// Overall polling window in seconds (default 30).
        #[serde(default = "default_port_timeout_seconds")]
        timeout_seconds: u64,
    },
}

impl PortSpec {
    pub fn port(&self) -> u16 {
        match self {
            PortSpec::Port(port) => *port,
            PortSpec::Detailed { port, .. } => *port,
        }
    }

    pub fn host(&self) -> &str {
        match self {
            PortSpec::Port(_) => "localhost",
            PortSpec::Detailed { host, .. } => host,
        }
    }

    /// Overall polling window.
    pub fn timeout(&self) -> Duration {
        match self {
            PortSpec::Port(_) => Duration::from_secs(default_port_timeout_seconds()),
            PortSpec::Detailed {
                timeout_seconds, ..
            } => Duration::from_secs(*timeout_seconds),
        }
    }
}

fn default_port_host() -> String {
    "localhost".to_string()
}

fn default_port_timeout_seconds() -> u64 {
    30
}

// ---------------------------------------------------------------------------
// Path / name lists (scalar-or-list forms)
// ---------------------------------------------------------------------------

/// One path or a list of paths, relative to the project directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathList {
    One(String),
    Many(Vec<String>),
}

impl PathList {
    /// Declared paths in order.
    pub fn paths(&self) -> &[String] {
        match self {
            PathList::One(path) => std::slice::from_ref(path),
            PathList::Many(paths) => paths,
        }
    }
}

/// One environment variable name or a list of names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameList {
    One(String),
    Many(Vec<String>),
}

impl NameList {
    /// Declared names in order.
    pub fn names(&self) -> &[String] {
        match self {
            NameList::One(name) => std::slice::from_ref(name),
            NameList::Many(names) => names,
        }
    }
}

// ---------------------------------------------------------------------------
// Workflow Definition
// ---------------------------------------------------------------------------

/// The steps of one phase. Accepts a single step object or a list of them;
/// a bare phase key with no value parses as empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StepList(pub Vec<StepSpec>);

impl StepList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[StepSpec] {
        &self.0
    }
}

impl<'de> Deserialize<'de> for StepList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            One(StepSpec),
            Many(Vec<StepSpec>),
        }

        let steps = match Option::<OneOrMany>::deserialize(deserializer)? {
            None => Vec::new(),
            Some(OneOrMany::One(step)) => vec![step],
            Some(OneOrMany::Many(steps)) => steps,
        };
        Ok(StepList(steps))
    }
}

/// The parsed `verify.yml`: one optional step list per phase.
///
/// Top-level keys are exactly the six phase names; anything else is a parse
/// error. Step position within a phase is significant -- steps execute in
/// declared order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkflowDefinition {
    #[serde(default, skip_serializing_if = "StepList::is_empty")]
    pub setup: StepList,
    #[serde(default, skip_serializing_if = "StepList::is_empty")]
    pub build: StepList,
    #[serde(default, skip_serializing_if = "StepList::is_empty")]
    pub start: StepList,
    #[serde(default, skip_serializing_if = "StepList::is_empty")]
    pub checks: StepList,
    #[serde(default, skip_serializing_if = "StepList::is_empty")]
    pub tests: StepList,
    #[serde(default, skip_serializing_if = "StepList::is_empty")]
    pub teardown: StepList,
}

impl WorkflowDefinition {
    /// Steps declared for `phase`; empty slice if the phase is absent.
    pub fn steps(&self, phase: Phase) -> &[StepSpec] {
        match phase {
            Phase::Setup => self.setup.as_slice(),
            Phase::Build => self.build.as_slice(),
            Phase::Start => self.start.as_slice(),
            Phase::Checks => self.checks.as_slice(),
            Phase::Tests => self.tests.as_slice(),
            Phase::Teardown => self.teardown.as_slice(),
        }
    }

    /// Total number of declared steps across all phases.
    pub fn step_count(&self) -> usize {
        Phase::ORDER.iter().map(|p| self.steps(*p).len()).sum()
    }

    /// Whether the definition declares any teardown steps.
    pub fn has_teardown(&self) -> bool {
        !self.teardown.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Realistic definition exercising every step kind and both one-or-many
    /// forms.
    const FULL_YAML: &str = r#"
setup:
  - run: npm install
build:
  run:
    command: npm run build
    timeout_seconds: 600
start:
  - run: "nohup npm start &"
  - port_open: 3000
checks:
  - http:
      url: http://localhost:3000/health
      expect_status: [200, 204]
      expect_body_contains: ["ok"]
      retries: 5
  - file_exists: [dist/index.js, package.json]
  - env_var_set: DATABASE_URL
tests:
  - run:
      command: npm test
      expect_exit: 0
teardown:
  - run: pkill -f "npm start"
"#;

    // -----------------------------------------------------------------------
    // Full definition parse
    // -----------------------------------------------------------------------

    #[test]
    fn test_parse_full_definition() {
        let def: WorkflowDefinition = serde_yaml_ng::from_str(FULL_YAML).expect("parse");
        assert_eq!(def.setup.len(), 1);
        assert_eq!(def.build.len(), 1);
        assert_eq!(def.start.len(), 2);
        assert_eq!(def.checks.len(), 3);
        assert_eq!(def.tests.len(), 1);
        assert_eq!(def.teardown.len(), 1);
        assert_eq!(def.step_count(), 9);
        assert!(def.has_teardown());
    }

    #[test]
    fn test_parse_single_step_phase_form() {
        // `build` above is a single step object, not a list.
        let def: WorkflowDefinition = serde_yaml_ng::from_str(FULL_YAML).expect("parse");
        let step = &def.steps(Phase::Build)[0];
        assert_eq!(step.kind(), StepKind::Run);
        match step {
            StepSpec::Run(run) => {
                assert_eq!(run.command(), "npm run build");
                assert_eq!(run.timeout(), Duration::from_secs(600));
                assert_eq!(run.expect_exit(), 0);
            }
            other => panic!("expected run step, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_phase_key_parses_as_empty() {
        let def: WorkflowDefinition =
            serde_yaml_ng::from_str("teardown:\n").expect("parse bare key");
        assert!(def.teardown.is_empty());
        assert!(!def.has_teardown());
        assert_eq!(def.step_count(), 0);
    }

    #[test]
    fn test_unknown_phase_key_is_rejected() {
        let yaml = "deploy:\n  - run: echo hi\n";
        assert!(serde_yaml_ng::from_str::<WorkflowDefinition>(yaml).is_err());
    }

    #[test]
    fn test_unknown_step_kind_is_rejected() {
        let yaml = "checks:\n  - shell: echo hi\n";
        assert!(serde_yaml_ng::from_str::<WorkflowDefinition>(yaml).is_err());
    }

    #[test]
    fn test_step_with_two_kind_keys_is_rejected() {
        let yaml = "checks:\n  - run: echo hi\n    port_open: 3000\n";
        assert!(serde_yaml_ng::from_str::<WorkflowDefinition>(yaml).is_err());
    }

    #[test]
    fn test_definition_yaml_roundtrip() {
        let def: WorkflowDefinition = serde_yaml_ng::from_str(FULL_YAML).expect("parse");
        let yaml = serde_yaml_ng::to_string(&def).expect("serialize");
        let reparsed: WorkflowDefinition = serde_yaml_ng::from_str(&yaml).expect("reparse");
        assert_eq!(reparsed.step_count(), def.step_count());
        assert_eq!(reparsed.checks.len(), 3);
    }

    // -----------------------------------------------------------------------
    // Run options
    // -----------------------------------------------------------------------

    #[test]
    fn test_run_spec_bare_string_defaults() {
        let run: RunSpec = serde_yaml_ng::from_str("npm install").expect("parse");
        assert_eq!(run.command(), "npm install");
        assert_eq!(run.timeout(), Duration::from_secs(300));
        assert_eq!(run.expect_exit(), 0);
    }

    #[test]
    fn test_run_spec_detailed_expect_exit() {
        let yaml = "command: grep missing file.txt\nexpect_exit: 1\n";
        let run: RunSpec = serde_yaml_ng::from_str(yaml).expect("parse");
        assert_eq!(run.expect_exit(), 1);
        assert_eq!(run.timeout(), Duration::from_secs(300));
    }

    // -----------------------------------------------------------------------
    // HTTP options
    // -----------------------------------------------------------------------

    #[test]
    fn test_http_spec_defaults() {
        let http: HttpSpec =
            serde_yaml_ng::from_str("url: http://localhost:8080/\n").expect("parse");
        assert_eq!(http.method, "GET");
        assert!(http.headers.is_empty());
        assert!(http.body.is_none());
        assert!(http.expect_status.matches(200));
        assert!(!http.expect_status.matches(201));
        assert!(http.expect_body_contains.is_empty());
        assert_eq!(http.timeout_seconds, 30);
        assert_eq!(http.retries, 3);
    }

    #[test]
    fn test_http_spec_json_body() {
        let yaml = r#"
url: http://localhost:8080/login
method: POST
headers:
  X-Request-Id: abc123
body:
  user: admin
  attempts: 2
"#;
        let http: HttpSpec = serde_yaml_ng::from_str(yaml).expect("parse");
        assert_eq!(http.method, "POST");
        assert_eq!(http.headers["X-Request-Id"], "abc123");
        let body = http.body.expect("body");
        assert_eq!(body["user"], "admin");
        assert_eq!(body["attempts"], 2);
    }

    #[test]
    fn test_status_set_matching() {
        assert!(StatusSet::One(200).matches(200));
        assert!(!StatusSet::One(200).matches(404));
        let many = StatusSet::Many(vec![200, 204, 301]);
        assert!(many.matches(204));
        assert!(!many.matches(500));
        assert_eq!(many.to_string(), "[200, 204, 301]");
        assert_eq!(StatusSet::One(418).to_string(), "418");
    }

    // -----------------------------------------------------------------------
    // Port options
    // -----------------------------------------------------------------------

    #[test]
    fn test_port_spec_bare_defaults() {
        let port: PortSpec = serde_yaml_ng::from_str("3000").expect("parse");
        assert_eq!(port.port(), 3000);
        assert_eq!(port.host(), "localhost");
        assert_eq!(port.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_port_spec_detailed() {
        let yaml = "port: 5432\nhost: db.internal\ntimeout_seconds: 60\n";
        let port: PortSpec = serde_yaml_ng::from_str(yaml).expect("parse");
        assert_eq!(port.port(), 5432);
        assert_eq!(port.host(), "db.internal");
        assert_eq!(port.timeout(), Duration::from_secs(60));
    }

    // -----------------------------------------------------------------------
    // Scalar-or-list forms
    // -----------------------------------------------------------------------

    #[test]
    fn test_path_list_one_or_many() {
        let one: PathList = serde_yaml_ng::from_str("dist/index.js").expect("parse");
        assert_eq!(one.paths(), ["dist/index.js".to_string()]);

        let many: PathList = serde_yaml_ng::from_str("[a.txt, b.txt]").expect("parse");
        assert_eq!(many.paths().len(), 2);
        assert_eq!(many.paths()[1], "b.txt");
    }

    #[test]
    fn test_name_list_one_or_many() {
        let one: NameList = serde_yaml_ng::from_str("DATABASE_URL").expect("parse");
        assert_eq!(one.names(), ["DATABASE_URL".to_string()]);

        let many: NameList = serde_yaml_ng::from_str("[HOME, PATH]").expect("parse");
        assert_eq!(many.names().len(), 2);
    }

    // -----------------------------------------------------------------------
    // Phase / kind tags
    // -----------------------------------------------------------------------

    #[test]
    fn test_phase_order_is_fixed() {
        let names: Vec<&str> = Phase::ORDER.iter().map(|p| p.as_str()).collect();
        assert_eq!(
            names,
            ["setup", "build", "start", "checks", "tests", "teardown"]
        );
        assert!(Phase::Teardown.is_teardown());
        assert!(!Phase::Checks.is_teardown());
    }

    #[test]
    fn test_step_kind_tags() {
        let def: WorkflowDefinition = serde_yaml_ng::from_str(FULL_YAML).expect("parse");
        let kinds: Vec<StepKind> = def.steps(Phase::Checks).iter().map(StepSpec::kind).collect();
        assert_eq!(
            kinds,
            [StepKind::Http, StepKind::FileExists, StepKind::EnvVarSet]
        );
        assert_eq!(StepKind::PortOpen.as_str(), "port_open");
        assert_eq!(StepKind::EnvVarSet.to_string(), "env_var_set");
    }
}
