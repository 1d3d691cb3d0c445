/// Shared helpers for unit tests (test builds only)

use std::sync::{Arc, Mutex};

use crate::log::{Logger, LogEntry, LogSeverity};
use crate::runtime::Sandbox;

/// Logger that captures every entry for later assertions
pub struct CapturingLogger {
    pub entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CapturingLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

/// Install a capturing logger and return the shared entry list
///
/// Callers must be `#[serial]`: the logger slot is process-wide.
pub fn capture_logs() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Sandbox::set_logger(CapturingLogger { entries: entries.clone() });
    entries
}

/// Count captured entries at the given severity
pub fn count_severity(entries: &Arc<Mutex<Vec<LogEntry>>>, severity: LogSeverity) -> usize {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.severity == severity)
        .count()
}

/// Lit-object vertex stage: writes `FragPos` and `Normal`
pub const LIT_VERTEX_SOURCE: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec3 aNormal;
out vec3 FragPos;
out vec3 Normal;
uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;
void main() {
    FragPos = vec3(model * vec4(aPos, 1.0));
    Normal = aNormal;
    gl_Position = projection * view * vec4(FragPos, 1.0);
}
";

/// Lit-object fragment stage matching `LIT_VERTEX_SOURCE`
pub const LIT_FRAGMENT_SOURCE: &str = "#version 330 core
in vec3 FragPos;
in vec3 Normal;
out vec4 FragColor;
uniform vec3 viewPos;
uniform vec3 objectColor;
uniform float ambientStrength;
uniform bool useLighting;
uniform int mode;
void main() {
    vec3 viewDir = normalize(viewPos - FragPos);
    float diff = max(dot(normalize(Normal), viewDir), 0.0);
    FragColor = vec4(objectColor * (ambientStrength + diff), 1.0);
}
";
