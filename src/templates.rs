//! Template bodies compiled into the binary.

/// Embedded templates as `(name, source)` pairs.
pub const EMBEDDED: [(&str, &str); 5] = [
    ("main.j2", include_str!("../templates/main.j2")),
    ("config.j2", include_str!("../templates/config.j2")),
    ("logs.j2", include_str!("../templates/logs.j2")),
    ("project.j2", include_str!("../templates/project.j2")),
    ("taskfile.j2", include_str!("../templates/taskfile.j2")),
];

/// Returns the embedded source of a template.
pub fn embedded(name: &str) -> Option<&'static str> {
    EMBEDDED.iter().find(|(candidate, _)| *candidate == name).map(|(_, source)| *source)
}
