use crate::rules;

const SEPARATOR: &str = "============================================================";

const TITLE: &str = "Firestore security rules setup";
const INSTRUCTION_LABEL: &str = "Copy the rules below into the Firebase console:";
const STEPS_HEADER: &str = "How to apply:";
const COMPLETION_NOTICE: &str = "Rules published? Restart the app to pick them up.";

/// Manual steps the operator performs in the Firebase web console.
const MANUAL_STEPS: [&str; 6] = [
    "Open the Firebase console: https://console.firebase.google.com/",
    "Select your project",
    "Click \"Firestore Database\" in the left-hand menu",
    "Open the \"Rules\" tab",
    "Paste the rules copied above",
    "Click \"Publish\"",
];

/// Render the full console report. The rules block between the instruction
/// label and the following separator is the exact text persisted to disk.
pub fn render_report() -> String {
    let mut lines: Vec<String> = vec![
        SEPARATOR.to_string(),
        TITLE.to_string(),
        String::new(),
        INSTRUCTION_LABEL.to_string(),
        String::new(),
        rules::DEV_RULES.to_string(),
        String::new(),
        SEPARATOR.to_string(),
        STEPS_HEADER.to_string(),
        SEPARATOR.to_string(),
    ];
    for (i, step) in MANUAL_STEPS.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, step));
    }
    lines.push(String::new());
    lines.push(COMPLETION_NOTICE.to_string());
    lines.push(SEPARATOR.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn confirmation(file: &str) -> String {
    format!("\nsaved rules to {}\n\n", file)
}
