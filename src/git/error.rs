//! Interpreting git2 errors into user-facing reasons

use git2::ErrorClass;

/// Interpret a git2 error and provide a more user-friendly message
pub fn interpret_git_error(err: &git2::Error) -> String {
    let class = err.class();
    let message = err.message().to_lowercase();

    // Order matters: more specific patterns first. "too many redirects" and
    // "authentication replays" usually mean the repository does not exist
    // but the server is asking for credentials anyway.
    if message.contains("not found")
        || message.contains("404")
        || message.contains("too many redirects")
        || message.contains("authentication replays")
    {
        "Repository not found".to_string()
    } else if message.contains("authentication") || message.contains("credentials") {
        "Authentication failed".to_string()
    } else if message.contains("permission denied") || message.contains("access denied") {
        "Permission denied".to_string()
    } else if message.contains("connection")
        || message.contains("network")
        || message.contains("timed out")
        || message.contains("timeout")
    {
        "Network error".to_string()
    } else if class == ErrorClass::Http {
        if message.contains("certificate") {
            "Certificate error".to_string()
        } else if message.contains("ssl") {
            "SSL error".to_string()
        } else {
            format!("HTTP error: {}", err.message())
        }
    } else if class == ErrorClass::Ssh {
        format!("SSH error: {}", err.message())
    } else {
        err.message().to_string()
    }
}
