pub mod decode;
pub mod dump;
pub mod encode;
pub mod layouts;
pub mod report;


use datastore_core::EntryRefError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Ref(#[from] EntryRefError),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Print `output`, or report the error and exit with status 1.
pub fn emit(output: Result<String, CommandError>) {
    match output {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
