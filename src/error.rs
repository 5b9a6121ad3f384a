use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("write failed: {0}")]
    Output(#[from] std::io::Error),
    #[error("unknown example `{0}`; run `poitune examples` for the list")]
    UnknownExample(String),
    #[error("no share string in `{0}`")]
    MissingParam(String),
    #[error("invalid share string: {0}")]
    Codec(#[from] share::CodecError),
    #[error(transparent)]
    Preset(#[from] share::PresetError),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
