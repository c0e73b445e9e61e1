use web_sys::File;

use super::commands::EditorCommand;
use super::pipeline::IngestError;

/// Which entry point produced a batch of files. The pipeline treats them
/// identically; only the rejection behavior differs (a directly-picked
/// non-image file earns a notice, stray items in a paste or drop do not).
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AcquireSource {
    Picker,
    Paste,
    Drop,
}

pub enum Msg {
    Input,
    Exec(EditorCommand),
    InsertLink,
    OpenFilePicker,
    Acquire { files: Vec<File>, source: AcquireSource },
    PumpQueue,
    IngestFinished { id: String, file: File, preview_url: String },
    IngestFailed { id: String, error: IngestError },
    IngestTimedOut { id: String },
}
