use crate::error::Result;
use crate::model::FileRecord;
use crate::store::FileStore;

pub fn run<S: FileStore>(store: &S, id: &str) -> Result<FileRecord> {
    store.get_file(id)
}
