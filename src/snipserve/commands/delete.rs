use crate::error::Result;
use crate::model::FileRecord;
use crate::store::FileStore;

pub fn run<S: FileStore>(store: &mut S, id: &str) -> Result<FileRecord> {
    store.delete_file(id)
}
