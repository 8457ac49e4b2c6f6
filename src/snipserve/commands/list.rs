use crate::error::Result;
use crate::model::FileRecord;
use crate::store::FileStore;

pub fn run<S: FileStore>(store: &S) -> Result<Vec<FileRecord>> {
    store.list_files()
}
